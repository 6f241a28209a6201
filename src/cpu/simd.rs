//! Lane-wise SIMD scale kernels with runtime feature detection.
//!
//! AVX2 (8 × f32 lanes) on x86_64 and NEON (4 × f32 lanes) on aarch64.
//! Buffer lengths that do not fill a whole lane are finished by an explicit
//! scalar tail loop — the remainder is never padded. Platforms without a
//! supported vector unit fall back to the scalar kernel.
#![allow(unsafe_op_in_unsafe_fn)]

use crate::cpu::scalar::scale_in_place;
use rayon::prelude::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Number of f32 elements processed per vector instruction on the active
/// path. Returns 1 when no vector unit is available.
pub fn lane_width() -> usize {
    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("avx2") {
        return 8;
    }
    #[cfg(target_arch = "aarch64")]
    if std::arch::is_aarch64_feature_detected!("neon") {
        return 4;
    }
    1
}

/// Multiply every element by `scale` using whole-lane vector multiplies,
/// with a scalar loop for the tail.
pub fn simd_scale_in_place(data: &mut [f32], scale: f32) {
    #[cfg(target_arch = "x86_64")]
    if is_x86_feature_detected!("avx2") {
        // Safety: AVX2 presence checked above.
        unsafe { scale_avx2(data, scale) };
        return;
    }
    #[cfg(target_arch = "aarch64")]
    if std::arch::is_aarch64_feature_detected!("neon") {
        // Safety: NEON presence checked above.
        unsafe { scale_neon(data, scale) };
        return;
    }
    scale_in_place(data, scale);
}

/// Parallel SIMD scale: lane-aligned contiguous chunks distributed across
/// the rayon pool, each worker running the vector kernel over its run. Only
/// the final chunk can carry a scalar tail.
pub fn par_simd_scale_in_place(data: &mut [f32], scale: f32) {
    let chunk = par_chunk_size(data.len(), lane_width());
    data.par_chunks_mut(chunk).for_each(|c| simd_scale_in_place(c, scale));
}

/// A few chunks per worker, rounded up to a whole number of lanes so chunk
/// boundaries never split a lane.
fn par_chunk_size(len: usize, lanes: usize) -> usize {
    let threads = rayon::current_num_threads().max(1);
    let raw = len.div_ceil(threads * 4).max(lanes);
    raw.div_ceil(lanes) * lanes
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn scale_avx2(data: &mut [f32], scale: f32) {
    let s = _mm256_set1_ps(scale);
    let lanes = data.len() / 8;
    let ptr = data.as_mut_ptr();
    for i in 0..lanes {
        let p = ptr.add(i * 8);
        _mm256_storeu_ps(p, _mm256_mul_ps(_mm256_loadu_ps(p), s));
    }
    for v in &mut data[lanes * 8..] {
        *v *= scale;
    }
}

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn scale_neon(data: &mut [f32], scale: f32) {
    let lanes = data.len() / 4;
    let ptr = data.as_mut_ptr();
    for i in 0..lanes {
        let p = ptr.add(i * 4);
        vst1q_f32(p, vmulq_n_f32(vld1q_f32(p), scale));
    }
    for v in &mut data[lanes * 4..] {
        *v *= scale;
    }
}
