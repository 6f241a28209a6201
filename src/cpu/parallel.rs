//! Rayon-based parallel scale kernels.
//!
//! Two variants mirror the two parallel strategies under measurement:
//! [`par_scale_in_place`] leaves partitioning entirely to rayon, while
//! [`par_chunks_scale_in_place`] batches the buffer into cache-sized chunks
//! first. Both visit every index exactly once per round; chunks are disjoint
//! so the per-element multiply needs no synchronization.

use crate::cpu::scalar::scale_in_place;
use rayon::prelude::*;

/// Data-parallel scale: one logical task per element, partitioning chosen by
/// the rayon scheduler.
pub fn par_scale_in_place(data: &mut [f32], scale: f32) {
    data.par_iter_mut().for_each(|v| *v *= scale);
}

/// Chunked parallel scale: disjoint contiguous chunks distributed across the
/// pool, each processed by the sequential kernel.
pub fn par_chunks_scale_in_place(data: &mut [f32], scale: f32) {
    let chunk = chunk_size(data.len());
    data.par_chunks_mut(chunk).for_each(|c| scale_in_place(c, scale));
}

/// 16 KiB of f32 — enough per task to amortize rayon's join overhead.
const MIN_CHUNK: usize = 4096;

/// Aim for a few chunks per worker so the pool can balance, but never split
/// below [`MIN_CHUNK`] elements.
fn chunk_size(len: usize) -> usize {
    let threads = rayon::current_num_threads().max(1);
    len.div_ceil(threads * 4).max(MIN_CHUNK)
}
