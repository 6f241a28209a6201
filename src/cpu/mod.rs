//! CPU strategies: scalar baseline, rayon parallel loops, and SIMD kernels.

pub mod parallel;
pub mod scalar;
pub mod simd;

pub use parallel::{par_chunks_scale_in_place, par_scale_in_place};
pub use scalar::scale_in_place;
pub use simd::{lane_width, par_simd_scale_in_place, simd_scale_in_place};
