//! Micro-benchmark fixture for in-place elementwise scaling of a large
//! `f32` buffer.
//!
//! Six strategies perform the same logical transform (multiply every element
//! by 2.0, `iterations` times) so their throughput can be compared:
//!
//! - **scalar** — sequential loop, the correctness baseline
//! - **device** — wgpu compute shader dispatched over a 2-D grid
//! - **data-parallel** — rayon `par_iter_mut`, runtime-chosen partitioning
//! - **parallel-helper** — rayon `par_chunks_mut` with a cache-sized chunk
//!   heuristic
//! - **vector** — AVX2 / NEON lane-wise multiply with a scalar tail
//! - **parallel-vector** — lane-aligned chunks distributed across the rayon
//!   pool, each worker running the vector kernel
//!
//! The [`ScaleFixture`] owns the host buffer (and, when requested, a
//! device-side mirror) and exposes one method per strategy; the criterion
//! harness in `benches/strategies.rs` drives setup, timed invocation, and
//! teardown.

pub mod cpu;
pub mod error;
pub mod fixture;
pub mod gpu;
pub mod params;

pub use error::{BenchError, Result};
pub use fixture::{ScaleFixture, SCALE};
pub use gpu::ScaleGpu;
pub use params::FixtureParams;
