//! Benchmark fixture: host buffer ownership and the six timed strategies.

use crate::cpu;
use crate::error::{BenchError, Result};
use crate::gpu::ScaleGpu;
use crate::params::FixtureParams;

/// Multiplier applied by every strategy each round.
pub const SCALE: f32 = 2.0;

/// Owns the host buffer and, for the device strategy, its GPU mirror.
///
/// Each strategy method performs the identical logical transform — multiply
/// every element by [`SCALE`], `iterations` times — so after any of them the
/// buffer holds its pre-call values times `2^iterations` (modulo float
/// rounding). The harness guarantees no two strategies run concurrently on
/// the same fixture; `&mut self` enforces that at the type level.
pub struct ScaleFixture {
    params: FixtureParams,
    host: Vec<f32>,
    gpu: Option<ScaleGpu>,
}

impl ScaleFixture {
    /// CPU-only setup: allocate and fill the host buffer with
    /// `(i + 1) / 5.0`.
    pub fn new(params: FixtureParams) -> Result<Self> {
        // Re-validate so a hand-built params struct can't smuggle zeros in.
        let params = FixtureParams::new(params.width, params.height, params.iterations)?;
        Ok(Self { params, host: params.initial_values(), gpu: None })
    }

    /// Setup including the device mirror. Fails without a usable adapter;
    /// that failure is fatal for the device strategy and the caller decides
    /// whether to skip or abort.
    pub fn with_gpu(params: FixtureParams) -> Result<Self> {
        let mut fixture = Self::new(params)?;
        fixture.gpu = Some(ScaleGpu::new(params.width, params.height, SCALE)?);
        Ok(fixture)
    }

    pub fn params(&self) -> FixtureParams {
        self.params
    }

    pub fn host(&self) -> &[f32] {
        &self.host
    }

    /// Whether the device strategy can run.
    pub fn has_gpu(&self) -> bool {
        self.gpu.is_some()
    }

    /// Restore the host buffer to its initial fill.
    pub fn reset(&mut self) {
        self.host = self.params.initial_values();
    }

    /// Sequential scalar loop, single thread. Correctness baseline.
    pub fn scalar_op(&mut self) {
        for _ in 0..self.params.iterations {
            cpu::scale_in_place(&mut self.host, SCALE);
        }
    }

    /// One host→device copy, `iterations` grid dispatches, one device→host
    /// copy. Copies sit outside the rounds loop.
    pub fn device_op(&mut self) -> Result<()> {
        let gpu = self.gpu.as_ref().ok_or(BenchError::GpuNotInitialized)?;
        gpu.copy_from_host(&self.host);
        gpu.dispatch_rounds(self.params.iterations);
        gpu.copy_to_host(&mut self.host)
    }

    /// Rayon data-parallel loop; partitioning left to the scheduler, joined
    /// before the next round.
    pub fn data_parallel_op(&mut self) {
        for _ in 0..self.params.iterations {
            cpu::par_scale_in_place(&mut self.host, SCALE);
        }
    }

    /// Rayon chunked loop with a cache-sized batching heuristic.
    pub fn parallel_helper_op(&mut self) {
        for _ in 0..self.params.iterations {
            cpu::par_chunks_scale_in_place(&mut self.host, SCALE);
        }
    }

    /// SIMD lane-wise multiply with a scalar tail.
    pub fn vector_op(&mut self) {
        for _ in 0..self.params.iterations {
            cpu::simd_scale_in_place(&mut self.host, SCALE);
        }
    }

    /// SIMD lanes partitioned across the rayon pool in lane-aligned chunks.
    pub fn parallel_vector_op(&mut self) {
        for _ in 0..self.params.iterations {
            cpu::par_simd_scale_in_place(&mut self.host, SCALE);
        }
    }

    /// Consume the fixture. The device allocation (if any) drops here
    /// exactly once; double teardown is a compile error by ownership. The
    /// host buffer is reclaimed with the fixture.
    pub fn teardown(self) {}
}
