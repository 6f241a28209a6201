//! Benchmark error types.

use thiserror::Error;

/// Errors produced while setting up or driving the benchmark fixture.
///
/// There is no recoverable path: every variant is fatal to the affected
/// benchmark run and is reported upward unchanged.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    DeviceRequest(String),

    #[error("buffer mapping failed: {0}")]
    BufferMap(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("device strategy requires a fixture built with `ScaleFixture::with_gpu`")]
    GpuNotInitialized,

    #[error("wgpu error: {0}")]
    Wgpu(#[from] wgpu::RequestDeviceError),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, BenchError>;
