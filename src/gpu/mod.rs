//! wgpu device mirror of the host buffer and the 2-D scale dispatch.
//!
//! [`ScaleGpu`] holds the adapter-backed device, the compiled scale
//! pipeline, and the storage buffer mirroring the host array. Host↔device
//! traffic is explicit: `copy_from_host`, N dispatches, `copy_to_host`. The
//! staged readback in `copy_to_host` blocks until the map resolves, which is
//! the synchronization point for all prior dispatches.

pub mod shader;

use crate::error::{BenchError, Result};
use bytemuck::{Pod, Zeroable};
use tracing::{debug, info};

/// Uniform parameters for the scale shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ScaleParams {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub _pad: u32,
}

/// Workgroup edge declared in the shader.
const WORKGROUP_DIM: u32 = 16;

/// Workgroup grid covering `width × height`, rounding up so no element is
/// missed.
pub fn workgroups_2d(width: u32, height: u32) -> [u32; 3] {
    [width.div_ceil(WORKGROUP_DIM), height.div_ceil(WORKGROUP_DIM), 1]
}

/// Device-side half of the fixture: device, queue, compiled pipeline, and
/// the storage buffer mirroring the host array.
///
/// The device allocation is released when the value drops; ownership makes
/// the release exactly-once.
pub struct ScaleGpu {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::ComputePipeline,
    bind_group: wgpu::BindGroup,
    storage: wgpu::Buffer,
    width: u32,
    height: u32,
    len: usize,
}

impl ScaleGpu {
    /// Request an adapter and device, compile the scale pipeline, and
    /// allocate the device mirror for `width * height` elements.
    ///
    /// Fails with [`BenchError::NoAdapter`] on machines without a usable
    /// GPU backend; the caller treats that as fatal for the device strategy.
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self> {
        pollster::block_on(Self::new_async(width, height, scale))
    }

    async fn new_async(width: u32, height: u32, scale: f32) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(BenchError::NoAdapter)?;

        let adapter_info = adapter.get_info();
        info!(
            backend = ?adapter_info.backend,
            device = %adapter_info.name,
            "selected GPU adapter"
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("elementwise-bench"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    ..Default::default()
                },
                None,
            )
            .await?;

        let len = width as usize * height as usize;
        let storage = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scale-storage"),
            size: (len * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::STORAGE
                | wgpu::BufferUsages::COPY_SRC
                | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scale"),
            source: wgpu::ShaderSource::Wgsl(shader::SCALE_WGSL.into()),
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("scale"),
            layout: None,
            module: &shader_module,
            entry_point: Some("main"),
            compilation_options: Default::default(),
            cache: None,
        });

        let params = ScaleParams { width, height, scale, _pad: 0 };
        let uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scale-params"),
            size: std::mem::size_of::<ScaleParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&uniform, 0, bytemuck::bytes_of(&params));

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scale-bind-group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: storage.as_entire_binding() },
                wgpu::BindGroupEntry { binding: 1, resource: uniform.as_entire_binding() },
            ],
        });

        debug!(workgroups = ?workgroups_2d(width, height), "compiled scale pipeline");

        Ok(Self { device, queue, pipeline, bind_group, storage, width, height, len })
    }

    /// Host → device copy of the full buffer.
    pub fn copy_from_host(&self, host: &[f32]) {
        debug_assert_eq!(host.len(), self.len);
        self.queue.write_buffer(&self.storage, 0, bytemuck::cast_slice(host));
    }

    /// Encode `rounds` grid dispatches in one command buffer and submit.
    ///
    /// Passes on the same queue submission execute in order, so each round
    /// observes the previous round's writes.
    pub fn dispatch_rounds(&self, rounds: u32) {
        let workgroups = workgroups_2d(self.width, self.height);
        let mut encoder = self.device.create_command_encoder(&Default::default());
        for _ in 0..rounds {
            let mut pass = encoder.begin_compute_pass(&Default::default());
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, Some(&self.bind_group), &[]);
            pass.dispatch_workgroups(workgroups[0], workgroups[1], workgroups[2]);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Device → host copy via a staging buffer.
    ///
    /// Blocks until the map resolves, acting as the barrier for all
    /// previously submitted dispatches.
    pub fn copy_to_host(&self, host: &mut [f32]) -> Result<()> {
        debug_assert_eq!(host.len(), self.len);
        let size = (self.len * std::mem::size_of::<f32>()) as u64;
        let staging = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scale-staging"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = self.device.create_command_encoder(&Default::default());
        encoder.copy_buffer_to_buffer(&self.storage, 0, &staging, 0, size);
        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = staging.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|e| BenchError::BufferMap(e.to_string()))?
            .map_err(|e: wgpu::BufferAsyncError| BenchError::BufferMap(e.to_string()))?;

        let data = slice.get_mapped_range();
        host.copy_from_slice(bytemuck::cast_slice(&data));
        drop(data);
        staging.unmap();

        Ok(())
    }

    /// Mirror length in elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
