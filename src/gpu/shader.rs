//! WGSL source for the elementwise scale kernel.

/// 2-D grid elementwise scale.
///
/// Each invocation multiplies one element by `params.scale`. Workgroup size
/// is [16, 16, 1]; the dispatch rounds the grid up, so invocations past the
/// buffer edge return early.
///
/// Layout is row-major: `data[y * width + x]`.
pub const SCALE_WGSL: &str = r"
struct ScaleParams {
    width: u32,
    height: u32,
    scale: f32,
    _pad: u32,
}

@group(0) @binding(0) var<storage, read_write> data: array<f32>;
@group(0) @binding(1) var<uniform> params: ScaleParams;

@compute @workgroup_size(16, 16, 1)
fn main(@builtin(global_invocation_id) gid: vec3<u32>) {
    if gid.x >= params.width || gid.y >= params.height {
        return;
    }
    let idx = gid.y * params.width + gid.x;
    data[idx] = data[idx] * params.scale;
}
";
