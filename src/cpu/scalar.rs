//! Sequential scalar kernel — the correctness baseline every other strategy
//! must match.

/// Multiply every element by `scale`, in place, single thread.
pub fn scale_in_place(data: &mut [f32], scale: f32) {
    for v in data.iter_mut() {
        *v *= scale;
    }
}
