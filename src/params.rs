//! Fixture configuration and host-buffer initialization.

use crate::error::{BenchError, Result};

/// Benchmark parameters, fixed at setup time.
///
/// `width` and `height` together define the buffer length; `iterations` is
/// the number of scale rounds each strategy performs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureParams {
    pub width: u32,
    pub height: u32,
    pub iterations: u32,
}

impl FixtureParams {
    /// Validate and build a parameter set.
    ///
    /// `width` and `height` must be positive; `iterations = 0` is allowed
    /// and means every strategy leaves the buffer unchanged.
    pub fn new(width: u32, height: u32, iterations: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BenchError::InvalidDimensions(format!(
                "buffer dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height, iterations })
    }

    /// Buffer length in elements.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Initial host-buffer fill: `value[i] = (i + 1) / 5.0`.
    pub fn initial_values(&self) -> Vec<f32> {
        (0..self.len()).map(|i| (i + 1) as f32 / 5.0).collect()
    }
}

impl Default for FixtureParams {
    /// 4K frame worth of floats, ten scale rounds per invocation.
    fn default() -> Self {
        Self { width: 3840, height: 2160, iterations: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_is_width_times_height() {
        let p = FixtureParams::new(4, 3, 1).unwrap();
        assert_eq!(p.len(), 12);
        assert!(!p.is_empty());
    }

    #[test]
    fn default_is_4k_ten_rounds() {
        let p = FixtureParams::default();
        assert_eq!(p.len(), 3840 * 2160);
        assert_eq!(p.iterations, 10);
    }

    #[test]
    fn zero_width_rejected() {
        let err = FixtureParams::new(0, 4, 1).unwrap_err();
        assert!(matches!(err, BenchError::InvalidDimensions(_)));
    }

    #[test]
    fn zero_height_rejected() {
        assert!(FixtureParams::new(4, 0, 1).is_err());
    }

    #[test]
    fn zero_iterations_allowed() {
        let p = FixtureParams::new(4, 4, 0).unwrap();
        assert_eq!(p.iterations, 0);
    }

    #[test]
    fn initial_fill_values() {
        let p = FixtureParams::new(4, 1, 1).unwrap();
        let v = p.initial_values();
        assert_eq!(v.len(), 4);
        for (i, got) in v.iter().enumerate() {
            let want = (i + 1) as f32 / 5.0;
            assert!((got - want).abs() < 1e-7, "index {i}: got {got}, want {want}");
        }
    }
}
