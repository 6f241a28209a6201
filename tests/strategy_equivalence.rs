//! Cross-strategy correctness properties.
//!
//! Every strategy must leave the buffer at `initial(i) * 2^iterations`
//! within float tolerance, regardless of partitioning or lane width. GPU
//! cases are `#[ignore]`d: they need a real adapter and are run manually on
//! machines with one.

use elementwise_bench::cpu;
use elementwise_bench::{FixtureParams, ScaleFixture};

const REL_TOL: f32 = 1e-5;

fn assert_scaled(fixture: &ScaleFixture, label: &str) {
    let p = fixture.params();
    let factor = 2.0f32.powi(p.iterations as i32);
    for (i, &got) in fixture.host().iter().enumerate() {
        let want = (i + 1) as f32 / 5.0 * factor;
        let rel = ((got - want) / want).abs();
        assert!(rel <= REL_TOL, "{label}: index {i}: got {got}, want {want}");
    }
}

type Strategy = (&'static str, fn(&mut ScaleFixture));

const CPU_STRATEGIES: [Strategy; 5] = [
    ("scalar", ScaleFixture::scalar_op),
    ("data_parallel", ScaleFixture::data_parallel_op),
    ("parallel_helper", ScaleFixture::parallel_helper_op),
    ("vector", ScaleFixture::vector_op),
    ("parallel_vector", ScaleFixture::parallel_vector_op),
];

#[test]
fn every_cpu_strategy_scales_by_two_pow_iterations() {
    let params = FixtureParams::new(64, 32, 3).unwrap();
    for (label, op) in CPU_STRATEGIES {
        let mut fixture = ScaleFixture::new(params).unwrap();
        op(&mut fixture);
        assert_scaled(&fixture, label);
        fixture.teardown();
    }
}

#[test]
fn concrete_scenario_4x1_two_rounds() {
    // [0.2, 0.4, 0.6, 0.8] → [0.8, 1.6, 2.4, 3.2]
    let params = FixtureParams::new(4, 1, 2).unwrap();
    for (label, op) in CPU_STRATEGIES {
        let mut fixture = ScaleFixture::new(params).unwrap();
        op(&mut fixture);
        for (got, want) in fixture.host().iter().zip([0.8f32, 1.6, 2.4, 3.2]) {
            assert!((got - want).abs() < 1e-6, "{label}: got {got}, want {want}");
        }
    }
}

#[test]
fn zero_iterations_leaves_buffer_unchanged() {
    let params = FixtureParams::new(16, 4, 0).unwrap();
    let initial = params.initial_values();
    for (label, op) in CPU_STRATEGIES {
        let mut fixture = ScaleFixture::new(params).unwrap();
        op(&mut fixture);
        assert_eq!(fixture.host(), &initial[..], "{label} mutated the buffer");
    }
}

#[test]
fn simd_strategies_handle_lane_remainder() {
    // One element past a full lane forces the scalar tail.
    let width = (cpu::lane_width() + 1) as u32;
    let params = FixtureParams::new(width, 1, 3).unwrap();

    let mut vector = ScaleFixture::new(params).unwrap();
    vector.vector_op();
    assert_scaled(&vector, "vector");

    let mut par_vector = ScaleFixture::new(params).unwrap();
    par_vector.parallel_vector_op();
    assert_scaled(&par_vector, "parallel_vector");
}

#[test]
fn all_cpu_strategies_agree_with_scalar() {
    let params = FixtureParams::new(127, 9, 4).unwrap();
    let mut baseline = ScaleFixture::new(params).unwrap();
    baseline.scalar_op();

    for (label, op) in &CPU_STRATEGIES[1..] {
        let mut fixture = ScaleFixture::new(params).unwrap();
        op(&mut fixture);
        for (i, (&got, &want)) in fixture.host().iter().zip(baseline.host()).enumerate() {
            let rel = ((got - want) / want).abs();
            assert!(rel <= REL_TOL, "{label}: index {i}: got {got}, scalar {want}");
        }
    }
}

#[test]
fn reset_between_invocations() {
    let params = FixtureParams::new(8, 8, 2).unwrap();
    let mut fixture = ScaleFixture::new(params).unwrap();
    fixture.scalar_op();
    fixture.reset();
    fixture.data_parallel_op();
    assert_scaled(&fixture, "data_parallel after reset");
}

// --- device strategy (requires GPU adapter) ---

#[test]
#[ignore = "requires GPU adapter - run manually on machines with a GPU"]
fn device_strategy_matches_scalar() {
    let params = FixtureParams::new(64, 32, 3).unwrap();

    let mut baseline = ScaleFixture::new(params).unwrap();
    baseline.scalar_op();

    let mut fixture = ScaleFixture::with_gpu(params).expect("GPU setup");
    assert!(fixture.has_gpu());
    fixture.device_op().expect("device dispatch");

    for (i, (&got, &want)) in fixture.host().iter().zip(baseline.host()).enumerate() {
        let rel = ((got - want) / want).abs();
        assert!(rel <= REL_TOL, "device: index {i}: got {got}, scalar {want}");
    }
    fixture.teardown();
}

#[test]
#[ignore = "requires GPU adapter - run manually on machines with a GPU"]
fn device_strategy_zero_iterations() {
    let params = FixtureParams::new(16, 4, 0).unwrap();
    let initial = params.initial_values();
    let mut fixture = ScaleFixture::with_gpu(params).expect("GPU setup");
    // Copies in and straight back out; the buffer round-trips unchanged.
    fixture.device_op().expect("device dispatch");
    assert_eq!(fixture.host(), &initial[..]);
}

#[test]
#[ignore = "requires GPU adapter - run manually on machines with a GPU"]
fn device_strategy_grid_overhang() {
    // 17×9 is not a multiple of the 16×16 workgroup; the shader's bounds
    // guard must keep overhanging invocations off the buffer.
    let params = FixtureParams::new(17, 9, 2).unwrap();
    let mut fixture = ScaleFixture::with_gpu(params).expect("GPU setup");
    fixture.device_op().expect("device dispatch");
    assert_scaled(&fixture, "device");
}
