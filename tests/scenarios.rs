//! 전체 계산 파이프라인 시나리오 테스트.
use bar_screen_toolbox::catalog::{
    find_profile, Construction, FilterProfile, GRATE_SERIES, HEIGHT_SERIES, WIDTH_SERIES,
};
use bar_screen_toolbox::screen::{compute, InputData};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn profile(name: &str) -> FilterProfile {
    *find_profile(name).expect("profile in catalog")
}

fn large_input() -> InputData {
    InputData::new(1.7, 1.2, profile("1492"), 0.010)
}

#[test]
fn large_screen_without_hydraulics() {
    let screen = compute(large_input()).expect("large screen");
    assert_eq!(screen.width_class, 16);
    assert_eq!(screen.height_class, 12);
    assert_eq!(screen.grate_height_class, 15);
    assert_eq!(screen.construction, Construction::Large);
    assert!(!screen.is_small());
    assert!(screen.full_drop_height >= 2.09);
    assert_close("full drop", screen.full_drop_height, 2.143, 1e-12);
    assert_close("inner width", screen.inner_width, 1.468, 1e-12);
    assert_close("inner height", screen.inner_height, 1.304, 1e-12);
    assert_close("step", screen.step, 0.018, 1e-9);
    assert_close("actual gap", screen.actual_gap, 0.010, 1e-9);
    assert_eq!(screen.profile_count, 81);
    assert_eq!(screen.channel_width_class, 16);
    assert_eq!(screen.width_class_difference, 0);
    assert_eq!(screen.stand_height_class, 10);
    assert_close("chain", screen.chain_length, 5.6, 1e-12);
    assert_eq!(screen.rake_count, 7);
    assert!(screen.is_standard_series);
    assert!(screen.is_heavy);
    assert_eq!(screen.designation, "РКЭ 1612(0015).1492.10");
    assert!(screen.designation.starts_with("РКЭ 16"));
    assert!(screen.warnings.is_empty());
    for h in &screen.hydraulics {
        assert!(h.start_level.is_none());
        assert!(h.level_diff.is_none());
        assert!(h.upstream_velocity.is_none());
        assert!(h.velocity_in_gap.is_none());
    }
}

#[test]
fn large_screen_drive_and_spring() {
    let screen = compute(large_input()).expect("large screen");
    assert_close("torque", screen.required_torque, 815.883_105_330_2, 1e-9);
    let selection = screen.drive.expect("drive selected");
    assert!(selection.passed);
    assert_eq!(selection.option.drive.designation, "SK 32100 AZBHVL-71LP/4");
    assert_close("preload", screen.spring_preload.expect("preload"), 0.0475, 1e-9);
    assert!(screen.drive_passed());
}

#[test]
fn small_screen_without_hydraulics() {
    let screen = compute(InputData::new(0.7, 0.4, profile("3999"), 0.005)).expect("small screen");
    assert_eq!((screen.width_class, screen.height_class, screen.grate_height_class), (6, 6, 6));
    assert!(screen.is_small());
    assert_close("inner width", screen.inner_width, 0.472, 1e-12);
    assert_eq!(screen.profile_count, 32);
    assert_close("chain", screen.chain_length, 4.032, 1e-12);
    assert_close("screen length", screen.screen_length, 2.396, 1e-12);
    assert_eq!(screen.rake_count, 5);
    assert_eq!(screen.stand_height_class, 13);
    assert_eq!(screen.covers_count, 2);
    let selection = screen.drive.expect("drive selected");
    assert!(selection.passed);
    assert_eq!(selection.option.drive.designation, "SK 12080 AZBHVL-63LP/4");
    assert_close("preload", screen.spring_preload.expect("preload"), 0.0105, 1e-9);
    assert_eq!(screen.designation, "РКЭм 0606.3999.5");
}

#[test]
fn exact_pitch_profile_count() {
    let screen = compute(InputData::new(2.6, 0.3, profile("1492"), 0.010)).expect("wide screen");
    assert_eq!(screen.width_class, 25);
    assert_close("inner width", screen.inner_width, 2.368, 1e-12);
    assert_close("actual gap", screen.actual_gap, 0.010, 1e-12);
    assert_eq!(screen.profile_count, 131);
}

#[test]
fn hydraulics_with_flow_and_level() {
    let mut input = InputData::new(1.0, 1.0, profile("1492"), 0.010);
    input.water_flow = Some(0.3);
    input.final_level = Some(0.5);
    let screen = compute(input).expect("screen with hydraulics");
    assert_eq!((screen.width_class, screen.height_class), (9, 12));
    assert!(screen.is_small());

    let starts: Vec<f64> = screen
        .hydraulics
        .iter()
        .map(|h| h.start_level.expect("start level"))
        .collect();
    assert!(starts.windows(2).all(|w| w[0] < w[1]), "{starts:?}");
    assert_close("start 10%", starts[0], 0.582_514, 1e-5);
    assert_close("start 40%", starts[3], 0.769_321, 1e-5);

    // 최대 전단 수위 0.769 m 를 넘는 첫 그레이트 호칭
    assert_eq!(screen.grate_height_class, 12);
    assert!(screen.warnings.is_empty());

    let h = screen.hydraulic(0.2).expect("20 % row");
    let start = h.start_level.expect("start level");
    assert_close("upstream velocity", h.upstream_velocity.expect("v"), 0.3 / (1.0 * start), 1e-12);
    assert_close(
        "gap velocity",
        h.velocity_in_gap.expect("v gap"),
        0.3 / (screen.inner_width * start * screen.efficiency * 0.8),
        1e-12,
    );
}

#[test]
fn repeated_runs_are_identical() {
    let mut input = InputData::new(1.0, 1.0, profile("1492"), 0.010);
    input.water_flow = Some(0.3);
    input.final_level = Some(0.5);
    let first = compute(input.clone()).expect("first run");
    let second = compute(input).expect("second run");
    assert_eq!(first, second);
    assert_eq!(first.mass().to_bits(), second.mass().to_bits());
}

#[test]
fn discharge_height_grows_with_height_class() {
    let mut previous = f64::NEG_INFINITY;
    for hs in HEIGHT_SERIES.iter().filter(|hs| (12..=30).contains(hs)) {
        let mut input = large_input();
        input.screen_height_class = Some(hs);
        let screen = compute(input).expect("height override");
        assert_eq!(screen.height_class, hs);
        assert!(screen.discharge_height >= previous, "hs {hs}");
        previous = screen.discharge_height;
    }
}

#[test]
fn resolved_classes_belong_to_series() {
    let mut accepted = 0;
    for width_dm in 6..=31 {
        for depth_dm in [3, 5, 8, 12, 20] {
            for name in ["3999", "1492", "6x60"] {
                let input = InputData::new(
                    f64::from(width_dm) / 10.0,
                    f64::from(depth_dm) / 10.0,
                    profile(name),
                    0.010,
                );
                let Ok(screen) = compute(input) else {
                    continue;
                };
                accepted += 1;
                assert!(WIDTH_SERIES.contains(screen.width_class));
                assert!(HEIGHT_SERIES.contains(screen.height_class));
                assert!(GRATE_SERIES.contains(screen.grate_height_class));
                assert!(screen.profile_count >= 2);
                assert!((0..=2).contains(&screen.width_class_difference));
                assert!(screen.grate_height_class <= screen.height_class + 9);
            }
        }
    }
    assert!(accepted > 50, "accepted {accepted}");
}

#[test]
fn overrides_pass_through_unchanged() {
    let mut input = large_input();
    input.screen_width_class = Some(15);
    input.screen_height_class = Some(18);
    input.grate_height_class = Some(21);
    let screen = compute(input).expect("overrides");
    assert_eq!(
        (screen.width_class, screen.height_class, screen.grate_height_class),
        (15, 18, 21)
    );
    assert_eq!(screen.width_class_difference, 1);
    assert_eq!(screen.designation, "РКЭ 1518(1621).1492.10");
}

#[test]
fn trace_records_pipeline_steps() {
    let screen = compute(large_input()).expect("large screen");
    assert!(!screen.trace.is_empty());
    assert_eq!(screen.trace.find("screen width class"), Some(16.0));
    assert_eq!(screen.trace.find("grate height class"), Some(15.0));
    assert_eq!(screen.trace.find("total mass"), Some(screen.mass()));
    let names: Vec<&str> = screen.trace.steps().iter().map(|s| s.name).collect();
    let pos = |name: &str| names.iter().position(|n| *n == name).expect(name);
    assert!(pos("screen height class") < pos("grate height class"));
    assert!(pos("required torque") < pos("total mass"));
}
