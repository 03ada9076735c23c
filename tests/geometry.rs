use bar_screen_toolbox::catalog::series::{nominal_gaps, NOMINAL_GAPS_MM};
use bar_screen_toolbox::catalog::{
    Construction, SeriesKind, GRATE_SERIES, HEIGHT_SERIES, WIDTH_SERIES,
};
use bar_screen_toolbox::error::{GeometryError, InputDataError};
use bar_screen_toolbox::numeric::{ceil_tolerant, floor_tolerant, round_even, round_to};
use bar_screen_toolbox::screen::dimensions::{
    actual_pitch_and_gap, chain_length, cover_height_class, covers_count, inner_width,
    nominal_profile_count, profile_count, rake_count, stand_height_class,
};
use bar_screen_toolbox::screen::geometry::{
    full_drop_height, inner_screen_height, optimal_grate_class, optimal_height_class,
    width_class_for_channel, GrateBound,
};

#[test]
fn series_bounds() {
    assert_eq!(WIDTH_SERIES.iter().next(), Some(5));
    assert_eq!(WIDTH_SERIES.iter().last(), Some(30));
    assert_eq!(HEIGHT_SERIES.len(), 57);
    assert!(HEIGHT_SERIES.contains(171));
    assert!(!HEIGHT_SERIES.contains(13));
    assert!(GRATE_SERIES.contains(6));
    assert!(!GRATE_SERIES.contains(63));
    assert_eq!(SeriesKind::GrateHeight.series(), GRATE_SERIES);
    assert_eq!(NOMINAL_GAPS_MM.len(), 17);
    assert_eq!(nominal_gaps().next(), Some(0.005));
}

#[test]
fn construction_thresholds() {
    assert_eq!(Construction::classify(6, 10), Construction::Small);
    assert_eq!(Construction::classify(7, 15), Construction::Small);
    assert_eq!(Construction::classify(9, 12), Construction::Small);
    // 8 > 7 이고 14 > 12 이므로 두 조건 모두 아니다.
    assert_eq!(Construction::classify(8, 14), Construction::Large);
    assert_eq!(Construction::classify(7, 18), Construction::Large);
    assert_eq!(Construction::classify(10, 3), Construction::Large);
    assert_eq!(Construction::Small.abbreviation(), "РКЭм");
    assert_eq!(Construction::Large.abbreviation(), "РКЭ");
}

#[test]
fn width_class_from_channel() {
    assert_eq!(width_class_for_channel(1.7), Ok(16));
    assert_eq!(width_class_for_channel(0.7), Ok(6));
    assert_eq!(width_class_for_channel(0.3), Ok(5));
    assert!(matches!(
        width_class_for_channel(3.2),
        Err(InputDataError::UnresolvableSizeClass {
            series: SeriesKind::ScreenWidth,
            ..
        })
    ));
}

#[test]
fn full_drop_height_is_monotonic() {
    assert_eq!(full_drop_height(12), 2.143);
    let drops: Vec<f64> = HEIGHT_SERIES.iter().map(full_drop_height).collect();
    assert!(drops.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn height_and_grate_selection() {
    assert_eq!(optimal_height_class(1.2, 0.89), Ok(12));
    assert_eq!(optimal_height_class(0.4, 0.89), Ok(6));
    assert_eq!(inner_screen_height(15), 1.304);
    assert_eq!(inner_screen_height(6), 0.418);
    assert_eq!(optimal_grate_class(GrateBound::Inclusive(1.2)), Ok(15));
    assert_eq!(optimal_grate_class(GrateBound::Exclusive(0.769)), Ok(12));
    assert_eq!(optimal_grate_class(GrateBound::Inclusive(0.418)), Ok(6));
    assert_eq!(optimal_grate_class(GrateBound::Exclusive(0.418)), Ok(9));
    assert!(optimal_grate_class(GrateBound::Inclusive(6.0)).is_err());
}

#[test]
fn stand_height_brackets() {
    assert_eq!(stand_height_class(0.4535), Ok(6));
    assert_eq!(stand_height_class(0.6), Ok(6));
    assert_eq!(stand_height_class(0.6035), Ok(7));
    assert_eq!(stand_height_class(0.85), Ok(7));
    assert_eq!(stand_height_class(1.0119), Ok(10));
    assert_eq!(stand_height_class(1.2209), Ok(13));
    assert!(matches!(
        stand_height_class(0.45),
        Err(GeometryError::SupportTooLow { .. })
    ));
}

#[test]
fn chain_and_rakes() {
    assert_eq!(chain_length(Construction::Small, 9), Ok(4.662));
    assert!(chain_length(Construction::Small, 18).is_err());
    let large = chain_length(Construction::Large, 12).expect("large chain");
    assert!((large - 5.6).abs() < 1e-12);
    assert_eq!(rake_count(5.6), 7);
    assert_eq!(rake_count(4.032), 5);
    assert_eq!(covers_count(10), 2);
    assert_eq!(covers_count(11), 4);
    assert_eq!(cover_height_class(7, 10), 7);
}

#[test]
fn rounding_is_half_to_even() {
    assert_eq!(round_even(2.5), 2.0);
    assert_eq!(round_even(3.5), 4.0);
    assert_eq!(round_even(-0.5), 0.0);
    assert_eq!(round_to(2.1428, 3), 2.143);
    assert_eq!(floor_tolerant((1.7 - 0.1) * 10.0), 16.0);
    assert_eq!(floor_tolerant(15.5), 15.0);
    assert_eq!(ceil_tolerant(131.000_000_000_000_03), 131.0);
    assert_eq!(ceil_tolerant(130.2), 131.0);
}

#[test]
fn exact_pitch_keeps_nominal_count() {
    // 2.368 m 내부 폭에 18 mm 피치가 정확히 132번 들어간다
    let inner = inner_width(25, Construction::Large);
    let nominal = nominal_profile_count(inner, 0.008, 0.010);
    assert_eq!(nominal, 132);
    let (_, gap) = actual_pitch_and_gap(inner, 0.008, nominal);
    assert!((gap - 0.010).abs() < 1e-12);
    assert_eq!(profile_count(inner, 0.008, gap), 131);
}
