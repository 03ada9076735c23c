//! 기계 치수: 내부 폭, 프로파일 배치, 지지대, 체인, 레이크, 커버.

use crate::catalog::chains::small_chain_length;
use crate::catalog::{Construction, SeriesKind};
use crate::error::{GeometryError, InputDataError};
use crate::numeric::{
    approx_ge, approx_le, approx_lt, ceil_tolerant, floor_tolerant, round_even,
};

/// 지지대 호칭 6이 시작되는 최소 지지대 높이 [m].
pub const MIN_STAND_HEIGHT: f64 = 0.4535;
/// 레이크 간격 [m].
pub const RAKE_SPACING: f64 = 0.825;

/// 스크린 내부(통수) 폭 [m].
pub fn inner_width(width_class: i32, construction: Construction) -> f64 {
    let offset = match construction {
        Construction::Small => 0.128,
        Construction::Large => 0.132,
    };
    0.1 * f64::from(width_class) - offset
}

/// 공칭 간격 기준 프로파일 수.
pub fn nominal_profile_count(inner_width: f64, bar_width: f64, nominal_gap: f64) -> i64 {
    floor_tolerant((inner_width + bar_width) / (nominal_gap + bar_width)) as i64
}

/// 프로파일 수가 정해진 뒤 실제로 남는 (피치, 간격) [m].
pub fn actual_pitch_and_gap(inner_width: f64, bar_width: f64, count: i64) -> (f64, f64) {
    let step = (inner_width + bar_width) / count as f64;
    (step, step - bar_width)
}

/// 실제 간격으로 다시 센 프로파일 수.
pub fn profile_count(inner_width: f64, bar_width: f64, gap: f64) -> i64 {
    ceil_tolerant((inner_width - gap) / (bar_width + gap)) as i64
}

/// 수로 바닥에서 스크린 회전축까지의 높이 [m].
pub fn pivot_height(height_class: i32) -> f64 {
    0.0985 * f64::from(height_class) + 1.0299
}

/// 지지대 높이로 지지대 호칭을 정한다.
pub fn stand_height_class(stand_height: f64) -> Result<i32, GeometryError> {
    if approx_le(MIN_STAND_HEIGHT, stand_height) && approx_lt(stand_height, 0.6035) {
        return Ok(6);
    }
    if approx_le(0.6035, stand_height) && approx_lt(stand_height, 0.8535) {
        return Ok(7);
    }
    if approx_ge(stand_height, 0.8535) {
        return Ok(round_even((stand_height - 1.0035) / 0.3) as i32 * 3 + 10);
    }
    Err(GeometryError::SupportTooLow {
        stand_height,
        min_stand_height: MIN_STAND_HEIGHT,
    })
}

/// 체인 길이 [m]. 소형은 표에서, 대형은 선형식으로 정한다.
pub fn chain_length(construction: Construction, height_class: i32) -> Result<f64, InputDataError> {
    match construction {
        Construction::Small => small_chain_length(height_class).ok_or(
            InputDataError::NonStandardSizeClass {
                series: SeriesKind::ScreenHeight,
                value: height_class,
            },
        ),
        Construction::Large => Ok(0.2 * f64::from(height_class) + 3.2),
    }
}

/// 스크린 길이 [m].
pub fn screen_length(construction: Construction, height_class: i32, chain_length: f64) -> f64 {
    match construction {
        Construction::Small => chain_length / 2.0 + 0.38,
        Construction::Large => 0.1 * f64::from(height_class) + 1.765,
    }
}

/// 체인 길이에 걸리는 레이크 수.
pub fn rake_count(chain_length: f64) -> i64 {
    round_even(chain_length / RAKE_SPACING) as i64
}

/// 필터 프로파일 1본의 길이 [m].
pub fn profile_length(grate_height_class: i32, is_removable: bool) -> f64 {
    let offset = if is_removable { 0.175 } else { 0.106 };
    0.1 * f64::from(grate_height_class) - offset
}

/// 배출구 폭 [m].
pub fn discharge_width(width_class: i32) -> f64 {
    0.1 * f64::from(width_class) - 0.129
}

/// 테이블(백월) 높이 호칭.
pub fn backwall_height_class(height_class: i32, grate_height_class: i32) -> i32 {
    height_class - grate_height_class + 10
}

/// 전면 커버 높이 호칭.
pub fn cover_height_class(backwall_height_class: i32, stand_height_class: i32) -> i32 {
    backwall_height_class.min(stand_height_class)
}

/// 전면 커버 수.
pub fn covers_count(width_class: i32) -> i64 {
    if width_class <= 10 {
        2
    } else {
        4
    }
}
