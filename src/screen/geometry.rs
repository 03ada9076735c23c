//! 수로 치수와 지정 호칭으로부터 스크린 폭/높이/그레이트 호칭을 정한다.

use crate::catalog::{SeriesKind, GRATE_SERIES, HEIGHT_SERIES, WIDTH_SERIES};
use crate::error::InputDataError;
use crate::numeric::{
    approx_eq, approx_ge, approx_gt, approx_lt, floor_tolerant, round_even, round_to,
};

use super::input::NOMINAL_TILT_ANGLE_DEG;

/// 그레이트 호칭이 스크린 호칭을 넘을 수 있는 최대 단계.
pub const MAX_GRATE_ABOVE_SCREEN: i32 = 9;
/// 대형 구조 체인 피치 [m].
pub const CHAIN_PITCH: f64 = 0.1;
/// 호칭 0일 때의 전체 배출 높이 [m].
const FULL_DROP_OFFSET: f64 = 0.96109;

/// 지정된 호칭이 계열에 속하는지 확인한다.
pub fn check_override(series: SeriesKind, value: Option<i32>) -> Result<(), InputDataError> {
    match value {
        Some(v) if !series.series().contains(v) => {
            Err(InputDataError::NonStandardSizeClass { series, value: v })
        }
        _ => Ok(()),
    }
}

/// 수로 폭으로부터 스크린 폭 호칭을 정한다. 계열 최소값보다 작으면 최소값을 쓴다.
pub fn width_class_for_channel(channel_width: f64) -> Result<i32, InputDataError> {
    let raw = floor_tolerant((channel_width - 0.1) * 10.0) as i32;
    let class = raw.max(WIDTH_SERIES.first);
    if class > WIDTH_SERIES.last {
        return Err(InputDataError::UnresolvableSizeClass {
            series: SeriesKind::ScreenWidth,
            required: channel_width,
        });
    }
    Ok(class)
}

/// 교차 검증용 수로 폭 호칭.
pub fn channel_width_class(channel_width: f64) -> i32 {
    round_even((channel_width - 0.1) / 0.1) as i32
}

/// 수로 바닥에서 배출점까지의 전체 높이 [m].
///
/// 대형 구조 기준식이며 소형 구조도 같은 호칭에 맞춘다.
pub fn full_drop_height(height_class: i32) -> f64 {
    let pitch_rise = NOMINAL_TILT_ANGLE_DEG.to_radians().sin() * CHAIN_PITCH;
    round_to(pitch_rise * f64::from(height_class) + FULL_DROP_OFFSET, 3)
}

/// 전체 배출 높이가 `depth + min_drop` 이상인 가장 작은 높이 호칭.
pub fn optimal_height_class(depth: f64, min_drop: f64) -> Result<i32, InputDataError> {
    let required = depth + min_drop;
    HEIGHT_SERIES
        .iter()
        .find(|&hs| approx_ge(full_drop_height(hs), required))
        .ok_or(InputDataError::UnresolvableSizeClass {
            series: SeriesKind::ScreenHeight,
            required,
        })
}

/// 그레이트 호칭에 대한 스크린 내부 높이 (수로 바닥 기준) [m].
///
/// 트레이 높이는 포함하지 않는다.
pub fn inner_screen_height(grate_height_class: i32) -> f64 {
    round_to((98.481 * f64::from(grate_height_class) - 173.215) / 1000.0, 3)
}

/// 그레이트 내부 높이가 넘어야 하는 하한.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrateBound {
    /// 수위 기준: 반드시 초과해야 한다.
    Exclusive(f64),
    /// 수로 깊이 기준: 같아도 된다.
    Inclusive(f64),
}

impl GrateBound {
    /// 수리 계산의 최대 전단 수위, 없으면 후단 수위를 쓴다. 그 값이 수로 깊이
    /// 이상이거나 둘 다 없으면 수로 깊이를 기준으로 한다.
    pub fn from_levels(max_start_level: Option<f64>, final_level: Option<f64>, depth: f64) -> Self {
        match max_start_level.or(final_level) {
            Some(level) if approx_lt(level, depth) => GrateBound::Exclusive(level),
            _ => GrateBound::Inclusive(depth),
        }
    }

    pub fn value(self) -> f64 {
        match self {
            GrateBound::Exclusive(v) | GrateBound::Inclusive(v) => v,
        }
    }

    pub fn is_satisfied_by(self, height: f64) -> bool {
        match self {
            GrateBound::Exclusive(v) => approx_gt(height, v),
            GrateBound::Inclusive(v) => approx_gt(height, v) || approx_eq(height, v),
        }
    }
}

/// 하한을 만족하는 가장 작은 그레이트 호칭.
pub fn optimal_grate_class(bound: GrateBound) -> Result<i32, InputDataError> {
    GRATE_SERIES
        .iter()
        .find(|&gs| bound.is_satisfied_by(inner_screen_height(gs)))
        .ok_or(InputDataError::UnresolvableSizeClass {
            series: SeriesKind::GrateHeight,
            required: bound.value(),
        })
}
