//! 필요 토크 산정과 감속모터/스프링 선정.

use tracing::warn;

use crate::catalog::{drive_catalog, Construction, DriveOption};
use crate::numeric::{approx_gt, approx_le, round_to_multiple};

use super::hydraulics::GRAV_ACC;

/// 단위 길이당 협잡물 하중 [kg/m].
const SPECIFIC_GARBAGE_LOAD: f64 = 90.0;
const POWER_MARGIN: f64 = 1.2;
/// 하중 산정용 레이크 피치 [m].
const RAKE_PITCH: f64 = 0.8;
/// 센서 최대 변위 [m].
pub const MAX_SENSOR_DELTA: f64 = 0.0095;
const SENSOR_DELTA: f64 = 0.0155;
/// 예압 반올림 단위 [m].
const PRELOAD_STEP: f64 = 0.0005;

/// 스프로킷 피치원 반경 [m].
fn lever_arm(construction: Construction) -> f64 {
    match construction {
        Construction::Small => 0.063,
        Construction::Large => 0.130655,
    }
}

/// 스프링과 구동축 사이 거리 [m].
fn axes_distance(construction: Construction) -> f64 {
    match construction {
        Construction::Small => 0.2,
        Construction::Large => 0.195,
    }
}

/// 협잡물 하중 모델에 따른 최소 필요 토크 [N·m].
pub fn required_torque(construction: Construction, chain_length: f64, width_class: i32) -> f64 {
    let loaded_rakes = (chain_length / RAKE_PITCH / 2.0).ceil();
    let width_factor = f64::from(width_class) / 10.0 - 0.126;
    SPECIFIC_GARBAGE_LOAD
        * GRAV_ACC
        * POWER_MARGIN
        * lever_arm(construction)
        * loaded_rakes
        * width_factor
}

/// 선정된 구동부.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveSelection {
    pub option: DriveOption,
    /// false면 정격 토크가 부족하여 가장 큰 것을 대신 골랐다.
    pub passed: bool,
}

/// 필요 토크 이상인 첫 항목을 고른다. 없으면 가장 큰 항목을 `passed = false`로 돌려준다.
pub fn select_drive(construction: Construction, torque: f64) -> Option<DriveSelection> {
    let catalog = drive_catalog(construction);
    if let Some(option) = catalog
        .iter()
        .find(|option| approx_le(torque, option.drive.torque))
    {
        return Some(DriveSelection {
            option: *option,
            passed: true,
        });
    }
    let fallback = catalog.last()?;
    warn!(
        torque,
        drive = fallback.drive.designation,
        rated = fallback.drive.torque,
        "no drive unit covers the required torque, using the largest one"
    );
    Some(DriveSelection {
        option: *fallback,
        passed: false,
    })
}

/// 스프링 예압 [m], 0.5 mm 단위로 반올림한다.
///
/// 대체 선정된 구동부에서는 센서 최대 변위를 넘지 않도록 자른다.
pub fn spring_preload(construction: Construction, torque: f64, selection: &DriveSelection) -> f64 {
    let max_spring_load = torque / axes_distance(construction) * 0.9;
    let preload = round_to_multiple(
        max_spring_load / selection.option.spring.rate - SENSOR_DELTA,
        PRELOAD_STEP,
    );
    if !selection.passed && approx_gt(preload, MAX_SENSOR_DELTA) {
        return MAX_SENSOR_DELTA;
    }
    preload
}
