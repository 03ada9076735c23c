use serde::{Deserialize, Serialize};

use super::input::{NOMINAL_TILT_ANGLE_DEG, TILT_TOLERANCE_DEG};

/// 물리적으로 가능한 경사각 범위 [°].
pub const PHYSICAL_TILT_RANGE_DEG: (f64, f64) = (45.0, 90.0);

/// 경사각 검증 방식.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnglePolicy {
    /// 공칭각 ± 허용편차만 허용한다 (물리 범위로 잘림).
    NominalBand { nominal_deg: f64, tolerance_deg: f64 },
    /// 45°~90° 전체를 허용한다.
    Physical,
}

impl Default for AnglePolicy {
    fn default() -> Self {
        AnglePolicy::NominalBand {
            nominal_deg: NOMINAL_TILT_ANGLE_DEG,
            tolerance_deg: TILT_TOLERANCE_DEG,
        }
    }
}

impl AnglePolicy {
    /// 허용 범위 (min, max) [rad].
    pub fn limits(&self) -> (f64, f64) {
        let (phys_min, phys_max) = PHYSICAL_TILT_RANGE_DEG;
        let (min_deg, max_deg) = match *self {
            AnglePolicy::NominalBand {
                nominal_deg,
                tolerance_deg,
            } => (
                (nominal_deg - tolerance_deg).max(phys_min),
                (nominal_deg + tolerance_deg).min(phys_max),
            ),
            AnglePolicy::Physical => (phys_min, phys_max),
        };
        (min_deg.to_radians(), max_deg.to_radians())
    }
}

/// 구동부 중량형(+2.29 kg) 적용 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeavyDrive {
    /// 항상 중량형.
    // 높이별 판정 기준이 확정되면 기본값을 FromHeightClass로 바꾼다.
    #[default]
    Always,
    /// 스크린 높이 호칭이 기준 이상일 때만 중량형.
    FromHeightClass { min_height_class: i32 },
}

impl HeavyDrive {
    pub fn applies(self, height_class: i32) -> bool {
        match self {
            HeavyDrive::Always => true,
            HeavyDrive::FromHeightClass { min_height_class } => height_class >= min_height_class,
        }
    }
}

/// 계산 규칙 설정. 입력값과 달리 실행 환경(설정 파일)에서 정해진다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalcSettings {
    #[serde(default)]
    pub angle_policy: AnglePolicy,
    #[serde(default)]
    pub heavy_drive: HeavyDrive,
}
