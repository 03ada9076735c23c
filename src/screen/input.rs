use crate::catalog::FilterProfile;
use crate::error::{InputDataError, InputQuantity};

/// 기본 최소 배출 높이 [m].
pub const DEFAULT_DISCHARGE_HEIGHT: f64 = 0.89;
/// 공칭 설치 경사각 [°].
pub const NOMINAL_TILT_ANGLE_DEG: f64 = 80.0;
/// 공칭 경사각 허용 편차 [°].
pub const TILT_TOLERANCE_DEG: f64 = 5.0;

/// 스크린 계산 입력값. 길이는 m, 각도는 rad, 유량은 m³/s.
#[derive(Debug, Clone, PartialEq)]
pub struct InputData {
    /// 스크린 폭 호칭. `None`이면 수로 폭으로부터 정한다.
    pub screen_width_class: Option<i32>,
    /// 스크린 높이 호칭. `None`이면 최소 배출 높이를 만족하도록 정한다.
    pub screen_height_class: Option<i32>,
    /// 그레이트 높이 호칭. `None`이면 수위/수로 깊이로부터 정한다.
    pub grate_height_class: Option<i32>,
    pub channel_width: f64,
    pub channel_depth: f64,
    /// 수로 상단 위로 확보해야 하는 최소 배출 높이
    pub min_discharge_height: f64,
    pub filter_profile: FilterProfile,
    /// 목표 공칭 간격
    pub nominal_gap: f64,
    pub tilt_angle: f64,
    /// 유량. 없으면 수위/유속 계산을 생략한다.
    pub water_flow: Option<f64>,
    /// 스크린 후단 수위. 유량과 함께 주어져야 전단 수위를 풀 수 있다.
    pub final_level: Option<f64>,
}

impl InputData {
    /// 필수 항목만으로 입력을 만들고 나머지는 기본값(최소 배출 높이 890 mm,
    /// 경사각 80°, 수리 계산 없음)으로 채운다.
    pub fn new(
        channel_width: f64,
        channel_depth: f64,
        filter_profile: FilterProfile,
        nominal_gap: f64,
    ) -> Self {
        Self {
            screen_width_class: None,
            screen_height_class: None,
            grate_height_class: None,
            channel_width,
            channel_depth,
            min_discharge_height: DEFAULT_DISCHARGE_HEIGHT,
            filter_profile,
            nominal_gap,
            tilt_angle: NOMINAL_TILT_ANGLE_DEG.to_radians(),
            water_flow: None,
            final_level: None,
        }
    }

    pub(crate) fn check_magnitudes(&self) -> Result<(), InputDataError> {
        let required = [
            (InputQuantity::ChannelWidth, self.channel_width),
            (InputQuantity::ChannelDepth, self.channel_depth),
            (InputQuantity::MinDischargeHeight, self.min_discharge_height),
            (InputQuantity::NominalGap, self.nominal_gap),
        ];
        let optional = [
            (InputQuantity::WaterFlow, self.water_flow),
            (InputQuantity::FinalLevel, self.final_level),
        ];
        let supplied = optional
            .into_iter()
            .filter_map(|(quantity, value)| value.map(|v| (quantity, v)));
        for (quantity, value) in required.into_iter().chain(supplied) {
            // NaN도 여기서 걸러진다.
            if !(value > 0.0) {
                return Err(InputDataError::InvalidInputMagnitude { quantity, value });
            }
        }
        Ok(())
    }
}
