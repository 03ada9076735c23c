//! 계산 입력 검증 오류.
//!
//! 메시지는 개발자용 설명이며, 화면 표시용 문구는 호출 측이 `kind()`와
//! 각 변형에 담긴 수치로 구성한다.

use thiserror::Error;

use crate::catalog::SeriesKind;

/// 크기가 0 이하로 주어질 수 없는 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputQuantity {
    ChannelWidth,
    ChannelDepth,
    MinDischargeHeight,
    NominalGap,
    WaterFlow,
    FinalLevel,
}

impl std::fmt::Display for InputQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputQuantity::ChannelWidth => "수로 폭",
            InputQuantity::ChannelDepth => "수로 깊이",
            InputQuantity::MinDischargeHeight => "최소 배출 높이",
            InputQuantity::NominalGap => "공칭 간격",
            InputQuantity::WaterFlow => "유량",
            InputQuantity::FinalLevel => "스크린 후단 수위",
        };
        f.write_str(name)
    }
}

/// 수위 상한의 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBound {
    ChannelDepth,
    InnerScreenHeight,
}

/// 수로와 스크린의 기하학적 불일치.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("수로가 너무 좁습니다 (수로 폭 호칭 {channel_width_class}, 스크린 폭 호칭 {screen_width_class})")]
    ChannelTooNarrow {
        channel_width_class: i32,
        screen_width_class: i32,
    },

    #[error("수로가 너무 넓습니다 (수로 폭 호칭 {channel_width_class}, 스크린 폭 호칭 {screen_width_class})")]
    ChannelTooWide {
        channel_width_class: i32,
        screen_width_class: i32,
    },

    /// 지지대 높이가 가장 낮은 브래킷보다 낮다.
    #[error("지지대 높이 {stand_height:.3} m 가 최소값 {min_stand_height:.4} m 보다 낮습니다")]
    SupportTooLow {
        stand_height: f64,
        min_stand_height: f64,
    },
}

/// 계산을 중단시키는 입력 오류. 처음 발견된 하나만 보고된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputDataError {
    #[error("{quantity} 값은 0보다 커야 합니다 (입력값 {value})")]
    InvalidInputMagnitude { quantity: InputQuantity, value: f64 },

    /// 허용 경사각 범위 밖. 한계값은 라디안.
    #[error("경사각 {angle:.4} rad 가 허용 범위 [{min:.4}, {max:.4}] rad 밖입니다")]
    InvalidTiltAngle { angle: f64, min: f64, max: f64 },

    #[error("{series} 호칭 {value} 은(는) 표준 치수 계열에 없습니다")]
    NonStandardSizeClass { series: SeriesKind, value: i32 },

    /// 계열 안에서 조건을 만족하는 호칭을 찾지 못했다.
    #[error("{series} 조건을 만족하는 호칭이 없습니다 (요구값 {required:.3} m)")]
    UnresolvableSizeClass { series: SeriesKind, required: f64 },

    #[error("배출 높이 {drop:.3} m 가 최소 배출 높이 {min_drop:.3} m 보다 낮습니다")]
    DischargeBelowMinimum { drop: f64, min_drop: f64 },

    #[error("그레이트 호칭 {grate_height_class} 이(가) 스크린 호칭 {screen_height_class} 보다 {max_difference} 단계 넘게 높습니다")]
    ExcessiveHeightMismatch {
        screen_height_class: i32,
        grate_height_class: i32,
        max_difference: i32,
    },

    #[error("기하 오류: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("프로파일 수 {count} 개 (최소 2개) - 간격이 너무 큽니다")]
    InsufficientProfileCount { count: i64 },

    #[error("수위 {level:.3} m 가 상한 {limit:.3} m 이상입니다")]
    WaterLevelExceedsBounds {
        level: f64,
        bound: LevelBound,
        limit: f64,
    },
}

/// 오류 종류만 비교할 때 쓰는 구분자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInputMagnitude,
    InvalidTiltAngle,
    NonStandardSizeClass,
    UnresolvableSizeClass,
    DischargeBelowMinimum,
    ExcessiveHeightMismatch,
    InvalidGeometry,
    InsufficientProfileCount,
    WaterLevelExceedsBounds,
}

impl InputDataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InputDataError::InvalidInputMagnitude { .. } => ErrorKind::InvalidInputMagnitude,
            InputDataError::InvalidTiltAngle { .. } => ErrorKind::InvalidTiltAngle,
            InputDataError::NonStandardSizeClass { .. } => ErrorKind::NonStandardSizeClass,
            InputDataError::UnresolvableSizeClass { .. } => ErrorKind::UnresolvableSizeClass,
            InputDataError::DischargeBelowMinimum { .. } => ErrorKind::DischargeBelowMinimum,
            InputDataError::ExcessiveHeightMismatch { .. } => ErrorKind::ExcessiveHeightMismatch,
            InputDataError::InvalidGeometry(_) => ErrorKind::InvalidGeometry,
            InputDataError::InsufficientProfileCount { .. } => ErrorKind::InsufficientProfileCount,
            InputDataError::WaterLevelExceedsBounds { .. } => ErrorKind::WaterLevelExceedsBounds,
        }
    }
}
