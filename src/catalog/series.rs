use std::fmt;

use serde::{Deserialize, Serialize};

/// 일정 간격의 표준 치수 계열 (예: 3, 6, 9 ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSeries {
    pub first: i32,
    pub last: i32,
    pub step: i32,
}

impl SizeSeries {
    pub const fn new(first: i32, last: i32, step: i32) -> Self {
        Self { first, last, step }
    }

    /// 오름차순으로 모든 호칭을 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        (self.first..=self.last).step_by(self.step as usize)
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.first && value <= self.last && (value - self.first) % self.step == 0
    }

    pub fn len(&self) -> usize {
        ((self.last - self.first) / self.step + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }
}

/// 스크린 폭 치수 계열.
pub const WIDTH_SERIES: SizeSeries = SizeSeries::new(5, 30, 1);
/// 스크린 높이 치수 계열.
pub const HEIGHT_SERIES: SizeSeries = SizeSeries::new(3, 171, 3);
/// 그레이트(필터 캔버스) 높이 치수 계열.
pub const GRATE_SERIES: SizeSeries = SizeSeries::new(6, 60, 3);

/// 표준 공칭 간격 [mm].
pub const NOMINAL_GAPS_MM: &[f64] = &[
    5.0, 6.0, 8.0, 10.0, 12.0, 15.0, 16.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0,
    100.0,
];

/// 표준 공칭 간격을 미터 단위로 반환한다.
pub fn nominal_gaps() -> impl Iterator<Item = f64> {
    NOMINAL_GAPS_MM.iter().map(|gap_mm| gap_mm / 1000.0)
}

/// 어떤 치수 계열에 대한 값인지 구분한다. 오류 정보에 포함된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    ScreenWidth,
    ScreenHeight,
    GrateHeight,
}

impl SeriesKind {
    pub fn series(self) -> SizeSeries {
        match self {
            SeriesKind::ScreenWidth => WIDTH_SERIES,
            SeriesKind::ScreenHeight => HEIGHT_SERIES,
            SeriesKind::GrateHeight => GRATE_SERIES,
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::ScreenWidth => write!(f, "스크린 폭"),
            SeriesKind::ScreenHeight => write!(f, "스크린 높이"),
            SeriesKind::GrateHeight => write!(f, "그레이트 높이"),
        }
    }
}
