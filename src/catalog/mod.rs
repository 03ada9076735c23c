//! 제조사 고정 데이터(표준 치수 계열, 필터 프로파일, 감속모터, 체인 길이)를 모아둔다.
//! 모든 테이블은 정적이며 계산 중 변경되지 않는다.

pub mod chains;
pub mod drives;
pub mod profiles;
pub mod series;

pub use drives::{drive_catalog, DriveOption, DriveUnit, Spring};
pub use profiles::{find_profile, profiles, FilterProfile};
pub use series::{SeriesKind, SizeSeries, GRATE_SERIES, HEIGHT_SERIES, WIDTH_SERIES};

use serde::{Deserialize, Serialize};

/// 스크린 구조 형식. 질량식, 체인 테이블, 구동부 카탈로그가 모두 이 값에 따라 갈린다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Construction {
    /// 소형 구조 (일체형 본체)
    Small,
    /// 대형 구조 (프레임/백월/테이블 분리형)
    Large,
}

impl Construction {
    /// 폭/높이 호칭으로 구조 형식을 판정한다.
    ///
    /// `(ws <= 7 && hs <= 15) || (ws <= 9 && hs <= 12)` 이면 소형이다.
    pub fn classify(width_class: i32, height_class: i32) -> Self {
        let small = (width_class <= 7 && height_class <= 15)
            || (width_class <= 9 && height_class <= 12);
        if small {
            Construction::Small
        } else {
            Construction::Large
        }
    }

    pub fn is_small(self) -> bool {
        self == Construction::Small
    }

    /// 형식 기호 (РКЭм / РКЭ).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Construction::Small => "РКЭм",
            Construction::Large => "РКЭ",
        }
    }
}
