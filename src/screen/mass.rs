//! 조립품별 경험식으로 스크린 질량을 합산한다.
//!
//! 소형/대형 구조는 부품 구성이 달라 식 묶음이 따로 있다. 공통 부분은 그리드
//! (필터 캔버스) 조립품이며 빔, 프로파일, 고정 나사로 이루어진다. 모든 계수는
//! 회귀로 얻은 고정값이다.

use crate::catalog::{Construction, FilterProfile};

/// 질량식에 들어가는 호칭과 수량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassInputs {
    pub width_class: i32,
    pub height_class: i32,
    pub grate_height_class: i32,
    pub width_class_difference: i32,
    pub backwall_height_class: i32,
    pub cover_height_class: i32,
    pub stand_height_class: i32,
    pub profile_count: i64,
    pub rake_count: i64,
    pub covers_count: i64,
    pub chain_length: f64,
    pub profile: FilterProfile,
    pub is_heavy: bool,
}

impl MassInputs {
    fn ws(&self) -> f64 {
        f64::from(self.width_class)
    }

    fn hs(&self) -> f64 {
        f64::from(self.height_class)
    }

    fn gs(&self) -> f64 {
        f64::from(self.grate_height_class)
    }

    fn ws_diff(&self) -> f64 {
        f64::from(self.width_class_difference)
    }
}

/// 질량 내역 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct MassItem {
    pub name: &'static str,
    /// 1개 질량 [kg]
    pub unit_mass: f64,
    pub quantity: f64,
}

impl MassItem {
    fn new(name: &'static str, unit_mass: f64, quantity: f64) -> Self {
        Self {
            name,
            unit_mass,
            quantity,
        }
    }

    fn single(name: &'static str, unit_mass: f64) -> Self {
        Self::new(name, unit_mass, 1.0)
    }

    pub fn mass(&self) -> f64 {
        self.unit_mass * self.quantity
    }
}

/// 최상위 조립품별 질량과 총 질량.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MassBreakdown {
    pub items: Vec<MassItem>,
    pub total: f64,
}

impl MassBreakdown {
    fn from_items(items: Vec<MassItem>) -> Self {
        let total = sum(&items);
        Self { items, total }
    }

    pub fn item(&self, name: &str) -> Option<&MassItem> {
        self.items.iter().find(|item| item.name == name)
    }
}

fn sum(items: &[MassItem]) -> f64 {
    items.iter().map(MassItem::mass).sum()
}

/// 그리드 조립품 질량 (빔 2, 프로파일 n, 나사 4).
pub fn grid_assembly_mass(construction: Construction, inputs: &MassInputs) -> f64 {
    let (balk, screw) = match construction {
        Construction::Small => (small::grid_balk(inputs), small::GRID_SCREW),
        Construction::Large => (large::grid_balk(inputs), large::GRID_SCREW),
    };
    balk * 2.0
        + inputs.profile.mass(inputs.grate_height_class) * inputs.profile_count as f64
        + screw * 4.0
}

/// 구조 형식에 맞는 식 묶음으로 총 질량을 구한다.
pub fn total_mass(construction: Construction, inputs: &MassInputs) -> MassBreakdown {
    let grid = grid_assembly_mass(construction, inputs);
    let items = match construction {
        Construction::Small => small::items(inputs, grid),
        Construction::Large => large::items(inputs, grid),
    };
    MassBreakdown::from_items(items)
}

mod large {
    use super::{sum, MassInputs, MassItem};

    pub const GRID_SCREW: f64 = 0.16;

    pub fn grid_balk(p: &MassInputs) -> f64 {
        0.6919 * p.ws() - 0.7431
    }

    fn side_wall_left(p: &MassInputs) -> f64 {
        2.7233 * p.hs() + 46.32
    }

    fn side_wall_right(p: &MassInputs) -> f64 {
        2.7467 * p.hs() + 46.03
    }

    fn cross_balk(p: &MassInputs) -> f64 {
        0.5963 * p.ws() - 0.3838
    }

    fn pivot_balk(p: &MassInputs) -> f64 {
        0.5881 * p.ws() + 0.4531
    }

    fn top_balk(p: &MassInputs) -> f64 {
        0.8544 * p.ws() - 0.1806
    }

    fn middle_balk(p: &MassInputs) -> f64 {
        0.6313 * p.ws() + 0.1013
    }

    fn hinge(p: &MassInputs) -> f64 {
        0.605 * p.ws_diff() + 3.36
    }

    fn spacer_balk(p: &MassInputs) -> f64 {
        0.445 * p.ws() - 0.245
    }

    fn cover_balk(p: &MassInputs) -> f64 {
        if p.width_class <= 10 {
            0.136 * p.ws() + 0.13
        } else {
            0.1358 * p.ws() + 0.2758
        }
    }

    fn frame(p: &MassInputs) -> f64 {
        sum(&[
            MassItem::single("side wall L", side_wall_left(p)),
            MassItem::single("side wall R", side_wall_right(p)),
            MassItem::new("cross balk", cross_balk(p), 2.0),
            MassItem::single("pivot balk", pivot_balk(p)),
            MassItem::single("top balk", top_balk(p)),
            MassItem::single("middle balk", middle_balk(p)),
            MassItem::new("hinge", hinge(p), 2.0),
            MassItem::single("spacer balk", spacer_balk(p)),
            MassItem::single("cover balk", cover_balk(p)),
            MassItem::new("split lug", 0.42, 2.0),
            MassItem::single("fasteners", 2.22),
        ])
    }

    fn tray(p: &MassInputs) -> f64 {
        1.5024 * p.ws() - 0.1065
    }

    fn backwall(p: &MassInputs) -> f64 {
        let bw = f64::from(p.backwall_height_class);
        0.2886 * bw * p.ws() - 0.2754 * bw + 2.2173 * p.ws() - 2.6036
    }

    fn body(p: &MassInputs, grid: f64) -> f64 {
        sum(&[
            MassItem::single("frame", frame(p)),
            MassItem::single("tray", tray(p)),
            MassItem::single("grid", grid),
            MassItem::single("table", backwall(p)),
            MassItem::new("ski", 0.62, 2.0),
            MassItem::single("fasteners", 1.07),
        ])
    }

    fn drive_assembly(p: &MassInputs) -> f64 {
        let heavy = if p.is_heavy { 2.29 } else { 0.0 };
        1.85 * p.ws() + 97.28 + heavy
    }

    fn side_screen(p: &MassInputs) -> f64 {
        0.12 * p.ws_diff() * p.gs() + 2.12 * p.ws_diff() + 0.4967 * p.gs() - 1.32
    }

    // 프로파일 종류와 간격은 무시된다.
    fn rake(p: &MassInputs) -> f64 {
        0.5524 * p.ws() + 0.2035
    }

    fn ejector(p: &MassInputs) -> f64 {
        0.8547 * p.ws() + 1.4571
    }

    fn top_cover(p: &MassInputs) -> f64 {
        0.5218 * p.ws() + 0.6576
    }

    fn floor_stand(p: &MassInputs) -> f64 {
        match p.stand_height_class {
            6 => 17.81,
            7 => 21.47,
            shs => 1.8267 * f64::from(shs) + 8.0633,
        }
    }

    fn discharge(p: &MassInputs) -> f64 {
        1.7871 * p.ws() - 0.4094
    }

    fn front_cover(p: &MassInputs) -> f64 {
        let ch = f64::from(p.cover_height_class);
        if p.width_class <= 10 {
            0.06 * ch * p.ws() - 0.055 * ch + 0.3167 * p.ws() + 0.3933
        } else {
            0.03 * ch * p.ws() - 0.0183 * ch + 0.1582 * p.ws() + 0.6052
        }
    }

    fn rod_frame(p: &MassInputs) -> f64 {
        0.1811 * p.gs() + 0.49 * p.ws() + 0.7867
    }

    fn pin_sensor(p: &MassInputs) -> f64 {
        0.0161 * p.gs() + 0.2067
    }

    fn chain(p: &MassInputs) -> f64 {
        4.18 * p.chain_length
    }

    pub fn items(p: &MassInputs, grid: f64) -> Vec<MassItem> {
        vec![
            MassItem::single("RKE-01 body", body(p, grid)),
            MassItem::single("RKE-02 drive", drive_assembly(p)),
            MassItem::new("RKE-03 side screen", side_screen(p), 2.0),
            MassItem::new("RKE-04 rake", rake(p), p.rake_count as f64),
            MassItem::single("RKE-05 ejector", ejector(p)),
            MassItem::single("RKE-06 top cover", top_cover(p)),
            MassItem::single("RKE-07 socket wrench", 1.08),
            MassItem::new("RKE-08 floor stand", floor_stand(p), 2.0),
            MassItem::single("RKE-09 discharge chute", discharge(p)),
            MassItem::new("RKE-10 front cover", front_cover(p), p.covers_count as f64),
            MassItem::new("RKE-11 side cover", 0.42, 2.0),
            MassItem::new("RKE-12 ejector stop", 0.16, 2.0),
            MassItem::single("RKE-13 rod frame", rod_frame(p)),
            MassItem::new("RKE-18 slider", 1.13, 2.0),
            MassItem::single("RKE-19 pin sensor", pin_sensor(p)),
            MassItem::new("drive guide", 0.87, 4.0),
            MassItem::new("ejector bushing", 0.01, 2.0),
            MassItem::new("Tr20x4 nut", 0.15, 2.0),
            MassItem::new("MS56-R-100 chain", chain(p), 2.0),
            MassItem::single("fasteners", 1.24),
        ]
    }
}

mod small {
    use super::{sum, MassInputs, MassItem};

    pub const GRID_SCREW: f64 = 0.08;

    pub fn grid_balk(p: &MassInputs) -> f64 {
        0.3825 * p.ws() - 0.565
    }

    fn frame(p: &MassInputs) -> f64 {
        1.95 * p.ws() + 3.18 * p.hs() + 50.02
    }

    fn backwall(p: &MassInputs) -> f64 {
        let bw = f64::from(p.backwall_height_class);
        0.2358 * p.ws() * bw + 1.3529 * p.ws() - 0.0383 * bw - 0.8492
    }

    fn tray(p: &MassInputs) -> f64 {
        0.7575 * p.ws() - 0.225
    }

    fn body(p: &MassInputs, grid: f64) -> f64 {
        sum(&[
            MassItem::single("frame", frame(p)),
            MassItem::single("table", backwall(p)),
            MassItem::single("tray", tray(p)),
            MassItem::new("ski", 0.45, 2.0),
            MassItem::new("split lug", 0.42, 2.0),
            MassItem::single("grid", grid),
            MassItem::single("fasteners", 1.02),
        ])
    }

    fn front_cover(p: &MassInputs) -> f64 {
        let ch = f64::from(p.cover_height_class);
        0.1175 * p.ws() * ch + 0.8413 * p.ws() - 0.085 * ch + 0.0125
    }

    /// 체인 1가닥 (MS28-R-63).
    fn chain(p: &MassInputs) -> f64 {
        4.5455 * p.chain_length
    }

    fn rake(p: &MassInputs) -> f64 {
        0.47 * p.ws() - 0.06
    }

    fn chain_with_rakes(p: &MassInputs) -> f64 {
        sum(&[
            MassItem::new("chain", chain(p), 2.0),
            MassItem::new("rake", rake(p), p.rake_count as f64),
            MassItem::single("fasteners", 0.12),
        ])
    }

    fn discharge(p: &MassInputs) -> f64 {
        1.3 * p.ws() + 0.75
    }

    fn top_cover(p: &MassInputs) -> f64 {
        0.2775 * p.ws() + 0.655
    }

    /// 축, 베어링 포함 구동부.
    fn drive_assembly(p: &MassInputs) -> f64 {
        1.2725 * p.ws() + 15.865
    }

    fn ejector(p: &MassInputs) -> f64 {
        0.475 * p.ws() + 0.47
    }

    fn rod_frame(p: &MassInputs) -> f64 {
        0.34 * p.ws() + 0.2883 * p.gs() - 1.195
    }

    /// 수로 위 지지대.
    fn support(p: &MassInputs) -> f64 {
        1.07 * f64::from(p.stand_height_class) + 11.91
    }

    fn side_screen(p: &MassInputs) -> f64 {
        0.1503 * p.ws_diff() * p.gs() + 0.7608 * p.ws_diff() + 0.4967 * p.gs() - 2.81
    }

    pub fn items(p: &MassInputs, grid: f64) -> Vec<MassItem> {
        vec![
            MassItem::single("body", body(p, grid)),
            MassItem::single("front cover", front_cover(p)),
            MassItem::single("chain with rakes", chain_with_rakes(p)),
            MassItem::single("discharge chute", discharge(p)),
            MassItem::single("top cover", top_cover(p)),
            MassItem::single("drive", drive_assembly(p)),
            MassItem::single("ejector", ejector(p)),
            MassItem::single("rod frame", rod_frame(p)),
            MassItem::new("support", support(p), 2.0),
            MassItem::new("side screen", side_screen(p), 2.0),
            MassItem::single("other", 3.57),
        ]
    }
}
