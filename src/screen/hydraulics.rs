//! 오염(막힘) 수준별 수리 계산.
//!
//! 오염도 10/20/30/40 % 각각에 대해 유효 통수 면적, 막힘 계수, Kirschmer 형
//! 손실 수두를 구하고, 후단 수위가 주어지면 3차 방정식을 풀어 수위 상승량을 얻는다.

use tracing::warn;

use crate::numeric::{approx_ge, approx_gt, round_to};

/// 중력 가속도 [m/s²].
pub const GRAV_ACC: f64 = 9.80665;

/// 계산하는 오염도 (막힌 면적 비율).
pub const POLLUTIONS: [f64; 4] = [0.1, 0.2, 0.3, 0.4];

/// 오염도 하나에 대한 수리 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hydraulic {
    pub pollution: f64,
    /// 상대 통수 면적
    pub relative_flow_area: f64,
    /// 막힘 계수. 길이 차원의 경험값이며 물리적 의미는 정해져 있지 않다.
    pub blinding_factor: f64,
    /// 스크린 전후 수위차 [m]
    pub level_diff: Option<f64>,
    /// 스크린 전단 수위 [m]
    pub start_level: Option<f64>,
    /// 전단 수로 유속 [m/s]
    pub upstream_velocity: Option<f64>,
    /// 간격 내 유속 [m/s]
    pub velocity_in_gap: Option<f64>,
}

/// 수리 계산에 필요한 스크린/수로 값.
#[derive(Debug, Clone, Copy)]
pub struct HydraulicInput {
    /// 실제 간격 [m]
    pub gap: f64,
    pub bar_width: f64,
    pub shape_factor: f64,
    pub inner_width: f64,
    pub channel_width: f64,
    pub tilt_angle: f64,
    pub water_flow: Option<f64>,
    pub final_level: Option<f64>,
}

impl HydraulicInput {
    /// 유효 면적률 `gap / (gap + bar)`.
    pub fn efficiency(&self) -> f64 {
        self.gap / (self.gap + self.bar_width)
    }
}

/// 경고 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HydraulicWarning {
    /// 전단 수위가 수로 깊이를 넘는다.
    ChannelOverflow { pollution: f64 },
    /// 전단 수위가 그레이트 상단 이상이다. `excess`는 1 mm 단위로 반올림된 초과량.
    LevelAboveGrate { pollution: f64, excess: f64 },
}

/// Kirschmer 형 손실 수두 항.
pub fn head_loss_term(
    input: &HydraulicInput,
    pollution: f64,
    blinding_factor: f64,
    flow: f64,
) -> f64 {
    let velocity = flow / input.inner_width / (input.efficiency() * (1.0 - pollution));
    let shape_ratio = (input.bar_width + blinding_factor) / (input.gap - blinding_factor);
    velocity.powi(2) / (2.0 * GRAV_ACC)
        * input.tilt_angle.sin()
        * input.shape_factor
        * shape_ratio.powf(4.0 / 3.0)
}

/// `x³ + b·x² + c·x = d` 의 실근을 Cardano 공식으로 구한다 (`b = 2L`, `c = L²`).
///
/// 계수는 고정된 근사 상수를 그대로 쓴다. 판별식 항이 음수이거나 결과가
/// 유한하지 않으면 `None`을 돌려준다.
pub fn solve_level_rise(b: f64, c: f64, d: f64) -> Option<f64> {
    let discriminant = 27.0 * d.powi(2) + 18.0 * b * c * d + 4.0 * c.powi(3)
        - 4.0 * b.powi(3) * d
        - b.powi(2) * c.powi(2);
    if discriminant < 0.0 {
        warn!(b, c, d, discriminant, "level rise cubic has a negative discriminant");
        return None;
    }
    let a2 = 27.0 * d + 9.0 * b * c - 2.0 * b.powi(3) + 5.19615 * discriminant.sqrt();
    let b1 = 2187.0 * c - 729.0 * b.powi(2);
    let root = 0.264567 * a2.cbrt() - 0.000576096 * b1 / a2.cbrt() - 0.333333 * b;
    root.is_finite().then_some(root)
}

/// 오염도 하나에 대한 결과를 계산한다.
pub fn calc_hydraulic(input: &HydraulicInput, pollution: f64) -> Hydraulic {
    let efficiency = input.efficiency();
    let relative_flow_area = efficiency - pollution * input.gap / (input.bar_width + input.gap);
    let blinding_factor = input.gap - relative_flow_area * (input.gap + input.bar_width);
    let mut res = Hydraulic {
        pollution,
        relative_flow_area,
        blinding_factor,
        ..Hydraulic::default()
    };

    let (Some(flow), Some(level)) = (input.water_flow, input.final_level) else {
        return res;
    };
    let d = head_loss_term(input, pollution, blinding_factor, flow);
    let Some(level_diff) = solve_level_rise(2.0 * level, level.powi(2), d) else {
        return res;
    };
    let start_level = level + level_diff;
    res.level_diff = Some(level_diff);
    res.start_level = Some(start_level);
    res.upstream_velocity = Some(flow / (input.channel_width * start_level));
    res.velocity_in_gap =
        Some(flow / (input.inner_width * start_level * efficiency * (1.0 - pollution)));
    res
}

/// 네 가지 오염도 모두에 대해 계산한다.
pub fn calc_hydraulics(input: &HydraulicInput) -> [Hydraulic; 4] {
    POLLUTIONS.map(|pollution| calc_hydraulic(input, pollution))
}

/// 전단 수위 중 최대값.
pub fn max_start_level(hydraulics: &[Hydraulic]) -> Option<f64> {
    hydraulics
        .iter()
        .filter_map(|h| h.start_level)
        .reduce(f64::max)
}

/// 수로 범람과 그레이트 초과 여부를 점검한다.
pub fn hydraulic_warnings(
    hydraulics: &[Hydraulic],
    channel_depth: f64,
    inner_height: f64,
) -> Vec<HydraulicWarning> {
    let mut warnings = Vec::new();
    for h in hydraulics {
        let Some(start_level) = h.start_level else {
            continue;
        };
        if approx_gt(start_level, channel_depth) {
            warnings.push(HydraulicWarning::ChannelOverflow {
                pollution: h.pollution,
            });
        }
        let excess = round_to(start_level - inner_height, 3);
        if approx_ge(excess, 0.0) {
            warnings.push(HydraulicWarning::LevelAboveGrate {
                pollution: h.pollution,
                excess,
            });
        }
    }
    for w in &warnings {
        warn!(?w, "hydraulic warning");
    }
    warnings
}
