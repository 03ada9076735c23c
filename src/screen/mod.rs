//! 바 스크린 크기 산정 파이프라인.
//!
//! 입력 검증 → 호칭 결정 → 수리 계산 → 그레이트 호칭 → 기하 검증 → 기계 치수 →
//! 구동부 선정 → 질량 → 호칭 문자열 순서로 한 번에 계산한다. 각 검증은 필요한 값이
//! 준비되는 즉시 수행되며 첫 번째 실패에서 바로 중단한다.

pub mod designation;
pub mod dimensions;
pub mod drive;
pub mod geometry;
pub mod hydraulics;
pub mod input;
pub mod mass;
pub mod settings;

pub use designation::{format_designation, DesignationParts};
pub use drive::DriveSelection;
pub use hydraulics::{Hydraulic, HydraulicInput, HydraulicWarning, POLLUTIONS};
pub use input::InputData;
pub use mass::{MassBreakdown, MassInputs, MassItem};
pub use settings::{AnglePolicy, CalcSettings, HeavyDrive};

use tracing::debug;

use crate::catalog::{Construction, SeriesKind};
use crate::error::{GeometryError, InputDataError, LevelBound};
use crate::numeric::{approx_eq, approx_ge, approx_le, approx_lt};
use crate::trace::{CalcTrace, TraceUnit};

use geometry::{GrateBound, MAX_GRATE_ABOVE_SCREEN};

/// 폭 호칭 차이(수로 - 스크린)의 허용 범위.
const MAX_WIDTH_CLASS_DIFFERENCE: i32 = 2;
/// 질량식이 검증된 표준 범위의 최대 폭/높이 호칭.
const STANDARD_MAX_WIDTH_CLASS: i32 = 24;
const STANDARD_MAX_HEIGHT_CLASS: i32 = 30;

/// 계산 결과. 파이프라인이 끝난 뒤에는 읽기 전용이다.
#[derive(Debug, Clone, PartialEq)]
pub struct BarScreen {
    pub input: InputData,
    pub construction: Construction,
    pub width_class: i32,
    pub height_class: i32,
    pub grate_height_class: i32,
    pub channel_width_class: i32,
    /// 수로 폭 호칭 - 스크린 폭 호칭 (0..=2)
    pub width_class_difference: i32,
    /// 수로 바닥에서 배출점까지 [m]
    pub full_drop_height: f64,
    /// 수로 상단 위 배출 높이 [m]
    pub discharge_height: f64,
    pub discharge_width: f64,
    pub inner_width: f64,
    /// 수로 바닥 기준 스크린 내부 높이 [m]
    pub inner_height: f64,
    pub profile_count: i64,
    /// 프로파일 피치 [m]
    pub step: f64,
    /// 실제 간격 [m]
    pub actual_gap: f64,
    pub efficiency: f64,
    /// 오염도 10/20/30/40 % 순서
    pub hydraulics: [Hydraulic; 4],
    pub warnings: Vec<HydraulicWarning>,
    pub pivot_height: f64,
    pub stand_height: f64,
    pub stand_height_class: i32,
    pub chain_length: f64,
    pub screen_length: f64,
    pub profile_length: f64,
    pub rake_count: i64,
    /// false면 질량은 근사값이다.
    pub is_standard_series: bool,
    /// 최소 필요 토크 [N·m]
    pub required_torque: f64,
    pub drive: Option<DriveSelection>,
    /// 스프링 예압 [m]
    pub spring_preload: Option<f64>,
    pub backwall_height_class: i32,
    pub cover_height_class: i32,
    pub covers_count: i64,
    pub is_heavy: bool,
    pub mass: MassBreakdown,
    pub designation: String,
    pub trace: CalcTrace,
}

impl BarScreen {
    /// 총 질량 [kg].
    pub fn mass(&self) -> f64 {
        self.mass.total
    }

    /// 소형 구조 여부.
    pub fn is_small(&self) -> bool {
        self.construction.is_small()
    }

    /// 주어진 오염도의 수리 결과.
    pub fn hydraulic(&self, pollution: f64) -> Option<&Hydraulic> {
        self.hydraulics
            .iter()
            .find(|h| approx_eq(h.pollution, pollution))
    }

    /// 구동부 정격 토크가 필요 토크 이상인지.
    pub fn drive_passed(&self) -> bool {
        self.drive.is_some_and(|d| d.passed)
    }
}

/// 기본 설정으로 계산한다.
pub fn compute(input: InputData) -> Result<BarScreen, InputDataError> {
    compute_with(input, &CalcSettings::default())
}

fn check_tilt_angle(angle: f64, settings: &CalcSettings) -> Result<(), InputDataError> {
    let (min, max) = settings.angle_policy.limits();
    if approx_le(min, angle) && approx_le(angle, max) {
        Ok(())
    } else {
        Err(InputDataError::InvalidTiltAngle { angle, min, max })
    }
}

fn resolve_height_class(input: &InputData) -> Result<i32, InputDataError> {
    let Some(hs) = input.screen_height_class else {
        return geometry::optimal_height_class(input.channel_depth, input.min_discharge_height);
    };
    let drop = geometry::full_drop_height(hs) - input.channel_depth;
    if approx_lt(drop, input.min_discharge_height) {
        return Err(InputDataError::DischargeBelowMinimum {
            drop,
            min_drop: input.min_discharge_height,
        });
    }
    Ok(hs)
}

fn check_width_difference(
    channel_width_class: i32,
    width_class: i32,
) -> Result<i32, GeometryError> {
    let difference = channel_width_class - width_class;
    if difference < 0 {
        return Err(GeometryError::ChannelTooNarrow {
            channel_width_class,
            screen_width_class: width_class,
        });
    }
    if difference > MAX_WIDTH_CLASS_DIFFERENCE {
        return Err(GeometryError::ChannelTooWide {
            channel_width_class,
            screen_width_class: width_class,
        });
    }
    Ok(difference)
}

fn check_final_level(
    final_level: Option<f64>,
    depth: f64,
    inner_height: f64,
) -> Result<(), InputDataError> {
    let Some(level) = final_level else {
        return Ok(());
    };
    for (bound, limit) in [
        (LevelBound::ChannelDepth, depth),
        (LevelBound::InnerScreenHeight, inner_height),
    ] {
        if approx_ge(level, limit) {
            return Err(InputDataError::WaterLevelExceedsBounds { level, bound, limit });
        }
    }
    Ok(())
}

/// 설정을 지정하여 계산한다.
pub fn compute_with(
    input: InputData,
    settings: &CalcSettings,
) -> Result<BarScreen, InputDataError> {
    let mut trace = CalcTrace::new();
    let profile = input.filter_profile;
    let bar = profile.width;

    input.check_magnitudes()?;
    check_tilt_angle(input.tilt_angle, settings)?;
    geometry::check_override(SeriesKind::ScreenWidth, input.screen_width_class)?;
    geometry::check_override(SeriesKind::ScreenHeight, input.screen_height_class)?;
    geometry::check_override(SeriesKind::GrateHeight, input.grate_height_class)?;

    let ws = match input.screen_width_class {
        Some(ws) => ws,
        None => geometry::width_class_for_channel(input.channel_width)?,
    };
    trace.record("screen width class", f64::from(ws), TraceUnit::SizeClass);
    let hs = resolve_height_class(&input)?;
    trace.record("screen height class", f64::from(hs), TraceUnit::SizeClass);
    let full_drop_height = trace.record(
        "full drop height",
        geometry::full_drop_height(hs),
        TraceUnit::Meter,
    );
    let discharge_height = full_drop_height - input.channel_depth;
    let construction = Construction::classify(ws, hs);
    debug!(ws, hs, ?construction, "screen size classes resolved");

    let inner_width = trace.record(
        "inner width",
        dimensions::inner_width(ws, construction),
        TraceUnit::Meter,
    );
    let nominal_count = dimensions::nominal_profile_count(inner_width, bar, input.nominal_gap);
    if nominal_count < 1 {
        return Err(InputDataError::InsufficientProfileCount {
            count: nominal_count,
        });
    }
    let (step, actual_gap) = dimensions::actual_pitch_and_gap(inner_width, bar, nominal_count);
    trace.record("profile step", step, TraceUnit::Meter);
    trace.record("actual gap", actual_gap, TraceUnit::Meter);

    let hydraulic_input = HydraulicInput {
        gap: actual_gap,
        bar_width: bar,
        shape_factor: profile.shape_factor,
        inner_width,
        channel_width: input.channel_width,
        tilt_angle: input.tilt_angle,
        water_flow: input.water_flow,
        final_level: input.final_level,
    };
    let efficiency = trace.record("efficiency", hydraulic_input.efficiency(), TraceUnit::Ratio);
    let hydraulics = hydraulics::calc_hydraulics(&hydraulic_input);
    let max_start_level = hydraulics::max_start_level(&hydraulics);
    debug!(efficiency, ?max_start_level, "hydraulics computed");

    let gs = match input.grate_height_class {
        Some(gs) => gs,
        None => geometry::optimal_grate_class(GrateBound::from_levels(
            max_start_level,
            input.final_level,
            input.channel_depth,
        ))?,
    };
    trace.record("grate height class", f64::from(gs), TraceUnit::SizeClass);
    let inner_height = trace.record(
        "inner screen height",
        geometry::inner_screen_height(gs),
        TraceUnit::Meter,
    );
    if hs - gs < -MAX_GRATE_ABOVE_SCREEN {
        return Err(InputDataError::ExcessiveHeightMismatch {
            screen_height_class: hs,
            grate_height_class: gs,
            max_difference: MAX_GRATE_ABOVE_SCREEN,
        });
    }

    let channel_width_class = geometry::channel_width_class(input.channel_width);
    let width_class_difference = check_width_difference(channel_width_class, ws)?;

    let pivot_height = dimensions::pivot_height(hs);
    let stand_height = trace.record(
        "stand height",
        pivot_height - input.channel_depth,
        TraceUnit::Meter,
    );
    let stand_height_class = dimensions::stand_height_class(stand_height)?;
    trace.record("stand height class", f64::from(stand_height_class), TraceUnit::SizeClass);

    let profile_count = dimensions::profile_count(inner_width, bar, actual_gap);
    trace.record("profile count", profile_count as f64, TraceUnit::Count);
    if profile_count < 2 {
        return Err(InputDataError::InsufficientProfileCount {
            count: profile_count,
        });
    }
    check_final_level(input.final_level, input.channel_depth, inner_height)?;
    debug!(gs, channel_width_class, stand_height_class, profile_count, "geometry validated");

    let warnings = hydraulics::hydraulic_warnings(&hydraulics, input.channel_depth, inner_height);

    let chain_length = trace.record(
        "chain length",
        dimensions::chain_length(construction, hs)?,
        TraceUnit::Meter,
    );
    let screen_length = dimensions::screen_length(construction, hs, chain_length);
    let rake_count = dimensions::rake_count(chain_length);
    trace.record("rake count", rake_count as f64, TraceUnit::Count);
    let is_standard_series = ws <= STANDARD_MAX_WIDTH_CLASS && hs <= STANDARD_MAX_HEIGHT_CLASS;

    let required_torque = trace.record(
        "required torque",
        drive::required_torque(construction, chain_length, ws),
        TraceUnit::NewtonMeter,
    );
    let drive = drive::select_drive(construction, required_torque);
    let spring_preload = drive
        .as_ref()
        .map(|selection| drive::spring_preload(construction, required_torque, selection));
    if let Some(preload) = spring_preload {
        trace.record("spring preload", preload, TraceUnit::Meter);
    }
    debug!(
        required_torque,
        drive = drive.map(|d| d.option.drive.designation),
        ?spring_preload,
        "drive selected"
    );

    let profile_length = dimensions::profile_length(gs, profile.is_removable);
    let discharge_width = dimensions::discharge_width(ws);
    let backwall_height_class = dimensions::backwall_height_class(hs, gs);
    let cover_height_class =
        dimensions::cover_height_class(backwall_height_class, stand_height_class);
    let covers_count = dimensions::covers_count(ws);
    let is_heavy = settings.heavy_drive.applies(hs);

    let mass = mass::total_mass(
        construction,
        &MassInputs {
            width_class: ws,
            height_class: hs,
            grate_height_class: gs,
            width_class_difference,
            backwall_height_class,
            cover_height_class,
            stand_height_class,
            profile_count,
            rake_count,
            covers_count,
            chain_length,
            profile,
            is_heavy,
        },
    );
    trace.record("total mass", mass.total, TraceUnit::Kilogram);

    let designation = format_designation(&DesignationParts {
        construction,
        width_class: ws,
        height_class: hs,
        channel_width_class,
        grate_height_class: gs,
        profile_name: profile.name,
        gap: input.nominal_gap,
    });
    debug!(%designation, mass = mass.total, "bar screen computed");

    Ok(BarScreen {
        input,
        construction,
        width_class: ws,
        height_class: hs,
        grate_height_class: gs,
        channel_width_class,
        width_class_difference,
        full_drop_height,
        discharge_height,
        discharge_width,
        inner_width,
        inner_height,
        profile_count,
        step,
        actual_gap,
        efficiency,
        hydraulics,
        warnings,
        pivot_height,
        stand_height,
        stand_height_class,
        chain_length,
        screen_length,
        profile_length,
        rake_count,
        is_standard_series,
        required_torque,
        drive,
        spring_preload,
        backwall_height_class,
        cover_height_class,
        covers_count,
        is_heavy,
        mass,
        designation,
        trace,
    })
}
