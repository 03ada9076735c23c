use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::AppError;
use crate::catalog::series::NOMINAL_GAPS_MM;
use crate::catalog::{drive_catalog, find_profile, profiles, Construction};
use crate::config::{InputDefaults, DEFAULT_CONFIG_PATH};
use crate::screen::{BarScreen, HydraulicWarning, InputData};

/// 바 스크린 크기 산정 도구.
#[derive(Debug, Parser)]
#[command(name = "bar_screen_toolbox_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 로그 상세도 (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 스크린을 산정한다.
    Calc(CalcArgs),
    /// 필터 프로파일 목록
    Profiles,
    /// 감속모터/스프링 목록
    Drives,
}

/// `calc` 입력. 길이는 mm, 유량은 l/s.
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// 수로 폭 [mm]
    #[arg(long)]
    pub width: f64,
    /// 수로 깊이 [mm]
    #[arg(long)]
    pub depth: f64,
    /// 최소 배출 높이 [mm]
    #[arg(long)]
    pub min_drop: Option<f64>,
    /// 공칭 간격 [mm]
    #[arg(long)]
    pub gap: Option<f64>,
    /// 필터 프로파일 이름
    #[arg(long)]
    pub profile: Option<String>,
    #[arg(long)]
    pub ws: Option<i32>,
    #[arg(long)]
    pub hs: Option<i32>,
    #[arg(long)]
    pub gs: Option<i32>,
    /// 유량 [l/s]
    #[arg(long)]
    pub flow: Option<f64>,
    /// 스크린 후단 수위 [mm]
    #[arg(long)]
    pub level: Option<f64>,
    /// 경사각 [°]
    #[arg(long)]
    pub angle: Option<f64>,
    /// 계산 과정 출력
    #[arg(long)]
    pub trace: bool,
}

fn milli(value: f64) -> f64 {
    value / 1000.0
}

/// 명령행 값(mm, l/s, °)을 SI 입력으로 바꾼다. 생략된 값은 설정 파일 기본값을 쓴다.
pub fn build_input(args: &CalcArgs, defaults: &InputDefaults) -> Result<InputData, AppError> {
    let profile_name = args.profile.as_deref().unwrap_or(&defaults.filter_profile);
    let profile = find_profile(profile_name)
        .copied()
        .ok_or_else(|| AppError::UnknownProfile(profile_name.to_string()))?;
    let gap = milli(args.gap.unwrap_or(defaults.nominal_gap_mm));
    let mut input = InputData::new(milli(args.width), milli(args.depth), profile, gap);
    input.screen_width_class = args.ws;
    input.screen_height_class = args.hs;
    input.grate_height_class = args.gs;
    input.min_discharge_height = milli(args.min_drop.unwrap_or(defaults.min_discharge_height_mm));
    input.tilt_angle = args.angle.unwrap_or(defaults.tilt_angle_deg).to_radians();
    input.water_flow = args.flow.map(milli);
    input.final_level = args.level.map(milli);
    Ok(input)
}

fn fmt_opt(value: Option<f64>, scale: f64, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", precision, v * scale))
}

/// 계산 결과 요약을 출력한다.
pub fn print_report(screen: &BarScreen, show_trace: bool) {
    println!("\n=== {} ===", screen.designation);
    let kind = match screen.construction {
        Construction::Small => "소형",
        Construction::Large => "대형",
    };
    println!("구조 형식: {kind}");
    println!(
        "호칭: 폭 {} / 높이 {} / 그레이트 {} (수로 폭 호칭 {})",
        screen.width_class,
        screen.height_class,
        screen.grate_height_class,
        screen.channel_width_class
    );
    println!("배출 높이(수로 상단 위): {:.0} mm", screen.discharge_height * 1000.0);
    println!(
        "내부 폭: {:.0} mm, 내부 높이: {:.0} mm",
        screen.inner_width * 1000.0,
        screen.inner_height * 1000.0
    );
    println!(
        "프로파일 {} 개, 실제 간격 {:.2} mm, 피치 {:.2} mm",
        screen.profile_count,
        screen.actual_gap * 1000.0,
        screen.step * 1000.0
    );
    println!(
        "지지대 높이: {:.0} mm (호칭 {})",
        screen.stand_height * 1000.0,
        screen.stand_height_class
    );
    println!("체인 길이: {:.3} m, 레이크 {} 개", screen.chain_length, screen.rake_count);
    println!("필요 토크: {:.0} N·m", screen.required_torque);
    if let Some(selection) = &screen.drive {
        let drive = &selection.option.drive;
        let spring = &selection.option.spring;
        let status = if selection.passed { "" } else { " (정격 토크 부족)" };
        println!(
            "구동부: {} {:.2} kW, {:.0} N·m, {:.1} rpm{status}",
            drive.designation,
            drive.power / 1000.0,
            drive.torque,
            drive.speed_rpm()
        );
        println!(
            "스프링: {}, 예압 {}",
            spring.designation,
            fmt_opt(screen.spring_preload, 1000.0, 1) + " mm"
        );
    }
    let approx = if screen.is_standard_series { "" } else { " (근사)" };
    println!("질량: {:.0} kg{approx}", screen.mass());

    println!("\n오염도 | 면적비 | 막힘계수 | 수위차 mm | 전단 수위 mm | 수로 유속 m/s | 간격 유속 m/s");
    for h in &screen.hydraulics {
        println!(
            "{:>5.0}% | {:.3} | {:.5} | {} | {} | {} | {}",
            h.pollution * 100.0,
            h.relative_flow_area,
            h.blinding_factor,
            fmt_opt(h.level_diff, 1000.0, 0),
            fmt_opt(h.start_level, 1000.0, 0),
            fmt_opt(h.upstream_velocity, 1.0, 2),
            fmt_opt(h.velocity_in_gap, 1.0, 2),
        );
    }
    for warning in &screen.warnings {
        match warning {
            HydraulicWarning::ChannelOverflow { pollution } => {
                println!("경고: 오염도 {:.0}% 에서 수로가 넘칩니다", pollution * 100.0)
            }
            HydraulicWarning::LevelAboveGrate { pollution, excess } => println!(
                "경고: 오염도 {:.0}% 에서 수위가 그레이트보다 {:.0} mm 높습니다",
                pollution * 100.0,
                excess * 1000.0
            ),
        }
    }

    if show_trace {
        println!("\n-- 계산 과정 --");
        for step in screen.trace.steps() {
            println!("{}: {} {}", step.name, step.value, step.unit.symbol());
        }
        println!("\n-- 질량 내역 --");
        for item in &screen.mass.items {
            println!("{}: {:.2} kg x {}", item.name, item.unit_mass, item.quantity);
        }
    }
}

pub fn print_profiles() {
    println!("이름 | 폭 mm | 탈착식 | 형상계수");
    for p in profiles() {
        println!(
            "{} | {:.1} | {} | {}",
            p.name,
            p.width * 1000.0,
            if p.is_removable { "예" } else { "아니오" },
            p.shape_factor
        );
    }
    let gaps: Vec<String> = NOMINAL_GAPS_MM.iter().map(|g| g.to_string()).collect();
    println!("표준 공칭 간격 [mm]: {}", gaps.join(", "));
}

pub fn print_drives() {
    for (title, construction) in [("소형", Construction::Small), ("대형", Construction::Large)] {
        println!("\n-- {title} --");
        for option in drive_catalog(construction) {
            let drive = &option.drive;
            println!(
                "{} | {:.0} kg | {:.2} kW | {:.0} N·m | {:.1} rpm | {} ({:.0} N/m)",
                drive.designation,
                drive.mass,
                drive.power / 1000.0,
                drive.torque,
                drive.speed_rpm(),
                option.spring.designation,
                option.spring.rate
            );
        }
    }
}
