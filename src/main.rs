use clap::Parser;
use tracing_subscriber::EnvFilter;

use bar_screen_toolbox::app;
use bar_screen_toolbox::ui_cli::Cli;

/// 프로그램의 엔트리 포인트. 명령행을 해석한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

/// `RUST_LOG`가 있으면 그 값을, 없으면 `-v` 횟수에 따른 수준을 쓴다.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    app::run(cli)?;
    Ok(())
}
