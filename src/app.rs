use thiserror::Error;

use crate::config::{self, ConfigError};
use crate::error::InputDataError;
use crate::screen;
use crate::ui_cli::{self, Cli, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("계산 오류: {0}")]
    Calc(#[from] InputDataError),
    /// 카탈로그에 없는 필터 프로파일 이름
    #[error("알 수 없는 필터 프로파일: {0}")]
    UnknownProfile(String),
}

/// 명령 하나를 실행한다.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_from(&cli.config)?;
    match &cli.command {
        Command::Calc(args) => {
            let input = ui_cli::build_input(args, &cfg.defaults)?;
            let screen = screen::compute_with(input, &cfg.settings)?;
            ui_cli::print_report(&screen, args.trace);
        }
        Command::Profiles => ui_cli::print_profiles(),
        Command::Drives => ui_cli::print_drives(),
    }
    Ok(())
}
