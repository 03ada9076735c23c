use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::catalog::{find_profile, FilterProfile};
use crate::screen::input::{DEFAULT_DISCHARGE_HEIGHT, NOMINAL_TILT_ANGLE_DEG};
use crate::screen::CalcSettings;

/// `--config`를 생략했을 때의 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// CLI에서 생략된 입력 항목에 쓰는 기본값. 길이는 mm, 각도는 °로 적는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub min_discharge_height_mm: f64,
    pub tilt_angle_deg: f64,
    pub filter_profile: String,
    pub nominal_gap_mm: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            min_discharge_height_mm: DEFAULT_DISCHARGE_HEIGHT * 1000.0,
            tilt_angle_deg: NOMINAL_TILT_ANGLE_DEG,
            filter_profile: "3999".to_string(),
            nominal_gap_mm: 5.0,
        }
    }
}

impl InputDefaults {
    /// 기본 프로파일 이름을 카탈로그에서 찾는다.
    pub fn profile(&self) -> Option<FilterProfile> {
        find_profile(&self.filter_profile).copied()
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: CalcSettings,
    #[serde(default)]
    pub defaults: InputDefaults,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정으로 새로 만든다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
