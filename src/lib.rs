//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 표 생성 도구 등에서도 쓸 수 있게 한다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod numeric;
pub mod screen;
pub mod trace;
pub mod ui_cli;

pub use error::{ErrorKind, InputDataError};
pub use screen::{compute, compute_with, BarScreen, CalcSettings, InputData};
