use crate::config::Config;
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::pricing::PriceFeed;
use crate::project::ProjectBook;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 프로젝트 내보내기/가져오기 오류
    Project(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Config(e) => write!(f, "config error: {e}"),
            AppError::Conversion(e) => write!(f, "conversion error: {e}"),
            AppError::Project(e) => write!(f, "project error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Project(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 저장된 프로젝트와 시세 캐시는
/// 세션이 끝날 때까지 유지된다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut book = ProjectBook::new();
    let mut feed = PriceFeed::new();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculator => {
                ui_cli::handle_calculator(tr, config, &mut book, &mut feed)?
            }
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config)?,
            MenuChoice::Projects => ui_cli::handle_projects(tr, &mut book)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
