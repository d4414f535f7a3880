use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::{LengthUnit, PriceUnit};

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 미터법(mm 기본). 내부 계산 기본값.
    Metric,
    /// 영국식/야드파운드법
    Imperial,
}

/// 치수 필드별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    /// 길이/폭/높이 필드 기본 단위
    pub length: LengthUnit,
    /// 직경/두께 필드 기본 단위
    pub compact: LengthUnit,
    pub price: PriceUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Metric)
    }
}

impl DefaultUnits {
    /// 프리셋에 맞는 기본 단위 세트.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Metric => Self {
                length: LengthUnit::Millimeter,
                compact: LengthUnit::Millimeter,
                price: PriceUnit::RupeePerKg,
            },
            UnitSystem::Imperial => Self {
                length: LengthUnit::Foot,
                compact: LengthUnit::Inch,
                price: PriceUnit::RupeePerKg,
            },
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드(en/hi/auto)
    pub language: String,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config io error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
