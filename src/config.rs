use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::numeric::Numeric;
use crate::quantity::Quantity;
use crate::units::*;

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub mass: MassUnit,
    pub time: TimeUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            mass: MassUnit::Milligrams,
            time: TimeUnit::Minutes,
        }
    }
}

/// 라이브러리 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub default_units: DefaultUnits,
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
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
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

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        tracing::debug!(path = %path.as_ref().display(), "config saved");
        Ok(())
    }

    /// 질량을 기본 질량 단위로 환산한다.
    pub fn normalize_mass<V: Numeric>(
        &self,
        quantity: Quantity<V, MassUnit>,
    ) -> Quantity<V, MassUnit> {
        quantity.convert(self.default_units.mass)
    }

    /// 시간을 기본 시간 단위로 환산한다.
    pub fn normalize_time<V: Numeric>(
        &self,
        quantity: Quantity<V, TimeUnit>,
    ) -> Quantity<V, TimeUnit> {
        quantity.convert(self.default_units.time)
    }
}
