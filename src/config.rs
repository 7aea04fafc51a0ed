use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::units::*;

/// 각 물리량별 기본 표시 단위 설정을 담는다. 지정하지 않은 항목은 기준 단위를 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub amount_of_substance: AmountOfSubstanceUnit,
    pub brake_specific_fuel_consumption: BrakeSpecificFuelConsumptionUnit,
    pub frequency: FrequencyUnit,
    pub permeability: PermeabilityUnit,
    pub relative_humidity: RelativeHumidityUnit,
    pub rotational_stiffness: RotationalStiffnessUnit,
    pub scalar: ScalarUnit,
    pub turbidity: TurbidityUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            amount_of_substance: AmountOfSubstanceUnit::BASE,
            brake_specific_fuel_consumption: BrakeSpecificFuelConsumptionUnit::BASE,
            frequency: FrequencyUnit::BASE,
            permeability: PermeabilityUnit::BASE,
            relative_humidity: RelativeHumidityUnit::BASE,
            rotational_stiffness: RotationalStiffnessUnit::BASE,
            scalar: ScalarUnit::BASE,
            turbidity: TurbidityUnit::BASE,
        }
    }
}

/// 표시 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 표시 시 남길 소수 자릿수. 없으면 전체 정밀도로 출력한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractional_digits: Option<u32>,
    #[serde(default)]
    pub default_units: DefaultUnits,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Deserialize(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        debug!(
            frequency = ?cfg.default_units.frequency,
            fractional_digits = ?cfg.fractional_digits,
            "설정 로드"
        );
        Ok(cfg)
    }

    /// 설정을 TOML 문자열로 만든다.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
