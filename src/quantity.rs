use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    AmountOfSubstance,
    BrakeSpecificFuelConsumption,
    Frequency,
    Permeability,
    RelativeHumidity,
    RotationalStiffness,
    Scalar,
    Turbidity,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::AmountOfSubstance,
        QuantityKind::BrakeSpecificFuelConsumption,
        QuantityKind::Frequency,
        QuantityKind::Permeability,
        QuantityKind::RelativeHumidity,
        QuantityKind::RotationalStiffness,
        QuantityKind::Scalar,
        QuantityKind::Turbidity,
    ];

    /// 물리량 이름(PascalCase).
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::AmountOfSubstance => "AmountOfSubstance",
            QuantityKind::BrakeSpecificFuelConsumption => "BrakeSpecificFuelConsumption",
            QuantityKind::Frequency => "Frequency",
            QuantityKind::Permeability => "Permeability",
            QuantityKind::RelativeHumidity => "RelativeHumidity",
            QuantityKind::RotationalStiffness => "RotationalStiffness",
            QuantityKind::Scalar => "Scalar",
            QuantityKind::Turbidity => "Turbidity",
        }
    }

    /// 설정 파일 키 등에 쓰는 snake_case 이름.
    pub fn snake_name(self) -> &'static str {
        match self {
            QuantityKind::AmountOfSubstance => "amount_of_substance",
            QuantityKind::BrakeSpecificFuelConsumption => "brake_specific_fuel_consumption",
            QuantityKind::Frequency => "frequency",
            QuantityKind::Permeability => "permeability",
            QuantityKind::RelativeHumidity => "relative_humidity",
            QuantityKind::RotationalStiffness => "rotational_stiffness",
            QuantityKind::Scalar => "scalar",
            QuantityKind::Turbidity => "turbidity",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = crate::conversion::ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        QuantityKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s) || k.snake_name() == s)
            .ok_or_else(|| crate::conversion::ConversionError::UnknownQuantity(s.to_string()))
    }
}

/// 내부 기준 단위로 환산된 값을 담는 컨테이너.
///
/// 문자열 단위로 들어온 값을 물리량 타입 없이 다룰 때 쓴다. `value_base`는 각 물리량의
/// 기준 단위(물질량=mol, 주파수=Hz, 회전 강성=N·m/rad 등) 값이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value_base: f64,
}
