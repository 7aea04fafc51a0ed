//! 물리량별 단위 카탈로그 모음.
//!
//! 각 물리량은 닫힌 enum 하나로 단위 집합을 정의하고 [`Unit`]을 구현한다.
//! 내부 기준 단위로의 환산(`to_base`)과 기준 단위로부터의 환산(`from_base`)은
//! 모든 단위를 빠짐없이 매칭하는 함수 쌍으로 작성한다.

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::quantity::QuantityKind;

pub mod amount_of_substance;
pub mod brake_specific_fuel_consumption;
pub mod frequency;
pub mod permeability;
pub mod relative_humidity;
pub mod rotational_stiffness;
pub mod scalar;
pub mod turbidity;

pub use amount_of_substance::{
    convert_amount_of_substance, AmountOfSubstance, AmountOfSubstanceUnit,
};
pub use brake_specific_fuel_consumption::{
    convert_brake_specific_fuel_consumption, BrakeSpecificFuelConsumption,
    BrakeSpecificFuelConsumptionUnit,
};
pub use frequency::{convert_frequency, Frequency, FrequencyUnit};
pub use permeability::{convert_permeability, Permeability, PermeabilityUnit};
pub use relative_humidity::{
    convert_relative_humidity, RelativeHumidity, RelativeHumidityUnit,
};
pub use rotational_stiffness::{
    convert_rotational_stiffness, RotationalStiffness, RotationalStiffnessUnit,
};
pub use scalar::{convert_scalar, Scalar, ScalarUnit};
pub use turbidity::{convert_turbidity, Turbidity, TurbidityUnit};

/// 생성 시 입력값 검증 정책.
///
/// 물리량마다 따로 정한다. `Accept` 물리량은 NaN을 그대로 받아 연산에 흘려보낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValidation {
    /// NaN 입력을 거부한다.
    RejectNan,
    /// 검증하지 않는다.
    Accept,
}

/// 기준 단위와의 환산 성격.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// `value * k` / `value / k` 형태. 부동소수 오차 범위 안에서 왕복이 성립한다.
    Linear,
    /// 제곱/제곱근 등 값에 따라 배율이 달라지는 환산.
    NonLinear,
}

/// 한 물리량의 단위 카탈로그.
///
/// 구현체는 필드 없는 enum이며 `ALL`은 선언 순서를 그대로 따른다.
/// `index()`는 `ALL` 안에서의 위치와 같아야 한다.
pub trait Unit:
    Copy + Eq + Hash + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// 이 카탈로그가 속한 물리량.
    const QUANTITY: QuantityKind;
    /// 내부 기준 단위. 이 단위의 환산은 항등 함수다.
    const BASE: Self;
    /// 선언 순서대로 나열한 전체 단위.
    const ALL: &'static [Self];
    /// 생성 시 입력 검증 정책.
    const VALIDATION: InputValidation;

    /// `ALL` 안에서의 순번.
    fn index(self) -> usize;

    /// 직렬화에 쓰는 고정 문자열 태그.
    fn tag(self) -> &'static str;

    /// 표시용 약어.
    fn abbreviation(self) -> &'static str;

    /// 이 단위의 값을 기준 단위로 환산한다.
    fn to_base(self, value: f64) -> f64;

    /// 기준 단위 값을 이 단위로 환산한다.
    fn from_base(self, value: f64) -> f64;

    /// 기준 단위와의 환산 성격. 기본은 선형이다.
    fn conversion_kind(self) -> ConversionKind {
        ConversionKind::Linear
    }

    /// 태그와 정확히 일치하는 단위를 찾는다.
    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.tag() == tag)
    }

    /// 사용자 입력 문자열을 단위로 해석한다.
    ///
    /// 태그, 약어, 대소문자 무시 태그 순으로 찾는다. 약어는 대소문자를 구분한다(mHz ≠ MHz).
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::from_tag(text)
            .or_else(|| Self::ALL.iter().copied().find(|u| u.abbreviation() == text))
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|u| u.tag().eq_ignore_ascii_case(text))
            })
    }
}
