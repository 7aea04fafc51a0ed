use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::measure::{Measure, MeasureError};
use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("{quantity}: 알 수 없는 단위: {unit}")]
    UnknownUnit { quantity: QuantityKind, unit: String },
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnknownQuantity(String),
    /// 물리량의 입력 검증 실패
    #[error(transparent)]
    InvalidValue(#[from] MeasureError),
    /// 값이 다른 물리량에 속함
    #[error("물리량 불일치: {expected} 값에 {actual} 단위 사용")]
    QuantityMismatch {
        expected: QuantityKind,
        actual: QuantityKind,
    },
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 직렬화 태그(`Kilohertz`, `pound_mole`), 약어(`kHz`, `lbmol`),
/// 대소문자를 무시한 태그(`kilohertz`) 순으로 해석한다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    normalize(kind, value, from_unit_str)?.convert_to(to_unit_str)
}

/// 주어진 단위의 값을 물리량의 기준 단위로 환산한다.
pub fn normalize(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
) -> Result<QuantityValue, ConversionError> {
    let value_base = match kind {
        QuantityKind::AmountOfSubstance => {
            base_of::<AmountOfSubstanceUnit>(value, from_unit_str)?
        }
        QuantityKind::BrakeSpecificFuelConsumption => {
            base_of::<BrakeSpecificFuelConsumptionUnit>(value, from_unit_str)?
        }
        QuantityKind::Frequency => base_of::<FrequencyUnit>(value, from_unit_str)?,
        QuantityKind::Permeability => base_of::<PermeabilityUnit>(value, from_unit_str)?,
        QuantityKind::RelativeHumidity => {
            base_of::<RelativeHumidityUnit>(value, from_unit_str)?
        }
        QuantityKind::RotationalStiffness => {
            base_of::<RotationalStiffnessUnit>(value, from_unit_str)?
        }
        QuantityKind::Scalar => base_of::<ScalarUnit>(value, from_unit_str)?,
        QuantityKind::Turbidity => base_of::<TurbidityUnit>(value, from_unit_str)?,
    };
    Ok(QuantityValue { kind, value_base })
}

impl QuantityValue {
    /// 기준 단위 값을 문자열로 지정한 단위로 환산한다.
    pub fn convert_to(&self, to_unit_str: &str) -> Result<f64, ConversionError> {
        match self.kind {
            QuantityKind::AmountOfSubstance => {
                self.value_in::<AmountOfSubstanceUnit>(to_unit_str)
            }
            QuantityKind::BrakeSpecificFuelConsumption => {
                self.value_in::<BrakeSpecificFuelConsumptionUnit>(to_unit_str)
            }
            QuantityKind::Frequency => self.value_in::<FrequencyUnit>(to_unit_str),
            QuantityKind::Permeability => self.value_in::<PermeabilityUnit>(to_unit_str),
            QuantityKind::RelativeHumidity => self.value_in::<RelativeHumidityUnit>(to_unit_str),
            QuantityKind::RotationalStiffness => {
                self.value_in::<RotationalStiffnessUnit>(to_unit_str)
            }
            QuantityKind::Scalar => self.value_in::<ScalarUnit>(to_unit_str),
            QuantityKind::Turbidity => self.value_in::<TurbidityUnit>(to_unit_str),
        }
    }

    /// 같은 물리량의 타입 있는 측정값으로 옮긴다.
    pub fn to_measure<U: Unit>(&self) -> Result<Measure<U>, ConversionError> {
        if self.kind != U::QUANTITY {
            return Err(ConversionError::QuantityMismatch {
                expected: self.kind,
                actual: U::QUANTITY,
            });
        }
        Ok(Measure::new(self.value_base, U::BASE)?)
    }

    fn value_in<U: Unit>(&self, to_unit_str: &str) -> Result<f64, ConversionError> {
        let unit = parse_unit::<U>(to_unit_str)?;
        Ok(unit.from_base(self.value_base))
    }
}

/// 설정된 기본 표시 단위와 소수 자릿수로 값을 문자열로 만든다.
pub fn format_with(
    config: &Config,
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
) -> Result<String, ConversionError> {
    let units = &config.default_units;
    let digits = config.fractional_digits;
    match kind {
        QuantityKind::AmountOfSubstance => {
            render(value, from_unit_str, units.amount_of_substance, digits)
        }
        QuantityKind::BrakeSpecificFuelConsumption => render(
            value,
            from_unit_str,
            units.brake_specific_fuel_consumption,
            digits,
        ),
        QuantityKind::Frequency => render(value, from_unit_str, units.frequency, digits),
        QuantityKind::Permeability => render(value, from_unit_str, units.permeability, digits),
        QuantityKind::RelativeHumidity => {
            render(value, from_unit_str, units.relative_humidity, digits)
        }
        QuantityKind::RotationalStiffness => {
            render(value, from_unit_str, units.rotational_stiffness, digits)
        }
        QuantityKind::Scalar => render(value, from_unit_str, units.scalar, digits),
        QuantityKind::Turbidity => render(value, from_unit_str, units.turbidity, digits),
    }
}

/// 물리량이 지원하는 단위 태그를 선언 순서대로 돌려준다.
pub fn unit_tags(kind: QuantityKind) -> Vec<&'static str> {
    match kind {
        QuantityKind::AmountOfSubstance => tags_of::<AmountOfSubstanceUnit>(),
        QuantityKind::BrakeSpecificFuelConsumption => {
            tags_of::<BrakeSpecificFuelConsumptionUnit>()
        }
        QuantityKind::Frequency => tags_of::<FrequencyUnit>(),
        QuantityKind::Permeability => tags_of::<PermeabilityUnit>(),
        QuantityKind::RelativeHumidity => tags_of::<RelativeHumidityUnit>(),
        QuantityKind::RotationalStiffness => tags_of::<RotationalStiffnessUnit>(),
        QuantityKind::Scalar => tags_of::<ScalarUnit>(),
        QuantityKind::Turbidity => tags_of::<TurbidityUnit>(),
    }
}

/// 물리량의 기준 단위 태그.
pub fn base_unit_tag(kind: QuantityKind) -> &'static str {
    match kind {
        QuantityKind::AmountOfSubstance => AmountOfSubstanceUnit::BASE.tag(),
        QuantityKind::BrakeSpecificFuelConsumption => {
            BrakeSpecificFuelConsumptionUnit::BASE.tag()
        }
        QuantityKind::Frequency => FrequencyUnit::BASE.tag(),
        QuantityKind::Permeability => PermeabilityUnit::BASE.tag(),
        QuantityKind::RelativeHumidity => RelativeHumidityUnit::BASE.tag(),
        QuantityKind::RotationalStiffness => RotationalStiffnessUnit::BASE.tag(),
        QuantityKind::Scalar => ScalarUnit::BASE.tag(),
        QuantityKind::Turbidity => TurbidityUnit::BASE.tag(),
    }
}

fn parse_unit<U: Unit>(s: &str) -> Result<U, ConversionError> {
    U::parse(s).ok_or_else(|| {
        debug!(quantity = %U::QUANTITY, unit = s, "단위 문자열 해석 실패");
        ConversionError::UnknownUnit {
            quantity: U::QUANTITY,
            unit: s.to_string(),
        }
    })
}

fn base_of<U: Unit>(value: f64, from_unit_str: &str) -> Result<f64, ConversionError> {
    let unit = parse_unit::<U>(from_unit_str)?;
    Ok(Measure::new(value, unit)?.base_value())
}

fn render<U: Unit>(
    value: f64,
    from_unit_str: &str,
    to: U,
    fractional_digits: Option<u32>,
) -> Result<String, ConversionError> {
    let unit = parse_unit::<U>(from_unit_str)?;
    let measure = Measure::new(value, unit)?;
    Ok(measure.to_unit_string(to, fractional_digits))
}

fn tags_of<U: Unit>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.tag()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit_names_quantity() {
        let err = convert(QuantityKind::Frequency, 1.0, "Hz", "parsec").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                quantity: QuantityKind::Frequency,
                unit: "parsec".to_string()
            }
        );
    }

    #[test]
    fn quantity_mismatch_is_rejected() {
        let v = normalize(QuantityKind::Turbidity, 4.0, "NTU").unwrap();
        let err = v.to_measure::<FrequencyUnit>().unwrap_err();
        assert!(matches!(err, ConversionError::QuantityMismatch { .. }));
        let ntu = v.to_measure::<TurbidityUnit>().unwrap();
        assert_eq!(ntu.ntu(), 4.0);
    }

    #[test]
    fn base_tags_match_catalogs() {
        assert_eq!(base_unit_tag(QuantityKind::AmountOfSubstance), "mole");
        assert_eq!(base_unit_tag(QuantityKind::Frequency), "Hertz");
        for kind in QuantityKind::ALL {
            assert!(unit_tags(kind).contains(&base_unit_tag(kind)));
        }
    }
}
