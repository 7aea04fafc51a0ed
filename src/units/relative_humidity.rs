use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 상대 습도 단위. 내부 기준은 %RH 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeHumidityUnit {
    Percent,
}

/// 주어진 온도에서 최대 수증기량 대비 실제 수증기량의 비율. NaN 을 검증하지 않는다.
pub type RelativeHumidity = Measure<RelativeHumidityUnit>;

/// RelativeHumidity 값을 변환한다. 단위가 하나뿐이라 값을 그대로 돌려준다.
pub fn convert_relative_humidity(value: f64, from: RelativeHumidityUnit, to: RelativeHumidityUnit) -> f64 {
    to.from_base(from.to_base(value))
}

impl Unit for RelativeHumidityUnit {
    const QUANTITY: QuantityKind = QuantityKind::RelativeHumidity;
    const BASE: Self = RelativeHumidityUnit::Percent;
    const ALL: &'static [Self] = &[RelativeHumidityUnit::Percent];
    const VALIDATION: InputValidation = InputValidation::Accept;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        match self {
            RelativeHumidityUnit::Percent => "Percent",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            RelativeHumidityUnit::Percent => "%RH",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            RelativeHumidityUnit::Percent => value,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            RelativeHumidityUnit::Percent => value,
        }
    }
}

measure_accessors!(lenient RelativeHumidityUnit {
    Percent => from_percent, percent;
});
