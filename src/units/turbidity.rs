use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 탁도 단위. 내부 기준은 NTU 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurbidityUnit {
    #[serde(rename = "NTU")]
    Ntu,
}

/// 유체의 흐림 정도. 수질 검사 항목. NaN 을 검증하지 않는다.
pub type Turbidity = Measure<TurbidityUnit>;

/// Turbidity 값을 변환한다. 단위가 하나뿐이라 값을 그대로 돌려준다.
pub fn convert_turbidity(value: f64, from: TurbidityUnit, to: TurbidityUnit) -> f64 {
    to.from_base(from.to_base(value))
}

impl Unit for TurbidityUnit {
    const QUANTITY: QuantityKind = QuantityKind::Turbidity;
    const BASE: Self = TurbidityUnit::Ntu;
    const ALL: &'static [Self] = &[TurbidityUnit::Ntu];
    const VALIDATION: InputValidation = InputValidation::Accept;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        match self {
            TurbidityUnit::Ntu => "NTU",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            TurbidityUnit::Ntu => "NTU",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            TurbidityUnit::Ntu => value,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            TurbidityUnit::Ntu => value,
        }
    }
}

measure_accessors!(lenient TurbidityUnit {
    Ntu => from_ntu, ntu;
});
