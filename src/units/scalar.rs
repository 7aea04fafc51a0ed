use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 무차원 수량 단위. 약어는 빈 문자열이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarUnit {
    Amount,
}

/// 개수를 나타내는 무차원 수량. NaN 을 검증하지 않는다.
pub type Scalar = Measure<ScalarUnit>;

/// Scalar 값을 변환한다. 단위가 하나뿐이라 값을 그대로 돌려준다.
pub fn convert_scalar(value: f64, from: ScalarUnit, to: ScalarUnit) -> f64 {
    to.from_base(from.to_base(value))
}

impl Unit for ScalarUnit {
    const QUANTITY: QuantityKind = QuantityKind::Scalar;
    const BASE: Self = ScalarUnit::Amount;
    const ALL: &'static [Self] = &[ScalarUnit::Amount];
    const VALIDATION: InputValidation = InputValidation::Accept;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        match self {
            ScalarUnit::Amount => "Amount",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            ScalarUnit::Amount => "",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            ScalarUnit::Amount => value,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            ScalarUnit::Amount => value,
        }
    }
}

measure_accessors!(lenient ScalarUnit {
    Amount => from_amount, amount;
});
