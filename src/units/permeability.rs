use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 투자율 단위. 내부 기준은 H/m 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermeabilityUnit {
    HenryPerMeter,
}

/// 물질 내부에 자기장이 형성되도록 돕는 정도. NaN 을 검증하지 않는다.
pub type Permeability = Measure<PermeabilityUnit>;

/// Permeability 값을 변환한다. 단위가 하나뿐이라 값을 그대로 돌려준다.
pub fn convert_permeability(value: f64, from: PermeabilityUnit, to: PermeabilityUnit) -> f64 {
    to.from_base(from.to_base(value))
}

impl Unit for PermeabilityUnit {
    const QUANTITY: QuantityKind = QuantityKind::Permeability;
    const BASE: Self = PermeabilityUnit::HenryPerMeter;
    const ALL: &'static [Self] = &[PermeabilityUnit::HenryPerMeter];
    const VALIDATION: InputValidation = InputValidation::Accept;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        match self {
            PermeabilityUnit::HenryPerMeter => "HenryPerMeter",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            PermeabilityUnit::HenryPerMeter => "H/m",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            PermeabilityUnit::HenryPerMeter => value,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            PermeabilityUnit::HenryPerMeter => value,
        }
    }
}

measure_accessors!(lenient PermeabilityUnit {
    HenryPerMeter => from_henries_per_meter, henries_per_meter;
});
