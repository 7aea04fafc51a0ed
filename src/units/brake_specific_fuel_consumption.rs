use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 제동 연료 소비율(BSFC) 단위. 내부 기준은 kg/J 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrakeSpecificFuelConsumptionUnit {
    GramPerKiloWattHour,
    KilogramPerJoule,
    /// 기계식 마력과 영국 파운드 기준.
    PoundPerMechanicalHorsepowerHour,
}

/// 1 g/kWh = 1 / 3.6e9 kg/J
const G_PER_KWH_PER_KG_PER_J: f64 = 3.6e9;
/// 1 lb/hph 에 해당하는 kg/J.
const KG_PER_J_PER_LB_PER_HPH: f64 = 1.689659410672e-7;

/// 제동 연료 소비율. NaN 입력은 생성 시 거부한다.
pub type BrakeSpecificFuelConsumption = Measure<BrakeSpecificFuelConsumptionUnit>;

fn to_kg_per_joule(value: f64, unit: BrakeSpecificFuelConsumptionUnit) -> f64 {
    match unit {
        BrakeSpecificFuelConsumptionUnit::GramPerKiloWattHour => value / G_PER_KWH_PER_KG_PER_J,
        BrakeSpecificFuelConsumptionUnit::KilogramPerJoule => value,
        BrakeSpecificFuelConsumptionUnit::PoundPerMechanicalHorsepowerHour => {
            value * KG_PER_J_PER_LB_PER_HPH
        }
    }
}

fn from_kg_per_joule(value: f64, unit: BrakeSpecificFuelConsumptionUnit) -> f64 {
    match unit {
        BrakeSpecificFuelConsumptionUnit::GramPerKiloWattHour => value * G_PER_KWH_PER_KG_PER_J,
        BrakeSpecificFuelConsumptionUnit::KilogramPerJoule => value,
        BrakeSpecificFuelConsumptionUnit::PoundPerMechanicalHorsepowerHour => {
            value / KG_PER_J_PER_LB_PER_HPH
        }
    }
}

/// 제동 연료 소비율을 변환한다.
pub fn convert_brake_specific_fuel_consumption(
    value: f64,
    from: BrakeSpecificFuelConsumptionUnit,
    to: BrakeSpecificFuelConsumptionUnit,
) -> f64 {
    let kg_per_j = to_kg_per_joule(value, from);
    from_kg_per_joule(kg_per_j, to)
}

impl Unit for BrakeSpecificFuelConsumptionUnit {
    const QUANTITY: QuantityKind = QuantityKind::BrakeSpecificFuelConsumption;
    const BASE: Self = BrakeSpecificFuelConsumptionUnit::KilogramPerJoule;
    const ALL: &'static [Self] = &[
        BrakeSpecificFuelConsumptionUnit::GramPerKiloWattHour,
        BrakeSpecificFuelConsumptionUnit::KilogramPerJoule,
        BrakeSpecificFuelConsumptionUnit::PoundPerMechanicalHorsepowerHour,
    ];
    const VALIDATION: InputValidation = InputValidation::RejectNan;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        match self {
            BrakeSpecificFuelConsumptionUnit::GramPerKiloWattHour => "gram_per_kilo_watt_hour",
            BrakeSpecificFuelConsumptionUnit::KilogramPerJoule => "kilogram_per_joule",
            BrakeSpecificFuelConsumptionUnit::PoundPerMechanicalHorsepowerHour => {
                "pound_per_mechanical_horsepower_hour"
            }
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            BrakeSpecificFuelConsumptionUnit::GramPerKiloWattHour => "g/kWh",
            BrakeSpecificFuelConsumptionUnit::KilogramPerJoule => "kg/J",
            BrakeSpecificFuelConsumptionUnit::PoundPerMechanicalHorsepowerHour => "lb/hph",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        to_kg_per_joule(value, self)
    }

    fn from_base(self, value: f64) -> f64 {
        from_kg_per_joule(value, self)
    }
}

measure_accessors!(validated BrakeSpecificFuelConsumptionUnit {
    GramPerKiloWattHour => from_grams_per_kilo_watt_hour, grams_per_kilo_watt_hour;
    KilogramPerJoule => from_kilograms_per_joule, kilograms_per_joule;
    PoundPerMechanicalHorsepowerHour => from_pounds_per_mechanical_horsepower_hour, pounds_per_mechanical_horsepower_hour;
});
