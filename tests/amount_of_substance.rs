use unit_measures::units::{
    AmountOfSubstance, AmountOfSubstanceUnit, BrakeSpecificFuelConsumption,
    BrakeSpecificFuelConsumptionUnit,
};
use unit_measures::{MeasureError, QuantityKind};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected} got {actual} (diff {diff}, tol {rel_tol})"
    );
}

#[test]
fn pound_mole_base_value() {
    let m = AmountOfSubstance::new(1.0, AmountOfSubstanceUnit::PoundMole).unwrap();
    assert_eq!(m.base_value(), 453.59237);

    let m = AmountOfSubstance::from_moles(453.59237).unwrap();
    assert_close("lbmol", m.pound_moles(), 1.0, 1e-12);
}

#[test]
fn prefixed_units() {
    let m = AmountOfSubstance::from_millimoles(2500.0).unwrap();
    assert_close("mol", m.moles(), 2.5, 1e-12);
    assert_close("kmol", m.kilomoles(), 0.0025, 1e-12);
    assert_close("μmol", m.micromoles(), 2.5e6, 1e-12);

    let m = AmountOfSubstance::from_kilopound_moles(1.0).unwrap();
    assert_close("mol", m.moles(), 453_592.37, 1e-12);
    assert_close("mlbmol", m.millipound_moles(), 1.0e6, 1e-12);
}

#[test]
fn nan_is_rejected() {
    let err = AmountOfSubstance::new(f64::NAN, AmountOfSubstanceUnit::Mole).unwrap_err();
    assert_eq!(
        err,
        MeasureError::NotANumber {
            quantity: QuantityKind::AmountOfSubstance
        }
    );
    assert!(err.to_string().contains("NaN"));
    assert!(AmountOfSubstance::from_nanomoles(f64::NAN).is_err());
}

#[test]
fn infinity_is_not_rejected() {
    let m = AmountOfSubstance::from_moles(f64::INFINITY).unwrap();
    assert!(m.kilomoles().is_infinite());
}

#[test]
fn truncated_formatting() {
    let m = AmountOfSubstance::from_moles(1.23456).unwrap();
    assert_eq!(
        m.to_unit_string(AmountOfSubstanceUnit::Millimole, Some(1)),
        "1234.5 mmol"
    );
    assert_eq!(m.to_unit_string(AmountOfSubstanceUnit::Mole, Some(2)), "1.23 mol");
    assert_eq!(m.unit_abbreviation(AmountOfSubstanceUnit::Micromole), "μmol");
}

#[test]
fn brake_specific_fuel_consumption_units() {
    let b = BrakeSpecificFuelConsumption::from_grams_per_kilo_watt_hour(3.6e9).unwrap();
    assert_eq!(b.kilograms_per_joule(), 1.0);

    let b = BrakeSpecificFuelConsumption::new(
        1.0,
        BrakeSpecificFuelConsumptionUnit::PoundPerMechanicalHorsepowerHour,
    )
    .unwrap();
    assert_eq!(b.base_value(), 1.689659410672e-7);
    assert_close("lb/hph", b.pounds_per_mechanical_horsepower_hour(), 1.0, 1e-12);

    assert!(BrakeSpecificFuelConsumption::from_kilograms_per_joule(f64::NAN).is_err());
}
