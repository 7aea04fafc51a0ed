//! 단위가 하나뿐인 물리량도 항등 환산과 포맷이 정상 동작해야 한다.
use unit_measures::units::{
    Permeability, PermeabilityUnit, RelativeHumidity, RelativeHumidityUnit, Scalar, ScalarUnit,
    Turbidity, TurbidityUnit, Unit,
};

#[test]
fn relative_humidity_identity() {
    let rh = RelativeHumidity::new(50.0, RelativeHumidityUnit::Percent).unwrap();
    assert_eq!(rh.convert(RelativeHumidityUnit::Percent), 50.0);
    assert_eq!(rh.percent(), 50.0);
    assert_eq!(rh.to_string(), "50 %RH");
}

#[test]
fn scalar_has_empty_abbreviation() {
    let s = Scalar::from_amount(5.0);
    assert_eq!(s.amount(), 5.0);
    assert_eq!(s.unit_abbreviation(ScalarUnit::Amount), "");
    assert_eq!(s.to_unit_string(ScalarUnit::Amount, None), "5 ");
}

#[test]
fn turbidity_accepts_nan() {
    let t = Turbidity::from_ntu(f64::NAN);
    assert!(t.ntu().is_nan());
    assert_eq!(TurbidityUnit::Ntu.tag(), "NTU");
    assert_eq!(Turbidity::from_ntu(12.5).to_string(), "12.5 NTU");
}

#[test]
fn permeability_identity() {
    let p = Permeability::from_henries_per_meter(1.25663706212e-6);
    assert_eq!(p.henries_per_meter(), 1.25663706212e-6);
    assert_eq!(p.base_value(), p.convert(PermeabilityUnit::HenryPerMeter));
    assert_eq!(p.unit_abbreviation(PermeabilityUnit::HenryPerMeter), "H/m");
}

#[test]
fn truncation_keeps_exact_decimal_digits() {
    let s = Scalar::from_amount(0.29);
    assert_eq!(s.to_unit_string(ScalarUnit::Amount, Some(2)), "0.29 ");
    assert_eq!(s.to_unit_string(ScalarUnit::Amount, Some(1)), "0.2 ");
}
