use std::f64::consts::PI;

use unit_measures::config::Config;
use unit_measures::conversion::{convert, format_with, normalize, unit_tags, ConversionError};
use unit_measures::units::{AmountOfSubstanceUnit, FrequencyUnit};
use unit_measures::QuantityKind;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected} got {actual} (diff {diff}, tol {rel_tol})"
    );
}

#[test]
fn unit_strings_by_tag_abbreviation_and_case() {
    for from in ["Kilohertz", "kHz", "kilohertz", " kHz "] {
        let hz = convert(QuantityKind::Frequency, 1.0, from, "Hz").unwrap();
        assert_eq!(hz, 1000.0, "{from}");
    }
    let lbmol = convert(QuantityKind::AmountOfSubstance, 453.59237, "mol", "pound_mole").unwrap();
    assert_close("lbmol", lbmol, 1.0, 1e-12);
}

#[test]
fn rotational_stiffness_strings() {
    let nm = convert(QuantityKind::RotationalStiffness, 1.0, "kN·m/rad", "N·m/rad").unwrap();
    assert_eq!(nm, 1000.0);

    let per_rad = convert(QuantityKind::RotationalStiffness, 1.0, "N·m/deg", "N·m/rad").unwrap();
    assert_close("N·m/deg", per_rad, 180.0 / PI, 1e-12);

    let lbf = convert(
        QuantityKind::RotationalStiffness,
        1.0,
        "PoundForceFootPerDegrees",
        "NewtonMeterPerRadian",
    )
    .unwrap();
    assert_close("lbf·ft/deg", lbf, 77.6826, 1e-12);
}

#[test]
fn validation_applies_to_string_conversion() {
    let err = convert(QuantityKind::AmountOfSubstance, f64::NAN, "mol", "kmol").unwrap_err();
    assert!(matches!(err, ConversionError::InvalidValue(_)));

    let hz = convert(QuantityKind::Frequency, f64::NAN, "Hz", "kHz").unwrap();
    assert!(hz.is_nan());
}

#[test]
fn normalized_value_converts_to_many_units() {
    let v = normalize(QuantityKind::Frequency, 2.0, "MHz").unwrap();
    assert_eq!(v.value_base, 2.0e6);
    assert_eq!(v.convert_to("kHz").unwrap(), 2000.0);
    assert_eq!(v.convert_to("Gigahertz").unwrap(), 0.002);

    let m = v.to_measure::<FrequencyUnit>().unwrap();
    assert_eq!(m.megahertz(), 2.0);
    assert!(v.to_measure::<AmountOfSubstanceUnit>().is_err());
}

#[test]
fn quantity_names_parse() {
    assert_eq!("Frequency".parse::<QuantityKind>().unwrap(), QuantityKind::Frequency);
    assert_eq!("frequency".parse::<QuantityKind>().unwrap(), QuantityKind::Frequency);
    assert_eq!(
        "rotational_stiffness".parse::<QuantityKind>().unwrap(),
        QuantityKind::RotationalStiffness
    );
    let err = "Luminance".parse::<QuantityKind>().unwrap_err();
    assert_eq!(err, ConversionError::UnknownQuantity("Luminance".to_string()));
}

#[test]
fn catalog_sizes() {
    assert_eq!(unit_tags(QuantityKind::AmountOfSubstance).len(), 17);
    assert_eq!(unit_tags(QuantityKind::BrakeSpecificFuelConsumption).len(), 3);
    assert_eq!(unit_tags(QuantityKind::Frequency).len(), 13);
    assert_eq!(unit_tags(QuantityKind::RotationalStiffness).len(), 33);
    for kind in [
        QuantityKind::Permeability,
        QuantityKind::RelativeHumidity,
        QuantityKind::Scalar,
        QuantityKind::Turbidity,
    ] {
        assert_eq!(unit_tags(kind).len(), 1, "{kind}");
    }
}

#[test]
fn formatting_uses_configured_defaults() {
    let plain = Config::default();
    assert_eq!(
        format_with(&plain, QuantityKind::Frequency, 1.5, "kHz").unwrap(),
        "1500 Hz"
    );

    let mut config = Config::default();
    config.fractional_digits = Some(1);
    config.default_units.frequency = FrequencyUnit::Kilohertz;
    assert_eq!(
        format_with(&config, QuantityKind::Frequency, 1234.0, "Hz").unwrap(),
        "1.2 kHz"
    );
    assert_eq!(
        format_with(&config, QuantityKind::RelativeHumidity, 55.55, "%RH").unwrap(),
        "55.5 %RH"
    );
    assert!(format_with(&config, QuantityKind::Turbidity, 1.0, "Hz").is_err());
}
