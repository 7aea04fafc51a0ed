use unit_measures::config::{Config, ConfigError, DefaultUnits};
use unit_measures::units::{
    AmountOfSubstanceUnit, FrequencyUnit, RotationalStiffnessUnit, TurbidityUnit, Unit,
};

#[test]
fn partial_toml_fills_defaults() {
    let text = r#"
fractional_digits = 2

[default_units]
frequency = "Megahertz"
amount_of_substance = "pound_mole"
"#;
    let cfg = Config::from_toml_str(text).unwrap();
    assert_eq!(cfg.fractional_digits, Some(2));
    assert_eq!(cfg.default_units.frequency, FrequencyUnit::Megahertz);
    assert_eq!(
        cfg.default_units.amount_of_substance,
        AmountOfSubstanceUnit::PoundMole
    );
    assert_eq!(
        cfg.default_units.rotational_stiffness,
        RotationalStiffnessUnit::BASE
    );
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    assert_eq!(Config::default().fractional_digits, None);
}

#[test]
fn unknown_unit_tag_fails() {
    let err = Config::from_toml_str("[default_units]\nfrequency = \"furlong\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Deserialize(_)));
}

#[test]
fn toml_round_trip() {
    let cfg = Config {
        fractional_digits: Some(3),
        default_units: DefaultUnits {
            turbidity: TurbidityUnit::Ntu,
            rotational_stiffness: RotationalStiffnessUnit::KilonewtonMeterPerRadian,
            ..DefaultUnits::default()
        },
    };
    let text = cfg.to_toml_string().unwrap();
    assert!(text.contains("KilonewtonMeterPerRadian"));
    assert!(text.contains("NTU"));
    assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
}
