//! 주파수 환산 회귀 테스트. B 단위의 비선형 환산과 부호 손실을 따로 검증한다.
use unit_measures::units::{Frequency, FrequencyUnit, Unit};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected} got {actual} (diff {diff}, tol {rel_tol})"
    );
}

#[test]
fn kilohertz_to_hertz_and_back() {
    let f = Frequency::new(1.0, FrequencyUnit::Kilohertz).unwrap();
    assert_eq!(f.convert(FrequencyUnit::Hertz), 1000.0);

    let f = Frequency::new(1000.0, FrequencyUnit::Hertz).unwrap();
    assert_eq!(f.convert(FrequencyUnit::Kilohertz), 1.0);
    assert_eq!(f.kilohertz(), 1.0);
}

#[test]
fn radians_per_second_formatting() {
    let f = Frequency::from_hertz(1.0);
    assert_eq!(
        f.to_unit_string(FrequencyUnit::RadianPerSecond, None),
        "6.2831853072 rad/s"
    );
    assert_eq!(
        f.to_unit_string(FrequencyUnit::RadianPerSecond, Some(2)),
        "6.28 rad/s"
    );
    // 반올림이 아니라 버림
    assert_eq!(
        f.to_unit_string(FrequencyUnit::RadianPerSecond, Some(3)),
        "6.283 rad/s"
    );
}

#[test]
fn truncation_does_not_drop_extra_digit() {
    let f = Frequency::from_hertz(1.15);
    assert_eq!(f.to_unit_string(FrequencyUnit::Hertz, Some(2)), "1.15 Hz");
    let f = Frequency::from_hertz(4.35);
    assert_eq!(f.to_unit_string(FrequencyUnit::Hertz, Some(2)), "4.35 Hz");
    assert_eq!(f.to_unit_string(FrequencyUnit::Hertz, Some(0)), "4 Hz");
}

#[test]
fn display_uses_base_unit() {
    let f = Frequency::from_kilohertz(1.5);
    assert_eq!(f.to_string(), "1500 Hz");
    assert_eq!(f.unit_abbreviation(FrequencyUnit::PerSecond), "s⁻¹");
    assert_eq!(f.unit_abbreviation(FrequencyUnit::BUnit), "B Units");
}

#[test]
fn named_accessors_match_convert() {
    let f = Frequency::from_cycles_per_minute(120.0);
    assert_close("hz", f.hertz(), 2.0, 1e-12);
    assert_close("bpm", f.beats_per_minute(), 120.0, 1e-12);
    assert_close("cph", f.cycles_per_hour(), 7200.0, 1e-12);
    assert_close("mHz", f.millihertz(), 2000.0, 1e-12);
    assert_close("μHz", f.microhertz(), 2.0e6, 1e-12);
    assert_eq!(f.per_second(), f.hertz());
    assert_eq!(f.megahertz(), f.convert(FrequencyUnit::Megahertz));
}

#[test]
fn b_unit_is_square_root_scaled() {
    let f = Frequency::from_b_units(1.0);
    assert_close("hz", f.hertz(), 1000f64.sqrt(), 1e-12);
    assert_close("b", f.b_units(), 1.0, 1e-12);

    let f = Frequency::from_hertz(100.0);
    assert_close("b from hz", f.b_units(), 10.0, 1e-12);
    assert_eq!(FrequencyUnit::BUnit.to_base(10.0), 100.0);
}

#[test]
fn b_unit_drops_sign_of_negative_hertz() {
    let negative = Frequency::from_hertz(-10.0);
    let b = negative.b_units();
    assert_close("b", b, 0.1, 1e-12);

    // B → Hz 는 항상 0 이상이므로 원래 부호로 돌아오지 않는다
    let back = Frequency::from_b_units(b);
    assert_close("hz", back.hertz(), 10.0, 1e-12);
    assert!(back.hertz() > 0.0);
}

#[test]
fn negative_b_unit_input_is_nan() {
    let f = Frequency::from_b_units(-1.0);
    assert!(f.base_value().is_nan());
    assert!(f.hertz().is_nan());
}

#[test]
fn nan_input_propagates_without_error() {
    let f = Frequency::new(f64::NAN, FrequencyUnit::Megahertz).unwrap();
    assert!(f.gigahertz().is_nan());
}
