use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{ConversionKind, InputValidation, Unit};

/// 주파수 단위. 내부 기준은 Hz 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hertz,
    RadianPerSecond,
    CyclePerMinute,
    CyclePerHour,
    BeatPerMinute,
    PerSecond,
    /// 값에 따라 배율이 달라지는 비선형 단위. Hz = sqrt(B × 1000).
    BUnit,
    Microhertz,
    Millihertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
    Terahertz,
}

/// 2π 를 소수 10자리에서 자른 값.
const RAD_PER_CYCLE: f64 = 6.2831853072;

/// 반복 사건의 단위 시간당 발생 횟수. NaN 을 검증하지 않는다.
pub type Frequency = Measure<FrequencyUnit>;

fn to_hertz(value: f64, unit: FrequencyUnit) -> f64 {
    match unit {
        FrequencyUnit::Hertz => value,
        FrequencyUnit::RadianPerSecond => value / RAD_PER_CYCLE,
        FrequencyUnit::CyclePerMinute => value / 60.0,
        FrequencyUnit::CyclePerHour => value / 3600.0,
        FrequencyUnit::BeatPerMinute => value / 60.0,
        FrequencyUnit::PerSecond => value,
        // 음수 입력은 NaN 이 된다
        FrequencyUnit::BUnit => (value * 1e3).sqrt(),
        FrequencyUnit::Microhertz => value * 1e-6,
        FrequencyUnit::Millihertz => value * 0.001,
        FrequencyUnit::Kilohertz => value * 1000.0,
        FrequencyUnit::Megahertz => value * 1_000_000.0,
        FrequencyUnit::Gigahertz => value * 1_000_000_000.0,
        FrequencyUnit::Terahertz => value * 1_000_000_000_000.0,
    }
}

fn from_hertz(value_hz: f64, unit: FrequencyUnit) -> f64 {
    match unit {
        FrequencyUnit::Hertz => value_hz,
        FrequencyUnit::RadianPerSecond => value_hz * RAD_PER_CYCLE,
        FrequencyUnit::CyclePerMinute => value_hz * 60.0,
        FrequencyUnit::CyclePerHour => value_hz * 3600.0,
        FrequencyUnit::BeatPerMinute => value_hz * 60.0,
        FrequencyUnit::PerSecond => value_hz,
        // 제곱 때문에 음수 Hz 의 부호가 사라진다
        FrequencyUnit::BUnit => value_hz * value_hz * 1e-3,
        FrequencyUnit::Microhertz => value_hz / 1e-6,
        FrequencyUnit::Millihertz => value_hz / 0.001,
        FrequencyUnit::Kilohertz => value_hz / 1000.0,
        FrequencyUnit::Megahertz => value_hz / 1_000_000.0,
        FrequencyUnit::Gigahertz => value_hz / 1_000_000_000.0,
        FrequencyUnit::Terahertz => value_hz / 1_000_000_000_000.0,
    }
}

/// 주파수를 다른 단위로 변환한다.
pub fn convert_frequency(value: f64, from: FrequencyUnit, to: FrequencyUnit) -> f64 {
    let hz = to_hertz(value, from);
    from_hertz(hz, to)
}

impl Unit for FrequencyUnit {
    const QUANTITY: QuantityKind = QuantityKind::Frequency;
    const BASE: Self = FrequencyUnit::Hertz;
    const ALL: &'static [Self] = &[
        FrequencyUnit::Hertz,
        FrequencyUnit::RadianPerSecond,
        FrequencyUnit::CyclePerMinute,
        FrequencyUnit::CyclePerHour,
        FrequencyUnit::BeatPerMinute,
        FrequencyUnit::PerSecond,
        FrequencyUnit::BUnit,
        FrequencyUnit::Microhertz,
        FrequencyUnit::Millihertz,
        FrequencyUnit::Kilohertz,
        FrequencyUnit::Megahertz,
        FrequencyUnit::Gigahertz,
        FrequencyUnit::Terahertz,
    ];
    const VALIDATION: InputValidation = InputValidation::Accept;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        match self {
            FrequencyUnit::Hertz => "Hertz",
            FrequencyUnit::RadianPerSecond => "RadianPerSecond",
            FrequencyUnit::CyclePerMinute => "CyclePerMinute",
            FrequencyUnit::CyclePerHour => "CyclePerHour",
            FrequencyUnit::BeatPerMinute => "BeatPerMinute",
            FrequencyUnit::PerSecond => "PerSecond",
            FrequencyUnit::BUnit => "BUnit",
            FrequencyUnit::Microhertz => "Microhertz",
            FrequencyUnit::Millihertz => "Millihertz",
            FrequencyUnit::Kilohertz => "Kilohertz",
            FrequencyUnit::Megahertz => "Megahertz",
            FrequencyUnit::Gigahertz => "Gigahertz",
            FrequencyUnit::Terahertz => "Terahertz",
        }
    }

    fn abbreviation(self) -> &'static str {
        match self {
            FrequencyUnit::Hertz => "Hz",
            FrequencyUnit::RadianPerSecond => "rad/s",
            FrequencyUnit::CyclePerMinute => "cpm",
            FrequencyUnit::CyclePerHour => "cph",
            FrequencyUnit::BeatPerMinute => "bpm",
            FrequencyUnit::PerSecond => "s⁻¹",
            FrequencyUnit::BUnit => "B Units",
            FrequencyUnit::Microhertz => "μHz",
            FrequencyUnit::Millihertz => "mHz",
            FrequencyUnit::Kilohertz => "kHz",
            FrequencyUnit::Megahertz => "MHz",
            FrequencyUnit::Gigahertz => "GHz",
            FrequencyUnit::Terahertz => "THz",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        to_hertz(value, self)
    }

    fn from_base(self, value: f64) -> f64 {
        from_hertz(value, self)
    }

    fn conversion_kind(self) -> ConversionKind {
        match self {
            FrequencyUnit::BUnit => ConversionKind::NonLinear,
            _ => ConversionKind::Linear,
        }
    }
}

measure_accessors!(lenient FrequencyUnit {
    Hertz => from_hertz, hertz;
    RadianPerSecond => from_radians_per_second, radians_per_second;
    CyclePerMinute => from_cycles_per_minute, cycles_per_minute;
    CyclePerHour => from_cycles_per_hour, cycles_per_hour;
    BeatPerMinute => from_beats_per_minute, beats_per_minute;
    PerSecond => from_per_second, per_second;
    BUnit => from_b_units, b_units;
    Microhertz => from_microhertz, microhertz;
    Millihertz => from_millihertz, millihertz;
    Kilohertz => from_kilohertz, kilohertz;
    Megahertz => from_megahertz, megahertz;
    Gigahertz => from_gigahertz, gigahertz;
    Terahertz => from_terahertz, terahertz;
});
