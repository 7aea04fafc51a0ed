use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 회전 강성 단위. 내부 기준은 N·m/rad 이다.
///
/// 각도 기준 단위는 180/π 배율을, 접두어 단위는 그 배율을 먼저 적용한 뒤 접두어 배율을
/// 곱/나눈다. 연산 순서를 합쳐 하나의 상수로 바꾸면 결과 비트가 달라진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationalStiffnessUnit {
    NewtonMeterPerRadian,
    PoundForceFootPerDegrees,
    KilopoundForceFootPerDegrees,
    NewtonMillimeterPerDegree,
    NewtonMeterPerDegree,
    NewtonMillimeterPerRadian,
    PoundForceFeetPerRadian,
    KilonewtonMeterPerRadian,
    MeganewtonMeterPerRadian,
    NanonewtonMillimeterPerDegree,
    MicronewtonMillimeterPerDegree,
    MillinewtonMillimeterPerDegree,
    CentinewtonMillimeterPerDegree,
    DecinewtonMillimeterPerDegree,
    DecanewtonMillimeterPerDegree,
    KilonewtonMillimeterPerDegree,
    MeganewtonMillimeterPerDegree,
    NanonewtonMeterPerDegree,
    MicronewtonMeterPerDegree,
    MillinewtonMeterPerDegree,
    CentinewtonMeterPerDegree,
    DecinewtonMeterPerDegree,
    DecanewtonMeterPerDegree,
    KilonewtonMeterPerDegree,
    MeganewtonMeterPerDegree,
    NanonewtonMillimeterPerRadian,
    MicronewtonMillimeterPerRadian,
    MillinewtonMillimeterPerRadian,
    CentinewtonMillimeterPerRadian,
    DecinewtonMillimeterPerRadian,
    DecanewtonMillimeterPerRadian,
    KilonewtonMillimeterPerRadian,
    MeganewtonMillimeterPerRadian,
}

const LBF_FT_PER_DEG: f64 = 77.6826;
const KIPF_FT_PER_DEG: f64 = 77682.6;
const LBF_FT_PER_RAD: f64 = 1.3558179483314;

/// 회전 강성. NaN 을 검증하지 않는다.
pub type RotationalStiffness = Measure<RotationalStiffnessUnit>;

fn to_newton_meter_per_radian(value: f64, unit: RotationalStiffnessUnit) -> f64 {
    use RotationalStiffnessUnit::*;
    match unit {
        NewtonMeterPerRadian => value,
        PoundForceFootPerDegrees => value * LBF_FT_PER_DEG,
        KilopoundForceFootPerDegrees => value * KIPF_FT_PER_DEG,
        NewtonMillimeterPerDegree => value * 180.0 / PI * 0.001,
        NewtonMeterPerDegree => value * (180.0 / PI),
        NewtonMillimeterPerRadian => value * 0.001,
        PoundForceFeetPerRadian => value * LBF_FT_PER_RAD,
        KilonewtonMeterPerRadian => value * 1000.0,
        MeganewtonMeterPerRadian => value * 1_000_000.0,
        NanonewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 1e-9,
        MicronewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 1e-6,
        MillinewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 0.001,
        CentinewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 0.01,
        DecinewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 0.1,
        DecanewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 10.0,
        KilonewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 1000.0,
        MeganewtonMillimeterPerDegree => (value * 180.0 / PI * 0.001) * 1_000_000.0,
        NanonewtonMeterPerDegree => (value * (180.0 / PI)) * 1e-9,
        MicronewtonMeterPerDegree => (value * (180.0 / PI)) * 1e-6,
        MillinewtonMeterPerDegree => (value * (180.0 / PI)) * 0.001,
        CentinewtonMeterPerDegree => (value * (180.0 / PI)) * 0.01,
        DecinewtonMeterPerDegree => (value * (180.0 / PI)) * 0.1,
        DecanewtonMeterPerDegree => (value * (180.0 / PI)) * 10.0,
        KilonewtonMeterPerDegree => (value * (180.0 / PI)) * 1000.0,
        MeganewtonMeterPerDegree => (value * (180.0 / PI)) * 1_000_000.0,
        NanonewtonMillimeterPerRadian => (value * 0.001) * 1e-9,
        MicronewtonMillimeterPerRadian => (value * 0.001) * 1e-6,
        MillinewtonMillimeterPerRadian => (value * 0.001) * 0.001,
        CentinewtonMillimeterPerRadian => (value * 0.001) * 0.01,
        DecinewtonMillimeterPerRadian => (value * 0.001) * 0.1,
        DecanewtonMillimeterPerRadian => (value * 0.001) * 10.0,
        KilonewtonMillimeterPerRadian => (value * 0.001) * 1000.0,
        MeganewtonMillimeterPerRadian => (value * 0.001) * 1_000_000.0,
    }
}

fn from_newton_meter_per_radian(value_nm: f64, unit: RotationalStiffnessUnit) -> f64 {
    use RotationalStiffnessUnit::*;
    match unit {
        NewtonMeterPerRadian => value_nm,
        PoundForceFootPerDegrees => value_nm / LBF_FT_PER_DEG,
        KilopoundForceFootPerDegrees => value_nm / KIPF_FT_PER_DEG,
        NewtonMillimeterPerDegree => value_nm / 180.0 * PI * 1000.0,
        NewtonMeterPerDegree => value_nm / (180.0 / PI),
        NewtonMillimeterPerRadian => value_nm * 1000.0,
        PoundForceFeetPerRadian => value_nm / LBF_FT_PER_RAD,
        KilonewtonMeterPerRadian => value_nm / 1000.0,
        MeganewtonMeterPerRadian => value_nm / 1_000_000.0,
        NanonewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 1e-9,
        MicronewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 1e-6,
        MillinewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 0.001,
        CentinewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 0.01,
        DecinewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 0.1,
        DecanewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 10.0,
        KilonewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 1000.0,
        MeganewtonMillimeterPerDegree => (value_nm / 180.0 * PI * 1000.0) / 1_000_000.0,
        NanonewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 1e-9,
        MicronewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 1e-6,
        MillinewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 0.001,
        CentinewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 0.01,
        DecinewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 0.1,
        DecanewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 10.0,
        KilonewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 1000.0,
        MeganewtonMeterPerDegree => (value_nm / (180.0 / PI)) / 1_000_000.0,
        NanonewtonMillimeterPerRadian => (value_nm * 1000.0) / 1e-9,
        MicronewtonMillimeterPerRadian => (value_nm * 1000.0) / 1e-6,
        MillinewtonMillimeterPerRadian => (value_nm * 1000.0) / 0.001,
        CentinewtonMillimeterPerRadian => (value_nm * 1000.0) / 0.01,
        DecinewtonMillimeterPerRadian => (value_nm * 1000.0) / 0.1,
        DecanewtonMillimeterPerRadian => (value_nm * 1000.0) / 10.0,
        KilonewtonMillimeterPerRadian => (value_nm * 1000.0) / 1000.0,
        MeganewtonMillimeterPerRadian => (value_nm * 1000.0) / 1_000_000.0,
    }
}

/// 회전 강성을 다른 단위로 변환한다.
pub fn convert_rotational_stiffness(
    value: f64,
    from: RotationalStiffnessUnit,
    to: RotationalStiffnessUnit,
) -> f64 {
    let nm = to_newton_meter_per_radian(value, from);
    from_newton_meter_per_radian(nm, to)
}

impl Unit for RotationalStiffnessUnit {
    const QUANTITY: QuantityKind = QuantityKind::RotationalStiffness;
    const BASE: Self = RotationalStiffnessUnit::NewtonMeterPerRadian;
    const ALL: &'static [Self] = &[
        RotationalStiffnessUnit::NewtonMeterPerRadian,
        RotationalStiffnessUnit::PoundForceFootPerDegrees,
        RotationalStiffnessUnit::KilopoundForceFootPerDegrees,
        RotationalStiffnessUnit::NewtonMillimeterPerDegree,
        RotationalStiffnessUnit::NewtonMeterPerDegree,
        RotationalStiffnessUnit::NewtonMillimeterPerRadian,
        RotationalStiffnessUnit::PoundForceFeetPerRadian,
        RotationalStiffnessUnit::KilonewtonMeterPerRadian,
        RotationalStiffnessUnit::MeganewtonMeterPerRadian,
        RotationalStiffnessUnit::NanonewtonMillimeterPerDegree,
        RotationalStiffnessUnit::MicronewtonMillimeterPerDegree,
        RotationalStiffnessUnit::MillinewtonMillimeterPerDegree,
        RotationalStiffnessUnit::CentinewtonMillimeterPerDegree,
        RotationalStiffnessUnit::DecinewtonMillimeterPerDegree,
        RotationalStiffnessUnit::DecanewtonMillimeterPerDegree,
        RotationalStiffnessUnit::KilonewtonMillimeterPerDegree,
        RotationalStiffnessUnit::MeganewtonMillimeterPerDegree,
        RotationalStiffnessUnit::NanonewtonMeterPerDegree,
        RotationalStiffnessUnit::MicronewtonMeterPerDegree,
        RotationalStiffnessUnit::MillinewtonMeterPerDegree,
        RotationalStiffnessUnit::CentinewtonMeterPerDegree,
        RotationalStiffnessUnit::DecinewtonMeterPerDegree,
        RotationalStiffnessUnit::DecanewtonMeterPerDegree,
        RotationalStiffnessUnit::KilonewtonMeterPerDegree,
        RotationalStiffnessUnit::MeganewtonMeterPerDegree,
        RotationalStiffnessUnit::NanonewtonMillimeterPerRadian,
        RotationalStiffnessUnit::MicronewtonMillimeterPerRadian,
        RotationalStiffnessUnit::MillinewtonMillimeterPerRadian,
        RotationalStiffnessUnit::CentinewtonMillimeterPerRadian,
        RotationalStiffnessUnit::DecinewtonMillimeterPerRadian,
        RotationalStiffnessUnit::DecanewtonMillimeterPerRadian,
        RotationalStiffnessUnit::KilonewtonMillimeterPerRadian,
        RotationalStiffnessUnit::MeganewtonMillimeterPerRadian,
    ];
    const VALIDATION: InputValidation = InputValidation::Accept;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        use RotationalStiffnessUnit::*;
        match self {
            NewtonMeterPerRadian => "NewtonMeterPerRadian",
            PoundForceFootPerDegrees => "PoundForceFootPerDegrees",
            KilopoundForceFootPerDegrees => "KilopoundForceFootPerDegrees",
            NewtonMillimeterPerDegree => "NewtonMillimeterPerDegree",
            NewtonMeterPerDegree => "NewtonMeterPerDegree",
            NewtonMillimeterPerRadian => "NewtonMillimeterPerRadian",
            PoundForceFeetPerRadian => "PoundForceFeetPerRadian",
            KilonewtonMeterPerRadian => "KilonewtonMeterPerRadian",
            MeganewtonMeterPerRadian => "MeganewtonMeterPerRadian",
            NanonewtonMillimeterPerDegree => "NanonewtonMillimeterPerDegree",
            MicronewtonMillimeterPerDegree => "MicronewtonMillimeterPerDegree",
            MillinewtonMillimeterPerDegree => "MillinewtonMillimeterPerDegree",
            CentinewtonMillimeterPerDegree => "CentinewtonMillimeterPerDegree",
            DecinewtonMillimeterPerDegree => "DecinewtonMillimeterPerDegree",
            DecanewtonMillimeterPerDegree => "DecanewtonMillimeterPerDegree",
            KilonewtonMillimeterPerDegree => "KilonewtonMillimeterPerDegree",
            MeganewtonMillimeterPerDegree => "MeganewtonMillimeterPerDegree",
            NanonewtonMeterPerDegree => "NanonewtonMeterPerDegree",
            MicronewtonMeterPerDegree => "MicronewtonMeterPerDegree",
            MillinewtonMeterPerDegree => "MillinewtonMeterPerDegree",
            CentinewtonMeterPerDegree => "CentinewtonMeterPerDegree",
            DecinewtonMeterPerDegree => "DecinewtonMeterPerDegree",
            DecanewtonMeterPerDegree => "DecanewtonMeterPerDegree",
            KilonewtonMeterPerDegree => "KilonewtonMeterPerDegree",
            MeganewtonMeterPerDegree => "MeganewtonMeterPerDegree",
            NanonewtonMillimeterPerRadian => "NanonewtonMillimeterPerRadian",
            MicronewtonMillimeterPerRadian => "MicronewtonMillimeterPerRadian",
            MillinewtonMillimeterPerRadian => "MillinewtonMillimeterPerRadian",
            CentinewtonMillimeterPerRadian => "CentinewtonMillimeterPerRadian",
            DecinewtonMillimeterPerRadian => "DecinewtonMillimeterPerRadian",
            DecanewtonMillimeterPerRadian => "DecanewtonMillimeterPerRadian",
            KilonewtonMillimeterPerRadian => "KilonewtonMillimeterPerRadian",
            MeganewtonMillimeterPerRadian => "MeganewtonMillimeterPerRadian",
        }
    }

    fn abbreviation(self) -> &'static str {
        use RotationalStiffnessUnit::*;
        match self {
            NewtonMeterPerRadian => "N·m/rad",
            PoundForceFootPerDegrees => "lbf·ft/deg",
            KilopoundForceFootPerDegrees => "kipf·ft/°",
            NewtonMillimeterPerDegree => "N·mm/deg",
            NewtonMeterPerDegree => "N·m/deg",
            NewtonMillimeterPerRadian => "N·mm/rad",
            PoundForceFeetPerRadian => "lbf·ft/rad",
            KilonewtonMeterPerRadian => "kN·m/rad",
            MeganewtonMeterPerRadian => "MN·m/rad",
            NanonewtonMillimeterPerDegree => "nN·mm/deg",
            MicronewtonMillimeterPerDegree => "μN·mm/deg",
            MillinewtonMillimeterPerDegree => "mN·mm/deg",
            CentinewtonMillimeterPerDegree => "cN·mm/deg",
            DecinewtonMillimeterPerDegree => "dN·mm/deg",
            DecanewtonMillimeterPerDegree => "daN·mm/deg",
            KilonewtonMillimeterPerDegree => "kN·mm/deg",
            MeganewtonMillimeterPerDegree => "MN·mm/deg",
            NanonewtonMeterPerDegree => "nN·m/deg",
            MicronewtonMeterPerDegree => "μN·m/deg",
            MillinewtonMeterPerDegree => "mN·m/deg",
            CentinewtonMeterPerDegree => "cN·m/deg",
            DecinewtonMeterPerDegree => "dN·m/deg",
            DecanewtonMeterPerDegree => "daN·m/deg",
            KilonewtonMeterPerDegree => "kN·m/deg",
            MeganewtonMeterPerDegree => "MN·m/deg",
            NanonewtonMillimeterPerRadian => "nN·mm/rad",
            MicronewtonMillimeterPerRadian => "μN·mm/rad",
            MillinewtonMillimeterPerRadian => "mN·mm/rad",
            CentinewtonMillimeterPerRadian => "cN·mm/rad",
            DecinewtonMillimeterPerRadian => "dN·mm/rad",
            DecanewtonMillimeterPerRadian => "daN·mm/rad",
            KilonewtonMillimeterPerRadian => "kN·mm/rad",
            MeganewtonMillimeterPerRadian => "MN·mm/rad",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        to_newton_meter_per_radian(value, self)
    }

    fn from_base(self, value: f64) -> f64 {
        from_newton_meter_per_radian(value, self)
    }
}

measure_accessors!(lenient RotationalStiffnessUnit {
    NewtonMeterPerRadian => from_newton_meters_per_radian, newton_meters_per_radian;
    PoundForceFootPerDegrees => from_pound_force_feet_per_degrees, pound_force_feet_per_degrees;
    KilopoundForceFootPerDegrees => from_kilopound_force_feet_per_degrees, kilopound_force_feet_per_degrees;
    NewtonMillimeterPerDegree => from_newton_millimeters_per_degree, newton_millimeters_per_degree;
    NewtonMeterPerDegree => from_newton_meters_per_degree, newton_meters_per_degree;
    NewtonMillimeterPerRadian => from_newton_millimeters_per_radian, newton_millimeters_per_radian;
    PoundForceFeetPerRadian => from_pound_force_feet_per_radian, pound_force_feet_per_radian;
    KilonewtonMeterPerRadian => from_kilonewton_meters_per_radian, kilonewton_meters_per_radian;
    MeganewtonMeterPerRadian => from_meganewton_meters_per_radian, meganewton_meters_per_radian;
    NanonewtonMillimeterPerDegree => from_nanonewton_millimeters_per_degree, nanonewton_millimeters_per_degree;
    MicronewtonMillimeterPerDegree => from_micronewton_millimeters_per_degree, micronewton_millimeters_per_degree;
    MillinewtonMillimeterPerDegree => from_millinewton_millimeters_per_degree, millinewton_millimeters_per_degree;
    CentinewtonMillimeterPerDegree => from_centinewton_millimeters_per_degree, centinewton_millimeters_per_degree;
    DecinewtonMillimeterPerDegree => from_decinewton_millimeters_per_degree, decinewton_millimeters_per_degree;
    DecanewtonMillimeterPerDegree => from_decanewton_millimeters_per_degree, decanewton_millimeters_per_degree;
    KilonewtonMillimeterPerDegree => from_kilonewton_millimeters_per_degree, kilonewton_millimeters_per_degree;
    MeganewtonMillimeterPerDegree => from_meganewton_millimeters_per_degree, meganewton_millimeters_per_degree;
    NanonewtonMeterPerDegree => from_nanonewton_meters_per_degree, nanonewton_meters_per_degree;
    MicronewtonMeterPerDegree => from_micronewton_meters_per_degree, micronewton_meters_per_degree;
    MillinewtonMeterPerDegree => from_millinewton_meters_per_degree, millinewton_meters_per_degree;
    CentinewtonMeterPerDegree => from_centinewton_meters_per_degree, centinewton_meters_per_degree;
    DecinewtonMeterPerDegree => from_decinewton_meters_per_degree, decinewton_meters_per_degree;
    DecanewtonMeterPerDegree => from_decanewton_meters_per_degree, decanewton_meters_per_degree;
    KilonewtonMeterPerDegree => from_kilonewton_meters_per_degree, kilonewton_meters_per_degree;
    MeganewtonMeterPerDegree => from_meganewton_meters_per_degree, meganewton_meters_per_degree;
    NanonewtonMillimeterPerRadian => from_nanonewton_millimeters_per_radian, nanonewton_millimeters_per_radian;
    MicronewtonMillimeterPerRadian => from_micronewton_millimeters_per_radian, micronewton_millimeters_per_radian;
    MillinewtonMillimeterPerRadian => from_millinewton_millimeters_per_radian, millinewton_millimeters_per_radian;
    CentinewtonMillimeterPerRadian => from_centinewton_millimeters_per_radian, centinewton_millimeters_per_radian;
    DecinewtonMillimeterPerRadian => from_decinewton_millimeters_per_radian, decinewton_millimeters_per_radian;
    DecanewtonMillimeterPerRadian => from_decanewton_millimeters_per_radian, decanewton_millimeters_per_radian;
    KilonewtonMillimeterPerRadian => from_kilonewton_millimeters_per_radian, kilonewton_millimeters_per_radian;
    MeganewtonMillimeterPerRadian => from_meganewton_millimeters_per_radian, meganewton_millimeters_per_radian;
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_degree_unit_keeps_operation_order() {
        for v in [0.29, 1.15, 3.0, 123.456, -7.5e4] {
            let to = to_newton_meter_per_radian(
                v,
                RotationalStiffnessUnit::MillinewtonMillimeterPerDegree,
            );
            assert_eq!(to.to_bits(), ((v * 180.0 / PI * 0.001) * 0.001).to_bits());
            let from = from_newton_meter_per_radian(
                v,
                RotationalStiffnessUnit::MillinewtonMillimeterPerDegree,
            );
            assert_eq!(from.to_bits(), ((v / 180.0 * PI * 1000.0) / 0.001).to_bits());
        }
    }

    #[test]
    fn degree_units_scale_by_180_over_pi() {
        let nm = to_newton_meter_per_radian(1.0, RotationalStiffnessUnit::NewtonMeterPerDegree);
        assert!((nm - 57.295_779_513_082_32).abs() < 1e-9);
        let back = from_newton_meter_per_radian(nm, RotationalStiffnessUnit::NewtonMeterPerDegree);
        assert!((back - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kilonewton_millimeter_per_degree_matches_newton_meter_per_degree() {
        // 1 kN·mm = 1 N·m
        let a = convert_rotational_stiffness(
            3.0,
            RotationalStiffnessUnit::KilonewtonMillimeterPerDegree,
            RotationalStiffnessUnit::NewtonMeterPerRadian,
        );
        let b = convert_rotational_stiffness(
            3.0,
            RotationalStiffnessUnit::NewtonMeterPerDegree,
            RotationalStiffnessUnit::NewtonMeterPerRadian,
        );
        assert!((a - b).abs() < 1e-9 * b.abs());
    }
}
