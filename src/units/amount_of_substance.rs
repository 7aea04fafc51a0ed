use serde::{Deserialize, Serialize};

use crate::measure::{measure_accessors, Measure};
use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 물질량 단위. 내부 기준은 mol이다.
/// 직렬화 태그는 snake_case(`mole`, `pound_mole`)를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountOfSubstanceUnit {
    Mole,
    PoundMole,
    Femtomole,
    Picomole,
    Nanomole,
    Micromole,
    Millimole,
    Centimole,
    Decimole,
    Kilomole,
    Megamole,
    NanopoundMole,
    MicropoundMole,
    MillipoundMole,
    CentipoundMole,
    DecipoundMole,
    KilopoundMole,
}

/// 1 lbmol 에 해당하는 mol.
const MOLE_PER_POUND_MOLE: f64 = 453.59237;

/// 물질량. NaN 입력은 생성 시 거부한다.
pub type AmountOfSubstance = Measure<AmountOfSubstanceUnit>;

// 접두어 단위는 물리 배율을 먼저 적용한 뒤 접두어 배율을 곱/나눈다.
fn to_mole(value: f64, unit: AmountOfSubstanceUnit) -> f64 {
    use AmountOfSubstanceUnit::*;
    match unit {
        Mole => value,
        PoundMole => value * MOLE_PER_POUND_MOLE,
        Femtomole => value * 1e-15,
        Picomole => value * 1e-12,
        Nanomole => value * 1e-9,
        Micromole => value * 1e-6,
        Millimole => value * 0.001,
        Centimole => value * 0.01,
        Decimole => value * 0.1,
        Kilomole => value * 1000.0,
        Megamole => value * 1_000_000.0,
        NanopoundMole => (value * MOLE_PER_POUND_MOLE) * 1e-9,
        MicropoundMole => (value * MOLE_PER_POUND_MOLE) * 1e-6,
        MillipoundMole => (value * MOLE_PER_POUND_MOLE) * 0.001,
        CentipoundMole => (value * MOLE_PER_POUND_MOLE) * 0.01,
        DecipoundMole => (value * MOLE_PER_POUND_MOLE) * 0.1,
        KilopoundMole => (value * MOLE_PER_POUND_MOLE) * 1000.0,
    }
}

fn from_mole(value_mol: f64, unit: AmountOfSubstanceUnit) -> f64 {
    use AmountOfSubstanceUnit::*;
    match unit {
        Mole => value_mol,
        PoundMole => value_mol / MOLE_PER_POUND_MOLE,
        Femtomole => value_mol / 1e-15,
        Picomole => value_mol / 1e-12,
        Nanomole => value_mol / 1e-9,
        Micromole => value_mol / 1e-6,
        Millimole => value_mol / 0.001,
        Centimole => value_mol / 0.01,
        Decimole => value_mol / 0.1,
        Kilomole => value_mol / 1000.0,
        Megamole => value_mol / 1_000_000.0,
        NanopoundMole => (value_mol / MOLE_PER_POUND_MOLE) / 1e-9,
        MicropoundMole => (value_mol / MOLE_PER_POUND_MOLE) / 1e-6,
        MillipoundMole => (value_mol / MOLE_PER_POUND_MOLE) / 0.001,
        CentipoundMole => (value_mol / MOLE_PER_POUND_MOLE) / 0.01,
        DecipoundMole => (value_mol / MOLE_PER_POUND_MOLE) / 0.1,
        KilopoundMole => (value_mol / MOLE_PER_POUND_MOLE) / 1000.0,
    }
}

/// 물질량을 다른 단위로 변환한다.
pub fn convert_amount_of_substance(
    value: f64,
    from: AmountOfSubstanceUnit,
    to: AmountOfSubstanceUnit,
) -> f64 {
    let mol = to_mole(value, from);
    from_mole(mol, to)
}

impl Unit for AmountOfSubstanceUnit {
    const QUANTITY: QuantityKind = QuantityKind::AmountOfSubstance;
    const BASE: Self = AmountOfSubstanceUnit::Mole;
    const ALL: &'static [Self] = &[
        AmountOfSubstanceUnit::Mole,
        AmountOfSubstanceUnit::PoundMole,
        AmountOfSubstanceUnit::Femtomole,
        AmountOfSubstanceUnit::Picomole,
        AmountOfSubstanceUnit::Nanomole,
        AmountOfSubstanceUnit::Micromole,
        AmountOfSubstanceUnit::Millimole,
        AmountOfSubstanceUnit::Centimole,
        AmountOfSubstanceUnit::Decimole,
        AmountOfSubstanceUnit::Kilomole,
        AmountOfSubstanceUnit::Megamole,
        AmountOfSubstanceUnit::NanopoundMole,
        AmountOfSubstanceUnit::MicropoundMole,
        AmountOfSubstanceUnit::MillipoundMole,
        AmountOfSubstanceUnit::CentipoundMole,
        AmountOfSubstanceUnit::DecipoundMole,
        AmountOfSubstanceUnit::KilopoundMole,
    ];
    const VALIDATION: InputValidation = InputValidation::RejectNan;

    fn index(self) -> usize {
        self as usize
    }

    fn tag(self) -> &'static str {
        use AmountOfSubstanceUnit::*;
        match self {
            Mole => "mole",
            PoundMole => "pound_mole",
            Femtomole => "femtomole",
            Picomole => "picomole",
            Nanomole => "nanomole",
            Micromole => "micromole",
            Millimole => "millimole",
            Centimole => "centimole",
            Decimole => "decimole",
            Kilomole => "kilomole",
            Megamole => "megamole",
            NanopoundMole => "nanopound_mole",
            MicropoundMole => "micropound_mole",
            MillipoundMole => "millipound_mole",
            CentipoundMole => "centipound_mole",
            DecipoundMole => "decipound_mole",
            KilopoundMole => "kilopound_mole",
        }
    }

    fn abbreviation(self) -> &'static str {
        use AmountOfSubstanceUnit::*;
        match self {
            Mole => "mol",
            PoundMole => "lbmol",
            Femtomole => "fmol",
            Picomole => "pmol",
            Nanomole => "nmol",
            Micromole => "μmol",
            Millimole => "mmol",
            Centimole => "cmol",
            Decimole => "dmol",
            Kilomole => "kmol",
            Megamole => "Mmol",
            NanopoundMole => "nlbmol",
            MicropoundMole => "μlbmol",
            MillipoundMole => "mlbmol",
            CentipoundMole => "clbmol",
            DecipoundMole => "dlbmol",
            KilopoundMole => "klbmol",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        to_mole(value, self)
    }

    fn from_base(self, value: f64) -> f64 {
        from_mole(value, self)
    }
}

measure_accessors!(validated AmountOfSubstanceUnit {
    Mole => from_moles, moles;
    PoundMole => from_pound_moles, pound_moles;
    Femtomole => from_femtomoles, femtomoles;
    Picomole => from_picomoles, picomoles;
    Nanomole => from_nanomoles, nanomoles;
    Micromole => from_micromoles, micromoles;
    Millimole => from_millimoles, millimoles;
    Centimole => from_centimoles, centimoles;
    Decimole => from_decimoles, decimoles;
    Kilomole => from_kilomoles, kilomoles;
    Megamole => from_megamoles, megamoles;
    NanopoundMole => from_nanopound_moles, nanopound_moles;
    MicropoundMole => from_micropound_moles, micropound_moles;
    MillipoundMole => from_millipound_moles, millipound_moles;
    CentipoundMole => from_centipound_moles, centipound_moles;
    DecipoundMole => from_decipound_moles, decipound_moles;
    KilopoundMole => from_kilopound_moles, kilopound_moles;
});
