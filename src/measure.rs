//! 기준 단위로 정규화된 값을 담는 측정값 타입.
//!
//! 생성 시 한 번만 기준 단위로 환산하고, 이후 단위별 환산 결과는 처음 읽을 때 계산해
//! 단위 순번으로 색인된 슬롯에 보관한다. 기준값은 생성 후 바뀌지 않으므로 슬롯은
//! 한 번 채워지면 무효화되지 않는다.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{debug, trace};

use crate::quantity::QuantityKind;
use crate::units::{InputValidation, Unit};

/// 측정값 생성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// NaN 입력을 거부하는 물리량에 NaN이 들어왔다.
    #[error("{quantity} 값이 올바르지 않음: NaN")]
    NotANumber { quantity: QuantityKind },
}

/// 한 물리량의 측정값.
pub struct Measure<U: Unit> {
    base_value: f64,
    cache: Box<[OnceLock<f64>]>,
    unit: PhantomData<U>,
}

impl<U: Unit> Measure<U> {
    /// `unit` 단위의 `value`로 측정값을 만든다.
    ///
    /// 물리량의 검증 정책이 [`InputValidation::RejectNan`]이면 NaN 입력에 대해
    /// [`MeasureError::NotANumber`]를 반환한다.
    pub fn new(value: f64, unit: U) -> Result<Self, MeasureError> {
        if U::VALIDATION == InputValidation::RejectNan && value.is_nan() {
            debug!(quantity = %U::QUANTITY, ?unit, "NaN 입력 거부");
            return Err(MeasureError::NotANumber {
                quantity: U::QUANTITY,
            });
        }
        Ok(Self::normalized(value, unit))
    }

    /// 검증 없이 기준 단위로 환산해 만든다. `Accept` 정책 물리량의 이름 있는 생성자가 쓴다.
    pub(crate) fn normalized(value: f64, unit: U) -> Self {
        Self {
            base_value: unit.to_base(value),
            cache: U::ALL.iter().map(|_| OnceLock::new()).collect(),
            unit: PhantomData,
        }
    }

    /// 내부 기준 단위로 정규화된 값.
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// 원하는 단위로 환산한다. 처음 요청한 단위의 결과는 캐시되어 이후 같은 값을 돌려준다.
    pub fn convert(&self, unit: U) -> f64 {
        *self.cache[unit.index()].get_or_init(|| {
            let value = unit.from_base(self.base_value);
            trace!(quantity = %U::QUANTITY, ?unit, value, "환산 결과 캐시");
            value
        })
    }

    /// 해당 단위의 환산 결과가 이미 캐시되었는지 여부.
    pub fn is_memoized(&self, unit: U) -> bool {
        self.cache[unit.index()].get().is_some()
    }

    /// 단위 약어를 돌려준다.
    pub fn unit_abbreviation(&self, unit: U) -> &'static str {
        unit.abbreviation()
    }

    /// `unit`으로 환산한 값 뒤에 공백과 약어를 붙여 문자열로 만든다.
    ///
    /// `fractional_digits`가 주어지면 반올림하지 않고 그 자릿수까지 잘라낸다.
    pub fn to_unit_string(&self, unit: U, fractional_digits: Option<u32>) -> String {
        let value = format_truncated(self.convert(unit), fractional_digits);
        format!("{value} {}", unit.abbreviation())
    }
}

/// 값을 최단 왕복 십진 표현으로 만든 뒤 소수부를 지정 자릿수까지 버린다.
/// 부동소수 배율 연산은 거치지 않는다.
pub(crate) fn format_truncated(value: f64, fractional_digits: Option<u32>) -> String {
    let text = value.to_string();
    let Some(digits) = fractional_digits else {
        return text;
    };
    match text.split_once('.') {
        Some((int_part, _)) if digits == 0 => int_part.to_string(),
        Some((int_part, frac_part)) => {
            let keep = frac_part.len().min(digits as usize);
            format!("{int_part}.{}", &frac_part[..keep])
        }
        None => text,
    }
}

impl<U: Unit> Clone for Measure<U> {
    fn clone(&self) -> Self {
        Self {
            base_value: self.base_value,
            cache: self.cache.clone(),
            unit: PhantomData,
        }
    }
}

impl<U: Unit> fmt::Debug for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(U::QUANTITY.name())
            .field("base_value", &self.base_value)
            .field("base_unit", &U::BASE)
            .finish()
    }
}

/// 기준 단위, 전체 정밀도로 출력한다.
impl<U: Unit> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_unit_string(U::BASE, None))
    }
}

impl<U: Unit> PartialEq for Measure<U> {
    fn eq(&self, other: &Self) -> bool {
        self.base_value == other.base_value
    }
}

impl<U: Unit> PartialOrd for Measure<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base_value.partial_cmp(&other.base_value)
    }
}

/// 물리량별 이름 있는 생성자(`from_<단위>`)와 조회 메서드(`<단위>()`)를 만든다.
///
/// `validated` 물리량의 생성자는 `Result`를, `lenient` 물리량의 생성자는 값을 그대로 돌려준다.
/// `lenient`로 선언한 카탈로그의 검증 정책이 `Accept`가 아니면 컴파일되지 않는다.
macro_rules! measure_accessors {
    (validated $unit_ty:ident { $($variant:ident => $ctor:ident, $getter:ident;)+ }) => {
        impl $crate::measure::Measure<$unit_ty> {
            $(
                #[doc = concat!("`", stringify!($variant), "` 단위 값으로 만든다.")]
                pub fn $ctor(value: f64) -> Result<Self, $crate::measure::MeasureError> {
                    Self::new(value, $unit_ty::$variant)
                }

                #[doc = concat!("`", stringify!($variant), "` 단위로 환산한 값.")]
                pub fn $getter(&self) -> f64 {
                    self.convert($unit_ty::$variant)
                }
            )+
        }
    };
    (lenient $unit_ty:ident { $($variant:ident => $ctor:ident, $getter:ident;)+ }) => {
        const _: () = assert!(matches!(
            <$unit_ty as $crate::units::Unit>::VALIDATION,
            $crate::units::InputValidation::Accept
        ));

        impl $crate::measure::Measure<$unit_ty> {
            $(
                #[doc = concat!("`", stringify!($variant), "` 단위 값으로 만든다.")]
                pub fn $ctor(value: f64) -> Self {
                    Self::normalized(value, $unit_ty::$variant)
                }

                #[doc = concat!("`", stringify!($variant), "` 단위로 환산한 값.")]
                pub fn $getter(&self) -> f64 {
                    self.convert($unit_ty::$variant)
                }
            )+
        }
    };
}

pub(crate) use measure_accessors;
