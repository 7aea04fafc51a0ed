//! 측정값 교환용 전송 레코드.
//!
//! JSON 형태는 `{"value": 100.0, "unit": "Hertz"}` 이며 단위는 enum 순번이 아니라
//! 고정 문자열 태그로 기록한다.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::measure::{Measure, MeasureError};
use crate::quantity::QuantityKind;
use crate::units::Unit;

/// 전송 레코드 해석 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum TransferError {
    /// 카탈로그에 없는 단위 태그
    #[error("{quantity}: 알 수 없는 단위: {unit}")]
    UnknownUnit { quantity: QuantityKind, unit: String },
    /// 필드가 없거나 타입이 맞지 않음
    #[error("전송 레코드 필드 누락 또는 형식 오류: {0}")]
    MissingField(&'static str),
    /// JSON 문법 오류
    #[error("JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 측정값 생성 실패
    #[error(transparent)]
    Measure(#[from] MeasureError),
}

/// 값과 단위 한 쌍. 특정 측정값 인스턴스와 연결되지 않는 순수 데이터다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "U: Unit")]
pub struct TransferRecord<U: Unit> {
    pub value: f64,
    pub unit: U,
}

impl<U: Unit> TransferRecord<U> {
    /// 값과 단위로 레코드를 만든다.
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// `{"value": .., "unit": "<태그>"}` 형태로 만든다.
    ///
    /// NaN/무한대 값은 JSON 숫자가 될 수 없어 `null`로 기록된다.
    pub fn to_json(&self) -> Value {
        json!({ "value": self.value, "unit": self.unit.tag() })
    }

    /// JSON 레코드에서 복원한다. 단위 태그는 정확히 일치해야 한다.
    pub fn from_json(data: &Value) -> Result<Self, TransferError> {
        let value = data
            .get("value")
            .and_then(Value::as_f64)
            .ok_or(TransferError::MissingField("value"))?;
        let tag = data
            .get("unit")
            .and_then(Value::as_str)
            .ok_or(TransferError::MissingField("unit"))?;
        let unit = U::from_tag(tag).ok_or_else(|| {
            debug!(quantity = %U::QUANTITY, tag, "알 수 없는 단위 태그");
            TransferError::UnknownUnit {
                quantity: U::QUANTITY,
                unit: tag.to_string(),
            }
        })?;
        Ok(Self { value, unit })
    }

    /// JSON 문자열에서 복원한다.
    pub fn from_json_str(text: &str) -> Result<Self, TransferError> {
        let data: Value = serde_json::from_str(text)?;
        Self::from_json(&data)
    }

    /// 레코드가 나타내는 측정값을 만든다.
    pub fn to_measure(&self) -> Result<Measure<U>, MeasureError> {
        Measure::new(self.value, self.unit)
    }
}

impl<U: Unit> Measure<U> {
    /// `unit`으로 환산한 값을 담은 전송 레코드.
    pub fn to_transfer_record(&self, unit: U) -> TransferRecord<U> {
        TransferRecord::new(self.convert(unit), unit)
    }

    /// `unit`으로 환산한 전송 레코드의 JSON 형태.
    pub fn to_transfer_record_json(&self, unit: U) -> Value {
        self.to_transfer_record(unit).to_json()
    }

    /// 전송 레코드에서 측정값을 만든다.
    pub fn from_transfer_record(record: &TransferRecord<U>) -> Result<Self, MeasureError> {
        record.to_measure()
    }

    /// JSON 전송 레코드에서 측정값을 만든다.
    pub fn from_transfer_record_json(data: &Value) -> Result<Self, TransferError> {
        let record = TransferRecord::<U>::from_json(data)?;
        Ok(record.to_measure()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AmountOfSubstanceUnit, FrequencyUnit};

    #[test]
    fn integer_json_value_is_accepted() {
        let rec = TransferRecord::<FrequencyUnit>::from_json(&json!({"value": 3, "unit": "Hertz"}))
            .unwrap();
        assert_eq!(rec, TransferRecord::new(3.0, FrequencyUnit::Hertz));
    }

    #[test]
    fn missing_fields_are_reported() {
        let err = TransferRecord::<FrequencyUnit>::from_json(&json!({"unit": "Hertz"})).unwrap_err();
        assert!(matches!(err, TransferError::MissingField("value")));
        let err = TransferRecord::<FrequencyUnit>::from_json(&json!({"value": 1.0, "unit": 7}))
            .unwrap_err();
        assert!(matches!(err, TransferError::MissingField("unit")));
    }

    #[test]
    fn tag_match_is_exact() {
        let err = TransferRecord::<AmountOfSubstanceUnit>::from_json(
            &json!({"value": 1.0, "unit": "Mole"}),
        )
        .unwrap_err();
        assert!(matches!(err, TransferError::UnknownUnit { .. }));
    }

    #[test]
    fn serde_derive_uses_same_tags() {
        let rec = TransferRecord::new(2.5, AmountOfSubstanceUnit::PoundMole);
        let text = serde_json::to_string(&rec).unwrap();
        assert_eq!(text, r#"{"value":2.5,"unit":"pound_mole"}"#);
        let back: TransferRecord<AmountOfSubstanceUnit> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, rec);
    }
}
