//! 물리량별 단위 변환 라이브러리.
//!
//! 각 물리량은 닫힌 단위 enum([`units::Unit`])과 기준 단위로 정규화된 측정값
//! ([`Measure`])으로 구성된다. 측정값은 생성 시 한 번 기준 단위로 환산하고, 단위별
//! 환산 결과는 처음 읽을 때 계산해 보관한다. [`TransferRecord`]는 `(값, 단위)` 쌍을
//! JSON 으로 주고받을 때 쓴다.
//!
//! ```
//! use unit_measures::units::{Frequency, FrequencyUnit};
//!
//! let f = Frequency::from_kilohertz(1.0);
//! assert_eq!(f.hertz(), 1000.0);
//!
//! let hz = Frequency::from_hertz(1.0);
//! assert_eq!(hz.to_unit_string(FrequencyUnit::RadianPerSecond, None), "6.2831853072 rad/s");
//! ```

pub mod config;
pub mod conversion;
pub mod dto;
pub mod measure;
pub mod quantity;
pub mod units;

pub use dto::{TransferError, TransferRecord};
pub use measure::{Measure, MeasureError};
pub use quantity::{QuantityKind, QuantityValue};
