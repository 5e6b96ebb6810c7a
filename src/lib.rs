//! 질량/시간 물리량과 단위 환산, 투여량/지속 시간 범위를 다루는 라이브러리.
//!
//! ```
//! use datarug::arithmetic;
//! use datarug::units::mass::{grams, milligrams};
//! use datarug::units::time::seconds;
//! use datarug::units::{MassUnit, TimeUnit};
//!
//! let total = arithmetic::add(milligrams(100.0_f32), grams(1.0));
//! assert_eq!(total.value(), Some(1100.0));
//! assert_eq!(total.unit(), MassUnit::Milligrams);
//!
//! let two = seconds(120).convert(TimeUnit::Minutes);
//! assert_eq!(two.value(), Some(2));
//! ```

pub mod arithmetic;
pub mod config;
pub mod conversion;
pub mod dosage;
pub mod numeric;
pub mod quantity;
pub mod range;
pub mod registry;
pub mod units;

pub mod prelude {
    pub use crate::arithmetic::{add, divide, multiply, subtract};
    pub use crate::dosage::{DosageProfile, DoseLevel, LevelInfo, SubstanceRoute};
    pub use crate::quantity::{Dimension, Quantity};
    pub use crate::range::{BoundedRange, DoseRange, DurationRange, Range, RangeError, UnitRange};
    pub use crate::units::{MassUnit, TimeUnit, Unit};
}
