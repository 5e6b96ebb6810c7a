//! 최솟값/최댓값 범위와 단위가 붙은 범위.
//!
//! 두 경계가 모두 있으면 `minimum < maximum` 이어야 한다. 한쪽 또는 양쪽 경계가 없는
//! 범위는 열린 범위로서 항상 유효하다. 직렬화 표현은 `min`/`max`(null 허용)와
//! `unit`(필수)이며, 역직렬화할 때도 같은 검증을 거친다.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::numeric::Numeric;
use crate::quantity::Quantity;
use crate::units::{MassUnit, TimeUnit, Unit};

/// 범위 생성 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// 두 경계가 모두 있는데 최솟값이 최댓값보다 작지 않음
    MinimumNotBelowMaximum { minimum: String, maximum: String },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::MinimumNotBelowMaximum { minimum, maximum } => {
                write!(f, "최솟값이 최댓값보다 작아야 함: min={minimum}, max={maximum}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

fn validate<V: PartialOrd + fmt::Debug>(
    minimum: &Option<V>,
    maximum: &Option<V>,
) -> Result<(), RangeError> {
    if let (Some(min), Some(max)) = (minimum, maximum) {
        if min.partial_cmp(max) != Some(Ordering::Less) {
            tracing::debug!(?min, ?max, "range rejected");
            return Err(RangeError::MinimumNotBelowMaximum {
                minimum: format!("{min:?}"),
                maximum: format!("{max:?}"),
            });
        }
    }
    Ok(())
}

/// 경계를 가진 범위의 공통 조회 기능.
pub trait BoundedRange<V: PartialOrd> {
    fn minimum(&self) -> Option<V>;

    fn maximum(&self) -> Option<V>;

    fn has_lower_bound(&self) -> bool {
        self.minimum().is_some()
    }

    fn has_upper_bound(&self) -> bool {
        self.maximum().is_some()
    }

    /// 경계를 포함해 `value`가 범위 안에 있는지 본다. 없는 경계는 열려 있다.
    fn contains(&self, value: &V) -> bool {
        let above_min = self.minimum().map_or(true, |min| min <= *value);
        let below_max = self.maximum().map_or(true, |max| *value <= max);
        above_min && below_max
    }
}

/// 단위 없는 범위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawRange<V>",
    bound(deserialize = "V: Deserialize<'de> + PartialOrd + fmt::Debug")
)]
pub struct Range<V> {
    #[serde(rename = "min")]
    minimum: Option<V>,
    #[serde(rename = "max")]
    maximum: Option<V>,
}

#[derive(Deserialize)]
struct RawRange<V> {
    min: Option<V>,
    max: Option<V>,
}

impl<V: PartialOrd + fmt::Debug> TryFrom<RawRange<V>> for Range<V> {
    type Error = RangeError;

    fn try_from(raw: RawRange<V>) -> Result<Self, Self::Error> {
        Range::new(raw.min, raw.max)
    }
}

impl<V: PartialOrd + fmt::Debug> Range<V> {
    pub fn new(minimum: Option<V>, maximum: Option<V>) -> Result<Self, RangeError> {
        validate(&minimum, &maximum)?;
        Ok(Self { minimum, maximum })
    }

    /// 양쪽 모두 열린 범위.
    pub fn unbounded() -> Self {
        Self {
            minimum: None,
            maximum: None,
        }
    }
}

impl<V: Copy + PartialOrd> BoundedRange<V> for Range<V> {
    fn minimum(&self) -> Option<V> {
        self.minimum
    }

    fn maximum(&self) -> Option<V> {
        self.maximum
    }
}

/// 두 경계가 같은 단위를 공유하는 범위. 생성 후 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawUnitRange<V, U>",
    bound(deserialize = "V: Deserialize<'de> + PartialOrd + fmt::Debug, U: Deserialize<'de>")
)]
pub struct UnitRange<V, U> {
    #[serde(rename = "min")]
    minimum: Option<V>,
    #[serde(rename = "max")]
    maximum: Option<V>,
    unit: U,
}

#[derive(Deserialize)]
struct RawUnitRange<V, U> {
    min: Option<V>,
    max: Option<V>,
    unit: U,
}

impl<V: PartialOrd + fmt::Debug, U> TryFrom<RawUnitRange<V, U>> for UnitRange<V, U> {
    type Error = RangeError;

    fn try_from(raw: RawUnitRange<V, U>) -> Result<Self, Self::Error> {
        UnitRange::new(raw.min, raw.max, raw.unit)
    }
}

impl<V: PartialOrd + fmt::Debug, U> UnitRange<V, U> {
    pub fn new(minimum: Option<V>, maximum: Option<V>, unit: U) -> Result<Self, RangeError> {
        validate(&minimum, &maximum)?;
        Ok(Self {
            minimum,
            maximum,
            unit,
        })
    }
}

impl<V, U> UnitRange<V, U>
where
    V: Numeric,
    U: Unit,
{
    pub fn unit(&self) -> U {
        self.unit
    }

    /// 단위를 뺀 경계만 돌려준다.
    pub fn bounds(&self) -> Range<V> {
        Range {
            minimum: self.minimum,
            maximum: self.maximum,
        }
    }

    /// 최솟값을 범위 단위의 물리량으로 돌려준다. 하한이 없으면 값 없는 물리량.
    pub fn min_quantity(&self) -> Quantity<V, U> {
        Quantity::new(self.minimum, self.unit)
    }

    pub fn max_quantity(&self) -> Quantity<V, U> {
        Quantity::new(self.maximum, self.unit)
    }

    /// 물리량을 범위 단위로 환산한 뒤 포함 여부를 본다. 환산할 수 없거나 값이 없으면 `false`.
    pub fn contains_quantity(&self, quantity: Quantity<V, U>) -> bool {
        quantity
            .convert(self.unit)
            .value()
            .is_some_and(|v| self.contains(&v))
    }
}

impl<V: Copy + PartialOrd, U> BoundedRange<V> for UnitRange<V, U> {
    fn minimum(&self) -> Option<V> {
        self.minimum
    }

    fn maximum(&self) -> Option<V> {
        self.maximum
    }
}

/// 투여량 범위.
pub type DoseRange = UnitRange<f32, MassUnit>;

/// 지속 시간 범위.
pub type DurationRange = UnitRange<i32, TimeUnit>;
