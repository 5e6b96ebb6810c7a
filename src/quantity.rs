use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arithmetic;
use crate::numeric::Numeric;
use crate::units::Unit;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Mass,
    Time,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Mass => write!(f, "mass"),
            Dimension::Time => write!(f, "time"),
        }
    }
}

/// 값과 단위를 묶은 불변 물리량.
///
/// 값은 없을 수 있다(`None`). 값이 없는 물리량은 "의미 있는 결과 없음"을 뜻하며,
/// 연산 실패는 모두 이 상태로 표현된다. 생성은 차원별 팩토리
/// ([`crate::units::mass::mass`], [`crate::units::time::time`] 등)로만 한다.
///
/// 단위 타입이 다르면 서로 다른 타입이므로 질량과 시간을 섞어 비교하거나 계산할 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quantity<V, U> {
    value: Option<V>,
    unit: U,
}

impl<V, U> Quantity<V, U>
where
    V: Numeric,
    U: Unit,
{
    pub(crate) fn new(value: Option<V>, unit: U) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> Option<V> {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// 값이 존재하면 `true`.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// 같은 차원의 다른 단위로 환산한다. 환산할 수 없으면 기본값(값 없음, `Undefined`)을 돌려준다.
    pub fn convert(self, unit: U) -> Self {
        arithmetic::convert(self, unit)
    }
}

/// 값 없음, `Undefined` 단위.
impl<V, U: Default> Default for Quantity<V, U> {
    fn default() -> Self {
        Self {
            value: None,
            unit: U::default(),
        }
    }
}

impl<V, U> fmt::Display for Quantity<V, U>
where
    V: fmt::Display,
    U: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{v} {}", self.unit),
            None => write!(f, "n/a {}", self.unit),
        }
    }
}
