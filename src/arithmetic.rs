//! 물리량 사칙연산과 단위 환산.
//!
//! 모든 이항 연산은 [`binary`] 하나를 거친다. 오른쪽 피연산자를 왼쪽 단위로 환산한 뒤
//! 두 값을 결합하고, 결과는 왼쪽 단위로 감싼다. 의미 있는 결과가 없으면(값 없음,
//! 변환기 없음, `Undefined` 단위, 오버플로, 0으로 나누기) 오류 대신
//! `Quantity::default()`를 돌려준다.

use std::cmp::Ordering;

use crate::conversion::UnitConverter;
use crate::numeric::Numeric;
use crate::quantity::Quantity;
use crate::registry;
use crate::units::Unit;

/// 물리량을 지정된 단위로 환산한다. 실패하면 기본값.
pub fn convert<V, U>(quantity: Quantity<V, U>, unit: U) -> Quantity<V, U>
where
    V: Numeric,
    U: Unit,
{
    registry::lookup::<U>()
        .and_then(|converter| converter.convert(quantity, unit))
        .unwrap_or_default()
}

/// 이항 연산의 공통 경로. `op`은 두 값이 모두 있을 때만 호출된다.
pub fn binary<V, U, F>(lhs: Quantity<V, U>, rhs: Quantity<V, U>, op: F) -> Quantity<V, U>
where
    V: Numeric,
    U: Unit,
    F: FnOnce(V, V) -> Option<V>,
{
    let Some(left) = lhs.value() else {
        return Quantity::default();
    };
    let Some(right) = convert(rhs, lhs.unit()).value() else {
        return Quantity::default();
    };
    match op(left, right) {
        Some(value) => Quantity::new(Some(value), lhs.unit()),
        None => Quantity::default(),
    }
}

/// 값에만 작용하는 단항 연산. 단위는 유지된다.
pub fn unary<V, U, F>(quantity: Quantity<V, U>, op: F) -> Quantity<V, U>
where
    V: Numeric,
    U: Unit,
    F: FnOnce(V) -> Option<V>,
{
    match quantity.value().and_then(op) {
        Some(value) => Quantity::new(Some(value), quantity.unit()),
        None => Quantity::default(),
    }
}

pub fn add<V: Numeric, U: Unit>(lhs: Quantity<V, U>, rhs: Quantity<V, U>) -> Quantity<V, U> {
    binary(lhs, rhs, V::checked_add)
}

pub fn subtract<V: Numeric, U: Unit>(lhs: Quantity<V, U>, rhs: Quantity<V, U>) -> Quantity<V, U> {
    binary(lhs, rhs, V::checked_sub)
}

pub fn multiply<V: Numeric, U: Unit>(lhs: Quantity<V, U>, rhs: Quantity<V, U>) -> Quantity<V, U> {
    binary(lhs, rhs, V::checked_mul)
}

pub fn divide<V: Numeric, U: Unit>(lhs: Quantity<V, U>, rhs: Quantity<V, U>) -> Quantity<V, U> {
    binary(lhs, rhs, V::checked_div)
}

/// 오른쪽을 왼쪽 단위로 환산한 뒤 크기를 비교한다. 어느 한쪽 값이 없으면 `None`.
pub fn compare<V: Numeric, U: Unit>(lhs: Quantity<V, U>, rhs: Quantity<V, U>) -> Option<Ordering> {
    let left = lhs.value()?;
    let right = convert(rhs, lhs.unit()).value()?;
    left.partial_cmp(&right)
}
