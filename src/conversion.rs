use crate::numeric::Numeric;
use crate::quantity::{Dimension, Quantity};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 같은 차원이지만 환산할 수 없는 단위 조합
    NotConvertible { from: String, to: String },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::NotConvertible { from, to } => {
                write!(f, "변환할 수 없는 단위 조합: {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 한 차원의 물리량을 같은 차원의 다른 단위로 옮기는 전략.
///
/// 구현체는 상태가 없어야 한다. 변환할 수 없는 조합(`Undefined` 포함)은 오류가 아니라
/// `None`으로 보고한다.
pub trait UnitConverter<U: Unit> {
    fn convert<V: Numeric>(&self, input: Quantity<V, U>, unit: U) -> Option<Quantity<V, U>>;
}

/// 레지스트리에 등록되지 않은 단위 집합이 쓰는 변환기. 항상 `None`을 돌려준다.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unconvertible;

impl<U: Unit> UnitConverter<U> for Unconvertible {
    fn convert<V: Numeric>(&self, _input: Quantity<V, U>, _unit: U) -> Option<Quantity<V, U>> {
        None
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `mg`, `ug`, `g`, `s`, `min`, `h`, `d` 등을 사용할 수 있다.
pub fn convert(
    dimension: Dimension,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let converted = match dimension {
        Dimension::Mass => {
            let from: MassUnit = from_unit_str.parse()?;
            let to: MassUnit = to_unit_str.parse()?;
            convert_mass(value, from, to)
        }
        Dimension::Time => {
            let from: TimeUnit = from_unit_str.parse()?;
            let to: TimeUnit = to_unit_str.parse()?;
            convert_time(value, from, to)
        }
    };
    converted.ok_or_else(|| ConversionError::NotConvertible {
        from: from_unit_str.to_string(),
        to: to_unit_str.to_string(),
    })
}
