use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Unit;
use crate::conversion::{ConversionError, UnitConverter};
use crate::numeric::{rescale, Numeric};
use crate::quantity::{Dimension, Quantity};
use crate::registry;

/// 질량 단위. 작은 단위부터 정렬되어 있으며 내부 기준은 µg이다.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MassUnit {
    #[default]
    Undefined,
    Micrograms,
    Milligrams,
    Grams,
}

/// 1 단위가 몇 µg 인지 돌려준다.
fn micrograms_per(unit: MassUnit) -> Option<u32> {
    match unit {
        MassUnit::Micrograms => Some(1),
        MassUnit::Milligrams => Some(1_000),
        MassUnit::Grams => Some(1_000_000),
        MassUnit::Undefined => None,
    }
}

/// 질량 변환기. 상태가 없다.
#[derive(Debug, Default, Clone, Copy)]
pub struct MassConverter;

impl UnitConverter<MassUnit> for MassConverter {
    fn convert<V: Numeric>(
        &self,
        input: Quantity<V, MassUnit>,
        unit: MassUnit,
    ) -> Option<Quantity<V, MassUnit>> {
        let from = micrograms_per(input.unit())?;
        let to = micrograms_per(unit)?;
        if from == to {
            return Some(input);
        }
        let value = match input.value() {
            Some(v) => Some(rescale(v, from, to)?),
            None => None,
        };
        Some(Quantity::new(value, unit))
    }
}

impl Unit for MassUnit {
    type Converter = MassConverter;

    const DIMENSION: Option<Dimension> = Some(Dimension::Mass);

    fn converter() -> Option<&'static MassConverter> {
        Some(registry::mass())
    }
}

/// 질량 물리량을 만든다.
pub fn mass<V: Numeric>(value: Option<V>, unit: MassUnit) -> Quantity<V, MassUnit> {
    Quantity::new(value, unit)
}

pub fn micrograms<V: Numeric>(value: V) -> Quantity<V, MassUnit> {
    mass(Some(value), MassUnit::Micrograms)
}

pub fn milligrams<V: Numeric>(value: V) -> Quantity<V, MassUnit> {
    mass(Some(value), MassUnit::Milligrams)
}

pub fn grams<V: Numeric>(value: V) -> Quantity<V, MassUnit> {
    mass(Some(value), MassUnit::Grams)
}

/// 질량을 변환한다. 단위가 `Undefined`면 `None`.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> Option<f64> {
    registry::mass()
        .convert(mass(Some(value), from), to)
        .and_then(|q| q.value())
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            MassUnit::Undefined => "undefined",
            MassUnit::Micrograms => "µg",
            MassUnit::Milligrams => "mg",
            MassUnit::Grams => "g",
        };
        f.write_str(symbol)
    }
}

impl FromStr for MassUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ug" | "µg" | "μg" | "mcg" | "microgram" | "micrograms" => Ok(MassUnit::Micrograms),
            "mg" | "milligram" | "milligrams" => Ok(MassUnit::Milligrams),
            "g" | "gram" | "grams" => Ok(MassUnit::Grams),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}
