use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Unit;
use crate::conversion::{ConversionError, UnitConverter};
use crate::numeric::{rescale, Numeric};
use crate::quantity::{Dimension, Quantity};
use crate::registry;

/// 시간 단위. 내부 기준은 초이다.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TimeUnit {
    #[default]
    Undefined,
    Seconds,
    Minutes,
    Hours,
    Days,
}

fn seconds_per(unit: TimeUnit) -> Option<u32> {
    match unit {
        TimeUnit::Seconds => Some(1),
        TimeUnit::Minutes => Some(60),
        TimeUnit::Hours => Some(3_600),
        TimeUnit::Days => Some(86_400),
        TimeUnit::Undefined => None,
    }
}

/// 시간 변환기.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeConverter;

impl UnitConverter<TimeUnit> for TimeConverter {
    fn convert<V: Numeric>(
        &self,
        input: Quantity<V, TimeUnit>,
        unit: TimeUnit,
    ) -> Option<Quantity<V, TimeUnit>> {
        let from = seconds_per(input.unit())?;
        let to = seconds_per(unit)?;
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

impl Unit for TimeUnit {
    type Converter = TimeConverter;

    const DIMENSION: Option<Dimension> = Some(Dimension::Time);

    fn converter() -> Option<&'static TimeConverter> {
        Some(registry::time())
    }
}

/// 시간 물리량을 만든다.
pub fn time<V: Numeric>(value: Option<V>, unit: TimeUnit) -> Quantity<V, TimeUnit> {
    Quantity::new(value, unit)
}

pub fn seconds<V: Numeric>(value: V) -> Quantity<V, TimeUnit> {
    time(Some(value), TimeUnit::Seconds)
}

pub fn minutes<V: Numeric>(value: V) -> Quantity<V, TimeUnit> {
    time(Some(value), TimeUnit::Minutes)
}

pub fn hours<V: Numeric>(value: V) -> Quantity<V, TimeUnit> {
    time(Some(value), TimeUnit::Hours)
}

pub fn days<V: Numeric>(value: V) -> Quantity<V, TimeUnit> {
    time(Some(value), TimeUnit::Days)
}

/// 시간을 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> Option<f64> {
    registry::time()
        .convert(time(Some(value), from), to)
        .and_then(|q| q.value())
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            TimeUnit::Undefined => "undefined",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        };
        f.write_str(symbol)
    }
}

impl FromStr for TimeUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "min" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}
