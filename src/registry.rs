//! 차원별 변환기 싱글턴 테이블.
//!
//! 변환기는 처음 쓰일 때 한 번 만들어지고 이후 변경되지 않는다. 새 차원을 추가하려면
//! 단위 enum, 변환기, 그리고 이 테이블의 항목을 함께 추가해야 한다.

use std::sync::OnceLock;

use crate::quantity::Dimension;
use crate::units::{MassConverter, TimeConverter, Unit};

const REGISTERED: [Dimension; 2] = [Dimension::Mass, Dimension::Time];

static MASS: OnceLock<MassConverter> = OnceLock::new();
static TIME: OnceLock<TimeConverter> = OnceLock::new();

pub fn mass() -> &'static MassConverter {
    MASS.get_or_init(|| {
        tracing::trace!(dimension = %Dimension::Mass, "converter initialized");
        MassConverter
    })
}

pub fn time() -> &'static TimeConverter {
    TIME.get_or_init(|| {
        tracing::trace!(dimension = %Dimension::Time, "converter initialized");
        TimeConverter
    })
}

/// 단위 타입 `U`를 처리하는 변환기를 찾는다. 등록되지 않았으면 `None`.
pub fn lookup<U: Unit>() -> Option<&'static U::Converter> {
    U::DIMENSION.filter(|d| is_registered(*d))?;
    U::converter()
}

/// 변환기가 등록된 차원 목록.
pub fn dimensions() -> &'static [Dimension] {
    &REGISTERED
}

pub fn is_registered(dimension: Dimension) -> bool {
    REGISTERED.contains(&dimension)
}
