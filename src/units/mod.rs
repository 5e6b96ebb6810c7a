//! 단위 정의 및 변환 모듈 모음.

use std::fmt::Debug;
use std::hash::Hash;

use crate::conversion::UnitConverter;
use crate::quantity::Dimension;

pub mod mass;
pub mod time;

pub use mass::{convert_mass, MassConverter, MassUnit};
pub use time::{convert_time, TimeConverter, TimeUnit};

/// 한 차원의 닫힌 단위 집합.
///
/// `Default` 값은 "단위 미지정"(`Undefined`) 표식이며 변환 대상이 될 수 없다.
/// 변환기는 타입으로 고정되므로 변환기 선택은 정적으로 이루어진다.
pub trait Unit: Copy + Eq + Hash + Debug + Default + Send + Sync + 'static {
    /// 이 단위 집합을 처리하는 변환기.
    type Converter: UnitConverter<Self> + Send + Sync + 'static;

    /// 단위 집합이 속한 차원. 레지스트리에 없는 단위 집합은 `None`.
    const DIMENSION: Option<Dimension>;

    /// 등록된 변환기 싱글턴을 돌려준다.
    fn converter() -> Option<&'static Self::Converter>;

    fn is_defined(self) -> bool {
        self != Self::default()
    }
}
