use std::fmt::Debug;

/// 물리량 값으로 쓸 수 있는 수치 표현.
///
/// 모든 연산은 검사형이다. 정수 오버플로, 0으로 나누기, 유한하지 않은 실수 결과는
/// `None`으로 보고하며 패닉하지 않는다.
pub trait Numeric: Copy + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// 단위 간 배율(정수)을 이 표현으로 옮긴다.
    fn from_factor(factor: u32) -> Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn from_factor(factor: u32) -> Self {
                    factor as $t
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn from_factor(factor: u32) -> Self {
                    factor as $t
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    finite(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    finite(self - rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    finite(self * rhs)
                }

                fn checked_div(self, rhs: Self) -> Option<Self> {
                    finite(self / rhs)
                }
            }
        )*
    };
}

impl_numeric_int!(i32, i64, u32, u64);
impl_numeric_float!(f32, f64);

trait Finite: Copy {
    fn is_finite_value(self) -> bool;
}

impl Finite for f32 {
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

impl Finite for f64 {
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }
}

fn finite<T: Finite>(value: T) -> Option<T> {
    value.is_finite_value().then_some(value)
}

/// 값을 `from` 배율 단위에서 `to` 배율 단위로 옮긴다.
///
/// 두 배율은 서로 나누어떨어지므로 한 번의 곱셈 또는 나눗셈으로 끝난다.
/// (g -> µg 는 ×1,000,000 한 번이다.)
pub(crate) fn rescale<V: Numeric>(value: V, from: u32, to: u32) -> Option<V> {
    if from >= to {
        value.checked_mul(V::from_factor(from / to))
    } else {
        value.checked_div(V::from_factor(to / from))
    }
}
