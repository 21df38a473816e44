//! Capability traits for the scalar types stored in a [`Vector`][crate::Vector].

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Arithmetic scalar types: any built-in integer or floating-point type.
///
/// This is everything needed for component-wise arithmetic, the dot product, the cross product
/// and reflection. Unsigned integers are included, so anything involving subtraction can wrap or
/// overflow for them just like it would for plain integers.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the trigonometric functions used by this crate.
pub trait Trig {
    /// Computes the arccosine of `self`, in radians.
    fn acos(self) -> Self;
}

/// Floating-point scalar types.
///
/// Operations that need a square root or a non-truncating division (magnitude, normalization,
/// angles, projection) are only available for vectors of `Float`s.
pub trait Float: Number + ops::Neg<Output = Self> + PartialOrd + Sqrt + Trig {}
impl Float for f32 {}
impl Float for f64 {}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    $types::sqrt(self)
                }
            }

            impl Trig for $types {
                fn acos(self) -> Self {
                    $types::acos(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identities() {
        assert_eq!(<i32 as Zero>::ZERO, 0);
        assert_eq!(<u8 as One>::ONE, 1);
        assert_eq!(<f64 as Zero>::ZERO, 0.0);
        assert_eq!(<f32 as One>::ONE, 1.0);
    }

    #[test]
    fn float_functions() {
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
        assert_eq!(Trig::acos(1.0f64), 0.0);
        assert!(Trig::acos(1.5f32).is_nan());
    }
}
