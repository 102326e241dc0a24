//! Limit metadata for the built-in numeric primitives.
//!
//! [`Primitive`] is the wrapper's answer to `numeric_limits`: every limit
//! query on a [`Tagged`](crate::Tagged) instantiation forwards to the
//! constants declared here. The trait is sealed so the limit surface stays
//! total over exactly the built-in numeric types.

mod sealed {
    pub trait Sealed {}
}

/// A built-in numeric type that can sit inside a [`Tagged`](crate::Tagged)
/// wrapper and report its own limits.
///
/// Implemented for all signed/unsigned integers and for `f32`/`f64`. Sealed:
/// downstream crates pick a primitive, they do not invent one.
pub trait Primitive: sealed::Sealed + Copy + PartialEq + PartialOrd {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Whether the type can represent negative values.
    const SIGNED: bool;
}

/// Extra limit constants that only exist for floating-point primitives.
pub trait FloatPrimitive: Primitive {
    /// Machine epsilon.
    const EPSILON: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Not a number.
    const NAN: Self;
}

macro_rules! impl_primitive_int {
    ($($ty:ty => $signed:literal),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Primitive for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const SIGNED: bool = $signed;
        }
    )*};
}

impl_primitive_int! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    u128 => false,
    usize => false,
}

macro_rules! impl_primitive_float {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Primitive for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN: Self = <$ty>::MIN;
            const MAX: Self = <$ty>::MAX;
            const SIGNED: bool = true;
        }

        impl FloatPrimitive for $ty {
            const EPSILON: Self = <$ty>::EPSILON;
            const INFINITY: Self = <$ty>::INFINITY;
            const NEG_INFINITY: Self = <$ty>::NEG_INFINITY;
            const NAN: Self = <$ty>::NAN;
        }
    )*};
}

impl_primitive_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_limits_forward() {
        assert_eq!(<i64 as Primitive>::MIN, i64::MIN);
        assert_eq!(<i64 as Primitive>::MAX, i64::MAX);
        assert_eq!(<u8 as Primitive>::ZERO, 0);
        assert_eq!(<u8 as Primitive>::ONE, 1);
    }

    #[test]
    fn signedness() {
        assert!(<i32 as Primitive>::SIGNED);
        assert!(!<u32 as Primitive>::SIGNED);
        assert!(<f64 as Primitive>::SIGNED);
    }

    #[test]
    fn float_limits_forward() {
        assert_eq!(<f64 as FloatPrimitive>::EPSILON, f64::EPSILON);
        assert!(<f32 as FloatPrimitive>::NAN.is_nan());
        assert_eq!(<f64 as FloatPrimitive>::INFINITY, f64::INFINITY);
    }
}
