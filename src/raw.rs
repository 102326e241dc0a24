//! Uniform extraction of the primitive from maybe-wrapped values.
//!
//! Generic code often receives either a bare primitive or a
//! [`Tagged`](crate::Tagged) wrapper over one and wants to handle both
//! without branching. [`Raw`] is the compile-time predicate and accessor for
//! that: wrapper instantiations expose their embedded primitive, bare
//! primitives pass through as themselves. The [`primitive_cast`] family
//! applies it while preserving the argument's ownership mode.

use crate::tagged::Tagged;

/// Access to the underlying primitive of a maybe-wrapped value.
///
/// `<X as Raw>::TAGGED` answers "is `X` a wrapper instantiation?" at compile
/// time; the three accessors mirror the by-value, shared, and exclusive ways
/// of reaching the primitive. There are exactly two families of impls and
/// they are disjoint, so dispatch is settled entirely by the type checker.
pub trait Raw {
    /// The embedded primitive, or the type itself for bare values.
    type Value;

    /// Whether this type is a [`Tagged`] instantiation.
    const TAGGED: bool;

    /// Extract the primitive by value.
    fn into_raw(self) -> Self::Value;

    /// Borrow the primitive.
    fn raw(&self) -> &Self::Value;

    /// Exclusively borrow the primitive.
    fn raw_mut(&mut self) -> &mut Self::Value;
}

impl<T, M> Raw for Tagged<T, M> {
    type Value = T;

    const TAGGED: bool = true;

    #[inline]
    fn into_raw(self) -> T {
        self.into_inner()
    }

    #[inline]
    fn raw(&self) -> &T {
        self.get()
    }

    #[inline]
    fn raw_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

// Pass-through impls for the bare built-ins. A blanket `impl<T> Raw for T`
// would overlap the wrapper impl, so the identity branch covers the closed
// set of primitive types generic numeric code actually mixes with wrappers.
macro_rules! impl_raw_identity {
    ($($ty:ty),* $(,)?) => {$(
        impl Raw for $ty {
            type Value = $ty;

            const TAGGED: bool = false;

            #[inline]
            fn into_raw(self) -> $ty {
                self
            }

            #[inline]
            fn raw(&self) -> &$ty {
                self
            }

            #[inline]
            fn raw_mut(&mut self) -> &mut $ty {
                self
            }
        }
    )*};
}

impl_raw_identity! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    bool, char,
}

/// Extract the primitive from `v`, or return `v` unchanged if it is not a
/// wrapper.
#[inline]
pub fn primitive_cast<V: Raw>(v: V) -> V::Value {
    v.into_raw()
}

/// Shared-reference form of [`primitive_cast`].
#[inline]
pub fn primitive_cast_ref<V: Raw>(v: &V) -> &V::Value {
    v.raw()
}

/// Exclusive-reference form of [`primitive_cast`]; the result can be
/// assigned through.
#[inline]
pub fn primitive_cast_mut<V: Raw>(v: &mut V) -> &mut V::Value {
    v.raw_mut()
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Row {}
    enum Col {}

    type RowIdx = Tagged<i64, Row>;
    type ColIdx = Tagged<i64, Col>;

    #[test]
    fn test_predicate() {
        assert!(<RowIdx as Raw>::TAGGED);
        assert!(<Tagged<f32> as Raw>::TAGGED);
        assert!(!<i64 as Raw>::TAGGED);
        assert!(!<bool as Raw>::TAGGED);
    }

    #[test]
    fn test_unwrap_and_pass_through() {
        assert_eq!(primitive_cast(RowIdx::new(7)), 7);
        assert_eq!(primitive_cast(7i64), 7);
        assert_eq!(*primitive_cast_ref(&RowIdx::new(3)), 3);
    }

    #[test]
    fn test_cast_assign_across_families() {
        // Deliberate cross-family data flow goes through the primitives.
        let mut a = RowIdx::new(2);
        let b = ColIdx::new(3);

        *primitive_cast_mut(&mut a) = primitive_cast(b);
        assert_eq!(a, RowIdx::new(3));
    }
}
