//! The strong-typedef wrapper itself.
//!
//! [`Tagged<T, M>`] embeds a single primitive `T` and carries a nominal
//! marker type `M` that exists only at the type level. Two instantiations
//! interoperate (assignment, comparison, arithmetic) only when both `T` and
//! `M` match exactly; every wrapper-to-primitive conversion is an explicit
//! call. The marker is never stored or instantiated.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::primitive::{FloatPrimitive, Primitive};

/// A numeric value that is a distinct type at compile time.
///
/// `Tagged<i64, MetersTag>` and `Tagged<i64, SecondsTag>` behave identically
/// at runtime but cannot be mixed, assigned to each other, or compared.
/// Arithmetic is defined only between instances of the same instantiation
/// and delegates to the primitive's operators verbatim, including their
/// faults (integer division by zero, debug-mode overflow, float NaN quirks).
///
/// The marker parameter is wrapped in `PhantomData<fn() -> M>` so that the
/// marker never affects variance, auto traits, or drop behavior.
///
/// # Example
///
/// ```
/// use tagged_arith::Tagged;
///
/// enum Meters {}
/// type Distance = Tagged<i64, Meters>;
///
/// let total = Distance::new(120) + Distance::new(30);
/// assert_eq!(total.value(), 150);
/// ```
#[repr(transparent)]
pub struct Tagged<T, M = ()> {
    value: T,
    _tag: PhantomData<fn() -> M>,
}

impl<T, M> Tagged<T, M> {
    /// Wrap a primitive value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Consume the wrapper and return the primitive.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Borrow the embedded primitive.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Exclusively borrow the embedded primitive.
    ///
    /// This is the canonical path generic code uses to write through the
    /// wrapper, e.g. `*x.get_mut() = 7`.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Copy the embedded primitive out.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Assign from a bare primitive.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Move the value into a different tag family.
    ///
    /// The only sanctioned cross-tag conversion; always an explicit call,
    /// never part of operator or coercion resolution.
    #[inline]
    pub fn retag<N>(self) -> Tagged<T, N> {
        Tagged::new(self.value)
    }

    /// Transform the embedded primitive, keeping the tag.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tagged<U, M> {
        Tagged::new(f(self.value))
    }
}

// Limit constants, forwarded from the primitive (the numeric_limits
// integration).
impl<T: Primitive, M> Tagged<T, M> {
    pub const ZERO: Self = Self::new(T::ZERO);
    pub const ONE: Self = Self::new(T::ONE);
    pub const MIN: Self = Self::new(T::MIN);
    pub const MAX: Self = Self::new(T::MAX);

    /// Increment in place (prefix `++` analogue).
    #[inline]
    pub fn inc(&mut self)
    where
        T: AddAssign,
    {
        self.value += T::ONE;
    }

    /// Decrement in place (prefix `--` analogue).
    #[inline]
    pub fn dec(&mut self)
    where
        T: SubAssign,
    {
        self.value -= T::ONE;
    }

    /// Increment and return the value held *before* the increment
    /// (postfix `++` analogue).
    #[inline]
    pub fn post_inc(&mut self) -> Self
    where
        T: AddAssign,
    {
        let prev = *self;
        self.inc();
        prev
    }

    /// Decrement and return the value held *before* the decrement
    /// (postfix `--` analogue).
    #[inline]
    pub fn post_dec(&mut self) -> Self
    where
        T: SubAssign,
    {
        let prev = *self;
        self.dec();
        prev
    }
}

// Float-only limit constants.
impl<T: FloatPrimitive, M> Tagged<T, M> {
    pub const EPSILON: Self = Self::new(T::EPSILON);
    pub const INFINITY: Self = Self::new(T::INFINITY);
    pub const NEG_INFINITY: Self = Self::new(T::NEG_INFINITY);
    pub const NAN: Self = Self::new(T::NAN);
}

// Derived-equivalent impls, written out by hand so the bounds land on `T`
// alone and never on the marker.
impl<T: Clone, M> Clone for Tagged<T, M> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, M> Copy for Tagged<T, M> {}

impl<T: Default, M> Default for Tagged<T, M> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug, M> fmt::Debug for Tagged<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tagged").field(&self.value).finish()
    }
}

impl<T: PartialEq, M> PartialEq for Tagged<T, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, M> Eq for Tagged<T, M> {}

impl<T: PartialOrd, M> PartialOrd for Tagged<T, M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, M> Ord for Tagged<T, M> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, M> Hash for Tagged<T, M> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, M> From<T> for Tagged<T, M> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// Arithmetic operators: same instantiation on both sides only, delegating to
// the primitive.
impl<T: Add<Output = T>, M> Add for Tagged<T, M> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}

impl<T: Sub<Output = T>, M> Sub for Tagged<T, M> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value)
    }
}

impl<T: Mul<Output = T>, M> Mul for Tagged<T, M> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.value * rhs.value)
    }
}

impl<T: Div<Output = T>, M> Div for Tagged<T, M> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.value / rhs.value)
    }
}

// Unsigned primitives do not implement `Neg`, so negating an unsigned
// wrapper is a type error rather than a runtime fault.
impl<T: Neg<Output = T>, M> Neg for Tagged<T, M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}

// Compound assignment.
impl<T: AddAssign, M> AddAssign for Tagged<T, M> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<T: SubAssign, M> SubAssign for Tagged<T, M> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<T: MulAssign, M> MulAssign for Tagged<T, M> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.value *= rhs.value;
    }
}

impl<T: DivAssign, M> DivAssign for Tagged<T, M> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.value /= rhs.value;
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, M> serde::Serialize for Tagged<T, M> {
    #[inline]
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>, M> serde::Deserialize<'de> for Tagged<T, M> {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

// The wrapper never weakens its primitive's surface.
static_assertions::assert_impl_all!(Tagged<i64>: Copy, Send, Sync, Neg);
static_assertions::assert_not_impl_any!(Tagged<u64>: Neg);
