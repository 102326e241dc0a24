//! Strong-typedef arithmetic wrappers.
//!
//! [`Tagged<T, M>`] wraps a single numeric primitive `T` and behaves
//! arithmetically like it, while staying a distinct type at compile time.
//! The optional marker `M` partitions wrappers over the same primitive into
//! families that cannot be mixed: meters and seconds can both be `i64`
//! underneath without ever assigning one to the other by accident.
//!
//! The rules are deliberately strict:
//!
//! - arithmetic and comparison are defined only between instances of the
//!   same instantiation, and delegate to the primitive verbatim;
//! - every wrapper/primitive conversion is an explicit call
//!   ([`Tagged::new`], [`Tagged::into_inner`], [`Tagged::get`]); there is no
//!   `Deref` and no implicit extraction;
//! - crossing tag families takes an explicit [`Tagged::retag`];
//! - negating a wrapper over an unsigned primitive does not compile.
//!
//! [`primitive_cast`] bridges generic code that handles "maybe-wrapped"
//! values: it extracts the primitive from a wrapper and passes bare values
//! through unchanged, dispatched entirely at compile time via [`Raw`].
//!
//! # Example
//!
//! ```
//! use tagged_arith::{Tagged, primitive_cast};
//!
//! enum Meters {}
//! enum Seconds {}
//!
//! type Distance = Tagged<i64, Meters>;
//! type Elapsed = Tagged<i64, Seconds>;
//!
//! let leg = Distance::new(120) + Distance::new(30);
//! assert_eq!(leg.value(), 150);
//!
//! let t = Elapsed::new(5);
//! // let nonsense = leg + t; // distinct types: does not compile
//! assert_eq!(leg.value() / t.value(), 30);
//!
//! // Generic code treats wrapped and bare values uniformly.
//! assert_eq!(primitive_cast(leg), 150);
//! assert_eq!(primitive_cast(150i64), 150);
//! ```
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
mod display;
mod primitive;
mod raw;
mod tagged;

pub use error::ParseError;
pub use primitive::{FloatPrimitive, Primitive};
pub use raw::{Raw, primitive_cast, primitive_cast_mut, primitive_cast_ref};
pub use tagged::Tagged;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{Raw, Tagged, primitive_cast, primitive_cast_mut, primitive_cast_ref};
}
