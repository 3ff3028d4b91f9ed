//! Shared result shape, capability traits, errors and random source.
//!
//! Both code families report validation through [`ValidationResult`] and
//! expose their engines through the [`Validator`] / [`Generator`] traits.
//! Nothing in here knows about EIC or EAN specifics.

mod bulk;
#[cfg(any(feature = "eic", feature = "ean"))]
mod draw;
mod error;
#[cfg(any(feature = "eic", feature = "ean"))]
pub(crate) mod random;
mod result;
mod traits;

pub use bulk::*;
#[cfg(any(feature = "eic", feature = "ean"))]
pub(crate) use draw::draw_unique;
pub use error::*;
pub use result::*;
pub use traits::*;
