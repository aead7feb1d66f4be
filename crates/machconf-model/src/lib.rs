#![deny(unsafe_code)]

//! Data model for the machine configuration sync engine.
//!
//! Two representations of the same configuration exist side by side: the
//! flat, loosely-typed [`MachineConfig`] the host container owns, and the
//! strongly-typed [`ServerConfiguration`] the editing surface works on.
//! The [`convert`] module holds the primitive value conversions between
//! them.

pub mod convert;
pub mod external;
pub mod internal;
pub mod validation;

pub use external::{IdValue, MachineConfig};
pub use internal::ServerConfiguration;
pub use validation::ValidationError;
