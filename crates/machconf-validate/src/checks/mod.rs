//! Validation check modules.
//!
//! Each module performs one category of check and returns its findings in a
//! stable order.

pub(crate) mod network;
pub(crate) mod required;
