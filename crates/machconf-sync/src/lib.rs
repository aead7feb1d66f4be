#![deny(unsafe_code)]

//! Bidirectional synchronization between the host container's flat machine
//! configuration and the typed working configuration behind the editing
//! surface.
//!
//! The engine owns the working configuration, converts in both directions,
//! validates after every mutation, and propagates outward only while the
//! working configuration is valid. Inbound sync always lands, even when the
//! incoming value is invalid.

mod effects;
mod engine;
mod mapping;

pub use engine::{SyncEngine, SyncState};
