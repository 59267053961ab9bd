//! Tether - Intrusive lists and hook-driven arrays
//!
//! This crate re-exports all layers of the Tether system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tether_list       - Arena-backed intrusive lists, removal observers
//!          tether_array      - Dynamic, pointer, owning, and sorted arrays
//! Layer 0: tether_foundation - Core types (NodeId, ListId, Error, config, liveness tags)
//! ```

pub use tether_array as array;
pub use tether_foundation as foundation;
pub use tether_list as list;
