//! Error types, handles, configuration, and liveness tags for Tether.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`NodeId`] / [`ListId`] - Generational handles for arena slots
//! - [`ArrayConfig`] / [`CollectionsConfig`] - Container sizing and growth
//! - [`Tagged`] / [`LiveTag`] - Debug liveness probes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod handle;
pub mod tagged;

pub use config::{ArrayConfig, CollectionsConfig, GrowthPolicy};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use handle::{ListId, NodeId};
pub use tagged::{LiveTag, LivenessProbe, Tagged};
