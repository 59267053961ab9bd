//! Arena-backed intrusive doubly-linked lists for Tether.
//!
//! This crate provides:
//! - [`ListArena`] - Node and list storage with O(1) self-removing nodes
//! - [`RemovalObserver`] - Hook fired whenever a node leaves a list
//!
//! Nodes refer to their owning list by [`ListId`], a generational handle
//! validated on every use, so destroying a list before its nodes never
//! leaves a dangling back-reference.
//!
//! [`ListId`]: tether_foundation::ListId

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod list;
pub mod observer;
mod slots;

pub use list::{Iter, ListArena};
pub use observer::{NoopObserver, RemovalLog, RemovalObserver};
