//! Growable arrays with element lifecycle hooks for Tether.
//!
//! This crate provides:
//! - [`DynamicArray`] - Contiguous array that runs construct/destruct hooks
//!   over every slot a resize adds or discards
//! - [`PointerArray`] - Nullable pointer slots searched by identity
//! - [`OwningPointerArray`] - Pointer array that destroys its pointees
//! - [`SortedOwningArray`] - Owning array kept in key order with binary search
//!
//! All growth is fallible: allocation failure surfaces as
//! [`ErrorKind::AllocationFailed`](tether_foundation::ErrorKind::AllocationFailed)
//! instead of aborting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dynamic;
pub mod hooks;
pub mod owning;
pub mod pointer;
pub mod sorted;

pub use dynamic::DynamicArray;
pub use hooks::{ConstructWith, DefaultHooks, ElementHooks};
pub use owning::OwningPointerArray;
pub use pointer::{PointerArray, PointerHooks, SlotPointer};
pub use sorted::{ByKey, KeyCompare, SortedOwningArray};
