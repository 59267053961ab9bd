//! Debug liveness tags.
//!
//! A [`LiveTag`] embedded in an object stamps a shared marker cell with
//! [`LIVE_MARKER`] and overwrites it with [`DEAD_MARKER`] when dropped. A
//! [`LivenessProbe`] keeps the cell (never the object) alive, so asking
//! whether the object still exists is safe at any time.
//!
//! Without `debug_assertions` every probe answers `true`.

use std::cell::Cell;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Marker stamped while the tagged object is alive.
pub const LIVE_MARKER: u32 = 0x4C49_5645;

/// Marker stamped once the tagged object has been dropped.
pub const DEAD_MARKER: u32 = 0xDEAD_DEAD;

fn check(marker: &Cell<u32>) -> bool {
    if cfg!(debug_assertions) {
        marker.get() == LIVE_MARKER
    } else {
        true
    }
}

/// Liveness marker to embed in any object.
pub struct LiveTag {
    marker: Rc<Cell<u32>>,
}

impl LiveTag {
    /// Creates a tag stamped live.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: Rc::new(Cell::new(LIVE_MARKER)),
        }
    }

    /// Returns a probe that can outlive this tag.
    #[must_use]
    pub fn probe(&self) -> LivenessProbe {
        LivenessProbe {
            marker: Rc::clone(&self.marker),
        }
    }

    /// Returns true while the tag has not been dropped.
    #[must_use]
    pub fn is_live(&self) -> bool {
        check(&self.marker)
    }
}

impl Default for LiveTag {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LiveTag {
    fn drop(&mut self) {
        self.marker.set(DEAD_MARKER);
    }
}

impl fmt::Debug for LiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiveTag({:#010x})", self.marker.get())
    }
}

/// Read-only view of a [`LiveTag`]'s marker.
#[derive(Clone)]
pub struct LivenessProbe {
    marker: Rc<Cell<u32>>,
}

impl LivenessProbe {
    /// Returns true while the probed object is alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        check(&self.marker)
    }

    /// Returns the raw marker value.
    #[must_use]
    pub fn marker(&self) -> u32 {
        self.marker.get()
    }
}

impl fmt::Debug for LivenessProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LivenessProbe({:#010x})", self.marker.get())
    }
}

/// A value paired with its own [`LiveTag`].
///
/// Derefs to the wrapped value.
pub struct Tagged<T> {
    value: T,
    tag: LiveTag,
}

impl<T> Tagged<T> {
    /// Wraps `value` and stamps it live.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            tag: LiveTag::new(),
        }
    }

    /// Returns a probe for this object.
    #[must_use]
    pub fn probe(&self) -> LivenessProbe {
        self.tag.probe()
    }

    /// Returns true while this object is alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.tag.is_live()
    }

    /// Unwraps the value. Outstanding probes report the object dead.
    pub fn into_inner(self) -> T {
        let Self { value, tag } = self;
        drop(tag);
        value
    }
}

impl<T> Deref for Tagged<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Tagged<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagged")
            .field("value", &self.value)
            .field("tag", &self.tag)
            .finish()
    }
}
