//! Browser-independent interaction state.
//!
//! Everything here is plain data plus the transitions the page components
//! drive from DOM events, so it can be exercised without a browser.

pub mod modal;
pub mod scroll_lock;
pub mod sections;
pub mod tilt;
pub mod typewriter;

pub use modal::{ModalController, ModalState};
pub use scroll_lock::{ScrollLock, ScrollLockGuard, Viewport};
pub use sections::{active_section, SectionExtent, HEADER_OFFSET};
pub use tilt::{Bounds, TiltTransform};
pub use typewriter::Typewriter;
