//! Release-once handling of owned resources.
//!
//! Native media code juggles a lot of handles that have to be given back
//! exactly once: sockets, codec contexts, buffers obtained from C APIs.
//! Teardown paths often overlap, so a release may be attempted more than
//! once for the same handle.
//!
//! Each handle has a designated *cleared* value (a null pointer, `-1` for a
//! descriptor, [`None`]). Releasing it only calls the release operation
//! when the handle differs from the cleared value, and stores the cleared
//! value afterwards. Repeated releases are therefore no-ops.
//!
//! [`safe_reset`] applies this to a handle stored anywhere, while
//! [`ResetGuard`] bundles handle, cleared value and release operation and
//! also releases on drop.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod guard;
pub use guard::{ReleaseOutcome, ResetGuard};

mod reset;
pub use reset::*;
