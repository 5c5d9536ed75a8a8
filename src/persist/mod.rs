//! Session persistence.
//!
//! The board loads one blob at startup and writes it back after each
//! mutation through a [`SessionStore`]. Storage is best effort: unreadable
//! blobs fall back to the initial session and failed writes leave the
//! in-memory state untouched.

mod codec;
mod store;

pub use codec::{decode, encode, SESSION_VERSION};
pub use store::{FileStore, MemoryStore, SessionStore};
