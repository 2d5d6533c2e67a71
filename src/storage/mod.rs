//! Durable client-side persistence.
//!
//! Everything goes through an injected [`KeyValueStore`]; the stores here
//! are the only writers of their keys and keep an in-memory copy in
//! lockstep with storage after every call.

mod kv;
mod progress;
mod views;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use progress::{ProgressStore, COMPLETED_PROBLEMS_KEY};
pub use views::{Rotation, SavedView, ViewStore, SAVED_VIEWS_KEY};
