// Adapters layer: concrete implementations of the domain ports.

pub mod local_store;

pub use local_store::{ContentPaths, LocalContentStore};
