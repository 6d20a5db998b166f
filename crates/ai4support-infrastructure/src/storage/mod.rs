//! Low-level storage primitives.

pub mod toml_store;

pub use toml_store::AtomicTomlStore;
