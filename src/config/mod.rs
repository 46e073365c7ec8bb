//! Tag config: rule model and the hot-reloading file store

pub mod rules;
pub mod store;

pub use rules::{Policy, TagConfig, TagRule};
pub use store::ConfigStore;
