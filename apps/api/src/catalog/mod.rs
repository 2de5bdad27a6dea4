//! Replacement catalog: the user-curated ordered list of candidate bullet
//! texts, persisted externally with a built-in default fallback.

pub mod defaults;
pub mod handlers;
pub mod store;
