//! Editing session state: the bullet store, company grouping, document
//! reconstruction, and the HTTP handlers that drive them.

pub mod grouping;
pub mod handlers;
pub mod render;
pub mod session;
pub mod store;
