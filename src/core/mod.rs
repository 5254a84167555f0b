//! Core library components.

pub mod constants;
pub mod gitignore;
pub mod selector;
pub mod session;
pub mod vault;
