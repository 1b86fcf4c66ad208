//! State Management
//!
//! The dashboard's single state slot and its dispatcher.

pub mod global;

pub use global::{provide_global_state, use_global_state};
