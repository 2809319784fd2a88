//! scaffold-core - Shared functionality for the scaffold tool
//!
//! Operator-facing status lines and diagnostic logging setup.

pub mod logging;
pub mod output;

pub use output::{Console, Status};
