//! Route handlers organized by resource

pub mod choices;
pub mod health;
pub mod questions;
