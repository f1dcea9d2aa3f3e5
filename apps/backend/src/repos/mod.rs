//! Repository functions for the domain layer.

pub mod answers;
pub mod surveys;
