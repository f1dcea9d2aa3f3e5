//! Domain services composing the repositories.

pub mod submissions;
pub mod surveys;
