//! Adapters for external dependencies.

pub mod answers_sea;
pub mod questions_sea;
pub mod surveys_sea;
