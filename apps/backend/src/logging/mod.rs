//! Log hygiene helpers.

pub mod pii;

pub use pii::Redacted;
