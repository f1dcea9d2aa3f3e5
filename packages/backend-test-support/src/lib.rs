//! Backend test support utilities
//!
//! Shared by the survey backend's unit and integration tests: one-time
//! logging setup and assertions for the problem-details error contract.

pub mod logging;
pub mod problem_details;
