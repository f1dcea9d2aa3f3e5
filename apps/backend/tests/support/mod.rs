#![allow(dead_code)]

pub mod app_builder;
pub mod state;

pub use app_builder::{auth_app, survey_app};
pub use state::{
    bearer, test_auth_state, test_security, test_survey_state, token_for, TEST_SECRET,
};
