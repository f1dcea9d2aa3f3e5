//! Credential and token authority, plus the token validators the survey
//! service plugs in.

pub mod authority;
pub mod bearer;
pub mod claims;
pub mod credentials;
pub mod jwt;
pub mod password;
pub mod remote;
pub mod validator;
