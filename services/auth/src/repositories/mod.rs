//! Credential store

pub mod user;
