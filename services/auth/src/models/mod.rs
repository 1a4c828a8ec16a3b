//! Authentication models

pub mod user;

pub use user::{Credentials, PublicUser, TokenGrant, User, UserId};
