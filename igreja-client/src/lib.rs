//! Client core of the church member app.
//!
//! - [`auth`]: token decoding and login
//! - [`backend`]: the REST API behind a trait, with a `reqwest` implementation
//! - [`session`] and [`navigation`]: the session travels inside each route
//! - [`screens`]: per-screen controllers built on the `reports` crate

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod helpers;
pub mod navigation;
pub mod screens;
pub mod session;

#[cfg(test)]
mod test_support;

pub use backend::{ChurchBackend, HttpBackend};
pub use error::{ClientError, Result};
pub use navigation::{Navigator, Route};
pub use session::Session;
