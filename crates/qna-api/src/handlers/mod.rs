//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod answers;
pub mod auth;
pub mod health;
pub mod notifications;
pub mod questions;
pub mod users;
