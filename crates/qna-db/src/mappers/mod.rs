//! Entity to model mappers
//!
//! This module provides conversions between domain entities (qna-core) and database models.
//! `From<Model> for Entity` converts database rows to domain objects.

mod answer;
mod notification;
mod question;
mod user;
mod vote;
