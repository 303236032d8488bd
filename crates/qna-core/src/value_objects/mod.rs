//! Value objects - immutable domain primitives

mod snowflake;
mod vote_type;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use vote_type::VoteType;
