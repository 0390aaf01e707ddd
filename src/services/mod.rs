pub mod candidates;
pub mod matcher;
