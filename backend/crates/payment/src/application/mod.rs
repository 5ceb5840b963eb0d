//! Application Layer - Use Cases

pub mod config;
pub mod create_order;
