//! Data models for extracted order listings and configuration.

pub mod config;
pub mod order;
