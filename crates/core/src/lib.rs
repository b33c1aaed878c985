//! Core types and configuration for the tickbar pipeline.
//!
//! This crate provides shared types used across all other crates:
//! - Tick and bar data types
//! - Pipeline configuration
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{PipelineConfig, SourceConfig};
pub use error::{Error, Result};
pub use types::*;
