//! Kotowaza - Curated proverb and idiom lookup tools
//!
//! A library of small lookup tools that return curated proverb/idiom records,
//! optionally filtered by a free-text theme, for embedding into a larger
//! conversational agent framework.
//!
//! # Overview
//!
//! This crate provides:
//! - Three fixed datasets: Japanese proverbs, global proverbs, and
//!   four-character idioms (四字熟語)
//! - A theme-based keyword filter over those datasets
//! - A tool system with JSON schema validation for exposing each dataset
//!   as a callable agent tool
//! - TOML configuration for selecting which tools a host enables
//!
//! # Quick Start
//!
//! ```rust
//! use kotowaza::catalog::{self, filter_records};
//!
//! // Filter the Japanese proverb dataset by theme
//! let result = filter_records(catalog::JAPANESE_PROVERB_SET.records, "prioritization");
//! assert_eq!(result.count, 1);
//! assert_eq!(result.items[0].text, "二兎を追う者は一兎をも得ず");
//!
//! // An empty theme returns the whole dataset in original order
//! let all = filter_records(catalog::JAPANESE_PROVERB_SET.records, "");
//! assert_eq!(all.count, catalog::JAPANESE_PROVERB_SET.records.len());
//!
//! // A theme nothing matches falls back to the whole dataset too
//! let fallback = filter_records(catalog::JAPANESE_PROVERB_SET.records, "zzz_no_such_tag");
//! assert_eq!(fallback.count, all.count);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod observability;
pub mod tools;

pub use catalog::{filter_records, Dataset, LookupResult, Record};
pub use config::{ConfigError, ToolConfig, ToolkitConfig};
pub use error::{Error, Result};
pub use tools::{Tool, ToolDescription, ToolError, ToolSystem};
