//! Curated proverb/idiom datasets and the theme filter over them
//!
//! The catalog holds the fixed record tables compiled into the binary and
//! the pure filtering logic the lookup tools are built on. Nothing in this
//! module performs I/O or mutates state after startup.

pub mod data;
pub mod filter;
pub mod record;
pub mod theme;

pub use data::{ALL_DATASETS, GLOBAL_PROVERB_SET, JAPANESE_PROVERB_SET, YOJIJUKUGO_SET};
pub use filter::{filter_records, record_matches, LookupResult};
pub use record::{Dataset, Record};
pub use theme::{normalize_theme, ThemeQuery};
