//! Record and dataset descriptor types
//!
//! Records are static data with process lifetime; optional fields are
//! explicit `Option`s and count as empty strings during matching.

use serde_json::{json, Value};

/// One curated proverb or idiom entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// The saying itself.
    pub text: &'static str,
    /// Kana reading; absent for non-Japanese entries.
    pub reading: Option<&'static str>,
    /// What the saying means, in plain prose.
    pub meaning: &'static str,
    /// Short topic tags, all lowercase.
    pub themes: &'static [&'static str],
    /// When an agent should reach for this entry.
    pub usage_hint: &'static str,
    /// Country or tradition of origin; present only for global entries.
    pub origin: Option<&'static str>,
}

impl Record {
    /// Serialize to a JSON object, keying the primary text by `text_key`
    /// (`"proverb"` or `"idiom"`). Absent optional fields are omitted.
    pub fn to_json(&self, text_key: &str) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert(text_key.to_string(), json!(self.text));
        if let Some(reading) = self.reading {
            obj.insert("reading".to_string(), json!(reading));
        }
        if let Some(origin) = self.origin {
            obj.insert("origin".to_string(), json!(origin));
        }
        obj.insert("meaning".to_string(), json!(self.meaning));
        obj.insert("themes".to_string(), json!(self.themes));
        obj.insert("usage_hint".to_string(), json!(self.usage_hint));
        Value::Object(obj)
    }
}

/// Static metadata binding a record table to its tool surface.
///
/// One generic filter runs over any dataset; the descriptor carries the
/// names that differ between them (tool name, JSON keys, description).
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    /// Tool name the dataset is exposed under.
    pub name: &'static str,
    /// JSON key for a record's primary text (`"proverb"` or `"idiom"`).
    pub text_key: &'static str,
    /// JSON key for the result list in lookup responses.
    pub items_key: &'static str,
    /// One-line tool description shown to the host LLM.
    pub description: &'static str,
    /// The records, in curated order.
    pub records: &'static [Record],
}
