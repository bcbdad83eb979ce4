//! Dataset lookup tool implementation
//!
//! Wraps the catalog filter in the tool lifecycle: one instance per
//! dataset, each advertising a single optional `theme` string parameter.

use crate::catalog::{self, filter_records, Dataset, LookupResult};
use crate::lookup_span;
use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

/// Theme-filtered lookup over one static proverb/idiom dataset.
pub struct DatasetLookupTool {
    dataset: &'static Dataset,
}

impl DatasetLookupTool {
    /// Lookup over the Japanese proverb dataset.
    pub fn japanese_proverbs() -> Self {
        Self {
            dataset: &catalog::JAPANESE_PROVERB_SET,
        }
    }

    /// Lookup over the global proverb dataset.
    pub fn global_proverbs() -> Self {
        Self {
            dataset: &catalog::GLOBAL_PROVERB_SET,
        }
    }

    /// Lookup over the four-character idiom dataset.
    pub fn yojijukugo() -> Self {
        Self {
            dataset: &catalog::YOJIJUKUGO_SET,
        }
    }

    /// Extract the theme argument; a missing value means "no filter" (pure function)
    fn extract_theme(parameters: &Value) -> &str {
        parameters
            .get("theme")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    /// Format the lookup response (pure function)
    fn format_lookup_response(dataset: &Dataset, result: &LookupResult<'_>) -> Value {
        let items: Vec<Value> = result
            .items
            .iter()
            .map(|record| record.to_json(dataset.text_key))
            .collect();

        let mut response = serde_json::Map::new();
        response.insert(dataset.items_key.to_string(), Value::Array(items));
        response.insert("count".to_string(), json!(result.count));
        Value::Object(response)
    }
}

#[async_trait]
impl Tool for DatasetLookupTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: self.dataset.name.to_string(),
            description: self.dataset.description.to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "theme": {
                        "type": "string",
                        "description": "Free-form text describing the situation; matched against each entry's text, reading, meaning, themes, origin, and usage hint",
                        "default": ""
                    }
                },
                "required": [],
                "additionalProperties": false
            }),
        }
    }

    async fn initialize(&mut self, _config: Option<&Value>) -> Result<(), ToolError> {
        // Datasets are compiled in; nothing to set up
        Ok(())
    }

    async fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let _span = lookup_span!(tool = self.dataset.name).entered();

        let theme = Self::extract_theme(parameters);
        let result = filter_records(self.dataset.records, theme);

        debug!(
            tool = self.dataset.name,
            theme,
            count = result.count,
            "lookup complete"
        );

        Ok(Self::format_lookup_response(self.dataset, &result))
    }
}
