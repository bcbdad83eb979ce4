//! Tool system integration tests
//!
//! Tests focus on BEHAVIOR of tool registration, schema validation, and
//! end-to-end lookup execution through the registry.

use kotowaza::config::{ToolConfig, ToolkitConfig};
use kotowaza::tools::{ToolError, ToolSystem};
use serde_json::json;
use std::collections::HashMap;

fn builtin_configs(names: &[&str]) -> HashMap<String, ToolConfig> {
    names
        .iter()
        .map(|name| (name.to_string(), ToolConfig::Simple("builtin".to_string())))
        .collect()
}

#[tokio::test]
async fn test_tool_initialization_with_valid_config() {
    let mut tool_system = ToolSystem::new();
    let tool_configs = builtin_configs(&["japanese_proverbs", "global_proverbs", "yojijukugo"]);

    let result = tool_system.initialize(&tool_configs).await;

    assert!(result.is_ok());
    assert_eq!(tool_system.list_tools().len(), 3);
    assert!(tool_system
        .list_tools()
        .contains(&"japanese_proverbs".to_string()));
    assert!(tool_system.list_tools().contains(&"yojijukugo".to_string()));
}

#[tokio::test]
async fn test_tool_initialization_with_invalid_implementation() {
    let mut tool_system = ToolSystem::new();
    let mut tool_configs = HashMap::new();

    tool_configs.insert(
        "japanese_proverbs".to_string(),
        ToolConfig::Simple("nonexistent_impl".to_string()),
    );

    let result = tool_system.initialize(&tool_configs).await;

    assert!(matches!(result, Err(ToolError::UnknownImplementation(_))));
}

#[tokio::test]
async fn test_tool_initialization_with_missing_builtin() {
    let mut tool_system = ToolSystem::new();
    let tool_configs = builtin_configs(&["nonexistent_builtin"]);

    let result = tool_system.initialize(&tool_configs).await;

    assert!(matches!(result, Err(ToolError::UnknownTool(_))));
}

#[tokio::test]
async fn test_tool_initialization_with_complex_config() {
    let mut tool_system = ToolSystem::new();
    let mut tool_configs = HashMap::new();

    let mut config_map = HashMap::new();
    config_map.insert("unused_knob".to_string(), json!(true));

    tool_configs.insert(
        "global_proverbs".to_string(),
        ToolConfig::Complex {
            implementation: "builtin".to_string(),
            config: config_map,
        },
    );

    let result = tool_system.initialize(&tool_configs).await;

    assert!(result.is_ok());
    assert_eq!(tool_system.list_tools().len(), 1);
}

#[tokio::test]
async fn test_describe_tool_reports_theme_parameter() {
    let mut tool_system = ToolSystem::new();
    tool_system
        .initialize(&builtin_configs(&["yojijukugo"]))
        .await
        .unwrap();

    let description = tool_system.describe_tool("yojijukugo").unwrap();

    assert_eq!(description.name, "yojijukugo");
    assert_eq!(
        description.parameters["properties"]["theme"]["type"],
        "string"
    );
    assert!(tool_system.describe_tool("unknown").is_none());
}

#[tokio::test]
async fn test_execute_with_theme_parameter() {
    let mut tool_system = ToolSystem::new();
    tool_system
        .initialize(&builtin_configs(&["japanese_proverbs"]))
        .await
        .unwrap();

    let response = tool_system
        .execute_tool("japanese_proverbs", &json!({"theme": "prioritization"}))
        .await
        .unwrap();

    assert_eq!(response["count"], 1);
    assert_eq!(
        response["proverbs"][0]["proverb"],
        "二兎を追う者は一兎をも得ず"
    );
    assert_eq!(response["proverbs"][0]["themes"][0], "prioritization");
}

#[tokio::test]
async fn test_execute_without_parameters_returns_everything() {
    let mut tool_system = ToolSystem::new();
    tool_system
        .initialize(&builtin_configs(&["global_proverbs"]))
        .await
        .unwrap();

    let response = tool_system
        .execute_tool("global_proverbs", &json!({}))
        .await
        .unwrap();

    assert_eq!(response["count"], 18);
    assert_eq!(response["proverbs"].as_array().unwrap().len(), 18);
}

#[tokio::test]
async fn test_schema_rejects_non_string_theme() {
    let mut tool_system = ToolSystem::new();
    tool_system
        .initialize(&builtin_configs(&["japanese_proverbs"]))
        .await
        .unwrap();

    let result = tool_system
        .execute_tool("japanese_proverbs", &json!({"theme": 42}))
        .await;

    assert!(matches!(result, Err(ToolError::ValidationError(_))));
}

#[tokio::test]
async fn test_schema_rejects_unknown_parameters() {
    let mut tool_system = ToolSystem::new();
    tool_system
        .initialize(&builtin_configs(&["japanese_proverbs"]))
        .await
        .unwrap();

    let result = tool_system
        .execute_tool("japanese_proverbs", &json!({"query": "career"}))
        .await;

    assert!(matches!(result, Err(ToolError::ValidationError(_))));
}

#[tokio::test]
async fn test_from_config_builds_working_system() {
    let config: ToolkitConfig = toml::from_str(
        r#"
[tools]
japanese_proverbs = "builtin"
yojijukugo = { impl = "builtin" }
"#,
    )
    .unwrap();

    let tool_system = ToolSystem::from_config(&config).await.unwrap();

    assert_eq!(tool_system.list_tools().len(), 2);

    let response = tool_system
        .execute_tool("yojijukugo", &json!({"theme": "efficiency"}))
        .await
        .unwrap();

    assert_eq!(response["count"], 1);
    assert_eq!(response["idioms"][0]["idiom"], "一石二鳥");
}

#[tokio::test]
async fn test_from_config_propagates_tool_errors() {
    let config: ToolkitConfig = toml::from_str(
        r#"
[tools]
martian_proverbs = "builtin"
"#,
    )
    .unwrap();

    let result = ToolSystem::from_config(&config).await;

    assert!(matches!(
        result,
        Err(kotowaza::Error::Tool(ToolError::UnknownTool(_)))
    ));
}

#[tokio::test]
async fn test_shutdown_completes() {
    let mut tool_system = ToolSystem::new();
    tool_system
        .initialize(&builtin_configs(&[
            "japanese_proverbs",
            "global_proverbs",
            "yojijukugo",
        ]))
        .await
        .unwrap();

    assert!(tool_system.shutdown().await.is_ok());
}
