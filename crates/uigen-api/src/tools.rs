//! Tool descriptors and the text envelope every tool call returns
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const GENERATE_COMPONENT: &str = "generate-component";
pub const LIST_COMPONENTS: &str = "list-components";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// `{content: [{type: "text", text}], isError}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        ToolResult {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        ToolResult {
            is_error: true,
            ..Self::text(text)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateArgs {
    pub description: String,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub styling: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListArgs {
    #[serde(default)]
    pub category: Option<String>,
}

pub fn descriptors() -> Value {
    json!({
        "tools": [
            {
                "name": GENERATE_COMPONENT,
                "description": "Generate UI components from natural language descriptions",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "description": {
                            "type": "string",
                            "description": "Natural language description of the component to generate"
                        },
                        "framework": {
                            "type": "string",
                            "enum": ["react", "vue", "svelte"],
                            "description": "Target framework (optional, will be auto-detected)"
                        },
                        "styling": {
                            "type": "string",
                            "enum": ["tailwind", "css", "styled-components"],
                            "description": "Styling system (optional, defaults to tailwind)"
                        }
                    },
                    "required": ["description"]
                }
            },
            {
                "name": LIST_COMPONENTS,
                "description": "List all available component types and their variants",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "enum": ["core", "composite", "layout"],
                            "description": "Filter by component category (optional)"
                        }
                    }
                }
            }
        ]
    })
}
