//! Prompts, response schemas and `generateContent` wire types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::model::PhilosopherSummary;

const LIST_SYSTEM_INSTRUCTION: &str = "You are a helpful philosophy expert. Return clean JSON.";

const DETAIL_SYSTEM_INSTRUCTION: &str =
    "You are an expert biographer and philosopher. Provide accurate, insightful, and engaging content.";

/// A prompt paired with the schema its answer must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub prompt: String,
    pub system_instruction: &'static str,
    pub schema: Value,
}

impl ContentRequest {
    /// Request for `count` summaries.
    pub fn summary_list(count: u32) -> Self {
        Self {
            prompt: format!(
                "Generate a list of {} distinct, famous philosophers from diverse eras and cultures (e.g., Greek, Eastern, Modern, Existentialist).",
                count
            ),
            system_instruction: LIST_SYSTEM_INSTRUCTION,
            schema: summary_list_schema(),
        }
    }

    /// Request for the detail fields of `summary`.
    pub fn detail(summary: &PhilosopherSummary) -> Self {
        Self {
            prompt: format!(
                "Provide detailed information about the philosopher {} ({}).",
                summary.name, summary.era
            ),
            system_instruction: DETAIL_SYSTEM_INSTRUCTION,
            schema: detail_schema(),
        }
    }

    /// Build the `generateContent` body.
    pub fn to_body(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(self.prompt.clone()),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(self.system_instruction.to_string()),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: self.schema.clone(),
            },
        }
    }
}

/// Object with a required `philosophers` array of five-field summaries.
pub fn summary_list_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "philosophers": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "tagline": { "type": "STRING" },
                        "era": { "type": "STRING" },
                        "school": { "type": "STRING" }
                    },
                    "required": ["id", "name", "tagline", "era", "school"]
                }
            }
        },
        "required": ["philosophers"]
    })
}

/// Object with required bio, famousWorks, quotes and coreIdeas.
pub fn detail_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "bio": {
                "type": "STRING",
                "description": "A comprehensive 2-paragraph biography."
            },
            "famousWorks": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3-5 most important books or essays."
            },
            "quotes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 4-6 most famous quotes."
            },
            "coreIdeas": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3 key philosophical concepts they are known for."
            }
        },
        "required": ["bio", "famousWorks", "quotes", "coreIdeas"]
    })
}

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// `generateContent` response body. Only the fields we read.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    ///
    /// `None` when there is no candidate or its text is blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Envelope around the list answer.
#[derive(Debug, Deserialize)]
pub struct SummaryList {
    pub philosophers: Vec<PhilosopherSummary>,
}
