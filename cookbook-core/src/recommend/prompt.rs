//! Prompt construction and reply parsing for AI recommendations.

use serde::Serialize;
use serde_json::{Map, Value};

use super::Recommendation;
use crate::llm::{ChatMessage, CompletionRequest, LlmError};
use crate::recipe::{Recipe, RecipeId};

/// At most this many recipes are sent to the provider.
pub const MAX_CONTEXT_RECIPES: usize = 25;

/// Output budget: room for a short reason and nothing more.
pub const MAX_OUTPUT_TOKENS: u32 = 200;

pub const SYSTEM_PROMPT: &str = "You are a helpful cooking assistant. \
Pick ONE best recipe to recommend from the provided list. \
Return strict JSON with keys: recommended_id (int), title (str), reason (str).";

#[derive(Debug, Serialize)]
struct ContextRecipe<'a> {
    id: RecipeId,
    title: &'a str,
    description: Option<&'a str>,
}

/// Render the user payload: the first [`MAX_CONTEXT_RECIPES`] recipes as JSON.
pub fn render_context(recipes: &[Recipe]) -> Result<String, LlmError> {
    let context: Vec<ContextRecipe<'_>> = recipes
        .iter()
        .take(MAX_CONTEXT_RECIPES)
        .map(|r| ContextRecipe {
            id: r.id,
            title: &r.title,
            description: r.description.as_deref(),
        })
        .collect();

    let json = serde_json::to_string(&context)
        .map_err(|e| LlmError::ParseError(format!("Failed to serialize recipes: {}", e)))?;

    Ok(format!("Recipes:\n{}", json))
}

pub fn build_request(recipes: &[Recipe]) -> Result<CompletionRequest, LlmError> {
    Ok(CompletionRequest {
        system: Some(SYSTEM_PROMPT.to_string()),
        messages: vec![ChatMessage::user(render_context(recipes)?)],
        max_tokens: MAX_OUTPUT_TOKENS,
    })
}

/// Read `recommended_id`: an integer, an integral float, or a numeric string.
fn coerce_id(value: &Value) -> Option<RecipeId> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as RecipeId)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a text field. Scalars other than strings are rendered as text;
/// null, arrays and objects are rejected.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value, LlmError> {
    object
        .get(key)
        .ok_or_else(|| LlmError::ParseError(format!("Missing {} in recommendation", key)))
}

/// Parse the provider's reply into a recommendation.
///
/// The JSON object may be wrapped in prose or a code fence; the outermost
/// `{...}` span is used. The returned id is not checked against the
/// recipes that were sent.
pub fn parse_recommendation(text: &str) -> Result<Recommendation, LlmError> {
    let start = text.find('{');
    let end = text.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(LlmError::ParseError(
                "No JSON object in response".to_string(),
            ))
        }
    };

    let object: Map<String, Value> = serde_json::from_str(json)
        .map_err(|e| LlmError::ParseError(format!("Invalid recommendation JSON: {}", e)))?;

    let raw_id = field(&object, "recommended_id")?;
    let id = coerce_id(raw_id).ok_or_else(|| {
        LlmError::ParseError(format!("recommended_id is not an integer: {}", raw_id))
    })?;

    let title = field(&object, "title")?;
    let title = coerce_text(title)
        .ok_or_else(|| LlmError::ParseError(format!("title is not text: {}", title)))?;

    let reason = field(&object, "reason")?;
    let reason = coerce_text(reason)
        .ok_or_else(|| LlmError::ParseError(format!("reason is not text: {}", reason)))?;

    Ok(Recommendation {
        recommended_id: Some(id),
        title,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn recipe(id: RecipeId, title: &str, description: Option<&str>) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: description.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_context() {
        let payload = render_context(&[
            recipe(2, "Pizza", Some("Cheesy")),
            recipe(1, "Soup", None),
        ])
        .unwrap();

        assert!(payload.starts_with("Recipes:\n"));
        let json: serde_json::Value = serde_json::from_str(&payload["Recipes:\n".len()..]).unwrap();
        assert_eq!(json[0]["id"], 2);
        assert_eq!(json[0]["title"], "Pizza");
        assert_eq!(json[0]["description"], "Cheesy");
        assert!(json[1]["description"].is_null());
    }

    #[test]
    fn test_render_context_is_bounded() {
        let many: Vec<Recipe> = (0..40)
            .map(|i| recipe(i, &format!("Recipe {}", i), None))
            .collect();
        let payload = render_context(&many).unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload["Recipes:\n".len()..]).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), MAX_CONTEXT_RECIPES);
        assert_eq!(items[0]["id"], 0);
        assert_eq!(items[24]["id"], 24);
    }

    #[test]
    fn test_build_request() {
        let request = build_request(&[recipe(1, "Soup", None)]).unwrap();
        assert_eq!(request.system.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(request.max_tokens, MAX_OUTPUT_TOKENS);
        assert_eq!(request.messages.len(), 1);
        assert!(request.messages[0].content.contains("Soup"));
    }

    #[test]
    fn test_parse_plain_json() {
        let rec =
            parse_recommendation(r#"{"recommended_id": 7, "title": "Soup", "reason": "Cozy"}"#)
                .unwrap();
        assert_eq!(rec.recommended_id, Some(7));
        assert_eq!(rec.title, "Soup");
        assert_eq!(rec.reason, "Cozy");
    }

    #[test]
    fn test_parse_fenced_json_with_string_id() {
        let text = "Here you go:\n```json\n{\"recommended_id\": \"3\", \"title\": \"Tacos\", \"reason\": \"Quick\"}\n```";
        let rec = parse_recommendation(text).unwrap();
        assert_eq!(rec.recommended_id, Some(3));
        assert_eq!(rec.title, "Tacos");
    }

    #[test]
    fn test_parse_coerces_loose_types() {
        let rec = parse_recommendation(
            r#"{"recommended_id": 7.0, "title": 42, "reason": true}"#,
        )
        .unwrap();
        assert_eq!(rec.recommended_id, Some(7));
        assert_eq!(rec.title, "42");
        assert_eq!(rec.reason, "true");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_recommendation("I recommend the soup").is_err());
        assert!(parse_recommendation(r#"{"title": "Soup", "reason": "x"}"#).is_err());
        assert!(
            parse_recommendation(r#"{"recommended_id": "soup", "title": "Soup", "reason": "x"}"#)
                .is_err()
        );
        assert!(parse_recommendation("} nope {").is_err());
        assert!(
            parse_recommendation(r#"{"recommended_id": 7.5, "title": "Soup", "reason": "x"}"#)
                .is_err()
        );
        assert!(
            parse_recommendation(r#"{"recommended_id": 7, "title": null, "reason": "x"}"#)
                .is_err()
        );
        assert!(
            parse_recommendation(r#"{"recommended_id": 7, "title": "Soup", "reason": ["x"]}"#)
                .is_err()
        );
    }
}
