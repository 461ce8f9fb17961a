//! JSON response schemas enforced by the generative service
//!
//! These mirror the `responseSchema` shape of the Gemini REST API; the
//! service is constrained to emit JSON matching them, and the client still
//! re-parses defensively on top.

use serde_json::{json, Value};

/// Schema for a full-surah response: `{ verses: [{number, text, translation}] }`
pub fn surah_content_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "verses": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "number": { "type": "INTEGER" },
                        "text": {
                            "type": "STRING",
                            "description": "Arabic text of the verse with tashkeel"
                        },
                        "translation": {
                            "type": "STRING",
                            "description": "Indonesian translation"
                        }
                    },
                    "required": ["number", "text", "translation"]
                }
            }
        },
        "required": ["verses"]
    })
}

/// Schema for a single-verse tafsir: `{ text, keyPoints }`
pub fn tafsir_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "text": {
                "type": "STRING",
                "description": "Detailed comprehensive explanation (Tafsir)"
            },
            "keyPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3-5 concise key takeaways or lessons from this verse"
            }
        },
        "required": ["text", "keyPoints"]
    })
}

/// Schema for a thematic study:
/// `{ theme, introduction, verses[], explanation, conclusion }`
pub fn thematic_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "theme": { "type": "STRING" },
            "introduction": { "type": "STRING" },
            "verses": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "surahName": { "type": "STRING" },
                        "verseNumber": { "type": "NUMBER" },
                        "text": { "type": "STRING" },
                        "translation": { "type": "STRING" },
                        "relevance": {
                            "type": "STRING",
                            "description": "Why this verse fits the theme"
                        }
                    }
                }
            },
            "explanation": { "type": "STRING" },
            "conclusion": { "type": "STRING" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surah_schema_requires_verse_fields() {
        let schema = surah_content_schema();
        assert_eq!(schema["required"][0], "verses");
        let item_required = &schema["properties"]["verses"]["items"]["required"];
        let fields: Vec<&str> = item_required
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(fields, ["number", "text", "translation"]);
    }

    #[test]
    fn tafsir_schema_requires_text_and_key_points() {
        let schema = tafsir_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "text"));
        assert!(required.iter().any(|v| v == "keyPoints"));
    }

    #[test]
    fn thematic_schema_has_no_required_fields() {
        // Missing fields degrade during normalization instead of failing
        // at the service boundary.
        assert!(thematic_schema().get("required").is_none());
    }
}
