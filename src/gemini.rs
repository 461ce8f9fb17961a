//! Content request layer: one-shot calls to the Gemini `generateContent` API
//!
//! Every operation is a single schema-constrained round trip. There is no
//! retry, no backoff, and no timeout beyond the service's own liveness; a
//! failed generation is simply re-triggerable by the caller.

use crate::error::{Error, Result};
use crate::models::{SurahData, SurahMeta, TafsirResult, TafsirSource, ThematicResult, Verse};
use crate::{prompts, schema, surahs};
use log::{error, info};
use serde::Deserialize;
use serde_json::{json, Value};

/// Environment variable holding the single API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model identifier used for every content request
pub const GENERATION_MODEL: &str = "gemini-2.5-flash";

/// Upper bound on key points carried by a tafsir result
pub const MAX_KEY_POINTS: usize = 5;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the external generative service. Construction fails fast with
/// a configuration error when no credential is available, so no operation
/// can reach the network without one.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration("API key is missing".to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model: GENERATION_MODEL.to_string(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Builds a client from `GEMINI_API_KEY`
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) => Self::new(key),
            Err(_) => Err(Error::Configuration(format!(
                "{} is not set",
                API_KEY_ENV
            ))),
        }
    }

    /// One schema-constrained generation round trip, returning the payload
    /// parsed as JSON.
    async fn generate(&self, prompt: &str, response_schema: Value) -> Result<Value> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema
            }
        });

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url,
            self.model,
            urlencoding::encode(&self.api_key)
        );

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("[generate] API error: {} - {}", status, error_body);
            return Err(Error::Upstream(format!(
                "API returned status {}",
                status
            )));
        }

        let response_json: Value = response.json().await?;
        let content = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| Error::Upstream("API returned empty content".to_string()))?;

        parse_json_payload(content)
    }

    /// Fetches the full verse list for one surah. Verse text and translation
    /// come from the model; english name and meaning are filled from the
    /// local static table.
    pub async fn fetch_surah_content(
        &self,
        surah_number: u16,
        surah_name: &str,
        verse_count: u16,
    ) -> Result<SurahData> {
        info!(
            "[fetch_surah_content] Requesting surah {} ({})",
            surah_number, surah_name
        );
        let prompt = prompts::surah_content_prompt(surah_number, surah_name, verse_count);
        let payload = self.generate(&prompt, schema::surah_content_schema()).await?;
        normalize_surah(payload, surah_number, surah_name, verse_count)
    }

    /// Fetches an exegesis for a single verse from the requested tradition
    pub async fn fetch_tafsir(
        &self,
        surah_name: &str,
        verse_number: u32,
        verse_text: &str,
        source: TafsirSource,
    ) -> Result<TafsirResult> {
        info!(
            "[fetch_tafsir] Requesting {} for {} ayat {}",
            source, surah_name, verse_number
        );
        let prompt = prompts::tafsir_prompt(surah_name, verse_number, verse_text, source);
        let payload = self.generate(&prompt, schema::tafsir_schema()).await?;
        normalize_tafsir(payload, source)
    }

    /// Generates a thematic (Maudhu'i) study across the whole Qur'an
    pub async fn generate_thematic_tafsir(
        &self,
        theme: &str,
        source: TafsirSource,
    ) -> Result<ThematicResult> {
        info!(
            "[generate_thematic_tafsir] Requesting theme \"{}\" from {}",
            theme, source
        );
        let prompt = prompts::thematic_prompt(theme, source);
        let payload = self.generate(&prompt, schema::thematic_schema()).await?;
        normalize_thematic(payload, source)
    }
}

/// Parses the model payload as JSON, tolerating prose or fences around the
/// object by falling back to the outermost brace span.
fn parse_json_payload(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).or_else(|first_err| {
        let candidate = extract_json_object(raw).ok_or_else(|| {
            Error::Upstream(format!("Response did not contain valid JSON: {}", first_err))
        })?;
        serde_json::from_str(&candidate)
            .map_err(|e| Error::Upstream(format!("Failed to parse response JSON: {}", e)))
    })
}

fn extract_json_object(raw: &str) -> Option<String> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if start >= end {
        return None;
    }
    Some(raw[start..=end].to_string())
}

#[derive(Deserialize)]
struct RawSurahContent {
    #[serde(default)]
    verses: Vec<Verse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTafsir {
    #[serde(default)]
    text: String,
    #[serde(default)]
    key_points: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawThematic {
    #[serde(default)]
    theme: String,
    #[serde(default)]
    introduction: String,
    #[serde(default)]
    verses: Vec<crate::models::ThematicVerseReference>,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    conclusion: String,
}

/// Wraps the generated verse list into a `SurahData`. The verse sequence
/// must be non-empty, ascending, and contiguous from 1, and the surah
/// number must exist in the static table.
fn normalize_surah(
    payload: Value,
    surah_number: u16,
    surah_name: &str,
    verse_count: u16,
) -> Result<SurahData> {
    let raw: RawSurahContent = serde_json::from_value(payload)?;
    if raw.verses.is_empty() {
        return Err(Error::Upstream(
            "Surah response contained no verses".to_string(),
        ));
    }
    for (i, verse) in raw.verses.iter().enumerate() {
        let expected = (i + 1) as u32;
        if verse.number != expected {
            return Err(Error::Upstream(format!(
                "Verse numbering is broken: expected {}, got {}",
                expected, verse.number
            )));
        }
    }

    // The model is trusted only for verse text and translation; the rest of
    // the metadata comes from the static table, which is authoritative for
    // the canonical range.
    let record = surahs::by_number(surah_number)
        .ok_or_else(|| Error::Upstream(format!("Unknown surah number {}", surah_number)))?;

    Ok(SurahData {
        meta: SurahMeta {
            number: surah_number,
            name: surah_name.to_string(),
            english_name: record.english_name.to_string(),
            verse_count,
            meaning: record.meaning.to_string(),
        },
        verses: raw.verses,
    })
}

/// Normalizes a tafsir payload. An empty body or empty key-point list is a
/// hard upstream failure; excess key points are truncated to the requested
/// bound.
fn normalize_tafsir(payload: Value, source: TafsirSource) -> Result<TafsirResult> {
    let raw: RawTafsir = serde_json::from_value(payload)?;
    if raw.text.trim().is_empty() {
        return Err(Error::Upstream(
            "Tafsir response is missing its text body".to_string(),
        ));
    }
    let mut key_points: Vec<String> = raw
        .key_points
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();
    if key_points.is_empty() {
        return Err(Error::Upstream(
            "Tafsir response contained no key points".to_string(),
        ));
    }
    key_points.truncate(MAX_KEY_POINTS);

    Ok(TafsirResult {
        source: source.label().to_string(),
        text: raw.text,
        key_points,
    })
}

/// Normalizes a thematic payload. Missing fields degrade to empty values
/// rather than failing; the source is always the requested one.
fn normalize_thematic(payload: Value, source: TafsirSource) -> Result<ThematicResult> {
    let raw: RawThematic = serde_json::from_value(payload)?;
    Ok(ThematicResult {
        theme: raw.theme,
        introduction: raw.introduction,
        verses: raw.verses,
        explanation: raw.explanation,
        conclusion: raw.conclusion,
        source: source.label().to_string(),
    })
}
