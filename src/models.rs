//! Data models for surah content, tafsir results, and thematic studies

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static reference metadata for one surah
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahMeta {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub verse_count: u16,
    pub meaning: String,
}

/// A single verse as returned by the generative service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
    pub translation: String,
}

/// A full surah reading session: local metadata plus generated verses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahData {
    pub meta: SurahMeta,
    pub verses: Vec<Verse>,
}

/// Closed set of exegesis traditions the service can be asked to represent.
/// Selecting a different variant replaces any held `TafsirResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TafsirSource {
    IbnKathir,
    Jalalayn,
    AlQurtubi,
    AsSadi,
    QuraishShihab,
    Hamka,
    SayyidQutb,
    MaarifulQuran,
}

impl TafsirSource {
    pub const ALL: [TafsirSource; 8] = [
        TafsirSource::IbnKathir,
        TafsirSource::Jalalayn,
        TafsirSource::AlQurtubi,
        TafsirSource::AsSadi,
        TafsirSource::QuraishShihab,
        TafsirSource::Hamka,
        TafsirSource::SayyidQutb,
        TafsirSource::MaarifulQuran,
    ];

    /// Display label used in prompts, results, and exported documents
    pub fn label(self) -> &'static str {
        match self {
            TafsirSource::IbnKathir => "Tafsir Ibn Kathir (Classic Sunni)",
            TafsirSource::Jalalayn => "Tafsir Al-Jalalayn (Concise)",
            TafsirSource::AlQurtubi => "Tafsir Al-Qurtubi (Legal/Fiqh)",
            TafsirSource::AsSadi => "Tafsir As-Sa'di (Clear/Modern)",
            TafsirSource::QuraishShihab => "M. Quraish Shihab (Indonesian Context)",
            TafsirSource::Hamka => "Buya Hamka (Tafsir Al-Azhar)",
            TafsirSource::SayyidQutb => "Fi Zilal al-Quran (Literary/Social)",
            TafsirSource::MaarifulQuran => "Ma'ariful Quran (Mufti Shafi Usmani)",
        }
    }
}

impl fmt::Display for TafsirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One generated exegesis for a (verse, source) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TafsirResult {
    pub source: String,
    pub text: String,
    pub key_points: Vec<String>,
}

/// A verse cited by a thematic study, with its relevance justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThematicVerseReference {
    #[serde(default)]
    pub surah_name: String,
    #[serde(default)]
    pub verse_number: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub relevance: String,
}

/// One generated thematic (Maudhu'i) study for a (theme, source) query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThematicResult {
    pub theme: String,
    pub introduction: String,
    pub verses: Vec<ThematicVerseReference>,
    pub explanation: String,
    pub conclusion: String,
    pub source: String,
}
