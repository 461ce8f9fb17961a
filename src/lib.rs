//! Kajian Tafsir: AI-assisted Qur'an reading and tafsir study engine
//!
//! The crate is a thin, strongly-shaped adapter around a hosted generative
//! model plus the surrounding application plumbing:
//!
//! - [`gemini`]: the content request layer, schema-constrained prompts and
//!   response normalization for surah content, verse tafsir, and thematic
//!   studies.
//! - [`surahs`]: the static 114-surah reference table.
//! - [`session`]: presentation-layer state machines with supersede-on-new-
//!   request semantics.
//! - [`export`] / [`pdf`]: Word-compatible and rasterized-A4 PDF document
//!   export.
//! - [`share`]: share summaries with a clipboard fallback.
//!
//! Nothing is persisted; every result lives for one request/response cycle.

pub mod error;
pub mod export;
pub mod gemini;
pub mod models;
pub mod pdf;
pub mod prompts;
pub mod schema;
pub mod session;
pub mod share;
pub mod surahs;

pub use error::{Error, Result};
pub use gemini::GeminiClient;
pub use models::{
    SurahData, SurahMeta, TafsirResult, TafsirSource, ThematicResult, ThematicVerseReference,
    Verse,
};
pub use session::{ReaderView, RequestState, TafsirPanel, ThematicStudy};
