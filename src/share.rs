//! Share action: pre-formatted plain-text summaries
//!
//! When the platform exposes a native share sheet the summary is handed to
//! it; otherwise the exact text is copied to the clipboard and a transient
//! "copied" indicator is raised.

use crate::error::Result;
use crate::models::{TafsirResult, ThematicResult, Verse};
use crate::prompts::ATTRIBUTION_TEXT;
use std::time::{Duration, Instant};

/// Tafsir excerpt length carried by a share summary
pub const SHARE_EXCERPT_CHARS: usize = 500;

/// How long the "copied" indicator stays visible after a clipboard fallback
pub const COPIED_INDICATOR_TTL: Duration = Duration::from_millis(2000);

/// A share-ready title and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSummary {
    pub title: String,
    pub text: String,
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= SHARE_EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(SHARE_EXCERPT_CHARS).collect();
    format!("{}...", cut)
}

/// Summary for one verse's tafsir: verse, translation, excerpt, key points
pub fn tafsir_share_summary(
    verse: &Verse,
    surah_name: &str,
    result: &TafsirResult,
) -> ShareSummary {
    let title = format!("Tafsir {} Ayat {}", surah_name, verse.number);
    let points: Vec<String> = result
        .key_points
        .iter()
        .map(|p| format!("\u{2022} {}", p))
        .collect();
    let text = format!(
        "*{attribution}*\n\n*{title}*\n\n{arabic}\n_\"{translation}\"_\n\n\
         *Penjelasan ({source}):*\n{excerpt}\n\n*Hikmah:*\n{points}",
        attribution = ATTRIBUTION_TEXT,
        title = title,
        arabic = verse.text,
        translation = verse.translation,
        source = result.source,
        excerpt = excerpt(&result.text),
        points = points.join("\n"),
    );
    ShareSummary { title, text }
}

/// Summary for a thematic study: introduction and conclusion
pub fn thematic_share_summary(result: &ThematicResult) -> ShareSummary {
    let title = format!("Tafsir Tematik: {}", result.theme);
    let text = format!(
        "*{attribution}*\n\n*{title}*\nSumber: {source}\n\n\
         *Pengantar:*\n{introduction}\n\n*Kesimpulan:*\n{conclusion}",
        attribution = ATTRIBUTION_TEXT,
        title = title,
        source = result.source,
        introduction = result.introduction,
        conclusion = result.conclusion,
    );
    ShareSummary { title, text }
}

/// Platform share capability, provided by the embedding shell
pub trait ShareTarget {
    /// Whether a native share sheet is available
    fn supports_native_share(&self) -> bool;

    /// Hands the summary to the native share sheet
    fn share(&mut self, title: &str, text: &str) -> Result<()>;

    /// Places text on the system clipboard
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}

/// How a share request was fulfilled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

/// Routes share requests to the target and tracks the transient "copied"
/// indicator raised by the clipboard fallback.
#[derive(Debug)]
pub struct ShareDispatcher<T: ShareTarget> {
    target: T,
    copied_at: Option<Instant>,
}

impl<T: ShareTarget> ShareDispatcher<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            copied_at: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Shares natively when possible, otherwise copies the exact summary
    /// text to the clipboard and raises the "copied" indicator.
    pub fn share(&mut self, summary: &ShareSummary) -> Result<ShareOutcome> {
        if self.target.supports_native_share() {
            self.target.share(&summary.title, &summary.text)?;
            Ok(ShareOutcome::Shared)
        } else {
            self.target.copy_to_clipboard(&summary.text)?;
            self.copied_at = Some(Instant::now());
            Ok(ShareOutcome::Copied)
        }
    }

    /// Indicator state at an explicit instant; it reverts once the TTL has
    /// elapsed.
    pub fn copied_indicator_visible_at(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.duration_since(at) < COPIED_INDICATOR_TTL,
            None => false,
        }
    }

    pub fn copied_indicator_visible(&self) -> bool {
        self.copied_indicator_visible_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct FakeTarget {
        native: bool,
        shared: Option<(String, String)>,
        clipboard: Option<String>,
    }

    impl ShareTarget for FakeTarget {
        fn supports_native_share(&self) -> bool {
            self.native
        }

        fn share(&mut self, title: &str, text: &str) -> Result<()> {
            self.shared = Some((title.to_string(), text.to_string()));
            Ok(())
        }

        fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
            self.clipboard = Some(text.to_string());
            Ok(())
        }
    }

    fn sample_summary() -> ShareSummary {
        let verse = Verse {
            number: 1,
            text: "بِسْمِ اللَّهِ".to_string(),
            translation: "Dengan nama Allah".to_string(),
        };
        let result = TafsirResult {
            source: "Tafsir Ibn Kathir (Classic Sunni)".to_string(),
            text: "Penjelasan singkat.".to_string(),
            key_points: vec!["a".to_string(), "b".to_string()],
        };
        tafsir_share_summary(&verse, "Al-Fatihah", &result)
    }

    #[test]
    fn tafsir_summary_format() {
        let summary = sample_summary();
        assert_eq!(summary.title, "Tafsir Al-Fatihah Ayat 1");
        assert_eq!(
            summary.text,
            "*Digenerate oleh Kajian Tafsir Al-Qur'an AI*\n\n\
             *Tafsir Al-Fatihah Ayat 1*\n\n\
             بِسْمِ اللَّهِ\n\
             _\"Dengan nama Allah\"_\n\n\
             *Penjelasan (Tafsir Ibn Kathir (Classic Sunni)):*\n\
             Penjelasan singkat.\n\n\
             *Hikmah:*\n\
             \u{2022} a\n\
             \u{2022} b"
        );
    }

    #[test]
    fn long_explanations_are_truncated_at_500_chars() {
        let verse = Verse {
            number: 2,
            text: "نص".to_string(),
            translation: "terjemahan".to_string(),
        };
        let result = TafsirResult {
            source: "Tafsir Al-Jalalayn (Concise)".to_string(),
            text: "x".repeat(600),
            key_points: vec!["a".to_string()],
        };
        let summary = tafsir_share_summary(&verse, "Al-Baqarah", &result);
        let expected = format!("{}...", "x".repeat(500));
        assert!(summary.text.contains(&expected));
        assert!(!summary.text.contains(&"x".repeat(501)));
    }

    #[test]
    fn native_share_is_preferred_when_available() {
        let mut dispatcher = ShareDispatcher::new(FakeTarget {
            native: true,
            ..FakeTarget::default()
        });
        let summary = sample_summary();
        let outcome = dispatcher.share(&summary).unwrap();

        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(dispatcher.target().clipboard.is_none());
        assert!(!dispatcher.copied_indicator_visible());
        let (title, text) = dispatcher.target().shared.clone().unwrap();
        assert_eq!(title, summary.title);
        assert_eq!(text, summary.text);
    }

    #[test]
    fn clipboard_fallback_copies_exact_text_and_raises_indicator() {
        let mut dispatcher = ShareDispatcher::new(FakeTarget::default());
        let summary = sample_summary();
        let outcome = dispatcher.share(&summary).unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(
            dispatcher.target().clipboard.as_deref(),
            Some(summary.text.as_str())
        );
        assert!(dispatcher.copied_indicator_visible());
    }

    #[test]
    fn copied_indicator_reverts_after_ttl() {
        let mut dispatcher = ShareDispatcher::new(FakeTarget::default());
        dispatcher.share(&sample_summary()).unwrap();

        let copied_at = dispatcher.copied_at.unwrap();
        assert!(dispatcher.copied_indicator_visible_at(copied_at + Duration::from_millis(1999)));
        assert!(!dispatcher.copied_indicator_visible_at(copied_at + Duration::from_millis(2000)));
        assert!(!dispatcher.copied_indicator_visible_at(copied_at + Duration::from_millis(5000)));
    }

    #[test]
    fn thematic_summary_uses_introduction_and_conclusion() {
        let result = ThematicResult {
            theme: "Kesabaran".to_string(),
            introduction: "Pengantar tema.".to_string(),
            verses: Vec::new(),
            explanation: "Penjelasan panjang.".to_string(),
            conclusion: "Pesan moral.".to_string(),
            source: "Buya Hamka (Tafsir Al-Azhar)".to_string(),
        };
        let summary = thematic_share_summary(&result);
        assert_eq!(summary.title, "Tafsir Tematik: Kesabaran");
        assert!(summary.text.contains("Sumber: Buya Hamka (Tafsir Al-Azhar)"));
        assert!(summary.text.contains("*Pengantar:*\nPengantar tema."));
        assert!(summary.text.contains("*Kesimpulan:*\nPesan moral."));
        assert!(!summary.text.contains("Penjelasan panjang."));
    }
}
