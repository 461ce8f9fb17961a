//! Presentation-layer view state
//!
//! Framework-agnostic state machines for the three UI surfaces: the surah
//! reader, the tafsir side panel, and the thematic study screen. Each
//! surface owns a request sequence; a new request supersedes any in-flight
//! one, and a resolution carrying a stale ticket is detected and discarded
//! instead of clobbering newer state.

use crate::error::{Error, Result};
use crate::models::{SurahData, SurahMeta, TafsirResult, TafsirSource, ThematicResult, Verse};
use log::{error, warn};

/// User-facing message when loading a surah fails
pub const READER_ERROR_MESSAGE: &str = "Gagal memuat surat. Silakan coba lagi.";

/// User-facing message when a tafsir request fails
pub const TAFSIR_ERROR_MESSAGE: &str = "Gagal memuat tafsir. Silakan coba lagi.";

/// User-facing message when a thematic study fails
pub const THEMATIC_ERROR_MESSAGE: &str = "Gagal menghasilkan tafsir tematik. Silakan coba lagi.";

/// Lifecycle of one request as seen by a UI surface. Failures carry only
/// the fixed localized message; the underlying cause is logged, never
/// exposed structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            RequestState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic per-surface request counter
#[derive(Debug, Default)]
pub struct RequestSequence {
    current: u64,
}

/// Identifies one issued request; stale tickets are rejected on resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    pub fn begin(&mut self) -> RequestTicket {
        self.current += 1;
        RequestTicket(self.current)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.current
    }
}

fn fail<T>(context: &str, message: &str, err: &Error) -> RequestState<T> {
    error!("[{}] {}", context, err);
    RequestState::Failed(message.to_string())
}

// ============ Surah Reader ============

/// Full-screen reading view for one surah
#[derive(Debug)]
pub struct ReaderView {
    surah: SurahMeta,
    show_translation: bool,
    state: RequestState<SurahData>,
    sequence: RequestSequence,
}

impl ReaderView {
    pub fn new(surah: SurahMeta) -> Self {
        Self {
            surah,
            show_translation: true,
            state: RequestState::Idle,
            sequence: RequestSequence::default(),
        }
    }

    pub fn surah(&self) -> &SurahMeta {
        &self.surah
    }

    pub fn state(&self) -> &RequestState<SurahData> {
        &self.state
    }

    pub fn shows_translation(&self) -> bool {
        self.show_translation
    }

    pub fn toggle_translation(&mut self) {
        self.show_translation = !self.show_translation;
    }

    /// Bismillah heading is rendered for every surah except 1 and 9
    pub fn shows_bismillah(&self) -> bool {
        self.surah.number != 1 && self.surah.number != 9
    }

    /// Marks the view loading and returns the ticket the eventual response
    /// must carry.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.state = RequestState::Loading;
        self.sequence.begin()
    }

    /// Applies a load outcome. Returns false when the ticket was superseded
    /// and the outcome was discarded.
    pub fn finish_load(&mut self, ticket: RequestTicket, outcome: Result<SurahData>) -> bool {
        if !self.sequence.is_current(ticket) {
            warn!("[reader] Discarding stale surah response");
            return false;
        }
        self.state = match outcome {
            Ok(data) => RequestState::Ready(data),
            Err(err) => fail("reader", READER_ERROR_MESSAGE, &err),
        };
        true
    }
}

// ============ Tafsir Side Panel ============

/// Slide-over panel showing the exegesis of a selected verse. Switching the
/// source while a request is in flight supersedes it.
#[derive(Debug)]
pub struct TafsirPanel {
    open: bool,
    verse: Option<Verse>,
    surah_name: String,
    source: TafsirSource,
    state: RequestState<TafsirResult>,
    sequence: RequestSequence,
}

impl Default for TafsirPanel {
    fn default() -> Self {
        Self {
            open: false,
            verse: None,
            surah_name: String::new(),
            source: TafsirSource::IbnKathir,
            state: RequestState::Idle,
            sequence: RequestSequence::default(),
        }
    }
}

impl TafsirPanel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn verse(&self) -> Option<&Verse> {
        self.verse.as_ref()
    }

    pub fn surah_name(&self) -> &str {
        &self.surah_name
    }

    pub fn source(&self) -> TafsirSource {
        self.source
    }

    pub fn state(&self) -> &RequestState<TafsirResult> {
        &self.state
    }

    /// Opens the panel for a verse and starts loading the current source
    pub fn open_for(&mut self, verse: Verse, surah_name: &str) -> RequestTicket {
        self.open = true;
        self.verse = Some(verse);
        self.surah_name = surah_name.to_string();
        self.state = RequestState::Loading;
        self.sequence.begin()
    }

    /// Switches the exegesis source. The selection takes effect immediately
    /// and any in-flight request is superseded. Returns None while the
    /// panel is closed.
    pub fn select_source(&mut self, source: TafsirSource) -> Option<RequestTicket> {
        self.source = source;
        if !self.open || self.verse.is_none() {
            return None;
        }
        self.state = RequestState::Loading;
        Some(self.sequence.begin())
    }

    /// Applies a tafsir outcome. Returns false when the ticket was
    /// superseded and the outcome was discarded.
    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<TafsirResult>) -> bool {
        if !self.sequence.is_current(ticket) {
            warn!("[tafsir-panel] Discarding stale tafsir response");
            return false;
        }
        self.state = match outcome {
            Ok(result) => RequestState::Ready(result),
            Err(err) => fail("tafsir-panel", TAFSIR_ERROR_MESSAGE, &err),
        };
        true
    }

    /// Closes the panel. The underlying network call is not cancelled; its
    /// late response is rejected by the ticket check on the next open.
    pub fn close(&mut self) {
        self.open = false;
    }
}

// ============ Thematic Study ============

/// Thematic (Maudhu'i) study screen
#[derive(Debug)]
pub struct ThematicStudy {
    theme_input: String,
    source: TafsirSource,
    state: RequestState<ThematicResult>,
    sequence: RequestSequence,
}

impl Default for ThematicStudy {
    fn default() -> Self {
        Self {
            theme_input: String::new(),
            source: TafsirSource::QuraishShihab,
            state: RequestState::Idle,
            sequence: RequestSequence::default(),
        }
    }
}

impl ThematicStudy {
    pub fn theme_input(&self) -> &str {
        &self.theme_input
    }

    pub fn set_theme_input(&mut self, theme: &str) {
        self.theme_input = theme.to_string();
    }

    pub fn source(&self) -> TafsirSource {
        self.source
    }

    pub fn set_source(&mut self, source: TafsirSource) {
        self.source = source;
    }

    pub fn state(&self) -> &RequestState<ThematicResult> {
        &self.state
    }

    /// Starts generating a study for the given theme. A blank theme issues
    /// no request and returns None.
    pub fn generate(&mut self, theme: &str) -> Option<RequestTicket> {
        if theme.trim().is_empty() {
            return None;
        }
        self.theme_input = theme.to_string();
        self.state = RequestState::Loading;
        Some(self.sequence.begin())
    }

    /// Applies a study outcome. Returns false when the ticket was superseded
    /// and the outcome was discarded.
    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Result<ThematicResult>) -> bool {
        if !self.sequence.is_current(ticket) {
            warn!("[thematic] Discarding stale thematic response");
            return false;
        }
        self.state = match outcome {
            Ok(result) => RequestState::Ready(result),
            Err(err) => fail("thematic", THEMATIC_ERROR_MESSAGE, &err),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn verse(number: u32) -> Verse {
        Verse {
            number,
            text: "نص".to_string(),
            translation: "terjemahan".to_string(),
        }
    }

    fn tafsir(source: TafsirSource) -> TafsirResult {
        TafsirResult {
            source: source.label().to_string(),
            text: "penjelasan".to_string(),
            key_points: vec!["a".to_string()],
        }
    }

    fn meta(number: u16) -> SurahMeta {
        crate::surahs::by_number(number).unwrap().meta()
    }

    #[test]
    fn reader_load_lifecycle() {
        let mut reader = ReaderView::new(meta(2));
        assert!(reader.shows_translation());
        assert!(reader.shows_bismillah());

        let ticket = reader.begin_load();
        assert!(reader.state().is_loading());

        let data = SurahData {
            meta: meta(2),
            verses: vec![verse(1)],
        };
        assert!(reader.finish_load(ticket, Ok(data.clone())));
        assert_eq!(reader.state().result(), Some(&data));
    }

    #[test]
    fn reader_failure_surfaces_fixed_message_only() {
        let mut reader = ReaderView::new(meta(1));
        let ticket = reader.begin_load();
        let failed = reader.finish_load(
            ticket,
            Err(Error::Upstream("status 503 with internals".to_string())),
        );
        assert!(failed);
        assert_eq!(reader.state().error_message(), Some(READER_ERROR_MESSAGE));
    }

    #[test]
    fn bismillah_hidden_for_fatihah_and_taubah() {
        assert!(!ReaderView::new(meta(1)).shows_bismillah());
        assert!(!ReaderView::new(meta(9)).shows_bismillah());
        assert!(ReaderView::new(meta(114)).shows_bismillah());
    }

    #[test]
    fn panel_source_switch_supersedes_in_flight_request() {
        let mut panel = TafsirPanel::default();
        assert_eq!(panel.source(), TafsirSource::IbnKathir);

        let first = panel.open_for(verse(1), "Al-Fatihah");
        let second = panel.select_source(TafsirSource::Hamka).unwrap();
        assert_eq!(panel.source(), TafsirSource::Hamka);

        // The older request resolves late and must be discarded.
        assert!(!panel.resolve(first, Ok(tafsir(TafsirSource::IbnKathir))));
        assert!(panel.state().is_loading());

        assert!(panel.resolve(second, Ok(tafsir(TafsirSource::Hamka))));
        assert_eq!(
            panel.state().result().unwrap().source,
            "Buya Hamka (Tafsir Al-Azhar)"
        );
    }

    #[test]
    fn panel_select_source_while_closed_issues_no_request() {
        let mut panel = TafsirPanel::default();
        assert!(panel.select_source(TafsirSource::Jalalayn).is_none());
        assert_eq!(panel.source(), TafsirSource::Jalalayn);
    }

    #[test]
    fn panel_reopen_invalidates_previous_ticket() {
        let mut panel = TafsirPanel::default();
        let stale = panel.open_for(verse(1), "Al-Fatihah");
        panel.close();
        let fresh = panel.open_for(verse(2), "Al-Fatihah");

        assert!(!panel.resolve(stale, Ok(tafsir(TafsirSource::IbnKathir))));
        assert!(panel.resolve(fresh, Err(Error::Upstream("boom".to_string()))));
        assert_eq!(panel.state().error_message(), Some(TAFSIR_ERROR_MESSAGE));
    }

    #[test]
    fn thematic_blank_theme_is_guarded() {
        let mut study = ThematicStudy::default();
        assert_eq!(study.source(), TafsirSource::QuraishShihab);
        assert!(study.generate("").is_none());
        assert!(study.generate("   ").is_none());
        assert!(!study.state().is_loading());
    }

    #[test]
    fn thematic_failure_keeps_fixed_message() {
        let mut study = ThematicStudy::default();
        let ticket = study.generate("Kesabaran & Ujian").unwrap();
        assert_eq!(study.theme_input(), "Kesabaran & Ujian");

        study.resolve(ticket, Err(Error::Upstream("parse error".to_string())));
        assert_eq!(
            study.state().error_message(),
            Some(THEMATIC_ERROR_MESSAGE)
        );
    }
}
