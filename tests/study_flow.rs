//! End-to-end flows over the public API: view state, export, and share,
//! driven by fabricated results in place of live generations.

use kajian_tafsir::export;
use kajian_tafsir::pdf::{self, PageRasterizer};
use kajian_tafsir::session::{TafsirPanel, TAFSIR_ERROR_MESSAGE};
use kajian_tafsir::share::{self, ShareOutcome, ShareTarget};
use kajian_tafsir::{Error, GeminiClient, Result, TafsirResult, TafsirSource, Verse};

use chrono::NaiveDate;
use image::{Rgba, RgbaImage};

fn ayat_kursi() -> Verse {
    Verse {
        number: 255,
        text: "اللّهُ لاَ إِلَـهَ إِلاَّ هُوَ الْحَيُّ الْقَيُّومُ".to_string(),
        translation: "Allah, tidak ada tuhan selain Dia, Yang Mahahidup, Yang terus-menerus mengurus makhluk-Nya".to_string(),
    }
}

fn generated_tafsir(source: TafsirSource) -> TafsirResult {
    TafsirResult {
        source: source.label().to_string(),
        text: "Ayat ini menegaskan keesaan Allah.\nTidak ada yang menyamai-Nya.".to_string(),
        key_points: vec![
            "Keesaan Allah".to_string(),
            "Sifat Al-Hayy dan Al-Qayyum".to_string(),
        ],
    }
}

#[test]
fn client_without_credential_fails_before_any_request() {
    let err = GeminiClient::new("").unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn panel_flow_from_open_to_export_and_share() {
    // Open the panel for a verse; the response for the initial source
    // arrives and is accepted.
    let mut panel = TafsirPanel::default();
    let ticket = panel.open_for(ayat_kursi(), "Al-Baqarah");
    assert!(panel.state().is_loading());
    assert!(panel.resolve(ticket, Ok(generated_tafsir(TafsirSource::IbnKathir))));

    let result = panel.state().result().unwrap().clone();
    let verse = panel.verse().unwrap().clone();

    // Word export over the completed result.
    let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
    let doc = export::tafsir_word_document(&verse, panel.surah_name(), &result, date);
    assert_eq!(doc.filename, "Materi_Ceramah_al_baqarah_Ayat_255.doc");
    assert!(doc.html.contains("Tafsir Ibn Kathir (Classic Sunni)"));

    // Share falls back to the clipboard on this target.
    let summary = share::tafsir_share_summary(&verse, panel.surah_name(), &result);
    let mut dispatcher = share::ShareDispatcher::new(ClipboardOnly::default());
    assert_eq!(dispatcher.share(&summary).unwrap(), ShareOutcome::Copied);
    assert_eq!(
        dispatcher.target().clipboard.as_deref(),
        Some(summary.text.as_str())
    );
    assert!(dispatcher.copied_indicator_visible());
}

#[test]
fn switching_source_discards_the_older_response() {
    let mut panel = TafsirPanel::default();
    let first = panel.open_for(ayat_kursi(), "Al-Baqarah");
    let second = panel.select_source(TafsirSource::AsSadi).unwrap();

    // The superseded request fails late; the failure must not surface.
    assert!(!panel.resolve(first, Err(Error::Upstream("late failure".to_string()))));
    assert!(panel.state().is_loading());

    assert!(panel.resolve(second, Ok(generated_tafsir(TafsirSource::AsSadi))));
    assert_eq!(
        panel.state().result().unwrap().source,
        "Tafsir As-Sa'di (Clear/Modern)"
    );
}

#[test]
fn failed_generation_shows_only_the_localized_message() {
    let mut panel = TafsirPanel::default();
    let ticket = panel.open_for(ayat_kursi(), "Al-Baqarah");
    panel.resolve(
        ticket,
        Err(Error::Upstream("HTTP 500 with provider internals".to_string())),
    );

    let message = panel.state().error_message().unwrap();
    assert_eq!(message, TAFSIR_ERROR_MESSAGE);
    assert!(!message.contains("500"));
}

#[test]
fn pdf_export_of_a_rendered_document() {
    struct TallRasterizer;

    impl PageRasterizer for TallRasterizer {
        fn rasterize(&self, _html: &str, width_px: u32) -> Result<RgbaImage> {
            // Three pages and change at the requested width.
            let height = pdf::page_height_px(width_px) * 3 + 10;
            Ok(RgbaImage::from_pixel(
                width_px,
                height,
                Rgba([255, 255, 255, 255]),
            ))
        }
    }

    let result = generated_tafsir(TafsirSource::IbnKathir);
    let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
    let doc = export::tafsir_word_document(&ayat_kursi(), "Al-Baqarah", &result, date);

    let bytes = pdf::export_pdf(&TallRasterizer, &doc.html, 200).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(String::from_utf8_lossy(&bytes).contains("/Count 4"));
    assert_eq!(
        export::tafsir_pdf_filename("Al-Baqarah", 255),
        "Materi_Ceramah_al_baqarah_Ayat_255.pdf"
    );
}

#[derive(Default)]
struct ClipboardOnly {
    clipboard: Option<String>,
}

impl ShareTarget for ClipboardOnly {
    fn supports_native_share(&self) -> bool {
        false
    }

    fn share(&mut self, _title: &str, _text: &str) -> Result<()> {
        panic!("native share is unavailable on this target");
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}
