//! Word-compatible document export
//!
//! Builds office-namespaced HTML served as a `.doc` download, stamped with
//! the fixed attribution line and an Indonesian-localized generation date.
//! Export is read-only over completed results; nothing flows back into
//! request state.

use crate::models::{TafsirResult, ThematicResult, Verse};
use crate::prompts::ATTRIBUTION_TEXT;
use chrono::{Local, Locale, NaiveDate};

/// UTF-8 byte order mark prepended so Word detects the encoding
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// A document ready to be offered as a browser download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDocument {
    pub filename: String,
    pub html: String,
}

impl WordDocument {
    /// File contents: BOM followed by the HTML body
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(UTF8_BOM.len() + self.html.len());
        out.extend_from_slice(&UTF8_BOM);
        out.extend_from_slice(self.html.as_bytes());
        out
    }
}

/// Lower-cases a name and replaces every non-alphanumeric character with
/// an underscore, e.g. "Al-Baqarah" -> "al_baqarah".
pub fn sanitize_filename_fragment(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

pub fn tafsir_doc_filename(surah_name: &str, verse_number: u32) -> String {
    format!(
        "Materi_Ceramah_{}_Ayat_{}.doc",
        sanitize_filename_fragment(surah_name),
        verse_number
    )
}

pub fn tafsir_pdf_filename(surah_name: &str, verse_number: u32) -> String {
    format!(
        "Materi_Ceramah_{}_Ayat_{}.pdf",
        sanitize_filename_fragment(surah_name),
        verse_number
    )
}

pub fn thematic_doc_filename(theme: &str) -> String {
    format!("Tafsir_Tematik_{}.doc", sanitize_filename_fragment(theme))
}

pub fn thematic_pdf_filename(theme: &str) -> String {
    format!("Tafsir_Tematik_{}.pdf", sanitize_filename_fragment(theme))
}

/// Escapes text interpolated into exported HTML
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One escaped paragraph per input line
fn paragraphs(text: &str) -> String {
    text.lines()
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect()
}

/// Indonesian long-form date, e.g. "Minggu, 23 Agustus 2026"
fn localized_date(date: NaiveDate) -> String {
    date.format_localized("%A, %-d %B %Y", Locale::id_ID)
        .to_string()
}

fn office_document(title: &str, body: &str) -> String {
    format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\n\
         <head>\n\
         <meta charset='utf-8'>\n\
         <title>{}</title>\n\
         <style>\n\
         body {{ font-family: 'Calibri', 'Arial', sans-serif; font-size: 11pt; line-height: 1.5; color: #000; }}\n\
         .header {{ text-align: center; border-bottom: 3px solid #047857; padding-bottom: 15px; margin-bottom: 20px; }}\n\
         .attribution {{ font-size: 16pt; font-weight: bold; color: #047857; margin-bottom: 10px; text-transform: uppercase; }}\n\
         .title {{ font-size: 14pt; font-weight: bold; color: #333; margin-bottom: 5px; }}\n\
         .subtitle {{ font-size: 11pt; color: #555; }}\n\
         .section-title {{ font-size: 13pt; font-weight: bold; color: #065f46; border-bottom: 1px solid #ddd; padding-bottom: 3px; margin: 15px 0 10px 0; }}\n\
         .arabic-box {{ background-color: #f8fafc; padding: 15px; border: 1px solid #e2e8f0; text-align: right; margin-bottom: 10px; }}\n\
         .arabic {{ font-family: 'Traditional Arabic', 'Amiri', serif; font-size: 24pt; direction: rtl; line-height: 2; }}\n\
         .translation {{ font-style: italic; color: #334155; }}\n\
         .source-badge {{ background-color: #ecfdf5; color: #047857; padding: 2px 8px; font-size: 9pt; font-weight: bold; border: 1px solid #a7f3d0; }}\n\
         .content-text {{ text-align: justify; }}\n\
         .hikmah-list {{ background-color: #fffbeb; border: 1px solid #fcd34d; padding: 15px; }}\n\
         .relevance {{ font-size: 10pt; color: #047857; font-weight: bold; }}\n\
         .timestamp {{ font-size: 9pt; color: #94a3b8; text-align: center; margin-top: 30px; border-top: 1px solid #eee; padding-top: 10px; }}\n\
         </style>\n\
         </head>\n\
         <body>\n{}\n</body>\n\
         </html>",
        escape_html(title),
        body
    )
}

/// Builds the study document for one verse's tafsir
pub fn tafsir_word_document(
    verse: &Verse,
    surah_name: &str,
    result: &TafsirResult,
    generated_on: NaiveDate,
) -> WordDocument {
    let key_points_section = if result.key_points.is_empty() {
        String::new()
    } else {
        let items: String = result
            .key_points
            .iter()
            .map(|point| format!("<li>{}</li>", escape_html(point)))
            .collect();
        format!(
            "<div class=\"section\">\n\
             <div class=\"section-title\">Poin Hikmah (Untuk Disampaikan)</div>\n\
             <div class=\"hikmah-list\"><ul>{}</ul></div>\n\
             </div>",
            items
        )
    };

    let body = format!(
        "<div class=\"header\">\n\
         <div class=\"attribution\">{attribution}</div>\n\
         <div class=\"title\">Materi Tafsir &amp; Ceramah</div>\n\
         <div class=\"subtitle\">Kajian Tafsir Al-Qur'an Global</div>\n\
         </div>\n\
         <div class=\"section\">\n\
         <div class=\"section-title\">Ayat Pilihan</div>\n\
         <div class=\"arabic-box\"><div class=\"arabic\">{arabic}</div></div>\n\
         <p class=\"translation\"><strong>Artinya:</strong> \"{translation}\"</p>\n\
         <p class=\"subtitle\">({surah}: {ayah})</p>\n\
         </div>\n\
         <div class=\"section\">\n\
         <div class=\"section-title\">Penjelasan Tafsir</div>\n\
         <div class=\"source-badge\">Sumber: {source}</div>\n\
         <div class=\"content-text\">{explanation}</div>\n\
         </div>\n\
         {key_points}\n\
         <div class=\"timestamp\">\n\
         Dokumen ini dihasilkan oleh AI berdasarkan referensi kitab tafsir.<br>\n\
         Dibuat pada: {date}\n\
         </div>",
        attribution = escape_html(ATTRIBUTION_TEXT),
        arabic = escape_html(&verse.text),
        translation = escape_html(&verse.translation),
        surah = escape_html(surah_name),
        ayah = verse.number,
        source = escape_html(&result.source),
        explanation = paragraphs(&result.text),
        key_points = key_points_section,
        date = localized_date(generated_on),
    );

    let title = format!("Materi Tafsir {} Ayat {}", surah_name, verse.number);
    WordDocument {
        filename: tafsir_doc_filename(surah_name, verse.number),
        html: office_document(&title, &body),
    }
}

/// Builds the study document for a thematic result
pub fn thematic_word_document(result: &ThematicResult, generated_on: NaiveDate) -> WordDocument {
    let verses: String = result
        .verses
        .iter()
        .map(|v| {
            format!(
                "<div class=\"arabic-box\">\n\
                 <div class=\"arabic\">{arabic}</div>\n\
                 <div class=\"translation\">\"{translation}\" ({surah}: {ayah})</div>\n\
                 <div class=\"relevance\">Relevansi: {relevance}</div>\n\
                 </div>",
                arabic = escape_html(&v.text),
                translation = escape_html(&v.translation),
                surah = escape_html(&v.surah_name),
                ayah = v.verse_number,
                relevance = escape_html(&v.relevance),
            )
        })
        .collect();

    let body = format!(
        "<div class=\"header\">\n\
         <div class=\"attribution\">{attribution}</div>\n\
         <div class=\"title\">Tafsir Tematik Al-Qur'an</div>\n\
         <div class=\"subtitle\">Tema: {theme} | Sumber: {source}</div>\n\
         </div>\n\
         <p><strong>Pengantar:</strong> {introduction}</p>\n\
         <div class=\"section-title\">Ayat-Ayat Pilihan</div>\n\
         {verses}\n\
         <div class=\"section-title\">Penjelasan Tafsir</div>\n\
         <div class=\"content-text\">{explanation}</div>\n\
         <div class=\"section-title\">Kesimpulan</div>\n\
         <p>{conclusion}</p>\n\
         <div class=\"timestamp\">Dibuat pada: {date}</div>",
        attribution = escape_html(ATTRIBUTION_TEXT),
        theme = escape_html(&result.theme),
        source = escape_html(&result.source),
        introduction = escape_html(&result.introduction),
        verses = verses,
        explanation = paragraphs(&result.explanation),
        conclusion = escape_html(&result.conclusion),
        date = localized_date(generated_on),
    );

    let title = format!("Tafsir Tematik: {}", result.theme);
    WordDocument {
        filename: thematic_doc_filename(&result.theme),
        html: office_document(&title, &body),
    }
}

/// Convenience wrappers stamping today's local date
pub fn tafsir_word_document_now(
    verse: &Verse,
    surah_name: &str,
    result: &TafsirResult,
) -> WordDocument {
    tafsir_word_document(verse, surah_name, result, Local::now().date_naive())
}

pub fn thematic_word_document_now(result: &ThematicResult) -> WordDocument {
    thematic_word_document(result, Local::now().date_naive())
}
