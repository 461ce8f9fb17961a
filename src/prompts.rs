//! Prompt templates sent to the generative service

use crate::models::TafsirSource;

/// Fixed attribution line stamped into exports and share summaries
pub const ATTRIBUTION_TEXT: &str = "Digenerate oleh Kajian Tafsir Al-Qur'an AI";

/// Preset themes offered by the thematic study screen
pub const PRESET_THEMES: [&str; 8] = [
    "Hari Kiamat (Eskatologi)",
    "Kebesaran Allah & Alam Semesta",
    "Surga dan Neraka",
    "Akhlak Mulia",
    "Anak Yatim & Fakir Miskin",
    "Kesabaran & Ujian",
    "Waktu & Masa",
    "Kisah Kaum Terdahulu",
];

/// Prompt for the full text and translation of one surah
pub fn surah_content_prompt(surah_number: u16, surah_name: &str, verse_count: u16) -> String {
    format!(
        "Provide the full Arabic text and Indonesian translation for Surah {} ({}).\n\
         It has approximately {} verses.\n\
         Ensure strict JSON format.",
        surah_number, surah_name, verse_count
    )
}

/// Prompt for a single-verse tafsir. The service is instructed to synthesize
/// a representative answer when the tradition has no direct commentary, so a
/// "not found" outcome is never part of the contract.
pub fn tafsir_prompt(
    surah_name: &str,
    verse_number: u32,
    verse_text: &str,
    source: TafsirSource,
) -> String {
    format!(
        "Bertindaklah sebagai ahli tafsir Al-Quran.\n\
         Berikan penjelasan tafsir yang mendalam untuk:\n\
         Surah: {}, Ayat: {}\n\
         Bunyi Ayat: \"{}\"\n\
         \n\
         Sumber Tafsir yang diminta: {}.\n\
         \n\
         Jika sumber spesifik tidak memiliki komentar langsung untuk ayat ini, \
         sintetiskan pandangan umum dari mazhab pemikiran yang diwakili oleh sumber tersebut.\n\
         Bahasa: Indonesia.\n\
         Format output: JSON.",
        surah_name,
        verse_number,
        verse_text,
        source.label()
    )
}

/// Prompt for a thematic (Maudhu'i) study across the whole Qur'an
pub fn thematic_prompt(theme: &str, source: TafsirSource) -> String {
    format!(
        "Anda adalah asisten studi Al-Quran yang ahli.\n\
         Tugas: Buatlah kajian Tafsir Tematik (Maudhu'i) tentang tema: \"{}\".\n\
         Batasan: Gunakan ayat-ayat dari seluruh Al-Qur'an (Surah 1 s.d. 114) yang paling relevan.\n\
         Sumber Rujukan: {}.\n\
         \n\
         Instruksi:\n\
         1. Pilih 3-5 ayat paling relevan dari Al-Qur'an yang membahas tema ini.\n\
         2. Jelaskan kaitan ayat tersebut dengan tema.\n\
         3. Buat sintesis tafsir yang menghubungkan ayat-ayat tersebut menjadi satu pemahaman utuh.\n\
         4. Bahasa: Indonesia yang akademis namun mudah dipahami untuk ceramah.\n\
         \n\
         Format JSON:\n\
         - theme: Judul tema\n\
         - introduction: Pengantar singkat tentang tema ini dalam konteks Al-Qur'an.\n\
         - verses: Array berisi ayat-ayat relevan (surahName, verseNumber, text (Arabic), translation, relevance).\n\
         - explanation: Penjelasan tafsir mendalam (paragraf panjang).\n\
         - conclusion: Kesimpulan utama atau pesan moral.",
        theme,
        source.label()
    )
}
