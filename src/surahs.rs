//! Static reference table of the 114 surahs
//!
//! Process-wide, read-only data. The generative service is never trusted for
//! surah metadata; english names and meanings always come from this table.

use crate::models::SurahMeta;

/// One row of the static surah table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahRecord {
    pub number: u16,
    pub name: &'static str,
    pub english_name: &'static str,
    pub verse_count: u16,
    pub meaning: &'static str,
}

impl SurahRecord {
    /// Owned metadata for this record
    pub fn meta(&self) -> SurahMeta {
        SurahMeta {
            number: self.number,
            name: self.name.to_string(),
            english_name: self.english_name.to_string(),
            verse_count: self.verse_count,
            meaning: self.meaning.to_string(),
        }
    }

    /// Bismillah precedes every surah except Al-Fatihah (it is verse 1)
    /// and At-Taubah.
    pub fn opens_with_bismillah(&self) -> bool {
        self.number != 1 && self.number != 9
    }
}

const fn rec(
    number: u16,
    name: &'static str,
    english_name: &'static str,
    verse_count: u16,
    meaning: &'static str,
) -> SurahRecord {
    SurahRecord {
        number,
        name,
        english_name,
        verse_count,
        meaning,
    }
}

/// All 114 surahs in canonical order, Hafs verse numbering
pub const ALL_SURAHS: [SurahRecord; 114] = [
    rec(1, "Al-Fatihah", "The Opening", 7, "Pembukaan"),
    rec(2, "Al-Baqarah", "The Cow", 286, "Sapi Betina"),
    rec(3, "Ali 'Imran", "Family of Imran", 200, "Keluarga Imran"),
    rec(4, "An-Nisa'", "The Women", 176, "Wanita"),
    rec(5, "Al-Ma'idah", "The Table Spread", 120, "Hidangan"),
    rec(6, "Al-An'am", "The Cattle", 165, "Binatang Ternak"),
    rec(7, "Al-A'raf", "The Heights", 206, "Tempat Tertinggi"),
    rec(8, "Al-Anfal", "The Spoils of War", 75, "Harta Rampasan Perang"),
    rec(9, "At-Taubah", "The Repentance", 129, "Pengampunan"),
    rec(10, "Yunus", "Jonah", 109, "Nabi Yunus"),
    rec(11, "Hud", "Hud", 123, "Nabi Hud"),
    rec(12, "Yusuf", "Joseph", 111, "Nabi Yusuf"),
    rec(13, "Ar-Ra'd", "The Thunder", 43, "Guruh"),
    rec(14, "Ibrahim", "Abraham", 52, "Nabi Ibrahim"),
    rec(15, "Al-Hijr", "The Rocky Tract", 99, "Gunung Al-Hijr"),
    rec(16, "An-Nahl", "The Bee", 128, "Lebah"),
    rec(17, "Al-Isra'", "The Night Journey", 111, "Perjalanan Malam"),
    rec(18, "Al-Kahf", "The Cave", 110, "Gua"),
    rec(19, "Maryam", "Mary", 98, "Maryam"),
    rec(20, "Ta-Ha", "Ta-Ha", 135, "Ta Ha"),
    rec(21, "Al-Anbiya'", "The Prophets", 112, "Para Nabi"),
    rec(22, "Al-Hajj", "The Pilgrimage", 78, "Haji"),
    rec(23, "Al-Mu'minun", "The Believers", 118, "Orang-Orang Mukmin"),
    rec(24, "An-Nur", "The Light", 64, "Cahaya"),
    rec(25, "Al-Furqan", "The Criterion", 77, "Pembeda"),
    rec(26, "Asy-Syu'ara'", "The Poets", 227, "Para Penyair"),
    rec(27, "An-Naml", "The Ant", 93, "Semut"),
    rec(28, "Al-Qasas", "The Stories", 88, "Kisah-Kisah"),
    rec(29, "Al-'Ankabut", "The Spider", 69, "Laba-Laba"),
    rec(30, "Ar-Rum", "The Romans", 60, "Bangsa Romawi"),
    rec(31, "Luqman", "Luqman", 34, "Luqman"),
    rec(32, "As-Sajdah", "The Prostration", 30, "Sujud"),
    rec(33, "Al-Ahzab", "The Combined Forces", 73, "Golongan yang Bersekutu"),
    rec(34, "Saba'", "Sheba", 54, "Kaum Saba'"),
    rec(35, "Fatir", "The Originator", 45, "Pencipta"),
    rec(36, "Ya-Sin", "Ya Sin", 83, "Ya Sin"),
    rec(37, "As-Saffat", "Those Ranged in Ranks", 182, "Yang Bershaf-Shaf"),
    rec(38, "Sad", "The Letter Sad", 88, "Shad"),
    rec(39, "Az-Zumar", "The Groups", 75, "Rombongan-Rombongan"),
    rec(40, "Ghafir", "The Forgiver", 85, "Yang Mengampuni"),
    rec(41, "Fussilat", "Explained in Detail", 54, "Yang Dijelaskan"),
    rec(42, "Asy-Syura", "The Consultation", 53, "Musyawarah"),
    rec(43, "Az-Zukhruf", "The Gold Adornments", 89, "Perhiasan"),
    rec(44, "Ad-Dukhan", "The Smoke", 59, "Kabut"),
    rec(45, "Al-Jasiyah", "The Kneeling", 37, "Yang Berlutut"),
    rec(46, "Al-Ahqaf", "The Wind-Curved Sandhills", 35, "Bukit-Bukit Pasir"),
    rec(47, "Muhammad", "Muhammad", 38, "Nabi Muhammad"),
    rec(48, "Al-Fath", "The Victory", 29, "Kemenangan"),
    rec(49, "Al-Hujurat", "The Rooms", 18, "Kamar-Kamar"),
    rec(50, "Qaf", "The Letter Qaf", 45, "Qaf"),
    rec(51, "Az-Zariyat", "The Winnowing Winds", 60, "Angin yang Menerbangkan"),
    rec(52, "At-Tur", "The Mount", 49, "Bukit"),
    rec(53, "An-Najm", "The Star", 62, "Bintang"),
    rec(54, "Al-Qamar", "The Moon", 55, "Bulan"),
    rec(55, "Ar-Rahman", "The Beneficent", 78, "Yang Maha Pemurah"),
    rec(56, "Al-Waqi'ah", "The Inevitable", 96, "Hari Kiamat"),
    rec(57, "Al-Hadid", "The Iron", 29, "Besi"),
    rec(58, "Al-Mujadilah", "The Pleading Woman", 22, "Wanita yang Menggugat"),
    rec(59, "Al-Hasyr", "The Exile", 24, "Pengusiran"),
    rec(60, "Al-Mumtahanah", "She Who Is Examined", 13, "Wanita yang Diuji"),
    rec(61, "As-Saff", "The Ranks", 14, "Barisan"),
    rec(62, "Al-Jumu'ah", "Friday", 11, "Hari Jumat"),
    rec(63, "Al-Munafiqun", "The Hypocrites", 11, "Orang-Orang Munafik"),
    rec(64, "At-Tagabun", "Mutual Disillusion", 18, "Hari Ditampakkan Kesalahan"),
    rec(65, "At-Talaq", "The Divorce", 12, "Talak"),
    rec(66, "At-Tahrim", "The Prohibition", 12, "Mengharamkan"),
    rec(67, "Al-Mulk", "The Sovereignty", 30, "Kerajaan"),
    rec(68, "Al-Qalam", "The Pen", 52, "Pena"),
    rec(69, "Al-Haqqah", "The Reality", 52, "Hari Kiamat yang Pasti"),
    rec(70, "Al-Ma'arij", "The Ascending Stairways", 44, "Tempat Naik"),
    rec(71, "Nuh", "Noah", 28, "Nabi Nuh"),
    rec(72, "Al-Jinn", "The Jinn", 28, "Jin"),
    rec(73, "Al-Muzzammil", "The Enshrouded One", 20, "Orang yang Berselimut"),
    rec(74, "Al-Muddassir", "The Cloaked One", 56, "Orang yang Berkemul"),
    rec(75, "Al-Qiyamah", "The Resurrection", 40, "Hari Kiamat"),
    rec(76, "Al-Insan", "Man", 31, "Manusia"),
    rec(77, "Al-Mursalat", "The Emissaries", 50, "Malaikat yang Diutus"),
    rec(78, "An-Naba'", "The Tidings", 40, "Berita Besar"),
    rec(79, "An-Nazi'at", "Those Who Drag Forth", 46, "Malaikat yang Mencabut"),
    rec(80, "'Abasa", "He Frowned", 42, "Bermuka Masam"),
    rec(81, "At-Takwir", "The Overthrowing", 29, "Penggulungan"),
    rec(82, "Al-Infitar", "The Cleaving", 19, "Terbelah"),
    rec(83, "Al-Mutaffifin", "The Defrauding", 36, "Orang-Orang Curang"),
    rec(84, "Al-Insyiqaq", "The Splitting Open", 25, "Terbelah"),
    rec(85, "Al-Buruj", "The Mansions of the Stars", 22, "Gugusan Bintang"),
    rec(86, "At-Tariq", "The Morning Star", 17, "Yang Datang di Malam Hari"),
    rec(87, "Al-A'la", "The Most High", 19, "Yang Paling Tinggi"),
    rec(88, "Al-Gasyiyah", "The Overwhelming", 26, "Hari Pembalasan"),
    rec(89, "Al-Fajr", "The Dawn", 30, "Fajar"),
    rec(90, "Al-Balad", "The City", 20, "Negeri"),
    rec(91, "Asy-Syams", "The Sun", 15, "Matahari"),
    rec(92, "Al-Lail", "The Night", 21, "Malam"),
    rec(93, "Ad-Duha", "The Morning Hours", 11, "Waktu Dhuha"),
    rec(94, "Asy-Syarh", "The Relief", 8, "Kelapangan"),
    rec(95, "At-Tin", "The Fig", 8, "Buah Tin"),
    rec(96, "Al-'Alaq", "The Clot", 19, "Segumpal Darah"),
    rec(97, "Al-Qadr", "The Power", 5, "Kemuliaan"),
    rec(98, "Al-Bayyinah", "The Clear Proof", 8, "Bukti yang Nyata"),
    rec(99, "Az-Zalzalah", "The Earthquake", 8, "Guncangan"),
    rec(100, "Al-'Adiyat", "The Courser", 11, "Kuda Perang"),
    rec(101, "Al-Qari'ah", "The Calamity", 11, "Hari Kiamat"),
    rec(102, "At-Takasur", "Rivalry in Increase", 8, "Bermegah-Megahan"),
    rec(103, "Al-'Asr", "The Declining Day", 3, "Masa"),
    rec(104, "Al-Humazah", "The Traducer", 9, "Pengumpat"),
    rec(105, "Al-Fil", "The Elephant", 5, "Gajah"),
    rec(106, "Quraisy", "Quraysh", 4, "Suku Quraisy"),
    rec(107, "Al-Ma'un", "Small Kindnesses", 7, "Barang yang Berguna"),
    rec(108, "Al-Kausar", "Abundance", 3, "Nikmat yang Berlimpah"),
    rec(109, "Al-Kafirun", "The Disbelievers", 6, "Orang-Orang Kafir"),
    rec(110, "An-Nasr", "Divine Support", 3, "Pertolongan"),
    rec(111, "Al-Lahab", "The Flame", 5, "Gejolak Api"),
    rec(112, "Al-Ikhlas", "Sincerity", 4, "Keikhlasan"),
    rec(113, "Al-Falaq", "The Daybreak", 5, "Waktu Subuh"),
    rec(114, "An-Nas", "Mankind", 6, "Umat Manusia"),
];

/// Looks up a surah by its canonical number (1..=114)
pub fn by_number(number: u16) -> Option<&'static SurahRecord> {
    if number == 0 {
        return None;
    }
    ALL_SURAHS.get(usize::from(number) - 1)
}

/// Case-insensitive index search over name, english name, and number,
/// mirroring the surah index search box.
pub fn search(query: &str) -> Vec<&'static SurahRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return ALL_SURAHS.iter().collect();
    }
    ALL_SURAHS
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.english_name.to_lowercase().contains(&needle)
                || s.number.to_string().contains(&needle)
        })
        .collect()
}
