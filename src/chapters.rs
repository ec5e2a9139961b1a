//! Static metadata for the 114 surahs.

use crate::core::{
    Chapter,
    RevelationPlace::{
        self,
        Mecca,
        Medina,
    },
};

pub const CHAPTER_COUNT: u32 = 114;

const fn chapter(
    id: u32,
    name: &'static str,
    arabic_name: &'static str,
    verse_count: u32,
    revelation_place: RevelationPlace,
) -> Chapter {
    Chapter { id, name, arabic_name, verse_count, revelation_place }
}

static CHAPTERS: [Chapter; CHAPTER_COUNT as usize] = [
    chapter(1, "Fâtiha", "الفاتحة", 7, Mecca),
    chapter(2, "Bakara", "البقرة", 286, Medina),
    chapter(3, "Âl-i İmrân", "آل عمران", 200, Medina),
    chapter(4, "Nisâ", "النساء", 176, Medina),
    chapter(5, "Mâide", "المائدة", 120, Medina),
    chapter(6, "En'âm", "الأنعام", 165, Mecca),
    chapter(7, "A'râf", "الأعراف", 206, Mecca),
    chapter(8, "Enfâl", "الأنفال", 75, Medina),
    chapter(9, "Tevbe", "التوبة", 129, Medina),
    chapter(10, "Yûnus", "يونس", 109, Mecca),
    chapter(11, "Hûd", "هود", 123, Mecca),
    chapter(12, "Yûsuf", "يوسف", 111, Mecca),
    chapter(13, "Ra'd", "الرعد", 43, Medina),
    chapter(14, "İbrâhîm", "إبراهيم", 52, Mecca),
    chapter(15, "Hicr", "الحجر", 99, Mecca),
    chapter(16, "Nahl", "النحل", 128, Mecca),
    chapter(17, "İsrâ", "الإسراء", 111, Mecca),
    chapter(18, "Kehf", "الكهف", 110, Mecca),
    chapter(19, "Meryem", "مريم", 98, Mecca),
    chapter(20, "Tâhâ", "طه", 135, Mecca),
    chapter(21, "Enbiyâ", "الأنبياء", 112, Mecca),
    chapter(22, "Hac", "الحج", 78, Medina),
    chapter(23, "Mü'minûn", "المؤمنون", 118, Mecca),
    chapter(24, "Nûr", "النور", 64, Medina),
    chapter(25, "Furkân", "الفرقان", 77, Mecca),
    chapter(26, "Şuarâ", "الشعراء", 227, Mecca),
    chapter(27, "Neml", "النمل", 93, Mecca),
    chapter(28, "Kasas", "القصص", 88, Mecca),
    chapter(29, "Ankebût", "العنكبوت", 69, Mecca),
    chapter(30, "Rûm", "الروم", 60, Mecca),
    chapter(31, "Lokmân", "لقمان", 34, Mecca),
    chapter(32, "Secde", "السجدة", 30, Mecca),
    chapter(33, "Ahzâb", "الأحزاب", 73, Medina),
    chapter(34, "Sebe'", "سبأ", 54, Mecca),
    chapter(35, "Fâtır", "فاطر", 45, Mecca),
    chapter(36, "Yâsîn", "يس", 83, Mecca),
    chapter(37, "Sâffât", "الصافات", 182, Mecca),
    chapter(38, "Sâd", "ص", 88, Mecca),
    chapter(39, "Zümer", "الزمر", 75, Mecca),
    chapter(40, "Mü'min", "غافر", 85, Mecca),
    chapter(41, "Fussilet", "فصلت", 54, Mecca),
    chapter(42, "Şûrâ", "الشورى", 53, Mecca),
    chapter(43, "Zuhruf", "الزخرف", 89, Mecca),
    chapter(44, "Duhân", "الدخان", 59, Mecca),
    chapter(45, "Câsiye", "الجاثية", 37, Mecca),
    chapter(46, "Ahkâf", "الأحقاف", 35, Mecca),
    chapter(47, "Muhammed", "محمد", 38, Medina),
    chapter(48, "Fetih", "الفتح", 29, Medina),
    chapter(49, "Hucurât", "الحجرات", 18, Medina),
    chapter(50, "Kâf", "ق", 45, Mecca),
    chapter(51, "Zâriyât", "الذاريات", 60, Mecca),
    chapter(52, "Tûr", "الطور", 49, Mecca),
    chapter(53, "Necm", "النجم", 62, Mecca),
    chapter(54, "Kamer", "القمر", 55, Mecca),
    chapter(55, "Rahmân", "الرحمن", 78, Medina),
    chapter(56, "Vâkıa", "الواقعة", 96, Mecca),
    chapter(57, "Hadîd", "الحديد", 29, Medina),
    chapter(58, "Mücâdele", "المجادلة", 22, Medina),
    chapter(59, "Haşr", "الحشر", 24, Medina),
    chapter(60, "Mümtehine", "الممتحنة", 13, Medina),
    chapter(61, "Saf", "الصف", 14, Medina),
    chapter(62, "Cuma", "الجمعة", 11, Medina),
    chapter(63, "Münâfikûn", "المنافقون", 11, Medina),
    chapter(64, "Teğâbün", "التغابن", 18, Medina),
    chapter(65, "Talâk", "الطلاق", 12, Medina),
    chapter(66, "Tahrîm", "التحريم", 12, Medina),
    chapter(67, "Mülk", "الملك", 30, Mecca),
    chapter(68, "Kalem", "القلم", 52, Mecca),
    chapter(69, "Hâkka", "الحاقة", 52, Mecca),
    chapter(70, "Meâric", "المعارج", 44, Mecca),
    chapter(71, "Nûh", "نوح", 28, Mecca),
    chapter(72, "Cin", "الجن", 28, Mecca),
    chapter(73, "Müzzemmil", "المزمل", 20, Mecca),
    chapter(74, "Müddessir", "المدثر", 56, Mecca),
    chapter(75, "Kıyâme", "القيامة", 40, Mecca),
    chapter(76, "İnsân", "الإنسان", 31, Medina),
    chapter(77, "Mürselât", "المرسلات", 50, Mecca),
    chapter(78, "Nebe'", "النبأ", 40, Mecca),
    chapter(79, "Nâziât", "النازعات", 46, Mecca),
    chapter(80, "Abese", "عبس", 42, Mecca),
    chapter(81, "Tekvîr", "التكوير", 29, Mecca),
    chapter(82, "İnfitâr", "الانفطار", 19, Mecca),
    chapter(83, "Mutaffifîn", "المطففين", 36, Mecca),
    chapter(84, "İnşikâk", "الانشقاق", 25, Mecca),
    chapter(85, "Bürûc", "البروج", 22, Mecca),
    chapter(86, "Târık", "الطارق", 17, Mecca),
    chapter(87, "A'lâ", "الأعلى", 19, Mecca),
    chapter(88, "Ğâşiye", "الغاشية", 26, Mecca),
    chapter(89, "Fecr", "الفجر", 30, Mecca),
    chapter(90, "Beled", "البلد", 20, Mecca),
    chapter(91, "Şems", "الشمس", 15, Mecca),
    chapter(92, "Leyl", "الليل", 21, Mecca),
    chapter(93, "Duhâ", "الضحى", 11, Mecca),
    chapter(94, "İnşirâh", "الشرح", 8, Mecca),
    chapter(95, "Tîn", "التين", 8, Mecca),
    chapter(96, "Alak", "العلق", 19, Mecca),
    chapter(97, "Kadir", "القدر", 5, Mecca),
    chapter(98, "Beyyine", "البينة", 8, Medina),
    chapter(99, "Zilzâl", "الزلزلة", 8, Medina),
    chapter(100, "Âdiyât", "العاديات", 11, Mecca),
    chapter(101, "Kâria", "القارعة", 11, Mecca),
    chapter(102, "Tekâsür", "التكاثر", 8, Mecca),
    chapter(103, "Asr", "العصر", 3, Mecca),
    chapter(104, "Hümeze", "الهمزة", 9, Mecca),
    chapter(105, "Fîl", "الفيل", 5, Mecca),
    chapter(106, "Kureyş", "قريش", 4, Mecca),
    chapter(107, "Mâûn", "الماعون", 7, Mecca),
    chapter(108, "Kevser", "الكوثر", 3, Mecca),
    chapter(109, "Kâfirûn", "الكافرون", 6, Mecca),
    chapter(110, "Nasr", "النصر", 3, Medina),
    chapter(111, "Tebbet", "المسد", 5, Mecca),
    chapter(112, "İhlâs", "الإخلاص", 4, Mecca),
    chapter(113, "Felak", "الفلق", 5, Mecca),
    chapter(114, "Nâs", "الناس", 6, Mecca),
];

pub fn chapters() -> &'static [Chapter] {
    &CHAPTERS
}

pub fn chapter_by_id(id: u32) -> Option<&'static Chapter> {
    if id == 0 {
        return None;
    }
    CHAPTERS.get(id as usize - 1)
}

pub fn is_known(id: u32) -> bool {
    chapter_by_id(id).is_some()
}
