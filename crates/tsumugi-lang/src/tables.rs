//! Static language data: an ISO-639 subset, release-scene synonyms, and
//! the common-words stoplist.

/// `(alpha3, alpha2, english name)`. The alpha2 column is empty for codes
/// that have none.
pub(crate) const LANGUAGES: &[(&str, &str, &str)] = &[
    ("eng", "en", "English"),
    ("fra", "fr", "French"),
    ("spa", "es", "Spanish"),
    ("ger", "de", "German"),
    ("ita", "it", "Italian"),
    ("por", "pt", "Portuguese"),
    ("rus", "ru", "Russian"),
    ("jpn", "ja", "Japanese"),
    ("chi", "zh", "Chinese"),
    ("kor", "ko", "Korean"),
    ("dut", "nl", "Dutch"),
    ("swe", "sv", "Swedish"),
    ("nor", "no", "Norwegian"),
    ("dan", "da", "Danish"),
    ("fin", "fi", "Finnish"),
    ("pol", "pl", "Polish"),
    ("cze", "cs", "Czech"),
    ("slo", "sk", "Slovak"),
    ("hun", "hu", "Hungarian"),
    ("rum", "ro", "Romanian"),
    ("bul", "bg", "Bulgarian"),
    ("gre", "el", "Greek"),
    ("tur", "tr", "Turkish"),
    ("ara", "ar", "Arabic"),
    ("heb", "he", "Hebrew"),
    ("hin", "hi", "Hindi"),
    ("tha", "th", "Thai"),
    ("vie", "vi", "Vietnamese"),
    ("ind", "id", "Indonesian"),
    ("ukr", "uk", "Ukrainian"),
    ("hrv", "hr", "Croatian"),
    ("srp", "sr", "Serbian"),
    ("cat", "ca", "Catalan"),
    ("glg", "gl", "Galician"),
    ("baq", "eu", "Basque"),
    ("ice", "is", "Icelandic"),
    ("est", "et", "Estonian"),
    ("lav", "lv", "Latvian"),
    ("lit", "lt", "Lithuanian"),
    ("per", "fa", "Persian"),
    ("und", "", "Undetermined"),
];

/// Release-scene spellings that the plain code/name tables miss:
/// `(spelling, alpha3, country)`.
pub(crate) const SYNONYMS: &[(&str, &str, Option<&str>)] = &[
    ("unknown", "und", None),
    ("inconnu", "und", None),
    ("unk", "und", None),
    ("un", "und", None),
    ("gr", "gre", None),
    ("greek", "gre", None),
    ("esp", "spa", None),
    ("español", "spa", None),
    ("français", "fra", None),
    ("se", "swe", None),
    ("po", "por", Some("br")),
    ("pb", "por", Some("br")),
    ("pob", "por", Some("br")),
    ("br", "por", Some("br")),
    ("brazilian", "por", Some("br")),
    ("català", "cat", None),
    ("cz", "cze", None),
    ("ua", "ukr", None),
    ("cn", "chi", None),
    ("jp", "jpn", None),
    ("scr", "hrv", None),
];

/// Words that look like language codes or names but are far too common in
/// release names to ever mean one there.
pub(crate) const COMMON_WORDS: &[&str] = &[
    // english words
    "is", "it", "am", "mad", "men", "man", "run", "sin", "st", "to",
    "no", "non", "war", "min", "new", "car", "day", "bad", "bat", "fan",
    "fry", "cop", "zen", "gay", "fat", "cherokee", "got", "an", "as",
    "cat", "her", "be", "hat", "sun", "may", "my", "mr", "rum", "pi",
    // french words
    "bas", "de", "le", "son", "vo", "vf", "ne", "ca", "ce", "et", "que",
    "mal", "est", "vol", "or", "mon", "se",
    // spanish words
    "la", "el", "del", "por", "mar",
    // release-name noise
    "ind", "arw", "ts", "ii", "bin", "chan", "ss", "san", "oss", "iii",
    "vi", "ben", "da", "lt", "ch",
    "mkv", "avi", "dmd", "the", "dis", "cut", "stv", "des", "dia", "and",
    "cab", "sub", "mia", "rim", "las", "une", "par", "srt", "ano", "toy",
    "job", "gag", "reel", "www", "for", "ayu", "csi", "ren", "moi", "sur",
    "fer", "fun", "two", "big", "psy", "air",
];
