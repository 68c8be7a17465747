//! Lexical evidence tables for language scoring
//!
//! Closed vocabularies, pattern lists and phrase lists used by the
//! detector. These are deliberately small: they only need to separate
//! English from Kiswahili for the service domain, not act as dictionaries.

/// Kiswahili vocabulary for reliable detection
pub(crate) const KISWAHILI_VOCABULARY: &[&str] = &[
    "habari",
    "asante",
    "karibu",
    "pole",
    "sawa",
    "ndiyo",
    "hapana",
    "tafadhali",
    "rafiki",
    "msaada",
    "tupo",
    "sana",
    "kwa",
    "na",
    "ni",
    "kupata",
    "kusaidia",
    "kufanya",
    "kufikia",
    "kuenda",
    "kujibu",
    "kufungua",
    "kuandika",
    "kuanguka",
    "kufa",
    "kutegemea",
    "mtu",
    "watu",
    "kitu",
    "vitu",
    "sehemu",
    "mahali",
    "asubuhi",
    "alasiri",
    "jioni",
    "usiku",
    "siku",
    "wiki",
    "mwezi",
    "mwaka",
    "muda",
    "wakati",
    "saa",
    "dakika",
    "sekunde",
    "namba",
    "idadi",
    "kila",
    "moja",
    "mbili",
    "tatu",
    "nne",
    "kra",
    "pin",
    "itax",
    "serikali",
    "huduma",
    "fomu",
    "karatasi",
    "hata",
    "kama",
    "lakini",
    "ingawa",
    "baada",
    "kabla",
    "kutoka",
    "kwenda",
    "huko",
    "hapa",
    "hapo",
    "sini",
    "juu",
    "chini",
    "mbali",
    "jibu",
    "swali",
    "ujumbe",
    "ujumuika",
];

/// English vocabulary, weighted toward the service domain
pub(crate) const ENGLISH_VOCABULARY: &[&str] = &[
    "hello",
    "thank",
    "please",
    "help",
    "friend",
    "nil",
    "returns",
    "file",
    "password",
    "login",
    "submit",
    "form",
    "booking",
    "appointment",
    "service",
    "government",
    "portal",
    "access",
    "recovery",
    "registration",
    "confirmation",
    "sms",
];

/// Kiswahili morphology patterns
pub(crate) const KISWAHILI_PATTERNS: &[&str] = &[
    // Consecutive vowels, common in Kiswahili
    r"\b[a-z]{2,}[iaeou][aeiou]+",
    // Verb prefixes (ku-, ka-)
    r"\bk[ua]\w+",
    // Noun class prefixes (m-, ma-, mo-)
    r"\bm[ao]\w+",
    // Tense/subject markers
    r"\b(ni|na|ja|li|tu|wa)\w+",
];

/// English contraction shape ("don't", "what's")
pub(crate) const ENGLISH_CONTRACTION_PATTERN: &str = r"[a-z]+'[a-z]+";

/// English grammatical function words
pub(crate) const ENGLISH_FUNCTION_WORD_PATTERN: &str =
    r"\b(the|a|an|is|are|be|been|have|has|do|does|did)\b";

/// Common Kiswahili phrases and question words
pub(crate) const KISWAHILI_PHRASES: &[&str] = &[
    "nataka",
    "karibu",
    "asante",
    "tafadhali",
    "je",
    "nini",
    "wakati gani",
    "siku gani",
    "wapi",
    "nani",
    "lini",
];

/// Common English phrases in the service domain
pub(crate) const ENGLISH_PHRASES: &[&str] = &[
    "file nil",
    "kra pin",
    "recover pin",
    "itax",
    "help me",
    "how to",
    "what is",
    "where is",
    "when can",
    "do i",
];
