//! Language catalog for annotating detected languages

/// Languages the remote recognizer can detect, keyed by its language
/// codes. Source of truth for display names shown alongside results.
const LANGUAGES: &[(&str, &str)] = &[
    ("en", "Global English"),
    ("en_au", "Australian English"),
    ("en_uk", "British English"),
    ("en_us", "US English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("hi", "Hindi"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("fi", "Finnish"),
    ("ko", "Korean"),
    ("pl", "Polish"),
    ("ru", "Russian"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
];

/// Immutable code → display-name catalog, constructed once at startup
/// and passed explicitly to the components that annotate results.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: &'static [(&'static str, &'static str)],
}

impl LanguageCatalog {
    /// Catalog of the languages the remote service supports
    pub fn builtin() -> Self {
        Self { entries: LANGUAGES }
    }

    /// Look up the display name for a language code
    pub fn display_name(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// All known (code, display name) pairs
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
