use secrecy::SecretString;

/// Markup handling mode for the text being translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagHandling {
    /// Plain text, no markup awareness
    #[default]
    None,
    /// Treat the text as HTML
    Html,
    /// Treat the text as XML
    Xml,
}

impl TagHandling {
    /// Parse the wire value, `None` for anything outside the allowed set
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(Self::None),
            "html" => Some(Self::Html),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// Wire representation sent to the engine
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Html => "html",
            Self::Xml => "xml",
        }
    }
}

/// Internal canonical translation request
///
/// Every dialect normalizes into this shape before the engine is called.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Source language code, empty string means auto-detect
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Text to translate
    pub text: String,
    /// Markup handling mode
    pub tag_handling: TagHandling,
    /// Session credential forwarded to the engine, pro dialect only
    pub session: Option<SecretString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_handling_accepts_known_values() {
        assert_eq!(TagHandling::parse(""), Some(TagHandling::None));
        assert_eq!(TagHandling::parse("html"), Some(TagHandling::Html));
        assert_eq!(TagHandling::parse("xml"), Some(TagHandling::Xml));
    }

    #[test]
    fn tag_handling_rejects_everything_else() {
        assert_eq!(TagHandling::parse("markdown"), None);
        assert_eq!(TagHandling::parse("HTML"), None);
        assert_eq!(TagHandling::parse(" xml"), None);
    }

    #[test]
    fn wire_value_round_trips() {
        for mode in [TagHandling::None, TagHandling::Html, TagHandling::Xml] {
            assert_eq!(TagHandling::parse(mode.as_str()), Some(mode));
        }
    }
}
