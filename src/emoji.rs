//! Emoji shortcode table used by the message classifier.

/// Maps textual shortcodes (`:)`, `:smile:`) to emoji glyphs.
///
/// The host environment normally supplies its own table; `default()` carries
/// the stock smileys-panel set. Entries are kept sorted longest-first so the
/// classifier's scanner always takes the longest shortcode matching at a
/// position (`:-)` before `:-`).
#[derive(Clone, Debug)]
pub struct EmojiTable {
    entries: Vec<(String, String)>,
}

/// Stock shortcode set: ASCII emoticons plus a few named codes.
const DEFAULT_SMILEYS: &[(&str, &str)] = &[
    (":)", "🙂"),
    (":-)", "🙂"),
    (":(", "🙁"),
    (":-(", "🙁"),
    (":D", "😀"),
    (":-D", "😀"),
    (";)", "😉"),
    (";-)", "😉"),
    (":P", "😛"),
    (":-P", "😛"),
    (":O", "😮"),
    (":o", "😮"),
    (":*", "😘"),
    (":|", "😐"),
    (":'(", "😢"),
    ("<3", "❤️"),
    ("B)", "😎"),
    (":angry:", "😠"),
    (":clap:", "👏"),
    (":smile:", "😄"),
    (":thumbsup:", "👍"),
    (":wave:", "👋"),
];

impl Default for EmojiTable {
    fn default() -> Self {
        Self::from_pairs(
            DEFAULT_SMILEYS
                .iter()
                .map(|&(code, glyph)| (code.to_string(), glyph.to_string())),
        )
        .expect("stock smiley table is valid")
    }
}

impl EmojiTable {
    /// Build a table from `(shortcode, glyph)` pairs.
    ///
    /// Shortcodes must be non-empty and contain no whitespace, since the
    /// scanner treats whitespace as a token boundary.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (code, glyph) in pairs {
            if code.is_empty() {
                return Err("Emoji shortcode cannot be empty".to_string());
            }
            if code.contains(char::is_whitespace) {
                return Err(format!("Emoji shortcode '{}' contains whitespace", code));
            }
            entries.push((code, glyph));
        }
        // Longest first; ties broken lexically for deterministic scans.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Ok(Self { entries })
    }

    /// Glyph for an exact shortcode, if known.
    pub fn glyph(&self, shortcode: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(code, _)| code == shortcode)
            .map(|(_, glyph)| glyph.as_str())
    }

    /// Longest shortcode matching at the start of `text`, with its glyph.
    pub(crate) fn match_at(&self, text: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|(code, _)| text.starts_with(code.as_str()))
            .map(|(code, glyph)| (code.as_str(), glyph.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_lookup() {
        let table = EmojiTable::default();
        assert_eq!(table.glyph(":)"), Some("🙂"));
        assert_eq!(table.glyph(":smile:"), Some("😄"));
        assert_eq!(table.glyph(":nope:"), None);
    }

    #[test]
    fn test_match_at_prefers_longest() {
        let table = EmojiTable::from_pairs(
            [(":-", "A"), (":-)", "B")]
                .into_iter()
                .map(|(c, g)| (c.to_string(), g.to_string())),
        )
        .unwrap();
        assert_eq!(table.match_at(":-) hi"), Some((":-)", "B")));
        assert_eq!(table.match_at(":- hi"), Some((":-", "A")));
        assert_eq!(table.match_at("hi"), None);
    }

    #[test]
    fn test_len_and_is_empty() {
        let stock = EmojiTable::default();
        assert!(!stock.is_empty());
        assert_eq!(stock.len(), DEFAULT_SMILEYS.len());

        let empty = EmojiTable::from_pairs(std::iter::empty::<(String, String)>()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.match_at(":) hi"), None);
    }

    #[test]
    fn test_from_pairs_rejects_bad_shortcodes() {
        assert!(EmojiTable::from_pairs([("".to_string(), "X".to_string())]).is_err());
        assert!(EmojiTable::from_pairs([(": )".to_string(), "X".to_string())]).is_err());
    }
}
