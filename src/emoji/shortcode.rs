//! `:shortcode:` substitution for outgoing messages.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::emoji::catalog::EmojiCatalog;

static SHORT_CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([-+\w]+):").expect("short code pattern is valid"));

impl EmojiCatalog {
    /// Replace every `:name:` token naming a known short code with the
    /// emoji's unified glyph.
    ///
    /// Tokens are matched once, left to right and without overlap, against
    /// the original text; substituted glyphs are never rescanned. Unknown
    /// tokens stay exactly as typed.
    ///
    /// ```
    /// use chabeau_emoji::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::load_bundled().unwrap();
    /// assert_eq!(catalog.replace_short_codes("foo :penguin: bar"), "foo 🐧 bar");
    /// assert_eq!(catalog.replace_short_codes(":nope:"), ":nope:");
    /// ```
    pub fn replace_short_codes(&self, text: &str) -> String {
        if self.short_codes().is_empty() {
            return text.to_string();
        }
        SHORT_CODE_TOKEN
            .replace_all(text, |caps: &Captures| match self.entry_by_short_code(&caps[1]) {
                Some(entry) => entry.unified().to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
