//! Catalog entry types.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::emoji::handle::EmoteHandle;

bitflags! {
    /// Image sets that ship artwork for an emoji.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EmojiStyles: u8 {
        const APPLE    = 0b0001;
        const GOOGLE   = 0b0010;
        const TWITTER  = 0b0100;
        const FACEBOOK = 0b1000;
    }
}

/// A vendor image set the host application can render emoji with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiSet {
    Apple,
    Google,
    #[default]
    Twitter,
    Facebook,
}

impl EmojiSet {
    /// Preference order used when falling back to another set.
    pub const ALL: [EmojiSet; 4] = [
        EmojiSet::Twitter,
        EmojiSet::Apple,
        EmojiSet::Google,
        EmojiSet::Facebook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmojiSet::Apple => "apple",
            EmojiSet::Google => "google",
            EmojiSet::Twitter => "twitter",
            EmojiSet::Facebook => "facebook",
        }
    }

    pub fn style(self) -> EmojiStyles {
        match self {
            EmojiSet::Apple => EmojiStyles::APPLE,
            EmojiSet::Google => EmojiStyles::GOOGLE,
            EmojiSet::Twitter => EmojiStyles::TWITTER,
            EmojiSet::Facebook => EmojiStyles::FACEBOOK,
        }
    }
}

/// Which of an entry's two glyph spellings a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GlyphForm {
    Unified,
    NonQualified,
}

/// One emoji known to the catalog, either a base emoji or one of its
/// skin-tone variations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    pub(crate) unified: String,
    pub(crate) non_qualified: String,
    pub(crate) unified_id: String,
    pub(crate) non_qualified_id: String,
    pub(crate) short_codes: Vec<String>,
    pub(crate) category: String,
    pub(crate) styles: EmojiStyles,
    pub(crate) variations: Vec<EmojiEntry>,
    pub(crate) handle: EmoteHandle,
}

impl EmojiEntry {
    /// Fully-qualified glyph text, e.g. `"👨‍⚕️"`.
    pub fn unified(&self) -> &str {
        &self.unified
    }

    /// Glyph text without variation selectors. Equal to [`Self::unified`]
    /// for emoji that never carry one.
    pub fn non_qualified(&self) -> &str {
        &self.non_qualified
    }

    /// Dash-separated hex code points, e.g. `"1F427"`.
    pub fn unified_id(&self) -> &str {
        &self.unified_id
    }

    pub fn non_qualified_id(&self) -> &str {
        &self.non_qualified_id
    }

    /// Short codes without surrounding colons. Never empty.
    pub fn short_codes(&self) -> &[String] {
        &self.short_codes
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn styles(&self) -> EmojiStyles {
        self.styles
    }

    pub fn variations(&self) -> &[EmojiEntry] {
        &self.variations
    }

    pub fn handle(&self) -> &EmoteHandle {
        &self.handle
    }

    #[inline]
    pub(crate) fn glyph(&self, form: GlyphForm) -> &str {
        match form {
            GlyphForm::Unified => &self.unified,
            GlyphForm::NonQualified => &self.non_qualified,
        }
    }
}
