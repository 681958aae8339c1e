//! Emoji definition loading.
//!
//! Definitions are a JSON array with one record per base emoji, in the shape
//! published by the emoji-data project:
//!
//! ```json
//! {
//!   "unified": "1F44D",
//!   "non_qualified": null,
//!   "short_names": ["+1", "thumbsup"],
//!   "category": "People & Body",
//!   "has_img_apple": true,
//!   "skin_variations": { "1F3FB": { "unified": "1F44D-1F3FB", "non_qualified": null } }
//! }
//! ```
//!
//! Records are validated one at a time. A bad record is logged and skipped so
//! the rest of the catalog still loads; only a missing or unparseable
//! document fails the whole load.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::EmojiConfig;
use crate::emoji::catalog::EmojiCatalog;
use crate::emoji::entry::{EmojiEntry, EmojiStyles};
use crate::emoji::handle::{HandleRegistry, HandleRequest, UnifiedIdRegistry};

const BUNDLED_DEFINITIONS: &str = include_str!("../builtins/emoji.json");
const BUNDLED_ORIGIN: &str = "bundled emoji definitions";
const VARIATION_SELECTOR_ID: &str = "FE0F";

/// Skin tone modifier code points and the suffix they contribute to a
/// variation's short code.
const TONE_NAMES: [(&str, &str); 5] = [
    ("1F3FB", "tone1"),
    ("1F3FC", "tone2"),
    ("1F3FD", "tone3"),
    ("1F3FE", "tone4"),
    ("1F3FF", "tone5"),
];

/// Hard failure: the definition document itself could not be used.
#[derive(Debug)]
pub enum CatalogError {
    /// The definitions file could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is not a JSON array of records.
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Read { path, source } => {
                write!(
                    f,
                    "Failed to read emoji definitions at {}: {}",
                    path.display(),
                    source
                )
            }
            CatalogError::Parse { origin, source } => {
                write!(f, "Failed to parse {origin}: {source}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Read { source, .. } => Some(source),
            CatalogError::Parse { source, .. } => Some(source),
        }
    }
}

/// Why a single record (or variation) was left out of the catalog.
#[derive(Debug)]
pub enum RecordError {
    /// The record does not have the expected fields.
    Shape(serde_json::Error),
    /// The record lists no short codes.
    MissingShortNames { unified_id: String },
    /// An id contains something that is not a hex Unicode scalar.
    InvalidCodePoint { id: String },
    /// Another entry already owns this glyph.
    DuplicateGlyph { unified_id: String },
    /// A variation key names a modifier outside the known skin tones.
    UnknownTone { tone: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Shape(err) => write!(f, "Malformed record: {err}"),
            RecordError::MissingShortNames { unified_id } => {
                write!(f, "Emoji {unified_id} has no short names")
            }
            RecordError::InvalidCodePoint { id } => {
                write!(f, "Invalid code point sequence '{id}'")
            }
            RecordError::DuplicateGlyph { unified_id } => {
                write!(f, "Emoji {unified_id} is already defined")
            }
            RecordError::UnknownTone { tone } => write!(f, "Unknown skin tone '{tone}'"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

/// Counts gathered while building a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Base entries accepted.
    pub loaded: usize,
    /// Variation entries accepted across all base entries.
    pub variations: usize,
    /// Records and variations rejected.
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct EmojiRecord {
    unified: String,
    #[serde(default)]
    non_qualified: Option<String>,
    short_names: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(flatten)]
    images: ImageFlags,
    #[serde(default)]
    skin_variations: BTreeMap<String, VariationRecord>,
}

#[derive(Debug, Deserialize)]
struct VariationRecord {
    unified: String,
    #[serde(default)]
    non_qualified: Option<String>,
    #[serde(flatten)]
    images: ImageFlags,
}

#[derive(Debug, Default, Deserialize)]
struct ImageFlags {
    #[serde(default)]
    has_img_apple: bool,
    #[serde(default)]
    has_img_google: bool,
    #[serde(default)]
    has_img_twitter: bool,
    #[serde(default)]
    has_img_facebook: bool,
}

impl ImageFlags {
    fn styles(&self) -> EmojiStyles {
        let mut styles = EmojiStyles::empty();
        styles.set(EmojiStyles::APPLE, self.has_img_apple);
        styles.set(EmojiStyles::GOOGLE, self.has_img_google);
        styles.set(EmojiStyles::TWITTER, self.has_img_twitter);
        styles.set(EmojiStyles::FACEBOOK, self.has_img_facebook);
        styles
    }
}

/// Turn `"1F468-200D-2695-FE0F"` into the glyph it names.
pub(crate) fn decode_code_points(id: &str) -> Result<String, RecordError> {
    let invalid = || RecordError::InvalidCodePoint { id: id.to_string() };
    if id.trim().is_empty() {
        return Err(invalid());
    }
    id.split('-')
        .map(|part| {
            u32::from_str_radix(part, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(invalid)
        })
        .collect()
}

/// The non-qualified id when the dataset omits it: the unified id with its
/// variation selectors removed.
fn derive_non_qualified_id(unified_id: &str) -> String {
    unified_id
        .split('-')
        .filter(|part| !part.eq_ignore_ascii_case(VARIATION_SELECTOR_ID))
        .collect::<Vec<_>>()
        .join("-")
}

fn tone_suffix(tone_key: &str) -> Result<String, RecordError> {
    tone_key
        .split('-')
        .map(|tone| {
            TONE_NAMES
                .iter()
                .find(|(id, _)| id.eq_ignore_ascii_case(tone))
                .map(|(_, name)| *name)
                .ok_or_else(|| RecordError::UnknownTone {
                    tone: tone_key.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(|names| names.join("_"))
}

/// Validated glyph data shared by base entries and variations.
struct Glyphs {
    unified: String,
    non_qualified: String,
    unified_id: String,
    non_qualified_id: String,
}

impl Glyphs {
    fn decode(unified_id: &str, non_qualified_id: Option<&str>) -> Result<Self, RecordError> {
        let unified_id = unified_id.trim().to_ascii_uppercase();
        let non_qualified_id = match non_qualified_id.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_ascii_uppercase(),
            _ => derive_non_qualified_id(&unified_id),
        };
        let unified = decode_code_points(&unified_id)?;
        // A lone selector has no non-qualified spelling of its own.
        let non_qualified = if non_qualified_id.is_empty() {
            unified.clone()
        } else {
            decode_code_points(&non_qualified_id)?
        };
        Ok(Self {
            unified,
            non_qualified,
            unified_id,
            non_qualified_id,
        })
    }
}

/// Accumulates validated entries while enforcing glyph uniqueness.
struct EntryBuilder<'r> {
    registry: &'r dyn HandleRegistry,
    seen_glyphs: HashSet<String>,
    entries: Vec<EmojiEntry>,
    summary: LoadSummary,
}

impl<'r> EntryBuilder<'r> {
    fn new(registry: &'r dyn HandleRegistry) -> Self {
        Self {
            registry,
            seen_glyphs: HashSet::new(),
            entries: Vec::new(),
            summary: LoadSummary::default(),
        }
    }

    fn push_record(&mut self, index: usize, value: serde_json::Value) {
        match self.build_entry(value) {
            Ok(entry) => {
                self.summary.loaded += 1;
                self.summary.variations += entry.variations.len();
                self.entries.push(entry);
            }
            Err(err) => {
                warn!(index, error = %err, "Skipping emoji record");
                self.summary.skipped += 1;
            }
        }
    }

    fn build_entry(&mut self, value: serde_json::Value) -> Result<EmojiEntry, RecordError> {
        let record: EmojiRecord = serde_json::from_value(value).map_err(RecordError::Shape)?;
        let glyphs = Glyphs::decode(&record.unified, record.non_qualified.as_deref())?;

        let short_codes: Vec<String> = record
            .short_names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if short_codes.is_empty() {
            return Err(RecordError::MissingShortNames {
                unified_id: glyphs.unified_id,
            });
        }
        self.reserve(&glyphs)?;

        let category = record.category.unwrap_or_default();
        let mut variations = Vec::with_capacity(record.skin_variations.len());
        for (tone_key, variation) in &record.skin_variations {
            match self.build_variation(&short_codes, &category, tone_key, variation) {
                Ok(entry) => variations.push(entry),
                Err(err) => {
                    warn!(
                        parent = %glyphs.unified_id,
                        tone = %tone_key,
                        error = %err,
                        "Skipping emoji variation"
                    );
                    self.summary.skipped += 1;
                }
            }
        }

        Ok(self.finish(glyphs, short_codes, category, record.images.styles(), variations))
    }

    fn build_variation(
        &mut self,
        parent_short_codes: &[String],
        category: &str,
        tone_key: &str,
        record: &VariationRecord,
    ) -> Result<EmojiEntry, RecordError> {
        let suffix = tone_suffix(tone_key)?;
        let glyphs = Glyphs::decode(&record.unified, record.non_qualified.as_deref())?;
        self.reserve(&glyphs)?;

        let short_codes = parent_short_codes
            .iter()
            .map(|code| format!("{code}_{suffix}"))
            .collect();
        Ok(self.finish(
            glyphs,
            short_codes,
            category.to_string(),
            record.images.styles(),
            Vec::new(),
        ))
    }

    fn reserve(&mut self, glyphs: &Glyphs) -> Result<(), RecordError> {
        if !self.seen_glyphs.insert(glyphs.unified.clone()) {
            return Err(RecordError::DuplicateGlyph {
                unified_id: glyphs.unified_id.clone(),
            });
        }
        Ok(())
    }

    fn finish(
        &self,
        glyphs: Glyphs,
        short_codes: Vec<String>,
        category: String,
        styles: EmojiStyles,
        variations: Vec<EmojiEntry>,
    ) -> EmojiEntry {
        let handle = self.registry.handle_for(&HandleRequest {
            unified: &glyphs.unified,
            unified_id: &glyphs.unified_id,
            styles,
        });
        EmojiEntry {
            unified: glyphs.unified,
            non_qualified: glyphs.non_qualified,
            unified_id: glyphs.unified_id,
            non_qualified_id: glyphs.non_qualified_id,
            short_codes,
            category,
            styles,
            variations,
            handle,
        }
    }
}

fn parse_definitions(
    json: &str,
    origin: &str,
    registry: &dyn HandleRegistry,
) -> Result<EmojiCatalog, CatalogError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let mut builder = EntryBuilder::new(registry);
    for (index, value) in records.into_iter().enumerate() {
        builder.push_record(index, value);
    }

    let summary = builder.summary;
    debug!(
        origin,
        loaded = summary.loaded,
        variations = summary.variations,
        skipped = summary.skipped,
        "Loaded emoji definitions"
    );
    Ok(EmojiCatalog::from_entries(builder.entries, summary))
}

impl EmojiCatalog {
    /// Load the catalog described by `config`.
    ///
    /// Reads `definitions_path` when configured, the bundled definitions
    /// otherwise, and mints handles with the configured registry. On error
    /// callers are expected to continue with [`EmojiCatalog::empty`].
    pub fn load(config: &EmojiConfig) -> Result<Self, CatalogError> {
        let registry = config.registry();
        match &config.definitions_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| {
                    warn!(
                        path = %path.display(),
                        error = %source,
                        "Emoji definitions unavailable"
                    );
                    CatalogError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                parse_definitions(&json, &path.display().to_string(), registry.as_ref())
            }
            None => parse_definitions(BUNDLED_DEFINITIONS, BUNDLED_ORIGIN, registry.as_ref()),
        }
    }

    /// Load the bundled definitions with unified ids as handles.
    pub fn load_bundled() -> Result<Self, CatalogError> {
        parse_definitions(BUNDLED_DEFINITIONS, BUNDLED_ORIGIN, &UnifiedIdRegistry)
    }

    /// Build a catalog from an in-memory definition document.
    pub fn from_json_str(json: &str, registry: &dyn HandleRegistry) -> Result<Self, CatalogError> {
        parse_definitions(json, "in-memory emoji definitions", registry)
    }
}
