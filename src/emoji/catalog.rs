//! The immutable emoji catalog and its lookup indices.
//!
//! Entries live in one insertion-ordered arena of base emoji, each owning its
//! variations. Both indices store [`EntryKey`]s into that arena rather than
//! copies, so every lookup path resolves to the same entry.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::emoji::entry::{EmojiEntry, GlyphForm};
use crate::emoji::loader::LoadSummary;

/// Position of an entry: a base emoji, or one of its variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryKey {
    base: usize,
    variation: Option<usize>,
}

/// A glyph that may start at a given first `char`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) key: EntryKey,
    pub(crate) form: GlyphForm,
    /// Glyph length in bytes, cached for sorting.
    len: usize,
}

/// Emoji definitions plus the indices used by shortcode substitution and
/// text scanning.
///
/// The catalog never changes after construction, so one instance can be
/// shared across threads (behind an `Arc` or a plain reference) and queried
/// concurrently.
#[derive(Debug, Default)]
pub struct EmojiCatalog {
    emojis: Vec<EmojiEntry>,
    short_codes: Vec<String>,
    short_code_index: HashMap<String, EntryKey>,
    unified_id_index: HashMap<String, EntryKey>,
    first_char_index: HashMap<char, Vec<Candidate>>,
    summary: LoadSummary,
}

impl EmojiCatalog {
    /// A catalog with no entries. Substitution returns its input unchanged
    /// and scanning yields a single text span.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(emojis: Vec<EmojiEntry>, summary: LoadSummary) -> Self {
        let mut catalog = Self {
            emojis,
            summary,
            ..Self::default()
        };
        catalog.index_glyphs();
        catalog.sort_emojis();
        catalog.build_short_code_index();
        catalog
    }

    fn keys(&self) -> Vec<EntryKey> {
        let mut keys = Vec::new();
        for (base, entry) in self.emojis.iter().enumerate() {
            keys.push(EntryKey {
                base,
                variation: None,
            });
            keys.extend((0..entry.variations.len()).map(|variation| EntryKey {
                base,
                variation: Some(variation),
            }));
        }
        keys
    }

    fn index_glyphs(&mut self) {
        for key in self.keys() {
            let entry = self.resolve(key);
            let unified_id = entry.unified_id.clone();
            let mut forms = vec![(GlyphForm::Unified, entry.unified.clone())];
            if entry.non_qualified != entry.unified {
                forms.push((GlyphForm::NonQualified, entry.non_qualified.clone()));
            }

            self.unified_id_index.entry(unified_id).or_insert(key);
            for (form, glyph) in forms {
                let Some(first) = glyph.chars().next() else {
                    continue;
                };
                self.first_char_index
                    .entry(first)
                    .or_default()
                    .push(Candidate {
                        key,
                        form,
                        len: glyph.len(),
                    });
            }
        }
    }

    /// Order every candidate bucket longest glyph first. The sort is stable,
    /// so equal lengths keep catalog order.
    fn sort_emojis(&mut self) {
        for candidates in self.first_char_index.values_mut() {
            candidates.sort_by(|a, b| b.len.cmp(&a.len));
        }
    }

    /// Register every short code of every entry. A short code claimed twice
    /// resolves to the entry registered last.
    fn build_short_code_index(&mut self) {
        let mut listed = HashSet::new();
        for key in self.keys() {
            let entry = &self.emojis[key.base];
            let entry = match key.variation {
                Some(variation) => &entry.variations[variation],
                None => entry,
            };
            for code in &entry.short_codes {
                if let Some(previous) = self.short_code_index.insert(code.clone(), key) {
                    debug!(
                        short_code = %code,
                        previous = %self.resolve(previous).unified_id,
                        current = %entry.unified_id,
                        "Short code registered twice; keeping the later emoji"
                    );
                }
                if listed.insert(code.clone()) {
                    self.short_codes.push(code.clone());
                }
            }
        }
    }

    pub(crate) fn resolve(&self, key: EntryKey) -> &EmojiEntry {
        let base = &self.emojis[key.base];
        match key.variation {
            Some(variation) => &base.variations[variation],
            None => base,
        }
    }

    /// Candidates whose glyph starts with `first`, longest first.
    pub(crate) fn candidates(&self, first: char) -> &[Candidate] {
        self.first_char_index
            .get(&first)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Base emoji in load order. Variations hang off their parent.
    pub fn emojis(&self) -> &[EmojiEntry] {
        &self.emojis
    }

    /// Every registered short code in registration order, each listed once.
    pub fn short_codes(&self) -> &[String] {
        &self.short_codes
    }

    pub fn load_summary(&self) -> LoadSummary {
        self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// Look up a short code given without colons, e.g. `"penguin"`.
    pub fn entry_by_short_code(&self, short_code: &str) -> Option<&EmojiEntry> {
        self.short_code_index
            .get(short_code)
            .map(|key| self.resolve(*key))
    }

    /// Look up an entry (base or variation) by its unified id. Case-insensitive.
    pub fn entry_by_unified_id(&self, unified_id: &str) -> Option<&EmojiEntry> {
        self.unified_id_index
            .get(&unified_id.to_ascii_uppercase())
            .map(|key| self.resolve(*key))
    }

    /// Short codes starting with `prefix`, for input completion.
    ///
    /// Matching ignores case. An exact match comes first, then shorter codes
    /// before longer ones, then registration order. A leading `:` on the
    /// prefix is ignored.
    pub fn complete_short_code(&self, prefix: &str, limit: usize) -> Vec<(&str, &EmojiEntry)> {
        let prefix = prefix.strip_prefix(':').unwrap_or(prefix).to_lowercase();
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut matches: Vec<(bool, usize, &str)> = self
            .short_codes
            .iter()
            .enumerate()
            .filter_map(|(position, code)| {
                let lowered = code.to_lowercase();
                lowered
                    .starts_with(&prefix)
                    .then(|| (lowered != prefix, position, code.as_str()))
            })
            .collect();
        matches.sort_by_key(|(inexact, position, code)| (*inexact, code.len(), *position));

        matches
            .into_iter()
            .filter_map(|(_, _, code)| self.entry_by_short_code(code).map(|entry| (code, entry)))
            .take(limit)
            .collect()
    }
}
