//! Splitting chat text into plain text and emoji references.
//!
//! Scanning is greedy: at every position the longest catalog glyph that
//! fully matches wins. Candidate lists come pre-sorted from the catalog, so
//! the first full match is the longest one.
//!
//! # Examples
//!
//! ```
//! use chabeau_emoji::{EmojiCatalog, Segment};
//!
//! let catalog = EmojiCatalog::load_bundled().unwrap();
//! let segments: Vec<Segment> = catalog.parse("hi 🐧!").collect();
//!
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[0], Segment::Text("hi "));
//! assert_eq!(segments[1].emote().unwrap().entry().short_codes()[0], "penguin");
//! assert_eq!(segments[2], Segment::Text("!"));
//! ```

use std::iter::FusedIterator;

use crate::emoji::catalog::EmojiCatalog;
use crate::emoji::entry::EmojiEntry;
use crate::emoji::handle::EmoteHandle;

/// An emoji found in scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmoteRef<'c, 't> {
    entry: &'c EmojiEntry,
    glyph: &'t str,
}

impl<'c, 't> EmoteRef<'c, 't> {
    pub fn entry(&self) -> &'c EmojiEntry {
        self.entry
    }

    /// The exact text that matched, either the unified or the non-qualified
    /// spelling.
    pub fn glyph(&self) -> &'t str {
        self.glyph
    }

    pub fn handle(&self) -> &'c EmoteHandle {
        &self.entry.handle
    }
}

/// One piece of scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'c, 't> {
    Text(&'t str),
    Emote(EmoteRef<'c, 't>),
}

impl<'c, 't> Segment<'c, 't> {
    /// The slice of the input this segment covers.
    pub fn as_str(&self) -> &'t str {
        match *self {
            Segment::Text(text) => text,
            Segment::Emote(emote) => emote.glyph,
        }
    }

    pub fn emote(&self) -> Option<&EmoteRef<'c, 't>> {
        match self {
            Segment::Emote(emote) => Some(emote),
            Segment::Text(_) => None,
        }
    }

    pub fn is_emote(&self) -> bool {
        matches!(self, Segment::Emote(_))
    }
}

/// One piece of scanned UTF-16 text.
///
/// Both variants borrow the caller's code units, unpaired surrogates
/// included, so joining [`Utf16Segment::units`] of every segment rebuilds the
/// input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Segment<'c, 'u> {
    Text(&'u [u16]),
    Emote {
        entry: &'c EmojiEntry,
        units: &'u [u16],
    },
}

impl<'c, 'u> Utf16Segment<'c, 'u> {
    pub fn units(&self) -> &'u [u16] {
        match *self {
            Utf16Segment::Text(units) => units,
            Utf16Segment::Emote { units, .. } => units,
        }
    }

    pub fn entry(&self) -> Option<&'c EmojiEntry> {
        match *self {
            Utf16Segment::Emote { entry, .. } => Some(entry),
            Utf16Segment::Text(_) => None,
        }
    }

    pub fn is_emote(&self) -> bool {
        matches!(self, Utf16Segment::Emote { .. })
    }
}

/// Lazy iterator over the segments of a text.
///
/// Clones are independent: a clone taken before iteration replays the whole
/// text, and calling [`EmojiCatalog::parse`] again always starts over.
#[derive(Debug, Clone)]
pub struct Segments<'c, 't> {
    catalog: &'c EmojiCatalog,
    text: &'t str,
    cursor: usize,
    run_start: usize,
    queued: Option<EmoteRef<'c, 't>>,
}

impl<'c, 't> Segments<'c, 't> {
    fn match_at(&self, rest: &'t str, first: char) -> Option<EmoteRef<'c, 't>> {
        let catalog = self.catalog;
        catalog.candidates(first).iter().find_map(|candidate| {
            let entry = catalog.resolve(candidate.key);
            let glyph = entry.glyph(candidate.form);
            rest.starts_with(glyph).then(|| EmoteRef {
                entry,
                glyph: &rest[..glyph.len()],
            })
        })
    }

    fn take_run(&mut self, end: usize) -> Option<&'t str> {
        let run = &self.text[self.run_start..end];
        self.run_start = end;
        (!run.is_empty()).then_some(run)
    }
}

impl<'c, 't> Iterator for Segments<'c, 't> {
    type Item = Segment<'c, 't>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(emote) = self.queued.take() {
            return Some(Segment::Emote(emote));
        }

        while let Some(first) = self.text[self.cursor..].chars().next() {
            let start = self.cursor;
            let rest = &self.text[start..];
            match self.match_at(rest, first) {
                Some(emote) => {
                    self.cursor += emote.glyph.len();
                    let run = self.take_run(start);
                    self.run_start = self.cursor;
                    return match run {
                        Some(run) => {
                            self.queued = Some(emote);
                            Some(Segment::Text(run))
                        }
                        None => Some(Segment::Emote(emote)),
                    };
                }
                // No candidate, or none matched in full: this char is text.
                None => self.cursor += first.len_utf8(),
            }
        }

        self.take_run(self.text.len()).map(Segment::Text)
    }
}

impl FusedIterator for Segments<'_, '_> {}

impl EmojiCatalog {
    /// Split `text` into plain text runs and emoji references, left to right.
    ///
    /// The segments cover the input exactly: joining [`Segment::as_str`] of
    /// every segment reproduces `text`.
    pub fn parse<'c, 't>(&'c self, text: &'t str) -> Segments<'c, 't> {
        Segments {
            catalog: self,
            text,
            cursor: 0,
            run_start: 0,
            queued: None,
        }
    }

    /// Scan UTF-16 text without decoding it lossily.
    ///
    /// Each well-formed stretch between unpaired surrogates is matched like
    /// [`EmojiCatalog::parse`] would. An unpaired surrogate is a single unit
    /// of plain text and never starts or continues a match.
    pub fn parse_utf16<'c, 'u>(&'c self, units: &'u [u16]) -> Vec<Utf16Segment<'c, 'u>> {
        let mut scan = Utf16Scan {
            catalog: self,
            units,
            run_start: 0,
            segments: Vec::new(),
        };
        let mut chunk = String::new();
        let mut chunk_start = 0;
        let mut offset = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(c) => {
                    chunk.push(c);
                    offset += c.len_utf16();
                }
                Err(_) => {
                    scan.scan_chunk(chunk_start, &chunk);
                    chunk.clear();
                    offset += 1;
                    chunk_start = offset;
                }
            }
        }
        scan.scan_chunk(chunk_start, &chunk);
        scan.finish()
    }

    /// Number of emoji references in `text`.
    pub fn emote_count(&self, text: &str) -> usize {
        self.parse(text).filter(Segment::is_emote).count()
    }
}

/// Accumulates [`Utf16Segment`]s, folding plain text and unpaired
/// surrogates into shared runs.
struct Utf16Scan<'c, 'u> {
    catalog: &'c EmojiCatalog,
    units: &'u [u16],
    run_start: usize,
    segments: Vec<Utf16Segment<'c, 'u>>,
}

impl<'c, 'u> Utf16Scan<'c, 'u> {
    /// Match `chunk`, the decoded form of the well-formed units starting at
    /// `start`.
    fn scan_chunk(&mut self, start: usize, chunk: &str) {
        let (catalog, units) = (self.catalog, self.units);
        let mut pos = start;
        for segment in catalog.parse(chunk) {
            let len: usize = segment.as_str().chars().map(char::len_utf16).sum();
            if let Segment::Emote(emote) = segment {
                self.flush_run(pos);
                self.segments.push(Utf16Segment::Emote {
                    entry: emote.entry(),
                    units: &units[pos..pos + len],
                });
                self.run_start = pos + len;
            }
            pos += len;
        }
    }

    fn flush_run(&mut self, end: usize) {
        let units = self.units;
        if self.run_start < end {
            self.segments.push(Utf16Segment::Text(&units[self.run_start..end]));
        }
        self.run_start = end;
    }

    fn finish(mut self) -> Vec<Utf16Segment<'c, 'u>> {
        self.flush_run(self.units.len());
        self.segments
    }
}
