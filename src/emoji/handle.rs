//! Rendering handles.
//!
//! The catalog never knows how an emoji is drawn. While loading it asks a
//! [`HandleRegistry`] for an [`EmoteHandle`] per entry and hands that handle
//! back to whoever consumes scanner output.

use std::fmt;
use std::sync::Arc;

use crate::emoji::entry::{EmojiSet, EmojiStyles};

/// Opaque key identifying how to render an emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmoteHandle(Arc<str>);

impl EmoteHandle {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmoteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a registry gets to see about an entry when minting its handle.
#[derive(Debug, Clone, Copy)]
pub struct HandleRequest<'a> {
    pub unified: &'a str,
    pub unified_id: &'a str,
    pub styles: EmojiStyles,
}

/// Source of rendering handles, consulted once per entry at load time.
pub trait HandleRegistry: Send + Sync {
    fn handle_for(&self, request: &HandleRequest<'_>) -> EmoteHandle;
}

/// Uses the unified id (`"1F427"`) as the handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedIdRegistry;

impl HandleRegistry for UnifiedIdRegistry {
    fn handle_for(&self, request: &HandleRequest<'_>) -> EmoteHandle {
        EmoteHandle::new(request.unified_id)
    }
}

/// Builds image URLs from a template containing `{set}` and `{code}`.
///
/// `{code}` expands to the lowercase unified id. When the preferred set has
/// no artwork for an emoji the first set in [`EmojiSet::ALL`] that does is
/// used instead.
#[derive(Debug, Clone)]
pub struct ImageUrlRegistry {
    template: String,
    preferred: EmojiSet,
}

impl ImageUrlRegistry {
    pub fn new(template: impl Into<String>, preferred: EmojiSet) -> Self {
        Self {
            template: template.into(),
            preferred,
        }
    }

    fn pick_set(&self, styles: EmojiStyles) -> EmojiSet {
        if styles.contains(self.preferred.style()) {
            return self.preferred;
        }
        EmojiSet::ALL
            .into_iter()
            .find(|set| styles.contains(set.style()))
            .unwrap_or(self.preferred)
    }
}

impl HandleRegistry for ImageUrlRegistry {
    fn handle_for(&self, request: &HandleRequest<'_>) -> EmoteHandle {
        let set = self.pick_set(request.styles);
        let url = self
            .template
            .replace("{set}", set.as_str())
            .replace("{code}", &request.unified_id.to_ascii_lowercase());
        EmoteHandle::new(url)
    }
}
