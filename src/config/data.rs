use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::emoji::entry::EmojiSet;
use crate::emoji::handle::{HandleRegistry, ImageUrlRegistry, UnifiedIdRegistry};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct EmojiConfig {
    /// Preferred image set (e.g., "twitter", "apple", "google", "facebook")
    #[serde(default)]
    pub emoji_set: EmojiSet,
    /// Image URL template with `{set}` and `{code}` placeholders. When unset,
    /// handles are plain unified ids.
    pub image_url_template: Option<String>,
    /// Emoji definitions to load instead of the bundled set
    pub definitions_path: Option<PathBuf>,
}

impl EmojiConfig {
    /// The handle registry this configuration asks for.
    pub fn registry(&self) -> Box<dyn HandleRegistry> {
        match &self.image_url_template {
            Some(template) => Box::new(ImageUrlRegistry::new(template.clone(), self.emoji_set)),
            None => Box::new(UnifiedIdRegistry),
        }
    }
}
