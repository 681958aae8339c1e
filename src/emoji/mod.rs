pub mod catalog;
pub mod entry;
pub mod handle;
pub mod loader;
pub mod scanner;
pub mod shortcode;

#[cfg(test)]
mod test_fixtures;

pub use catalog::EmojiCatalog;
pub use entry::{EmojiEntry, EmojiSet, EmojiStyles};
pub use handle::{EmoteHandle, HandleRegistry, HandleRequest, ImageUrlRegistry, UnifiedIdRegistry};
pub use loader::{CatalogError, LoadSummary, RecordError};
pub use scanner::{EmoteRef, Segment, Segments, Utf16Segment};
