//! Emoji recognition and `:shortcode:` substitution for chabeau's chat view.
//!
//! The crate is organized around one immutable catalog:
//! - [`emoji::loader`] parses emoji definitions (bundled or from disk) into an
//!   [`EmojiCatalog`], expanding skin-tone variations and skipping bad records.
//! - [`emoji::catalog`] owns the entries and the short code and first-character
//!   indices built from them.
//! - [`emoji::shortcode`] rewrites typed `:penguin:` tokens into glyphs before
//!   a message is sent.
//! - [`emoji::scanner`] splits incoming text into plain runs and emoji
//!   references for rendering.
//! - [`config`] reads the TOML settings that pick the definitions file and
//!   how rendering handles are minted.
//!
//! A host builds the catalog once at startup and shares it:
//!
//! ```
//! use chabeau_emoji::{EmojiCatalog, EmojiConfig};
//!
//! let catalog = EmojiCatalog::load(&EmojiConfig::default())
//!     .unwrap_or_else(|_| EmojiCatalog::empty());
//! let outgoing = catalog.replace_short_codes("ship it :rocket:");
//! assert_eq!(catalog.emote_count(&outgoing), 1);
//! ```

pub mod config;
pub mod emoji;

pub use config::EmojiConfig;
pub use emoji::{EmojiCatalog, EmojiEntry, EmoteHandle, EmoteRef, Segment};
