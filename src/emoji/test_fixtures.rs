//! In-memory emoji definitions for tests.
//!
//! Small documents that exercise one loader or scanner behaviour each,
//! independent of whatever the bundled dataset happens to contain.

use crate::emoji::catalog::EmojiCatalog;
use crate::emoji::handle::UnifiedIdRegistry;

/// A handful of plain, tone-variant and ZWJ emoji.
pub const BASIC: &str = r#"[
  {"unified": "1F427", "short_names": ["penguin"], "category": "Animals & Nature",
   "has_img_apple": true, "has_img_google": true, "has_img_twitter": true, "has_img_facebook": true},
  {"unified": "2764-FE0F", "non_qualified": "2764", "short_names": ["heart"],
   "category": "Smileys & Emotion", "has_img_twitter": true},
  {"unified": "1F44D", "short_names": ["+1", "thumbsup"], "category": "People & Body",
   "has_img_twitter": true,
   "skin_variations": {
     "1F3FB": {"unified": "1F44D-1F3FB", "has_img_twitter": true},
     "1F3FF": {"unified": "1F44D-1F3FF", "has_img_twitter": true}
   }},
  {"unified": "1F468", "short_names": ["man"], "category": "People & Body", "has_img_twitter": true},
  {"unified": "1F469", "short_names": ["woman"], "category": "People & Body", "has_img_twitter": true},
  {"unified": "1F468-200D-2695-FE0F", "non_qualified": "1F468-200D-2695",
   "short_names": ["male-doctor"], "category": "People & Body", "has_img_twitter": true},
  {"unified": "1F468-200D-1F469-200D-1F466", "short_names": ["man-woman-boy"],
   "category": "People & Body", "has_img_twitter": true},
  {"unified": "1F1FA-1F1F8", "short_names": ["us", "flag-us"], "category": "Flags",
   "has_img_twitter": true}
]"#;

pub const BASIC_ENTRY_COUNT: usize = 8;

/// Three valid records around one whose `short_names` is not an array.
pub const WITH_MALFORMED_RECORD: &str = r#"[
  {"unified": "1F427", "short_names": ["penguin"]},
  {"unified": "1F98A", "short_names": "fox_face"},
  {"unified": "1F436", "short_names": ["dog"]},
  {"unified": "1F431", "short_names": ["cat"]}
]"#;

/// Two records that both claim the `smile` short code.
pub const COLLIDING_SHORT_CODES: &str = r#"[
  {"unified": "1F604", "short_names": ["smile", "happy"]},
  {"unified": "1F642", "short_names": ["smile", "slight_smile"]}
]"#;

pub fn basic_catalog() -> EmojiCatalog {
    EmojiCatalog::from_json_str(BASIC, &UnifiedIdRegistry).expect("fixture must parse")
}

pub fn bundled_catalog() -> EmojiCatalog {
    EmojiCatalog::load_bundled().expect("bundled definitions must parse")
}
