pub mod data;
pub mod io;

#[cfg(test)]
mod tests;

pub use data::EmojiConfig;
pub use io::ConfigError;
