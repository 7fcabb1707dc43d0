//! Shared constants used across pastes crates.

/// Default base URL of the public store.
pub const DEFAULT_PUBLIC_URL: &str = "https://bytebin.lucko.me/";

/// Path segment that accepts new pastes on either store.
pub const POST_PATH_SEGMENT: &str = "post";

/// Language used when nothing better is known.
pub const DEFAULT_LANGUAGE: &str = "plain";

/// Header carrying the expiry in minutes on private-store saves.
pub const EXPIRY_HEADER: &str = "Expiry";

/// Encoding marker sent alongside compressed request bodies.
pub const GZIP_CONTENT_ENCODING: &str = "gzip";

/// Default editor font size.
pub const DEFAULT_FONT_SIZE: u8 = 16;
/// Smallest accepted editor font size.
pub const MIN_FONT_SIZE: u8 = 10;
/// Largest accepted editor font size.
pub const MAX_FONT_SIZE: u8 = 22;
