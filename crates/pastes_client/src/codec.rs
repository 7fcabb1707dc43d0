//! Gzip compression for outgoing paste bodies.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

pub use pastes_core::GZIP_CONTENT_ENCODING as CONTENT_ENCODING;

/// Compress `text` into a gzip stream.
///
/// The header carries no timestamp or file name, so equal input always gives
/// equal output.
pub fn compress(text: &str) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::compress;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn decompress(bytes: &[u8]) -> String {
        let mut out = String::new();
        GzDecoder::new(bytes)
            .read_to_string(&mut out)
            .expect("valid gzip");
        out
    }

    #[test]
    fn output_is_gzip_and_lossless() {
        let text = "fn main() {\n    println!(\"héllo ✓\");\n}\n".repeat(50);
        let compressed = compress(&text).expect("compress");
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
        assert!(compressed.len() < text.len());
        assert_eq!(decompress(&compressed), text);
    }

    #[test]
    fn output_is_deterministic() {
        let text = "same input, same bytes";
        assert_eq!(
            compress(text).expect("first"),
            compress(text).expect("second")
        );
    }
}
