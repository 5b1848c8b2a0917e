use crate::{context::SchemaOptions, syntax::SyntaxViolation};

const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];
const JFIF_MARKER: u8 = 0xE0;
const EXIF_MARKER: u8 = 0xE1;
const HEADER_LENGTH: usize = 10;

/// JFIF or Exif header: `FF D8 FF (E0|E1) ?? ?? ("JFIF"|"Exif")`.
pub(super) fn check_jpeg(value: &[u8], options: &SchemaOptions) -> Result<(), SyntaxViolation> {
    if options.allow_malformed_jpeg_photos {
        return Ok(());
    }

    let recognised = value.len() >= HEADER_LENGTH
        && value[..3] == JPEG_SOI
        && match value[3] {
            JFIF_MARKER => &value[6..HEADER_LENGTH] == b"JFIF",
            EXIF_MARKER => &value[6..HEADER_LENGTH] == b"Exif",
            _ => false,
        };

    if recognised {
        Ok(())
    } else {
        Err(SyntaxViolation::new(
            "value does not start with a JFIF or Exif JPEG header",
        ))
    }
}
