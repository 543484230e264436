//! Text encodings supported for `.strings` files.
//!
//! Xcode's `genstrings` writes UTF-16 with a byte-order mark, which is why
//! [`TextEncoding::Utf16Le`] is the default. UTF-8 is accepted as well.

use std::{
    fmt::{Display, Formatter},
    path::Path,
};

use encoding_rs::Encoding;

use crate::error::Error;

/// Encoding of a strings file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf16Le,
    /// Only produced by BOM detection.
    Utf16Be,
    Utf8,
}

impl TextEncoding {
    /// Picks the encoding for the common `--utf8` switch.
    pub fn from_utf8_flag(utf8: bool) -> Self {
        if utf8 {
            TextEncoding::Utf8
        } else {
            TextEncoding::Utf16Le
        }
    }

    fn as_encoding_rs(self) -> &'static Encoding {
        match self {
            TextEncoding::Utf16Le => encoding_rs::UTF_16LE,
            TextEncoding::Utf16Be => encoding_rs::UTF_16BE,
            TextEncoding::Utf8 => encoding_rs::UTF_8,
        }
    }

    fn from_encoding_rs(encoding: &'static Encoding) -> Self {
        if encoding == encoding_rs::UTF_16BE {
            TextEncoding::Utf16Be
        } else if encoding == encoding_rs::UTF_16LE {
            TextEncoding::Utf16Le
        } else {
            TextEncoding::Utf8
        }
    }
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TextEncoding::Utf16Le => write!(f, "UTF-16LE"),
            TextEncoding::Utf16Be => write!(f, "UTF-16BE"),
            TextEncoding::Utf8 => write!(f, "UTF-8"),
        }
    }
}

/// Decoded file contents along with what is needed to write them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// The effective encoding. A BOM overrides the requested one.
    pub encoding: TextEncoding,
    pub bom: bool,
}

/// Decodes raw file bytes.
///
/// Malformed input is an error rather than being replaced with U+FFFD, since
/// the file is rewritten afterwards.
pub fn decode(bytes: &[u8], requested: TextEncoding, path: &Path) -> Result<Decoded, Error> {
    let (encoding, bom_len) = match Encoding::for_bom(bytes) {
        Some((encoding, len)) => (TextEncoding::from_encoding_rs(encoding), len),
        None => (requested, 0),
    };

    let (text, had_errors) = encoding
        .as_encoding_rs()
        .decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        return Err(Error::Decode {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        });
    }

    Ok(Decoded {
        text: text.into_owned(),
        encoding,
        bom: bom_len > 0,
    })
}

/// Encodes text, prefixing a BOM when asked to.
pub fn encode(text: &str, encoding: TextEncoding, bom: bool) -> Vec<u8> {
    // encoding_rs has no UTF-16 encoder, so the code units are laid out by hand.
    match encoding {
        TextEncoding::Utf8 => {
            let mut bytes = Vec::with_capacity(text.len() + 3);
            if bom {
                bytes.extend_from_slice(&[0xEF, 0xBB, 0xBF]);
            }
            bytes.extend_from_slice(text.as_bytes());
            bytes
        }
        TextEncoding::Utf16Le => {
            let mut bytes = Vec::with_capacity(text.len() * 2 + 2);
            if bom {
                bytes.extend_from_slice(&[0xFF, 0xFE]);
            }
            bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
            bytes
        }
        TextEncoding::Utf16Be => {
            let mut bytes = Vec::with_capacity(text.len() * 2 + 2);
            if bom {
                bytes.extend_from_slice(&[0xFE, 0xFF]);
            }
            bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
            bytes
        }
    }
}
