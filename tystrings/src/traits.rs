//! Traits for reading and writing strings files.

use std::{
    fs,
    io::{ErrorKind, Read, Write},
    path::Path,
};

use crate::{
    encoding::{self, Decoded, TextEncoding},
    error::Error,
};

/// A trait for parsing and writing a localization file.
///
/// Implementors only deal with decoded text; byte handling and BOM detection
/// live in the provided methods.
///
/// # Example
///
/// ```rust,no_run
/// use tystrings::{StringsFile, TextEncoding, traits::Parser};
/// let file = StringsFile::read_from("en.lproj/Localizable.strings", TextEncoding::Utf16Le)?;
/// file.write_to("en_copy.strings")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from already decoded text.
    fn from_decoded(decoded: Decoded) -> Self
    where
        Self: Sized;

    /// The text to write back and how to encode it.
    fn to_decoded(&self) -> Decoded;

    /// Parse from any reader.
    fn from_reader<R: Read>(mut reader: R, encoding: TextEncoding) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let decoded = encoding::decode(&bytes, encoding, Path::new("<reader>"))?;
        Ok(Self::from_decoded(decoded))
    }

    /// Parse from file path. A missing file parses as an empty one.
    fn read_from<P: AsRef<Path>>(path: P, encoding: TextEncoding) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // New UTF-16 files get a BOM, matching what genstrings writes.
                return Ok(Self::from_decoded(Decoded {
                    text: String::new(),
                    encoding,
                    bom: encoding != TextEncoding::Utf8,
                }));
            }
            Err(e) => return Err(Error::Io(e)),
        };
        let decoded = encoding::decode(&bytes, encoding, path)?;
        Ok(Self::from_decoded(decoded))
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let decoded = self.to_decoded();
        let bytes = encoding::encode(&decoded.text, decoded.encoding, decoded.bom);
        writer.write_all(&bytes).map_err(Error::Io)
    }

    /// Write to file path, replacing any existing content.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = fs::File::create(path)?;
        self.to_writer(file)
    }
}
