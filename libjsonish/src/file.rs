//! Reading and writing whole files.

use crate::encode::{encode, Format};
use crate::error::Error;
use crate::parser::ParseOptions;
use crate::Value;
use std::fs;
use std::path::Path;

/// Read a UTF-8 file and parse it with the permissive grammar.
///
/// The file name is attached to parse error locations. Use `.ok()` when a
/// missing or malformed file should simply mean "no value".
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value, Error> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Read a UTF-8 file and parse it with `options`.
///
/// When `options` carries no filename, the path is used.
pub fn parse_file_with_options(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Value, Error> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let options = if options.filename.is_some() {
        options.clone()
    } else {
        options.clone().filename(path.to_string_lossy())
    };

    Ok(crate::parse_with_options(&contents, &options)?)
}

/// Encode `value` and write it to `path`, truncating any existing file.
///
/// The output ends with a newline.
pub fn write_file(path: impl AsRef<Path>, value: &Value, format: Format) -> Result<(), Error> {
    let path = path.as_ref();
    log::debug!("writing {} ({:?})", path.display(), format);

    let mut output = encode(value, format);
    output.push('\n');

    fs::write(path, output).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
