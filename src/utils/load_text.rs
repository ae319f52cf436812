use crate::Error;
use log::debug;
use std::fs::File;
use std::io::Read;

/// Reads the entire contents of the file at `file_path` into memory.
///
/// The file handle is dropped before returning, on both the success and the
/// error path.
///
/// # Errors
/// * `Error::NotFound` if nothing exists at `file_path`.
/// * `Error::IoFailure` for any other read error, including content which is
///   not valid UTF-8.
pub fn load_text(file_path: &str) -> Result<String, Error> {
    debug!("Loading text from {:?}", file_path);

    let mut file = File::open(file_path).map_err(|err| Error::from_io(file_path, err))?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|err| Error::from_io(file_path, err))?;

    debug!("Loaded {} bytes from {:?}", text.len(), file_path);

    Ok(text)
}
