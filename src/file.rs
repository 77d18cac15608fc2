use crate::error::{Result, UtilError};

use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns the files matching `extension`.
///
/// # Arguments
///
/// * `input` - Either a directory, whose immediate entries are searched, or a single file.
/// * `extension` - A literal suffix of the file name. This is not a dot-qualified extension
///   check, so `"fa"` also matches `"alfa"`.
///
/// # Returns
///
/// The matching paths, sorted. For a directory they are `input` joined with each name.
///
/// # Errors
///
/// * `UtilError::InvalidInput` if `input` is neither a file nor a directory
/// * `UtilError::NotFound` if nothing matches
pub fn filename_by_extension(input: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let input = input.as_ref();
    let mut files = Vec::new();

    if input.is_dir() {
        for entry in std::fs::read_dir(input).map_err(|e| UtilError::from_io(e, input))? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy().ends_with(extension) {
                files.push(input.join(entry.file_name()));
            }
        }
        files.sort();
    } else if input.is_file() {
        if input.to_string_lossy().ends_with(extension) {
            files.push(input.to_path_buf());
        }
    } else {
        return Err(UtilError::InvalidInput(format!(
            "No such input found: {}",
            input.display()
        )));
    }

    if files.is_empty() {
        return Err(UtilError::NotFound(input.join(format!("*{extension}"))));
    }

    Ok(files)
}

/// Splits the final component of `path` into its base name and extension.
///
/// The extension keeps its leading dot and is empty when the name has none. A name which only
/// starts with a dot, such as `.bashrc`, has no extension.
///
/// # Example
///
/// ```
/// use bioutils::file::extract_filename;
///
/// let (name, ext) = extract_filename("/a/b/one_sequence.fa");
/// assert_eq!((name.as_str(), ext.as_str()), ("one_sequence", ".fa"));
/// ```
pub fn extract_filename(path: impl AsRef<Path>) -> (String, String) {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(i) if name[..i].chars().any(|c| c != '.') => {
            (name[..i].to_string(), name[i..].to_string())
        }
        _ => (name, String::new()),
    }
}

/// Runs an external gzip-compatible program on files in place.
#[derive(Clone, Debug)]
pub struct Compressor {
    /// The program to execute, looked up on `PATH` if it is not a path
    pub program: String,
}

impl Default for Compressor {
    fn default() -> Self {
        Compressor {
            program: String::from("gzip"),
        }
    }
}

impl Compressor {
    pub fn new(program: impl Into<String>) -> Self {
        Compressor {
            program: program.into(),
        }
    }

    /// Compresses `path` with `<program> -f <path>`, replacing it with `<path>.gz`.
    ///
    /// # Errors
    ///
    /// * `UtilError::CompressorUnavailable` if the program cannot be started
    /// * `UtilError::CompressionFailed` if it exits with a non-zero status
    pub fn compress(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let output = Command::new(&self.program)
            .arg("-f")
            .arg(path)
            .output()
            .map_err(|source| UtilError::CompressorUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(UtilError::CompressionFailed {
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let mut compressed = path.as_os_str().to_owned();
        compressed.push(".gz");
        info!("{} has been gzipped.", path.display());

        Ok(PathBuf::from(compressed))
    }
}

/// Compresses `path` in place using `gzip -f`. See `Compressor::compress`.
pub fn compress_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    Compressor::default().compress(path)
}
