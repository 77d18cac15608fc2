use crate::error::{Result, UtilError};
use crate::record::{FastaEntry, SequenceRecord};

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Identifier given to the single record of a file which has no `>` headers.
pub const UNKNOWN_ID: &str = "unknown_id";

/// Output formats understood by `write_to_file`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `>id` header line followed by the sequence on one line
    #[default]
    Fasta,
}

impl FromStr for OutputFormat {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fasta" => Ok(OutputFormat::Fasta),
            _ => Err(UtilError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Fasta => f.write_str("fasta"),
        }
    }
}

/// Parses FASTA text into records, in order of appearance.
///
/// If the text has no `>` at all, the whole text is treated as one record named
/// `UNKNOWN_ID` whose sequence is every line joined together. Otherwise each `>`-delimited
/// block becomes a record: the first line is the id (kept verbatim, spaces included) and
/// everything after it is joined with all whitespace removed. Text before the first `>` is
/// ignored, as are empty blocks. Sequence characters are not validated.
///
/// # Example
///
/// ```
/// use bioutils::io::parse_fasta;
///
/// let records = parse_fasta(">desc1\nAGTAG\nTAGG\n>desc2\nAACG\n");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].id, "desc1");
/// assert_eq!(records[0].sequence, "AGTAGTAGG");
/// ```
pub fn parse_fasta(text: &str) -> Vec<SequenceRecord> {
    if !text.contains('>') {
        return vec![SequenceRecord::new(UNKNOWN_ID, text.lines().collect::<String>())];
    }

    text.split('>')
        .skip(1)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let (header, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
            let id = header.strip_suffix('\r').unwrap_or(header);
            SequenceRecord::new(id, body.split_whitespace().collect::<String>())
        })
        .collect()
}

/// Reads a FASTA file into a vector of records. See `parse_fasta` for the parsing rules.
///
/// The whole file is read into memory. A missing path is reported with a warning before the
/// read is attempted, so the caller still receives the classified error.
///
/// # Errors
///
/// * `UtilError::NotFound` if the file does not exist
/// * `UtilError::PermissionDenied` if it cannot be opened
/// * `UtilError::MalformedContent` if it is not valid UTF-8
/// * `UtilError::Io` for any other read failure
pub fn fasta_to_records(path: impl AsRef<Path>) -> Result<Vec<SequenceRecord>> {
    let path = path.as_ref();
    if !path.is_file() {
        warn!("File {} does not exist.", path.display());
    }

    let text = std::fs::read_to_string(path).map_err(|e| UtilError::from_io(e, path))?;
    let records = parse_fasta(&text);
    debug!("Parsed {} records from {}", records.len(), path.display());

    Ok(records)
}

/// Writes each record as a `>{id}\n{sequence}\n` block to `writer`, in order.
///
/// # Arguments
///
/// * `writer` - Any `std::io::Write`. Since this is *not* `std::fmt::Write`, use a
///   `std::io::Cursor` to collect the output in memory.
/// * `records` - Values providing an id and a sequence.
///
/// # Errors
///
/// Returns `UtilError::MalformedRecord` for the first record without both fields. Records
/// before it will already have been written.
pub fn write_fasta<W: Write, R: FastaEntry>(writer: &mut W, records: &[R]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let (id, sequence) = record
            .fasta_fields()
            .ok_or(UtilError::MalformedRecord { index })?;
        writeln!(writer, ">{id}\n{sequence}")?;
    }
    Ok(())
}

/// Writes `records` to `filename` in the given `format`, replacing any existing file.
///
/// All inputs are checked before the destination is opened, so a rejected call leaves an
/// existing file untouched.
///
/// # Errors
///
/// * `UtilError::EmptyRecords` if `records` is empty
/// * `UtilError::MissingFilename` if `filename` is empty
/// * `UtilError::MalformedRecord` if a record does not provide both an id and a sequence
/// * `UtilError::NotFound`, `UtilError::PermissionDenied` or `UtilError::Io` if the file
///   cannot be created or written
pub fn write_to_file<R: FastaEntry>(
    records: &[R],
    filename: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let filename = filename.as_ref();

    if records.is_empty() {
        return Err(UtilError::EmptyRecords);
    }
    if filename.as_os_str().is_empty() {
        return Err(UtilError::MissingFilename);
    }
    if let Some(index) = records.iter().position(|r| r.fasta_fields().is_none()) {
        return Err(UtilError::MalformedRecord { index });
    }

    let file = File::create(filename).map_err(|e| UtilError::from_io(e, filename))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Fasta => write_fasta(&mut writer, records)?,
    }
    writer.flush().map_err(|e| UtilError::from_io(e, filename))?;

    info!(
        "Wrote {} records to {} ({format})",
        records.len(),
        filename.display()
    );
    Ok(())
}
