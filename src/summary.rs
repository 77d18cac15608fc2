use crate::record::SequenceRecord;
use crate::seq;

use serde::Serialize;

/// Per-record statistics reported by the `stats` command.
#[derive(Serialize, Debug, PartialEq)]
pub struct RecordSummary {
    pub id: String,
    pub length: usize,
    pub valid_dna: bool,
    /// Absent for empty sequences
    pub gc_content: Option<f64>,
    /// Only computed for non-empty, valid DNA
    pub melting_temperature: Option<f64>,
    pub hash: String,
}

/// Summarises each record.
///
/// # Arguments
///
/// * `records` - The parsed records, in file order.
///
/// # Returns
///
/// One `RecordSummary` per record, in the same order.
pub fn summarize(records: &[SequenceRecord]) -> Vec<RecordSummary> {
    records
        .iter()
        .map(|record| {
            let valid_dna = seq::is_valid_dna(&record.sequence);
            let melting_temperature = if valid_dna {
                seq::melting_temperature(&record.sequence).ok()
            } else {
                None
            };

            RecordSummary {
                id: record.id.clone(),
                length: record.sequence.chars().count(),
                valid_dna,
                gc_content: seq::gc_content(&record.sequence).ok(),
                melting_temperature,
                hash: seq::generate_hash(&record.sequence),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries() {
        let records = vec![
            SequenceRecord::new("dna", "GGCCAATT"),
            SequenceRecord::new("protein", "MKVLLA"),
            SequenceRecord::new("empty", ""),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].gc_content, Some(50.0));
        assert!(summary[0].valid_dna);
        assert!(summary[0].melting_temperature.is_some());

        assert!(!summary[1].valid_dna);
        assert_eq!(summary[1].melting_temperature, None);

        // the empty string is valid DNA, but has no GC content or Tm
        assert!(summary[2].valid_dna);
        assert_eq!(summary[2].gc_content, None);
        assert_eq!(summary[2].melting_temperature, None);
    }
}
