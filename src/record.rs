use serde::{Deserialize, Serialize};

/// A single FASTA block: the header text after `>` and the joined sequence lines.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        SequenceRecord {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// A raw sequence bundled with a generated identifier. See `seq::generate_sequence_info`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct SequenceInfo {
    pub hash_id: String,
    pub sequence_id: String,
    pub description: Option<String>,
    pub sequence: String,
}

/// Anything which can be written out as a FASTA block.
///
/// `fasta_fields` returns the `(id, sequence)` pair, or `None` if the value does not carry
/// both of them.
pub trait FastaEntry {
    fn fasta_fields(&self) -> Option<(&str, &str)>;
}

impl FastaEntry for SequenceRecord {
    fn fasta_fields(&self) -> Option<(&str, &str)> {
        Some((&self.id, &self.sequence))
    }
}

impl FastaEntry for SequenceInfo {
    fn fasta_fields(&self) -> Option<(&str, &str)> {
        Some((&self.sequence_id, &self.sequence))
    }
}

/// JSON objects are accepted when they have string `id` and `sequence` keys.
impl FastaEntry for serde_json::Value {
    fn fasta_fields(&self) -> Option<(&str, &str)> {
        let map = self.as_object()?;
        let id = map.get("id")?.as_str()?;
        let sequence = map.get("sequence")?.as_str()?;
        Some((id, sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects() {
        let v = json!({"id": "seq1", "sequence": "ACGT", "extra": 1});
        assert_eq!(v.fasta_fields(), Some(("seq1", "ACGT")));
    }

    #[test]
    fn json_rejects_non_mappings() {
        assert_eq!(json!(["seq1", "ACGT"]).fasta_fields(), None);
        assert_eq!(json!({"id": "seq1"}).fasta_fields(), None);
        assert_eq!(json!({"id": 3, "sequence": "ACGT"}).fasta_fields(), None);
        assert_eq!(json!("ACGT").fasta_fields(), None);
    }

    #[test]
    fn sequence_info_uses_generated_id() {
        let info = SequenceInfo {
            hash_id: "h".into(),
            sequence_id: "abc".into(),
            description: None,
            sequence: "ACGT".into(),
        };
        assert_eq!(info.fasta_fields(), Some(("abc", "ACGT")));

        let value = serde_json::to_value(&info).unwrap();
        assert!(value["description"].is_null());
    }
}
