use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha224};

use crate::record::SequenceInfo;

/// Length of a generated `sequence_id`.
pub const SEQUENCE_ID_LEN: usize = 32;

/// Lowercase hex SHA-224 digest of the UTF-8 bytes of `input`.
pub fn generate_hash(input: &str) -> String {
    format!("{:x}", Sha224::digest(input.as_bytes()))
}

/// Bundles a raw sequence with a freshly generated identifier and its hash.
///
/// The identifier is drawn from the thread-local RNG, which is not cryptographically secure.
/// See `generate_sequence_info_with_rng` for the details of the returned record.
pub fn generate_sequence_info(sequence: &str, description: Option<&str>) -> SequenceInfo {
    generate_sequence_info_with_rng(&mut rand::thread_rng(), sequence, description)
}

/// Bundles a raw sequence with an identifier drawn from `rng`.
///
/// * `sequence_id` is `SEQUENCE_ID_LEN` characters chosen uniformly from `[A-Za-z0-9]`
/// * `hash_id` is the hash of `sequence_id`, not of the sequence
/// * `sequence` has all whitespace removed
/// * `description` is always `None`; a supplied description is dropped
pub fn generate_sequence_info_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    sequence: &str,
    description: Option<&str>,
) -> SequenceInfo {
    let sequence_id: String = rng
        .sample_iter(&Alphanumeric)
        .take(SEQUENCE_ID_LEN)
        .map(char::from)
        .collect();

    if let Some(d) = description {
        debug!("Discarding description '{d}' for {sequence_id}");
    }

    SequenceInfo {
        hash_id: generate_hash(&sequence_id),
        sequence_id,
        description: None,
        sequence: sequence.split_whitespace().collect(),
    }
}
