//! IUPAC alphabets for nucleotide and protein sequences.

use bio::alphabets::Alphabet;

pub const UNAMBIGUOUS_DNA: &str = "GATC";
pub const AMBIGUOUS_DNA: &str = "GATCRYWSMKHBVDN";
pub const EXTENDED_DNA: &str = "GATCBDSW";
pub const PROTEIN: &str = "ACDEFGHIKLMNPQRSTVWY";
pub const EXTENDED_PROTEIN: &str = "ACDEFGHIKLMNPQRSTVWYBXZJUO";

/// Uppercase IUPAC unambiguous DNA (letters GATC only).
pub fn unambiguous_dna_letters() -> &'static str {
    UNAMBIGUOUS_DNA
}

/// Uppercase IUPAC ambiguous DNA.
pub fn ambiguous_dna_letters() -> &'static str {
    AMBIGUOUS_DNA
}

/// Extended IUPAC DNA alphabet.
///
/// In addition to GATC this includes:
/// * `B` = 5-bromouridine
/// * `D` = 5,6-dihydrouridine
/// * `S` = thiouridine
/// * `W` = wyosine
pub fn extended_dna_letters() -> &'static str {
    EXTENDED_DNA
}

/// IUPAC protein alphabet of the 20 standard amino acids.
pub fn protein_letters() -> &'static str {
    PROTEIN
}

/// Extended uppercase IUPAC protein alphabet.
///
/// In addition to the 20 standard residues this includes:
/// * `B` = Asx, aspartic acid or asparagine
/// * `X` = Xxx, unknown or other amino acid
/// * `Z` = Glx, glutamic acid or glutamine
/// * `J` = Xle, leucine or isoleucine
/// * `U` = Sec, selenocysteine
/// * `O` = Pyl, pyrrolysine
pub fn extended_protein_letters() -> &'static str {
    EXTENDED_PROTEIN
}

/// Returns `true` if every character of `sequence` is one of `A`, `T`, `G` or `C`.
///
/// The check is case-sensitive: lowercase bases and ambiguity codes are rejected. An empty
/// sequence is considered valid.
pub fn is_valid_dna(sequence: &str) -> bool {
    let alphabet = Alphabet::new(UNAMBIGUOUS_DNA.as_bytes());
    alphabet.is_word(sequence.as_bytes())
}
