pub mod alphabet;
pub mod id;
pub mod tm;
pub mod transform;

pub use self::alphabet::{
    ambiguous_dna_letters, extended_dna_letters, extended_protein_letters, is_valid_dna,
    protein_letters, unambiguous_dna_letters,
};
pub use self::id::{generate_hash, generate_sequence_info, generate_sequence_info_with_rng};
pub use self::tm::{melting_temperature, melting_temperature_with, TmParams};
pub use self::transform::{complement, gc_content, reverse, reverse_complement};
