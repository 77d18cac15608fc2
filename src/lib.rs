//! Everyday helpers for sequence files: FASTA parsing and writing, DNA transforms, GC
//! content, melting temperature, identifier hashing and a few filesystem chores.

#[macro_use]
extern crate log;

pub mod enzymes;
pub mod error;
pub mod file;
pub mod io;
pub mod record;
pub mod seq;
pub mod summary;
pub mod timing;

pub use error::{Result, UtilError};
pub use record::{FastaEntry, SequenceInfo, SequenceRecord};
