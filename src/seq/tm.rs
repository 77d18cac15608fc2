//! DNA/DNA melting temperature from nearest-neighbour thermodynamics.
//!
//! Enthalpy and entropy values are the unified parameters of SantaLucia (1998), with the
//! terminal corrections of Allawi & SantaLucia (1997), Biochemistry 36: 10581-10594.

use crate::error::{Result, UtilError};

/// Universal gas constant in cal/(K mol).
const R: f64 = 1.987;

/// Concentrations used by the melting temperature calculation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TmParams {
    /// DNA strand concentration, in nM
    pub dna_nm: f64,
    /// Monovalent salt concentration, in mM
    pub salt_mm: f64,
}

impl Default for TmParams {
    fn default() -> Self {
        TmParams {
            dna_nm: 50.0,
            salt_mm: 50.0,
        }
    }
}

/// (ΔH kcal/mol, ΔS cal/(K mol)) for a dinucleotide step, as positive magnitudes.
fn nearest_neighbour(pair: &[u8]) -> Option<(f64, f64)> {
    let v = match pair {
        b"AA" | b"TT" => (7.9, 22.2),
        b"AT" => (7.2, 20.4),
        b"TA" => (7.2, 21.3),
        b"CA" | b"TG" => (8.5, 22.7),
        b"GT" | b"AC" => (8.4, 22.4),
        b"CT" | b"AG" => (7.8, 21.0),
        b"GA" | b"TC" => (8.2, 22.2),
        b"CG" => (10.6, 27.2),
        b"GC" => (9.8, 24.4),
        b"GG" | b"CC" => (8.0, 19.9),
        _ => return None,
    };
    Some(v)
}

/// Initiation correction for one duplex end.
fn terminal_correction(base: u8) -> (f64, f64) {
    match base {
        b'G' | b'C' => (-0.1, 2.8),
        b'A' | b'T' => (-2.3, -4.1),
        _ => (0.0, 0.0),
    }
}

/// Melting temperature in °C using the default concentrations (50 nM DNA, 50 mM salt).
pub fn melting_temperature(sequence: &str) -> Result<f64> {
    melting_temperature_with(sequence, &TmParams::default())
}

/// Melting temperature in °C of a DNA/DNA duplex.
///
/// The sequence is upper-cased before use. Dinucleotide steps are counted with overlap;
/// steps containing anything other than `A`, `C`, `G` or `T` contribute nothing.
///
/// # Errors
///
/// Returns `UtilError::EmptySequence` for an empty sequence.
pub fn melting_temperature_with(sequence: &str, params: &TmParams) -> Result<f64> {
    let seq = sequence.to_ascii_uppercase().into_bytes();
    let (first, last) = match (seq.first(), seq.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Err(UtilError::EmptySequence),
    };

    let (h5, s5) = terminal_correction(first);
    let (h3, s3) = terminal_correction(last);
    let mut dh = h5 + h3;
    let mut ds = s5 + s3;

    for (h, s) in seq.windows(2).filter_map(nearest_neighbour) {
        dh += h;
        ds += s;
    }

    // salt correction
    ds -= 0.368 * ((seq.len() - 1) as f64) * (params.salt_mm / 1e3).ln();

    let k = (params.dna_nm / 4.0) * 1e-9;
    Ok((1000.0 * -dh) / (-ds + R * k.ln()) - 273.15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    #[test]
    fn reference_primer() {
        let tm = melting_temperature("CAGTCAGTACGTACGTGTACTGCCGTA").unwrap();
        assert_abs_diff_eq!(round2(tm), 59.87, epsilon = 1e-9);
    }

    #[test]
    fn case_insensitive() {
        let upper = melting_temperature("ATGCATGCATGC").unwrap();
        let lower = melting_temperature("atgcatgcatgc").unwrap();
        assert_abs_diff_eq!(upper, lower, epsilon = 1e-12);
        assert_abs_diff_eq!(upper, 35.78, epsilon = 0.01);
    }

    #[test]
    fn higher_salt_raises_tm() {
        let seq = "GGGGCCCCAAAATTTT";
        let low = melting_temperature(seq).unwrap();
        let high = melting_temperature_with(
            seq,
            &TmParams {
                salt_mm: 500.0,
                ..Default::default()
            },
        )
        .unwrap();
        assert_abs_diff_eq!(low, 45.83, epsilon = 0.01);
        assert!(high > low);
    }

    #[test]
    fn empty_sequence() {
        assert!(matches!(
            melting_temperature(""),
            Err(UtilError::EmptySequence)
        ));
    }
}
