//! Known-answer checks for the counting variants.

use std::io;

use log::debug;

use crate::pop_count::{Variant, Word};

/// Inputs paired with their expected number of set bits.
pub const CASES: [(Word, u32); 5] = [
    (0, 0),
    (1, 1),
    (0b_11, 2),
    (0b_1000, 1),
    (0xFFFF_FFFF, 32),
];

/// A variant disagreed with a known answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{variant}({input:#010x} = {input:#b}) returned {got}, expected {want}")]
pub struct Mismatch {
    pub variant: Variant,
    pub input: Word,
    pub want: u32,
    pub got: u32,
}

/// Checks `variant` against `CASES`, stopping at the first mismatch.
///
/// Returns the number of cases checked.
pub fn verify(variant: Variant) -> Result<usize, Mismatch> {
    verify_cases(variant, &CASES)
}

/// Runs `verify` for every variant.
pub fn verify_all() -> Result<usize, Mismatch> {
    let mut total = 0;
    for variant in Variant::ALL {
        total += verify(variant)?;
    }
    Ok(total)
}

/// Why `run` did not report success.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Mismatch(#[from] Mismatch),
    #[error("writing the success marker: {0}")]
    Io(#[from] io::Error),
}

/// Checks every variant against `cases` and writes `passed!` to `out`.
///
/// Nothing is written unless every case holds.
pub fn run<W: io::Write>(out: &mut W, cases: &[(Word, u32)]) -> Result<usize, Error> {
    let mut total = 0;
    for variant in Variant::ALL {
        total += verify_cases(variant, cases)?;
    }
    writeln!(out, "passed!")?;
    out.flush()?;
    Ok(total)
}

pub(crate) fn verify_cases(variant: Variant, cases: &[(Word, u32)]) -> Result<usize, Mismatch> {
    for &(input, want) in cases {
        let got = variant.count(input);
        debug!("{}({:#b}) = {}", variant, input, got);
        if got != want {
            return Err(Mismatch {
                variant,
                input,
                want,
                got,
            });
        }
    }
    Ok(cases.len())
}
