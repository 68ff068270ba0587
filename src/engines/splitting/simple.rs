//! Single-purpose windowing: no folds, one flat ordered list of pairs.

use super::base::{extract_pair, fits, reject_short};
use crate::data::Sequence;
use crate::error::{Result, TsxvError};
use crate::types::{SamplePair, Split, WindowSpec};

/// Fixed-width pairs: input `[k*num_jumps, k*num_jumps + num_inputs)`, output
/// of `num_outputs` right after, for every `k` that fits.
pub fn split_train<S: Sequence + ?Sized>(
    sequence: &S,
    num_inputs: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<SamplePair<S::Window>>> {
    let spec = WindowSpec::new(num_inputs, num_outputs, num_jumps)?;
    Ok(rolling_pairs(sequence, &spec))
}

/// Expanding pairs: input `[0, min_samples_train + k*num_jumps)`, output of
/// `num_outputs` right after.
pub fn split_train_variable_input<S: Sequence + ?Sized>(
    sequence: &S,
    min_samples_train: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<SamplePair<S::Window>>> {
    let spec = WindowSpec::new(min_samples_train, num_outputs, num_jumps).map_err(|e| match e {
        TsxvError::InvalidParameter { name: "num_inputs", reason } => TsxvError::InvalidParameter {
            name: "min_samples_train",
            reason,
        },
        other => other,
    })?;
    Ok(expanding_pairs(sequence, &spec))
}

pub(crate) fn rolling_pairs<S: Sequence + ?Sized>(
    sequence: &S,
    spec: &WindowSpec,
) -> Split<SamplePair<S::Window>> {
    if let Some(short) = reject_short(sequence.len(), spec) {
        return short;
    }

    let mut pairs = Vec::new();
    let mut start = 0;
    while let Some(pair) = extract_pair(sequence, start, spec.num_inputs, spec.num_outputs) {
        pairs.push(pair);
        start += spec.num_jumps;
    }

    Split::new(pairs)
}

pub(crate) fn expanding_pairs<S: Sequence + ?Sized>(
    sequence: &S,
    spec: &WindowSpec,
) -> Split<SamplePair<S::Window>> {
    let len = sequence.len();
    if let Some(short) = reject_short(len, spec) {
        return short;
    }

    let mut pairs = Vec::new();
    let mut input_len = spec.num_inputs;
    // Each step was checked either up front or at the end of the previous step
    loop {
        let Some(pair) = extract_pair(sequence, 0, input_len, spec.num_outputs) else {
            break;
        };
        pairs.push(pair);

        input_len += spec.num_jumps;
        if !fits(len, 0, input_len, spec.num_outputs) {
            break;
        }
    }

    Split::new(pairs)
}
