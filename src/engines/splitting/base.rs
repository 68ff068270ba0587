use crate::data::Sequence;
use crate::error::Result;
use crate::types::{Diagnostic, Fold, FoldRoles, SamplePair, Split, Window, WindowSpec};

pub trait FoldSplitter: Send + Sync {
    /// Split a sequence into ordered folds
    fn split<S: Sequence + ?Sized>(&self, sequence: &S) -> Result<Split<Fold<S::Window>>>;
}

/// Whether an input window of `input_len` starting at `start`, followed by an
/// output window of `output_len`, ends within `len` elements
pub fn fits(len: usize, start: usize, input_len: usize, output_len: usize) -> bool {
    start
        .checked_add(input_len)
        .and_then(|split| split.checked_add(output_len))
        .map_or(false, |end| end <= len)
}

/// Materialize the pair starting at `start`, or `None` once it crosses the end
/// of the sequence
pub fn extract_pair<S: Sequence + ?Sized>(
    sequence: &S,
    start: usize,
    input_len: usize,
    output_len: usize,
) -> Option<SamplePair<S::Window>> {
    if !fits(sequence.len(), start, input_len, output_len) {
        return None;
    }

    let split = start + input_len;
    let end = split + output_len;
    Some(SamplePair {
        input: Window::new(start, split, sequence.window(start..split)),
        output: Window::new(split, end, sequence.window(split..end)),
    })
}

/// Up-front length check shared by every entry point
pub(crate) fn reject_short<T>(available: usize, spec: &WindowSpec) -> Option<Split<T>> {
    let required = spec.pair_len();
    if required <= available {
        return None;
    }

    let diagnostic = Diagnostic::SequenceTooShort { required, available };
    log::warn!("{}", diagnostic);
    Some(Split::insufficient(diagnostic))
}

/// Wrap generated folds, explaining an empty result
pub(crate) fn finish_folds<W>(
    folds: Vec<Fold<W>>,
    spec: &WindowSpec,
    roles: FoldRoles,
    available: usize,
) -> Split<Fold<W>> {
    if !folds.is_empty() {
        log::debug!("Generated {} folds from {} elements", folds.len(), available);
        return Split::new(folds);
    }

    let diagnostic = Diagnostic::NoCompleteFold {
        required: first_fold_len(spec, roles),
        available,
    };
    log::warn!("{}", diagnostic);
    Split::insufficient(diagnostic)
}

/// Elements needed by the smallest chained fold: two training pairs one
/// stride apart followed by the held-out pairs
pub(crate) fn first_fold_len(spec: &WindowSpec, roles: FoldRoles) -> usize {
    spec.num_jumps + spec.pair_len() * (1 + roles.hold_out_count())
}

/// Validation pair plus, for three-way roles, the test pair right after it
pub(crate) struct HoldOut<W> {
    pub validation: SamplePair<W>,
    pub test: Option<SamplePair<W>>,
}

impl<W> HoldOut<W> {
    pub fn end(&self) -> usize {
        self.test
            .as_ref()
            .map_or(self.validation.end(), SamplePair::end)
    }
}

/// Extract the held-out pairs starting at `start`; `None` unless all of them fit
pub(crate) fn extract_hold_out<S: Sequence + ?Sized>(
    sequence: &S,
    start: usize,
    spec: &WindowSpec,
    roles: FoldRoles,
) -> Option<HoldOut<S::Window>> {
    let validation = extract_pair(sequence, start, spec.num_inputs, spec.num_outputs)?;
    let test = match roles {
        FoldRoles::TrainVal => None,
        FoldRoles::TrainValTest => Some(extract_pair(
            sequence,
            validation.end(),
            spec.num_inputs,
            spec.num_outputs,
        )?),
    };

    Some(HoldOut { validation, test })
}

/// Accumulates the pairs of one fold before it is accepted
pub(crate) struct FoldBuilder<W> {
    pub train: Vec<SamplePair<W>>,
    validation: Vec<SamplePair<W>>,
    test: Option<Vec<SamplePair<W>>>,
}

impl<W> FoldBuilder<W> {
    pub fn new(roles: FoldRoles) -> Self {
        Self {
            train: Vec::new(),
            validation: Vec::new(),
            test: roles.has_test().then(Vec::new),
        }
    }

    pub fn push_hold_out(&mut self, hold_out: HoldOut<W>) {
        self.push_validation(hold_out.validation);
        if let Some(pair) = hold_out.test {
            self.push_test(pair);
        }
    }

    pub fn push_validation(&mut self, pair: SamplePair<W>) {
        self.validation.push(pair);
    }

    /// No-op for two-way roles
    pub fn push_test(&mut self, pair: SamplePair<W>) {
        if let Some(test) = self.test.as_mut() {
            test.push(pair);
        }
    }

    pub fn finish(self, index: usize) -> Fold<W> {
        Fold {
            index,
            train: self.train,
            validation: self.validation,
            test: self.test,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits() {
        assert!(fits(10, 3, 4, 3));
        assert!(!fits(10, 4, 4, 3));
        assert!(!fits(10, usize::MAX, 1, 1));
    }

    #[test]
    fn test_extract_pair_zero_gap() {
        let sequence: Vec<u32> = (0..10).collect();
        let pair = extract_pair(&sequence, 2, 4, 3).unwrap();

        assert_eq!(pair.input.values, vec![2, 3, 4, 5]);
        assert_eq!(pair.output.values, vec![6, 7, 8]);
        assert_eq!(pair.input.end, pair.output.start);
        assert!(extract_pair(&sequence, 4, 4, 3).is_none());
    }

    #[test]
    fn test_extract_hold_out_requires_every_window() {
        let sequence: Vec<u32> = (0..12).collect();
        let spec = WindowSpec::new(3, 2, 1).unwrap();

        let hold_out = extract_hold_out(&sequence, 2, &spec, FoldRoles::TrainValTest).unwrap();
        assert_eq!(hold_out.validation.span().start, 2);
        assert_eq!(hold_out.test.as_ref().unwrap().start(), 7);
        assert_eq!(hold_out.end(), 12);

        assert!(extract_hold_out(&sequence, 3, &spec, FoldRoles::TrainValTest).is_none());
        assert!(extract_hold_out(&sequence, 3, &spec, FoldRoles::TrainVal).is_some());
    }

    #[test]
    fn test_reject_short() {
        let spec = WindowSpec::new(4, 3, 1).unwrap();

        let short = reject_short::<()>(5, &spec).unwrap();
        assert!(short.is_empty());
        assert_eq!(
            short.diagnostic(),
            Some(&Diagnostic::SequenceTooShort {
                required: 7,
                available: 5
            })
        );
        assert!(reject_short::<()>(7, &spec).is_none());
    }

    #[test]
    fn test_first_fold_len() {
        let spec = WindowSpec::new(4, 3, 3).unwrap();
        assert_eq!(first_fold_len(&spec, FoldRoles::TrainVal), 17);
        assert_eq!(first_fold_len(&spec, FoldRoles::TrainValTest), 24);
    }
}
