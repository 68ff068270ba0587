use crate::error::{Result, TsxvError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Half-open index range `[start, end)` into a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub start: usize,
    pub end: usize,
}

impl Bounds {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest range covering both `self` and `other`
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}

/// Contiguous sub-range of a sequence together with its materialized elements
#[derive(Debug, Clone, PartialEq)]
pub struct Window<W> {
    pub start: usize,
    pub end: usize,
    pub values: W,
}

impl<W> Window<W> {
    pub fn new(start: usize, end: usize, values: W) -> Self {
        Self { start, end, values }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.start, self.end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Input window (X) immediately followed by its forecast window (y)
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePair<W> {
    pub input: Window<W>,
    pub output: Window<W>,
}

impl<W> SamplePair<W> {
    pub fn start(&self) -> usize {
        self.input.start
    }

    /// End of the output window; the next adjacent window starts here
    pub fn end(&self) -> usize {
        self.output.end
    }

    pub fn span(&self) -> Bounds {
        Bounds::new(self.input.start, self.output.end)
    }
}

/// Which held-out roles a fold carries besides training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoldRoles {
    TrainVal,     // train + validation
    TrainValTest, // train + validation + test
}

impl FoldRoles {
    /// Number of held-out pairs emitted per validation slot
    pub fn hold_out_count(&self) -> usize {
        match self {
            FoldRoles::TrainVal => 1,
            FoldRoles::TrainValTest => 2,
        }
    }

    pub fn has_test(&self) -> bool {
        matches!(self, FoldRoles::TrainValTest)
    }
}

impl Default for FoldRoles {
    fn default() -> Self {
        FoldRoles::TrainVal
    }
}

/// One cross-validation fold
#[derive(Debug, Clone, PartialEq)]
pub struct Fold<W> {
    pub index: usize,
    pub train: Vec<SamplePair<W>>,
    pub validation: Vec<SamplePair<W>>,
    pub test: Option<Vec<SamplePair<W>>>, // None for train/val folds
}

impl<W> Fold<W> {
    pub fn roles(&self) -> FoldRoles {
        if self.test.is_some() {
            FoldRoles::TrainValTest
        } else {
            FoldRoles::TrainVal
        }
    }

    pub fn test(&self) -> &[SamplePair<W>] {
        self.test.as_deref().unwrap_or(&[])
    }

    /// Every pair of the fold regardless of role
    pub fn pairs(&self) -> impl Iterator<Item = &SamplePair<W>> {
        self.train
            .iter()
            .chain(self.validation.iter())
            .chain(self.test().iter())
    }

    /// Range covering every window of the fold
    pub fn span(&self) -> Option<Bounds> {
        self.pairs()
            .map(SamplePair::span)
            .reduce(|acc, span| acc.union(&span))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }
}

/// Window widths and stride shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub num_inputs: usize,  // X width, or the minimum X width for expanding windows
    pub num_outputs: usize, // forecast horizon
    pub num_jumps: usize,   // stride between successive pairs
}

impl WindowSpec {
    pub fn new(num_inputs: usize, num_outputs: usize, num_jumps: usize) -> Result<Self> {
        for (name, value) in [
            ("num_inputs", num_inputs),
            ("num_outputs", num_outputs),
            ("num_jumps", num_jumps),
        ] {
            if value == 0 {
                return Err(TsxvError::InvalidParameter {
                    name,
                    reason: "must be a positive integer".to_string(),
                });
            }
        }

        Ok(Self {
            num_inputs,
            num_outputs,
            num_jumps,
        })
    }

    /// Elements covered by one input+output pair
    pub fn pair_len(&self) -> usize {
        self.num_inputs + self.num_outputs
    }
}

/// Non-fatal reason a generator returned nothing
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    #[error(
        "sequence of {available} elements is too short for one input/output pair of {required} elements"
    )]
    SequenceTooShort { required: usize, available: usize },

    #[error("sequence of {available} elements cannot hold a complete fold; at least {required} are needed")]
    NoCompleteFold { required: usize, available: usize },
}

/// Ordered generator output plus an optional diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    items: Vec<T>,
    diagnostic: Option<Diagnostic>,
}

impl<T> Split<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            diagnostic: None,
        }
    }

    /// Empty result explained by `diagnostic`
    pub fn insufficient(diagnostic: Diagnostic) -> Self {
        Self {
            items: Vec::new(),
            diagnostic: Some(diagnostic),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> std::ops::Index<usize> for Split<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Split<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Split<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_spec_rejects_zero() {
        assert!(WindowSpec::new(0, 3, 1).is_err());
        assert!(WindowSpec::new(4, 0, 1).is_err());

        match WindowSpec::new(4, 3, 0) {
            Err(TsxvError::InvalidParameter { name, .. }) => assert_eq!(name, "num_jumps"),
            other => panic!("expected invalid num_jumps, got {:?}", other),
        }
    }

    #[test]
    fn test_pair_len() {
        let spec = WindowSpec::new(4, 3, 3).unwrap();
        assert_eq!(spec.pair_len(), 7);
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(3, 7);
        let b = Bounds::new(0, 5);
        assert_eq!(a.union(&b), Bounds::new(0, 7));
        assert_eq!(a.len(), 4);
        assert_eq!(a.to_string(), "[3..7)");
    }

    #[test]
    fn test_fold_span_and_roles() {
        let pair = |start: usize| SamplePair {
            input: Window::new(start, start + 2, ()),
            output: Window::new(start + 2, start + 3, ()),
        };
        let fold = Fold {
            index: 0,
            train: vec![pair(0), pair(1)],
            validation: vec![pair(4)],
            test: Some(vec![pair(7)]),
        };

        assert_eq!(fold.roles(), FoldRoles::TrainValTest);
        assert_eq!(fold.span(), Some(Bounds::new(0, 10)));
        assert_eq!(fold.pairs().count(), 4);
        assert!(!fold.is_empty());
    }

    #[test]
    fn test_diagnostic_message() {
        let diagnostic = Diagnostic::SequenceTooShort {
            required: 7,
            available: 5,
        };
        assert!(diagnostic.to_string().contains("too short"));
    }
}
