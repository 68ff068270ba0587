//! Window and fold generation.
//!
//! Every entry point validates its parameters (`Err` only for zero widths or
//! stride), rejects sequences shorter than one input/output pair with an empty
//! [`Split`] carrying a [`Diagnostic`](crate::types::Diagnostic), and never
//! reorders the sequence.

pub mod base;
pub mod forward_chaining;
pub mod group_k_fold;
pub mod k_fold;
pub mod simple;

pub use base::{extract_pair, fits, FoldSplitter};
pub use forward_chaining::ForwardChainingSplitter;
pub use group_k_fold::{GroupKFoldSplitter, GROUP_COUNT};
pub use k_fold::KFoldSplitter;
pub use simple::{split_train, split_train_variable_input};

use crate::config::{ConfigSection, SplitStrategy, SplittingConfig};
use crate::data::Sequence;
use crate::error::Result;
use crate::types::{Diagnostic, Fold, FoldRoles, SamplePair, Split, WindowSpec};

pub fn split_train_val_forward_chaining<S: Sequence + ?Sized>(
    sequence: &S,
    num_inputs: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<Fold<S::Window>>> {
    let spec = WindowSpec::new(num_inputs, num_outputs, num_jumps)?;
    ForwardChainingSplitter::new(spec, FoldRoles::TrainVal).split(sequence)
}

pub fn split_train_val_test_forward_chaining<S: Sequence + ?Sized>(
    sequence: &S,
    num_inputs: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<Fold<S::Window>>> {
    let spec = WindowSpec::new(num_inputs, num_outputs, num_jumps)?;
    ForwardChainingSplitter::new(spec, FoldRoles::TrainValTest).split(sequence)
}

pub fn split_train_val_k_fold<S: Sequence + ?Sized>(
    sequence: &S,
    num_inputs: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<Fold<S::Window>>> {
    let spec = WindowSpec::new(num_inputs, num_outputs, num_jumps)?;
    KFoldSplitter::new(spec, FoldRoles::TrainVal).split(sequence)
}

pub fn split_train_val_test_k_fold<S: Sequence + ?Sized>(
    sequence: &S,
    num_inputs: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<Fold<S::Window>>> {
    let spec = WindowSpec::new(num_inputs, num_outputs, num_jumps)?;
    KFoldSplitter::new(spec, FoldRoles::TrainValTest).split(sequence)
}

pub fn split_train_val_group_k_fold<S: Sequence + ?Sized>(
    sequence: &S,
    num_inputs: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<Fold<S::Window>>> {
    let spec = WindowSpec::new(num_inputs, num_outputs, num_jumps)?;
    GroupKFoldSplitter::new(spec, FoldRoles::TrainVal).split(sequence)
}

pub fn split_train_val_test_group_k_fold<S: Sequence + ?Sized>(
    sequence: &S,
    num_inputs: usize,
    num_outputs: usize,
    num_jumps: usize,
) -> Result<Split<Fold<S::Window>>> {
    let spec = WindowSpec::new(num_inputs, num_outputs, num_jumps)?;
    GroupKFoldSplitter::new(spec, FoldRoles::TrainValTest).split(sequence)
}

/// Output of a configured run: flat pairs or folds depending on the strategy
#[derive(Debug, Clone, PartialEq)]
pub enum Generated<W> {
    Pairs(Split<SamplePair<W>>),
    Folds(Split<Fold<W>>),
}

impl<W> Generated<W> {
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Generated::Pairs(pairs) => pairs.diagnostic(),
            Generated::Folds(folds) => folds.diagnostic(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Generated::Pairs(pairs) => pairs.is_empty(),
            Generated::Folds(folds) => folds.is_empty(),
        }
    }

    pub fn pairs(&self) -> Option<&Split<SamplePair<W>>> {
        match self {
            Generated::Pairs(pairs) => Some(pairs),
            Generated::Folds(_) => None,
        }
    }

    pub fn folds(&self) -> Option<&Split<Fold<W>>> {
        match self {
            Generated::Pairs(_) => None,
            Generated::Folds(folds) => Some(folds),
        }
    }
}

/// Run the strategy selected by `config`; `roles` is ignored by the
/// pair-only strategies
pub fn generate<S: Sequence + ?Sized>(
    sequence: &S,
    config: &SplittingConfig,
) -> Result<Generated<S::Window>> {
    config.validate()?;
    let spec = config.window_spec()?;

    let generated = match config.strategy {
        SplitStrategy::Train => Generated::Pairs(simple::rolling_pairs(sequence, &spec)),
        SplitStrategy::VariableInput => Generated::Pairs(simple::expanding_pairs(sequence, &spec)),
        SplitStrategy::ForwardChaining => {
            Generated::Folds(ForwardChainingSplitter::new(spec, config.roles).split(sequence)?)
        }
        SplitStrategy::KFold => Generated::Folds(KFoldSplitter::new(spec, config.roles).split(sequence)?),
        SplitStrategy::GroupKFold => {
            Generated::Folds(GroupKFoldSplitter::new(spec, config.roles).split(sequence)?)
        }
    };

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TsxvError;

    #[test]
    fn test_generate_matches_entry_points() {
        let sequence: Vec<u32> = (0..31).collect();
        let config = SplittingConfig {
            strategy: SplitStrategy::KFold,
            roles: FoldRoles::TrainValTest,
            ..Default::default()
        };

        let generated = generate(&sequence, &config).unwrap();
        let direct = split_train_val_test_k_fold(&sequence, 4, 3, 3).unwrap();
        assert_eq!(generated.folds(), Some(&direct));
        assert!(generated.pairs().is_none());
    }

    #[test]
    fn test_generate_pairs() {
        let sequence: Vec<u32> = (0..31).collect();
        let config = SplittingConfig {
            strategy: SplitStrategy::VariableInput,
            ..Default::default()
        };

        let generated = generate(&sequence, &config).unwrap();
        let direct = split_train_variable_input(&sequence, 4, 3, 3).unwrap();
        assert_eq!(generated, Generated::Pairs(direct));
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let sequence: Vec<u32> = (0..31).collect();
        let config = SplittingConfig {
            num_inputs: 0,
            ..Default::default()
        };

        assert!(matches!(
            generate(&sequence, &config),
            Err(TsxvError::Configuration(_))
        ));
    }

    #[test]
    fn test_entry_points_reject_zero_stride() {
        let sequence: Vec<u32> = (0..31).collect();
        assert!(split_train_val_forward_chaining(&sequence, 4, 3, 0).is_err());
        assert!(split_train_val_test_k_fold(&sequence, 4, 3, 0).is_err());
        assert!(split_train_val_group_k_fold(&sequence, 4, 0, 1).is_err());
    }
}
