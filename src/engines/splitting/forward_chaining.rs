use super::base::{
    extract_hold_out, extract_pair, finish_folds, reject_short, FoldBuilder, FoldSplitter,
};
use crate::data::Sequence;
use crate::error::Result;
use crate::types::{Fold, FoldRoles, Split, WindowSpec};

/// Expanding training set with one trailing held-out slot per fold.
///
/// Fold `k` holds `k + 2` training pairs at `0, num_jumps, 2*num_jumps, ...`,
/// then a validation pair starting where the last training output ends and,
/// for three-way roles, a test pair right after the validation output. The
/// first fold that does not fit entirely ends generation and is dropped.
pub struct ForwardChainingSplitter {
    spec: WindowSpec,
    roles: FoldRoles,
}

impl ForwardChainingSplitter {
    pub fn new(spec: WindowSpec, roles: FoldRoles) -> Self {
        Self { spec, roles }
    }

    fn build_fold<S: Sequence + ?Sized>(
        &self,
        sequence: &S,
        train_count: usize,
    ) -> Option<FoldBuilder<S::Window>> {
        let mut fold = FoldBuilder::new(self.roles);

        for i in 0..train_count {
            let pair = extract_pair(
                sequence,
                self.spec.num_jumps * i,
                self.spec.num_inputs,
                self.spec.num_outputs,
            )?;
            fold.train.push(pair);
        }

        let hold_out_start = fold.train.last().map_or(0, |pair| pair.end());
        fold.push_hold_out(extract_hold_out(sequence, hold_out_start, &self.spec, self.roles)?);

        Some(fold)
    }
}

impl FoldSplitter for ForwardChainingSplitter {
    fn split<S: Sequence + ?Sized>(&self, sequence: &S) -> Result<Split<Fold<S::Window>>> {
        let len = sequence.len();
        if let Some(short) = reject_short(len, &self.spec) {
            return Ok(short);
        }

        let mut folds = Vec::new();
        let mut train_count = 2;
        while let Some(fold) = self.build_fold(sequence, train_count) {
            log::debug!("Accepted forward-chaining fold with {} training pairs", train_count);
            folds.push(fold.finish(folds.len()));
            train_count += 1;
        }

        Ok(finish_folds(folds, &self.spec, self.roles, len))
    }
}
