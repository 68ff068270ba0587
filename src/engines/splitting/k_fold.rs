use super::base::{
    extract_hold_out, extract_pair, finish_folds, reject_short, FoldBuilder, FoldSplitter,
};
use crate::data::Sequence;
use crate::error::Result;
use crate::types::{Fold, FoldRoles, Split, WindowSpec};

/// Rolling-origin k-fold.
///
/// Fold `k` walks the sequence once. Steps `0..k+2` are training pairs strided
/// from index 0; step `k+2` is the held-out slot, placed where the last
/// training output ends. Training then resumes with a fresh stride from the
/// end of the held-out pairs and runs until the next pair no longer fits.
///
/// A fold whose leading training pairs or held-out pairs do not fit ends
/// generation and is dropped.
pub struct KFoldSplitter {
    spec: WindowSpec,
    roles: FoldRoles,
}

impl KFoldSplitter {
    pub fn new(spec: WindowSpec, roles: FoldRoles) -> Self {
        Self { spec, roles }
    }

    fn build_fold<S: Sequence + ?Sized>(
        &self,
        sequence: &S,
        hold_out_step: usize,
    ) -> Option<FoldBuilder<S::Window>> {
        let mut fold = FoldBuilder::new(self.roles);
        let mut anchor = 0; // where the current run of training pairs starts
        let mut jumps = 0; // strides taken since `anchor`
        let mut tail = 0; // end of the last emitted output window

        for step in 0.. {
            if step == hold_out_step {
                let hold_out = extract_hold_out(sequence, tail, &self.spec, self.roles)?;
                anchor = hold_out.end();
                tail = anchor;
                jumps = 0;
                fold.push_hold_out(hold_out);
                continue;
            }

            let start = anchor + self.spec.num_jumps * jumps;
            match extract_pair(sequence, start, self.spec.num_inputs, self.spec.num_outputs) {
                Some(pair) => {
                    tail = pair.end();
                    fold.train.push(pair);
                    jumps += 1;
                }
                None if step < hold_out_step => return None,
                None => break,
            }
        }

        Some(fold)
    }
}

impl FoldSplitter for KFoldSplitter {
    fn split<S: Sequence + ?Sized>(&self, sequence: &S) -> Result<Split<Fold<S::Window>>> {
        let len = sequence.len();
        if let Some(short) = reject_short(len, &self.spec) {
            return Ok(short);
        }

        let mut folds = Vec::new();
        let mut hold_out_step = 2;
        while let Some(fold) = self.build_fold(sequence, hold_out_step) {
            log::debug!("Accepted k-fold fold with held-out slot at step {}", hold_out_step);
            folds.push(fold.finish(folds.len()));
            hold_out_step += 1;
        }

        Ok(finish_folds(folds, &self.spec, self.roles, len))
    }
}
