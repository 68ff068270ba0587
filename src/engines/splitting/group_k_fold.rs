use super::base::{extract_pair, reject_short, FoldBuilder, FoldSplitter};
use crate::data::Sequence;
use crate::error::Result;
use crate::types::{Fold, FoldRoles, Split, WindowSpec};

/// Number of folds, and of interleaved step groups
pub const GROUP_COUNT: usize = 5;

/// Grouped k-fold over step positions modulo [`GROUP_COUNT`].
///
/// In fold `k`, step `i` is a held-out slot when `(i + 1 + k) % 5 == 0` and a
/// training pair otherwise, so each residue class serves once as the held-out
/// group. Training pairs are strided from the end of the previous held-out
/// slot (index 0 initially); a held-out slot starts where the last output
/// ended. With three-way roles the test pair follows the validation pair and
/// occupies the next step position.
///
/// A fold closes at the first window that does not fit and keeps what it
/// accumulated, so later folds may be smaller or even empty, and a fold whose
/// last test pair did not fit holds one more validation pair than test pairs.
pub struct GroupKFoldSplitter {
    spec: WindowSpec,
    roles: FoldRoles,
}

impl GroupKFoldSplitter {
    pub fn new(spec: WindowSpec, roles: FoldRoles) -> Self {
        Self { spec, roles }
    }

    fn build_fold<S: Sequence + ?Sized>(&self, sequence: &S, group: usize) -> FoldBuilder<S::Window> {
        let mut fold = FoldBuilder::new(self.roles);
        let mut anchor = 0;
        let mut jumps = 0;
        let mut tail = 0;
        let mut step = 0;

        loop {
            if (step + 1 + group) % GROUP_COUNT != 0 {
                let start = anchor + self.spec.num_jumps * jumps;
                let Some(pair) =
                    extract_pair(sequence, start, self.spec.num_inputs, self.spec.num_outputs)
                else {
                    break;
                };
                tail = pair.end();
                fold.train.push(pair);
                jumps += 1;
            } else {
                let Some(validation) =
                    extract_pair(sequence, tail, self.spec.num_inputs, self.spec.num_outputs)
                else {
                    break;
                };
                anchor = validation.end();
                fold.push_validation(validation);

                if self.roles.has_test() {
                    let Some(test) =
                        extract_pair(sequence, anchor, self.spec.num_inputs, self.spec.num_outputs)
                    else {
                        break;
                    };
                    anchor = test.end();
                    fold.push_test(test);
                    step += 1;
                }

                tail = anchor;
                jumps = 0;
            }
            step += 1;
        }

        log::debug!("Group {} closed after {} steps", group, step);
        fold
    }
}

impl FoldSplitter for GroupKFoldSplitter {
    fn split<S: Sequence + ?Sized>(&self, sequence: &S) -> Result<Split<Fold<S::Window>>> {
        if let Some(short) = reject_short(sequence.len(), &self.spec) {
            return Ok(short);
        }

        let folds = (0..GROUP_COUNT)
            .map(|group| self.build_fold(sequence, group).finish(group))
            .collect();

        Ok(Split::new(folds))
    }
}
