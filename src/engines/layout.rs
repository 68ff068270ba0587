//! Index-only description of generated windows for renderers and reports.

use super::splitting::Generated;
use crate::config::SplitStrategy;
use crate::data::TimeSpan;
use crate::error::Result;
use crate::types::{Bounds, Diagnostic, Fold, SamplePair};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairLayout {
    pub input: Bounds,
    pub output: Bounds,
}

impl<W> From<&SamplePair<W>> for PairLayout {
    fn from(pair: &SamplePair<W>) -> Self {
        Self {
            input: pair.input.bounds(),
            output: pair.output.bounds(),
        }
    }
}

fn layout_pairs<W>(pairs: &[SamplePair<W>]) -> Vec<PairLayout> {
    pairs.iter().map(PairLayout::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldLayout {
    pub index: usize,
    pub train: Vec<PairLayout>,
    pub validation: Vec<PairLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Vec<PairLayout>>,
    pub span: Option<Bounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_span: Option<TimeSpan>,
}

impl<W> From<&Fold<W>> for FoldLayout {
    fn from(fold: &Fold<W>) -> Self {
        Self {
            index: fold.index,
            train: layout_pairs(&fold.train),
            validation: layout_pairs(&fold.validation),
            test: fold.test.as_deref().map(layout_pairs),
            span: fold.span(),
            time_span: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitLayout {
    pub strategy: SplitStrategy,
    pub sequence_len: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pairs: Vec<PairLayout>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folds: Vec<FoldLayout>,
    pub diagnostic: Option<Diagnostic>,
}

impl SplitLayout {
    pub fn from_generated<W>(
        strategy: SplitStrategy,
        sequence_len: usize,
        generated: &Generated<W>,
    ) -> Self {
        let (pairs, folds) = match generated {
            Generated::Pairs(pairs) => (layout_pairs(pairs.items()), Vec::new()),
            Generated::Folds(folds) => (Vec::new(), folds.iter().map(FoldLayout::from).collect()),
        };

        Self {
            strategy,
            sequence_len,
            pairs,
            folds,
            diagnostic: generated.diagnostic().cloned(),
        }
    }

    /// Label every non-empty fold with the wall-clock range it covers
    pub fn with_time_spans<F>(mut self, mut resolve: F) -> Result<Self>
    where
        F: FnMut(Bounds) -> Result<TimeSpan>,
    {
        for fold in &mut self.folds {
            if let Some(span) = fold.span {
                fold.time_span = Some(resolve(span)?);
            }
        }
        Ok(self)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable listing, one line per pair grouped by fold
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} over {} elements",
            self.strategy.as_str(),
            self.sequence_len
        )];

        if let Some(diagnostic) = &self.diagnostic {
            lines.push(format!("  no output: {}", diagnostic));
            return lines;
        }

        for (k, pair) in self.pairs.iter().enumerate() {
            lines.push(format!("  X[{}] = {}  y[{}] = {}", k, pair.input, k, pair.output));
        }

        for fold in &self.folds {
            let mut header = format!("--------- SET {} ---------", fold.index + 1);
            if let Some(time_span) = &fold.time_span {
                header.push_str(&format!(" {} .. {}", time_span.start, time_span.end));
            }
            lines.push(header);

            let roles = [
                ("train", Some(&fold.train)),
                ("val", Some(&fold.validation)),
                ("test", fold.test.as_ref()),
            ];
            for (role, pairs) in roles {
                for pair in pairs.into_iter().flatten() {
                    lines.push(format!("  {:<5} X = {}  y = {}", role, pair.input, pair.output));
                }
            }
        }

        lines
    }
}
