use super::splitting::{generate, Generated};
use crate::config::SplittingConfig;
use crate::data::Sequence;
use crate::error::Result;
use rayon::prelude::*;

/// One configuration and what it produced
#[derive(Debug)]
pub struct StrategyRun<W> {
    pub config: SplittingConfig,
    pub result: Result<Generated<W>>,
}

/// Run every configuration against the same sequence in parallel.
///
/// Results come back in the order of `configs`; a failing configuration does
/// not stop the others.
pub fn run_strategies<S>(sequence: &S, configs: &[SplittingConfig]) -> Vec<StrategyRun<S::Window>>
where
    S: Sequence + Sync + ?Sized,
    S::Window: Send,
{
    log::info!(
        "Running {} strategies over {} elements",
        configs.len(),
        sequence.len()
    );

    configs
        .par_iter()
        .map(|config| StrategyRun {
            config: config.clone(),
            result: generate(sequence, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SplitStrategy;
    use crate::types::FoldRoles;

    #[test]
    fn test_results_keep_input_order() {
        let sequence: Vec<u32> = (0..60).collect();
        let configs: Vec<SplittingConfig> = SplitStrategy::all()
            .into_iter()
            .map(|strategy| SplittingConfig {
                strategy,
                roles: FoldRoles::TrainValTest,
                ..Default::default()
            })
            .collect();

        let runs = run_strategies(&sequence, &configs);

        assert_eq!(runs.len(), configs.len());
        for (run, config) in runs.iter().zip(&configs) {
            assert_eq!(&run.config, config);
            let generated = run.result.as_ref().unwrap();
            assert_eq!(generated, &generate(&sequence, config).unwrap());
        }
    }

    #[test]
    fn test_invalid_config_reported_per_run() {
        let sequence: Vec<u32> = (0..20).collect();
        let configs = vec![
            SplittingConfig::default(),
            SplittingConfig {
                num_jumps: 0,
                ..Default::default()
            },
        ];

        let runs = run_strategies(&sequence, &configs);
        assert!(runs[0].result.is_ok());
        assert!(runs[1].result.is_err());
    }
}
