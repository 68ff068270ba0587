use anyhow::Context;
use std::env;
use tsxv::config::{AppConfig, ConfigManager, SplittingConfig};
use tsxv::data::{window_time_span, CsvConnector, Sequence};
use tsxv::engines::layout::SplitLayout;
use tsxv::engines::splitting::generate;

const USAGE: &str = "usage: tsxv [CONFIG.toml] [--manifest] [--metadata] [--json]";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }
    let print_manifest = args.iter().any(|a| a == "--manifest");
    let print_metadata = args.iter().any(|a| a == "--metadata");
    let print_json = args.iter().any(|a| a == "--json");

    let manager = ConfigManager::new();
    match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("loading {}", path))?,
        None => manager.load_from_env()?,
    }
    let config = manager.get();

    if print_manifest {
        println!("{}", serde_json::to_string_pretty(&config.manifests())?);
        return Ok(());
    }

    if print_metadata {
        let path = config
            .data
            .path
            .as_ref()
            .context("--metadata needs a data path in the configuration")?;
        let df = CsvConnector::load(path).with_context(|| format!("loading {}", path.display()))?;
        let metadata = CsvConnector::create_metadata(path, &df)?;
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    let layout = build_layout(&config)?;
    if print_json {
        println!("{}", layout.to_json()?);
    } else {
        for line in layout.summary_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn build_layout(config: &AppConfig) -> anyhow::Result<SplitLayout> {
    let Some(path) = &config.data.path else {
        let demo: Vec<u32> = (0..31).collect();
        log::info!("No data path configured, using the 0..31 demo sequence");
        return layout_for(&demo, &config.splitting);
    };

    let df = CsvConnector::load_and_validate(path, &config.data)
        .with_context(|| format!("loading {}", path.display()))?;
    let values = CsvConnector::value_series(&df, &config.data.value_column)?;
    let layout = layout_for(&values, &config.splitting)?;

    let timestamp_column = config
        .data
        .timestamp_column
        .clone()
        .or_else(|| CsvConnector::detect_datetime_column(&df));
    match timestamp_column {
        Some(column) => Ok(layout.with_time_spans(|bounds| window_time_span(&df, &column, bounds))?),
        None => Ok(layout),
    }
}

fn layout_for<S: Sequence + ?Sized>(
    sequence: &S,
    splitting: &SplittingConfig,
) -> anyhow::Result<SplitLayout> {
    let generated = generate(sequence, splitting)?;
    Ok(SplitLayout::from_generated(splitting.strategy, sequence.len(), &generated))
}
