pub mod layout;
pub mod runner;
pub mod splitting;

pub use layout::{FoldLayout, PairLayout, SplitLayout};
pub use runner::{run_strategies, StrategyRun};
pub use splitting::{generate, FoldSplitter, Generated};
