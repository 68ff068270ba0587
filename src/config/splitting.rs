use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::TsxvError;
use crate::types::{FoldRoles, WindowSpec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplittingConfig {
    pub strategy: SplitStrategy,
    pub roles: FoldRoles,
    pub num_inputs: usize, // minimum input width for VariableInput
    pub num_outputs: usize,
    pub num_jumps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitStrategy {
    Train,
    VariableInput,
    ForwardChaining,
    KFold,
    GroupKFold,
}

impl SplitStrategy {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Train,
            Self::VariableInput,
            Self::ForwardChaining,
            Self::KFold,
            Self::GroupKFold,
        ]
    }

    /// Whether the strategy groups pairs into folds
    pub fn produces_folds(&self) -> bool {
        !matches!(self, Self::Train | Self::VariableInput)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::VariableInput => "variable_input",
            Self::ForwardChaining => "forward_chaining",
            Self::KFold => "k_fold",
            Self::GroupKFold => "group_k_fold",
        }
    }
}

impl Default for SplittingConfig {
    fn default() -> Self {
        Self {
            strategy: SplitStrategy::ForwardChaining,
            roles: FoldRoles::TrainVal,
            num_inputs: 4,
            num_outputs: 3,
            num_jumps: 3,
        }
    }
}

impl SplittingConfig {
    pub fn new(strategy: SplitStrategy, roles: FoldRoles, spec: WindowSpec) -> Self {
        Self {
            strategy,
            roles,
            num_inputs: spec.num_inputs,
            num_outputs: spec.num_outputs,
            num_jumps: spec.num_jumps,
        }
    }

    pub fn window_spec(&self) -> Result<WindowSpec, TsxvError> {
        WindowSpec::new(self.num_inputs, self.num_outputs, self.num_jumps)
    }
}

impl ConfigSection for SplittingConfig {
    fn section_name() -> &'static str {
        "splitting"
    }

    fn validate(&self) -> Result<(), TsxvError> {
        self.window_spec()
            .map(|_| ())
            .map_err(|e| TsxvError::Configuration(e.to_string()))
    }

    fn to_manifest(&self) -> ConfigManifest {
        let strategies: Vec<&str> = SplitStrategy::all().iter().map(|s| s.as_str()).collect();

        ConfigManifest {
            section: Self::section_name().to_string(),
            fields: vec![
                FieldManifest::new(
                    "strategy",
                    "enum",
                    serde_json::json!(self.strategy),
                    &format!("Windowing strategy, one of {}", strategies.join(", ")),
                ),
                FieldManifest::new(
                    "roles",
                    "enum",
                    serde_json::json!(self.roles),
                    "Held-out roles per fold: TrainVal or TrainValTest",
                ),
                FieldManifest::new(
                    "num_inputs",
                    "integer",
                    serde_json::json!(self.num_inputs),
                    "Input window width (minimum width for VariableInput)",
                )
                .with_min(1.0),
                FieldManifest::new(
                    "num_outputs",
                    "integer",
                    serde_json::json!(self.num_outputs),
                    "Forecast horizon width",
                )
                .with_min(1.0),
                FieldManifest::new(
                    "num_jumps",
                    "integer",
                    serde_json::json!(self.num_jumps),
                    "Stride between successive input/output pairs",
                )
                .with_min(1.0),
            ],
        }
    }
}
