//! Leak-free windowing for time series forecasting.
//!
//! Turns one ordered sequence into input/output sample pairs and groups them
//! into train/validation(/test) folds without ever shuffling, so no window
//! sees data from after the window it is evaluated on.
//!
//! ```
//! let series: Vec<u32> = (0..31).collect();
//! let folds = tsxv::split_train_val_forward_chaining(&series, 4, 3, 3).unwrap();
//! assert_eq!(folds.len(), 5);
//! assert_eq!(folds[0].validation[0].input.values, vec![10, 11, 12, 13]);
//! ```

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use data::Sequence;
pub use engines::splitting::{
    generate, split_train, split_train_val_forward_chaining, split_train_val_group_k_fold,
    split_train_val_k_fold, split_train_val_test_forward_chaining,
    split_train_val_test_group_k_fold, split_train_val_test_k_fold, split_train_variable_input,
    Generated,
};
pub use error::{Result, TsxvError};
pub use types::{Bounds, Diagnostic, Fold, FoldRoles, SamplePair, Split, Window, WindowSpec};
