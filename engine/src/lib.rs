// Engine library root
// Raw text -> sanitize -> validate -> calculate -> format, plus the pieces the CLI needs around it.

pub mod config;
pub mod data;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod input;
pub mod metrics;
pub mod services;
pub mod state;
pub mod validation;

pub use evaluate::{evaluate, evaluate_raw};
pub use shared::models::{
    DerivedMetrics, DisplayStrings, Evaluation, InputField, ParsedInputs, RawInputs,
    ValidationErrorKind, ValidationOutcome,
};
