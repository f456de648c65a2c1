// Caller-side state for an interactive calculator (form fields + last result).
// The engine itself is stateless; a UI or the CLI's interactive mode owns one of these.

use shared::models::{Evaluation, InputField, RawInputs, ValidationErrorKind};

use crate::evaluate::evaluate_raw;
use crate::input::sanitize;
use crate::validation::validate_raw;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Every field is blank. A previous result may still be shown.
    Empty,
    /// Fields are being edited; the last result (if any) is still shown.
    Editing,
    /// Calculate was pressed and `last_evaluation` reflects the current fields.
    Evaluated,
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    inputs: RawInputs,
    phase: SessionPhase,
    last_evaluation: Option<Evaluation>,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    pub fn new() -> Self {
        Self {
            inputs: RawInputs::default(),
            phase: SessionPhase::Empty,
            last_evaluation: None,
        }
    }

    /// Replaces a field's text with its sanitized form and returns what was stored.
    pub fn edit(&mut self, field: InputField, text: &str) -> &str {
        let sanitized = sanitize(text);
        *self.inputs.get_mut(field) = sanitized;
        self.phase = if self.inputs.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Editing
        };
        self.inputs.get(field)
    }

    /// Inline hint for the current fields; `None` when they would calculate cleanly.
    pub fn hint(&self) -> Option<ValidationErrorKind> {
        validate_raw(&self.inputs).err()
    }

    /// Whether Calculate should be enabled.
    pub fn is_ready(&self) -> bool {
        self.hint().is_none()
    }

    pub fn calculate(&mut self) -> &Evaluation {
        let evaluation = evaluate_raw(&self.inputs);
        tracing::debug!(ok = evaluation.is_ok(), "Session calculated");
        self.phase = SessionPhase::Evaluated;
        self.last_evaluation.insert(evaluation)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn field(&self, field: InputField) -> &str {
        self.inputs.get(field)
    }

    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last_evaluation.as_ref()
    }
}
