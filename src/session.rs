use crate::converter::ConversionError;
use crate::mode::ConversionMode;

pub const INVALID_INPUT_HINT: &str = "Enter a valid number";

/// Mode plus everything the converter screen currently displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    mode: ConversionMode,
    hint: String,
    label: String,
    result: String,
    last_error: Option<ConversionError>,
}

impl Session {
    pub fn new(mode: ConversionMode) -> Self {
        Self {
            mode,
            hint: mode.prompt().to_string(),
            label: String::new(),
            result: String::new(),
            last_error: None,
        }
    }

    pub const fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub const fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub const fn last_error(&self) -> Option<&ConversionError> {
        self.last_error.as_ref()
    }

    pub fn flip(&mut self) {
        self.clear_output();
        self.hint.clear();
        self.last_error = None;

        self.mode = self.mode.flipped();
        self.hint.push_str(self.mode.prompt());
        tracing::debug!(mode = ?self.mode, "conversion mode flipped");
    }

    /// Runs the conversion for the current mode. Validation failures never
    /// leave this method; they become the "enter a valid number" prompt.
    pub fn convert(&mut self, input: &str) {
        match self.mode.convert(input) {
            Ok(result) => {
                tracing::info!(mode = ?self.mode, input, %result, "converted");
                self.label = self.mode.result_label().to_string();
                self.result = result;
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(mode = ?self.mode, input, kind = ?err.kind(), error = %err, "rejected input");
                self.clear_output();
                self.hint = INVALID_INPUT_HINT.to_string();
                self.last_error = Some(err);
            }
        }
    }

    fn clear_output(&mut self) {
        self.label.clear();
        self.result.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ConversionMode::default())
    }
}
