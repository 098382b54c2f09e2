use std::fmt;

use tracing::debug;

use crate::{
    kind::FieldKind,
    mask::{format_phone, parse_number},
};

type ChangeCallback = Box<dyn Fn(&str) + Send + Sync>;

/// State of a single text input.
///
/// Validation happens elsewhere; the field only stores the message it is
/// given through [`TextField::set_error`].
pub struct TextField {
    name: String,
    label: String,
    kind: FieldKind,
    value: String,
    touched: bool,
    error: Option<String>,
    revealed: bool,
    required: bool,
    read_only: bool,
    disabled: bool,
    sign_is_fill: bool,
    min: Option<f64>,
    max: Option<f64>,
    on_change: Option<ChangeCallback>,
}

impl TextField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: String::new(),
            touched: false,
            error: None,
            revealed: false,
            required: false,
            read_only: false,
            disabled: false,
            sign_is_fill: false,
            min: None,
            max: None,
            on_change: None,
        }
    }

    /// Sets the initial value without running the change callback.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.value = match self.kind {
            FieldKind::Phone => format_phone(&value),
            _ => value,
        };
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Shows a marker next to the label once the field holds a value.
    #[must_use]
    pub fn sign_is_fill(mut self) -> Self {
        self.sign_is_fill = true;
        self
    }

    /// Sets the lower bound rendered with the input.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound rendered with the input.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Registers a callback that receives every accepted value.
    #[must_use]
    pub fn on_change<F>(mut self, func: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(func));
        self
    }

    /// Applies user input.
    ///
    /// Returns `false` and keeps the current value when the field is not
    /// editable or its kind rejects the input. Phone input is masked before
    /// it is stored.
    pub fn change(&mut self, input: &str) -> bool {
        if self.read_only || self.disabled {
            return false;
        }
        if !self.kind.accepts(input) {
            debug!(field = %self.name, kind = %self.kind, "input rejected");
            return false;
        }

        self.value = match self.kind {
            FieldKind::Phone => format_phone(input),
            _ => input.to_string(),
        };
        if let Some(on_change) = &self.on_change {
            on_change(&self.value);
        }
        true
    }

    pub fn blur(&mut self) {
        self.touched = true;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Flips between concealed and revealed input for password fields.
    pub fn toggle_password_visibility(&mut self) {
        if self.kind == FieldKind::Password && !self.disabled {
            self.revealed = !self.revealed;
        }
    }

    #[must_use]
    pub fn input_type(&self) -> &'static str {
        self.kind.input_type(self.revealed)
    }

    /// The `(min, max)` attributes to render.
    ///
    /// Bounds are hints for the rendered input and are not enforced on
    /// [`TextField::change`]. Kinds without a bounded input render none.
    #[must_use]
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        if self.kind.takes_bounds() {
            (self.min, self.max)
        } else {
            (None, None)
        }
    }

    /// The error is only surfaced after the user has left the field.
    #[must_use]
    pub fn helper_text(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.helper_text().is_some()
    }

    /// The value as rendered. Number fields show the parsed number when the
    /// raw text parses.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Number => {
                parse_number(&self.value).map_or_else(|| self.value.clone(), |n| n.to_string())
            }
            _ => self.value.clone(),
        }
    }

    #[must_use]
    pub fn shows_fill_sign(&self) -> bool {
        self.sign_is_fill && !self.display_value().is_empty()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("touched", &self.touched)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
