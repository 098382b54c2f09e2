use std::fmt;

type ChangeCallback = Box<dyn Fn(bool) + Send + Sync>;

/// State of a checkbox with an optional info tooltip.
pub struct CheckboxField {
    name: String,
    label: String,
    info: Option<String>,
    checked: bool,
    disabled: bool,
    read_only: bool,
    on_change: Option<ChangeCallback>,
}

impl CheckboxField {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            info: None,
            checked: false,
            disabled: false,
            read_only: false,
            on_change: None,
        }
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    #[must_use]
    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn on_change<F>(mut self, func: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(func));
        self
    }

    /// Flips the checked state and returns whether it changed.
    pub fn toggle(&mut self) -> bool {
        if self.disabled || self.read_only {
            return false;
        }
        self.checked = !self.checked;
        if let Some(on_change) = &self.on_change {
            on_change(self.checked);
        }
        true
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
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
    pub fn info_text(&self) -> Option<&str> {
        self.info.as_deref()
    }
}

impl fmt::Debug for CheckboxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxField")
            .field("name", &self.name)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}
