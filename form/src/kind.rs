use std::{fmt, str::FromStr};

use crate::error::Error;

/// The variant of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Phone,
    Integer,
    Number,
    Password,
    Email,
    Textarea,
    StringInteger,
}

impl FieldKind {
    /// Returns whether `input` may replace the current value.
    ///
    /// `Integer` takes empty input or a whole number, `StringInteger` takes
    /// empty input or ASCII digits. Every other kind takes anything.
    #[must_use]
    pub fn accepts(self, input: &str) -> bool {
        match self {
            Self::Integer => input.is_empty() || is_whole_number(input),
            Self::StringInteger => input.bytes().all(|b| b.is_ascii_digit()),
            _ => true,
        }
    }

    /// The HTML input type to render.
    #[must_use]
    pub fn input_type(self, revealed: bool) -> &'static str {
        match self {
            Self::Password if revealed => "text",
            Self::Password => "password",
            Self::Integer | Self::Number => "number",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Text | Self::Textarea | Self::StringInteger => "text",
        }
    }

    /// Whether the rendered input carries `min`/`max` attributes.
    #[must_use]
    pub fn takes_bounds(self) -> bool {
        !matches!(self, Self::Password | Self::Phone | Self::Textarea)
    }

    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Textarea)
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Phone => "phone",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Password => "password",
            Self::Email => "email",
            Self::Textarea => "textarea",
            Self::StringInteger => "stringInteger",
        }
    }
}

fn is_whole_number(input: &str) -> bool {
    input
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n.fract() == 0.0)
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "phone" => Ok(Self::Phone),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "password" => Ok(Self::Password),
            "email" => Ok(Self::Email),
            "textarea" => Ok(Self::Textarea),
            "stringInteger" => Ok(Self::StringInteger),
            _ => Err(Error::UnknownFieldKind(s.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
