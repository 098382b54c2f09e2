//! Input field state for the booking forms.
//!
//! The field variant is chosen once through [`FieldKind`]; everything else
//! (acceptance, masking, display) follows from it.
mod checkbox;
mod error;
mod kind;
mod mask;
mod text_field;

pub use checkbox::CheckboxField;
pub use error::Error;
pub use kind::FieldKind;
pub use mask::{PHONE_MASK, format_phone, parse_number};
pub use text_field::TextField;
