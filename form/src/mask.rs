/// Mask applied to phone inputs. `9` stands for one digit.
pub const PHONE_MASK: &str = "(999) 999-9999";

/// Formats `input` progressively with [`PHONE_MASK`].
///
/// Non-digits are dropped, digits beyond the mask are ignored and literal
/// mask characters are only written once a digit follows them.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let mut digits = input.chars().filter(char::is_ascii_digit).peekable();
    let mut out = String::with_capacity(PHONE_MASK.len());
    let mut pending = String::new();

    for slot in PHONE_MASK.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == '9' {
            out.push_str(&pending);
            pending.clear();
            if let Some(digit) = digits.next() {
                out.push(digit);
            }
        } else {
            pending.push(slot);
        }
    }

    out
}

/// Parses a human-entered number, ignoring spaces and thousands separators.
///
/// Returns `None` for empty or unparseable input.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let cleaned: String = input.chars().filter(|c| *c != ' ' && *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
