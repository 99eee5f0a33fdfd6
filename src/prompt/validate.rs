use crate::error::ValidationError;

/// Minutes in a day
const MAX_MINUTES: u32 = 1440;

/// Parse a typed study duration.
///
/// Only ASCII digits are accepted, no sign or surrounding whitespace.
pub fn parse_minutes(input: &str) -> Result<u32, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric);
    }

    // all digits, so a parse failure can only be overflow
    let minutes = input
        .parse::<u32>()
        .map_err(|_| ValidationError::ExceedsDay)?;

    match minutes {
        0 => Err(ValidationError::Zero),
        m if m > MAX_MINUTES => Err(ValidationError::ExceedsDay),
        m => Ok(m),
    }
}
