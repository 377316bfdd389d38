use shared::error::BloomError;

/// Accepts finite, strictly positive square footage.
pub(crate) fn validate_area(value: f64, message: &str) -> Result<f64, BloomError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BloomError::validation(message))
    }
}

pub(crate) fn parse_area(raw: &str, message: &str) -> Result<f64, BloomError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| BloomError::validation(message))?;
    validate_area(value, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for value in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(validate_area(value, "bad").is_err(), "{value}");
        }
        assert_eq!(validate_area(12.5, "bad"), Ok(12.5));
    }

    #[test]
    fn parses_trimmed_numbers_only() {
        assert_eq!(parse_area(" 1000 ", "bad"), Ok(1000.0));
        assert!(parse_area("", "bad").is_err());
        assert!(parse_area("12 sq ft", "bad").is_err());
        assert!(parse_area("NaN", "bad").is_err());
    }
}
