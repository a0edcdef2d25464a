use crate::usecases::Error as ParameterError;

/// Treat empty values like missing ones, e.g. `?lat=&lon=2.35`.
pub fn required_param<'a>(
    name: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ParameterError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ParameterError::MissingParameter(name))
}

pub fn optional_param<'a>(value: Option<&'a str>) -> Option<&'a str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn parse_number(name: &'static str, value: &str) -> Result<f64, ParameterError> {
    let number = value
        .parse::<f64>()
        .map_err(|err| ParameterError::InvalidParameter(name, err.to_string()))?;
    if !number.is_finite() {
        return Err(ParameterError::InvalidParameter(
            name,
            "not a finite number".to_string(),
        ));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_params() {
        assert!(matches!(
            required_param("lat", None),
            Err(ParameterError::MissingParameter("lat"))
        ));
        assert!(matches!(
            required_param("lat", Some(" ")),
            Err(ParameterError::MissingParameter("lat"))
        ));
        assert_eq!("48.8", required_param("lat", Some("48.8")).unwrap());
        assert_eq!(None, optional_param(Some("")));
        assert_eq!(Some("2"), optional_param(Some("2")));
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(48.8566, parse_number("lat", "48.8566").unwrap());
        assert_eq!(-3.0, parse_number("lon", "-3").unwrap());
        assert!(parse_number("lat", "north").is_err());
        assert!(parse_number("lat", "NaN").is_err());
        assert!(parse_number("lat", "inf").is_err());
    }
}
