use super::*;
use crate::ast::Value;

impl HppConfig {
    /// Get a value and check it against a predicate - returns a detailed
    /// error naming the expected values if the check fails.
    pub fn get_validated<T, F>(
        &self,
        path: &str,
        validator: F,
        valid_values: &str,
    ) -> Result<T, HppError>
    where
        T: TryFrom<Value, Error = HppError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            let name = path.rsplit('.').next().unwrap_or(path);
            let (line, snippet) = helpers::find_source_line(name, &self.raw_content);
            let hint = if line > 0 {
                format!("Valid values are: {}\n  → line {}: {}", valid_values, line, snippet)
            } else {
                format!("Valid values are: {}", valid_values)
            };
            return Err(HppError::TypeError {
                message: format!("Invalid value for `{}`\nExpected: {}", path, valid_values),
                hint: Some(hint),
                code: Some(450),
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and require it to be one of the allowed values
    /// (case-insensitive).
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, HppError> {
        let value: String = self.get(path)?;

        if !allowed_values.iter().any(|&v| v.eq_ignore_ascii_case(&value)) {
            return Err(HppError::TypeError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                code: Some(451),
            });
        }

        Ok(value)
    }
}
