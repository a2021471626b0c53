use super::*;
use crate::ast::Value;

impl HppConfig {
    /// Get a typed value from the tree using dot notation.
    ///
    /// The leading segments name nested classes, the last segment names a
    /// variable; all matching is case-insensitive.
    ///
    /// # Examples
    /// ```no_run
    /// # use hpp_cfg::HppConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = HppConfig::from_file("treatment.hpp")?;
    /// let effectiveness: f64 = config.get("Bandaging.BasicBandage.effectiveness")?;
    /// let chances: Vec<f64> = config.get("Bandaging.Tourniquet.reopeningChance")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the path doesn't exist or the value can't be
    /// converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, HppError>
    where
        T: TryFrom<Value, Error = HppError>,
    {
        let value = self.value(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the path doesn't
    /// exist.
    ///
    /// # Examples
    /// ```no_run
    /// # use hpp_cfg::HppConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = HppConfig::from_file("treatment.hpp")?;
    /// if let Some(sound) = config.get_optional::<String>("Bandaging.BasicBandage.sound")? {
    ///     println!("treatment sound: {}", sound);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, HppError>
    where
        T: TryFrom<Value, Error = HppError>,
    {
        match self.value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(HppError::UnknownClass { .. }) | Err(HppError::UnknownVariable { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use hpp_cfg::HppConfig;
    /// # let config = HppConfig::from_file("treatment.hpp").unwrap();
    /// let duration = config.get_or("Bandaging.BasicBandage.treatmentTime", 5.0f64);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = HppError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the tree.
    pub fn value(&self, path: &str) -> Result<Value, HppError> {
        let (class_path, name) = match path.rsplit_once('.') {
            Some((classes, name)) => (Some(classes), name),
            None => (None, path),
        };
        let node = match class_path {
            Some(p) => self.class(p)?,
            None => &self.root,
        };
        Ok(node.variable(name)?.clone())
    }

    /// Resolve a dotted class path to its node.
    pub fn class(&self, path: &str) -> Result<&ClassNode, HppError> {
        let mut node = &self.root;
        for segment in path.split('.') {
            node = node.class(segment)?;
        }
        Ok(node)
    }

    /// Check whether a path resolves to a variable or a class.
    ///
    /// # Examples
    /// ```no_run
    /// # use hpp_cfg::HppConfig;
    /// # let config = HppConfig::from_file("treatment.hpp").unwrap();
    /// if config.has("Bandaging.Tourniquet") {
    ///     println!("tourniquets are configured");
    /// }
    /// ```
    pub fn has(&self, path: &str) -> bool {
        self.value(path).is_ok() || self.class(path).is_ok()
    }
}

/// Attach the assignment's source line to type errors from typed getters.
fn enhance_error_with_line_info(e: HppError, path: &str, raw_content: &str) -> HppError {
    match e {
        HppError::TypeError { message, hint, code } => {
            let name = path.rsplit('.').next().unwrap_or(path);
            let (line, snippet) = helpers::find_source_line(name, raw_content);
            if line > 0 {
                HppError::TypeError {
                    message: format!("{} (line {})\n  → {}", message, line, snippet),
                    hint,
                    code,
                }
            } else {
                HppError::TypeError { message, hint, code }
            }
        }
        other => other,
    }
}
