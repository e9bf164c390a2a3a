use super::*;

impl Config {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```
    /// # use harbol_cfg::Config;
    /// let config: Config = r#""server": { "host": "localhost", "port": 8080 }"#.parse()?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// assert_eq!((host.as_str(), port), ("localhost", 8080));
    /// # Ok::<(), harbol_cfg::CfgError>(())
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be converted to `T`.
    pub fn get<'a, T>(&'a self, path: &str) -> Result<T, CfgError>
    where
        T: TryFrom<&'a Value, Error = CfgError>,
    {
        self.document.get_as(path)
    }

    /// Get an optional typed value - returns `None` if the path doesn't exist.
    ///
    /// A value of the wrong type is still an error.
    pub fn get_optional<'a, T>(&'a self, path: &str) -> Result<Option<T>, CfgError>
    where
        T: TryFrom<&'a Value, Error = CfgError>,
    {
        match self.document.get_as(path) {
            Ok(value) => Ok(Some(value)),
            Err(CfgError::PathNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<'a, T>(&'a self, path: &str, default: T) -> T
    where
        T: TryFrom<&'a Value, Error = CfgError>,
    {
        self.document.get_as_or(path, default)
    }

    /// Get all keys of the section at `path`, in file order.
    ///
    /// An empty path lists the top-level keys.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, CfgError> {
        let section = if path.is_empty() {
            &self.document
        } else {
            self.document.get_section(path)?
        };
        Ok(section.keys().map(str::to_string).collect())
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.document.has(path)
    }
}
