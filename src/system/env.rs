use std::collections::HashMap;

/// Abstraction for environment lookups to enable testing without touching
/// the process environment
pub trait EnvReader {
    /// Value of `key` if it is set. A variable set to the empty string is
    /// `Some("")`, an unset one is `None`.
    fn lookup_env(&self, key: &str) -> Option<String>;
}

/// Real environment reader using std::env
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEnvReader;

impl EnvReader for RealEnvReader {
    fn lookup_env(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Environment reader backed by a fixed map
#[derive(Debug, Clone, Default)]
pub struct MockEnvReader {
    pub return_value_for_input: HashMap<String, String>,
}

impl MockEnvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.return_value_for_input
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvReader for MockEnvReader {
    fn lookup_env(&self, key: &str) -> Option<String> {
        self.return_value_for_input.get(key).cloned()
    }
}
