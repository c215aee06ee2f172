use std::collections::HashMap;

/// Per call-site-group bookkeeping, keyed by the caller's source identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CallerState {
    /// Source file stem (`src/net/client.rs` -> `client`).
    pub identity: String,
    /// Source file basename, filled in on first observation.
    pub file_name: Option<String>,
    pub enabled: bool,
    pub level: usize,
    pub total_calls: u64,
    pub per_function_calls: HashMap<String, u64>,
    pub last_function: Option<String>,
    /// Call chain from outermost to innermost frame.
    pub last_stack: Vec<String>,
    pub last_line: Option<u32>,
}

impl CallerState {
    pub const DEFAULT_LEVEL: usize = 1;

    pub fn new(identity: impl Into<String>) -> Self {
        Self::with_settings(identity, true, Self::DEFAULT_LEVEL)
    }

    pub fn with_settings(identity: impl Into<String>, enabled: bool, level: usize) -> Self {
        Self {
            identity: identity.into(),
            file_name: None,
            enabled,
            level,
            total_calls: 0,
            per_function_calls: HashMap::new(),
            last_function: None,
            last_stack: Vec::new(),
            last_line: None,
        }
    }

    /// Record one call from `function`, returning its updated count.
    ///
    /// Disabled callers keep their per-function counts frozen; the function
    /// name is still remembered.
    pub fn log_function(&mut self, function: &str) -> Option<u64> {
        self.last_function = Some(function.to_string());
        if !self.enabled {
            return None;
        }
        let count = self
            .per_function_calls
            .entry(function.to_string())
            .or_insert(0);
        *count += 1;
        Some(*count)
    }

    pub fn function_calls(&self, function: &str) -> u64 {
        self.per_function_calls.get(function).copied().unwrap_or(0)
    }

    /// Call count of the most recently seen function.
    pub fn last_function_calls(&self) -> u64 {
        self.last_function
            .as_deref()
            .map(|f| self.function_calls(f))
            .unwrap_or(0)
    }

    /// File name for headers, falling back to `<identity>.rs` for pre-registered entries.
    pub fn display_file_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("{}.rs", self.identity))
    }
}
