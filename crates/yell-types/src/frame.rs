use std::path::Path;

/// One entry of a call stack, innermost frames first when listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Fully qualified function path; `None` outside any function.
    pub function: Option<String>,
    pub file: String,
    pub line: Option<u32>,
}

impl Frame {
    pub fn new(function: Option<&str>, file: impl Into<String>, line: Option<u32>) -> Self {
        Self {
            function: function.map(str::to_string),
            file: file.into(),
            line,
        }
    }

    /// `src/net/client.rs` -> `client.rs`
    pub fn file_name(&self) -> String {
        Path::new(&self.file)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.clone())
    }

    /// `src/net/client.rs` -> `client`
    pub fn file_stem(&self) -> String {
        Path::new(&self.file)
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.clone())
    }

    /// Bare function name without module path, hash suffix or closure markers.
    pub fn function_name(&self) -> Option<String> {
        self.function.as_deref().map(short_function_name)
    }

    /// Name used for call counting: the function name, or the file name at module scope.
    pub fn function_label(&self) -> String {
        self.function_name().unwrap_or_else(|| self.file_name())
    }

    /// Call-chain entry: `name()` for functions, the file name otherwise.
    pub fn chain_label(&self) -> String {
        match self.function_name() {
            Some(name) => format!("{}()", name),
            None => self.file_name(),
        }
    }
}

fn short_function_name(path: &str) -> String {
    let mut segments: Vec<&str> = path.split("::").collect();

    if segments.last().is_some_and(|s| is_symbol_hash(s)) {
        segments.pop();
    }
    while segments.len() > 1 && segments.last() == Some(&"{{closure}}") {
        segments.pop();
    }

    segments.last().copied().unwrap_or(path).to_string()
}

fn is_symbol_hash(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}
