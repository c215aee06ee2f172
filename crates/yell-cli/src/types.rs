use clap::ValueEnum;
use std::fmt;
use yell::Severity;

/// Which facade path renders the documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputPath {
    Print,
    Success,
    Warning,
    Error,
    Failure,
    Info,
    Debug,
    Label,
}

impl OutputPath {
    pub fn severity(self) -> Option<Severity> {
        match self {
            OutputPath::Success => Some(Severity::Success),
            OutputPath::Warning => Some(Severity::Warning),
            OutputPath::Error => Some(Severity::Error),
            OutputPath::Failure => Some(Severity::Failure),
            OutputPath::Info => Some(Severity::Info),
            OutputPath::Debug => Some(Severity::Debug),
            OutputPath::Print | OutputPath::Label => None,
        }
    }
}

impl fmt::Display for OutputPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputPath::Print => write!(f, "print"),
            OutputPath::Success => write!(f, "success"),
            OutputPath::Warning => write!(f, "warning"),
            OutputPath::Error => write!(f, "error"),
            OutputPath::Failure => write!(f, "failure"),
            OutputPath::Info => write!(f, "info"),
            OutputPath::Debug => write!(f, "debug"),
            OutputPath::Label => write!(f, "label"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
