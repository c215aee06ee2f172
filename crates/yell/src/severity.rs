use yell_style::{ColorName, Corners, Theme};

/// The boxed output paths and how each one looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Failure,
    Info,
    Debug,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Failure,
        Severity::Info,
        Severity::Debug,
    ];

    /// Header label, e.g. `SUCCESS`.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Failure => "FAILURE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    pub fn corners(self) -> Corners {
        match self {
            Severity::Success | Severity::Warning | Severity::Error | Severity::Failure => {
                Corners::Heavy
            }
            Severity::Info => Corners::Round,
            Severity::Debug => Corners::Sharp,
        }
    }

    pub fn color(self, theme: &Theme) -> ColorName {
        match self {
            Severity::Success => theme.success,
            Severity::Warning => theme.warning,
            Severity::Error => theme.error,
            Severity::Failure => theme.failure,
            Severity::Info => theme.info,
            Severity::Debug => theme.debug,
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_styles() {
        assert_eq!(Severity::Info.corners(), Corners::Round);
        assert_eq!(Severity::Debug.corners(), Corners::Sharp);
        assert_eq!(Severity::Failure.corners(), Corners::Heavy);
    }

    #[test]
    fn test_colors_follow_theme() {
        let theme = Theme {
            warning: ColorName::Magenta,
            ..Theme::default()
        };
        assert_eq!(Severity::Warning.color(&theme), ColorName::Magenta);
        assert_eq!(Severity::Success.color(&theme), ColorName::Green);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Severity::from_name("info"), Some(Severity::Info));
        assert_eq!(Severity::from_name("ERROR"), Some(Severity::Error));
        assert_eq!(Severity::from_name("loud"), None);
    }
}
