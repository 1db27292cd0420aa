//! Severity of a version change

use std::fmt;

/// Which version component differs between current and latest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeClass {
    /// Major version differs (breaking)
    Major,
    /// Minor version differs (features)
    Minor,
    /// Patch version differs (fixes)
    Patch,
    /// No numeric component differs
    None,
}

impl ChangeClass {
    /// All classes in report order
    pub fn all() -> &'static [ChangeClass] {
        &[
            ChangeClass::Major,
            ChangeClass::Minor,
            ChangeClass::Patch,
            ChangeClass::None,
        ]
    }

    /// Section heading used in the text report
    pub fn heading(&self) -> &'static str {
        match self {
            ChangeClass::Major => "Major updates:",
            ChangeClass::Minor => "Minor updates:",
            ChangeClass::Patch => "Patch updates:",
            ChangeClass::None => "Up-to-date:",
        }
    }

    /// Short label, also used as the JSON key
    pub fn label(&self) -> &'static str {
        match self {
            ChangeClass::Major => "major",
            ChangeClass::Minor => "minor",
            ChangeClass::Patch => "patch",
            ChangeClass::None => "up_to_date",
        }
    }

    /// Returns true if this class represents an available update
    pub fn is_update(&self) -> bool {
        !matches!(self, ChangeClass::None)
    }
}

impl fmt::Display for ChangeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
