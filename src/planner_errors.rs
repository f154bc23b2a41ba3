//! # Planner Error Types Module
//!
//! This module defines the error types for the planning shell around the
//! amount engine: catalog loading, option selection and export. Amount
//! parsing and consolidation never produce errors; they degrade to raw text.

/// Custom error types for meal planning operations
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Catalog file could not be read
    CatalogIo(String),
    /// Catalog content is not valid recipe JSON
    CatalogFormat(String),
    /// No options were generated for this day
    UnknownDay(String),
    /// Title is not one of the day's options
    UnknownSelection { day: String, title: String },
    /// A command-line choice was not of the form "day=title"
    InvalidChoice(String),
    /// No day has any options, so there is no plan to finalize
    NothingToFinalize,
    /// Writing the exported document failed
    Export(String),
}

impl std::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::CatalogIo(msg) => write!(f, "Catalog read error: {msg}"),
            PlannerError::CatalogFormat(msg) => write!(f, "Catalog format error: {msg}"),
            PlannerError::UnknownDay(day) => write!(f, "No options available for '{day}'"),
            PlannerError::UnknownSelection { day, title } => {
                write!(f, "'{title}' is not an option for '{day}'")
            }
            PlannerError::InvalidChoice(choice) => {
                write!(f, "Invalid choice '{choice}', expected DAY=TITLE")
            }
            PlannerError::NothingToFinalize => write!(f, "No meal options to finalize"),
            PlannerError::Export(msg) => write!(f, "Export error: {msg}"),
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::CatalogFormat(err.to_string())
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_becomes_export_error() {
        let err = PlannerError::from(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        assert_eq!(err, PlannerError::Export("no such directory".to_string()));
        assert_eq!(err.to_string(), "Export error: no such directory");
    }

    #[test]
    fn test_json_error_becomes_format_error() {
        let err = serde_json::from_str::<Vec<String>>("[1").unwrap_err();
        assert!(matches!(PlannerError::from(err), PlannerError::CatalogFormat(_)));
    }
}
