use crate::constants::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read variables file '{path}'. Original error: {source}")]
    VariablesReadError { path: String, source: std::io::Error },

    #[error("Failed to parse variables file. Original error: {0}")]
    VariablesParseError(#[from] serde_yaml::Error),

    #[error("Failed to list templates. Original error: {0}")]
    DiscoveryError(#[from] globset::Error),

    #[error("No template file found in '{dir}'.")]
    NoTemplatesError { dir: String },

    #[error("Failed to parse template '{name}'. Original error: {source}")]
    TemplateSyntaxError { name: String, source: minijinja::Error },

    #[error("Failed to render template '{name}'. Original error: {source}")]
    RenderError { name: String, source: minijinja::Error },

    #[error("Failed to render templates: {}", format_paths(.failed))]
    RenderFailures { failed: Vec<PathBuf> },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

impl Error {
    /// Maps each failure class to its process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::VariablesReadError { .. } | Error::VariablesParseError(_) => {
                exit_codes::VARIABLES
            }
            Error::IoError(_)
            | Error::DiscoveryError(_)
            | Error::NoTemplatesError { .. }
            | Error::TemplateSyntaxError { .. } => exit_codes::DISCOVERY,
            Error::RenderError { .. } | Error::RenderFailures { .. } => {
                exit_codes::RENDER
            }
        }
    }
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program
/// with the code for the error's failure class.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_failures_lists_every_path() {
        let err = Error::RenderFailures {
            failed: vec![PathBuf::from("out/a"), PathBuf::from("out/b")],
        };
        assert_eq!(err.to_string(), "Failed to render templates: out/a, out/b");
    }

    #[test]
    fn exit_codes_are_distinct_per_class() {
        let vars = Error::VariablesReadError {
            path: "_vars.yml".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let discovery = Error::NoTemplatesError { dir: "src".into() };
        let render = Error::RenderFailures { failed: vec![] };
        assert_eq!(vars.exit_code(), exit_codes::VARIABLES);
        assert_eq!(discovery.exit_code(), exit_codes::DISCOVERY);
        assert_eq!(render.exit_code(), exit_codes::RENDER);
        assert_ne!(vars.exit_code(), discovery.exit_code());
        assert_ne!(discovery.exit_code(), render.exit_code());
    }
}
