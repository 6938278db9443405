/// Handles argument parsing and pipeline orchestration.
pub mod cli;

/// Constants used throughout the application.
pub mod constants;

/// Parallel render fan-out and failure aggregation.
pub mod dispatch;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Template discovery in the source directory.
pub mod template;

/// Loading of the shared variables file.
pub mod variables;
