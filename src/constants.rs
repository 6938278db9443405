//! Constants used throughout the stencil application

/// File name of the YAML file defining all template variables,
/// expected directly inside the source directory.
pub const VARS_FILE: &str = "_vars.yml";

/// File extension used for template files.
pub const TEMPLATE_EXT: &str = "tmpl";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    pub const VARIABLES: i32 = 2;
    pub const DISCOVERY: i32 = 3;
    pub const RENDER: i32 = 4;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
