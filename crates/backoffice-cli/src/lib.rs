//! Library components for the backoffice console CLI.

pub mod logging;
pub mod shell;
