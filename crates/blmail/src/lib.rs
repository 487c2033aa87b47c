//! BaseLinker e-mail template validation and generation.
//!
//! The library side is the aggregator: [`validate_template`] runs tag and
//! HTML validation and merges their findings. The `blmail` binary wraps it
//! in the `check` and `render` commands.

mod args;
mod cli;
mod commands;
pub mod diagnostics;
mod exit;
mod logging;
pub mod report;
mod walk;

pub use crate::cli::run;
pub use crate::exit::Exit;
pub use crate::report::validate_template;
pub use crate::report::validate_template_with;
pub use crate::report::TemplateReport;
