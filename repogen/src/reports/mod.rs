//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod init;
mod inspect;
mod output;

pub use generate::{GenerateReport, PreviewReport};
pub use init::InitReport;
pub use inspect::InspectReport;
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub(crate) use output::TextOutput;
