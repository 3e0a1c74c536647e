pub mod backend;
pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod credentials;
pub mod describe;
pub mod dispatch;
pub mod error;
pub mod gh;
pub mod git;
pub mod llm;
pub mod logging;
pub mod output;
pub mod progress;
pub mod prompt;
pub mod prompts;
pub mod review;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_utils;

pub use backend::{Backend, SystemBackend};
pub use describe::{DescriptionGenerator, PrDescription, Provenance};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use error::{Result, ShipError};
pub use review::ReviewOutcome;
