//! CLI module for steptutor.
//!
//! - Argument parsing
//! - Version display
//! - The ask command
//!
//! ```ignore
//! use steptutor::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Ask(args) => { /* run_ask(args).await */ }
//!     other => println!("{:?}", other),
//! }
//! ```

pub mod args;
pub mod ask;
pub mod version;

pub use args::{parse_args, AskArgs, CliCommand, USAGE};
pub use ask::run_ask;
pub use version::VERSION;
