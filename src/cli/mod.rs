//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Data directory management | `init`, `seed`, `status` |
//! | Phone | Inventory | `phone add`, `phone search`, `phone sort --by price` |
//! | Invoice | Sales ledger | `invoice add`, `invoice date-range`, `invoice stats` |
//! | Customer | Members | `customer tier gold`, `customer extremes` |
//! | Employee | Staff | `employee role sales`, `employee stats` |
//! | Report | Cross-entity analytics | `report revenue-by-brand`, `report revenue-by-month` |
//! | Demo | Guided walkthrough | `demo` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logging on stderr:
//! ```bash
//! phone-store --verbose phone list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod logging;
mod session;
mod records;
mod phone;
mod invoice;
mod customer;
mod employee;
mod report;
mod demo;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
