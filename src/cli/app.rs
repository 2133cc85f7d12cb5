//! Main CLI application structure

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::customer::{self, CustomerCommands};
use super::employee::{self, EmployeeCommands};
use super::invoice::{self, InvoiceCommands};
use super::logging;
use super::output::{money, Output, OutputFormat};
use super::phone::{self, PhoneCommands};
use super::report::{self, ReportCommands};
use super::session::Session;
use super::demo;
use crate::manager::Manager;
use crate::storage::{seed_empty, GlobalConfig, SeedReport, Shop};

/// Data directory used when nothing else is configured
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Parser)]
#[command(name = "phone-store")]
#[command(author, version, about = "Phone shop inventory, sales and reporting")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Data directory holding the CSV files
    #[arg(long, short = 'd', global = true, env = "PHONE_STORE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a data directory
    Init {
        /// Directory to initialize (defaults to the data directory)
        path: Option<PathBuf>,

        /// Do not add sample records
        #[arg(long)]
        no_seed: bool,
    },

    /// Add sample records to every entity that is empty
    Seed,

    /// Show record counts and headline totals
    Status,

    /// Manage phones
    #[command(subcommand)]
    Phone(PhoneCommands),

    /// Manage invoices
    #[command(subcommand)]
    Invoice(InvoiceCommands),

    /// Manage customers
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Manage employees
    #[command(subcommand)]
    Employee(EmployeeCommands),

    /// Sales reports across phones and invoices
    #[command(subcommand)]
    Report(ReportCommands),

    /// Walk through every feature using the current data
    Demo,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let global = GlobalConfig::load()?;
    let output = Output::new(cli.format.unwrap_or(global.default_format));
    let data_dir = cli
        .data_dir
        .or(global.data_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    output.verbose_ctx("main", &format!("Using data directory: {}", data_dir.display()));

    match cli.command {
        Commands::Init { path, no_seed } => {
            let path = path.unwrap_or(data_dir);
            init(&output, &path, no_seed)?
        }
        Commands::Seed => seed(&output, &data_dir)?,
        Commands::Status => status(&output, &data_dir)?,
        Commands::Phone(cmd) => phone::run(cmd, &data_dir, &output)?,
        Commands::Invoice(cmd) => invoice::run(cmd, &data_dir, &output)?,
        Commands::Customer(cmd) => customer::run(cmd, &data_dir, &output)?,
        Commands::Employee(cmd) => employee::run(cmd, &data_dir, &output)?,
        Commands::Report(cmd) => report::run(cmd, &data_dir, &output)?,
        Commands::Demo => demo::run(&data_dir, &output)?,
    }

    Ok(())
}

fn init(output: &Output, path: &Path, no_seed: bool) -> Result<()> {
    output.verbose_ctx("init", &format!("Initializing phone store at: {}", path.display()));
    let shop = Shop::init(path)?;

    let seeded = if !no_seed && shop.config().seed_when_empty {
        let mut registry = shop.load()?;
        let report = seed_empty(&mut registry)?;
        shop.save(&registry)?;
        report
    } else {
        SeedReport::default()
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": shop.root().display().to_string(),
            "seeded": seeded,
        }));
    } else {
        output.success(&format!("Initialized phone store at {}", shop.root().display()));
        if seeded.total() > 0 {
            print_seed_report(&seeded);
        }
    }

    Ok(())
}

fn seed(output: &Output, data_dir: &Path) -> Result<()> {
    let mut session = Session::open(data_dir)?;
    let report = seed_empty(session.registry_mut())?;

    if report.total() > 0 {
        session.save()?;
    }

    if output.is_json() {
        output.data(&report);
    } else if report.total() == 0 {
        output.success("Nothing to seed: every entity already has records");
    } else {
        output.success(&format!("Seeded {} records", report.total()));
        print_seed_report(&report);
    }

    Ok(())
}

fn print_seed_report(report: &SeedReport) {
    let entries = [
        ("phones", report.phones),
        ("invoices", report.invoices),
        ("customers", report.customers),
        ("employees", report.employees),
    ];
    for (entity, count) in entries.iter().filter(|(_, count)| *count > 0) {
        println!("  {}: {}", entity, count);
    }
}

fn status(output: &Output, data_dir: &Path) -> Result<()> {
    let session = Session::open(data_dir)?;
    let registry = session.registry();

    if output.is_json() {
        output.data(&serde_json::json!({
            "data_dir": session.shop().root().display().to_string(),
            "phones": registry.phones.count(),
            "invoices": registry.invoices.count(),
            "customers": registry.customers.count(),
            "employees": registry.employees.count(),
            "inventory_value": registry.phones.total_inventory_value(),
            "total_revenue": registry.invoices.total_revenue(),
        }));
    } else {
        println!("Phone Store Status");
        println!("{}", "=".repeat(40));
        println!("Data: {}", session.shop().root().display());
        println!();
        println!("Phones:    {}", registry.phones.count());
        println!("Invoices:  {}", registry.invoices.count());
        println!("Customers: {}", registry.customers.count());
        println!("Employees: {}", registry.employees.count());
        println!();
        println!("Inventory value: {}", money(registry.phones.total_inventory_value()));
        println!("Total revenue:   {}", money(registry.invoices.total_revenue()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["phone-store", "status", "--format", "json", "-d", "/tmp/shop"]).unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shop")));
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn parses_sort_key() {
        let cli = Cli::try_parse_from(["phone-store", "phone", "sort", "--by", "release-year", "--desc"]).unwrap();

        match cli.command {
            Commands::Phone(PhoneCommands::Sort { by, desc }) => {
                assert_eq!(by, crate::manager::PhoneSortKey::ReleaseYear);
                assert!(desc);
            }
            _ => panic!("expected phone sort"),
        }
    }

    #[test]
    fn rejects_bad_invoice_date() {
        let result = Cli::try_parse_from([
            "phone-store", "invoice", "date-range", "2024-13-01", "2024-12-31",
        ]);
        assert!(result.is_err());
    }
}
