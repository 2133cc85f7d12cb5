//! Customer CLI commands

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::output::{money, Output};
use super::records::{add_record, csv_field, ensure_same_id, print_extremes, print_list, report_delete, require};
use super::session::Session;
use crate::domain::Customer;
use crate::manager::{CustomerSortKey, Manager, SortDirection};

const HEADER: &str = "ID       NAME                 PHONE        EMAIL                     TIER       JOINED         SPENT";

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List customers in insertion order
    List,

    /// Show customer details
    Show {
        /// Customer ID (case-insensitive)
        id: String,
    },

    /// Add a customer
    Add(CustomerArgs),

    /// Update a customer's fields
    ///
    /// Only the given options change. The ID itself cannot be changed.
    Update {
        /// Customer ID (case-insensitive)
        id: String,

        #[command(flatten)]
        changes: CustomerChanges,
    },

    /// Delete every customer with this ID
    Delete {
        /// Customer ID (case-insensitive)
        id: String,
    },

    /// Find customers whose name contains a keyword
    Search {
        /// Name keyword (case-insensitive)
        name: String,
    },

    /// Find customers whose tier contains a keyword
    Tier {
        /// Tier keyword (case-insensitive)
        tier: String,
    },

    /// List customers sorted by a field
    Sort {
        #[arg(long, value_enum)]
        by: CustomerSortKey,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },

    /// Show the biggest/smallest spenders and oldest/newest members
    Extremes,

    /// Show spending totals and membership counts
    Stats,
}

#[derive(Args)]
pub struct CustomerArgs {
    #[arg(value_parser = csv_field)]
    pub id: String,
    #[arg(value_parser = csv_field)]
    pub full_name: String,
    #[arg(value_parser = csv_field)]
    pub phone: String,
    #[arg(value_parser = csv_field)]
    pub email: String,
    #[arg(value_parser = csv_field)]
    pub tier: String,
    pub join_year: i32,
    pub total_spent: f64,
}

impl From<CustomerArgs> for Customer {
    fn from(args: CustomerArgs) -> Self {
        Customer::new(
            args.id,
            args.full_name,
            args.phone,
            args.email,
            args.tier,
            args.join_year,
            args.total_spent,
        )
    }
}

#[derive(Args)]
pub struct CustomerChanges {
    /// New ID (must equal the current one, ignoring case)
    #[arg(long = "id")]
    pub new_id: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub full_name: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub phone: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub email: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub tier: Option<String>,

    #[arg(long)]
    pub join_year: Option<i32>,

    #[arg(long)]
    pub total_spent: Option<f64>,
}

impl CustomerChanges {
    fn apply(self, customer: &mut Customer) {
        if let Some(v) = self.full_name {
            customer.full_name = v;
        }
        if let Some(v) = self.phone {
            customer.phone = v;
        }
        if let Some(v) = self.email {
            customer.email = v;
        }
        if let Some(v) = self.tier {
            customer.tier = v;
        }
        if let Some(v) = self.join_year {
            customer.join_year = v;
        }
        if let Some(v) = self.total_spent {
            customer.total_spent = v;
        }
    }
}

pub fn run(cmd: CustomerCommands, data_dir: &Path, output: &Output) -> Result<()> {
    let mut session = Session::open(data_dir)?;

    match cmd {
        CustomerCommands::List => {
            print_customers(output, &session.registry().customers.get_all());
        }
        CustomerCommands::Show { id } => {
            let customer = require(&session.registry().customers, &id)?;
            show_customer(output, customer);
        }
        CustomerCommands::Add(args) => {
            let customer = Customer::from(args);
            output.verbose_ctx("customer", &format!("Adding customer {}", customer.id));
            add_record(&mut session.registry_mut().customers, customer.clone());
            session.save()?;

            if output.is_json() {
                output.data(&customer);
            } else {
                output.success(&format!("Added customer: {} - {}", customer.id, customer.full_name));
            }
        }
        CustomerCommands::Update { id, changes } => {
            ensure_same_id("customer", &id, changes.new_id.as_deref())?;

            let mut customer = require(&session.registry().customers, &id)?.clone();
            changes.apply(&mut customer);
            session.registry_mut().customers.update(&id, customer.clone());
            session.save()?;

            if output.is_json() {
                output.data(&customer);
            } else {
                output.success(&format!("Updated customer: {}", customer.id));
            }
        }
        CustomerCommands::Delete { id } => {
            let removed = session.registry_mut().customers.delete(&id);
            if removed {
                session.save()?;
            }
            report_delete(output, "customer", &id, removed)?;
        }
        CustomerCommands::Search { name } => {
            print_customers(output, &session.registry().customers.find_by_name(&name));
        }
        CustomerCommands::Tier { tier } => {
            print_customers(output, &session.registry().customers.find_by_tier(&tier));
        }
        CustomerCommands::Sort { by, desc } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            print_customers(output, &session.registry().customers.sort_by(by, direction));
        }
        CustomerCommands::Extremes => show_extremes(output, &session),
        CustomerCommands::Stats => show_stats(output, &session),
    }

    Ok(())
}

pub(super) fn print_customers(output: &Output, customers: &[Customer]) {
    print_list(output, customers, HEADER, customer_row);
}

fn customer_row(customer: &Customer) -> String {
    format!(
        "{:<8} {:<20} {:<12} {:<25} {:<10} {:>6} {:>13}",
        customer.id,
        customer.full_name,
        customer.phone,
        customer.email,
        customer.tier,
        customer.join_year,
        money(customer.total_spent)
    )
}

fn show_customer(output: &Output, customer: &Customer) {
    if output.is_json() {
        output.data(customer);
        return;
    }

    println!("Customer: {}", customer.id);
    println!("Name: {}", customer.full_name);
    println!("Phone: {}", customer.phone);
    println!("Email: {}", customer.email);
    println!("Tier: {}", customer.tier);
    println!("Member since: {}", customer.join_year);
    println!("Total spent: {}", money(customer.total_spent));
}

pub(super) fn show_extremes(output: &Output, session: &Session) {
    let customers = &session.registry().customers;
    print_extremes(
        output,
        &[
            ("highest_spent", customers.highest_spent()),
            ("lowest_spent", customers.lowest_spent()),
            ("earliest_join", customers.earliest_join()),
            ("latest_join", customers.latest_join()),
        ],
        customer_row,
    );
}

pub(super) fn show_stats(output: &Output, session: &Session) {
    let customers = &session.registry().customers;
    let by_tier = customers.count_by_tier();
    let by_year = customers.count_by_join_year();
    let by_domain = customers.count_by_email_domain();

    if output.is_json() {
        output.data(&serde_json::json!({
            "count": customers.count(),
            "total_spent": customers.total_spent(),
            "average_spent": customers.average_spent(),
            "by_tier": by_tier,
            "by_join_year": by_year,
            "by_email_domain": by_domain,
        }));
        return;
    }

    println!("Customers: {}", customers.count());
    println!("Total spent: {}", money(customers.total_spent()));
    println!("Average spent: {}", money(customers.average_spent()));
    output.map("Per tier", &by_tier, |n| n.to_string());
    output.map("Per join year", &by_year, |n| n.to_string());
    output.map("Per email domain", &by_domain, |n| n.to_string());
}
