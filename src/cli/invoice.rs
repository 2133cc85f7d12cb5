//! Invoice CLI commands

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::output::{money, Output};
use super::records::{add_record, csv_field, ensure_same_id, print_extremes, print_list, report_delete, require};
use super::session::Session;
use crate::domain::{Invoice, DATE_FORMAT};
use crate::manager::{InvoiceSortKey, Manager, SortDirection};

const HEADER: &str =
    "ID       CUSTOMER             PHONE    QTY   UNIT PRICE  DISC  DATE        SALESPERSON";

#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// List invoices in insertion order
    List,

    /// Show invoice details
    Show {
        /// Invoice ID (case-insensitive)
        id: String,
    },

    /// Add an invoice
    Add(InvoiceArgs),

    /// Update an invoice's fields
    ///
    /// Only the given options change. The ID itself cannot be changed.
    Update {
        /// Invoice ID (case-insensitive)
        id: String,

        #[command(flatten)]
        changes: InvoiceChanges,
    },

    /// Delete every invoice with this ID
    Delete {
        /// Invoice ID (case-insensitive)
        id: String,
    },

    /// Find invoices whose customer name contains a keyword
    Search {
        /// Customer name keyword (case-insensitive)
        customer: String,
    },

    /// Find invoices for one phone
    ByPhone {
        /// Phone ID (case-insensitive)
        phone_id: String,
    },

    /// Find invoices sold within a date range (inclusive, YYYY-MM-DD)
    DateRange { from: NaiveDate, to: NaiveDate },

    /// List invoices sorted by a field
    Sort {
        #[arg(long, value_enum)]
        by: InvoiceSortKey,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },

    /// Show the largest/smallest orders
    Extremes,

    /// Show revenue totals and per-salesperson figures
    Stats,
}

#[derive(Args)]
pub struct InvoiceArgs {
    #[arg(value_parser = csv_field)]
    pub id: String,
    #[arg(value_parser = csv_field)]
    pub customer_name: String,
    #[arg(value_parser = csv_field)]
    pub customer_phone: String,
    #[arg(value_parser = csv_field)]
    pub phone_id: String,
    pub quantity: i32,
    pub unit_price: f64,

    /// Discount as a fraction (0.05 = 5%)
    pub discount_rate: f64,

    /// Sale date (YYYY-MM-DD)
    pub sale_date: NaiveDate,

    #[arg(value_parser = csv_field)]
    pub salesperson: String,
}

impl From<InvoiceArgs> for Invoice {
    fn from(args: InvoiceArgs) -> Self {
        Invoice::new(
            args.id,
            args.customer_name,
            args.customer_phone,
            args.phone_id,
            args.quantity,
            args.unit_price,
            args.discount_rate,
            args.sale_date,
            args.salesperson,
        )
    }
}

#[derive(Args)]
pub struct InvoiceChanges {
    /// New ID (must equal the current one, ignoring case)
    #[arg(long = "id")]
    pub new_id: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub customer_name: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub customer_phone: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub phone_id: Option<String>,

    #[arg(long)]
    pub quantity: Option<i32>,

    #[arg(long)]
    pub unit_price: Option<f64>,

    #[arg(long)]
    pub discount_rate: Option<f64>,

    #[arg(long)]
    pub sale_date: Option<NaiveDate>,

    #[arg(long, value_parser = csv_field)]
    pub salesperson: Option<String>,
}

impl InvoiceChanges {
    fn apply(self, invoice: &mut Invoice) {
        if let Some(v) = self.customer_name {
            invoice.customer_name = v;
        }
        if let Some(v) = self.customer_phone {
            invoice.customer_phone = v;
        }
        if let Some(v) = self.phone_id {
            invoice.phone_id = v;
        }
        if let Some(v) = self.quantity {
            invoice.quantity = v;
        }
        if let Some(v) = self.unit_price {
            invoice.unit_price = v;
        }
        if let Some(v) = self.discount_rate {
            invoice.discount_rate = v;
        }
        if let Some(v) = self.sale_date {
            invoice.sale_date = v;
        }
        if let Some(v) = self.salesperson {
            invoice.salesperson = v;
        }
    }
}

pub fn run(cmd: InvoiceCommands, data_dir: &Path, output: &Output) -> Result<()> {
    let mut session = Session::open(data_dir)?;

    match cmd {
        InvoiceCommands::List => {
            print_invoices(output, &session.registry().invoices.get_all());
        }
        InvoiceCommands::Show { id } => {
            let invoice = require(&session.registry().invoices, &id)?;
            show_invoice(output, &session, invoice);
        }
        InvoiceCommands::Add(args) => {
            let invoice = Invoice::from(args);
            output.verbose_ctx("invoice", &format!("Adding invoice {}", invoice.id));
            add_record(&mut session.registry_mut().invoices, invoice.clone());
            session.save()?;

            if output.is_json() {
                output.data(&invoice);
            } else {
                output.success(&format!(
                    "Added invoice: {} ({} x {}, net {})",
                    invoice.id,
                    invoice.quantity,
                    invoice.phone_id,
                    money(invoice.net_total())
                ));
            }
        }
        InvoiceCommands::Update { id, changes } => {
            ensure_same_id("invoice", &id, changes.new_id.as_deref())?;

            let mut invoice = require(&session.registry().invoices, &id)?.clone();
            changes.apply(&mut invoice);
            session.registry_mut().invoices.update(&id, invoice.clone());
            session.save()?;

            if output.is_json() {
                output.data(&invoice);
            } else {
                output.success(&format!("Updated invoice: {}", invoice.id));
            }
        }
        InvoiceCommands::Delete { id } => {
            let removed = session.registry_mut().invoices.delete(&id);
            if removed {
                session.save()?;
            }
            report_delete(output, "invoice", &id, removed)?;
        }
        InvoiceCommands::Search { customer } => {
            print_invoices(output, &session.registry().invoices.find_by_customer_name(&customer));
        }
        InvoiceCommands::ByPhone { phone_id } => {
            print_invoices(output, &session.registry().invoices.find_by_phone_id(&phone_id));
        }
        InvoiceCommands::DateRange { from, to } => {
            print_invoices(output, &session.registry().invoices.find_by_date_range(from, to));
        }
        InvoiceCommands::Sort { by, desc } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            print_invoices(output, &session.registry().invoices.sort_by(by, direction));
        }
        InvoiceCommands::Extremes => show_extremes(output, &session),
        InvoiceCommands::Stats => show_stats(output, &session),
    }

    Ok(())
}

pub(super) fn print_invoices(output: &Output, invoices: &[Invoice]) {
    print_list(output, invoices, HEADER, invoice_row);
}

fn invoice_row(invoice: &Invoice) -> String {
    format!(
        "{:<8} {:<20} {:<8} {:>3} {:>12} {:>5} {:<11} {}",
        invoice.id,
        invoice.customer_name,
        invoice.phone_id,
        invoice.quantity,
        money(invoice.unit_price),
        format!("{:.0}%", invoice.discount_rate * 100.0),
        invoice.sale_date.format(DATE_FORMAT),
        invoice.salesperson
    )
}

fn show_invoice(output: &Output, session: &Session, invoice: &Invoice) {
    let phone = session.analytics().phone_for(invoice);

    if output.is_json() {
        output.data(&serde_json::json!({
            "invoice": invoice,
            "gross_total": invoice.gross_total(),
            "net_total": invoice.net_total(),
            "discount_amount": invoice.discount_amount(),
            "brand": phone.brand(),
        }));
        return;
    }

    println!("Invoice: {}", invoice.id);
    println!("Customer: {} ({})", invoice.customer_name, invoice.customer_phone);
    println!("Phone: {} [{}]", invoice.phone_id, phone.brand());
    println!("Quantity: {}", invoice.quantity);
    println!("Unit price: {}", money(invoice.unit_price));
    println!("Discount: {:.0}%", invoice.discount_rate * 100.0);
    println!("Date: {}", invoice.sale_date.format(DATE_FORMAT));
    println!("Salesperson: {}", invoice.salesperson);
    println!();
    println!("Gross: {}", money(invoice.gross_total()));
    println!("Net: {}", money(invoice.net_total()));
}

pub(super) fn show_extremes(output: &Output, session: &Session) {
    let invoices = &session.registry().invoices;
    print_extremes(
        output,
        &[
            ("largest_order", invoices.largest_order()),
            ("smallest_order", invoices.smallest_order()),
            ("highest_quantity", invoices.highest_quantity()),
            ("lowest_quantity", invoices.lowest_quantity()),
        ],
        invoice_row,
    );
}

pub(super) fn show_stats(output: &Output, session: &Session) {
    let invoices = &session.registry().invoices;
    let by_salesperson = invoices.count_by_salesperson();
    let revenue_by_salesperson = invoices.revenue_by_salesperson();
    let by_month = invoices.revenue_by_month_any_year();

    if output.is_json() {
        output.data(&serde_json::json!({
            "count": invoices.count(),
            "total_revenue": invoices.total_revenue(),
            "average_invoice_value": invoices.average_invoice_value(),
            "total_quantity_sold": invoices.total_quantity_sold(),
            "total_discount_amount": invoices.total_discount_amount(),
            "count_by_salesperson": by_salesperson,
            "revenue_by_salesperson": revenue_by_salesperson,
            "revenue_by_month": by_month,
        }));
        return;
    }

    println!("Invoices: {}", invoices.count());
    println!("Total revenue: {}", money(invoices.total_revenue()));
    println!("Average invoice value: {}", money(invoices.average_invoice_value()));
    println!("Total quantity sold: {}", invoices.total_quantity_sold());
    println!("Total discount: {}", money(invoices.total_discount_amount()));
    output.map("Invoices per salesperson", &by_salesperson, |n| n.to_string());
    output.map("Revenue per salesperson", &revenue_by_salesperson, |v| money(*v));
    output.map("Revenue per month (all years)", &by_month, |v| money(*v));
}
