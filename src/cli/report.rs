//! Sales report commands

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use super::output::{decimal, money, Output};
use super::session::Session;

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Net revenue per phone brand
    RevenueByBrand,

    /// Units sold per phone brand
    QuantityByBrand,

    /// Net revenue per month of one year
    RevenueByMonth {
        /// Calendar year (defaults to report.demo_year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Invoices per salesperson with a net total of at least MIN
    SalespersonMinRevenue {
        /// Minimum net total (defaults to report.demo_min_revenue)
        #[arg(long)]
        min: Option<f64>,
    },

    /// Phone models per brand with at least MIN units in stock
    StockByBrand {
        /// Minimum stock (defaults to report.demo_min_stock)
        #[arg(long)]
        min: Option<i32>,
    },

    /// Phone models per brand priced at MIN or more
    PriceByBrand {
        #[arg(long)]
        min: f64,
    },

    /// Mean discount rate per salesperson
    AverageDiscount,

    /// Count invoices whose customer name contains a keyword
    CustomerKeyword {
        /// Customer name keyword (case-insensitive)
        keyword: String,
    },
}

pub fn run(cmd: ReportCommands, data_dir: &Path, output: &Output) -> Result<()> {
    let session = Session::open(data_dir)?;
    let report = &session.shop().config().report;

    match cmd {
        ReportCommands::RevenueByBrand => revenue_by_brand(output, &session),
        ReportCommands::QuantityByBrand => quantity_by_brand(output, &session),
        ReportCommands::RevenueByMonth { year } => {
            revenue_by_month(output, &session, year.unwrap_or(report.demo_year))
        }
        ReportCommands::SalespersonMinRevenue { min } => {
            salesperson_min_revenue(output, &session, min.unwrap_or(report.demo_min_revenue))
        }
        ReportCommands::StockByBrand { min } => {
            stock_by_brand(output, &session, min.unwrap_or(report.demo_min_stock))
        }
        ReportCommands::PriceByBrand { min } => {
            let counts = session.analytics().phones_by_brand_with_price_at_least(min);
            output.map(&format!("Phones priced at {} or more", money(min)), &counts, |n| n.to_string());
        }
        ReportCommands::AverageDiscount => {
            let averages = session.analytics().average_discount_by_salesperson();
            output.map("Average discount per salesperson", &averages, |v| decimal(*v));
        }
        ReportCommands::CustomerKeyword { keyword } => {
            let count = session.analytics().count_invoices_by_customer_keyword(&keyword);
            if output.is_json() {
                output.data(&serde_json::json!({ "keyword": keyword, "count": count }));
            } else {
                println!("Invoices for customers matching '{}': {}", keyword, count);
            }
        }
    }

    Ok(())
}

pub(super) fn revenue_by_brand(output: &Output, session: &Session) {
    let revenue = session.analytics().revenue_by_brand();
    output.map("Revenue by brand", &revenue, |v| money(*v));
}

pub(super) fn quantity_by_brand(output: &Output, session: &Session) {
    let quantities = session.analytics().quantity_sold_by_brand();
    output.map("Quantity sold by brand", &quantities, |n| n.to_string());
}

pub(super) fn revenue_by_month(output: &Output, session: &Session, year: i32) {
    let revenue = session.analytics().revenue_by_month(year);
    output.map(&format!("Revenue by month in {}", year), &revenue, |v| money(*v));
}

pub(super) fn salesperson_min_revenue(output: &Output, session: &Session, min: f64) {
    let counts = session.analytics().invoices_by_salesperson_with_min_revenue(min);
    output.map(
        &format!("Invoices of at least {} per salesperson", money(min)),
        &counts,
        |n| n.to_string(),
    );
}

pub(super) fn stock_by_brand(output: &Output, session: &Session, min: i32) {
    let counts = session.analytics().phones_by_brand_with_stock_at_least(min);
    output.map(&format!("Phones with stock of at least {}", min), &counts, |n| n.to_string());
}
