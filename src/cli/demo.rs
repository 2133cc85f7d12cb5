//! Guided walkthrough of every feature over the current data
//!
//! Read-only: nothing is written back to the data directory.

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use super::session::Session;
use super::{customer, employee, invoice, phone, report};
use crate::manager::{
    CustomerSortKey, EmployeeSortKey, InvoiceSortKey, Manager, PhoneSortKey, SortDirection,
};

/// Brand used for the keyword search step
const DEMO_BRAND: &str = "Apple";

/// Price window used for the range search step (VND)
const DEMO_PRICE_RANGE: (f64, f64) = (10_000_000.0, 20_000_000.0);

pub fn run(data_dir: &Path, output: &Output) -> Result<()> {
    let session = Session::open(data_dir)?;

    if output.is_json() {
        output.data(&summary(&session));
        return Ok(());
    }

    let registry = session.registry();
    let config = &session.shop().config().report;
    let (min_price, max_price) = DEMO_PRICE_RANGE;

    output.heading("1) Phones and invoices");
    phone::print_phones(output, &registry.phones.get_all());
    println!();
    invoice::print_invoices(output, &registry.invoices.get_all());

    output.heading("2) Search by brand and price range");
    println!("Brand contains '{}':", DEMO_BRAND);
    phone::print_phones(output, &registry.phones.find_by_brand(DEMO_BRAND));
    println!();
    println!("Price between {:.0} and {:.0}:", min_price, max_price);
    phone::print_phones(output, &registry.phones.find_by_price_range(min_price, max_price));

    output.heading("3) Sorting");
    let phone_sorts = [
        ("Price, ascending", PhoneSortKey::Price, SortDirection::Ascending),
        ("Price, descending", PhoneSortKey::Price, SortDirection::Descending),
        ("Stock, descending", PhoneSortKey::Stock, SortDirection::Descending),
        ("Release year, newest first", PhoneSortKey::ReleaseYear, SortDirection::Descending),
    ];
    for (label, key, direction) in phone_sorts {
        println!("Phones by {}:", label);
        phone::print_phones(output, &registry.phones.sort_by(key, direction));
        println!();
    }
    let invoice_sorts = [
        ("date, ascending", InvoiceSortKey::SaleDate, SortDirection::Ascending),
        ("date, descending", InvoiceSortKey::SaleDate, SortDirection::Descending),
        ("net total, descending", InvoiceSortKey::NetTotal, SortDirection::Descending),
        ("quantity, descending", InvoiceSortKey::Quantity, SortDirection::Descending),
    ];
    for (label, key, direction) in invoice_sorts {
        println!("Invoices by {}:", label);
        invoice::print_invoices(output, &registry.invoices.sort_by(key, direction));
        println!();
    }

    output.heading("4) Extremes");
    phone::show_extremes(output, &session);
    invoice::show_extremes(output, &session);

    output.heading("5) Totals, averages and counts");
    phone::show_stats(output, &session, DEMO_BRAND);
    println!();
    invoice::show_stats(output, &session);

    output.heading("6) Reports");
    report::revenue_by_brand(output, &session);
    report::quantity_by_brand(output, &session);
    report::revenue_by_month(output, &session, config.demo_year);
    report::salesperson_min_revenue(output, &session, config.demo_min_revenue);
    report::stock_by_brand(output, &session, config.demo_min_stock);

    output.heading("7) Customers");
    customer::print_customers(
        output,
        &registry.customers.sort_by(CustomerSortKey::TotalSpent, SortDirection::Descending),
    );
    println!();
    customer::show_extremes(output, &session);
    println!();
    customer::show_stats(output, &session);

    output.heading("8) Employees");
    employee::print_employees(
        output,
        &registry.employees.sort_by(EmployeeSortKey::MonthlySales, SortDirection::Descending),
    );
    println!();
    employee::show_extremes(output, &session);
    println!();
    employee::show_stats(output, &session);

    Ok(())
}

fn summary(session: &Session) -> serde_json::Value {
    let registry = session.registry();
    let config = &session.shop().config().report;
    let analytics = session.analytics();
    let (min_price, max_price) = DEMO_PRICE_RANGE;

    let search = serde_json::json!({
        "brand": registry.phones.find_by_brand(DEMO_BRAND),
        "price_range": registry.phones.find_by_price_range(min_price, max_price),
    });

    let sorted = serde_json::json!({
        "phones_by_price": registry.phones.sort_by(PhoneSortKey::Price, SortDirection::Ascending),
        "phones_by_stock_desc": registry.phones.sort_by(PhoneSortKey::Stock, SortDirection::Descending),
        "invoices_by_date": registry.invoices.sort_by(InvoiceSortKey::SaleDate, SortDirection::Ascending),
        "invoices_by_net_total_desc": registry.invoices.sort_by(InvoiceSortKey::NetTotal, SortDirection::Descending),
    });

    let extremes = serde_json::json!({
        "most_expensive": registry.phones.most_expensive(),
        "cheapest": registry.phones.cheapest(),
        "largest_order": registry.invoices.largest_order(),
        "smallest_order": registry.invoices.smallest_order(),
    });

    let totals = serde_json::json!({
        "phone_count": registry.phones.count(),
        "inventory_value": registry.phones.total_inventory_value(),
        "average_price": registry.phones.average_price(),
        "invoice_count": registry.invoices.count(),
        "total_revenue": registry.invoices.total_revenue(),
        "total_quantity_sold": registry.invoices.total_quantity_sold(),
        "total_discount_amount": registry.invoices.total_discount_amount(),
    });

    let reports = serde_json::json!({
        "revenue_by_brand": analytics.revenue_by_brand(),
        "quantity_sold_by_brand": analytics.quantity_sold_by_brand(),
        "revenue_by_month": analytics.revenue_by_month(config.demo_year),
        "invoices_by_salesperson_with_min_revenue":
            analytics.invoices_by_salesperson_with_min_revenue(config.demo_min_revenue),
        "phones_by_brand_with_stock_at_least":
            analytics.phones_by_brand_with_stock_at_least(config.demo_min_stock),
    });

    let customers = serde_json::json!({
        "count": registry.customers.count(),
        "total_spent": registry.customers.total_spent(),
        "highest_spent": registry.customers.highest_spent(),
    });

    let employees = serde_json::json!({
        "count": registry.employees.count(),
        "total_payroll": registry.employees.total_payroll(),
        "top_sales": registry.employees.top_sales(),
    });

    serde_json::json!({
        "phones": registry.phones.get_all(),
        "invoices": registry.invoices.get_all(),
        "search": search,
        "sorted": sorted,
        "extremes": extremes,
        "totals": totals,
        "reports": reports,
        "customers": customers,
        "employees": employees,
    })
}
