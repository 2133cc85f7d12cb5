//! Phone CLI commands

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::output::{money, Output};
use super::records::{add_record, csv_field, ensure_same_id, print_extremes, print_list, report_delete, require};
use super::session::Session;
use crate::domain::Phone;
use crate::manager::{Manager, PhoneSortKey, SortDirection};

const HEADER: &str = "ID       MODEL                BRAND      STORAGE        PRICE  STOCK  YEAR";

#[derive(Subcommand)]
pub enum PhoneCommands {
    /// List phones in insertion order
    List,

    /// Show phone details
    Show {
        /// Phone ID (case-insensitive)
        id: String,
    },

    /// Add a phone
    Add(PhoneArgs),

    /// Update a phone's fields
    ///
    /// Only the given options change. The ID itself cannot be changed.
    Update {
        /// Phone ID (case-insensitive)
        id: String,

        #[command(flatten)]
        changes: PhoneChanges,
    },

    /// Delete every phone with this ID
    Delete {
        /// Phone ID (case-insensitive)
        id: String,
    },

    /// Find phones whose brand contains a keyword
    Search {
        /// Brand keyword (case-insensitive)
        brand: String,
    },

    /// Find phones priced within a range (inclusive)
    PriceRange { min: f64, max: f64 },

    /// List phones sorted by a field
    Sort {
        #[arg(long, value_enum)]
        by: PhoneSortKey,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },

    /// Show the most/least expensive and stocked phones
    Extremes,

    /// Show inventory totals and counts
    Stats {
        /// Brand keyword to count
        #[arg(long, default_value = "Apple")]
        brand: String,
    },
}

#[derive(Args)]
pub struct PhoneArgs {
    #[arg(value_parser = csv_field)]
    pub id: String,
    #[arg(value_parser = csv_field)]
    pub model: String,
    #[arg(value_parser = csv_field)]
    pub brand: String,
    pub storage_gb: i32,
    pub price: f64,
    pub stock: i32,
    pub release_year: i32,
}

impl From<PhoneArgs> for Phone {
    fn from(args: PhoneArgs) -> Self {
        Phone::new(
            args.id,
            args.model,
            args.brand,
            args.storage_gb,
            args.price,
            args.stock,
            args.release_year,
        )
    }
}

#[derive(Args)]
pub struct PhoneChanges {
    /// New ID (must equal the current one, ignoring case)
    #[arg(long = "id")]
    pub new_id: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub model: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub brand: Option<String>,

    #[arg(long)]
    pub storage_gb: Option<i32>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub stock: Option<i32>,

    #[arg(long)]
    pub release_year: Option<i32>,
}

impl PhoneChanges {
    fn apply(self, phone: &mut Phone) {
        if let Some(model) = self.model {
            phone.model = model;
        }
        if let Some(brand) = self.brand {
            phone.brand = brand;
        }
        if let Some(storage_gb) = self.storage_gb {
            phone.storage_gb = storage_gb;
        }
        if let Some(price) = self.price {
            phone.price = price;
        }
        if let Some(stock) = self.stock {
            phone.stock = stock;
        }
        if let Some(release_year) = self.release_year {
            phone.release_year = release_year;
        }
    }
}

pub fn run(cmd: PhoneCommands, data_dir: &Path, output: &Output) -> Result<()> {
    let mut session = Session::open(data_dir)?;

    match cmd {
        PhoneCommands::List => {
            print_phones(output, &session.registry().phones.get_all());
        }
        PhoneCommands::Show { id } => {
            let phone = require(&session.registry().phones, &id)?;
            show_phone(output, phone);
        }
        PhoneCommands::Add(args) => {
            let phone = Phone::from(args);
            output.verbose_ctx("phone", &format!("Adding phone {}", phone.id));
            add_record(&mut session.registry_mut().phones, phone.clone());
            session.save()?;

            if output.is_json() {
                output.data(&phone);
            } else {
                output.success(&format!("Added phone: {} - {}", phone.id, phone.model));
            }
        }
        PhoneCommands::Update { id, changes } => {
            ensure_same_id("phone", &id, changes.new_id.as_deref())?;

            let mut phone = require(&session.registry().phones, &id)?.clone();
            changes.apply(&mut phone);
            session.registry_mut().phones.update(&id, phone.clone());
            session.save()?;

            if output.is_json() {
                output.data(&phone);
            } else {
                output.success(&format!("Updated phone: {}", phone.id));
            }
        }
        PhoneCommands::Delete { id } => {
            let removed = session.registry_mut().phones.delete(&id);
            if removed {
                session.save()?;
            }
            report_delete(output, "phone", &id, removed)?;
        }
        PhoneCommands::Search { brand } => {
            print_phones(output, &session.registry().phones.find_by_brand(&brand));
        }
        PhoneCommands::PriceRange { min, max } => {
            print_phones(output, &session.registry().phones.find_by_price_range(min, max));
        }
        PhoneCommands::Sort { by, desc } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            print_phones(output, &session.registry().phones.sort_by(by, direction));
        }
        PhoneCommands::Extremes => show_extremes(output, &session),
        PhoneCommands::Stats { brand } => show_stats(output, &session, &brand),
    }

    Ok(())
}

pub(super) fn print_phones(output: &Output, phones: &[Phone]) {
    print_list(output, phones, HEADER, phone_row);
}

fn phone_row(phone: &Phone) -> String {
    format!(
        "{:<8} {:<20} {:<10} {:>7} {:>12} {:>6} {:>5}",
        phone.id,
        phone.model,
        phone.brand,
        format!("{}GB", phone.storage_gb),
        money(phone.price),
        phone.stock,
        phone.release_year
    )
}

fn show_phone(output: &Output, phone: &Phone) {
    if output.is_json() {
        output.data(phone);
        return;
    }

    println!("Phone: {}", phone.id);
    println!("Model: {}", phone.model);
    println!("Brand: {}", phone.brand);
    println!("Storage: {} GB", phone.storage_gb);
    println!("Price: {}", money(phone.price));
    println!("Stock: {}", phone.stock);
    println!("Released: {}", phone.release_year);
    println!("Inventory value: {}", money(phone.inventory_value()));
}

pub(super) fn show_extremes(output: &Output, session: &Session) {
    let phones = &session.registry().phones;
    print_extremes(
        output,
        &[
            ("most_expensive", phones.most_expensive()),
            ("cheapest", phones.cheapest()),
            ("highest_stock", phones.highest_stock()),
            ("lowest_stock", phones.lowest_stock()),
        ],
        phone_row,
    );
}

pub(super) fn show_stats(output: &Output, session: &Session, brand: &str) {
    let phones = &session.registry().phones;
    let per_brand = phones.count_per_brand();
    let by_storage = phones.count_by_storage();

    if output.is_json() {
        output.data(&serde_json::json!({
            "count": phones.count(),
            "total_inventory_value": phones.total_inventory_value(),
            "average_price": phones.average_price(),
            "in_stock": phones.count_in_stock(),
            "brand_keyword": brand,
            "brand_keyword_count": phones.count_by_brand_keyword(brand),
            "per_brand": per_brand,
            "by_storage_gb": by_storage,
        }));
        return;
    }

    println!("Phones: {}", phones.count());
    println!("Total inventory value: {}", money(phones.total_inventory_value()));
    println!("Average price: {}", money(phones.average_price()));
    println!("In stock: {}", phones.count_in_stock());
    println!("Brand matching '{}': {}", brand, phones.count_by_brand_keyword(brand));
    output.map("Per brand", &per_brand, |n| n.to_string());
    output.map("By storage (GB)", &by_storage, |n| n.to_string());
}
