//! Customer domain model

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::record::{Record, RecordError, Row};

/// Email domain reported for addresses without an `@`
pub const UNKNOWN_EMAIL_DOMAIN: &str = "unknown";

/// A registered customer
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,

    /// Membership tier (free text, e.g. Bronze/Silver/Gold/Platinum)
    pub tier: String,

    pub join_year: i32,

    /// Accumulated spending (VND)
    pub total_spent: f64,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        tier: impl Into<String>,
        join_year: i32,
        total_spent: f64,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            phone: phone.into(),
            email: email.into(),
            tier: tier.into(),
            join_year,
            total_spent,
        }
    }

    /// Part of the email between the first and second `@`, or `unknown`
    pub fn email_domain(&self) -> &str {
        match self.email.split('@').nth(1) {
            Some(domain) if !domain.is_empty() => domain,
            _ => UNKNOWN_EMAIL_DOMAIN,
        }
    }
}

impl Record for Customer {
    const KIND: &'static str = "customer";
    const FIELD_COUNT: usize = 7;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.tier.clone(),
            self.join_year.to_string(),
            self.total_spent.to_string(),
        ]
    }

    fn from_row(fields: &[&str]) -> Result<Self, RecordError> {
        let row = Row::new(Self::KIND, Self::FIELD_COUNT, fields)?;
        Ok(Self {
            id: row.text(0),
            full_name: row.text(1),
            phone: row.text(2),
            email: row.text(3),
            tier: row.text(4),
            join_year: row.number(5, "join_year")?,
            total_spent: row.number(6, "total_spent")?,
        })
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
