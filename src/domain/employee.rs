//! Employee domain model

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::record::{Record, RecordError, Row};

/// A member of the shop staff
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String,
    pub full_name: String,

    /// Job title (Sales, Manager, ...)
    pub role: String,

    pub phone: String,

    /// Base monthly salary (VND)
    pub salary: f64,

    pub years_experience: i32,

    /// Average sales per month (VND)
    pub monthly_sales: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        role: impl Into<String>,
        phone: impl Into<String>,
        salary: f64,
        years_experience: i32,
        monthly_sales: f64,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            role: role.into(),
            phone: phone.into(),
            salary,
            years_experience,
            monthly_sales,
        }
    }
}

impl Record for Employee {
    const KIND: &'static str = "employee";
    const FIELD_COUNT: usize = 7;

    fn id(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name.clone(),
            self.role.clone(),
            self.phone.clone(),
            self.salary.to_string(),
            self.years_experience.to_string(),
            self.monthly_sales.to_string(),
        ]
    }

    fn from_row(fields: &[&str]) -> Result<Self, RecordError> {
        let row = Row::new(Self::KIND, Self::FIELD_COUNT, fields)?;
        Ok(Self {
            id: row.text(0),
            full_name: row.text(1),
            role: row.text(2),
            phone: row.text(3),
            salary: row.number(4, "salary")?,
            years_experience: row.number(5, "years_experience")?,
            monthly_sales: row.number(6, "monthly_sales")?,
        })
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_csv_row() {
        let fields = ["E001", "Tran Thi B", "Sales", "0988", "12000000", "4", "250000000"];
        let employee = Employee::from_row(&fields).unwrap();

        assert_eq!(employee.role, "Sales");
        assert_eq!(employee.years_experience, 4);
        assert_eq!(employee.monthly_sales, 250_000_000.0);
    }

    #[test]
    fn row_roundtrips_fields() {
        let employee = Employee::new("E002", "Le Van D", "Manager", "0977", 20000000.0, 8, 0.0);
        let row = employee.to_row();
        let fields: Vec<&str> = row.iter().map(String::as_str).collect();
        let parsed = Employee::from_row(&fields).unwrap();

        assert_eq!(parsed.full_name, employee.full_name);
        assert_eq!(parsed.salary, employee.salary);
        assert_eq!(parsed.years_experience, employee.years_experience);
    }
}
