//! Helpers shared by the entity commands

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use super::output::Output;
use crate::domain::{eq_ignore_case, Record};
use crate::manager::Manager;

/// Prints records as a table, or as a JSON array
pub fn print_list<T: Serialize>(output: &Output, records: &[T], header: &str, row: impl Fn(&T) -> String) {
    if output.is_json() {
        output.data(&records);
        return;
    }

    if records.is_empty() {
        println!("(no records)");
        return;
    }

    println!("{}", header);
    println!("{}", "-".repeat(header.chars().count()));
    for record in records {
        println!("{}", row(record));
    }
}

/// Prints labelled extreme records; JSON output maps each label to a record or null
pub fn print_extremes<T: Serialize>(
    output: &Output,
    entries: &[(&str, Option<&T>)],
    row: impl Fn(&T) -> String,
) {
    if output.is_json() {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .iter()
            .map(|(label, record)| {
                let value = serde_json::to_value(record).unwrap_or(serde_json::Value::Null);
                (label.to_string(), value)
            })
            .collect();
        output.data(&map);
        return;
    }

    for (label, record) in entries {
        match record {
            Some(record) => println!("{:<18} {}", format!("{}:", label), row(record)),
            None => println!("{:<18} (none)", format!("{}:", label)),
        }
    }
}

/// Finds a record by ID or fails with a not-found error
pub fn require<'a, M: Manager>(manager: &'a M, id: &str) -> Result<&'a M::Record> {
    manager
        .find_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("{} not found: {}", capitalize(<M::Record as Record>::KIND), id))
}

/// Rejects an update that would change a record's ID
pub fn ensure_same_id(kind: &str, id: &str, new_id: Option<&str>) -> Result<()> {
    match new_id {
        Some(new_id) if !eq_ignore_case(id, new_id) => {
            anyhow::bail!("Cannot change {} ID from {} to {}: the new ID must match the old one", kind, id, new_id)
        }
        _ => Ok(()),
    }
}

/// Appends a record, warning when its ID is already taken
pub fn add_record<M: Manager>(manager: &mut M, record: M::Record) {
    if manager.find_by_id(record.id()).is_some() {
        warn!(kind = <M::Record as Record>::KIND, id = record.id(), "adding a record with a duplicate ID");
    }
    manager.add(record);
}

/// Reports the outcome of a delete
pub fn report_delete(output: &Output, kind: &str, id: &str, removed: bool) -> Result<()> {
    if !removed {
        anyhow::bail!("{} not found: {}", capitalize(kind), id);
    }

    if output.is_json() {
        output.data(&serde_json::json!({ "id": id, "deleted": true }));
    } else {
        output.success(&format!("Deleted {} {}", kind, id));
    }
    Ok(())
}

/// Rejects text a CSV row without quoting cannot hold
pub fn csv_field(value: &str) -> Result<String, String> {
    if value.contains([',', '\n', '\r']) {
        return Err("value must not contain commas or line breaks".to_string());
    }
    Ok(value.to_string())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;
    use crate::manager::PhoneManager;

    #[test]
    fn same_id_check_ignores_case() {
        assert!(ensure_same_id("phone", "P001", None).is_ok());
        assert!(ensure_same_id("phone", "P001", Some("p001")).is_ok());

        let err = ensure_same_id("phone", "P001", Some("P002")).unwrap_err();
        assert!(err.to_string().contains("must match"));
    }

    #[test]
    fn require_reports_missing_record() {
        let mut manager = PhoneManager::new();
        manager.add(Phone::new("P1", "A", "Apple", 128, 1.0, 1, 2024));

        assert_eq!(require(&manager, "p1").unwrap().id, "P1");
        let err = require(&manager, "P9").unwrap_err();
        assert_eq!(err.to_string(), "Phone not found: P9");
    }

    #[test]
    fn add_record_keeps_duplicates() {
        let mut manager = PhoneManager::new();
        add_record(&mut manager, Phone::new("P1", "A", "Apple", 128, 1.0, 1, 2024));
        add_record(&mut manager, Phone::new("P1", "B", "Apple", 128, 2.0, 1, 2024));

        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn csv_field_rejects_separators() {
        assert_eq!(csv_field("Galaxy S24 Ultra").unwrap(), "Galaxy S24 Ultra");
        assert!(csv_field("Apple, Inc").is_err());
        assert!(csv_field("two\nlines").is_err());
        assert!(csv_field("cr\rhere").is_err());
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("invoice"), "Invoice");
        assert_eq!(capitalize(""), "");
    }
}
