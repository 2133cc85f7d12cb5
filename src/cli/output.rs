//! Output formatting for CLI commands

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

use serde::Serialize;
use tracing::debug;

pub use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a titled key/value report
    ///
    /// Text output is sorted by key; JSON output is an object.
    pub fn map<K, V>(&self, title: &str, map: &HashMap<K, V>, value: impl Fn(&V) -> String)
    where
        K: Display + Ord + Hash + Eq,
        V: Serialize,
    {
        if self.is_json() {
            let sorted: BTreeMap<String, &V> =
                map.iter().map(|(k, v)| (k.to_string(), v)).collect();
            self.data(&sorted);
            return;
        }

        println!("{}:", title);
        if map.is_empty() {
            println!("  (no data)");
            return;
        }
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (key, v) in entries {
            println!("  - {}: {}", key, value(v));
        }
    }

    /// Prints a section heading (text only)
    pub fn heading(&self, title: &str) {
        if self.is_text() {
            println!();
            println!("{}", title);
            println!("{}", "=".repeat(title.chars().count()));
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Returns true if using text format
    pub fn is_text(&self) -> bool {
        self.format == OutputFormat::Text
    }

    /// Logs a command-level debug message (shown with --verbose)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        debug!(command = context, "{}", message);
    }
}

/// Formats a VND amount without decimals
pub fn money(amount: f64) -> String {
    format!("{:.0}", amount)
}

/// Formats a ratio or average with two decimals
pub fn decimal(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_rounds_to_whole_units() {
        assert_eq!(money(33_240_500.4), "33240500");
        assert_eq!(money(0.0), "0");
    }

    #[test]
    fn decimal_keeps_two_places() {
        assert_eq!(decimal(0.05), "0.05");
        assert_eq!(decimal(1.0 / 3.0), "0.33");
    }

    #[test]
    fn format_predicates() {
        assert!(Output::new(OutputFormat::Json).is_json());
        assert!(Output::new(OutputFormat::Text).is_text());
    }
}
