//! Domain models for the phone store
//!
//! Contains the record types and the ordered store without any I/O concerns.

mod record;
mod store;
mod phone;
mod invoice;
mod customer;
mod employee;

pub use record::{contains_ignore_case, eq_ignore_case, Record, RecordError, DATE_FORMAT};
pub use store::{Extreme, OrderedStore};
pub use phone::Phone;
pub use invoice::Invoice;
pub use customer::{Customer, UNKNOWN_EMAIL_DOMAIN};
pub use employee::Employee;
