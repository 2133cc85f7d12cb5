//! Employee CLI commands

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};

use super::output::{decimal, money, Output};
use super::records::{add_record, csv_field, ensure_same_id, print_extremes, print_list, report_delete, require};
use super::session::Session;
use crate::domain::Employee;
use crate::manager::{EmployeeSortKey, Manager, SortDirection};

const HEADER: &str = "ID       NAME                 ROLE       PHONE             SALARY  YEARS  MONTHLY SALES";

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List employees in insertion order
    List,

    /// Show employee details
    Show {
        /// Employee ID (case-insensitive)
        id: String,
    },

    /// Add an employee
    Add(EmployeeArgs),

    /// Update an employee's fields
    ///
    /// Only the given options change. The ID itself cannot be changed.
    Update {
        /// Employee ID (case-insensitive)
        id: String,

        #[command(flatten)]
        changes: EmployeeChanges,
    },

    /// Delete every employee with this ID
    Delete {
        /// Employee ID (case-insensitive)
        id: String,
    },

    /// Find employees whose name contains a keyword
    Search {
        /// Name keyword (case-insensitive)
        name: String,
    },

    /// Find employees whose role contains a keyword
    Role {
        /// Role keyword (case-insensitive)
        role: String,
    },

    /// List employees sorted by a field
    Sort {
        #[arg(long, value_enum)]
        by: EmployeeSortKey,

        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },

    /// Show salary, experience and sales leaders
    Extremes,

    /// Show payroll totals and role counts
    Stats,
}

#[derive(Args)]
pub struct EmployeeArgs {
    #[arg(value_parser = csv_field)]
    pub id: String,
    #[arg(value_parser = csv_field)]
    pub full_name: String,
    #[arg(value_parser = csv_field)]
    pub role: String,
    #[arg(value_parser = csv_field)]
    pub phone: String,
    pub salary: f64,
    pub years_experience: i32,
    pub monthly_sales: f64,
}

impl From<EmployeeArgs> for Employee {
    fn from(args: EmployeeArgs) -> Self {
        Employee::new(
            args.id,
            args.full_name,
            args.role,
            args.phone,
            args.salary,
            args.years_experience,
            args.monthly_sales,
        )
    }
}

#[derive(Args)]
pub struct EmployeeChanges {
    /// New ID (must equal the current one, ignoring case)
    #[arg(long = "id")]
    pub new_id: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub full_name: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub role: Option<String>,

    #[arg(long, value_parser = csv_field)]
    pub phone: Option<String>,

    #[arg(long)]
    pub salary: Option<f64>,

    #[arg(long)]
    pub years_experience: Option<i32>,

    #[arg(long)]
    pub monthly_sales: Option<f64>,
}

impl EmployeeChanges {
    fn apply(self, employee: &mut Employee) {
        if let Some(v) = self.full_name {
            employee.full_name = v;
        }
        if let Some(v) = self.role {
            employee.role = v;
        }
        if let Some(v) = self.phone {
            employee.phone = v;
        }
        if let Some(v) = self.salary {
            employee.salary = v;
        }
        if let Some(v) = self.years_experience {
            employee.years_experience = v;
        }
        if let Some(v) = self.monthly_sales {
            employee.monthly_sales = v;
        }
    }
}

pub fn run(cmd: EmployeeCommands, data_dir: &Path, output: &Output) -> Result<()> {
    let mut session = Session::open(data_dir)?;

    match cmd {
        EmployeeCommands::List => {
            print_employees(output, &session.registry().employees.get_all());
        }
        EmployeeCommands::Show { id } => {
            let employee = require(&session.registry().employees, &id)?;
            show_employee(output, employee);
        }
        EmployeeCommands::Add(args) => {
            let employee = Employee::from(args);
            output.verbose_ctx("employee", &format!("Adding employee {}", employee.id));
            add_record(&mut session.registry_mut().employees, employee.clone());
            session.save()?;

            if output.is_json() {
                output.data(&employee);
            } else {
                output.success(&format!("Added employee: {} - {}", employee.id, employee.full_name));
            }
        }
        EmployeeCommands::Update { id, changes } => {
            ensure_same_id("employee", &id, changes.new_id.as_deref())?;

            let mut employee = require(&session.registry().employees, &id)?.clone();
            changes.apply(&mut employee);
            session.registry_mut().employees.update(&id, employee.clone());
            session.save()?;

            if output.is_json() {
                output.data(&employee);
            } else {
                output.success(&format!("Updated employee: {}", employee.id));
            }
        }
        EmployeeCommands::Delete { id } => {
            let removed = session.registry_mut().employees.delete(&id);
            if removed {
                session.save()?;
            }
            report_delete(output, "employee", &id, removed)?;
        }
        EmployeeCommands::Search { name } => {
            print_employees(output, &session.registry().employees.find_by_name(&name));
        }
        EmployeeCommands::Role { role } => {
            print_employees(output, &session.registry().employees.find_by_role(&role));
        }
        EmployeeCommands::Sort { by, desc } => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            print_employees(output, &session.registry().employees.sort_by(by, direction));
        }
        EmployeeCommands::Extremes => show_extremes(output, &session),
        EmployeeCommands::Stats => show_stats(output, &session),
    }

    Ok(())
}

pub(super) fn print_employees(output: &Output, employees: &[Employee]) {
    print_list(output, employees, HEADER, employee_row);
}

fn employee_row(employee: &Employee) -> String {
    format!(
        "{:<8} {:<20} {:<10} {:<12} {:>12} {:>6} {:>14}",
        employee.id,
        employee.full_name,
        employee.role,
        employee.phone,
        money(employee.salary),
        employee.years_experience,
        money(employee.monthly_sales)
    )
}

fn show_employee(output: &Output, employee: &Employee) {
    if output.is_json() {
        output.data(employee);
        return;
    }

    println!("Employee: {}", employee.id);
    println!("Name: {}", employee.full_name);
    println!("Role: {}", employee.role);
    println!("Phone: {}", employee.phone);
    println!("Salary: {}", money(employee.salary));
    println!("Experience: {} years", employee.years_experience);
    println!("Monthly sales: {}", money(employee.monthly_sales));
}

pub(super) fn show_extremes(output: &Output, session: &Session) {
    let employees = &session.registry().employees;
    print_extremes(
        output,
        &[
            ("highest_salary", employees.highest_salary()),
            ("lowest_salary", employees.lowest_salary()),
            ("most_experienced", employees.most_experienced()),
            ("top_sales", employees.top_sales()),
        ],
        employee_row,
    );
}

pub(super) fn show_stats(output: &Output, session: &Session) {
    let employees = &session.registry().employees;
    let by_role = employees.count_by_role();

    if output.is_json() {
        output.data(&serde_json::json!({
            "count": employees.count(),
            "total_payroll": employees.total_payroll(),
            "average_salary": employees.average_salary(),
            "average_experience": employees.average_experience(),
            "total_monthly_sales": employees.total_monthly_sales(),
            "by_role": by_role,
        }));
        return;
    }

    println!("Employees: {}", employees.count());
    println!("Total payroll: {}", money(employees.total_payroll()));
    println!("Average salary: {}", money(employees.average_salary()));
    println!("Average experience: {} years", decimal(employees.average_experience()));
    println!("Total monthly sales: {}", money(employees.total_monthly_sales()));
    output.map("Per role", &by_role, |n| n.to_string());
}
