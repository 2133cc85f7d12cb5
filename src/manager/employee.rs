//! Staff manager

use std::collections::HashMap;

use crate::domain::{contains_ignore_case, Employee, Extreme, OrderedStore};

use super::SortDirection;

/// Field to sort employees by
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EmployeeSortKey {
    Salary,
    Experience,
    MonthlySales,
}

#[derive(Debug, Default, Clone)]
pub struct EmployeeManager {
    employees: OrderedStore<Employee>,
}

impl_manager!(EmployeeManager, Employee, employees);

impl EmployeeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_name(&self, keyword: &str) -> Vec<Employee> {
        self.employees
            .filter(|e| contains_ignore_case(&e.full_name, keyword))
    }

    pub fn find_by_role(&self, keyword: &str) -> Vec<Employee> {
        self.employees.filter(|e| contains_ignore_case(&e.role, keyword))
    }

    pub fn sort_by(&self, key: EmployeeSortKey, direction: SortDirection) -> Vec<Employee> {
        self.employees.sort_snapshot(|a, b| {
            let ordering = match key {
                EmployeeSortKey::Salary => a.salary.total_cmp(&b.salary),
                EmployeeSortKey::Experience => a.years_experience.cmp(&b.years_experience),
                EmployeeSortKey::MonthlySales => a.monthly_sales.total_cmp(&b.monthly_sales),
            };
            direction.apply(ordering)
        })
    }

    pub fn highest_salary(&self) -> Option<&Employee> {
        self.employees
            .find_extreme(|a, b| a.salary.total_cmp(&b.salary), Extreme::Max)
    }

    pub fn lowest_salary(&self) -> Option<&Employee> {
        self.employees
            .find_extreme(|a, b| a.salary.total_cmp(&b.salary), Extreme::Min)
    }

    pub fn most_experienced(&self) -> Option<&Employee> {
        self.employees
            .find_extreme(|a, b| a.years_experience.cmp(&b.years_experience), Extreme::Max)
    }

    /// Employee with the highest monthly sales
    pub fn top_sales(&self) -> Option<&Employee> {
        self.employees
            .find_extreme(|a, b| a.monthly_sales.total_cmp(&b.monthly_sales), Extreme::Max)
    }

    /// Sum of base salaries
    pub fn total_payroll(&self) -> f64 {
        self.employees.sum_by(|e| e.salary)
    }

    pub fn average_salary(&self) -> f64 {
        self.employees.average_by(|e| e.salary)
    }

    pub fn average_experience(&self) -> f64 {
        self.employees.average_by(|e| f64::from(e.years_experience))
    }

    pub fn total_monthly_sales(&self) -> f64 {
        self.employees.sum_by(|e| e.monthly_sales)
    }

    pub fn count_by_role(&self) -> HashMap<String, usize> {
        self.employees.count_by(|e| e.role.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::Manager;

    fn employee(id: &str, name: &str, role: &str, salary: f64, years: i32, sales: f64) -> Employee {
        Employee::new(id, name, role, "0900", salary, years, sales)
    }

    fn sample() -> EmployeeManager {
        let mut manager = EmployeeManager::new();
        manager.add(employee("E1", "Pham Minh", "Sales", 10.0, 3, 300.0));
        manager.add(employee("E2", "Vo Lan", "Manager", 30.0, 8, 0.0));
        manager.add(employee("E3", "Do Minh Chau", "Sales", 10.0, 8, 300.0));
        manager
    }

    fn ids(employees: &[Employee]) -> Vec<&str> {
        employees.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn name_and_role_search() {
        let manager = sample();
        assert_eq!(ids(&manager.find_by_name("minh")), vec!["E1", "E3"]);
        assert_eq!(ids(&manager.find_by_role("SALES")), vec!["E1", "E3"]);
    }

    #[test]
    fn extremes_prefer_first_on_tie() {
        let manager = sample();
        assert_eq!(manager.highest_salary().unwrap().id, "E2");
        assert_eq!(manager.lowest_salary().unwrap().id, "E1");
        assert_eq!(manager.most_experienced().unwrap().id, "E2");
        assert_eq!(manager.top_sales().unwrap().id, "E1");
        assert!(EmployeeManager::new().top_sales().is_none());
    }

    #[test]
    fn payroll_aggregates() {
        let manager = sample();
        assert_eq!(manager.total_payroll(), 50.0);
        assert!((manager.average_salary() - 50.0 / 3.0).abs() < 1e-9);
        assert!((manager.average_experience() - 19.0 / 3.0).abs() < 1e-9);
        assert_eq!(manager.total_monthly_sales(), 600.0);
        assert_eq!(manager.count_by_role().get("Sales"), Some(&2));
    }

    #[test]
    fn empty_averages_are_zero() {
        let manager = EmployeeManager::new();
        assert_eq!(manager.average_salary(), 0.0);
        assert_eq!(manager.average_experience(), 0.0);
    }

    #[test]
    fn sort_by_experience_keeps_ties_in_order() {
        let manager = sample();
        let sorted = manager.sort_by(EmployeeSortKey::Experience, SortDirection::Descending);
        assert_eq!(ids(&sorted), vec!["E2", "E3", "E1"]);

        let by_salary = manager.sort_by(EmployeeSortKey::Salary, SortDirection::Ascending);
        assert_eq!(ids(&by_salary), vec!["E1", "E3", "E2"]);
    }
}
