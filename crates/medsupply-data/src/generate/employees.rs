use medsupply_types::{Branch, Department, Employee, EmployeeId, EmployeeStatus};

use super::{days_before, person_name, riyals, seed_index};
use crate::catalog::{base_salary, positions};
use crate::config::SeedConfig;
use crate::derived::{appraisal_score, direct_manager};
use crate::hash::{mix_pick, mix_range};

/// Generate `config.employees` employees.
///
/// The appraisal score and the direct manager are derived from the employee
/// number and name (see [`crate::derived`]).
pub fn employees(config: &SeedConfig) -> Vec<Employee> {
    (0..config.employees)
        .map(|i| {
            let n = seed_index(i);
            let employee_number = format!("EMP-{:03}", n.saturating_add(1));
            let departments = Department::ALL.len();
            let department = i
                .checked_rem(departments)
                .and_then(|d| Department::ALL.get(d))
                .copied()
                .unwrap_or(Department::Sales);
            let branch = Branch::from_index(i.checked_div(departments).unwrap_or(i));
            let name = person_name(n, 71);
            let position = mix_pick(n, 72, positions(department)).unwrap_or("موظف");
            let salary_base = u64::try_from(base_salary(department)).unwrap_or(5_000);
            let status = if n % 23 == 22 {
                EmployeeStatus::Terminated
            } else if n % 15 == 14 {
                EmployeeStatus::OnLeave
            } else {
                EmployeeStatus::Active
            };

            Employee {
                id: EmployeeId::seeded(n),
                performance_score: appraisal_score(&employee_number),
                manager: direct_manager(&name, branch),
                employee_number,
                name,
                position: position.to_owned(),
                department,
                branch,
                salary: riyals(salary_base.saturating_add(mix_range(n, 73, 0, 40).saturating_mul(100))),
                hire_date: days_before(config.reference_date, mix_range(n, 74, 60, 3_650)),
                status,
            }
        })
        .collect()
}
