pub mod aggregate;
pub mod filter;

pub use aggregate::{Employee, EmployeeDto, Salary};
pub use filter::filter_by_division;
