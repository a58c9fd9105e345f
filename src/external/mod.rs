pub mod client;
pub mod opensalary;

pub use opensalary::{OpenSalaryClient, SalarySource};
