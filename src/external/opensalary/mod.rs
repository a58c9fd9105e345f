//! OpenSalary salary-entries API

mod client;
mod provider;

pub use client::OpenSalaryClient;
pub use provider::SalarySource;
