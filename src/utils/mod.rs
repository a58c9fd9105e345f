pub mod money;

pub use money::MoneyFormatter;
