mod account_report;
pub mod ids;
pub mod input;
pub mod models;
mod money;
mod registry;
mod result;
mod statement;

pub use account_report::AccountReport;
pub use money::{Money, MoneyError};
pub use registry::{ErrorKind, Registry, RegistryError};
pub use result::Result;
pub use statement::Statement;
