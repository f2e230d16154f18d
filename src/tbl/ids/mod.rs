mod account_number;
mod cpf;

pub use account_number::AccountNumber;
pub use cpf::Cpf;

/// Every account in the bank lives under the same branch
pub const BRANCH_CODE: &str = "0001";
