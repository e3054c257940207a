#![no_std]

mod admin;
mod contract;
mod error;
mod event;
mod interest;
mod loan_info;
mod oracle;
mod reputation;
mod risk;
mod storage_types;
mod token_interaction;

pub use crate::admin::Config;
pub use crate::contract::LoanLedgerClient;
pub use crate::error::LoanError;
pub use crate::risk::{RiskReason, RiskResult};
pub use crate::storage_types::{BorrowRequest, Loan, LoanStatus};
