#![no_std]

mod admin;
mod error;
mod score;
mod storage_types;
mod test;

pub mod contract;

pub use crate::contract::ReputationClient;
pub use crate::error::ReputationError;
