use soroban_sdk::{Address, Env};

use crate::storage_types::{DataKey, Loan, LOAN_BUMP_AMOUNT, LOAN_LIFETIME_THRESHOLD};

pub fn write_loan(env: &Env, loan_id: u64, loan: &Loan) {
    let key = DataKey::Loan(loan_id);
    env.storage().persistent().set(&key, loan);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}

pub fn read_loan(env: &Env, loan_id: u64) -> Option<Loan> {
    let key = DataKey::Loan(loan_id);
    if let Some(loan) = env.storage().persistent().get::<DataKey, Loan>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
        Some(loan)
    } else {
        None
    }
}

pub fn read_active_loan_of(env: &Env, borrower: &Address) -> Option<u64> {
    let key = DataKey::ActiveLoanOf(borrower.clone());
    if let Some(loan_id) = env.storage().persistent().get::<DataKey, u64>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
        Some(loan_id)
    } else {
        None
    }
}

pub fn write_active_loan_of(env: &Env, borrower: &Address, loan_id: u64) {
    let key = DataKey::ActiveLoanOf(borrower.clone());
    env.storage().persistent().set(&key, &loan_id);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}

pub fn remove_active_loan_of(env: &Env, borrower: &Address) {
    let key = DataKey::ActiveLoanOf(borrower.clone());
    env.storage().persistent().remove(&key);
}
