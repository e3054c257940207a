use crate::error::LoanError;
use crate::storage_types::DataKey;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub struct Config {
    pub treasury: Address,
    pub oracle: Option<Address>,
    pub reputation: Option<Address>,
    pub reputation_hook: Option<Address>,
    pub verifier: Option<Address>,
    pub require_proof: bool,
    pub assets: Vec<Address>,
    pub collateral_assets: Vec<Address>,
    pub max_ratio_bps: u32,
    pub score_free: u32,
    pub no_collateral_ceiling: i128,
    pub apr_bps: u32,
    pub penalty_apr_bps: u32,
    pub origination_fee_bps: u32,
    pub protocol_fee_bps: u32,
    pub bounty_bps: u32,
    pub grace_period: u64,
    pub min_duration: u64,
    pub max_duration: u64,
}

pub fn has_administrator(e: &Env) -> bool {
    let key = DataKey::Admin;
    e.storage().instance().has(&key)
}

pub fn read_administrator(e: &Env) -> Address {
    let key = DataKey::Admin;
    e.storage().instance().get(&key).unwrap()
}

pub fn write_administrator(e: &Env, id: &Address) {
    let key = DataKey::Admin;
    e.storage().instance().set(&key, id);
}

pub fn read_config(e: &Env) -> Option<Config> {
    let key = DataKey::Config;
    e.storage().instance().get(&key)
}

pub fn write_config(e: &Env, config: &Config) {
    let key = DataKey::Config;
    e.storage().instance().set(&key, config);
}

pub fn read_paused(e: &Env) -> bool {
    let key = DataKey::Paused;
    e.storage().instance().get(&key).unwrap_or(false)
}

pub fn write_paused(e: &Env, paused: bool) {
    let key = DataKey::Paused;
    e.storage().instance().set(&key, &paused);
}

// Set while a mutating entry point is in flight; a nested mutating call
// observes it and rejects. Rolled back with the rest of the footprint if
// the invocation fails.
pub fn guard_enter(e: &Env) -> Result<(), LoanError> {
    let key = DataKey::Guard;
    if e.storage().instance().get(&key).unwrap_or(false) {
        return Err(LoanError::Reentrancy);
    }
    e.storage().instance().set(&key, &true);
    Ok(())
}

pub fn guard_exit(e: &Env) {
    let key = DataKey::Guard;
    e.storage().instance().set(&key, &false);
}

pub fn next_loan_id(e: &Env) -> u64 {
    let key = DataKey::NextLoanId;
    let prev: u64 = e.storage().instance().get(&key).unwrap_or(0u64);

    e.storage().instance().set(&key, &(prev + 1));
    prev + 1
}

pub fn read_locked_collateral(e: &Env) -> i128 {
    let key = DataKey::LockedCollateral;
    e.storage().instance().get(&key).unwrap_or(0i128)
}

pub fn write_locked_collateral(e: &Env, amount: i128) {
    let key = DataKey::LockedCollateral;
    e.storage().instance().set(&key, &amount);
}
