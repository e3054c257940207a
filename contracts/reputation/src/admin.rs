use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};

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

pub fn read_ledger(e: &Env) -> Option<Address> {
    let key = DataKey::Ledger;
    e.storage().instance().get(&key)
}

pub fn write_ledger(e: &Env, ledger: &Address) {
    let key = DataKey::Ledger;
    e.storage().instance().set(&key, ledger);
}

pub fn read_repay_reward(e: &Env) -> u32 {
    let key = DataKey::RepayReward;
    e.storage().instance().get(&key).unwrap_or(0)
}

pub fn write_repay_reward(e: &Env, reward: u32) {
    let key = DataKey::RepayReward;
    e.storage().instance().set(&key, &reward);
}
