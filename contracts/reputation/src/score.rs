use crate::storage_types::{DataKey, SCORE_BUMP_AMOUNT, SCORE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn read_score(env: &Env, addr: &Address) -> u32 {
    let key = DataKey::Score(addr.clone());
    if let Some(score) = env.storage().persistent().get::<DataKey, u32>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, SCORE_LIFETIME_THRESHOLD, SCORE_BUMP_AMOUNT);
        score
    } else {
        0
    }
}

pub fn write_score(env: &Env, addr: &Address, score: u32) {
    let key = DataKey::Score(addr.clone());
    env.storage().persistent().set(&key, &score);
    env.storage()
        .persistent()
        .extend_ttl(&key, SCORE_LIFETIME_THRESHOLD, SCORE_BUMP_AMOUNT);
}

pub fn read_badge(env: &Env, addr: &Address) -> bool {
    let key = DataKey::Badge(addr.clone());
    if let Some(badge) = env.storage().persistent().get::<DataKey, bool>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, SCORE_LIFETIME_THRESHOLD, SCORE_BUMP_AMOUNT);
        badge
    } else {
        false
    }
}

pub fn write_badge(env: &Env, addr: &Address) {
    let key = DataKey::Badge(addr.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, SCORE_LIFETIME_THRESHOLD, SCORE_BUMP_AMOUNT);
}
