use soroban_sdk::{token, Address, Env};

/// Pulls `amount` of `asset` from `from` into ledger custody.
pub fn transfer_in(e: &Env, asset: &Address, from: &Address, amount: i128) {
    let client = token::Client::new(e, asset);
    client.transfer(from, &e.current_contract_address(), &amount);
}

/// Pays `amount` of `asset` out of ledger custody to `to`.
pub fn transfer_out(e: &Env, asset: &Address, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let client = token::Client::new(e, asset);
    client.transfer(&e.current_contract_address(), to, &amount);
}

/// Ledger custody balance of `asset`.
pub fn custody_balance(e: &Env, asset: &Address) -> i128 {
    let client = token::Client::new(e, asset);
    client.balance(&e.current_contract_address())
}
