use soroban_sdk::{contracttype, Address, Env, IntoVal, Symbol};

// Price record as reported by the feed.
#[derive(Clone)]
#[contracttype]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
}

/// Asks the feed for the price of `base` quoted in `quote`.
///
/// The feed is an optional collaborator: a missing price, a feed that
/// reports nothing, or a feed call that errors out all collapse to `None`
/// and the caller turns that into a policy rejection.
pub fn get_price(env: &Env, oracle: &Address, base: &Address, quote: &Address) -> Option<(i128, u32)> {
    let fn_name = Symbol::new(env, "get_price");
    let args = (base.clone(), quote.clone()).into_val(env);

    match env.try_invoke_contract::<Option<PriceData>, soroban_sdk::Error>(oracle, &fn_name, args) {
        Ok(Ok(Some(data))) => Some((data.price, data.decimals)),
        _ => None,
    }
}
