use crate::admin::Config;
use crate::oracle;
use crate::reputation;
use crate::storage_types::{BorrowRequest, BPS_SCALE};
use soroban_sdk::{contracttype, Address, Bytes, Env, IntoVal, Symbol};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum RiskReason {
    None = 0,
    Defaulter = 1,
    MissingProof = 2,
    BadProof = 3,
    NoOracle = 4,
    NoCollateral = 5,
    BadPrice = 6,
    OverLimit = 7,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RiskResult {
    pub allowed: bool,
    pub collateral_ratio_bps: u32,
    pub max_borrow: i128,
    pub reason: RiskReason,
}

/// Required collateral ratio for a reputation score.
///
/// Linear relief from `max_ratio_bps` at score 0 down to 0 at
/// `score_free`, rounded up so no score lands in a more lenient tier than
/// the line allows.
pub fn collateral_ratio_bps(config: &Config, score: u32) -> u32 {
    if config.score_free == 0 || score >= config.score_free {
        return 0;
    }
    let remaining = (config.score_free - score) as u64;
    let num = (config.max_ratio_bps as u64) * remaining;
    let free = config.score_free as u64;
    ((num + free - 1) / free) as u32
}

/// Score as reported by the reputation store; no store configured reads
/// as 0, the strictest tier.
pub fn borrower_score(env: &Env, config: &Config, borrower: &Address) -> u32 {
    match &config.reputation {
        Some(store) => reputation::score_of(env, store, borrower),
        None => 0,
    }
}

/// No reputation store configured means nobody is a defaulter.
pub fn is_defaulter(env: &Env, config: &Config, borrower: &Address) -> bool {
    match &config.reputation {
        Some(store) => reputation::has_badge(env, store, borrower),
        None => false,
    }
}

fn rejected(ratio: u32, max_borrow: i128, reason: RiskReason) -> RiskResult {
    RiskResult {
        allowed: false,
        collateral_ratio_bps: ratio,
        max_borrow,
        reason,
    }
}

/// Admission decision for a borrow request. Stateless: two calls against
/// identical ledger state produce identical results.
pub fn assess_borrow(
    env: &Env,
    config: &Config,
    borrower: &Address,
    request: &BorrowRequest,
) -> RiskResult {
    let ratio = collateral_ratio_bps(config, borrower_score(env, config, borrower));

    if is_defaulter(env, config, borrower) {
        return rejected(ratio, 0, RiskReason::Defaulter);
    }

    if config.require_proof {
        let verifier = match &config.verifier {
            Some(v) => v,
            None => return rejected(ratio, 0, RiskReason::MissingProof),
        };
        let proof = match &request.proof {
            Some(p) => p,
            None => return rejected(ratio, 0, RiskReason::MissingProof),
        };
        if !proof_accepted(env, verifier, borrower, proof) {
            return rejected(ratio, 0, RiskReason::BadProof);
        }
    }

    // Top reputation tier borrows unsecured up to a flat ceiling.
    if ratio == 0 {
        let ceiling = config.no_collateral_ceiling;
        if request.amount > ceiling {
            return rejected(ratio, ceiling, RiskReason::OverLimit);
        }
        return RiskResult {
            allowed: true,
            collateral_ratio_bps: ratio,
            max_borrow: ceiling,
            reason: RiskReason::None,
        };
    }

    let oracle_addr = match &config.oracle {
        Some(o) => o,
        None => return rejected(ratio, 0, RiskReason::NoOracle),
    };
    if request.collateral_amount <= 0
        || !config.collateral_assets.contains(&request.collateral_asset)
    {
        return rejected(ratio, 0, RiskReason::NoCollateral);
    }

    let (price, decimals) =
        match oracle::get_price(env, oracle_addr, &request.collateral_asset, &request.asset) {
            Some((price, decimals)) if price > 0 => (price, decimals),
            _ => return rejected(ratio, 0, RiskReason::BadPrice),
        };
    let scale = match 10u128.checked_pow(decimals) {
        Some(s) => s,
        None => return rejected(ratio, 0, RiskReason::BadPrice),
    };

    let collateral_value = (request.collateral_amount as u128).saturating_mul(price as u128) / scale;
    let ceiling_u = collateral_value.saturating_mul(BPS_SCALE as u128) / (ratio as u128);
    let max_borrow = if ceiling_u > i128::MAX as u128 {
        i128::MAX
    } else {
        ceiling_u as i128
    };

    if request.amount > max_borrow {
        return rejected(ratio, max_borrow, RiskReason::OverLimit);
    }
    RiskResult {
        allowed: true,
        collateral_ratio_bps: ratio,
        max_borrow,
        reason: RiskReason::None,
    }
}

/// A verifier that errors out is a verifier that did not accept.
fn proof_accepted(env: &Env, verifier: &Address, borrower: &Address, proof: &Bytes) -> bool {
    let fn_name = Symbol::new(env, "verify");
    let args = (borrower.clone(), proof.clone()).into_val(env);
    matches!(
        env.try_invoke_contract::<bool, soroban_sdk::Error>(verifier, &fn_name, args),
        Ok(Ok(true))
    )
}
