use data_ingestion::raw_input::RawInput;
use log::trace;

use crate::misc::Features;

/// Build the full model row from whatever the user supplied.
///
/// Only the six core metrics are asked for; every other slot is inferred from the
/// optional previous-period fields or set to a neutral default. No history is
/// available at request time, so the moving averages collapse to the current price
/// and short-window volatility is zero. The model was fit against rows produced
/// this way, so these placeholders must stay as they are.
pub fn build_feature_row(input: &RawInput) -> Features {
    let price = input.price.unwrap_or(0.0);

    let features = Features {
        price,
        change_1h: input.h1.unwrap_or(0.0),
        change_24h: input.h24.unwrap_or(0.0),
        change_7d: input.d7.unwrap_or(0.0),
        volume_24h: input.vol24h.unwrap_or(0.0),
        market_cap: input.mcap.unwrap_or(0.0),

        price_ma_3: price,
        price_ma_5: price,
        vol_3d: 0.0,

        liquidity_ratio_lag1: lagged_liquidity_ratio(input),
        price_lag1: input.price_prev.unwrap_or(0.0),
        volume_lag1: input.vol24h_prev.unwrap_or(0.0),
        market_cap_lag1: input.mcap_prev.unwrap_or(0.0),

        price_ret_1d: safe_ret(input.price, input.price_prev),
        vol_chg_1d: safe_ret(input.vol24h, input.vol24h_prev),
        mcap_chg_1d: safe_ret(input.mcap, input.mcap_prev),

        log_price: log1p_safe(price),
        log_vol: log1p_safe(input.vol24h.unwrap_or(0.0)),
        log_mcap: log1p_safe(input.mcap.unwrap_or(0.0)),
    };

    trace!("Built feature row: {:?}", features);
    features
}

/// Previous-period volume / market cap, falling back to the direct `lr_prev`
/// override, then to zero.
fn lagged_liquidity_ratio(input: &RawInput) -> f64 {
    let ratio = match (input.vol24h_prev, input.mcap_prev) {
        (Some(vol), Some(mcap)) if mcap != 0.0 => Some(vol / mcap),
        _ => input.lr_prev,
    };

    ratio.filter(|r| r.is_finite()).unwrap_or(0.0)
}

/// Relative change from `prev` to `curr`; zero when either side is missing or
/// `prev` is zero.
fn safe_ret(curr: Option<f64>, prev: Option<f64>) -> f64 {
    match (curr, prev) {
        (Some(curr), Some(prev)) if prev != 0.0 => (curr - prev) / prev,
        _ => 0.0,
    }
}

/// `ln(1 + v)`, or zero where that is undefined.
fn log1p_safe(v: f64) -> f64 {
    if v <= -1.0 {
        return 0.0;
    }
    v.ln_1p()
}
