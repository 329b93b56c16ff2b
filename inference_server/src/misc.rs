use serde::Serialize;

use crate::label::DisplayColor;

const PRED_DECIMALS: usize = 6;

/// What the page and the JSON API show for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub pred: f64,
    pub label: &'static str,
    pub color: DisplayColor,
    pub tip: &'static str,
}

/// Round to six decimals through the exact decimal expansion, so half-step
/// neighbours land on the same side as the underlying double.
pub fn round_pred(value: f64) -> f64 {
    format!("{:.*}", PRED_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}
