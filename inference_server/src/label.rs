use serde::Serialize;

// Bin edges over the predicted liquidity ratio. Tuned by eye against the
// training distribution; revisit when the model is refit.
const VERY_LOW_BELOW: f64 = 0.02;
const LOW_BELOW: f64 = 0.06;
const MODERATE_BELOW: f64 = 0.15;
const HIGH_BELOW: f64 = 0.40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LiquidityLabel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Display token understood by the page stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Danger,
    Warning,
    Info,
    Success,
}

impl DisplayColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayColor::Danger => "danger",
            DisplayColor::Warning => "warning",
            DisplayColor::Info => "info",
            DisplayColor::Success => "success",
        }
    }
}

impl LiquidityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityLabel::VeryLow => "Very Low",
            LiquidityLabel::Low => "Low",
            LiquidityLabel::Moderate => "Moderate",
            LiquidityLabel::High => "High",
            LiquidityLabel::VeryHigh => "Very High",
        }
    }

    pub fn color(&self) -> DisplayColor {
        match self {
            LiquidityLabel::VeryLow => DisplayColor::Danger,
            LiquidityLabel::Low => DisplayColor::Warning,
            LiquidityLabel::Moderate => DisplayColor::Info,
            LiquidityLabel::High | LiquidityLabel::VeryHigh => DisplayColor::Success,
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            LiquidityLabel::VeryLow => {
                "Market liquidity appears thin—beware of slippage and price gaps."
            }
            LiquidityLabel::Low => "Liquidity is limited; moderate slippage likely on larger orders.",
            LiquidityLabel::Moderate => "Liquidity is acceptable; typical spreads and execution.",
            LiquidityLabel::High => "High activity vs market cap; orders likely to fill smoothly.",
            LiquidityLabel::VeryHigh => "Exceptional liquidity—tight spreads, fast execution.",
        }
    }
}

/// Map a predicted liquidity ratio onto its bin. Bins are left-closed, so a value
/// sitting exactly on an edge belongs to the higher bin.
pub fn interpret_liquidity(lr: f64) -> LiquidityLabel {
    if lr < VERY_LOW_BELOW {
        LiquidityLabel::VeryLow
    } else if lr < LOW_BELOW {
        LiquidityLabel::Low
    } else if lr < MODERATE_BELOW {
        LiquidityLabel::Moderate
    } else if lr < HIGH_BELOW {
        LiquidityLabel::High
    } else {
        LiquidityLabel::VeryHigh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_edges_belong_to_upper_bin() {
        assert_eq!(interpret_liquidity(0.02), LiquidityLabel::Low);
        assert_eq!(interpret_liquidity(0.06), LiquidityLabel::Moderate);
        assert_eq!(interpret_liquidity(0.15), LiquidityLabel::High);
        assert_eq!(interpret_liquidity(0.40), LiquidityLabel::VeryHigh);
    }

    #[test]
    fn test_interior_values() {
        assert_eq!(interpret_liquidity(0.0), LiquidityLabel::VeryLow);
        assert_eq!(interpret_liquidity(0.019999), LiquidityLabel::VeryLow);
        assert_eq!(interpret_liquidity(0.05), LiquidityLabel::Low);
        assert_eq!(interpret_liquidity(0.1), LiquidityLabel::Moderate);
        assert_eq!(interpret_liquidity(0.3999), LiquidityLabel::High);
        assert_eq!(interpret_liquidity(12.0), LiquidityLabel::VeryHigh);
    }

    #[test]
    fn test_negative_is_very_low() {
        assert_eq!(interpret_liquidity(-0.5), LiquidityLabel::VeryLow);
        assert_eq!(interpret_liquidity(f64::NEG_INFINITY), LiquidityLabel::VeryLow);
    }

    #[test]
    fn test_labels_are_ordered() {
        let values = [-1.0, 0.01, 0.03, 0.1, 0.2, 0.5];
        let labels: Vec<_> = values.iter().map(|v| interpret_liquidity(*v)).collect();
        assert!(labels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_display_tokens() {
        let very_low = interpret_liquidity(0.0);
        assert_eq!(very_low.as_str(), "Very Low");
        assert_eq!(very_low.color().as_str(), "danger");
        assert!(very_low.tip().starts_with("Market liquidity appears thin"));

        assert_eq!(LiquidityLabel::Low.color(), DisplayColor::Warning);
        assert_eq!(LiquidityLabel::Moderate.color(), DisplayColor::Info);
        assert_eq!(LiquidityLabel::High.color(), DisplayColor::Success);
        assert_eq!(LiquidityLabel::VeryHigh.color(), DisplayColor::Success);
    }
}
