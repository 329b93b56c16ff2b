use serde::{Deserialize, Serialize};

pub const NUM_FEATURES: usize = 19;

/// Column order the regression model was fit with. Any change here silently
/// corrupts predictions.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "price",
    "1h",
    "24h",
    "7d",
    "24h_volume",
    "mkt_cap",
    "price_ma_3",
    "price_ma_5",
    "vol_3d",
    "liquidity_ratio_lag1",
    "price_lag1",
    "24h_volume_lag1",
    "mkt_cap_lag1",
    "price_ret_1d",
    "vol_chg_1d",
    "mcap_chg_1d",
    "log_price",
    "log_vol",
    "log_mcap",
];

/// One model input row. Field declaration order is the `FEATURE_NAMES` order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub price: f64,
    #[serde(rename = "1h")]
    pub change_1h: f64,
    #[serde(rename = "24h")]
    pub change_24h: f64,
    #[serde(rename = "7d")]
    pub change_7d: f64,
    #[serde(rename = "24h_volume")]
    pub volume_24h: f64,
    #[serde(rename = "mkt_cap")]
    pub market_cap: f64,

    pub price_ma_3: f64,
    pub price_ma_5: f64,
    pub vol_3d: f64,

    pub liquidity_ratio_lag1: f64,
    pub price_lag1: f64,
    #[serde(rename = "24h_volume_lag1")]
    pub volume_lag1: f64,
    #[serde(rename = "mkt_cap_lag1")]
    pub market_cap_lag1: f64,

    pub price_ret_1d: f64,
    pub vol_chg_1d: f64,
    pub mcap_chg_1d: f64,

    pub log_price: f64,
    pub log_vol: f64,
    pub log_mcap: f64,
}

impl Features {
    pub fn to_row(&self) -> [f64; NUM_FEATURES] {
        [
            self.price,
            self.change_1h,
            self.change_24h,
            self.change_7d,
            self.volume_24h,
            self.market_cap,
            self.price_ma_3,
            self.price_ma_5,
            self.vol_3d,
            self.liquidity_ratio_lag1,
            self.price_lag1,
            self.volume_lag1,
            self.market_cap_lag1,
            self.price_ret_1d,
            self.vol_chg_1d,
            self.mcap_chg_1d,
            self.log_price,
            self.log_vol,
            self.log_mcap,
        ]
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Features {
        Features {
            price: 1.0,
            change_1h: 2.0,
            change_24h: 3.0,
            change_7d: 4.0,
            volume_24h: 5.0,
            market_cap: 6.0,
            price_ma_3: 7.0,
            price_ma_5: 8.0,
            vol_3d: 9.0,
            liquidity_ratio_lag1: 10.0,
            price_lag1: 11.0,
            volume_lag1: 12.0,
            market_cap_lag1: 13.0,
            price_ret_1d: 14.0,
            vol_chg_1d: 15.0,
            mcap_chg_1d: 16.0,
            log_price: 17.0,
            log_vol: 18.0,
            log_mcap: 19.0,
        }
    }

    #[test]
    fn test_feature_names_match_training_columns() {
        assert_eq!(
            FEATURE_NAMES,
            [
                "price",
                "1h",
                "24h",
                "7d",
                "24h_volume",
                "mkt_cap",
                "price_ma_3",
                "price_ma_5",
                "vol_3d",
                "liquidity_ratio_lag1",
                "price_lag1",
                "24h_volume_lag1",
                "mkt_cap_lag1",
                "price_ret_1d",
                "vol_chg_1d",
                "mcap_chg_1d",
                "log_price",
                "log_vol",
                "log_mcap",
            ]
        );
    }

    #[test]
    fn test_to_row_follows_field_order() {
        let expected: Vec<f64> = (1..=NUM_FEATURES).map(|i| i as f64).collect();
        assert_eq!(numbered().to_row().to_vec(), expected);
    }

    #[test]
    fn test_serialized_names_sit_at_their_row_position() {
        let value = serde_json::to_value(numbered()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), NUM_FEATURES);
        for (idx, name) in FEATURE_NAMES.iter().enumerate() {
            assert_eq!(object[*name], (idx + 1) as f64, "column {name}");
        }
    }

    #[test]
    fn test_named_pairs_match_row() {
        let named: Vec<_> = numbered().named().collect();
        assert_eq!(named[3], ("7d", 4.0));
        assert_eq!(named[10], ("price_lag1", 11.0));
        assert_eq!(named[18], ("log_mcap", 19.0));
    }
}
