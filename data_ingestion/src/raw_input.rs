use serde_json::Value;

/// Form field names accepted by the prediction routes.
pub const FIELD_NAMES: [&str; 10] = [
    "price",
    "h1",
    "h24",
    "d7",
    "vol24h",
    "mcap",
    "price_prev",
    "vol24h_prev",
    "mcap_prev",
    "lr_prev",
];

/// User supplied market metrics. Every field is optional: a missing or
/// unparsable value stays `None` until the feature builder applies defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawInput {
    pub price: Option<f64>,
    pub h1: Option<f64>,
    pub h24: Option<f64>,
    pub d7: Option<f64>,
    pub vol24h: Option<f64>,
    pub mcap: Option<f64>,

    // Previous period, used for lags and day-over-day changes
    pub price_prev: Option<f64>,
    pub vol24h_prev: Option<f64>,
    pub mcap_prev: Option<f64>,
    pub lr_prev: Option<f64>,
}

impl RawInput {
    /// Builds from url-encoded form pairs. The first occurrence of a key wins;
    /// unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut input = Self::default();
        let mut seen: Vec<&str> = Vec::with_capacity(FIELD_NAMES.len());

        for (key, value) in pairs {
            if seen.contains(&key) {
                continue;
            }
            let Some(slot) = input.slot_mut(key) else {
                continue;
            };
            *slot = parse_number(value);
            seen.push(key);
        }
        input
    }

    /// Builds from a JSON object. Numbers and numeric strings are accepted,
    /// anything else counts as absent.
    pub fn from_json(object: &serde_json::Map<String, Value>) -> Self {
        let mut input = Self::default();
        for (key, value) in object {
            if let Some(slot) = input.slot_mut(key) {
                *slot = coerce_json(value);
            }
        }
        input
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut Option<f64>> {
        let slot = match field {
            "price" => &mut self.price,
            "h1" => &mut self.h1,
            "h24" => &mut self.h24,
            "d7" => &mut self.d7,
            "vol24h" => &mut self.vol24h,
            "mcap" => &mut self.mcap,
            "price_prev" => &mut self.price_prev,
            "vol24h_prev" => &mut self.vol24h_prev,
            "mcap_prev" => &mut self.mcap_prev,
            "lr_prev" => &mut self.lr_prev,
            _ => return None,
        };
        Some(slot)
    }
}

/// Total float coercion: surrounding whitespace is ignored and anything that
/// does not parse to a finite number is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn coerce_json(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number_accepts_plain_and_scientific() {
        assert_eq!(parse_number("100"), Some(100.0));
        assert_eq!(parse_number(" -2.5 "), Some(-2.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_number_is_total() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1,000"), None);
        assert_eq!(parse_number("nan"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_from_pairs_maps_known_fields() {
        let input = RawInput::from_pairs([
            ("price", "100"),
            ("vol24h", "5e6"),
            ("mcap_prev", "oops"),
            ("unrelated", "7"),
        ]);

        assert_eq!(input.price, Some(100.0));
        assert_eq!(input.vol24h, Some(5_000_000.0));
        assert_eq!(input.mcap_prev, None);
        assert_eq!(input.h1, None);
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let input = RawInput::from_pairs([("price", "1"), ("price", "2")]);
        assert_eq!(input.price, Some(1.0));
    }

    #[test]
    fn test_every_field_name_reaches_its_own_slot() {
        let values: Vec<String> = (1..=FIELD_NAMES.len()).map(|i| i.to_string()).collect();
        let input = RawInput::from_pairs(
            FIELD_NAMES
                .iter()
                .zip(values.iter())
                .map(|(name, v)| (*name, v.as_str())),
        );

        assert_eq!(
            input,
            RawInput {
                price: Some(1.0),
                h1: Some(2.0),
                h24: Some(3.0),
                d7: Some(4.0),
                vol24h: Some(5.0),
                mcap: Some(6.0),
                price_prev: Some(7.0),
                vol24h_prev: Some(8.0),
                mcap_prev: Some(9.0),
                lr_prev: Some(10.0),
            }
        );
    }

    #[test]
    fn test_unknown_field_leaves_lr_prev_untouched() {
        let input = RawInput::from_pairs([("lr_prev_typo", "0.3"), ("volume", "9")]);
        assert_eq!(input.lr_prev, None);

        let body = json!({ "lr_prev_typo": 0.3 });
        assert_eq!(RawInput::from_json(body.as_object().unwrap()), RawInput::default());
    }

    #[test]
    fn test_from_pairs_first_unparsable_value_still_wins() {
        let input = RawInput::from_pairs([("price", "abc"), ("price", "2")]);
        assert_eq!(input.price, None);
    }

    #[test]
    fn test_from_pairs_empty() {
        let input = RawInput::from_pairs(std::iter::empty());
        assert_eq!(input, RawInput::default());
    }

    #[test]
    fn test_from_json_numbers_and_strings() {
        let body = json!({
            "price": 42.5,
            "h24": "-3.1",
            "mcap": null,
            "lr_prev": true,
            "d7": [1, 2],
        });
        let input = RawInput::from_json(body.as_object().unwrap());

        assert_eq!(input.price, Some(42.5));
        assert_eq!(input.h24, Some(-3.1));
        assert_eq!(input.mcap, None);
        assert_eq!(input.lr_prev, None);
        assert_eq!(input.d7, None);
    }
}
