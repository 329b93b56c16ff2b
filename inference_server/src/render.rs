use std::fmt::Write;

use crate::misc::Prediction;

// (form field, caption, optional)
const FORM_FIELDS: [(&str, &str, bool); 9] = [
    ("price", "Price (USD)", false),
    ("h1", "1h change (%)", false),
    ("h24", "24h change (%)", false),
    ("d7", "7d change (%)", false),
    ("vol24h", "24h volume (USD)", false),
    ("mcap", "Market cap (USD)", false),
    ("price_prev", "Previous-day price", true),
    ("vol24h_prev", "Previous-day 24h volume", true),
    ("mcap_prev", "Previous-day market cap", true),
];

const STYLE: &str = "body{font-family:sans-serif;max-width:44rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin:.4rem 0}input{width:100%;padding:.3rem}\
fieldset{margin-bottom:1rem}.alert{padding:1rem;border-radius:.3rem;margin-top:1rem}\
.danger{background:#f8d7da}.warning{background:#fff3cd}.info{background:#cff4fc}\
.success{background:#d1e7dd}footer{margin-top:2rem;color:#777;font-size:.8rem}";

/// Everything the page needs for one response.
#[derive(Debug, Default)]
pub struct PageContext<'a> {
    /// Submitted form pairs, echoed back into the inputs.
    pub values: &'a [(String, String)],
    pub result: Option<&'a Prediction>,
    pub error: Option<&'a str>,
    pub model_name: &'a str,
}

impl PageContext<'_> {
    fn value_of(&self, field: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

pub fn render_page(ctx: &PageContext<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>Crypto Liquidity Predictor</title>");
    let _ = write!(html, "<style>{STYLE}</style></head><body>");
    html.push_str("<h1>Crypto Liquidity Predictor</h1>");
    html.push_str("<form method=\"post\" action=\"/predict\">");

    html.push_str("<fieldset><legend>Current metrics</legend>");
    for (name, caption, _) in FORM_FIELDS.iter().filter(|f| !f.2) {
        push_input(&mut html, name, caption, ctx.value_of(name));
    }
    html.push_str("</fieldset><fieldset><legend>Previous day (optional)</legend>");
    for (name, caption, _) in FORM_FIELDS.iter().filter(|f| f.2) {
        push_input(&mut html, name, caption, ctx.value_of(name));
    }
    html.push_str("</fieldset><button type=\"submit\">Predict</button></form>");

    if let Some(result) = ctx.result {
        let _ = write!(
            html,
            "<div class=\"alert {color}\" id=\"result\"><h2>{label}</h2>\
             <p>Predicted liquidity ratio: <strong>{pred}</strong></p><p>{tip}</p></div>",
            color = result.color.as_str(),
            label = escape(result.label),
            pred = result.pred,
            tip = escape(result.tip),
        );
    }

    if let Some(error) = ctx.error {
        let _ = write!(
            html,
            "<div class=\"alert danger\" id=\"error\"><strong>Error:</strong> {}</div>",
            escape(error)
        );
    }

    let _ = write!(
        html,
        "<footer>Model: {}</footer></body></html>",
        escape(ctx.model_name)
    );
    html
}

fn push_input(html: &mut String, name: &str, caption: &str, value: &str) {
    let _ = write!(
        html,
        "<label>{caption}<input type=\"text\" inputmode=\"decimal\" name=\"{name}\" value=\"{}\"></label>",
        escape(value)
    );
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
