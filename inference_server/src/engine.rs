use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use data_ingestion::raw_input::RawInput;
use feature_processing::{FEATURE_NAMES, Features, NUM_FEATURES, build_feature_row};
use log::{Level, debug, info, log_enabled, warn};
use ndarray::{ArrayView1, arr2};
use serde::Deserialize;

use crate::error::InferenceError;
use crate::label::interpret_liquidity;
use crate::misc::{Prediction, round_pred};

/// A fitted regression model. `predict` returns the model's raw output, which is
/// on the `log1p(liquidity_ratio)` scale.
pub trait Predictor: Send + Sync {
    fn name(&self) -> &str {
        "model"
    }

    fn predict(&self, features: &Features) -> Result<f64, InferenceError>;
}

/// Per-column standardization applied before the linear map.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Linear regression exported from the training pipeline as JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    #[serde(default = "default_model_name")]
    pub name: String,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
}

fn default_model_name() -> String {
    "linear".to_string()
}

impl LinearModel {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| InferenceError::ArtifactIo {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_json(&raw)?;

        info!(
            "Loaded model '{}' from {} ({} coefficients, exported {})",
            model.name,
            path.display(),
            model.coefficients.len(),
            model
                .exported_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "at unknown time".to_string()),
        );
        Ok(model)
    }

    pub fn from_json(raw: &str) -> Result<Self, InferenceError> {
        let model: Self = serde_json::from_str(raw)?;
        model.warn_on_feature_drift();
        Ok(model)
    }

    // Column order is never enforced; a mismatch is only reported.
    fn warn_on_feature_drift(&self) {
        let Some(names) = &self.feature_names else {
            return;
        };
        if !names.iter().map(String::as_str).eq(FEATURE_NAMES) {
            warn!(
                "Model '{}' was fit on columns {:?}, but rows are built as {:?}",
                self.name, names, FEATURE_NAMES
            );
        }
    }

    fn check_width(&self, len: usize) -> Result<(), InferenceError> {
        if len != NUM_FEATURES {
            return Err(InferenceError::ShapeMismatch {
                expected: len,
                got: NUM_FEATURES,
            });
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &Features) -> Result<f64, InferenceError> {
        self.check_width(self.coefficients.len())?;

        let mut x = arr2(&[features.to_row()]);
        if let Some(scaler) = &self.scaler {
            self.check_width(scaler.mean.len())?;
            self.check_width(scaler.scale.len())?;

            let mean = ArrayView1::from(&scaler.mean[..]);
            // sklearn leaves zero-variance columns unscaled
            let scale = ArrayView1::from(&scaler.scale[..]).mapv(|s| if s == 0.0 { 1.0 } else { s });
            x = (&x - &mean) / &scale;
        }

        let coef = ArrayView1::from(&self.coefficients[..]);
        let out = x.dot(&coef);
        Ok(self.intercept + out[0])
    }
}

/// Runs one request through features, model and labeling. The predictor is
/// built once at startup and shared read-only between requests.
#[derive(Clone)]
pub struct InferenceEngine {
    predictor: Arc<dyn Predictor>,
}

impl InferenceEngine {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn run(&self, input: &RawInput) -> Result<Prediction, InferenceError> {
        let features = build_feature_row(input);
        if log_enabled!(Level::Debug) {
            let row: Vec<String> = features.named().map(|(name, v)| format!("{name}={v}")).collect();
            debug!("Features: {}", row.join(" "));
        }

        // model trained on log1p(target)
        let pred_log = self.predictor.predict(&features)?;
        let pred = pred_log.exp_m1();
        if !pred.is_finite() {
            return Err(InferenceError::NonFinite(pred));
        }
        if pred < 0.0 {
            warn!("Negative liquidity ratio predicted ({pred}); passing through unclamped");
        }

        let label = interpret_liquidity(pred);
        debug!("Prediction: log={pred_log} ratio={pred} label={}", label.as_str());

        Ok(Prediction {
            pred: round_pred(pred),
            label: label.as_str(),
            color: label.color(),
            tip: label.tip(),
        })
    }
}
