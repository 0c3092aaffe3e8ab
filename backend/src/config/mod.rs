//! Cost configuration
//!
//! Serializable description of a cost tree, so cost models can be kept in
//! JSON files and handed over the FFI boundary. [`CostConfig::build`] runs
//! the same validation as the constructors.
//!
//! # Format
//!
//! ```json
//! {
//!   "type": "combined",
//!   "name": "Flat",
//!   "costs": [
//!     {"type": "constant_continuous", "name": "Rent", "amount": 900.0, "per": "month"},
//!     {"type": "one_time", "name": "Deposit", "amount": 1800.0,
//!      "timepoint": "2022-01-01T00:00:00Z"},
//!     {"type": "repeating_one_time", "name": "Cleaning", "amount": 50.0,
//!      "timepoint": "2022-01-03T00:00:00Z", "every": {"custom_seconds": 1209600}}
//!   ]
//! }
//! ```
//!
//! `currency` is optional on leaf costs and defaults to `€`.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::{Period, Timestamp};
use crate::costs::{
    CombinedCost, ConstantContinuousCost, Cost, CostError, CostModel, OneTimeCost,
    RepeatingOneTimeCost, DEFAULT_CURRENCY,
};

/// Errors that can occur when loading or building a cost configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid cost config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid cost '{name}': {source}")]
    Cost {
        name: String,
        #[source]
        source: CostError,
    },
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Declarative description of a [`Cost`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CostConfig {
    /// `amount` every `per`, apportioned continuously
    ConstantContinuous {
        name: String,
        amount: f64,
        per: Period,
        #[serde(default = "default_currency")]
        currency: String,
    },

    /// `amount` once, at `timepoint`
    OneTime {
        name: String,
        amount: f64,
        timepoint: Timestamp,
        #[serde(default = "default_currency")]
        currency: String,
    },

    /// `amount` at `timepoint` and every `every` after it
    RepeatingOneTime {
        name: String,
        amount: f64,
        timepoint: Timestamp,
        every: Period,
        #[serde(default = "default_currency")]
        currency: String,
    },

    /// Sum of child costs
    Combined {
        name: String,
        #[serde(default)]
        costs: Vec<CostConfig>,
    },
}

impl CostConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn name(&self) -> &str {
        match self {
            CostConfig::ConstantContinuous { name, .. }
            | CostConfig::OneTime { name, .. }
            | CostConfig::RepeatingOneTime { name, .. }
            | CostConfig::Combined { name, .. } => name,
        }
    }

    /// Build the cost tree, validating every node
    ///
    /// # Errors
    /// Returns `ConfigError::Cost` naming the first invalid cost, e.g. a
    /// repeating cost with a non-positive step.
    pub fn build(&self) -> Result<Cost, ConfigError> {
        let wrap = |source: CostError| ConfigError::Cost {
            name: self.name().to_string(),
            source,
        };

        let cost: Cost = match self {
            CostConfig::ConstantContinuous {
                name,
                amount,
                per,
                currency,
            } => ConstantContinuousCost::new(name.as_str(), *amount, *per)
                .map_err(wrap)?
                .with_currency(currency.as_str())
                .into(),
            CostConfig::OneTime {
                name,
                amount,
                timepoint,
                currency,
            } => OneTimeCost::new(name.as_str(), *amount, *timepoint)
                .with_currency(currency.as_str())
                .into(),
            CostConfig::RepeatingOneTime {
                name,
                amount,
                timepoint,
                every,
                currency,
            } => RepeatingOneTimeCost::every(name.as_str(), *amount, *timepoint, *every)
                .map_err(wrap)?
                .with_currency(currency.as_str())
                .into(),
            CostConfig::Combined { name, costs } => {
                let children = costs
                    .iter()
                    .map(CostConfig::build)
                    .collect::<Result<Vec<_>, _>>()?;
                CombinedCost::new(name.as_str(), children).into()
            }
        };

        tracing::trace!(name = cost.name(), summary = %cost, "built cost from config");
        Ok(cost)
    }

    /// Deterministic SHA-256 fingerprint of this configuration
    ///
    /// Computed over canonical JSON (object keys sorted), so two configs
    /// that describe the same cost tree share a fingerprint regardless of
    /// the key order they were written in. Used to cache derived reports.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        use serde_json::Value;
        use std::collections::BTreeMap;

        fn canonicalize(value: Value) -> Value {
            match value {
                Value::Object(map) => {
                    let sorted: BTreeMap<String, Value> =
                        map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                    Value::Object(sorted.into_iter().collect())
                }
                Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
                other => other,
            }
        }

        let canonical = canonicalize(serde_json::to_value(self)?);
        let json = serde_json::to_string(&canonical)?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}

impl From<&Cost> for CostConfig {
    fn from(cost: &Cost) -> Self {
        match cost {
            Cost::ConstantContinuous(c) => CostConfig::ConstantContinuous {
                name: c.name().to_string(),
                amount: c.amount(),
                per: c.period(),
                currency: c.currency().to_string(),
            },
            Cost::OneTime(c) => CostConfig::OneTime {
                name: c.name().to_string(),
                amount: c.amount(),
                timepoint: c.timepoint(),
                currency: c.currency().to_string(),
            },
            Cost::RepeatingOneTime(c) => CostConfig::RepeatingOneTime {
                name: c.name().to_string(),
                amount: c.amount(),
                timepoint: c.timepoint(),
                every: c.period(),
                currency: c.currency().to_string(),
            },
            Cost::Combined(c) => CostConfig::Combined {
                name: c.name().to_string(),
                costs: c.costs().iter().map(CostConfig::from).collect(),
            },
        }
    }
}

impl Cost {
    /// Declarative description of this cost tree
    pub fn to_config(&self) -> CostConfig {
        CostConfig::from(self)
    }
}
