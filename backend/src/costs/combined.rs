//! Combined cost
//!
//! An ordered list of child costs. Every operation is delegated to the
//! children; queries sum their results.

use chrono::Duration;
use std::fmt;

use super::{Cost, CostModel};
use crate::core::Interval;

/// A composite of arbitrary child costs, including other combined costs
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedCost {
    name: String,
    costs: Vec<Cost>,
}

impl CombinedCost {
    pub fn new(name: impl Into<String>, costs: Vec<Cost>) -> Self {
        Self {
            name: name.into(),
            costs,
        }
    }

    /// Append a child cost (builder pattern)
    pub fn with_cost(mut self, cost: impl Into<Cost>) -> Self {
        self.costs.push(cost.into());
        self
    }

    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl CostModel for CombinedCost {
    fn cost_in_interval(&self, interval: &Interval) -> f64 {
        self.costs
            .iter()
            .map(|cost| cost.cost_in_interval(interval))
            .sum()
    }

    /// Always `true`, whatever the children are
    ///
    /// A combined cost is treated as apportionable as a whole. Callers that
    /// need the exact answer can check `sub_costs()` themselves.
    fn is_continuous(&self) -> bool {
        true
    }

    fn checked_shift(&self, duration: Duration) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            costs: self
                .costs
                .iter()
                .map(|cost| cost.checked_shift(duration))
                .collect::<Option<Vec<_>>>()?,
        })
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            costs: self.costs.iter().map(|cost| cost.scaled(factor)).collect(),
        }
    }

    fn scale_in_place(&mut self, factor: f64) -> &mut Self {
        for cost in &mut self.costs {
            cost.scale_in_place(factor);
        }
        self
    }

    fn sub_costs(&self) -> &[Cost] {
        &self.costs
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CombinedCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, cost) in self.costs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cost)?;
        }
        Ok(())
    }
}
