//! # Top-Up Schedule
//!
//! The recognized account top-up codes. A code stands in for an external
//! bank-payment confirmation and maps to a fixed coin amount.

use std::collections::BTreeMap;

/// Recognized top-up codes and the coin amount each one credits.
///
/// The default table carries the three denominations the network accepts.
/// Additional codes can be layered on for deployments that mint other
/// denominations:
///
/// ```
/// use regnet_core::TopUpSchedule;
///
/// let schedule = TopUpSchedule::default().with_code("upg50", 50);
/// assert_eq!(schedule.amount("upg50"), Some(50));
/// ```
#[derive(Debug, Clone)]
pub struct TopUpSchedule {
    codes: BTreeMap<String, u64>,
}

impl Default for TopUpSchedule {
    fn default() -> Self {
        Self {
            codes: BTreeMap::from([
                ("upg100".to_string(), 100),
                ("upg500".to_string(), 500),
                ("upg1000".to_string(), 1000),
            ]),
        }
    }
}

impl TopUpSchedule {
    /// A schedule with no recognized codes.
    pub fn empty() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Add (or replace) a code.
    pub fn with_code(mut self, code: impl Into<String>, amount: u64) -> Self {
        self.codes.insert(code.into(), amount);
        self
    }

    /// The coin amount for `code`, or `None` if the code is not recognized.
    pub fn amount(&self, code: &str) -> Option<u64> {
        self.codes.get(code).copied()
    }
}
