use crate::simplification::rules::Rule;
use std::sync::Arc;

/// Values at zero and parity
pub(crate) mod basic;
pub(crate) mod identities;

/// Get all trigonometric rules in priority order
pub(crate) fn get_trigonometric_rules() -> Vec<Arc<dyn Rule + Send + Sync>> {
    vec![
        Arc::new(basic::TrigZeroRule),
        Arc::new(basic::OddFunctionRule),
        Arc::new(basic::EvenFunctionRule),
        Arc::new(identities::PythagoreanIdentityRule),
    ]
}
