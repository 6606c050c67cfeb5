use crate::simplification::rules::Rule;
use std::sync::Arc;

/// Collection of like terms and like factors
pub(crate) mod combination;
/// Identities with 0 and 1, self-cancellation
pub(crate) mod identities;
pub(crate) mod powers;

/// Get all algebraic rules in priority order
pub(crate) fn get_algebraic_rules() -> Vec<Arc<dyn Rule + Send + Sync>> {
    vec![
        // Identities
        Arc::new(identities::AddZeroRule),
        Arc::new(identities::SubZeroRule),
        Arc::new(identities::ZeroMinusRule),
        Arc::new(identities::SubSelfRule),
        Arc::new(identities::MulZeroRule),
        Arc::new(identities::MulOneRule),
        Arc::new(identities::DivOneRule),
        Arc::new(identities::ZeroDivRule),
        Arc::new(identities::DivSelfRule),
        Arc::new(identities::PowZeroRule),
        Arc::new(identities::PowOneRule),
        Arc::new(identities::OnePowRule),
        // Power rules
        Arc::new(powers::PowerPowerRule),
        // Combination rules
        Arc::new(combination::CollectLikeTermsRule),
        Arc::new(combination::CollectLikeFactorsRule),
    ]
}
