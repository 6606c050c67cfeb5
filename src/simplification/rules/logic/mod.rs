use crate::simplification::rules::Rule;
use std::sync::Arc;

/// Literal folding (the eval subset)
pub(crate) mod folding;
pub(crate) mod identities;

/// Get all logic rules. Identities share a priority, so this order is the
/// order they are tried in.
pub(crate) fn get_logic_rules() -> Vec<Arc<dyn Rule + Send + Sync>> {
    vec![
        Arc::new(folding::FoldNotRule),
        Arc::new(folding::FoldConnectiveRule),
        Arc::new(folding::FoldEqualsRule),
        Arc::new(folding::FoldComparisonRule),
        Arc::new(identities::FalseImpliesRule),
        Arc::new(identities::AndOfNegationsRule),
        Arc::new(identities::OrOfNegationsRule),
        Arc::new(identities::ExcludedMiddleRule),
        Arc::new(identities::ContradictionRule),
        Arc::new(identities::OrNotToImpliesRule),
        Arc::new(identities::IdempotenceRule),
        Arc::new(identities::SelfImplicationRule),
        Arc::new(identities::DoubleNegationRule),
        Arc::new(identities::AbsorbingLiteralRule),
        Arc::new(identities::FactorCommonOperandRule),
        Arc::new(identities::AbsorptionRule),
        Arc::new(identities::ComplementAbsorptionRule),
        Arc::new(identities::ContrapositionRule),
    ]
}
