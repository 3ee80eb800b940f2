//! Overflow-checked money arithmetic.
//!
//! `Decimal` operators panic when a result leaves the representable range.
//! Pay is computed from caller-supplied rates and durations, so every product
//! and sum that can grow goes through these helpers instead.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Multiplies `factors` left to right.
///
/// Fails with [`EngineError::PayOverflow`] naming `component` when the
/// product cannot be represented.
pub(crate) fn checked_product(
    component: &'static str,
    factors: &[Decimal],
) -> EngineResult<Decimal> {
    factors.iter().try_fold(Decimal::ONE, |product, factor| {
        product
            .checked_mul(*factor)
            .ok_or(EngineError::PayOverflow { component })
    })
}

/// Adds `amounts` in order.
///
/// Fails with [`EngineError::PayOverflow`] naming `component` when the sum
/// cannot be represented.
pub(crate) fn checked_sum(
    component: &'static str,
    amounts: impl IntoIterator<Item = Decimal>,
) -> EngineResult<Decimal> {
    amounts.into_iter().try_fold(Decimal::ZERO, |sum, amount| {
        sum.checked_add(amount)
            .ok_or(EngineError::PayOverflow { component })
    })
}
