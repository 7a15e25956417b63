//! Pure input validation for restock and sale requests.
//!
//! These predicates run before any store access (fail fast, no partial
//! writes). They are side-effect free and deterministic.

use stockbook_core::{DomainError, DomainResult};

/// Configurable validation bounds.
///
/// The two knobs correspond to behaviors that differed between observed
/// revisions of this service and were deliberately kept configurable:
/// the maximum product-name length (8 vs 50) and whether sale names must
/// be alphabetic-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Maximum product-name length in characters.
    pub max_name_len: usize,
    /// Require `[A-Za-z]+` names on sales when set.
    pub alphabetic_sale_names: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_name_len: 50,
            alphabetic_sale_names: false,
        }
    }
}

/// Validate a restock request: non-empty bounded name, strictly positive amount.
pub fn validate_restock(policy: &ValidationPolicy, name: &str, amount: i64) -> DomainResult<()> {
    validate_name(policy, name)?;
    validate_amount(amount)
}

/// Validate a sale request.
///
/// Same name/amount rules as restock, optionally restricted to alphabetic
/// names; `price` is permitted to be absent (no revenue impact) but must be
/// strictly positive when present.
pub fn validate_sale(
    policy: &ValidationPolicy,
    name: &str,
    amount: i64,
    price: Option<f64>,
) -> DomainResult<()> {
    validate_name(policy, name)?;

    if policy.alphabetic_sale_names && !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::validation("name must be alphabetic"));
    }

    validate_amount(amount)?;

    if let Some(price) = price {
        if !price.is_finite() || price <= 0.0 {
            return Err(DomainError::validation("price must be strictly positive"));
        }
    }

    Ok(())
}

fn validate_name(policy: &ValidationPolicy, name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::validation("name is required"));
    }
    if name.chars().count() > policy.max_name_len {
        return Err(DomainError::validation(format!(
            "name exceeds {} characters",
            policy.max_name_len
        )));
    }
    Ok(())
}

fn validate_amount(amount: i64) -> DomainResult<()> {
    if amount <= 0 {
        return Err(DomainError::validation(
            "amount must be a strictly positive integer",
        ));
    }
    Ok(())
}
