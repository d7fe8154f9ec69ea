use crate::{category::Category, form::ExpenseForm, CURRENCY_PRECISION};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

// Digits, optionally followed by a point and more digits. Every part is optional so
// that partially typed amounts such as "", "." and "12." are let through.
static AMOUNT_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("amount pattern is invalid"));

/// The reason a submitted form was rejected. Only the first failing check is reported.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValidationError {
    #[error("missing description")]
    MissingDescription,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("missing category")]
    MissingCategory,
}

/// The validated contents of a form, ready to become an `Expense`
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
}

impl ValidationError {
    /// The notification text shown to the user for this error
    pub fn user_message(&self) -> &'static str {
        match *self {
            ValidationError::MissingDescription => "Please provide a description!",
            ValidationError::InvalidAmount => "Please provide a valid amount greater than 0!",
            ValidationError::MissingCategory => "Please select a category!",
        }
    }
}

impl NewExpense {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Returns whether a keystroke leaving the amount field as `value` should be accepted.
///
/// This is deliberately lenient: any non-negative decimal that is still being typed
/// passes, including a bare ".". Incomplete amounts are only rejected on submit.
pub fn accepts_amount_input(value: &str) -> bool {
    AMOUNT_INPUT.is_match(value)
}

/// Parse a submitted amount and normalise it to two decimal places.
///
/// Rounding is half away from zero, so "0.005" becomes "0.01". The amount must still be
/// greater than zero once rounded.
pub fn parse_amount(value: &str) -> Result<Decimal, ValidationError> {
    if value.is_empty() || !accepts_amount_input(value) {
        return Err(ValidationError::InvalidAmount);
    }

    // Complete a bare leading or trailing point (".5", "5.") so it parses
    let mut completed = String::with_capacity(value.len() + 2);
    if value.starts_with('.') {
        completed.push('0');
    }
    completed.push_str(value);
    if value.ends_with('.') {
        completed.push('0');
    }

    let parsed = Decimal::from_str(&completed).map_err(|e| {
        debug!("could not parse amount '{}': {}", value, e);
        ValidationError::InvalidAmount
    })?;

    let mut amount =
        parsed.round_dp_with_strategy(CURRENCY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(CURRENCY_PRECISION);

    // `rescale` leaves fewer decimal places when the mantissa can't hold two
    if amount.scale() != CURRENCY_PRECISION {
        debug!("amount '{}' is too large to hold two decimal places", value);
        return Err(ValidationError::InvalidAmount);
    }

    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(amount)
}

/// Check a submitted form, in order: description, amount, then category.
pub fn validate(form: &ExpenseForm) -> Result<NewExpense, ValidationError> {
    if form.description().is_empty() {
        debug!("rejecting form without a description");
        return Err(ValidationError::MissingDescription);
    }

    let amount = parse_amount(form.amount())?;

    // An unselected category is an empty string; anything outside the fixed set is
    // treated the same way.
    let category = form.category().parse::<Category>().map_err(|e| {
        debug!("rejecting form category: {}", e);
        ValidationError::MissingCategory
    })?;

    Ok(NewExpense {
        description: form.description().to_owned(),
        amount,
        category,
    })
}
