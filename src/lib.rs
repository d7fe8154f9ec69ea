mod category;
mod expense;
mod form;
mod notify;
mod store;
mod tracker;
mod validation;
mod view;

pub use category::{Category, CategoryError};
pub use expense::{Expense, ExpenseId};
pub use form::ExpenseForm;
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use store::ExpenseStore;
pub use tracker::{Tracker, TrackerConfig};
pub use validation::{accepts_amount_input, parse_amount, validate, NewExpense, ValidationError};
pub use view::{ExpenseRow, TrackerView};

use rust_decimal::Decimal;

// This represents the number of decimal places that a currency can validly express.
// @todo Support the full range of currency precisions specified in ISO 4217.
const CURRENCY_PRECISION: u32 = 2;

/// The largest value a `Decimal` can hold at `CURRENCY_PRECISION`, i.e. a full 96 bit
/// mantissa with two decimal places. Neither a single amount nor a total may exceed it.
pub fn max_amount() -> Decimal {
    Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, CURRENCY_PRECISION)
}
