use crate::{category::Category, validation::NewExpense};
use chrono::Utc;
use log::trace;
use rust_decimal::Decimal;
use std::fmt;

/// Identifies an `Expense` for removal. It is never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(i64);

/// A single recorded expense.
///
/// `Expense`s are only created from a validated `NewExpense`, so the description is
/// never empty and the amount is always positive with exactly two decimal places.
/// They are never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    amount: Decimal,
    category: Category,
}

/// Issues `ExpenseId`s from the wall clock.
///
/// Ids are creation timestamps in milliseconds. Two expenses created within the same
/// millisecond (or after the clock steps backwards) would collide, so an id is never
/// allowed to be less than or equal to the last one issued.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: Option<i64>,
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Expense {
    pub(crate) fn new(id: ExpenseId, expense: NewExpense) -> Self {
        Expense {
            id,
            description: expense.description,
            amount: expense.amount,
            category: expense.category,
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

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

impl IdGenerator {
    pub fn issue(&mut self) -> ExpenseId {
        self.issue_at(Utc::now().timestamp_millis())
    }

    // Split from `issue` to allow overriding the current time for testing
    fn issue_at(&mut self, now: i64) -> ExpenseId {
        let id = match self.last {
            Some(last) if now <= last => {
                trace!("clock has not advanced past {}, bumping id", last);
                last + 1
            }
            _ => now,
        };
        self.last = Some(id);
        ExpenseId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn issue_uses_timestamp() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.issue_at(1_000), ExpenseId(1_000));
        assert_eq!(ids.issue_at(1_005), ExpenseId(1_005));
    }

    #[test]
    fn issue_same_millisecond() {
        let mut ids = IdGenerator::default();
        let a = ids.issue_at(1_000);
        let b = ids.issue_at(1_000);
        let c = ids.issue_at(1_000);
        assert_eq!(a, ExpenseId(1_000));
        assert_eq!(b, ExpenseId(1_001));
        assert_eq!(c, ExpenseId(1_002));
    }

    #[test]
    fn issue_clock_went_backwards() {
        let mut ids = IdGenerator::default();
        ids.issue_at(5_000);
        assert_eq!(ids.issue_at(4_000), ExpenseId(5_001));
    }

    #[test]
    fn issue_from_clock_is_unique() {
        let mut ids = IdGenerator::default();
        let first = ids.issue();
        let second = ids.issue();
        assert!(second > first);
    }

    #[test]
    fn expense_from_new_expense() {
        let expense = Expense::new(
            ExpenseId(7),
            NewExpense {
                description: "Coffee".into(),
                amount: dec!(3.50),
                category: Category::Food,
            },
        );
        assert_eq!(expense.id(), ExpenseId(7));
        assert_eq!(expense.description(), "Coffee");
        assert_eq!(expense.amount().to_string(), "3.50");
        assert_eq!(expense.category(), Category::Food);
    }
}
