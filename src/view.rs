use crate::{category::Category, expense::ExpenseId};
use std::fmt;

const EMPTY_MESSAGE: &str = "No expenses recorded yet.";

/// What a host needs to draw the expense list and total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerView {
    pub rows: Vec<ExpenseRow>,
    /// The formatted total, including the currency glyph
    pub total: String,
}

/// One line of the expense list. `id` is what the row's delete control hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub description: String,
    pub amount: String,
    pub category: Category,
}

impl TrackerView {
    /// The placeholder to show instead of the list when there are no expenses
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.rows.is_empty() {
            Some(EMPTY_MESSAGE)
        } else {
            None
        }
    }

    pub fn total_line(&self) -> String {
        format!("Total: {}", self.total)
    }
}

impl fmt::Display for ExpenseRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.description, self.amount, self.category)
    }
}

impl fmt::Display for TrackerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.empty_message() {
            Some(message) => writeln!(f, "{}", message)?,
            None => {
                for row in &self.rows {
                    writeln!(f, "{}", row)?;
                }
            }
        }
        write!(f, "{}", self.total_line())
    }
}
