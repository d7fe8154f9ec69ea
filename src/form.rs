use crate::validation::accepts_amount_input;
use log::trace;

/// The raw contents of the expense entry form, exactly as typed.
///
/// The description and category accept anything; the amount only changes when the new
/// value still looks like a decimal being typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    description: String,
    amount: String,
    category: String,
}

impl ExpenseForm {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The selected category label, or an empty string when nothing is selected
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_description<S: Into<String>>(&mut self, description: S) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Replace the amount field, returning false (and keeping the prior value) if
    /// `amount` is not a decimal in progress.
    pub fn set_amount<S: AsRef<str>>(&mut self, amount: S) -> bool {
        let amount = amount.as_ref();
        if !accepts_amount_input(amount) {
            trace!("ignoring amount input '{}'", amount);
            return false;
        }

        self.amount = amount.to_owned();
        true
    }

    pub fn set_category<S: Into<String>>(&mut self, category: S) -> &mut Self {
        self.category = category.into();
        self
    }

    /// Clear every field back to empty/unselected
    pub fn reset(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.category.clear();
    }
}
