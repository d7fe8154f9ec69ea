use crate::{
    expense::{Expense, ExpenseId, IdGenerator},
    form::ExpenseForm,
    notify::{LogNotifier, Notifier},
    store::ExpenseStore,
    validation::{validate, ValidationError},
    view::{ExpenseRow, TrackerView},
};
use log::{debug, info};
use rust_decimal::Decimal;

const DEFAULT_CURRENCY_GLYPH: &str = "₱";

/// Presentation settings for a `Tracker`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    currency_glyph: String,
}

/// The expense form and the list of expenses it has recorded.
///
/// Every action (a keystroke, a submit, a delete) runs to completion before the next
/// one, so the form and store are owned outright and need no locking. Nothing is
/// persisted; dropping the `Tracker` discards its expenses.
#[derive(Debug)]
pub struct Tracker<N: Notifier = LogNotifier> {
    form: ExpenseForm,
    store: ExpenseStore,
    ids: IdGenerator,
    notifier: N,
    config: TrackerConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            currency_glyph: DEFAULT_CURRENCY_GLYPH.into(),
        }
    }
}

impl TrackerConfig {
    pub fn with_currency_glyph<S: Into<String>>(mut self, glyph: S) -> Self {
        self.currency_glyph = glyph.into();
        self
    }

    pub fn currency_glyph(&self) -> &str {
        &self.currency_glyph
    }

    /// Render an amount with the currency glyph, e.g. "₱3.50"
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{}", self.currency_glyph, amount)
    }
}

impl Default for Tracker<LogNotifier> {
    fn default() -> Self {
        Tracker::new(LogNotifier)
    }
}

impl<N: Notifier> Tracker<N> {
    pub fn new(notifier: N) -> Self {
        Tracker::with_config(notifier, TrackerConfig::default())
    }

    pub fn with_config(notifier: N, config: TrackerConfig) -> Self {
        Tracker {
            form: ExpenseForm::default(),
            store: ExpenseStore::default(),
            ids: IdGenerator::default(),
            notifier,
            config,
        }
    }

    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    /// Access the form for input. Amount keystrokes are filtered by
    /// `ExpenseForm::set_amount`.
    pub fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.form
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Validate the form and, if it passes, record a new expense and clear the form.
    ///
    /// A rejected form is reported to the notifier and left exactly as it was typed so
    /// the user can correct it. The store is only touched on success.
    pub fn submit(&mut self) -> Result<ExpenseId, ValidationError> {
        let validated = validate(&self.form).and_then(|e| {
            if self.store.has_room_for(e.amount()) {
                Ok(e)
            } else {
                debug!("amount {} would overflow the total", e.amount());
                Err(ValidationError::InvalidAmount)
            }
        });
        let new_expense = match validated {
            Ok(e) => e,
            Err(e) => {
                debug!("form rejected: {}", e);
                self.notifier.report(&e);
                return Err(e);
            }
        };

        let id = self.ids.issue();
        let expense = Expense::new(id, new_expense);
        info!(
            "recorded {} expense of {}",
            expense.category(),
            expense.amount()
        );
        self.store.add(expense);
        self.form.reset();

        Ok(id)
    }

    /// Remove an expense, returning whether anything was removed
    pub fn delete(&mut self, id: ExpenseId) -> bool {
        self.store.delete(id).is_some()
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.store.list()
    }

    pub fn total(&self) -> Decimal {
        self.store.total()
    }

    pub fn render(&self) -> TrackerView {
        let rows = self
            .store
            .iter()
            .map(|e| ExpenseRow {
                id: e.id(),
                description: e.description().to_owned(),
                amount: self.config.format_amount(e.amount()),
                category: e.category(),
            })
            .collect();

        TrackerView {
            rows,
            total: self.config.format_amount(self.store.total()),
        }
    }
}
