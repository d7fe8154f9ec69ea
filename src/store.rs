use crate::{
    category::Category,
    expense::{Expense, ExpenseId},
    max_amount, CURRENCY_PRECISION,
};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::slice::Iter;

/// The ordered list of recorded expenses, oldest first.
///
/// The store trusts its callers: records are validated before they get here.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn add(&mut self, expense: Expense) {
        debug!("adding expense {}", expense.id());
        self.expenses.push(expense);
    }

    /// Remove the expense with the given id. Removing an unknown id does nothing.
    pub fn delete(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id() == id)?;
        debug!("deleting expense {}", id);
        // `remove` rather than `swap_remove` to keep insertion order
        Some(self.expenses.remove(index))
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == id)
    }

    /// A snapshot of the current expenses, most recent last
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    pub fn iter(&self) -> Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of every expense, to two decimal places
    pub fn total(&self) -> Decimal {
        sum(self.expenses.iter())
    }

    /// Sum of the expenses filed under `category`, to two decimal places
    pub fn total_by_category(&self, category: Category) -> Decimal {
        sum(self.expenses.iter().filter(|e| e.category() == category))
    }

    /// Returns whether `amount` can be added without the total exceeding `max_amount`
    pub fn has_room_for(&self, amount: Decimal) -> bool {
        self.expenses
            .iter()
            .try_fold(amount, |acc, e| checked_sum(acc, e.amount()))
            .is_some()
    }
}

// Adds two amounts, failing if the result can't be held at two decimal places
fn checked_sum(a: Decimal, b: Decimal) -> Option<Decimal> {
    a.checked_add(b).filter(|total| *total <= max_amount())
}

// The store never holds more than `max_amount` when filled through a `Tracker`. Stores
// filled by hand saturate rather than overflow.
fn sum<'a, I: Iterator<Item = &'a Expense>>(expenses: I) -> Decimal {
    let mut total = expenses
        .map(|e| e.amount())
        .try_fold(Decimal::ZERO, checked_sum)
        .unwrap_or_else(|| {
            warn!("expense total exceeds {}, saturating", max_amount());
            max_amount()
        });
    total.rescale(CURRENCY_PRECISION);
    total
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a Expense;
    type IntoIter = Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expense::IdGenerator, validation::NewExpense};
    use rust_decimal_macros::dec;

    fn expense(
        ids: &mut IdGenerator,
        description: &str,
        amount: Decimal,
        category: Category,
    ) -> Expense {
        Expense::new(
            ids.issue(),
            NewExpense {
                description: description.into(),
                amount,
                category,
            },
        )
    }

    fn populated() -> (ExpenseStore, Vec<ExpenseId>) {
        let mut ids = IdGenerator::default();
        let mut store = ExpenseStore::default();
        let records = vec![
            expense(&mut ids, "Coffee", dec!(3.50), Category::Food),
            expense(&mut ids, "Bus", dec!(2.25), Category::Transport),
            expense(&mut ids, "Lunch", dec!(12.00), Category::Food),
        ];
        let id_list = records.iter().map(|e| e.id()).collect();
        for record in records {
            store.add(record);
        }
        (store, id_list)
    }

    fn descriptions(store: &ExpenseStore) -> Vec<&str> {
        store.iter().map(|e| e.description()).collect()
    }

    #[test]
    fn add_keeps_insertion_order() {
        let (store, _) = populated();
        assert_eq!(store.len(), 3);
        assert_eq!(descriptions(&store), vec!["Coffee", "Bus", "Lunch"]);
    }

    #[test]
    fn delete_removes_only_that_expense() {
        let (mut store, ids) = populated();
        let removed = store.delete(ids[1]).unwrap();
        assert_eq!(removed.description(), "Bus");
        assert_eq!(descriptions(&store), vec!["Coffee", "Lunch"]);
        assert!(store.get(ids[1]).is_none());
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let (mut store, ids) = populated();
        store.delete(ids[0]);
        assert!(store.delete(ids[0]).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn list_is_a_snapshot() {
        let (mut store, ids) = populated();
        let snapshot = store.list();
        store.delete(ids[0]);
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].description(), "Coffee");
    }

    #[test]
    fn total_empty() {
        let store = ExpenseStore::default();
        assert!(store.is_empty());
        assert_eq!(store.total().to_string(), "0.00");
    }

    #[test]
    fn total_sums_all_expenses() {
        let (store, _) = populated();
        assert_eq!(store.total(), dec!(17.75));
        assert_eq!(store.total().to_string(), "17.75");
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let mut ids = IdGenerator::default();
        let mut store = ExpenseStore::default();
        store.add(expense(&mut ids, "House", crate::max_amount(), Category::Other));
        store.add(expense(&mut ids, "Boat", crate::max_amount(), Category::Other));

        assert_eq!(store.total(), crate::max_amount());
        assert_eq!(store.total().scale(), 2);
        assert_eq!(store.total_by_category(Category::Other), crate::max_amount());
    }

    #[test]
    fn has_room_for() {
        let (store, _) = populated();
        assert!(store.has_room_for(dec!(1.00)));
        assert!(!store.has_room_for(crate::max_amount()));
        assert!(ExpenseStore::default().has_room_for(crate::max_amount()));
    }

    #[test]
    fn total_by_category() {
        let (store, _) = populated();
        assert_eq!(store.total_by_category(Category::Food).to_string(), "15.50");
        assert_eq!(store.total_by_category(Category::Shopping).to_string(), "0.00");
    }
}
