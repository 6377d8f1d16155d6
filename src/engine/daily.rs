//! Day-by-day expense log

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Expenses and category totals for a single day
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub expenses: Vec<Expense>,
    pub total: Money,
    pub category_spent: BTreeMap<String, Money>,
}

impl DaySummary {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            expenses: Vec::new(),
            total: Money::zero(),
            category_spent: BTreeMap::new(),
        }
    }
}

/// Group expenses by date, oldest day first
///
/// Expenses within a day keep their input order.
pub fn daily_breakdown(expenses: &[Expense]) -> Vec<DaySummary> {
    let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();

    for expense in expenses {
        let day = days
            .entry(expense.date)
            .or_insert_with(|| DaySummary::new(expense.date));
        day.total += expense.amount;
        *day
            .category_spent
            .entry(expense.category_name().to_string())
            .or_default() += expense.amount;
        day.expenses.push(expense.clone());
    }

    days.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripId;

    fn on(day: u32, cents: i64, category: &str) -> Expense {
        Expense::new(
            TripId::new(),
            "A".into(),
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2026, 2, day).unwrap(),
        )
        .with_category(category)
    }

    #[test]
    fn test_groups_by_date_in_order() {
        let expenses = vec![
            on(3, 500, "Food"),
            on(1, 1000, "Stay"),
            on(3, 250, "Food"),
            on(3, 100, "Fuel"),
        ];

        let days = daily_breakdown(&expenses);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(days[0].total, Money::from_cents(1000));

        let third = &days[1];
        assert_eq!(third.expenses.len(), 3);
        assert_eq!(third.expenses[0].amount, Money::from_cents(500));
        assert_eq!(third.total, Money::from_cents(850));
        assert_eq!(third.category_spent.get("Food"), Some(&Money::from_cents(750)));
        assert_eq!(third.category_spent.get("Fuel"), Some(&Money::from_cents(100)));
    }

    #[test]
    fn test_empty() {
        assert!(daily_breakdown(&[]).is_empty());
    }
}
