//! Property tests for the aggregation and settlement engine

use chrono::NaiveDate;
use proptest::prelude::*;

use trip_splitter::engine::{
    compute_aggregates, compute_balances, compute_settlements, daily_breakdown,
};
use trip_splitter::models::{Expense, Money, Participant, TripId};

const NAMES: [&str; 5] = ["Asha", "Ben", "Chen", "Dev", "Eli"];
const CATEGORIES: [&str; 4] = ["Food", "Fuel", "Stay", "Travel"];

#[derive(Debug, Clone)]
struct RawExpense {
    payer: usize,
    cents: i64,
    category: Option<usize>,
    day: u32,
    included: Option<Vec<bool>>,
}

fn raw_expense(people: usize) -> impl Strategy<Value = RawExpense> {
    (
        0..people,
        0i64..1_000_000,
        proptest::option::of(0..CATEGORIES.len()),
        1u32..6,
        proptest::option::of(proptest::collection::vec(any::<bool>(), people)),
    )
        .prop_map(|(payer, cents, category, day, included)| RawExpense {
            payer,
            cents,
            category,
            day,
            included,
        })
}

fn trip_case() -> impl Strategy<Value = (Vec<Participant>, Vec<Expense>)> {
    (1usize..=NAMES.len()).prop_flat_map(|people| {
        proptest::collection::vec(raw_expense(people), 0..25).prop_map(move |raw| {
            let participants: Vec<Participant> =
                NAMES[..people].iter().map(Participant::new).collect();
            let trip_id = TripId::new();
            let expenses = raw
                .into_iter()
                .map(|r| build_expense(trip_id, &participants, r))
                .collect();
            (participants, expenses)
        })
    })
}

fn build_expense(trip_id: TripId, participants: &[Participant], raw: RawExpense) -> Expense {
    let date = NaiveDate::from_ymd_opt(2026, 5, raw.day).unwrap();
    let mut expense = Expense::new(
        trip_id,
        participants[raw.payer].clone(),
        Money::from_cents(raw.cents),
        date,
    );
    if let Some(index) = raw.category {
        expense = expense.with_category(CATEGORIES[index]);
    }
    if let Some(flags) = raw.included {
        let included = participants
            .iter()
            .zip(flags)
            .filter(|(_, keep)| *keep)
            .map(|(p, _)| p.clone())
            .collect();
        expense = expense.with_included(included);
    }
    expense
}

proptest! {
    #[test]
    fn totals_agree((participants, expenses) in trip_case()) {
        let aggregates = compute_aggregates(&expenses, &participants);

        let by_person: Money = aggregates.person_spent.values().sum();
        let by_category: Money = aggregates.category_spent.values().sum();
        let direct: Money = expenses.iter().map(|e| e.amount).sum();

        prop_assert_eq!(aggregates.total, direct);
        prop_assert_eq!(by_person, aggregates.total);
        prop_assert_eq!(by_category, aggregates.total);
        prop_assert_eq!(aggregates.expense_count, expenses.len());
    }

    #[test]
    fn balances_sum_to_zero_within_rounding((participants, expenses) in trip_case()) {
        // Expenses that include nobody leave their amount unowed.
        let unowed: i64 = expenses
            .iter()
            .filter(|e| matches!(&e.included, Some(list) if list.is_empty()))
            .map(|e| e.amount.cents())
            .sum();

        let (_, balances) = compute_balances(&expenses, &participants);
        prop_assert_eq!(balances.len(), participants.len());

        let residue = balances.total().cents() - unowed;
        prop_assert!(residue.abs() <= participants.len() as i64, "residue {}", residue);
    }

    #[test]
    fn aggregation_is_deterministic((participants, expenses) in trip_case()) {
        let (first_aggregates, first) = compute_balances(&expenses, &participants);
        let (second_aggregates, second) = compute_balances(&expenses, &participants);

        prop_assert_eq!(first_aggregates, second_aggregates);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(compute_settlements(&first), compute_settlements(&second));
    }

    #[test]
    fn settlements_clear_balances((participants, expenses) in trip_case()) {
        let (_, balances) = compute_balances(&expenses, &participants);
        let settlements = compute_settlements(&balances);

        let parties = balances.creditor_count() + balances.debtor_count();
        prop_assert!(settlements.len() <= parties.saturating_sub(1));

        for settlement in &settlements {
            prop_assert!(settlement.amount.is_positive());
            prop_assert_ne!(&settlement.from, &settlement.to);
            prop_assert!(balances.get(settlement.from.as_str()).unwrap().is_negative());
            prop_assert!(balances.get(settlement.to.as_str()).unwrap().is_positive());
        }

        let mut after = balances.clone();
        after.apply(&settlements);

        let residue = balances.total().cents().abs();
        for (participant, remaining) in after.iter() {
            prop_assert!(
                remaining.cents().abs() <= residue,
                "{} left with {}",
                participant,
                remaining
            );
        }
    }

    #[test]
    fn daily_totals_add_up((participants, expenses) in trip_case()) {
        let aggregates = compute_aggregates(&expenses, &participants);
        let days = daily_breakdown(&expenses);

        let daily_total: Money = days.iter().map(|d| d.total).sum();
        prop_assert_eq!(daily_total, aggregates.total);

        let counted: usize = days.iter().map(|d| d.expenses.len()).sum();
        prop_assert_eq!(counted, expenses.len());
        prop_assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }
}

#[test]
fn settlement_fits_exactly_balanced_trip() {
    let participants = Participant::parse_list("A,B,C");
    let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
    let expenses = vec![Expense::new(
        TripId::new(),
        "A".into(),
        Money::from_cents(30000),
        date,
    )];

    let (_, balances) = compute_balances(&expenses, &participants);
    let settlements = compute_settlements(&balances);

    let lines: Vec<String> = settlements.iter().map(|s| s.to_string()).collect();
    assert_eq!(lines, vec!["B owes A 100.00", "C owes A 100.00"]);

    let mut after = balances.clone();
    after.apply(&settlements);
    assert!(after.is_settled());
}
