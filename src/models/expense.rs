//! Expense model
//!
//! Expenses enter the system as loosely-typed [`ExpenseInput`] values (strings
//! straight from the command line) and are validated against their trip into
//! strongly-typed [`Expense`] records before anything aggregates them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, TripId};
use super::money::{Money, MoneyParseError};
use super::participant::Participant;
use super::trip::Trip;

/// Category bucket for expenses recorded without one
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Largest amount a single expense may carry (one billion units)
///
/// Keeps trip totals far inside `i64` cents for any realistic expense count.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// A single shared expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Trip this expense belongs to
    pub trip_id: TripId,

    /// Who paid
    pub paid_by: Participant,

    /// Amount paid (never negative)
    pub amount: Money,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Category, `None` counts as "Uncategorized"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Participants sharing the cost
    ///
    /// `None` means every trip participant. An explicit empty list is kept
    /// as-is and the expense then carries no fair shares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Participant>>,

    /// Day the expense happened
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense split among everyone
    pub fn new(trip_id: TripId, paid_by: Participant, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            trip_id,
            paid_by,
            amount,
            description: String::new(),
            category: None,
            included: None,
            date,
            created_at: Utc::now(),
        }
    }

    /// Builder-style setter for the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder-style setter for the included participants
    pub fn with_included(mut self, included: Vec<Participant>) -> Self {
        self.included = Some(included);
        self
    }

    /// Category name used for aggregation
    pub fn category_name(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => category,
            _ => UNCATEGORIZED,
        }
    }

    /// Participants this expense is divided among
    pub fn split_among<'a>(&'a self, everyone: &'a [Participant]) -> &'a [Participant] {
        self.included.as_deref().unwrap_or(everyone)
    }

    /// Validate a stored record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.amount > MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        if self.paid_by.is_blank() {
            return Err(ExpenseValidationError::MissingPayer);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} paid {} [{}]",
            self.date.format("%Y-%m-%d"),
            self.paid_by,
            self.amount,
            self.category_name()
        )
    }
}

/// Who shares an expense being entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SplitSelection {
    /// Every trip participant
    #[default]
    Everyone,
    /// Every trip participant except these
    Exclude(Vec<Participant>),
    /// Only these participants
    Only(Vec<Participant>),
}

/// Unvalidated expense data as supplied by a user
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub paid_by: String,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub split: SplitSelection,
    pub date: Option<NaiveDate>,
}

impl ExpenseInput {
    /// Validate this input against a trip and build the expense record
    ///
    /// The included list is stored explicitly, in canonical trip order, so
    /// later changes to the trip do not alter past splits.
    pub fn validate(self, trip: &Trip, today: NaiveDate) -> Result<Expense, ExpenseValidationError> {
        let amount = parse_amount(self.amount.as_deref())?;

        let paid_by = Participant::new(&self.paid_by);
        if paid_by.is_blank() {
            return Err(ExpenseValidationError::MissingPayer);
        }
        if !trip.has_participant(paid_by.as_str()) {
            return Err(ExpenseValidationError::UnknownPayer(paid_by.to_string()));
        }

        let included = resolve_split(&self.split, trip)?;

        let mut expense = Expense::new(trip.id, paid_by, amount, self.date.unwrap_or(today))
            .with_included(included);
        expense.description = self.description.unwrap_or_default().trim().to_string();
        expense.category = normalize_category(self.category);

        Ok(expense)
    }
}

/// Requested modifications to an existing expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    /// Apply the changes to an expense, validating the new amount
    pub fn apply(self, expense: &mut Expense) -> Result<(), ExpenseValidationError> {
        if let Some(amount) = self.amount {
            expense.amount = parse_amount(Some(&amount))?;
        }
        if let Some(description) = self.description {
            expense.description = description.trim().to_string();
        }
        if self.category.is_some() {
            expense.category = normalize_category(self.category);
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        Ok(())
    }
}

fn parse_amount(raw: Option<&str>) -> Result<Money, ExpenseValidationError> {
    let raw = raw.ok_or(ExpenseValidationError::MissingAmount)?;
    let amount = Money::parse(raw).map_err(|e| match e {
        MoneyParseError::Empty => ExpenseValidationError::MissingAmount,
        MoneyParseError::InvalidFormat(_) => ExpenseValidationError::InvalidAmount(raw.to_string()),
    })?;
    if !amount.is_positive() {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ExpenseValidationError::AmountTooLarge(amount));
    }
    Ok(amount)
}

fn normalize_category(category: Option<String>) -> Option<String> {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

fn resolve_split(
    split: &SplitSelection,
    trip: &Trip,
) -> Result<Vec<Participant>, ExpenseValidationError> {
    let check_known = |names: &[Participant]| {
        names
            .iter()
            .find(|p| !trip.has_participant(p.as_str()))
            .map_or(Ok(()), |p| {
                Err(ExpenseValidationError::UnknownParticipant(p.to_string()))
            })
    };

    let included: Vec<Participant> = match split {
        SplitSelection::Everyone => trip.participants.clone(),
        SplitSelection::Exclude(excluded) => {
            check_known(excluded)?;
            trip.participants
                .iter()
                .filter(|p| !excluded.contains(p))
                .cloned()
                .collect()
        }
        SplitSelection::Only(only) => {
            check_known(only)?;
            trip.participants
                .iter()
                .filter(|p| only.contains(p))
                .cloned()
                .collect()
        }
    };

    if included.is_empty() {
        return Err(ExpenseValidationError::NoneIncluded);
    }
    Ok(included)
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingAmount,
    InvalidAmount(String),
    NonPositiveAmount(Money),
    NegativeAmount(Money),
    AmountTooLarge(Money),
    MissingPayer,
    UnknownPayer(String),
    UnknownParticipant(String),
    NoneIncluded,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAmount => write!(f, "Expense amount is missing"),
            Self::InvalidAmount(raw) => write!(f, "Expense amount is not numeric: '{}'", raw),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative, got {}", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Expense amount {} is larger than the allowed maximum of {}",
                amount, MAX_AMOUNT
            ),
            Self::MissingPayer => write!(f, "Expense must name who paid"),
            Self::UnknownPayer(name) => write!(f, "'{}' is not a participant of this trip", name),
            Self::UnknownParticipant(name) => {
                write!(f, "Cannot split with '{}': not a participant of this trip", name)
            }
            Self::NoneIncluded => write!(f, "At least one person must be included in the split"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
