#![deny(warnings)]

//! Greedy breakdown of a whole-dollar amount into US bills.
//!
//! Denominations are taken largest first. For the fixed set
//! {100, 50, 20, 10, 5, 1} this yields the fewest bills; no claim is made for
//! other sets.

use calc_core::{BillSettings, ValidationError};
use serde::Serialize;
use tracing::debug;

/// Denominations consumed by the greedy pass, descending. Ones take the rest.
pub const DENOMINATIONS: [u64; 5] = [100, 50, 20, 10, 5];

/// Bill counts per denomination. Zero counts are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BillBreakdown {
    pub hundreds: u64,
    pub fifties: u64,
    pub twenties: u64,
    pub tens: u64,
    pub fives: u64,
    pub ones: u64,
}

impl BillBreakdown {
    /// `(denomination, count)` for all six bills, largest first, zeros included.
    pub fn entries(&self) -> [(u64, u64); 6] {
        [
            (100, self.hundreds),
            (50, self.fifties),
            (20, self.twenties),
            (10, self.tens),
            (5, self.fives),
            (1, self.ones),
        ]
    }

    /// Dollar value of the bills.
    pub fn total(&self) -> u64 {
        self.entries().iter().map(|(d, n)| d * n).sum()
    }

    /// Number of bills.
    pub fn bill_count(&self) -> u64 {
        self.entries().iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bill_count() == 0
    }
}

/// Result of a successful breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BillOutcome {
    /// Amount was $0: no bills needed.
    ZeroAmount,
    /// Non-zero amount with its breakdown.
    Bills(BillBreakdown),
}

impl BillOutcome {
    /// The breakdown, all zeros for [`BillOutcome::ZeroAmount`].
    pub fn breakdown(&self) -> BillBreakdown {
        match self {
            BillOutcome::ZeroAmount => BillBreakdown::default(),
            BillOutcome::Bills(b) => *b,
        }
    }

    /// Dollar amount this outcome breaks down.
    pub fn amount(&self) -> u64 {
        self.breakdown().total()
    }
}

/// Bills of `denomination` that fit in `remaining`, and what is left over.
pub fn take_bills(remaining: u64, denomination: u64) -> (u64, u64) {
    (remaining / denomination, remaining % denomination)
}

/// Greedy pass over [`DENOMINATIONS`]; the leftover becomes ones.
pub fn break_down(amount: u64) -> BillBreakdown {
    let (ones, [hundreds, fifties, twenties, tens, fives]) = DENOMINATIONS.iter().enumerate().fold(
        (amount, [0u64; 5]),
        |(remaining, mut counts), (i, &denom)| {
            let (count, rest) = take_bills(remaining, denom);
            counts[i] = count;
            (rest, counts)
        },
    );
    BillBreakdown {
        hundreds,
        fifties,
        twenties,
        tens,
        fives,
        ones,
    }
}

/// Validate `amount` and break it into bills.
pub fn compute(amount: i64) -> Result<BillOutcome, ValidationError> {
    let amount = u64::try_from(amount).map_err(|_| ValidationError::NegativeAmount)?;
    if amount == 0 {
        debug!("zero amount, no bills needed");
        return Ok(BillOutcome::ZeroAmount);
    }
    let breakdown = break_down(amount);
    debug!(amount, bills = breakdown.bill_count(), "bill breakdown computed");
    Ok(BillOutcome::Bills(breakdown))
}

/// Run the calculation for configured settings.
pub fn compute_settings(settings: &BillSettings) -> Result<BillOutcome, ValidationError> {
    compute(settings.dollar_amount)
}
