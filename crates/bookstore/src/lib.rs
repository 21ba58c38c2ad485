#![deny(warnings)]

//! Bookstore wholesale cost and profit model.
//!
//! A bookstore buys copies at a fixed 40% discount off the cover price and
//! pays tiered shipping: a flat rate for the first copy plus a lower rate for
//! each additional copy. Revenue assumes every copy sells at cover price.

use calc_core::{BookstoreSettings, ValidationError};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Bookstore discount off the cover price (0.40 = 40%).
pub const BOOKSTORE_DISCOUNT: Decimal = Decimal::from_parts(40, 0, 0, false, 2);
/// Shipping charged for the first copy in an order.
pub const FIRST_COPY_SHIPPING: Decimal = Decimal::from_parts(300, 0, 0, false, 2);
/// Shipping charged for every copy after the first.
pub const ADDITIONAL_COPY_SHIPPING: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Inputs for one bookstore calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BookstoreInput {
    pub cover_price: Decimal,
    pub number_of_copies: i64,
}

impl BookstoreInput {
    pub fn new(cover_price: Decimal, number_of_copies: i64) -> Self {
        Self {
            cover_price,
            number_of_copies,
        }
    }

    /// Run the calculation for these inputs.
    pub fn compute(&self) -> Result<BookstoreResult, ValidationError> {
        compute(self.cover_price, self.number_of_copies)
    }
}

impl From<&BookstoreSettings> for BookstoreInput {
    fn from(s: &BookstoreSettings) -> Self {
        Self::new(s.cover_price, s.number_of_copies)
    }
}

/// Full cost and profit breakdown for an order.
///
/// Built only by [`compute`], so the arithmetic relations between fields
/// always hold. Profit may be negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookstoreResult {
    number_of_copies: u64,
    cover_price: Decimal,
    discounted_price: Decimal,
    books_cost: Decimal,
    shipping_cost: Decimal,
    total_wholesale_cost: Decimal,
    total_revenue: Decimal,
    profit: Decimal,
}

impl BookstoreResult {
    pub fn number_of_copies(&self) -> u64 {
        self.number_of_copies
    }
    pub fn cover_price(&self) -> Decimal {
        self.cover_price
    }
    pub fn discounted_price(&self) -> Decimal {
        self.discounted_price
    }
    pub fn books_cost(&self) -> Decimal {
        self.books_cost
    }
    pub fn shipping_cost(&self) -> Decimal {
        self.shipping_cost
    }
    /// Books plus shipping: what the bookstore pays.
    pub fn total_wholesale_cost(&self) -> Decimal {
        self.total_wholesale_cost
    }
    pub fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }
    pub fn profit(&self) -> Decimal {
        self.profit
    }
}

/// Cover price after the bookstore discount.
///
/// Example:
/// let p = discounted_price(Decimal::new(1000, 2)); // 10.00
/// assert_eq!(p, Decimal::new(600, 2));
pub fn discounted_price(cover_price: Decimal) -> Decimal {
    cover_price * (Decimal::ONE - BOOKSTORE_DISCOUNT)
}

/// Cost of all copies at the discounted price.
pub fn books_cost(discounted_price: Decimal, copies: u64) -> Result<Decimal, ValidationError> {
    discounted_price
        .checked_mul(Decimal::from(copies))
        .ok_or(ValidationError::Overflow)
}

/// Tiered shipping: first copy at the full rate, the rest at the additional rate.
///
/// `copies` is expected to be at least one; zero is treated like a single copy.
pub fn shipping_cost(copies: u64) -> Decimal {
    if copies <= 1 {
        return FIRST_COPY_SHIPPING;
    }
    FIRST_COPY_SHIPPING + ADDITIONAL_COPY_SHIPPING * Decimal::from(copies - 1)
}

/// Revenue if every copy sells at cover price.
pub fn total_revenue(cover_price: Decimal, copies: u64) -> Result<Decimal, ValidationError> {
    cover_price
        .checked_mul(Decimal::from(copies))
        .ok_or(ValidationError::Overflow)
}

/// Profit before operational costs (rent, salaries, ...). Not clamped at zero.
pub fn profit(revenue: Decimal, wholesale_cost: Decimal) -> Result<Decimal, ValidationError> {
    revenue
        .checked_sub(wholesale_cost)
        .ok_or(ValidationError::Overflow)
}

/// Validate inputs and compute the complete cost breakdown.
///
/// Price is checked before the copy count; nothing is computed when either
/// check fails.
pub fn compute(
    cover_price: Decimal,
    number_of_copies: i64,
) -> Result<BookstoreResult, ValidationError> {
    if cover_price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice);
    }
    if number_of_copies <= 0 {
        return Err(ValidationError::NonPositiveCopies);
    }
    let copies = u64::try_from(number_of_copies).map_err(|_| ValidationError::NonPositiveCopies)?;

    let discounted = discounted_price(cover_price);
    let books = books_cost(discounted, copies)?;
    let shipping = shipping_cost(copies);
    let wholesale = books
        .checked_add(shipping)
        .ok_or(ValidationError::Overflow)?;
    let revenue = total_revenue(cover_price, copies)?;
    let profit = profit(revenue, wholesale)?;

    debug!(%cover_price, copies, %wholesale, %profit, "bookstore costs computed");
    Ok(BookstoreResult {
        number_of_copies: copies,
        cover_price,
        discounted_price: discounted,
        books_cost: books,
        shipping_cost: shipping,
        total_wholesale_cost: wholesale,
        total_revenue: revenue,
        profit,
    })
}
