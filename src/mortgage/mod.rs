use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest property price the calculator form offers
pub const PRICE_MAX: i64 = 50_000_000;
/// Price slider step in kronor
pub const PRICE_STEP: i64 = 500_000;
/// Down payment slider step in kronor
pub const DOWN_PAYMENT_STEP: i64 = 100_000;
/// Shortest loan term in years
pub const YEARS_MIN: u32 = 1;
/// Longest loan term in years
pub const YEARS_MAX: u32 = 30;
/// Lowest annual rate the form offers, in percent
pub const RATE_MIN: f64 = 1.0;
/// Highest annual rate the form offers, in percent
pub const RATE_MAX: f64 = 20.0;
/// Rate slider step in percentage points
pub const RATE_STEP: f64 = 0.1;

/// Starting values the calculator form shows
pub const DEFAULT_PRICE: i64 = 10_000_000;
pub const DEFAULT_DOWN_PAYMENT: i64 = 2_000_000;
pub const DEFAULT_YEARS: u32 = 15;
pub const DEFAULT_RATE: f64 = 12.0;

/// Rejected calculator input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl MortgageError {
    fn invalid(field: &'static str, reason: &str) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.to_string(),
        }
    }
}

/// Loan parameters as the calculator form captures them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    /// Property price in whole kronor
    pub price: i64,
    /// Cash paid up front in whole kronor
    pub down_payment: i64,
    /// Loan term in years
    pub years: u32,
    /// Nominal annual interest rate in percent (12 means 12%)
    pub annual_rate: f64,
}

impl Default for MortgageTerms {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE,
            down_payment: DEFAULT_DOWN_PAYMENT,
            years: DEFAULT_YEARS,
            annual_rate: DEFAULT_RATE,
        }
    }
}

/// Repayment figures for one set of terms, each rounded to whole kronor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageQuote {
    /// Amount borrowed: price minus down payment
    pub loan_amount: i64,
    /// Term length in months
    pub months: u32,
    /// Fixed annuity payment per month
    pub monthly_payment: i64,
    /// Sum of all monthly payments over the full term
    pub total_payment: i64,
    /// Interest cost: total payment minus the loan amount
    pub overpayment: i64,
}

impl MortgageTerms {
    /// Compute the fixed-rate annuity plan for these terms.
    ///
    /// The monthly payment uses the standard annuity formula with the rate
    /// converted to a monthly fraction; a zero rate falls back to straight
    /// division of the loan over the term. Rounding happens once, on the
    /// final figures, each independently.
    ///
    /// A down payment above the price is not rejected: the loan amount goes
    /// negative and so do the payments.
    pub fn quote(&self) -> Result<MortgageQuote, MortgageError> {
        if self.years == 0 {
            return Err(MortgageError::invalid("years", "term must be at least 1 year"));
        }
        if self.price < 0 {
            return Err(MortgageError::invalid("price", "must not be negative"));
        }
        if self.down_payment < 0 {
            return Err(MortgageError::invalid("down_payment", "must not be negative"));
        }

        let loan_amount = self.price - self.down_payment;
        let months = self.years * 12;
        let monthly_rate = self.annual_rate / 100.0 / 12.0;

        let loan = loan_amount as f64;
        let n = months as f64;
        let monthly = if monthly_rate > 0.0 {
            let growth = (1.0 + monthly_rate).powf(n);
            loan * (monthly_rate * growth) / (growth - 1.0)
        } else {
            loan / n
        };
        let total = monthly * n;
        let overpayment = total - loan;

        Ok(MortgageQuote {
            loan_amount,
            months,
            monthly_payment: monthly.round() as i64,
            total_payment: total.round() as i64,
            overpayment: overpayment.round() as i64,
        })
    }
}
