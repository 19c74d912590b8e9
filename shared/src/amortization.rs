//! Constant-annuity loan amortization.
//!
//! The monthly payment follows the standard annuity formula
//! `PMT = P * [i(1 + i)^n] / [(1 + i)^n - 1]` and the schedule splits each
//! payment into its interest and principal parts period by period.

use crate::currency::CurrencyFormatter;
use crate::{FormattedPaymentRow, LoanInput, LoanResult, LoanSummary, PaymentRow};

/// Longest schedule that gets itemized. Longer loans still get their
/// payment and totals, with no rows.
pub const MAX_SCHEDULE_PERIODS: u32 = u16::MAX as u32;

/// Number of monthly payments for a duration in years.
///
/// May be fractional; the closed-form payment and the totals use it as is.
pub fn payment_count(years: f64) -> f64 {
    years * 12.0
}

/// Rows in the schedule for `number_of_payments`: one per whole period.
///
/// `None` when there is nothing to list or the schedule would exceed
/// [`MAX_SCHEDULE_PERIODS`].
pub fn schedule_periods(number_of_payments: f64) -> Option<u32> {
    if !number_of_payments.is_finite() || number_of_payments < 1.0 {
        return None;
    }

    let whole = number_of_payments.floor();
    if whole > f64::from(MAX_SCHEDULE_PERIODS) {
        return None;
    }
    Some(whole as u32)
}

/// Fixed monthly payment that amortizes `principal` over `number_of_payments`
/// periods at `monthly_rate`.
pub fn monthly_payment(principal: f64, monthly_rate: f64, number_of_payments: f64) -> f64 {
    if monthly_rate == 0.0 {
        return principal / number_of_payments;
    }

    let growth = (1.0 + monthly_rate).powf(number_of_payments);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Compute payment, totals and the full schedule for a loan.
///
/// Never fails: invalid numbers propagate as `NaN`/infinity into the totals
/// and produce an empty schedule.
pub fn calculate(input: &LoanInput) -> LoanResult {
    let monthly_rate = input.monthly_rate();
    let number_of_payments = payment_count(input.years);

    let payment = monthly_payment(input.principal, monthly_rate, number_of_payments);
    let total_repayment = payment * number_of_payments;
    let total_interest = total_repayment - input.principal;

    let schedule = build_schedule(input.principal, monthly_rate, payment, number_of_payments);

    tracing::debug!(
        principal = input.principal,
        annual_rate_percent = input.annual_rate_percent,
        years = input.years,
        monthly_payment = payment,
        periods = schedule.len(),
        "loan calculated"
    );

    LoanResult {
        monthly_payment: payment,
        total_interest,
        total_repayment,
        schedule,
    }
}

fn build_schedule(
    principal: f64,
    monthly_rate: f64,
    payment: f64,
    number_of_payments: f64,
) -> Vec<PaymentRow> {
    let Some(last_period) = schedule_periods(number_of_payments) else {
        if number_of_payments.is_finite() && number_of_payments >= 1.0 {
            tracing::warn!(number_of_payments, "schedule too long to itemize");
        }
        return Vec::new();
    };

    let mut remaining_balance = principal;
    let mut schedule = Vec::with_capacity(last_period as usize);

    for period in 1..=last_period {
        let interest_portion = remaining_balance * monthly_rate;
        let principal_portion = payment - interest_portion;
        remaining_balance -= principal_portion;

        schedule.push(PaymentRow {
            period,
            payment,
            interest_portion,
            principal_portion,
            // Floating point drift never shows on the closing row
            remaining_balance: if period == last_period { 0.0 } else { remaining_balance },
        });
    }

    schedule
}

impl LoanResult {
    /// Summary panel values, formatted like every other amount on the page
    pub fn summary(&self, formatter: &CurrencyFormatter) -> LoanSummary {
        LoanSummary {
            monthly_payment: formatter.format(self.monthly_payment),
            total_interest: formatter.format(self.total_interest),
            total_repayment: formatter.format(self.total_repayment),
        }
    }

    pub fn formatted_schedule(&self, formatter: &CurrencyFormatter) -> Vec<FormattedPaymentRow> {
        self.schedule
            .iter()
            .map(|row| FormattedPaymentRow {
                period: row.period,
                payment: formatter.format(row.payment),
                interest_portion: formatter.format(row.interest_portion),
                principal_portion: formatter.format(row.principal_portion),
                remaining_balance: formatter.format(row.remaining_balance),
            })
            .collect()
    }
}
