use serde::{Deserialize, Serialize};

pub mod amortization;
pub mod chart;
pub mod config;
pub mod currency;
pub mod storage;
pub mod validation;

pub use amortization::calculate;
pub use chart::{doughnut_config, ChartSlice, DoughnutChartConfig, LegendPosition, Rgba};
pub use config::SimulatorConfig;
pub use currency::{CurrencyFormat, CurrencyFormatter};
pub use storage::{KeyValueStore, MemoryStore, PersistenceError, SnapshotStore, StorageError};
pub use validation::{is_form_complete, parse_decimal_field, FieldKind, RequiredField};

/// Loan parameters read from the simulator form at submit time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Borrowed capital
    pub principal: f64,
    /// Yearly nominal rate as a percentage (5.0 means 5%)
    pub annual_rate_percent: f64,
    /// Loan duration in years
    pub years: f64,
}

impl LoanInput {
    /// Build an input from the raw form values.
    ///
    /// Unparseable fields become `NaN` and flow through the calculation; the
    /// currency formatter turns them into its placeholder on display.
    pub fn from_fields(amount: &str, rate: &str, duration: &str) -> Self {
        Self {
            principal: parse_decimal_field(amount),
            annual_rate_percent: parse_decimal_field(rate),
            years: parse_decimal_field(duration),
        }
    }

    /// Monthly interest rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }
}

/// Outcome of one amortization calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_repayment: f64,
    pub schedule: Vec<PaymentRow>,
}

/// One period of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// 1-based period number
    pub period: u32,
    pub payment: f64,
    pub interest_portion: f64,
    pub principal_portion: f64,
    /// Balance left after this period; exactly zero on the last row
    pub remaining_balance: f64,
}

/// Display strings for one schedule row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPaymentRow {
    pub period: u32,
    pub payment: String,
    pub interest_portion: String,
    pub principal_portion: String,
    pub remaining_balance: String,
}

/// Display strings for the summary panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: String,
    pub total_interest: String,
    pub total_repayment: String,
}

/// Persisted state of the simulator form.
///
/// Field values are stored exactly as typed so a reload restores the form
/// verbatim; results are always recomputed from them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    pub amount: String,
    pub rate: String,
    pub duration: String,
    pub results_visible: bool,
}

impl SimulationSnapshot {
    pub fn to_input(&self) -> LoanInput {
        LoanInput::from_fields(&self.amount, &self.rate, &self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_uses_storage_field_names() {
        let snapshot = SimulationSnapshot {
            amount: "10000".to_string(),
            rate: "5".to_string(),
            duration: "1".to_string(),
            results_visible: true,
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "amount": "10000",
                "rate": "5",
                "duration": "1",
                "resultsVisible": true
            })
        );
    }

    #[test]
    fn test_snapshot_reads_script_written_payload() {
        let raw = r#"{"amount":"250000","rate":"3.2","duration":"25","resultsVisible":false}"#;
        let snapshot: SimulationSnapshot = serde_json::from_str(raw).unwrap();

        assert_eq!(snapshot.amount, "250000");
        assert!(!snapshot.results_visible);
        assert_eq!(snapshot.to_input().years, 25.0);
    }

    #[test]
    fn test_loan_input_from_fields() {
        let input = LoanInput::from_fields("10000", "5", "1");
        assert_eq!(input.principal, 10000.0);
        assert_eq!(input.annual_rate_percent, 5.0);
        assert_eq!(input.years, 1.0);
        assert!((input.monthly_rate() - 0.0041666666).abs() < 1e-9);
    }

    #[test]
    fn test_loan_input_with_garbage_is_nan() {
        let input = LoanInput::from_fields("", "abc", "10");
        assert!(input.principal.is_nan());
        assert!(input.annual_rate_percent.is_nan());
        assert_eq!(input.years, 10.0);
    }
}
