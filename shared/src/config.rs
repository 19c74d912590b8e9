use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyFormat, CurrencyFormatter};

/// Storage key the simulator form is saved under
pub const DEFAULT_STORAGE_KEY: &str = "loanSimulationData";

/// Settings for the loan simulator page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    pub storage_key: String,
    /// Wait after rendering results before the form is saved
    pub persist_delay_ms: u32,
    /// Wait before adding the `visible` class so CSS transitions run
    pub reveal_delay_ms: u32,
    pub currency: CurrencyFormat,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_delay_ms: 100,
            reveal_delay_ms: 10,
            currency: CurrencyFormat::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(self.currency.clone())
    }
}
