pub mod use_deferred_reveal;
pub mod use_loan_simulator;

pub use use_loan_simulator::use_loan_simulator;
