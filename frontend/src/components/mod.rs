pub mod amortization_table;
pub mod contact_form;
pub mod header;
pub mod loan_chart;
pub mod loan_form;
pub mod loan_request_form;
pub mod results_panel;
pub mod simulator_page;

pub use contact_form::ContactForm;
pub use header::{Header, Page};
pub use loan_request_form::LoanRequestForm;
pub use simulator_page::SimulatorPage;
