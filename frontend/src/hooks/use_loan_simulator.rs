use std::rc::Rc;

use shared::{calculate, LoanInput, LoanResult, SimulationSnapshot, SimulatorConfig};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::persistence::SimulationPersistence;
use crate::services::timing::run_after;

/// Raw simulator inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationFields {
    pub amount: String,
    pub rate: String,
    pub duration: String,
}

impl SimulationFields {
    pub fn to_input(&self) -> LoanInput {
        LoanInput::from_fields(&self.amount, &self.rate, &self.duration)
    }

    pub fn to_snapshot(&self, results_visible: bool) -> SimulationSnapshot {
        SimulationSnapshot {
            amount: self.amount.clone(),
            rate: self.rate.clone(),
            duration: self.duration.clone(),
            results_visible,
        }
    }
}

impl From<&SimulationSnapshot> for SimulationFields {
    fn from(snapshot: &SimulationSnapshot) -> Self {
        Self {
            amount: snapshot.amount.clone(),
            rate: snapshot.rate.clone(),
            duration: snapshot.duration.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorPhase {
    /// Form visible, no results
    Idle,
    /// Results panel, chart and schedule shown
    Resolved,
}

/// Inputs and result of the last completed calculation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub input: LoanInput,
    pub result: LoanResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Rate,
    Duration,
}

pub enum SimulatorAction {
    Edit(Field, String),
    /// Fill the form from a saved snapshot without calculating
    Restore(SimulationSnapshot),
    BeginCalculation,
    Resolve(SimulationFields),
    /// Deferred flip of the results panel's `visible` class
    Reveal,
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorState {
    pub fields: SimulationFields,
    pub phase: SimulatorPhase,
    pub loading: bool,
    pub revealed: bool,
    pub outcome: Option<SimulationOutcome>,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self {
            fields: SimulationFields::default(),
            phase: SimulatorPhase::Idle,
            loading: false,
            revealed: false,
            outcome: None,
        }
    }
}

impl SimulatorState {
    pub fn results_visible(&self) -> bool {
        self.phase == SimulatorPhase::Resolved
    }
}

impl Reducible for SimulatorState {
    type Action = SimulatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            SimulatorAction::Edit(field, value) => match field {
                Field::Amount => next.fields.amount = value,
                Field::Rate => next.fields.rate = value,
                Field::Duration => next.fields.duration = value,
            },
            SimulatorAction::Restore(snapshot) => {
                next.fields = SimulationFields::from(&snapshot);
            }
            SimulatorAction::BeginCalculation => {
                next.loading = true;
            }
            SimulatorAction::Resolve(fields) => {
                let input = fields.to_input();
                let result = calculate(&input);
                next.fields = fields;
                next.outcome = Some(SimulationOutcome { input, result });
                next.phase = SimulatorPhase::Resolved;
                next.loading = false;
            }
            SimulatorAction::Reveal => {
                // A reveal timer may fire after the user already cleared
                if next.phase == SimulatorPhase::Resolved {
                    next.revealed = true;
                }
            }
            SimulatorAction::Clear => {
                next = SimulatorState::default();
            }
        }

        Rc::new(next)
    }
}

pub struct UseLoanSimulatorResult {
    pub state: UseReducerHandle<SimulatorState>,
    pub actions: UseLoanSimulatorActions,
}

#[derive(Clone)]
pub struct UseLoanSimulatorActions {
    pub submit: Callback<()>,
    pub clear: Callback<()>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_rate_input: Callback<InputEvent>,
    pub on_duration_input: Callback<InputEvent>,
}

/// Drives the loan simulator: calculation on submit, deferred reveal and
/// save, clearing, and replaying a saved simulation once on mount.
#[hook]
pub fn use_loan_simulator(config: &SimulatorConfig) -> UseLoanSimulatorResult {
    let state = use_reducer(SimulatorState::default);
    let persistence = use_memo(config.storage_key.clone(), |key| {
        SimulationPersistence::browser(key)
    });

    // Shared by user submits and by the restore on mount
    let resolve = {
        let state = state.clone();
        let persistence = persistence.clone();
        let reveal_delay_ms = config.reveal_delay_ms;
        let persist_delay_ms = config.persist_delay_ms;

        Callback::from(move |fields: SimulationFields| {
            state.dispatch(SimulatorAction::BeginCalculation);
            state.dispatch(SimulatorAction::Resolve(fields.clone()));

            let reveal_state = state.clone();
            run_after(reveal_delay_ms, move || {
                reveal_state.dispatch(SimulatorAction::Reveal);
            });

            // A clear before the timer fires cancels this save
            let persistence = persistence.clone();
            let ticket = persistence.pending_save();
            run_after(persist_delay_ms, move || {
                persistence.save_pending(ticket, &fields.to_snapshot(true));
            });
        })
    };

    let submit = {
        let fields = state.fields.clone();
        let resolve = resolve.clone();
        Callback::from(move |_| resolve.emit(fields.clone()))
    };

    let clear = {
        let state = state.clone();
        let persistence = persistence.clone();
        Callback::from(move |_| {
            persistence.clear();
            state.dispatch(SimulatorAction::Clear);
        })
    };

    let edit = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(SimulatorAction::Edit(field, input.value()));
        })
    };
    let on_amount_input = edit(Field::Amount);
    let on_rate_input = edit(Field::Rate);
    let on_duration_input = edit(Field::Duration);

    // Restore once when the page is ready
    {
        let state = state.clone();
        let persistence = persistence.clone();
        let resolve = resolve.clone();

        use_effect_with((), move |_| {
            if let Some(snapshot) = persistence.load() {
                Logger::debug_with_component("loan-simulator", "Restoring saved simulation");
                state.dispatch(SimulatorAction::Restore(snapshot.clone()));

                if snapshot.results_visible {
                    resolve.emit(SimulationFields::from(&snapshot));
                }
            }
            || ()
        });
    }

    UseLoanSimulatorResult {
        state,
        actions: UseLoanSimulatorActions {
            submit,
            clear,
            on_amount_input,
            on_rate_input,
            on_duration_input,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(amount: &str, rate: &str, duration: &str) -> SimulationFields {
        SimulationFields {
            amount: amount.to_string(),
            rate: rate.to_string(),
            duration: duration.to_string(),
        }
    }

    fn reduce_all(actions: Vec<SimulatorAction>) -> Rc<SimulatorState> {
        actions
            .into_iter()
            .fold(Rc::new(SimulatorState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn test_starts_idle() {
        let state = SimulatorState::default();
        assert_eq!(state.phase, SimulatorPhase::Idle);
        assert!(state.outcome.is_none());
        assert!(!state.results_visible());
    }

    #[test]
    fn test_edit_updates_fields() {
        let state = reduce_all(vec![
            SimulatorAction::Edit(Field::Amount, "10000".to_string()),
            SimulatorAction::Edit(Field::Rate, "5".to_string()),
            SimulatorAction::Edit(Field::Duration, "1".to_string()),
        ]);

        assert_eq!(state.fields, fields("10000", "5", "1"));
        assert_eq!(state.phase, SimulatorPhase::Idle);
    }

    #[test]
    fn test_resolve_computes_and_shows_results() {
        let state = reduce_all(vec![
            SimulatorAction::BeginCalculation,
            SimulatorAction::Resolve(fields("10000", "5", "1")),
        ]);

        assert_eq!(state.phase, SimulatorPhase::Resolved);
        assert!(!state.loading);
        let outcome = state.outcome.as_ref().unwrap();
        assert_eq!(outcome.input.principal, 10000.0);
        assert_eq!(outcome.result.schedule.len(), 12);
    }

    #[test]
    fn test_begin_calculation_shows_loader() {
        let state = reduce_all(vec![SimulatorAction::BeginCalculation]);
        assert!(state.loading);
    }

    #[test]
    fn test_reveal_only_applies_to_resolved() {
        let idle = reduce_all(vec![SimulatorAction::Reveal]);
        assert!(!idle.revealed);

        let resolved = reduce_all(vec![
            SimulatorAction::Resolve(fields("10000", "5", "1")),
            SimulatorAction::Reveal,
        ]);
        assert!(resolved.revealed);
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let state = reduce_all(vec![
            SimulatorAction::Resolve(fields("10000", "5", "1")),
            SimulatorAction::Reveal,
            SimulatorAction::Clear,
        ]);

        assert_eq!(*state, SimulatorState::default());
    }

    #[test]
    fn test_late_reveal_after_clear_is_ignored() {
        let state = reduce_all(vec![
            SimulatorAction::Resolve(fields("10000", "5", "1")),
            SimulatorAction::Clear,
            SimulatorAction::Reveal,
        ]);

        assert!(!state.revealed);
        assert_eq!(state.phase, SimulatorPhase::Idle);
    }

    #[test]
    fn test_restore_fills_form_without_calculating() {
        let snapshot = fields("250000", "3.2", "25").to_snapshot(true);
        let state = reduce_all(vec![SimulatorAction::Restore(snapshot)]);

        assert_eq!(state.fields, fields("250000", "3.2", "25"));
        assert_eq!(state.phase, SimulatorPhase::Idle);
    }

    #[test]
    fn test_restored_replay_matches_fresh_submission() {
        let snapshot = fields("250000", "3.2", "25").to_snapshot(true);

        let restored = reduce_all(vec![
            SimulatorAction::Restore(snapshot.clone()),
            SimulatorAction::Resolve(SimulationFields::from(&snapshot)),
        ]);
        let fresh = reduce_all(vec![
            SimulatorAction::Edit(Field::Amount, "250000".to_string()),
            SimulatorAction::Edit(Field::Rate, "3.2".to_string()),
            SimulatorAction::Edit(Field::Duration, "25".to_string()),
            SimulatorAction::Resolve(fields("250000", "3.2", "25")),
        ]);

        assert_eq!(restored.outcome, fresh.outcome);
    }

    #[test]
    fn test_snapshot_from_fields() {
        let snapshot = fields("1", "2", "3").to_snapshot(true);
        assert_eq!(snapshot.amount, "1");
        assert_eq!(snapshot.rate, "2");
        assert_eq!(snapshot.duration, "3");
        assert!(snapshot.results_visible);
    }
}
