//! Scenario state for materialisation behavioural tests.

use gegeben::{Fluent, Scenario};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use super::StepResult;

/// Account the declarations operate on.
#[derive(Debug, Default)]
pub(crate) struct Konto {
    saldo: i64,
}

impl Konto {
    /// Add `betrag` to the balance.
    pub(crate) fn einzahlen(&mut self, betrag: i64) {
        self.saldo += betrag;
    }

    /// Fail unless the balance equals `betrag`.
    pub(crate) fn saldo_ist(&mut self, betrag: i64) -> Result<(), String> {
        if self.saldo == betrag {
            Ok(())
        } else {
            Err(format!("Saldo ist {}, erwartet {betrag}", self.saldo))
        }
    }

    /// Credit a fixed interest payment after yielding to the runtime.
    pub(crate) async fn zinsen_gutschreiben(&mut self, betrag: i64) -> Result<(), String> {
        tokio::task::yield_now().await;
        if betrag < 0 {
            return Err(String::from("Zinsen dürfen nicht negativ sein"));
        }
        self.saldo += betrag;
        Ok(())
    }
}

#[derive(Default, ScenarioState)]
pub(crate) struct MaterializationState {
    pub(crate) fluent: Slot<Fluent<Konto>>,
    pub(crate) scenarios: Slot<Vec<Scenario<Konto>>>,
}

impl MaterializationState {
    /// Apply `declare` to the declaration under construction.
    pub(crate) fn declare(
        &self,
        declare: impl FnOnce(Fluent<Konto>) -> Fluent<Konto>,
    ) -> StepResult<()> {
        let fluent = self
            .fluent
            .take()
            .ok_or_else(|| String::from("declaration should be started"))?;
        self.fluent.set(declare(fluent));
        Ok(())
    }

    /// Run `visit` against the materialised scenarios.
    pub(crate) fn with_scenarios<R>(
        &self,
        visit: impl FnOnce(&mut Vec<Scenario<Konto>>) -> StepResult<R>,
    ) -> StepResult<R> {
        let mut scenarios = self
            .scenarios
            .take()
            .ok_or_else(|| String::from("declaration should be scanned"))?;
        let outcome = visit(&mut scenarios);
        self.scenarios.set(scenarios);
        outcome
    }
}

/// Look up scenario `number`, counted from one as in the feature files.
pub(crate) fn nth_scenario(
    scenarios: &mut [Scenario<Konto>],
    number: usize,
) -> StepResult<&mut Scenario<Konto>> {
    let count = scenarios.len();
    number
        .checked_sub(1)
        .and_then(|index| scenarios.get_mut(index))
        .ok_or_else(|| format!("scenario {number} requested but only {count} produced"))
}

#[fixture]
pub(crate) fn materialization_state() -> MaterializationState {
    MaterializationState::default()
}
