//! Scenario state for step sequencing BDD tests.

use gegeben::Fluent;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Convenience alias for step outcomes.
pub(crate) type StepResult<T> = Result<T, String>;

/// Test object the declarations are made on.
#[derive(Debug, Default)]
pub(crate) struct Konto {
    saldo: i64,
}

impl Konto {
    /// Add `betrag` to the balance.
    pub(crate) fn einzahlen(&mut self, betrag: i64) {
        self.saldo += betrag;
    }

    /// Take `betrag` from the balance.
    pub(crate) fn abheben(&mut self, betrag: i64) {
        self.saldo -= betrag;
    }

    /// Fail unless the balance equals `erwartet`.
    pub(crate) fn saldo_ist(&mut self, erwartet: i64) -> Result<(), String> {
        if self.saldo == erwartet {
            Ok(())
        } else {
            Err(format!("Saldo ist {}, erwartet {erwartet}", self.saldo))
        }
    }
}

/// State shared across step sequencing scenarios.
#[derive(Default, ScenarioState)]
pub(crate) struct StepSequencingState {
    /// The declaration under construction.
    pub(crate) fluent: Slot<Fluent<Konto>>,
    /// Title template for the next declared step.
    pub(crate) pending_title: Slot<String>,
}

impl StepSequencingState {
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

    /// Read a summary of the declared steps.
    pub(crate) fn inspect<R>(&self, read: impl FnOnce(&Fluent<Konto>) -> R) -> StepResult<R> {
        let fluent = self
            .fluent
            .take()
            .ok_or_else(|| String::from("declaration should be started"))?;
        let summary = read(&fluent);
        self.fluent.set(fluent);
        Ok(summary)
    }
}

/// Fixture providing fresh state for each step sequencing scenario.
#[rstest::fixture]
pub(crate) fn step_sequencing_state() -> StepSequencingState {
    StepSequencingState::default()
}
