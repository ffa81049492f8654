//! Given/when steps for scenario materialisation.

use gegeben::{ExampleTable, Fluent, StepExecutionResult, step};
use rstest_bdd_macros::{given, when};

use super::StepResult;
use super::state::{Konto, MaterializationState, nth_scenario};

#[given("a deposit declaration")]
fn given_deposit_declaration(materialization_state: &MaterializationState) {
    let fluent = Fluent::new(Konto::default())
        .when(step!(Konto::einzahlen(betrag = 0)))
        .then(step!(Konto::saldo_ist(betrag = 0)));
    materialization_state.fluent.set(fluent);
}

#[given("a deposit declaration with interest")]
fn given_deposit_declaration_with_interest(materialization_state: &MaterializationState) {
    let fluent = Fluent::new(Konto::default())
        .given(step!(Konto::einzahlen(betrag = 100)))
        .when(step!(async Konto::zinsen_gutschreiben(betrag = 5)))
        .then(step!(Konto::saldo_ist(betrag = 105)));
    materialization_state.fluent.set(fluent);
}

#[given("the example column {header} with rows {values}")]
fn given_example_column(
    materialization_state: &MaterializationState,
    header: String,
    values: String,
) -> StepResult<()> {
    let table = values
        .split(',')
        .map(str::trim)
        .fold(ExampleTable::new([header.as_str()]), |table, value| {
            table.and_then(|built| built.with_row([value]))
        })
        .map_err(|e| e.to_string())?;
    materialization_state.declare(|fluent| fluent.with_examples(table))
}

#[given("the test identity {identity}")]
fn given_test_identity(
    materialization_state: &MaterializationState,
    identity: String,
) -> StepResult<()> {
    materialization_state.declare(|fluent| fluent.with_test_identity(identity))
}

#[when("the declaration is scanned")]
fn when_declaration_scanned(materialization_state: &MaterializationState) -> StepResult<()> {
    let fluent = materialization_state
        .fluent
        .take()
        .ok_or_else(|| String::from("declaration should be started"))?;
    materialization_state.scenarios.set(fluent.scan());
    Ok(())
}

#[when("a failure is recorded on every step of scenario {number}")]
fn when_failure_recorded(
    materialization_state: &MaterializationState,
    number: usize,
) -> StepResult<()> {
    materialization_state.with_scenarios(|scenarios| {
        let scenario = nth_scenario(scenarios, number)?;
        for step in scenario.steps_mut() {
            step.record_result(StepExecutionResult::Failed);
        }
        Ok(())
    })
}

#[when("every step of scenario {number} is run")]
fn when_every_step_is_run(
    materialization_state: &MaterializationState,
    number: usize,
) -> StepResult<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to start runtime: {e}"))?;
    materialization_state.with_scenarios(|scenarios| {
        let scenario = nth_scenario(scenarios, number)?;
        let object = std::sync::Arc::clone(scenario.test_object());
        for step in scenario.steps_mut() {
            let outcome = {
                let mut guard = object
                    .lock()
                    .map_err(|_| String::from("test object lock poisoned"))?;
                runtime.block_on(step.invoke(&mut guard).into_future())
            };
            let result = match outcome {
                Ok(()) => StepExecutionResult::Passed,
                Err(_) => StepExecutionResult::Failed,
            };
            step.record_result(result);
        }
        Ok(())
    })
}
