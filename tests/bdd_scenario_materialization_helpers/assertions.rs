//! Then steps for scenario materialisation.

use gegeben::StepExecutionResult;
use rstest_bdd_macros::then;

use super::StepResult;
use super::state::{MaterializationState, nth_scenario};

#[then("{count} scenarios are produced")]
fn then_scenarios_produced(
    materialization_state: &MaterializationState,
    count: usize,
) -> StepResult<()> {
    materialization_state.with_scenarios(|scenarios| {
        if scenarios.len() == count {
            Ok(())
        } else {
            Err(format!("expected {count} scenarios, got {}", scenarios.len()))
        }
    })
}

#[then("all scenarios share one id")]
fn then_scenarios_share_id(materialization_state: &MaterializationState) -> StepResult<()> {
    materialization_state.with_scenarios(|scenarios| {
        let first = scenarios
            .first()
            .map(|scenario| scenario.id().to_owned())
            .ok_or_else(|| String::from("no scenarios produced"))?;
        if scenarios.iter().all(|scenario| scenario.id() == first) {
            Ok(())
        } else {
            Err(String::from("scenario ids differ"))
        }
    })
}

#[then("scenario {number} has the step titles {titles}")]
fn then_scenario_step_titles(
    materialization_state: &MaterializationState,
    number: usize,
    titles: String,
) -> StepResult<()> {
    let expected: Vec<String> = titles.split('|').map(|t| t.trim().to_owned()).collect();
    materialization_state.with_scenarios(|scenarios| {
        let actual = nth_scenario(scenarios, number)?.step_titles();
        if actual == expected {
            Ok(())
        } else {
            Err(format!("expected titles {expected:?}, got {actual:?}"))
        }
    })
}

#[then("scenario {number} has the result {result}")]
fn then_scenario_result(
    materialization_state: &MaterializationState,
    number: usize,
    result: String,
) -> StepResult<()> {
    let expected = match result.as_str() {
        "NotExecuted" => StepExecutionResult::NotExecuted,
        "Passed" => StepExecutionResult::Passed,
        "Inconclusive" => StepExecutionResult::Inconclusive,
        "NotImplemented" => StepExecutionResult::NotImplemented,
        "Failed" => StepExecutionResult::Failed,
        other => return Err(format!("unknown result '{other}'")),
    };
    materialization_state.with_scenarios(|scenarios| {
        let actual = nth_scenario(scenarios, number)?.result();
        if actual == expected {
            Ok(())
        } else {
            Err(format!("expected {expected:?}, got {actual:?}"))
        }
    })
}

#[then("scenario {number} has no example row")]
fn then_scenario_has_no_example(
    materialization_state: &MaterializationState,
    number: usize,
) -> StepResult<()> {
    materialization_state.with_scenarios(|scenarios| {
        match nth_scenario(scenarios, number)?.example() {
            None => Ok(()),
            Some(row) => Err(format!("expected no example row, got row {}", row.index())),
        }
    })
}

#[then("the scenario title is {title}")]
fn then_scenario_title(
    materialization_state: &MaterializationState,
    title: String,
) -> StepResult<()> {
    materialization_state.with_scenarios(|scenarios| {
        let actual = scenarios.first().and_then(|scenario| scenario.title());
        if actual == Some(title.as_str()) {
            Ok(())
        } else {
            Err(format!("expected title '{title}', got {actual:?}"))
        }
    })
}
