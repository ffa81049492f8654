//! Then step definitions for step sequencing BDD tests.

use rstest_bdd_macros::then;

use super::state::{StepResult, StepSequencingState};

fn split_list(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}

#[then("the step categories are {categories}")]
fn step_categories_are(
    step_sequencing_state: &StepSequencingState,
    categories: String,
) -> StepResult<()> {
    let actual: Vec<String> = step_sequencing_state.inspect(|fluent| {
        fluent
            .steps()
            .iter()
            .map(|step| format!("{:?}", step.execution_order()))
            .collect()
    })?;
    let expected = split_list(&categories, ',');
    if actual == expected {
        Ok(())
    } else {
        Err(format!("expected categories {expected:?}, got {actual:?}"))
    }
}

#[then("the assertion flags are {flags}")]
fn assertion_flags_are(step_sequencing_state: &StepSequencingState, flags: String) -> StepResult<()> {
    let actual: Vec<String> = step_sequencing_state.inspect(|fluent| {
        fluent
            .steps()
            .iter()
            .map(|step| step.asserts().to_string())
            .collect()
    })?;
    let expected = split_list(&flags, ',');
    if actual == expected {
        Ok(())
    } else {
        Err(format!("expected assertion flags {expected:?}, got {actual:?}"))
    }
}

#[then("no step asserts")]
fn no_step_asserts(step_sequencing_state: &StepSequencingState) -> StepResult<()> {
    let asserting = step_sequencing_state
        .inspect(|fluent| fluent.steps().iter().filter(|step| step.asserts()).count())?;
    if asserting == 0 {
        Ok(())
    } else {
        Err(format!("expected no asserting steps, got {asserting}"))
    }
}

#[then("the step titles are {titles}")]
fn step_titles_are(step_sequencing_state: &StepSequencingState, titles: String) -> StepResult<()> {
    let actual: Vec<String> = step_sequencing_state.inspect(|fluent| {
        fluent
            .steps()
            .iter()
            .map(|step| step.title().to_owned())
            .collect()
    })?;
    let expected = split_list(&titles, '|');
    if actual == expected {
        Ok(())
    } else {
        Err(format!("expected titles {expected:?}, got {actual:?}"))
    }
}
