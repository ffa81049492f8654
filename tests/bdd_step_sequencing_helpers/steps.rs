//! Given and When step definitions for step sequencing BDD tests.

use gegeben::{Fluent, GegebenConfig, Language, step};
use rstest_bdd_macros::{given, when};

use super::state::{Konto, StepResult, StepSequencingState};

#[given("a new account declaration")]
fn new_declaration(step_sequencing_state: &StepSequencingState) {
    step_sequencing_state
        .fluent
        .set(Fluent::new(Konto::default()));
}

#[given("a new account declaration in English")]
fn new_english_declaration(step_sequencing_state: &StepSequencingState) {
    let config = GegebenConfig {
        language: Language::English,
        ..GegebenConfig::default()
    };
    step_sequencing_state
        .fluent
        .set(Fluent::with_config(Konto::default(), &config));
}

#[given("the next step is titled {template}")]
fn next_step_titled(step_sequencing_state: &StepSequencingState, template: String) {
    step_sequencing_state.pending_title.set(template);
}

#[when("a Given step deposits {betrag}")]
fn given_deposits(step_sequencing_state: &StepSequencingState, betrag: i64) -> StepResult<()> {
    let template = step_sequencing_state.pending_title.take();
    step_sequencing_state.declare(|fluent| {
        let call = step!(Konto::einzahlen(betrag = betrag));
        match template {
            Some(title) => fluent.given_titled(title, call),
            None => fluent.given(call),
        }
    })
}

#[when("a When step deposits {betrag}")]
fn when_deposits(step_sequencing_state: &StepSequencingState, betrag: i64) -> StepResult<()> {
    let template = step_sequencing_state.pending_title.take();
    step_sequencing_state.declare(|fluent| {
        let call = step!(Konto::einzahlen(betrag = betrag));
        match template {
            Some(title) => fluent.when_titled(title, call),
            None => fluent.when(call),
        }
    })
}

#[when("a When step withdraws {betrag}")]
fn when_withdraws(step_sequencing_state: &StepSequencingState, betrag: i64) -> StepResult<()> {
    step_sequencing_state.declare(|fluent| fluent.when(step!(Konto::abheben(betrag = betrag))))
}

#[when("a Then step expects a balance of {erwartet}")]
fn then_expects_balance(
    step_sequencing_state: &StepSequencingState,
    erwartet: i64,
) -> StepResult<()> {
    step_sequencing_state
        .declare(|fluent| fluent.then(step!(Konto::saldo_ist(erwartet = erwartet))))
}

#[when("{count} And steps deposit {betrag} each")]
fn and_steps_deposit(
    step_sequencing_state: &StepSequencingState,
    count: usize,
    betrag: i64,
) -> StepResult<()> {
    step_sequencing_state.declare(|fluent| {
        (0..count).fold(fluent, |chain, _| {
            chain.and(step!(Konto::einzahlen(betrag = betrag)))
        })
    })
}
