//! Declared steps and the builder that sequences them.
//!
//! A [`StepBuilder`] accumulates [`Step`] values in declaration order. Each
//! appended step has its execution-order category and assertion flag resolved
//! against the step before it (see [`resolve_order`]) and carries a
//! [`StepTitle`] that is computed on first read.
//!
//! Step calls are usually built with the [`crate::step!`] macro, which records
//! the method name and parameter names at compile time:
//!
//! ```
//! use gegeben::step::{StepBuilder, StepOptions, ExecutionOrder};
//!
//! #[derive(Default)]
//! struct Account {
//!     balance: i64,
//! }
//!
//! impl Account {
//!     fn deposits(&mut self, amount: i64) {
//!         self.balance += amount;
//!     }
//! }
//!
//! let mut builder = StepBuilder::<Account>::default();
//! builder.add_step(
//!     gegeben::step!(Account::deposits(amount = 50)),
//!     StepOptions::new(ExecutionOrder::Transition).with_role_prefix("Wenn"),
//! );
//! assert_eq!(builder.steps()[0].title(), "Wenn deposits 50");
//! ```

mod action;
mod argument;
mod builder;
mod macros;
mod order;
mod title;

#[cfg(test)]
mod tests;

use std::fmt;

pub use action::{
    ActionDescriptor, IntoStepOutcome, StepAction, StepCall, StepFailure, StepFuture,
    StepInvocation, StepOutcome, TitleOverride,
};
pub use argument::{ArgValue, StepArgument, ToArgValue};
pub use builder::{StepBuilder, StepOptions};
pub use order::{ExecutionOrder, ResolvedOrder, resolve_order};
pub use title::{StepTitle, TitleEnvironment, append_prefix, format_template};

/// Execution state of a step, ordered from least to most severe.
///
/// The worst result of a scenario's steps is the scenario's result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepExecutionResult {
    /// The step has not run.
    #[default]
    NotExecuted,
    /// The step ran and succeeded.
    Passed,
    /// The step ran but could not decide.
    Inconclusive,
    /// The step's action is not implemented yet.
    NotImplemented,
    /// The step failed.
    Failed,
}

/// A single declared action with its resolved metadata.
pub struct Step<T> {
    id: String,
    action: StepAction<T>,
    title: StepTitle,
    execution_order: ExecutionOrder,
    asserts: bool,
    reports: bool,
    arguments: Vec<StepArgument>,
    result: StepExecutionResult,
}

impl<T> Step<T> {
    pub(crate) const fn new(
        id: String,
        action: StepAction<T>,
        title: StepTitle,
        execution_order: ExecutionOrder,
        asserts: bool,
        reports: bool,
        arguments: Vec<StepArgument>,
    ) -> Self {
        Self {
            id,
            action,
            title,
            execution_order,
            asserts,
            reports,
            arguments,
            result: StepExecutionResult::NotExecuted,
        }
    }

    /// Identifier of the step.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The callable this step runs.
    #[must_use]
    pub const fn action(&self) -> &StepAction<T> {
        &self.action
    }

    /// Run the action against `target`.
    pub fn invoke<'a>(&self, target: &'a mut T) -> StepInvocation<'a> {
        self.action.invoke(target)
    }

    /// Title text, computed on the first call.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.get()
    }

    /// The title holder, resolved or not.
    #[must_use]
    pub const fn step_title(&self) -> &StepTitle {
        &self.title
    }

    /// Resolved execution-order category.
    #[must_use]
    pub const fn execution_order(&self) -> ExecutionOrder {
        self.execution_order
    }

    /// Whether the outcome is reported as an assertion.
    #[must_use]
    pub const fn asserts(&self) -> bool {
        self.asserts
    }

    /// Whether the step appears in reports.
    #[must_use]
    pub const fn reports(&self) -> bool {
        self.reports
    }

    /// Captured arguments in declaration order.
    #[must_use]
    pub fn arguments(&self) -> &[StepArgument] {
        &self.arguments
    }

    /// Recorded execution state.
    #[must_use]
    pub const fn result(&self) -> StepExecutionResult {
        self.result
    }

    /// Record the outcome of running the step.
    pub const fn record_result(&mut self, result: StepExecutionResult) {
        self.result = result;
    }
}

impl<T> Clone for Step<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            action: self.action.clone(),
            title: self.title.clone(),
            execution_order: self.execution_order,
            asserts: self.asserts,
            reports: self.reports,
            arguments: self.arguments.clone(),
            result: self.result,
        }
    }
}

impl<T> fmt::Debug for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("execution_order", &self.execution_order)
            .field("asserts", &self.asserts)
            .field("reports", &self.reports)
            .field("arguments", &self.arguments)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
