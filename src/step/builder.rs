//! Accumulation of declared steps.

use std::fmt;
use std::sync::Arc;

use smart_default::SmartDefault;

use super::action::StepCall;
use super::order::{ExecutionOrder, resolve_order};
use super::title::{StepTitle, TitleEnvironment, TitleSpec};
use super::Step;
use crate::humanize::{DefaultHumanizer, Humanizer};
use crate::scenario::{IdSource, UuidIdSource};

/// Per-step options supplied alongside a [`StepCall`].
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct StepOptions {
    title_template: Option<String>,
    #[default(true)]
    include_inputs_in_title: bool,
    #[default(true)]
    reports: bool,
    #[default(ExecutionOrder::ConsecutiveStep)]
    execution_order: ExecutionOrder,
    asserts: bool,
    role_prefix: String,
}

impl StepOptions {
    /// Options requesting `execution_order`, with every other option at its
    /// default.
    #[must_use]
    pub fn new(execution_order: ExecutionOrder) -> Self {
        Self {
            execution_order,
            ..Self::default()
        }
    }

    /// Use a literal title template instead of the action name.
    #[must_use]
    pub fn with_title_template(mut self, template: impl Into<String>) -> Self {
        self.title_template = Some(template.into());
        self
    }

    /// Append argument values to generated titles, or not.
    #[must_use]
    pub const fn with_include_inputs_in_title(mut self, include: bool) -> Self {
        self.include_inputs_in_title = include;
        self
    }

    /// Surface the step in reports, or not.
    #[must_use]
    pub const fn with_reports(mut self, reports: bool) -> Self {
        self.reports = reports;
        self
    }

    /// Report the outcome as an assertion, or not.
    #[must_use]
    pub const fn with_asserts(mut self, asserts: bool) -> Self {
        self.asserts = asserts;
        self
    }

    /// Role word placed in front of generated titles.
    #[must_use]
    pub fn with_role_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.role_prefix = prefix.into();
        self
    }

    /// Literal title template, if any.
    #[must_use]
    pub fn title_template(&self) -> Option<&str> {
        self.title_template.as_deref()
    }

    /// Whether argument values are appended to generated titles.
    #[must_use]
    pub const fn include_inputs_in_title(&self) -> bool {
        self.include_inputs_in_title
    }

    /// Whether the step appears in reports.
    #[must_use]
    pub const fn reports(&self) -> bool {
        self.reports
    }

    /// Requested execution-order category.
    #[must_use]
    pub const fn execution_order(&self) -> ExecutionOrder {
        self.execution_order
    }

    /// Requested assertion flag.
    #[must_use]
    pub const fn asserts(&self) -> bool {
        self.asserts
    }

    /// Role word placed in front of generated titles.
    #[must_use]
    pub fn role_prefix(&self) -> &str {
        &self.role_prefix
    }
}

/// Ordered accumulator of declared steps.
///
/// Steps are only ever appended. The builder is consumed when scenarios are
/// materialised from it.
pub struct StepBuilder<T> {
    steps: Vec<Step<T>>,
    environment: Arc<TitleEnvironment>,
    ids: Arc<dyn IdSource>,
}

impl<T> StepBuilder<T> {
    /// Create a builder humanising titles with `humanizer` and identifying
    /// steps with `ids`.
    #[must_use]
    pub fn new(humanizer: Arc<dyn Humanizer>, ids: Arc<dyn IdSource>) -> Self {
        Self {
            steps: Vec::new(),
            environment: Arc::new(TitleEnvironment::new(humanizer)),
            ids,
        }
    }

    /// Append one step.
    ///
    /// The requested category and assertion flag are resolved against the
    /// previously appended step; the title is deferred until first read.
    pub fn add_step(&mut self, call: StepCall<T>, options: StepOptions) -> &mut Self {
        let previous = self
            .steps
            .last()
            .map(|step| (step.execution_order(), step.asserts()));
        let resolved = resolve_order(previous, options.execution_order, options.asserts);

        let (descriptor, arguments, action) = call.into_parts();
        let title = StepTitle::deferred(TitleSpec {
            template: options.title_template,
            action_name: descriptor.name().to_owned(),
            title_override: descriptor.title_override().cloned(),
            include_inputs: options.include_inputs_in_title,
            role_prefix: options.role_prefix,
            arguments: arguments.clone(),
            environment: Arc::clone(&self.environment),
        });

        log::debug!(
            "appending step '{}' as {:?} (requested {:?}, asserts {})",
            descriptor.name(),
            resolved.execution_order,
            options.execution_order,
            resolved.asserts
        );

        self.steps.push(Step::new(
            self.ids.next_id(),
            action,
            title,
            resolved.execution_order,
            resolved.asserts,
            options.reports,
            arguments,
        ));
        self
    }

    /// Steps appended so far.
    #[must_use]
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Number of appended steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no step has been appended.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Title environment shared by this builder's steps.
    #[must_use]
    pub const fn environment(&self) -> &Arc<TitleEnvironment> {
        &self.environment
    }

    pub(crate) fn into_parts(self) -> (Vec<Step<T>>, Arc<TitleEnvironment>, Arc<dyn IdSource>) {
        (self.steps, self.environment, self.ids)
    }
}

impl<T> Default for StepBuilder<T> {
    fn default() -> Self {
        Self::new(Arc::new(DefaultHumanizer), Arc::new(UuidIdSource))
    }
}

impl<T> fmt::Debug for StepBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepBuilder")
            .field("steps", &self.steps)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
