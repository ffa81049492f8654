//! Step actions and the descriptors that name them.
//!
//! An action is stored behind a small closure seam so synchronous and
//! asynchronous step methods look the same to the host execution engine:
//! invoking either yields a [`StepInvocation`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use super::argument::{ArgValue, StepArgument};
use crate::error::{Result, StepError};

/// Failure reported by a step action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StepFailure {
    message: String,
}

impl StepFailure {
    /// Create a failure with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of running a step action once.
pub type StepOutcome = std::result::Result<(), StepFailure>;

/// Boxed future returned by asynchronous step actions.
pub type StepFuture<'a> = Pin<Box<dyn Future<Output = StepOutcome> + Send + 'a>>;

/// Conversion of a step method's return value into a [`StepOutcome`].
pub trait IntoStepOutcome {
    /// Convert `self`.
    ///
    /// # Errors
    ///
    /// Returns a [`StepFailure`] when the step method reported an error.
    fn into_outcome(self) -> StepOutcome;
}

impl IntoStepOutcome for () {
    fn into_outcome(self) -> StepOutcome {
        Ok(())
    }
}

impl<E: fmt::Display> IntoStepOutcome for std::result::Result<(), E> {
    fn into_outcome(self) -> StepOutcome {
        self.map_err(|error| StepFailure::new(error.to_string()))
    }
}

/// Result of invoking a step action.
pub enum StepInvocation<'a> {
    /// A synchronous action ran to completion.
    Completed(StepOutcome),
    /// An asynchronous action returned a future still to be awaited.
    Pending(StepFuture<'a>),
}

impl<'a> StepInvocation<'a> {
    /// Whether the action still has to be awaited.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// View the invocation as a future regardless of how the action ran.
    #[must_use]
    pub fn into_future(self) -> StepFuture<'a> {
        match self {
            Self::Completed(outcome) => Box::pin(futures_util::future::ready(outcome)),
            Self::Pending(future) => future,
        }
    }
}

impl fmt::Debug for StepInvocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(outcome) => f.debug_tuple("Completed").field(outcome).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

type InvokeFn<T> = dyn for<'a> Fn(&'a mut T) -> StepInvocation<'a> + Send + Sync;

/// A callable bound to the test object type `T`.
///
/// Clones share the callable; execution state lives on [`super::Step`].
pub struct StepAction<T> {
    invoke: Arc<InvokeFn<T>>,
    asynchronous: bool,
}

impl<T> StepAction<T> {
    /// Wrap a synchronous step method.
    pub fn from_sync<F, O>(action: F) -> Self
    where
        F: Fn(&mut T) -> O + Send + Sync + 'static,
        O: IntoStepOutcome,
    {
        Self::wrap(
            move |target| StepInvocation::Completed(action(target).into_outcome()),
            false,
        )
    }

    /// Wrap an asynchronous step method.
    pub fn from_async<F>(action: F) -> Self
    where
        F: for<'a> Fn(&'a mut T) -> StepFuture<'a> + Send + Sync + 'static,
    {
        Self::wrap(move |target| StepInvocation::Pending(action(target)), true)
    }

    fn wrap<F>(invoke: F, asynchronous: bool) -> Self
    where
        F: for<'a> Fn(&'a mut T) -> StepInvocation<'a> + Send + Sync + 'static,
    {
        Self {
            invoke: Arc::new(invoke),
            asynchronous,
        }
    }

    /// Run the action against `target`.
    pub fn invoke<'a>(&self, target: &'a mut T) -> StepInvocation<'a> {
        (self.invoke)(target)
    }

    /// Whether the action returns a future.
    #[must_use]
    pub const fn is_async(&self) -> bool {
        self.asynchronous
    }
}

impl<T> Clone for StepAction<T> {
    fn clone(&self) -> Self {
        Self {
            invoke: Arc::clone(&self.invoke),
            asynchronous: self.asynchronous,
        }
    }
}

impl<T> fmt::Debug for StepAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepAction")
            .field("asynchronous", &self.asynchronous)
            .finish_non_exhaustive()
    }
}

/// Title metadata attached to a step method.
///
/// The template replaces the method name as the source of the step title. When
/// `include_inputs` is set it also replaces the caller's choice of appending
/// argument values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleOverride {
    template: String,
    include_inputs: Option<bool>,
}

impl TitleOverride {
    /// Create an override from a title template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            include_inputs: None,
        }
    }

    /// Force argument values to be appended, or not.
    #[must_use]
    pub const fn include_inputs(mut self, include: bool) -> Self {
        self.include_inputs = Some(include);
        self
    }

    /// The title template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether to append argument values, when the override decides it.
    #[must_use]
    pub const fn includes_inputs(&self) -> Option<bool> {
        self.include_inputs
    }
}

/// Name, parameter names and title metadata of a step method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    name: String,
    parameters: Vec<String>,
    title_override: Option<TitleOverride>,
}

impl ActionDescriptor {
    /// Describe a step method.
    ///
    /// Parameter names starting with `_` are hidden from generated titles.
    ///
    /// # Errors
    ///
    /// Returns `StepError::MalformedDeclaration` when the name is empty or
    /// not an identifier, or when two visible parameters share a name.
    pub fn new<I, S>(name: impl Into<String>, parameters: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name_value = name.into();
        if !is_identifier(&name_value) {
            return Err(malformed(&name_value, "action name is not an identifier"));
        }
        let names: Vec<String> = parameters
            .into_iter()
            .map(|parameter| visible_name(parameter.into()))
            .collect();
        for (index, parameter) in names.iter().enumerate() {
            let repeated = !parameter.is_empty() && names.iter().take(index).any(|p| p == parameter);
            if repeated {
                return Err(malformed(
                    &name_value,
                    &format!("parameter '{parameter}' is declared twice"),
                ));
            }
        }
        Ok(Self {
            name: name_value,
            parameters: names,
            title_override: None,
        })
    }

    /// Descriptor built by the [`crate::step!`] macro from a method call.
    #[doc(hidden)]
    #[must_use]
    pub fn declared(name: &'static str, parameters: &[&'static str]) -> Self {
        Self {
            name: name.to_owned(),
            parameters: parameters
                .iter()
                .map(|parameter| visible_name((*parameter).to_owned()))
                .collect(),
            title_override: None,
        }
    }

    /// Attach title metadata.
    #[must_use]
    pub fn with_title_override(mut self, title_override: TitleOverride) -> Self {
        self.title_override = Some(title_override);
        self
    }

    /// Declared method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter names in declaration order; hidden parameters are empty.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Attached title metadata.
    #[must_use]
    pub const fn title_override(&self) -> Option<&TitleOverride> {
        self.title_override.as_ref()
    }
}

fn visible_name(parameter: String) -> String {
    if parameter.starts_with('_') {
        String::new()
    } else {
        parameter
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn malformed(action: &str, reason: &str) -> crate::error::GegebenError {
    StepError::MalformedDeclaration {
        action: action.to_owned(),
        reason: reason.to_owned(),
    }
    .into()
}

/// A step method call ready to be appended to a scenario.
pub struct StepCall<T> {
    descriptor: ActionDescriptor,
    arguments: Vec<StepArgument>,
    action: StepAction<T>,
}

impl<T> StepCall<T> {
    /// Pair a descriptor with captured argument values and the action.
    ///
    /// # Errors
    ///
    /// Returns `StepError::MalformedDeclaration` when the number of values
    /// differs from the number of declared parameters.
    pub fn new(
        descriptor: ActionDescriptor,
        values: Vec<ArgValue>,
        action: StepAction<T>,
    ) -> Result<Self> {
        let expected = descriptor.parameters().len();
        if values.len() != expected {
            return Err(malformed(
                descriptor.name(),
                &format!(
                    "{} arguments supplied for {expected} parameters",
                    values.len()
                ),
            ));
        }
        Ok(Self::declared(descriptor, values, action))
    }

    /// Call built by the [`crate::step!`] macro, which guarantees the arity.
    #[doc(hidden)]
    #[must_use]
    pub fn declared(
        descriptor: ActionDescriptor,
        values: Vec<ArgValue>,
        action: StepAction<T>,
    ) -> Self {
        let arguments = descriptor
            .parameters()
            .iter()
            .zip(values)
            .map(|(name, value)| StepArgument::new(name.clone(), value))
            .collect();
        Self {
            descriptor,
            arguments,
            action,
        }
    }

    /// Attach title metadata to the called method.
    #[must_use]
    pub fn with_title_override(mut self, title_override: TitleOverride) -> Self {
        self.descriptor = self.descriptor.with_title_override(title_override);
        self
    }

    /// Descriptor of the called method.
    #[must_use]
    pub const fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }

    /// Captured arguments.
    #[must_use]
    pub fn arguments(&self) -> &[StepArgument] {
        &self.arguments
    }

    pub(crate) fn into_parts(self) -> (ActionDescriptor, Vec<StepArgument>, StepAction<T>) {
        (self.descriptor, self.arguments, self.action)
    }
}

impl<T> fmt::Debug for StepCall<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepCall")
            .field("descriptor", &self.descriptor)
            .field("arguments", &self.arguments)
            .field("action", &self.action)
            .finish()
    }
}
