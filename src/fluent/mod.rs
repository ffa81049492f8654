//! Fluent Given/When/Then declarations on a test object.
//!
//! [`Fluent`] wraps the test object and a [`StepBuilder`] and offers the
//! chaining vocabulary test authors write scenarios in. Each method requests
//! an execution-order category and supplies the role word of the configured
//! language as the title prefix:
//!
//! | Method | German alias | Requested order | Asserts |
//! |---|---|---|---|
//! | [`Fluent::given`] | [`Fluent::gegeben`] | `SetupState` | no |
//! | [`Fluent::when`] | [`Fluent::wenn`] | `Transition` | no |
//! | [`Fluent::then`] | [`Fluent::dann`] | `Assertion` | yes |
//! | [`Fluent::and`] | [`Fluent::und`] | follows previous | inherited |
//! | [`Fluent::but`] | [`Fluent::aber`] | follows previous | inherited |
//! | [`Fluent::tear_down_with`] | | `TearDown` | no |
//!
//! ```
//! use gegeben::{Fluent, step};
//!
//! #[derive(Default)]
//! struct Konto {
//!     saldo: i64,
//! }
//!
//! impl Konto {
//!     fn kontostand_von(&mut self, betrag: i64) {
//!         self.saldo = betrag;
//!     }
//!     fn einzahlen(&mut self, betrag: i64) {
//!         self.saldo += betrag;
//!     }
//!     fn saldo_ist(&mut self, erwartet: i64) -> Result<(), String> {
//!         if self.saldo == erwartet { Ok(()) } else { Err(format!("Saldo {}", self.saldo)) }
//!     }
//! }
//!
//! let scenarios = Fluent::new(Konto::default())
//!     .given(step!(Konto::kontostand_von(betrag = 100)))
//!     .when(step!(Konto::einzahlen(betrag = 20)))
//!     .then(step!(Konto::saldo_ist(erwartet = 120)))
//!     .scan();
//!
//! let titles = scenarios[0].step_titles();
//! assert_eq!(
//!     titles,
//!     ["Gegeben sei kontostand von 100", "Wenn einzahlen 20", "Dann saldo ist 120"]
//! );
//! ```


use std::fmt;
use std::sync::{Arc, Mutex};

use crate::config::GegebenConfig;
use crate::context::TestContext;
use crate::example::ExampleTable;
use crate::humanize::{DefaultHumanizer, Humanizer, VerbatimHumanizer};
use crate::locale::{Language, Role};
use crate::scenario::{IdSource, Scenario, ScenarioMaterializer, UuidIdSource};
use crate::step::{ExecutionOrder, Step, StepBuilder, StepCall, StepOptions};

/// Chaining front end for declaring the steps of one scenario.
pub struct Fluent<T> {
    test_object: Arc<Mutex<T>>,
    builder: StepBuilder<T>,
    context: TestContext,
    language: Language,
    include_inputs_in_title: bool,
}

impl<T> Fluent<T> {
    /// Start a declaration with the default configuration.
    #[must_use]
    pub fn new(test_object: T) -> Self {
        Self::with_config(test_object, &GegebenConfig::default())
    }

    /// Start a declaration using `config` for the language and title options.
    #[must_use]
    pub fn with_config(test_object: T, config: &GegebenConfig) -> Self {
        let humanizer: Arc<dyn Humanizer> = if config.humanize_titles {
            Arc::new(DefaultHumanizer)
        } else {
            Arc::new(VerbatimHumanizer)
        };
        Self::with_parts(test_object, config, humanizer, Arc::new(UuidIdSource))
    }

    /// Start a declaration with explicit collaborators.
    ///
    /// `config.humanize_titles` is not consulted; `humanizer` is used as given.
    #[must_use]
    pub fn with_parts(
        test_object: T,
        config: &GegebenConfig,
        humanizer: Arc<dyn Humanizer>,
        ids: Arc<dyn IdSource>,
    ) -> Self {
        Self {
            test_object: Arc::new(Mutex::new(test_object)),
            builder: StepBuilder::new(humanizer, ids),
            context: TestContext::new(),
            language: config.language,
            include_inputs_in_title: config.include_inputs_in_title,
        }
    }

    /// Declare a set-up step.
    #[must_use]
    pub fn given(self, call: StepCall<T>) -> Self {
        self.push(call, Role::Given, None)
    }

    /// Declare a set-up step with a literal title template.
    #[must_use]
    pub fn given_titled(self, template: impl Into<String>, call: StepCall<T>) -> Self {
        self.push(call, Role::Given, Some(template.into()))
    }

    /// Declare the transition under test.
    #[must_use]
    pub fn when(self, call: StepCall<T>) -> Self {
        self.push(call, Role::When, None)
    }

    /// Declare a transition with a literal title template.
    #[must_use]
    pub fn when_titled(self, template: impl Into<String>, call: StepCall<T>) -> Self {
        self.push(call, Role::When, Some(template.into()))
    }

    /// Declare an assertion.
    #[must_use]
    pub fn then(self, call: StepCall<T>) -> Self {
        self.push(call, Role::Then, None)
    }

    /// Declare an assertion with a literal title template.
    #[must_use]
    pub fn then_titled(self, template: impl Into<String>, call: StepCall<T>) -> Self {
        self.push(call, Role::Then, Some(template.into()))
    }

    /// Declare a step continuing the previous one.
    #[must_use]
    pub fn and(self, call: StepCall<T>) -> Self {
        self.push(call, Role::And, None)
    }

    /// Declare a continuing step with a literal title template.
    #[must_use]
    pub fn and_titled(self, template: impl Into<String>, call: StepCall<T>) -> Self {
        self.push(call, Role::And, Some(template.into()))
    }

    /// Declare a contrasting step continuing the previous one.
    #[must_use]
    pub fn but(self, call: StepCall<T>) -> Self {
        self.push(call, Role::But, None)
    }

    /// Declare a contrasting step with a literal title template.
    #[must_use]
    pub fn but_titled(self, template: impl Into<String>, call: StepCall<T>) -> Self {
        self.push(call, Role::But, Some(template.into()))
    }

    /// Declare a clean-up step. Clean-up steps are not reported.
    #[must_use]
    pub fn tear_down_with(self, call: StepCall<T>) -> Self {
        self.push(call, Role::TearDown, None)
    }

    /// Alias of [`Fluent::given`].
    #[must_use]
    pub fn gegeben(self, call: StepCall<T>) -> Self {
        self.given(call)
    }

    /// Alias of [`Fluent::when`].
    #[must_use]
    pub fn wenn(self, call: StepCall<T>) -> Self {
        self.when(call)
    }

    /// Alias of [`Fluent::then`].
    #[must_use]
    pub fn dann(self, call: StepCall<T>) -> Self {
        self.then(call)
    }

    /// Alias of [`Fluent::and`].
    #[must_use]
    pub fn und(self, call: StepCall<T>) -> Self {
        self.and(call)
    }

    /// Alias of [`Fluent::but`].
    #[must_use]
    pub fn aber(self, call: StepCall<T>) -> Self {
        self.but(call)
    }

    /// Declare a step with fully explicit options.
    #[must_use]
    pub fn step(mut self, call: StepCall<T>, options: StepOptions) -> Self {
        self.builder.add_step(call, options);
        self
    }

    /// Bind an example table; one scenario is produced per row.
    ///
    /// Step titles read from here on carry `<Header>` placeholders for
    /// arguments matching a column.
    #[must_use]
    pub fn with_examples(mut self, examples: ExampleTable) -> Self {
        let rebound =
            !examples.is_empty() && !self.builder.environment().bind_headers(examples.headers());
        if rebound {
            log::debug!("example headers were already bound; keeping the earlier binding");
        }
        self.context.set_examples(examples);
        self
    }

    /// Add classification tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context.extend_tags(tags);
        self
    }

    /// Set the scenario title explicitly.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.context.set_title(title.into());
        self
    }

    /// Name the running test; humanised into the title when none is set.
    #[must_use]
    pub fn with_test_identity(mut self, identity: impl Into<String>) -> Self {
        self.context.set_test_identity(identity.into());
        self
    }

    /// Steps declared so far.
    #[must_use]
    pub fn steps(&self) -> &[Step<T>] {
        self.builder.steps()
    }

    /// Context collected from `with_*` calls.
    #[must_use]
    pub const fn context(&self) -> &TestContext {
        &self.context
    }

    /// Materialise the declaration into scenarios.
    #[must_use]
    pub fn scan(self) -> Vec<Scenario<T>> {
        ScenarioMaterializer::new(self.test_object, self.builder).scan(&self.context)
    }

    fn push(mut self, call: StepCall<T>, role: Role, template: Option<String>) -> Self {
        let (execution_order, asserts) = match role {
            Role::Given => (ExecutionOrder::SetupState, false),
            Role::When => (ExecutionOrder::Transition, false),
            Role::Then => (ExecutionOrder::Assertion, true),
            Role::And | Role::But => (ExecutionOrder::ConsecutiveStep, false),
            Role::TearDown => (ExecutionOrder::TearDown, false),
        };
        let mut options = StepOptions::new(execution_order)
            .with_asserts(asserts)
            .with_reports(role != Role::TearDown)
            .with_include_inputs_in_title(self.include_inputs_in_title)
            .with_role_prefix(self.language.role_word(role));
        if let Some(title_template) = template {
            options = options.with_title_template(title_template);
        }
        self.builder.add_step(call, options);
        self
    }
}

impl<T> fmt::Debug for Fluent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fluent")
            .field("builder", &self.builder)
            .field("context", &self.context)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
