//! Materialisation of declared steps into runnable scenarios.
//!
//! [`ScenarioMaterializer::scan`] consumes a [`StepBuilder`] and produces one
//! [`Scenario`] per example row, each with its own copy of the steps, or a
//! single scenario wrapping the original steps when no example table is bound.

mod id;


use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Arc, Mutex};

#[cfg(test)]
pub use id::MockIdSource;
pub use id::{IdSource, UuidIdSource};

use crate::context::TestContext;
use crate::example::ExampleRow;
use crate::step::{ExecutionOrder, Step, StepBuilder, StepExecutionResult};

/// One runnable instance of a declared scenario.
pub struct Scenario<T> {
    id: String,
    test_object: Arc<Mutex<T>>,
    steps: Vec<Step<T>>,
    title: Option<String>,
    example: Option<ExampleRow>,
    tags: BTreeSet<String>,
}

impl<T> Scenario<T> {
    /// Identifier shared by every scenario generated from one example table.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Handle to the object the step actions run on.
    #[must_use]
    pub const fn test_object(&self) -> &Arc<Mutex<T>> {
        &self.test_object
    }

    /// Steps in declaration order.
    #[must_use]
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Mutable access to the steps, for recording results.
    pub fn steps_mut(&mut self) -> &mut [Step<T>] {
        &mut self.steps
    }

    /// Scenario-level description, if one could be determined.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Example row bound to this instance.
    #[must_use]
    pub const fn example(&self) -> Option<&ExampleRow> {
        self.example.as_ref()
    }

    /// Tags copied from the test context.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Step titles with `<Header>` placeholders filled from the bound row.
    #[must_use]
    pub fn step_titles(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| {
                self.example.as_ref().map_or_else(
                    || step.title().to_owned(),
                    |row| row.substitute(step.title()),
                )
            })
            .collect()
    }

    /// The most severe result recorded on any step.
    #[must_use]
    pub fn result(&self) -> StepExecutionResult {
        self.steps
            .iter()
            .map(Step::result)
            .max()
            .unwrap_or_default()
    }

    /// Runs of adjacent steps sharing a base category, in declaration order.
    #[must_use]
    pub fn steps_by_order(&self) -> Vec<(ExecutionOrder, &[Step<T>])> {
        self.steps
            .chunk_by(|left, right| {
                left.execution_order().base() == right.execution_order().base()
            })
            .filter_map(|group| {
                group
                    .first()
                    .map(|step| (step.execution_order().base(), group))
            })
            .collect()
    }
}

impl<T> fmt::Debug for Scenario<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("steps", &self.steps)
            .field("example", &self.example)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Converts a finished step sequence into scenarios.
pub struct ScenarioMaterializer<T> {
    test_object: Arc<Mutex<T>>,
    builder: StepBuilder<T>,
}

impl<T> ScenarioMaterializer<T> {
    /// Prepare to materialise `builder`'s steps against `test_object`.
    #[must_use]
    pub const fn new(test_object: Arc<Mutex<T>>, builder: StepBuilder<T>) -> Self {
        Self {
            test_object,
            builder,
        }
    }

    /// Produce the scenarios for `context`.
    ///
    /// With an example table bound, every row gets its own scenario holding a
    /// deep copy of the steps; all of them share one freshly generated id.
    /// Otherwise a single scenario wraps the original steps. A table without
    /// rows is treated like no table.
    #[must_use]
    pub fn scan(self, context: &TestContext) -> Vec<Scenario<T>> {
        let (steps, environment, ids) = self.builder.into_parts();
        let title = context.title().map(ToOwned::to_owned).or_else(|| {
            context
                .test_identity()
                .map(|identity| environment.humanize(identity))
        });
        let tags = context.tags().clone();
        let id = ids.next_id();

        let Some(table) = context.examples().filter(|table| !table.is_empty()) else {
            log::debug!("materialising one scenario with {} steps", steps.len());
            return vec![Scenario {
                id,
                test_object: self.test_object,
                steps,
                title,
                example: None,
                tags,
            }];
        };

        if !environment.bind_headers(table.headers()) && environment.headers() != table.headers() {
            log::debug!("example headers were already bound; keeping the earlier binding");
        }
        log::debug!(
            "materialising {} scenarios with {} steps each",
            table.len(),
            steps.len()
        );
        table
            .rows()
            .iter()
            .map(|row| Scenario {
                id: id.clone(),
                test_object: Arc::clone(&self.test_object),
                steps: steps.clone(),
                title: title.clone(),
                example: Some(row.clone()),
                tags: tags.clone(),
            })
            .collect()
    }
}

impl<T> fmt::Debug for ScenarioMaterializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioMaterializer")
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

impl<T> StepBuilder<T> {
    /// Materialise the accumulated steps for `context`.
    ///
    /// Shorthand for [`ScenarioMaterializer::scan`].
    #[must_use]
    pub fn into_scenarios(self, test_object: Arc<Mutex<T>>, context: &TestContext) -> Vec<Scenario<T>> {
        ScenarioMaterializer::new(test_object, self).scan(context)
    }
}
