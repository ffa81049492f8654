//! Per-test context supplied by the host harness.
//!
//! The host knows which test is running, which example table is bound to it
//! and how it is classified. [`TestContext`] carries that information into
//! scenario materialisation so the crate never has to inspect the call stack.

use std::collections::BTreeSet;

use crate::example::ExampleTable;

/// Context of the test that declared a scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestContext {
    examples: Option<ExampleTable>,
    tags: BTreeSet<String>,
    title: Option<String>,
    test_identity: Option<String>,
}

impl TestContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an example table.
    #[must_use]
    pub fn with_examples(mut self, examples: ExampleTable) -> Self {
        self.examples = Some(examples);
        self
    }

    /// Add a classification tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Set an explicit scenario title, overriding the derived one.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Name the running test, usually its function name.
    ///
    /// Used to derive a scenario title when none is given explicitly.
    #[must_use]
    pub fn with_test_identity(mut self, identity: impl Into<String>) -> Self {
        self.test_identity = Some(identity.into());
        self
    }

    pub(crate) fn set_examples(&mut self, examples: ExampleTable) {
        self.examples = Some(examples);
    }

    pub(crate) fn extend_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    pub(crate) fn set_test_identity(&mut self, identity: String) {
        self.test_identity = Some(identity);
    }

    /// The bound example table, if any.
    #[must_use]
    pub const fn examples(&self) -> Option<&ExampleTable> {
        self.examples.as_ref()
    }

    /// Classification tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Explicit scenario title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Identity of the running test.
    #[must_use]
    pub fn test_identity(&self) -> Option<&str> {
        self.test_identity.as_deref()
    }
}
