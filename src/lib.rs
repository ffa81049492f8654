//! Fluent Given/When/Then step declarations with German role words.
//!
//! `gegeben` is an add-on for behaviour-driven test hosts. Test authors chain
//! step declarations on a test object; the crate works out each step's
//! execution-order category and assertion flag, generates readable titles and
//! materialises the declaration into [`Scenario`] records that the host's
//! execution engine and reporter consume. The crate never runs scenarios
//! itself.
//!
//! ```
//! use gegeben::{ExampleTable, Fluent, step};
//!
//! #[derive(Default)]
//! struct Konto {
//!     saldo: i64,
//! }
//!
//! impl Konto {
//!     fn einzahlen(&mut self, betrag: i64) {
//!         self.saldo += betrag;
//!     }
//! }
//!
//! let examples = ExampleTable::new(["Betrag"])?
//!     .with_row(["10"])?
//!     .with_row(["20"])?;
//! let scenarios = Fluent::new(Konto::default())
//!     .when(step!(Konto::einzahlen(betrag = 0)))
//!     .with_examples(examples)
//!     .scan();
//!
//! assert_eq!(scenarios.len(), 2);
//! assert_eq!(scenarios[1].step_titles(), ["Wenn einzahlen 20"]);
//! # Ok::<(), gegeben::error::GegebenError>(())
//! ```
//!
//! # Modules
//!
//! - [`step`]: Step records, execution-order resolution and titles
//! - [`scenario`]: Materialisation of steps into scenarios
//! - [`fluent`]: The chaining front end
//! - [`config`]: Configuration with layered precedence (env > file > defaults)
//! - [`error`]: Semantic error types
//! - [`example`], [`context`], [`humanize`], [`locale`]: Collaborators used
//!   while declaring and materialising

pub mod config;
pub mod context;
pub mod error;
pub mod example;
pub mod fluent;
pub mod humanize;
pub mod locale;
pub mod scenario;
pub mod step;

pub use config::GegebenConfig;
pub use context::TestContext;
pub use error::{GegebenError, Result};
pub use example::{ExampleRow, ExampleTable};
pub use fluent::Fluent;
pub use locale::Language;
pub use scenario::{Scenario, ScenarioMaterializer};
pub use step::{ExecutionOrder, Step, StepBuilder, StepExecutionResult, StepOptions};
