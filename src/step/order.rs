//! Execution-order categories and "follows previous" resolution.

/// Reporting category of a step.
///
/// Steps always run in declaration order. The category decides whether a
/// failure counts as a failed assertion or as broken set-up or tear-down, and
/// how consecutive steps are grouped in a report. Variants are ordered by
/// their position in a Given/When/Then chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExecutionOrder {
    /// Prepares the test object before any state is set up.
    Initialize,
    /// A Given step.
    SetupState,
    /// A step continuing a Given step.
    ConsecutiveSetupState,
    /// A When step.
    Transition,
    /// A step continuing a When step.
    ConsecutiveTransition,
    /// A Then step.
    Assertion,
    /// A step continuing a Then step.
    ConsecutiveAssertion,
    /// Clean-up after the assertions.
    TearDown,
    /// Requested by And/But steps: take the category from the previous step.
    ///
    /// Only remains on a step that had no predecessor to resolve against.
    ConsecutiveStep,
}

impl ExecutionOrder {
    /// Whether this category continues the previous step.
    #[must_use]
    pub const fn is_consecutive(self) -> bool {
        matches!(
            self,
            Self::ConsecutiveSetupState
                | Self::ConsecutiveTransition
                | Self::ConsecutiveAssertion
                | Self::ConsecutiveStep
        )
    }

    /// The category a consecutive step belongs to for report grouping.
    #[must_use]
    pub const fn base(self) -> Self {
        match self {
            Self::ConsecutiveSetupState => Self::SetupState,
            Self::ConsecutiveTransition => Self::Transition,
            Self::ConsecutiveAssertion => Self::Assertion,
            other => other,
        }
    }

    /// Category of a step that follows a step of this category.
    ///
    /// Returns `None` for [`ExecutionOrder::ConsecutiveStep`], which has no
    /// continuation of its own.
    #[must_use]
    pub const fn continuation(self) -> Option<Self> {
        match self {
            Self::Initialize | Self::SetupState | Self::ConsecutiveSetupState => {
                Some(Self::ConsecutiveSetupState)
            }
            Self::Transition | Self::ConsecutiveTransition => Some(Self::ConsecutiveTransition),
            Self::Assertion | Self::ConsecutiveAssertion | Self::TearDown => {
                Some(Self::ConsecutiveAssertion)
            }
            Self::ConsecutiveStep => None,
        }
    }
}

/// Category and assertion flag a step ends up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOrder {
    /// Effective category.
    pub execution_order: ExecutionOrder,
    /// Effective assertion flag.
    pub asserts: bool,
}

/// Resolve the requested category and assertion flag of a new step.
///
/// `previous` holds the category and assertion flag of the step declared
/// immediately before, if any. Concrete requests pass through unchanged. A
/// [`ExecutionOrder::ConsecutiveStep`] request copies the predecessor's
/// assertion flag and takes the predecessor's continuation category; with no
/// predecessor the request is kept as it is.
#[must_use]
pub fn resolve_order(
    previous: Option<(ExecutionOrder, bool)>,
    requested: ExecutionOrder,
    asserts: bool,
) -> ResolvedOrder {
    let unchanged = ResolvedOrder {
        execution_order: requested,
        asserts,
    };
    if requested != ExecutionOrder::ConsecutiveStep {
        return unchanged;
    }
    let Some((previous_order, previous_asserts)) = previous else {
        log::debug!("consecutive step has no predecessor; keeping requested order");
        return unchanged;
    };
    ResolvedOrder {
        execution_order: previous_order.continuation().unwrap_or(requested),
        asserts: previous_asserts,
    }
}
