//! Step titles: literal templates and names humanised on first read.
//!
//! A title that depends on the action name is only computed when it is first
//! read. By then the scenario has been materialised and the example headers
//! needed for `<Header>` placeholders are bound to the shared
//! [`TitleEnvironment`].

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::action::TitleOverride;
use super::argument::StepArgument;
use crate::example::header_matches;
use crate::humanize::Humanizer;

/// Context shared by every deferred title of one step builder.
pub struct TitleEnvironment {
    humanizer: Arc<dyn Humanizer>,
    headers: OnceLock<Vec<String>>,
}

impl TitleEnvironment {
    /// Create an environment that humanises names with `humanizer`.
    #[must_use]
    pub fn new(humanizer: Arc<dyn Humanizer>) -> Self {
        Self {
            humanizer,
            headers: OnceLock::new(),
        }
    }

    /// Bind example headers for placeholder rendering.
    ///
    /// Headers can be bound once; returns `false` when they were already set.
    pub fn bind_headers(&self, headers: &[String]) -> bool {
        self.headers.set(headers.to_vec()).is_ok()
    }

    /// The bound example headers, empty when none are bound.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        self.headers.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Humanise an identifier with the configured humaniser.
    #[must_use]
    pub fn humanize(&self, identifier: &str) -> String {
        self.humanizer.humanize(identifier)
    }

    fn matching_header(&self, name: &str) -> Option<&str> {
        self.headers()
            .iter()
            .find(|header| header_matches(header, name))
            .map(String::as_str)
    }
}

impl fmt::Debug for TitleEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleEnvironment")
            .field("headers", &self.headers.get())
            .finish_non_exhaustive()
    }
}

/// Everything needed to compute a step title later.
#[derive(Debug, Clone)]
pub(crate) struct TitleSpec {
    pub(crate) template: Option<String>,
    pub(crate) action_name: String,
    pub(crate) title_override: Option<TitleOverride>,
    pub(crate) include_inputs: bool,
    pub(crate) role_prefix: String,
    pub(crate) arguments: Vec<StepArgument>,
    pub(crate) environment: Arc<TitleEnvironment>,
}

impl TitleSpec {
    fn resolve(&self) -> String {
        let values: Vec<String> = self
            .arguments
            .iter()
            .map(|argument| argument.value().flattened())
            .collect();

        if let Some(template) = self.template.as_deref().filter(|t| !t.is_empty()) {
            return format_template(template, &values);
        }

        let (name, include_inputs) = self.title_override.as_ref().map_or_else(
            || (self.action_name.clone(), self.include_inputs),
            |title_override| {
                (
                    format_template(title_override.template(), &values),
                    title_override
                        .includes_inputs()
                        .unwrap_or(self.include_inputs),
                )
            },
        );

        let humanized = self.environment.humanize(&name);
        let mut title = append_prefix(&humanized, &self.role_prefix);
        if include_inputs {
            let inputs = self.rendered_inputs();
            if !inputs.is_empty() {
                title = format!("{title} {}", inputs.join(", "));
            }
        }
        log::trace!("resolved step title '{title}' for action '{}'", self.action_name);
        title.trim().to_owned()
    }

    fn rendered_inputs(&self) -> Vec<String> {
        self.arguments
            .iter()
            .filter(|argument| argument.is_visible())
            .map(|argument| {
                self.environment.matching_header(argument.name()).map_or_else(
                    || argument.value().flattened(),
                    |header| format!("<{header}>"),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
enum TitleKind {
    Fixed(String),
    Deferred {
        spec: Box<TitleSpec>,
        resolved: OnceLock<String>,
    },
}

/// Title of a step, fixed or computed once on first read.
#[derive(Debug, Clone)]
pub struct StepTitle {
    kind: TitleKind,
}

impl StepTitle {
    /// A title that is known up front.
    pub fn fixed(title: impl Into<String>) -> Self {
        Self {
            kind: TitleKind::Fixed(title.into()),
        }
    }

    pub(crate) fn deferred(spec: TitleSpec) -> Self {
        Self {
            kind: TitleKind::Deferred {
                spec: Box::new(spec),
                resolved: OnceLock::new(),
            },
        }
    }

    /// The title text, computing and caching it on first call.
    #[must_use]
    pub fn get(&self) -> &str {
        match &self.kind {
            TitleKind::Fixed(title) => title,
            TitleKind::Deferred { spec, resolved } => resolved.get_or_init(|| spec.resolve()),
        }
    }

    /// Whether the title text has been computed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        match &self.kind {
            TitleKind::Fixed(_) => true,
            TitleKind::Deferred { resolved, .. } => resolved.get().is_some(),
        }
    }
}

impl fmt::Display for StepTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get())
    }
}

/// Fill positional placeholders such as `{0}` with `values`.
///
/// `{{` and `}}` produce literal braces. Placeholders without a matching value
/// are kept verbatim.
#[must_use]
pub fn format_template(template: &str, values: &[String]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(position) = rest.find(['{', '}']) {
        let (literal, tail) = rest.split_at(position);
        output.push_str(literal);
        if let Some(after) = tail.strip_prefix("{{") {
            output.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            output.push('}');
            rest = after;
        } else if let Some((placeholder, after)) = split_placeholder(tail) {
            let value = placeholder.parse::<usize>().ok().and_then(|i| values.get(i));
            if let Some(text) = value {
                output.push_str(text);
            } else {
                output.push('{');
                output.push_str(placeholder);
                output.push('}');
            }
            rest = after;
        } else {
            let mut chars = tail.chars();
            if let Some(brace) = chars.next() {
                output.push(brace);
            }
            rest = chars.as_str();
        }
    }
    output.push_str(rest);
    output
}

/// Split `{name}rest` into `name` and `rest`.
fn split_placeholder(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('{')?;
    let end = inner.find('}')?;
    let (placeholder, after) = inner.split_at(end);
    let valid = !placeholder.is_empty() && placeholder.chars().all(|c| c.is_ascii_digit());
    valid.then(|| (placeholder, after.get(1..).unwrap_or_default()))
}

/// Put `prefix` in front of `title` unless the title already starts with it.
///
/// The comparison is case-insensitive and only matches whole words, so
/// `Wenn` is not treated as a prefix of `Wenner`.
#[must_use]
pub fn append_prefix(title: &str, prefix: &str) -> String {
    let trimmed_prefix = prefix.trim();
    if trimmed_prefix.is_empty() || starts_with_word(title, trimmed_prefix) {
        return title.to_owned();
    }
    if title.is_empty() {
        return trimmed_prefix.to_owned();
    }
    format!("{trimmed_prefix} {}", lowercase_first(title))
}

fn starts_with_word(title: &str, word: &str) -> bool {
    let lowered_title = title.to_lowercase();
    let lowered_word = word.to_lowercase();
    lowered_title
        .strip_prefix(&lowered_word)
        .is_some_and(|rest| rest.chars().next().is_none_or(|c| !c.is_alphanumeric()))
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
