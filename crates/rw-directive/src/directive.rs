//! Structured directives, built from the events of one closed directive.
//!
//! The tokenizer only emits events. [`Directive::from_events`] walks the
//! events of a single `DirectiveLeaf` or `DirectiveText` token and collects
//! its name, namespace, args or labels, and attributes.
//!
//! # Example
//!
//! ```
//! use rw_directive::{DirectiveKind, ParseOptions, parse};
//!
//! let directives = parse("See @abbr(HTML){title=\"HyperText\"}.", &ParseOptions::default())?;
//! let abbr = &directives[0];
//! assert_eq!(abbr.kind, DirectiveKind::Text);
//! assert_eq!(abbr.name, "abbr");
//! assert_eq!(abbr.positional().collect::<Vec<_>>(), vec!["HTML"]);
//! assert_eq!(abbr.attribute("title"), Some("HyperText"));
//! # Ok::<(), rw_directive::CompileError>(())
//! ```

use crate::character::{is_bareword, is_key_start, is_shortcut};
use crate::code::{Code, Input, Point};
use crate::event::{Event, Kind, Name};

/// Leaf (`@@`) or text (`@`) form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Leaf,
    Text,
}

/// One entry of `(...)` read as args.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arg {
    /// Key of a `key=value` entry.
    pub key: Option<String>,
    pub value: String,
    /// Whether the value was written in quotes.
    pub quoted: bool,
}

impl Arg {
    /// A positional bareword arg.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: value.into(),
            quoted: false,
        }
    }

    /// A keyed, quoted arg.
    #[must_use]
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
            quoted: true,
        }
    }
}

/// Contents of `(...)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Group {
    Args(Vec<Arg>),
    Labels(Vec<String>),
}

/// How an attribute was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeForm {
    /// `#value`
    Id,
    /// `.value`
    Class,
    /// `name` or `name=value`
    Name,
}

/// One entry of `{...}`.
///
/// For the `#id` and `.class` shortcuts, `name` is `"id"` or `"class"` and
/// `value` holds the identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub form: AttributeForm,
    pub name: String,
    pub value: Option<String>,
}

/// A recognized directive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub name: String,
    /// `Some("")` for an empty `[]`.
    pub namespace: Option<String>,
    pub group: Option<Group>,
    pub attributes: Vec<Attribute>,
    /// Point of the first marker.
    pub start: Point,
    /// Point right after the directive.
    pub end: Point,
}

/// Error turning events into a [`Directive`].
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The events do not start with a directive.
    #[error("expected a directive, found `{0:?}`")]
    NotADirective(Name),
    /// No events at all.
    #[error("no events to compile")]
    Empty,
    /// An exit that does not close the innermost open token.
    #[error("unbalanced events at {line}:{column}: `{found:?}` closes `{expected:?}`")]
    Unbalanced {
        expected: Name,
        found: Name,
        line: usize,
        column: usize,
    },
    /// Events end before the directive is closed.
    #[error("directive `{0:?}` is not closed")]
    Unclosed(Name),
    /// Events continue after the directive is closed.
    #[error("unexpected event `{0:?}` after the directive")]
    Trailing(Name),
    /// A part that cannot appear where it is.
    #[error("unexpected `{0:?}` in directive")]
    Unexpected(Name),
    /// The directive has no name token.
    #[error("directive has no name")]
    MissingName,
}

/// Role of a token in a directive, shared by the leaf and text variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    Name,
    Namespace,
    NamespaceString,
    Args,
    Labels,
    Entry,
    Key,
    Literal,
    Value,
    Data,
    Id,
    Class,
    ShortcutValue,
    Attributes,
    AttributeName,
    LineEnding,
}

fn part(name: Name) -> Option<Part> {
    use Name as N;

    let part = match name {
        N::DirectiveLeafName | N::DirectiveTextName => Part::Name,
        N::DirectiveLeafNamespace | N::DirectiveTextNamespace => Part::Namespace,
        N::DirectiveLeafNamespaceString | N::DirectiveTextNamespaceString => Part::NamespaceString,
        N::DirectiveLeafArgs | N::DirectiveTextArgs => Part::Args,
        N::DirectiveLeafLabels => Part::Labels,
        N::DirectiveLeafArg
        | N::DirectiveTextArg
        | N::DirectiveLeafLabel
        | N::DirectiveLeafAttribute
        | N::DirectiveTextAttribute => Part::Entry,
        N::DirectiveLeafArgKey | N::DirectiveTextArgKey => Part::Key,
        N::DirectiveLeafArgValueLiteral
        | N::DirectiveTextArgValueLiteral
        | N::DirectiveLeafLabelValueLiteral
        | N::DirectiveLeafAttributeValueLiteral
        | N::DirectiveTextAttributeValueLiteral => Part::Literal,
        N::DirectiveLeafArgValue
        | N::DirectiveTextArgValue
        | N::DirectiveLeafLabelValue
        | N::DirectiveLeafAttributeValue
        | N::DirectiveTextAttributeValue => Part::Value,
        N::DirectiveLeafArgValueData
        | N::DirectiveTextArgValueData
        | N::DirectiveLeafLabelValueData
        | N::DirectiveLeafAttributeValueData
        | N::DirectiveTextAttributeValueData => Part::Data,
        N::DirectiveLeafAttributeId | N::DirectiveTextAttributeId => Part::Id,
        N::DirectiveLeafAttributeClass | N::DirectiveTextAttributeClass => Part::Class,
        N::DirectiveLeafAttributeIdValue
        | N::DirectiveTextAttributeIdValue
        | N::DirectiveLeafAttributeClassValue
        | N::DirectiveTextAttributeClassValue => Part::ShortcutValue,
        N::DirectiveLeafAttributes | N::DirectiveTextAttributes => Part::Attributes,
        N::DirectiveLeafAttributeName | N::DirectiveTextAttributeName => Part::AttributeName,
        N::LineEnding => Part::LineEnding,
        _ => return None,
    };

    Some(part)
}

/// Entry being collected.
#[derive(Debug, Default)]
struct Entry {
    key: Option<String>,
    form: Option<AttributeForm>,
    value: String,
    has_value: bool,
    quoted: bool,
    in_value: bool,
}

/// Where the current entry goes when it closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Group,
    Attributes,
}

impl Directive {
    /// Build a directive from the events of one closed directive token.
    ///
    /// `events` must start with the directive's enter event and end with its
    /// exit event. Quoted values keep their text verbatim except that each
    /// line ending becomes `\n` and the indentation of continuation lines is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if the events are not one balanced directive.
    pub fn from_events(events: &[Event], input: &Input) -> Result<Self, CompileError> {
        let first = events.first().ok_or(CompileError::Empty)?;
        let kind = match (first.kind, first.name) {
            (Kind::Enter, Name::DirectiveLeaf) => DirectiveKind::Leaf,
            (Kind::Enter, Name::DirectiveText) => DirectiveKind::Text,
            (_, name) => return Err(CompileError::NotADirective(name)),
        };

        let mut open: Vec<&Event> = Vec::new();
        let mut name = None;
        let mut namespace = None;
        let mut group = None;
        let mut attributes = Vec::new();
        let mut entry = Entry::default();
        let mut target = Target::Group;
        let mut end = None;

        for (index, event) in events.iter().enumerate() {
            if end.is_some() {
                return Err(CompileError::Trailing(event.name));
            }

            if event.kind == Kind::Enter {
                match part(event.name) {
                    Some(Part::Namespace) => namespace = Some(String::new()),
                    Some(Part::Args) => {
                        group = Some(Group::Args(Vec::new()));
                        target = Target::Group;
                    }
                    Some(Part::Labels) => {
                        group = Some(Group::Labels(Vec::new()));
                        target = Target::Group;
                    }
                    Some(Part::Entry) => entry = Entry::default(),
                    Some(Part::Literal) => {
                        entry.quoted = true;
                        entry.has_value = true;
                    }
                    Some(Part::Value) => {
                        entry.in_value = true;
                        entry.has_value = true;
                    }
                    Some(Part::Id) => entry.form = Some(AttributeForm::Id),
                    Some(Part::Class) => entry.form = Some(AttributeForm::Class),
                    Some(Part::Attributes) => target = Target::Attributes,
                    _ => {}
                }
                open.push(event);
                continue;
            }

            let enter = open.pop().ok_or(CompileError::Trailing(event.name))?;
            if enter.name != event.name {
                return Err(CompileError::Unbalanced {
                    expected: enter.name,
                    found: event.name,
                    line: event.point.line,
                    column: event.point.column,
                });
            }
            let text = input.slice(&enter.point, &event.point);

            match part(event.name) {
                Some(Part::Name) => name = Some(text.to_owned()),
                Some(Part::NamespaceString) => namespace = Some(text.to_owned()),
                Some(Part::Key) => entry.key = Some(text.to_owned()),
                Some(Part::Data | Part::ShortcutValue) => {
                    entry.value.push_str(text);
                    entry.has_value = true;
                }
                Some(Part::LineEnding) if entry.in_value => entry.value.push('\n'),
                Some(Part::Value) => entry.in_value = false,
                Some(Part::AttributeName) => {
                    entry.key = Some(text.to_owned());
                    entry.form = Some(AttributeForm::Name);
                }
                Some(Part::Entry) => {
                    let done = std::mem::take(&mut entry);
                    match target {
                        Target::Group => push_group_entry(&mut group, done, event.name)?,
                        Target::Attributes => attributes.push(attribute(done, event.name)?),
                    }
                }
                _ => {}
            }

            if open.is_empty() {
                end = Some(index);
            }
        }

        let Some(end) = end else {
            return Err(CompileError::Unclosed(first.name));
        };

        Ok(Self {
            kind,
            name: name.ok_or(CompileError::MissingName)?,
            namespace,
            group,
            attributes,
            start: first.point,
            end: events[end].point,
        })
    }

    /// All args, empty when `(...)` is missing or holds labels.
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        match &self.group {
            Some(Group::Args(args)) => args,
            _ => &[],
        }
    }

    /// All labels, empty when `(...)` is missing or holds args.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        match &self.group {
            Some(Group::Labels(labels)) => labels,
            _ => &[],
        }
    }

    /// Values of args without a key.
    pub fn positional(&self) -> impl Iterator<Item = &str> {
        self.args()
            .iter()
            .filter(|arg| arg.key.is_none())
            .map(|arg| arg.value.as_str())
    }

    /// Value of the last arg with `key`.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args()
            .iter()
            .rev()
            .find(|arg| arg.key.as_deref() == Some(key))
            .map(|arg| arg.value.as_str())
    }

    /// The last `#id`.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.form == AttributeForm::Id)
            .and_then(|attr| attr.value.as_deref())
    }

    /// All `.class` values, in order.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|attr| attr.form == AttributeForm::Class)
            .filter_map(|attr| attr.value.as_deref())
            .collect()
    }

    /// Value of the last `name=value` attribute called `name`.
    ///
    /// A value-less attribute yields `Some("")`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.form == AttributeForm::Name && attr.name == name)
            .map(|attr| attr.value.as_deref().unwrap_or(""))
    }

    /// Canonical syntax for this directive.
    ///
    /// Parsing the result yields an equal directive, apart from positions
    /// and an empty `{}`, which is not written.
    ///
    /// ```
    /// use rw_directive::{ParseOptions, parse};
    ///
    /// let directives = parse("@@note[ns]( a ,k='v' ){ .c #id }", &ParseOptions::default())?;
    /// assert_eq!(directives[0].to_syntax(), r#"@@note[ns](a, k="v"){.c #id}"#);
    /// # Ok::<(), rw_directive::CompileError>(())
    /// ```
    #[must_use]
    pub fn to_syntax(&self) -> String {
        let mut result = String::new();

        result.push_str(match self.kind {
            DirectiveKind::Leaf => "@@",
            DirectiveKind::Text => "@",
        });
        result.push_str(&self.name);

        if let Some(namespace) = &self.namespace {
            result.push('[');
            result.push_str(namespace);
            result.push(']');
        }

        match &self.group {
            Some(Group::Args(args)) => {
                let parts: Vec<String> = args
                    .iter()
                    .map(|arg| {
                        let value = format_value(&arg.value, arg.quoted, false);
                        match &arg.key {
                            Some(key) => format!("{key}={value}"),
                            None => value,
                        }
                    })
                    .collect();
                result.push('(');
                result.push_str(&parts.join(", "));
                result.push(')');
            }
            Some(Group::Labels(labels)) => {
                let parts: Vec<String> = labels
                    .iter()
                    .map(|label| format_value(label, false, true))
                    .collect();
                result.push('(');
                result.push_str(&parts.join(", "));
                result.push(')');
            }
            None => {}
        }

        if !self.attributes.is_empty() {
            let parts: Vec<String> = self.attributes.iter().map(format_attribute).collect();
            result.push('{');
            result.push_str(&parts.join(" "));
            result.push('}');
        }

        result
    }
}

fn push_group_entry(group: &mut Option<Group>, entry: Entry, name: Name) -> Result<(), CompileError> {
    match group {
        Some(Group::Args(args)) => args.push(Arg {
            key: entry.key,
            value: entry.value,
            quoted: entry.quoted,
        }),
        Some(Group::Labels(labels)) => labels.push(entry.value),
        None => return Err(CompileError::Unexpected(name)),
    }
    Ok(())
}

fn attribute(entry: Entry, name: Name) -> Result<Attribute, CompileError> {
    let attribute = match entry.form {
        Some(AttributeForm::Id) => Attribute {
            form: AttributeForm::Id,
            name: "id".to_owned(),
            value: Some(entry.value),
        },
        Some(AttributeForm::Class) => Attribute {
            form: AttributeForm::Class,
            name: "class".to_owned(),
            value: Some(entry.value),
        },
        Some(AttributeForm::Name) => Attribute {
            form: AttributeForm::Name,
            name: entry.key.ok_or(CompileError::Unexpected(name))?,
            value: entry.has_value.then_some(entry.value),
        },
        None => return Err(CompileError::Unexpected(name)),
    };
    Ok(attribute)
}

/// Write `value` bare if it reads back as a bareword, quoted otherwise.
///
/// Unquoted labels must also start like a key.
fn format_value(value: &str, quoted: bool, label: bool) -> String {
    let bare = !quoted
        && value
            .chars()
            .next()
            .is_some_and(|ch| !label || is_key_start(Code::Char(ch)))
        && value.chars().all(|ch| is_bareword(Code::Char(ch)));

    if bare {
        value.to_owned()
    } else {
        quote(value)
    }
}

/// Quote with `"` unless the value holds `"` and no `'`.
fn quote(value: &str) -> String {
    if value.contains('"') && !value.contains('\'') {
        format!("'{value}'")
    } else {
        format!("\"{value}\"")
    }
}

fn format_attribute(attr: &Attribute) -> String {
    let shortcut = |marker: char| -> Option<String> {
        let value = attr.value.as_deref()?;
        let valid = !value.is_empty() && value.chars().all(|ch| is_shortcut(Code::Char(ch)));
        valid.then(|| format!("{marker}{value}"))
    };

    let short = match attr.form {
        AttributeForm::Id => shortcut('#'),
        AttributeForm::Class => shortcut('.'),
        AttributeForm::Name => None,
    };

    short.unwrap_or_else(|| match &attr.value {
        Some(value) => format!("{}={}", attr.name, quote(value)),
        None => attr.name.clone(),
    })
}
