// Rule annotation parsing

use std::fmt;

/// The closed set of rules the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    Min,
    Max,
    Email,
    Password,
    Confirm,
    Gt,
    FileRequired,
    FileTypes,
    FileMaxSize,
    /// Any other name. Evaluates as a pass.
    Unknown,
}

impl RuleKind {
    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Self {
        match name {
            "required" => RuleKind::Required,
            "min" => RuleKind::Min,
            "max" => RuleKind::Max,
            "email" => RuleKind::Email,
            "password" => RuleKind::Password,
            "confirm" => RuleKind::Confirm,
            "gt" => RuleKind::Gt,
            "file_required" => RuleKind::FileRequired,
            "file_types" => RuleKind::FileTypes,
            "file_max_size" => RuleKind::FileMaxSize,
            _ => RuleKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::Email => "email",
            RuleKind::Password => "password",
            RuleKind::Confirm => "confirm",
            RuleKind::Gt => "gt",
            RuleKind::FileRequired => "file_required",
            RuleKind::FileTypes => "file_types",
            RuleKind::FileMaxSize => "file_max_size",
            RuleKind::Unknown => "unknown",
        }
    }
}

/// One parsed token of an annotation, e.g. `min=7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    pub kind: RuleKind,
    /// Name as written, before the first `=`
    pub name: &'a str,
    /// Text after the first `=`, empty if there was none
    pub param: &'a str,
    /// The whole trimmed token, used in parameter error messages
    pub raw: &'a str,
}

impl<'a> Rule<'a> {
    /// Parse one token. Never fails; unknown names become [`RuleKind::Unknown`].
    pub fn parse(token: &'a str) -> Self {
        let raw = token.trim();
        let (name, param) = raw.split_once('=').unwrap_or((raw, ""));
        Self {
            kind: RuleKind::from_name(name),
            name,
            param,
            raw,
        }
    }
}

impl fmt::Display for Rule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Marker token splitting container rules from element rules.
pub const DIVE: &str = "dive";

/// The rules attached to one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet<'a> {
    /// Rules for the field itself (or the whole sequence when diving)
    pub container: Vec<Rule<'a>>,
    /// Whether a `dive` token was present
    pub dive: bool,
    /// Rules applied to every element after `dive`
    pub elements: Vec<Rule<'a>>,
}

impl<'a> RuleSet<'a> {
    /// Parse a raw annotation such as `"required,gt=0,dive,min=2"`.
    ///
    /// Tokens are comma separated and trimmed; empty tokens are dropped.
    /// Only the first `dive` splits the list.
    pub fn parse(annotation: &'a str) -> Self {
        let mut set = RuleSet::default();

        for token in annotation.split(',').map(str::trim) {
            if token.is_empty() {
                continue;
            }
            if !set.dive && token == DIVE {
                set.dive = true;
                continue;
            }
            let rule = Rule::parse(token);
            if set.dive {
                set.elements.push(rule);
            } else {
                set.container.push(rule);
            }
        }

        set
    }

    pub fn is_empty(&self) -> bool {
        !self.dive && self.container.is_empty()
    }
}
