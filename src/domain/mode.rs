use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// The learning modes a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningMode {
    /// Structured prose explanation.
    Explanation,
    /// Executable Python example.
    Code,
    /// Mental model plus a Mermaid diagram.
    Visual,
}

impl LearningMode {
    /// All available modes in menu order.
    pub const ALL: [LearningMode; 3] =
        [LearningMode::Explanation, LearningMode::Code, LearningMode::Visual];

    /// Stable identifier used for template lookup and logs.
    pub fn id(&self) -> &'static str {
        match self {
            LearningMode::Explanation => "explanation",
            LearningMode::Code => "code",
            LearningMode::Visual => "visual",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            LearningMode::Explanation => "Text Explanation",
            LearningMode::Code => "Code Generation",
            LearningMode::Visual => "Visual Learning",
        }
    }
}

impl fmt::Display for LearningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Explanation depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ExplanationDepth {
    Brief,
    #[default]
    Moderate,
    Comprehensive,
}

impl ExplanationDepth {
    pub const ALL: [ExplanationDepth; 3] =
        [ExplanationDepth::Brief, ExplanationDepth::Moderate, ExplanationDepth::Comprehensive];

    pub fn label(&self) -> &'static str {
        match self {
            ExplanationDepth::Brief => "Brief",
            ExplanationDepth::Moderate => "Moderate",
            ExplanationDepth::Comprehensive => "Comprehensive",
        }
    }
}

impl fmt::Display for ExplanationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExplanationDepth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::label, "explanation depth")
    }
}

/// Code example complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CodeComplexity {
    Simple,
    #[default]
    Moderate,
    Advanced,
}

impl CodeComplexity {
    pub const ALL: [CodeComplexity; 3] =
        [CodeComplexity::Simple, CodeComplexity::Moderate, CodeComplexity::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            CodeComplexity::Simple => "Simple",
            CodeComplexity::Moderate => "Moderate",
            CodeComplexity::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for CodeComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CodeComplexity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::label, "code complexity")
    }
}

/// A mode together with the option that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeRequest {
    Explanation(ExplanationDepth),
    Code(CodeComplexity),
    Visual,
}

impl ModeRequest {
    /// The request for `mode` with its default option.
    pub fn with_defaults(mode: LearningMode) -> Self {
        match mode {
            LearningMode::Explanation => ModeRequest::Explanation(ExplanationDepth::default()),
            LearningMode::Code => ModeRequest::Code(CodeComplexity::default()),
            LearningMode::Visual => ModeRequest::Visual,
        }
    }

    pub fn mode(&self) -> LearningMode {
        match self {
            ModeRequest::Explanation(_) => LearningMode::Explanation,
            ModeRequest::Code(_) => LearningMode::Code,
            ModeRequest::Visual => LearningMode::Visual,
        }
    }

    /// Label of the selected option, if the mode has one.
    pub fn option_label(&self) -> Option<&'static str> {
        match self {
            ModeRequest::Explanation(depth) => Some(depth.label()),
            ModeRequest::Code(complexity) => Some(complexity.label()),
            ModeRequest::Visual => None,
        }
    }
}

fn parse_label<T: Copy>(
    value: &str,
    all: &[T],
    label: fn(&T) -> &'static str,
    what: &str,
) -> Result<T, AppError> {
    let expected = || all.iter().map(|item| label(item).to_lowercase()).collect::<Vec<_>>();
    all.iter().copied().find(|item| label(item).eq_ignore_ascii_case(value.trim())).ok_or_else(
        || AppError::InvalidOption {
            mode: what.to_string(),
            value: value.to_string(),
            expected: expected().join(", "),
        },
    )
}
