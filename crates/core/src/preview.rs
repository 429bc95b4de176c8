//! Synthesis of the preview command the finder runs for the highlighted candidate.
//!
//! The finder substitutes `{1}` and `{2}` with the first two whitespace fields of
//! the candidate line (name and parenthesised section) and runs the result with
//! `sh -c` each time the highlight moves. Each run is a fresh shell, nothing is
//! shared between runs.
//!
//! There are exactly four pipelines, one per [`PreviewVariant`]. They are `leon`
//! templates whose keys are filled with program names, the width expression and
//! the finder placeholders. Template sources must not contain braces other than
//! the keys themselves, and backslashes are doubled for leon.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::capabilities::CapabilitySet;
use crate::collaborators::Collaborators;
use crate::config::PreviewWidth;
use crate::error::Result;
use crate::interpolation::interpolate;
use crate::session::DisplayMode;

/// Finder placeholder for the candidate's first field.
pub const NAME_PLACEHOLDER: &str = "{1}";
/// Finder placeholder for the candidate's second field.
pub const SECTION_PLACEHOLDER: &str = "{2}";

/// `printf '%s\n' <word>`, which prints captured text verbatim where `echo` would
/// interpret backslashes. Leon unescapes the doubled backslash.
macro_rules! print_line {
    ($word:literal) => {
        concat!("printf '%s\\\\n' ", $word)
    };
}

macro_rules! fields {
    () => {
        concat!(
            "name=$(",
            print_line!("{name_field}"),
            " | sed 's/[[:space:]]*$//'); section=$(",
            print_line!("{section_field}"),
            " | tr -d '()'); "
        )
    };
}

macro_rules! manual {
    () => {
        "manual=$(MANPAGER=cat MANWIDTH={width} {renderer} $section \"$name\" 2>/dev/null | {column_filter}); "
    };
}

macro_rules! examples {
    () => {
        "examples=$({example_provider} \"$name\" 2>/dev/null); "
    };
}

macro_rules! two_blocks {
    () => {
        concat!(
            "( echo 'TLDR EXAMPLES'; echo '============='; if [ -n \"$examples\" ]; then ",
            print_line!("\"$examples\""),
            "; else ",
            print_line!("\"No tldr examples available for $name\""),
            "; fi; echo; echo 'MANPAGE'; echo '======='; if [ -n \"$manual\" ]; then ",
            print_line!("\"$manual\""),
            "; else ",
            print_line!("\"Manual page unavailable for $name\""),
            "; fi )"
        )
    };
}

macro_rules! highlight {
    () => {
        " | {highlighter} --language man --style plain --color always --paging never"
    };
}

macro_rules! unavailable {
    () => {
        print_line!("\"Preview unavailable for command: $name\"")
    };
}

const HIGHLIGHTED_EXAMPLES: &str = concat!(
    fields!(),
    examples!(),
    manual!(),
    "if [ -z \"$examples\" ] && [ -z \"$manual\" ]; then ",
    unavailable!(),
    "; else ",
    two_blocks!(),
    highlight!(),
    "; fi"
);

const PLAIN_EXAMPLES: &str = concat!(
    fields!(),
    examples!(),
    manual!(),
    "if [ -z \"$examples\" ] && [ -z \"$manual\" ]; then ",
    unavailable!(),
    "; else ",
    two_blocks!(),
    "; fi"
);

const HIGHLIGHTED_MANUAL: &str = concat!(
    fields!(),
    manual!(),
    "if [ -z \"$manual\" ]; then ",
    unavailable!(),
    "; else ",
    print_line!("\"$manual\""),
    highlight!(),
    "; fi"
);

const PLAIN_MANUAL: &str = concat!(
    fields!(),
    manual!(),
    "if [ -z \"$manual\" ]; then ",
    unavailable!(),
    "; else ",
    print_line!("\"$manual\""),
    "; fi"
);

/// The closed set of preview pipelines, keyed by display mode and highlighter presence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PreviewVariant {
    HighlightedExamples,
    PlainExamples,
    HighlightedManual,
    PlainManual,
}

impl PreviewVariant {
    #[must_use]
    pub fn select(mode: DisplayMode, has_highlighter: bool) -> Self {
        match (mode, has_highlighter) {
            (DisplayMode::ExamplesOn, true) => PreviewVariant::HighlightedExamples,
            (DisplayMode::ExamplesOn, false) => PreviewVariant::PlainExamples,
            (DisplayMode::ExamplesOff, true) => PreviewVariant::HighlightedManual,
            (DisplayMode::ExamplesOff, false) => PreviewVariant::PlainManual,
        }
    }

    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            PreviewVariant::HighlightedExamples => HIGHLIGHTED_EXAMPLES,
            PreviewVariant::PlainExamples => PLAIN_EXAMPLES,
            PreviewVariant::HighlightedManual => HIGHLIGHTED_MANUAL,
            PreviewVariant::PlainManual => PLAIN_MANUAL,
        }
    }
}

/// A ready-to-run preview command. Built once and never changed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PreviewPipeline {
    variant: PreviewVariant,
    command: String,
}

impl PreviewPipeline {
    /// Builds the preview command for a display mode and capability set.
    ///
    /// The mode is re-checked against the capabilities, so examples are never
    /// requested from a provider that does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be rendered, which only happens
    /// if a template references a key missing from the context.
    pub fn build(
        mode: DisplayMode,
        capabilities: &CapabilitySet,
        width: PreviewWidth,
        collaborators: &Collaborators,
    ) -> Result<Self> {
        let mode = mode.effective(capabilities);
        let variant = PreviewVariant::select(mode, capabilities.has_highlighter());

        let context: HashMap<String, String> = [
            ("name_field", NAME_PLACEHOLDER.to_string()),
            ("section_field", SECTION_PLACEHOLDER.to_string()),
            ("width", width.to_string()),
            ("renderer", collaborators.renderer.clone()),
            ("column_filter", collaborators.column_filter.clone()),
            (
                "highlighter",
                capabilities.highlighter.clone().unwrap_or_default(),
            ),
            (
                "example_provider",
                capabilities.example_provider.clone().unwrap_or_default(),
            ),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();

        let command = interpolate(variant.template(), &context)?;
        debug!("Preview variant {:?}: {}", variant, command);

        Ok(Self { variant, command })
    }

    #[must_use]
    pub fn variant(&self) -> PreviewVariant {
        self.variant
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.command
    }
}

impl Display for PreviewPipeline {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.command)
    }
}
