use std::fmt::{Display, Formatter};

/// The manual page to display: a name and an optional section.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ManualTarget {
    pub name: String,
    /// Bare section identifier such as `1` or `3p`. Empty lets the renderer pick.
    pub section: String,
}

impl ManualTarget {
    #[must_use]
    pub fn new(name: &str, section: &str) -> Self {
        Self {
            name: name.to_string(),
            section: section.to_string(),
        }
    }

    /// Section to pass to the renderer, `None` when it should be omitted.
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        if self.section.is_empty() {
            None
        } else {
            Some(&self.section)
        }
    }
}

impl Display for ManualTarget {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.section() {
            Some(section) => write!(formatter, "{}({})", self.name, section),
            None => formatter.write_str(&self.name),
        }
    }
}

/// Parses the line the finder printed for the chosen candidate.
///
/// The first field is the name and the second, stripped of its parentheses, is
/// the section. An empty line means the user left without choosing.
#[must_use]
pub fn parse(line: &str) -> Option<ManualTarget> {
    let mut fields = line.split_whitespace();
    let name = fields.next()?;
    let section = fields
        .next()
        .map(|field| field.trim_start_matches('(').trim_end_matches(')'))
        .unwrap_or_default();

    Some(ManualTarget::new(name, section))
}
