use std::fmt;

/// Labels for every numeric input the entities accept.
///
/// Used to tell the user *which* value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    N,
    Abscissa,
    Ordinate,
    Width,
    Height,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::N => "n",
            Field::Abscissa => "Abscissa",
            Field::Ordinate => "Ordinate",
            Field::Width => "Width",
            Field::Height => "Height",
        }
    }

    /// How the field is named inside a parse error message.
    pub(crate) fn describe(self) -> String {
        match self {
            Field::Abscissa | Field::Ordinate => format!("{} coordinate", self.label()),
            Field::Width | Field::Height => format!("{} dimension value", self.label()),
            Field::Age | Field::N => format!("{} value", self.label()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
