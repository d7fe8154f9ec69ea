use std::{fmt, str::FromStr};
use thiserror::Error;

/// The fixed set of categories an expense can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Other,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CategoryError {
    #[error("'{0}' is not a known category")]
    UnknownCategory(String),
}

impl Category {
    /// Every category, in the order they are offered for selection
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match *self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| CategoryError::UnknownCategory(s.into()))
    }
}
