//! The fixed set of categories an expense can be filed under.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// The category assigned to an expense record.
///
/// The set is fixed, there is no facility for user-defined categories. The
/// same enum populates the form's select widget and validates submitted
/// values, so the list cannot drift between presentation and validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Category {
    /// Groceries and eating out. The default for new expenses.
    #[default]
    Food,
    /// Fares, fuel and vehicle costs.
    Transport,
    /// Rent, utilities and other recurring charges.
    Bills,
    /// Leisure spending.
    Entertainment,
    /// Money received. Recorded like any other amount and summed positively.
    Income,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// Every category, in the order the select widget lists them.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Entertainment,
        Category::Income,
        Category::Other,
    ];

    /// The canonical name, as stored in the database and submitted by the
    /// form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }

    /// The text shown for this category in the select widget.
    pub fn label(self) -> &'static str {
        match self {
            Category::Income => "Income (Negative Expense)",
            category => category.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "Food" => Ok(Category::Food),
            "Transport" => Ok(Category::Transport),
            "Bills" => Ok(Category::Bills),
            "Entertainment" => Ok(Category::Entertainment),
            "Income" => Ok(Category::Income),
            "Other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(string.to_owned())),
        }
    }
}
