use serde::{Deserialize, Serialize};

/// One choice in a select: a display label and the value it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label
    pub name: String,
    /// Identifier reported in change events
    pub value: String,
}

impl SelectOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// An option whose label doubles as its value.
    pub fn plain(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            name: label,
        }
    }

    /// Build options from labels that double as values.
    pub fn from_labels<I, S>(labels: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().map(Self::plain).collect()
    }
}

impl<N, V> From<(N, V)> for SelectOption
where
    N: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}
