use serde::{Deserialize, Serialize};
use std::fmt;

/// Department tag carried by every employee record.
///
/// Tags are matched case-sensitively; anything outside the known set is kept
/// verbatim in `Unrecognized` so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Division {
    Hr,
    Engineering,
    Finance,
    Marketing,
    Unrecognized(String),
}

impl Division {
    /// Tag as it appears on the wire and in the UI
    pub fn label(&self) -> &str {
        match self {
            Division::Hr => "HR",
            Division::Engineering => "Engineering",
            Division::Finance => "Finance",
            Division::Marketing => "Marketing",
            Division::Unrecognized(raw) => raw,
        }
    }

    /// Known divisions, in menu order
    pub fn known() -> [Division; 4] {
        [
            Division::Hr,
            Division::Engineering,
            Division::Finance,
            Division::Marketing,
        ]
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "HR" => Division::Hr,
            "Engineering" => Division::Engineering,
            "Finance" => Division::Finance,
            "Marketing" => Division::Marketing,
            other => Division::Unrecognized(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Division::Unrecognized(_))
    }
}

impl From<String> for Division {
    fn from(value: String) -> Self {
        match Division::from_label(&value) {
            Division::Unrecognized(_) => Division::Unrecognized(value),
            known => known,
        }
    }
}

impl From<Division> for String {
    fn from(value: Division) -> Self {
        match value {
            Division::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selection of the division filter on the employee list.
///
/// Only the closed set of labels below is a legal selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DivisionFilter {
    #[default]
    All,
    Hr,
    Engineering,
    Finance,
    Marketing,
}

impl DivisionFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &'static str {
        match self {
            DivisionFilter::All => Self::ALL_LABEL,
            DivisionFilter::Hr => "HR",
            DivisionFilter::Engineering => "Engineering",
            DivisionFilter::Finance => "Finance",
            DivisionFilter::Marketing => "Marketing",
        }
    }

    /// Every selectable option, "All" first
    pub fn options() -> [DivisionFilter; 5] {
        [
            DivisionFilter::All,
            DivisionFilter::Hr,
            DivisionFilter::Engineering,
            DivisionFilter::Finance,
            DivisionFilter::Marketing,
        ]
    }

    /// Parse a label from the filter menu. Labels outside the menu yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::options().into_iter().find(|f| f.label() == label)
    }

    pub fn matches(&self, division: &Division) -> bool {
        match self {
            DivisionFilter::All => true,
            DivisionFilter::Hr => *division == Division::Hr,
            DivisionFilter::Engineering => *division == Division::Engineering,
            DivisionFilter::Finance => *division == Division::Finance,
            DivisionFilter::Marketing => *division == Division::Marketing,
        }
    }
}

impl fmt::Display for DivisionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_labels_are_case_sensitive() {
        assert_eq!(Division::from_label("HR"), Division::Hr);
        assert_eq!(
            Division::from_label("hr"),
            Division::Unrecognized("hr".to_string())
        );
        assert!(!Division::from_label("Sales").is_known());
    }

    #[test]
    fn test_division_serde_keeps_raw_tag() {
        let parsed: Vec<Division> =
            serde_json::from_str(r#"["Finance","Legal"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Division::Finance, Division::Unrecognized("Legal".to_string())]
        );
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"["Finance","Legal"]"#
        );
    }

    #[test]
    fn test_filter_labels_form_closed_set() {
        let labels: Vec<&str> = DivisionFilter::options().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "HR", "Engineering", "Finance", "Marketing"]);
        assert_eq!(DivisionFilter::from_label("Marketing"), Some(DivisionFilter::Marketing));
        assert_eq!(DivisionFilter::from_label("marketing"), None);
        assert_eq!(DivisionFilter::from_label("Legal"), None);
        assert_eq!(DivisionFilter::default(), DivisionFilter::All);
    }

    #[test]
    fn test_unrecognized_division_matches_only_all() {
        let odd = Division::Unrecognized("Legal".to_string());
        for filter in DivisionFilter::options() {
            assert_eq!(filter.matches(&odd), filter == DivisionFilter::All);
        }
    }
}
