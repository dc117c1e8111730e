// Locator - describes which page element(s) an action targets
//
// A locator is a (kind, value, filters) triple. It is immutable once built
// and carries no reference to the document: the backend resolves it against
// the *current* page state every time `Backend::find` is called, which is
// what makes retrying safe after a re-render.

use serde::Serialize;
use std::fmt;

/// Category of element an action targets.
///
/// Each facade operation locates exactly one kind; the backend maps the kind
/// plus the textual value (id, name, label, visible text, value attribute)
/// to its own query mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// A link or a button, whichever matches
    LinkOrButton,
    /// An anchor element
    Link,
    /// A button element or input of a button type
    Button,
    /// A text input, textarea, or other fillable control
    FillableField,
    /// A radio button
    RadioButton,
    /// A checkbox
    Checkbox,
    /// A select box
    Select,
    /// An option within a select box
    Option,
    /// A file input
    FileField,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::LinkOrButton => "link or button",
            TargetKind::Link => "link",
            TargetKind::Button => "button",
            TargetKind::FillableField => "field",
            TargetKind::RadioButton => "radio button",
            TargetKind::Checkbox => "checkbox",
            TargetKind::Select => "select box",
            TargetKind::Option => "option",
            TargetKind::FileField => "file field",
        };
        f.write_str(name)
    }
}

/// Kind-specific constraints narrowing a lookup.
///
/// Filters travel with the locator down to the backend. They never include
/// the `from` key used by `select`/`unselect` to pick the enclosing select
/// box; the facade consumes that key before building the option locator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filters {
    /// Require the matched link's href to equal this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Match the locator value exactly rather than by substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

impl Filters {
    /// Returns true when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.href.is_none() && self.exact.is_none()
    }

    /// Convert filters to JSON for transmission to a driver.
    pub fn to_json(&self) -> serde_json::Value {
        let mut json = serde_json::json!({});
        if let Some(href) = &self.href {
            json["href"] = serde_json::json!(href);
        }
        if let Some(exact) = self.exact {
            json["exact"] = serde_json::json!(exact);
        }
        json
    }
}

/// Locator identifies which page element(s) an action targets.
///
/// Locators are lazy: building one performs no query. The backend resolves
/// it when an action runs, and the synchronizer re-resolves it on every
/// retry attempt so a handle is never reused across attempts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Locator {
    /// Category of element to match
    pub kind: TargetKind,
    /// Text matched against id, name, label, visible text, or value
    pub value: String,
    /// Kind-specific constraints
    pub filters: Filters,
}

impl Locator {
    /// Creates a locator with no filters.
    pub fn new(kind: TargetKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            filters: Filters::default(),
        }
    }

    /// Creates a locator with the given filters.
    pub fn with_filters(kind: TargetKind, value: impl Into<String>, filters: Filters) -> Self {
        Self {
            kind,
            value: value.into(),
            filters,
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_value(TargetKind::LinkOrButton).unwrap();
        assert_eq!(json, "link-or-button");
        let json = serde_json::to_value(TargetKind::FileField).unwrap();
        assert_eq!(json, "file-field");
    }

    #[test]
    fn filters_to_json_omits_unset_keys() {
        let filters = Filters {
            href: Some("/about".to_string()),
            exact: None,
        };
        let json = filters.to_json();
        assert_eq!(json["href"], "/about");
        assert!(json.get("exact").is_none());
    }

    #[test]
    fn empty_filters() {
        assert!(Filters::default().is_empty());
        assert!(
            !Filters {
                exact: Some(true),
                ..Filters::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn locator_display_names_kind_and_value() {
        let locator = Locator::new(TargetKind::Checkbox, "Terms of Service");
        assert_eq!(locator.to_string(), "checkbox 'Terms of Service'");
    }
}
