//! Error types for sidenav-core
//!
//! Missing page elements are not errors: they are collected in an [`InitReport`]
//! so the controller can degrade to "feature does nothing".

use crate::registry::Role;
use thiserror::Error;

/// Core error type for sidenav operations
#[derive(Error, Debug)]
pub enum SidebarError {
    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to parse sidebar config")]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Page Errors
    // ===================
    #[error("{role} not found ({lookup})")]
    MissingElement { role: Role, lookup: String },

    #[error("No navigation link at index {index}")]
    UnknownLink { index: usize },

    #[error("DOM error: {message}")]
    Dom { message: String },
}

/// Severity level for issues found while binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Behavior still bound, something looks off
    Warning,
    /// Behavior skipped
    Error,
}

/// Individual entry in an init report
#[derive(Debug, Clone)]
pub struct InitIssue {
    pub role: Option<Role>,
    pub message: String,
    pub severity: IssueSeverity,
    /// Actionable suggestion for the template author (optional)
    pub suggestion: Option<String>,
}

impl InitIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            role: None,
            message: message.into(),
            severity: IssueSeverity::Warning,
            suggestion: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            role: None,
            message: message.into(),
            severity: IssueSeverity::Error,
            suggestion: None,
        }
    }

    /// Add an actionable suggestion to this issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Issue for a role whose element could not be resolved
    pub fn missing(role: Role, lookup: &str) -> Self {
        let error = SidebarError::MissingElement {
            role,
            lookup: lookup.to_string(),
        };
        let suggestion = match role {
            Role::NavLogoLabel => format!("Add an element with {lookup} inside the nav panel"),
            _ => format!("Add an element with {lookup} to the page"),
        };
        Self {
            role: Some(role),
            message: error.to_string(),
            severity: IssueSeverity::Error,
            suggestion: Some(suggestion),
        }
    }
}

/// Report of what `initialize` managed to bind
///
/// Tracks skipped behaviors instead of failing on a partial page.
#[derive(Debug, Default)]
pub struct InitReport {
    pub issues: Vec<InitIssue>,
    pub toggle_bound: bool,
    pub links_tracked: usize,
}

impl InitReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_issue(&mut self, issue: InitIssue) {
        self.issues.push(issue);
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.issues.push(InitIssue::warning(message));
    }

    /// Returns true if anything was reported (including warnings)
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Roles that could not be resolved, in report order
    pub fn missing_roles(&self) -> Vec<Role> {
        self.issues.iter().filter_map(|i| i.role).collect()
    }

    /// Returns only warnings
    pub fn warnings(&self) -> impl Iterator<Item = &InitIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_issue_carries_role_and_suggestion() {
        let issue = InitIssue::missing(Role::NavPanel, "id=\"nav-bar\"");
        assert_eq!(issue.role, Some(Role::NavPanel));
        assert_eq!(issue.severity, IssueSeverity::Error);
        assert!(issue.message.contains("nav-bar"));
        assert!(issue.suggestion.unwrap().contains("to the page"));
    }

    #[test]
    fn test_report_missing_roles_and_warnings() {
        let mut report = InitReport::new();
        assert!(!report.has_issues());

        report.add_issue(InitIssue::missing(Role::BodyRegion, "id=\"body-pd\""));
        report.add_warning("no navigation links found");
        report.add_issue(InitIssue::missing(Role::HeaderRegion, "id=\"header\""));

        assert!(report.has_issues());
        assert_eq!(
            report.missing_roles(),
            vec![Role::BodyRegion, Role::HeaderRegion]
        );
        assert_eq!(report.warnings().count(), 1);
    }
}
