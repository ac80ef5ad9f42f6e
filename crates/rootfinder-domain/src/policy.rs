//! Policy module - the fundamental unit of a genealogy corpus

use chrono::Datelike;
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for a policy (e.g. `ARG_AGUINALDO_1945`)
///
/// Identifiers come from the corpus as opaque strings; no format is imposed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyId(String);

impl PolicyId {
    /// Create a new PolicyId
    ///
    /// # Examples
    ///
    /// ```
    /// use rootfinder_domain::PolicyId;
    ///
    /// let id = PolicyId::new("ARG_AGUINALDO_1945");
    /// assert_eq!(id.as_str(), "ARG_AGUINALDO_1945");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolicyId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PolicyId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::borrow::Borrow<str> for PolicyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Current calendar year (UTC)
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// A policy with its genealogical metadata
///
/// Field ranges are not validated: a terminated year earlier than the
/// creation year is a data-quality defect that flows through as a negative
/// survival span.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,

    /// Display name
    pub name: String,

    /// Year the policy was enacted
    pub year_created: i32,

    /// Year the policy ended (None = still active)
    pub year_terminated: Option<i32>,

    /// Direct parent in the genealogy (None = root policy)
    pub parent_id: Option<PolicyId>,

    /// Free-text category (e.g. "Labor", "Economic")
    pub policy_type: String,

    /// Government that enacted the policy
    pub government: String,

    /// Ideology label (e.g. "Populist", "Liberal"); empty = unspecified
    pub ideology: String,

    /// Structured component data, if any
    pub components: BTreeMap<String, String>,
}

impl Policy {
    /// Create a new root policy with no parent and no termination year
    ///
    /// # Examples
    ///
    /// ```
    /// use rootfinder_domain::Policy;
    ///
    /// let policy = Policy::new("ARG_AGUINALDO_1945", "Aguinaldo", 1945)
    ///     .with_ideology("Populist");
    /// assert!(policy.is_active());
    /// assert_eq!(policy.survival_years_at(2025), 80);
    /// ```
    pub fn new(id: impl Into<PolicyId>, name: impl Into<String>, year_created: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year_created,
            year_terminated: None,
            parent_id: None,
            policy_type: String::new(),
            government: String::new(),
            ideology: String::new(),
            components: BTreeMap::new(),
        }
    }

    /// Set the parent policy
    pub fn with_parent(mut self, parent_id: impl Into<PolicyId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set the termination year
    pub fn terminated_in(mut self, year: i32) -> Self {
        self.year_terminated = Some(year);
        self
    }

    /// Set the policy type
    pub fn with_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = policy_type.into();
        self
    }

    /// Set the government label
    pub fn with_government(mut self, government: impl Into<String>) -> Self {
        self.government = government.into();
        self
    }

    /// Set the ideology label
    pub fn with_ideology(mut self, ideology: impl Into<String>) -> Self {
        self.ideology = ideology.into();
        self
    }

    /// Whether the policy is still in force
    pub fn is_active(&self) -> bool {
        self.year_terminated.is_none()
    }

    /// Years in force, measured against `reference_year` when still active
    pub fn survival_years_at(&self, reference_year: i32) -> i32 {
        self.year_terminated.unwrap_or(reference_year) - self.year_created
    }

    /// Years in force, measured against the current year when still active
    pub fn survival_years(&self) -> i32 {
        self.survival_years_at(current_year())
    }

    /// Whether this policy names `id` as its direct parent
    pub fn is_child_of(&self, id: &PolicyId) -> bool {
        self.parent_id.as_ref() == Some(id)
    }
}
