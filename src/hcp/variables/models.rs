//! Variable data models

use serde::Deserialize;

use crate::config::vars;
use crate::error::{Result, TfeError};
use crate::hcp::traits::TfeResource;

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    /// Absent for sensitive variables
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub hcl: bool,
    #[serde(default)]
    pub sensitive: bool,
}

impl Variable {
    pub fn value(&self) -> Option<&str> {
        self.attributes.value.as_deref()
    }
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}

/// Key and value of a Terraform variable to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSpec {
    pub key: String,
    pub value: String,
}

impl VariableSpec {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parse `key:value`, splitting on the first `:` so that values may
    /// contain colons
    pub fn parse(input: &str) -> Result<Self> {
        match input.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok(Self::new(key.trim(), value))
            }
            Some(_) => Err(TfeError::Input(format!(
                "Variable '{}' has an empty key",
                input
            ))),
            None => Err(TfeError::Input(format!(
                "Variable '{}' must be given as key:value",
                input
            ))),
        }
    }

    /// JSON:API attributes sent on create and update
    ///
    /// Always a plain, non-sensitive Terraform variable.
    pub fn attributes(&self) -> serde_json::Value {
        serde_json::json!({
            "key": self.key,
            "value": self.value,
            "category": vars::CATEGORY,
            "hcl": false,
            "sensitive": false
        })
    }
}

/// What writing a variable did
#[derive(Debug)]
pub enum SetVarOutcome {
    /// The key was new to the workspace
    Created(Variable),
    /// The key existed and its value was replaced
    Updated(Variable),
    /// The workspace reference did not resolve
    WorkspaceNotFound,
}
