use super::{Enum, Model};
use crate::Result;
use serde::Deserialize;
use std::str::FromStr;

/// Root of a parsed schema: every model and enum it declares.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<Model>,

    #[serde(default)]
    pub enums: Vec<Enum>,
}

impl Datamodel {
    /// Load a datamodel from a JSON document
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn enum_def(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }
}

impl FromStr for Datamodel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}
