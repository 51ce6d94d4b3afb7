use super::definition::ProcessModel;
use super::outline::ProcessOutline;
use crate::error::DocumentError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, DocumentError> {
    let content = fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    parse_document(&content)
}

fn parse_document<T: DeserializeOwned>(json: &str) -> Result<T, DocumentError> {
    serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))
}

fn write_document<T: Serialize>(value: &T, path: &str) -> Result<(), DocumentError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| DocumentError::Serialize(e.to_string()))?;
    fs::write(path, json).map_err(|e| DocumentError::Write {
        path: path.to_string(),
        message: e.to_string(),
    })
}

impl ProcessModel {
    /// Parse a model from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        parse_document(json)
    }

    /// Load a model from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        read_document(path)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Save the model as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        write_document(self, path)
    }
}

impl ProcessOutline {
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        parse_document(json)
    }

    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        read_document(path)
    }
}
