use crate::error::Error;
use serde::Deserialize;
use serde::Serialize;

/// One step of a test file: the command name plus the two argument columns
/// of the runner's table format.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Step {
    pub command: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TestFile {
    #[serde(default)]
    pub name: String,
    pub steps: Vec<Step>,
}

impl TestFile {
    pub fn from_yaml(input: &str) -> Result<TestFile, Error> {
        serde_yaml::from_str(input).map_err(|e| Error::ConfigError(e.to_string()))
    }

    pub fn from_json(input: &str) -> Result<TestFile, Error> {
        serde_json::from_str(input).map_err(|e| Error::ConfigError(e.to_string()))
    }
}
