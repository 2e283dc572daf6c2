//! Pure data model for known-answer suites.
//! No dependency on the rest of the framework.

use ciphra::api::Padding;
use serde::Deserialize;

/// Expected outcome of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expect {
    #[default]
    Valid,
    Invalid,
}

/// One plaintext/ciphertext pair
#[derive(Debug, Clone, Deserialize)]
pub struct KatCase {
    pub id: u32,
    #[serde(default)]
    pub description: Option<String>,
    /// Hex plaintext; may be omitted by decrypt-only invalid cases
    #[serde(default)]
    pub pt: String,
    /// Hex ciphertext
    pub ct: String,
    /// Overrides the group IV
    #[serde(default)]
    pub iv: Option<String>,
    #[serde(default)]
    pub expect: Expect,
    /// `Error::kind()` an invalid case must produce
    #[serde(default)]
    pub error: Option<String>,
}

/// Cases sharing an algorithm and key
#[derive(Debug, Clone, Deserialize)]
pub struct KatGroup {
    pub algorithm: String,
    pub key: String,
    #[serde(default)]
    pub iv: String,
    #[serde(default)]
    pub padding: Padding,
    pub tests: Vec<KatCase>,
}

/// A whole suite file
#[derive(Debug, Clone, Deserialize)]
pub struct KatSuite {
    pub name: String,
    /// Where the vectors come from
    #[serde(default)]
    pub source: Option<String>,
    pub groups: Vec<KatGroup>,
}

impl KatSuite {
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.tests.len()).sum()
    }
}
