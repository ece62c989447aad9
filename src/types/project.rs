use serde::Deserialize;

/// Attributes of a Snyk project resource. Only the name is kept.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
}
