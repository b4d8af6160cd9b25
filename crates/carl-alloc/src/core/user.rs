use serde::Serialize;

/// A roster entry: user name plus the ordered list of preinstalled
/// applications, tried in order before any fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub name: String,
    pub preinstalled: Vec<String>,
}

impl User {
    pub fn new(name: &str, preinstalled: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            preinstalled: preinstalled.iter().map(|app| app.to_string()).collect(),
        }
    }
}
