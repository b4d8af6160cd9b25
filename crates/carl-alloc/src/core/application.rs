use serde::Serialize;

/// Stores application capacity: the constant maximum and the remaining amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    pub current: u32,
    pub max: u32,
}

impl Application {
    /// Creates an application at full capacity.
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }
}
