use serde::{Deserialize, Serialize};

/// Actions on an order that need more than a server's default rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Mark a line as not billable (kitchen mistake, wrong order).
    Void,
    /// Mark a line as complimentary.
    Comp,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Void => "void",
            Capability::Comp => "comp",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
