//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(
    default_command,
    Vec<String>,
    vec![
        "cargo".to_string(),
        "run".to_string(),
        "--".to_string(),
        "--apps".to_string(),
    ]
);
default_fn!(
    default_document,
    std::path::PathBuf,
    std::path::PathBuf::from(crate::paths::DOCUMENT_FILE)
);
default_fn!(default_marker, Option<String>, Some("apps".to_string()));
default_fn!(
    default_label,
    String,
    crate::check::DEFAULT_LABEL.to_string()
);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Which part of the document holds the application list.
///
/// Exactly one of `marker` and `heading` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegionConfig {
    /// Value of the `type` attribute of the `<a>` anchors around the list
    #[serde(default)]
    pub marker: Option<String>,
    /// Text of the heading whose section contains the list
    #[serde(default)]
    pub heading: Option<String>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            heading: None,
        }
    }
}
