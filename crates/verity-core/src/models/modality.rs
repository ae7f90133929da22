use std::fmt;

use serde::{Deserialize, Serialize};

/// One analysis channel for a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Visual,
    Audio,
    Text,
    Metadata,
    /// The cross-modal combination step itself.
    Fusion,
}

impl Modality {
    /// All modalities that carry their own detector model.
    pub const DETECTION: [Modality; 4] = [
        Modality::Visual,
        Modality::Audio,
        Modality::Text,
        Modality::Metadata,
    ];
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modality::Visual => "visual",
            Modality::Audio => "audio",
            Modality::Text => "text",
            Modality::Metadata => "metadata",
            Modality::Fusion => "fusion",
        };
        write!(f, "{s}")
    }
}
