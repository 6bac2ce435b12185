use serde::{Deserialize, Serialize};

use crate::config::defaults::{default_about, default_placeholder, default_subtitle, default_title};

/// Text shown around the conversation. None of it affects dispatching.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_about")]
    pub about: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            placeholder: default_placeholder(),
            about: default_about(),
        }
    }
}
