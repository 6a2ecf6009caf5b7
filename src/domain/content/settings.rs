//! Site settings value types.

use serde::{Deserialize, Serialize};

/// External social presence links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub youtube: String,
}

/// The singleton site configuration record.
///
/// Exactly one instance exists per session; saving replaces it wholesale,
/// never field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub primary_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub social_links: SocialLinks,
}
