//! Company domain model and reference-list options.
//!
//! A [`Company`] is read-only from the client's perspective: it is created and
//! mutated only by the backend and lives only as long as the in-memory listing
//! that contains it. Its display name doubles as the routing key for the
//! detail view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL of the placeholder image service used when a company has no logo.
const PLACEHOLDER_IMAGE_BASE: &str = "https://dummyimage.com/150x150";

/// Identifier of a headquarters country in the `main-offices/` reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId(pub u32);

/// Identifier of a technology sector in the `tech-sectors/` reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorId(pub u32);

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One portfolio company as returned by the `companies/` endpoint.
///
/// Only `company` (the name) is required on the wire; every other field
/// tolerates absence so that partial fixtures and older backends still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Backend surrogate key. Not used for routing.
    #[serde(default)]
    pub id: Option<u64>,

    /// Display name; unique, and the identifier used by search results and
    /// the detail route.
    #[serde(rename = "company")]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Sector tags.
    #[serde(default, rename = "tech_sector")]
    pub sectors: Vec<SectorId>,

    /// Headquarters country.
    #[serde(default, rename = "hq_main_office")]
    pub headquarters: Option<CountryId>,

    /// Logo URL, if the backend has one.
    #[serde(default)]
    pub logo: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub linkedin_url: Option<String>,

    #[serde(default)]
    pub twitter_url: Option<String>,

    #[serde(default)]
    pub facebook_url: Option<String>,

    #[serde(default)]
    pub instagram_url: Option<String>,
}

impl Company {
    /// Creates a company with only a name and description set.
    ///
    /// Mostly useful for fixtures; real records come from the backend.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            sectors: Vec::new(),
            headquarters: None,
            logo: None,
            website: None,
            status: None,
            email: None,
            linkedin_url: None,
            twitter_url: None,
            facebook_url: None,
            instagram_url: None,
        }
    }

    /// Returns the logo URL, falling back to a generated placeholder image.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_directory::domain::Company;
    ///
    /// let mut company = Company::new("BeepKart", "Used two-wheelers");
    /// assert!(company.logo_url().starts_with("https://dummyimage.com/"));
    ///
    /// company.logo = Some("https://cdn.example/beepkart.png".to_string());
    /// assert_eq!(company.logo_url(), "https://cdn.example/beepkart.png");
    /// ```
    #[must_use]
    pub fn logo_url(&self) -> String {
        match self.logo.as_deref() {
            Some(logo) if !logo.trim().is_empty() => logo.to_string(),
            _ => placeholder_logo(&self.name),
        }
    }

    /// Social and web links that are present, labelled for display.
    #[must_use]
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("website", self.website.as_deref()),
            ("linkedin", self.linkedin_url.as_deref()),
            ("twitter", self.twitter_url.as_deref()),
            ("facebook", self.facebook_url.as_deref()),
            ("instagram", self.instagram_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
        .collect()
    }
}

/// Entry of the `main-offices/` reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    pub id: CountryId,
    pub hq_name: String,
}

/// Entry of the `tech-sectors/` reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorOption {
    pub id: SectorId,
    pub sector_name: String,
}

/// Derives the initials shown on a placeholder logo.
///
/// Takes the first character of the first token, plus the first character of
/// the last token when there is more than one. A last token in parentheses
/// contributes the character after the opening parenthesis.
///
/// # Examples
///
/// ```
/// use portfolio_directory::domain::company::initials;
///
/// assert_eq!(initials("BeepKart"), "B");
/// assert_eq!(initials("Kapiva Ayurveda"), "KA");
/// assert_eq!(initials("Grab Holdings (GRAB)"), "GG");
/// ```
#[must_use]
pub fn initials(name: &str) -> String {
    let tokens: Vec<&str> = name.split_whitespace().collect();
    let mut result = String::new();

    if let Some(first) = tokens.first().and_then(|t| t.chars().next()) {
        result.push(first);
    }

    if tokens.len() > 1 {
        let last = tokens[tokens.len() - 1];
        let mut chars = last.chars();
        match chars.next() {
            Some('(') => {
                if let Some(c) = chars.next() {
                    result.push(c);
                }
            }
            Some(c) => result.push(c),
            None => {}
        }
    }

    result
}

/// Builds a placeholder logo URL for a company name.
///
/// The background colour is derived from the name with an FNV-1a hash so the
/// same company always gets the same colour across renders.
#[must_use]
pub fn placeholder_logo(name: &str) -> String {
    let hash = name.bytes().fold(0x811c_9dc5_u32, |acc, b| {
        (acc ^ u32::from(b)).wrapping_mul(0x0100_0193)
    });
    let color = hash & 0x00ff_ffff;
    format!(
        "{PLACEHOLDER_IMAGE_BASE}/{color:06X}/ffffff?text={}",
        initials(name)
    )
}
