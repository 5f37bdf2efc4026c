//! User preference profiles.
//!
//! Two independent config shapes feed the scorer: the rich per-user
//! [`UserProfile`] loaded from a JSON file, and the lightweight
//! [`SearchProfile`] submitted by API callers. The static
//! [`StaticPreferences`] set backs scoring when no profile is given.

use crate::listings::Listing;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Named per-user preference profile, immutable for the duration of a
/// scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub profile_name: String,

    // Core matching
    pub titles_include: Vec<String>,
    pub keywords_must_have: Vec<String>,
    pub keywords_nice_to_have: Vec<String>,
    pub keywords_avoid: Vec<String>,

    // Work style
    pub remote_only: bool,
    pub locations_preferred: Vec<String>,
    pub max_hours_per_week: Option<u32>,

    // Money / seniority. The rate floors are part of the schema but do
    // not currently participate in scoring.
    pub min_hourly_rate: Option<f64>,
    pub min_annual_salary: Option<f64>,
    pub preferred_seniority: Vec<String>,

    pub notes: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            profile_name: "default".to_string(),
            titles_include: Vec::new(),
            keywords_must_have: Vec::new(),
            keywords_nice_to_have: Vec::new(),
            keywords_avoid: Vec::new(),
            remote_only: true,
            locations_preferred: Vec::new(),
            max_hours_per_week: None,
            min_hourly_rate: None,
            min_annual_salary: None,
            preferred_seniority: Vec::new(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile '{name}' not found at {path}; create it or choose another profile")]
    NotFound { name: String, path: PathBuf },
    #[error("profile '{name}' could not be read")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("profile '{name}' is not valid JSON")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load `<dir>/<name>.json`. A missing profile is a hard failure; callers
/// that want a fallback must opt into [`builtin_profile_or_default`].
pub fn load_user_profile(dir: &Path, name: &str) -> Result<UserProfile, ProfileError> {
    let path = dir.join(format!("{name}.json"));
    if !path.exists() {
        return Err(ProfileError::NotFound {
            name: name.to_string(),
            path,
        });
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| ProfileError::Io {
        name: name.to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ProfileError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Lightweight profile shape accepted by the search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchProfile {
    pub preferred_roles: Vec<String>,
    pub skills: Vec<String>,
    pub keywords: Vec<String>,
    pub disqualifiers: Vec<String>,
}

impl SearchProfile {
    /// Combined keyword list for the weighted-ratio scorer: keywords,
    /// skills, and preferred roles, all lowercased. Duplicates are kept;
    /// they are harmless to the match ratio.
    pub fn combined_keywords(&self) -> Vec<String> {
        self.keywords
            .iter()
            .chain(self.skills.iter())
            .chain(self.preferred_roles.iter())
            .map(|value| value.to_lowercase())
            .collect()
    }

    /// Hard disqualifier check over the title+description text.
    pub fn disqualifies(&self, listing: &Listing) -> bool {
        if self.disqualifiers.is_empty() {
            return false;
        }

        let haystack = format!(
            "{} {}",
            listing.display_title().to_lowercase(),
            listing.description_or_empty().to_lowercase()
        );
        self.disqualifiers
            .iter()
            .any(|bad| haystack.contains(&bad.to_lowercase()))
    }
}

/// Built-in demo profile surfaced by the simple `GET /gigs` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltinProfile {
    pub name: &'static str,
    pub label: &'static str,
    pub skills: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub min_pay: u32,
    pub remote_only: bool,
}

impl BuiltinProfile {
    pub fn to_search_profile(&self) -> SearchProfile {
        SearchProfile {
            preferred_roles: vec![self.name.to_string()],
            skills: self.skills.iter().map(|s| s.to_string()).collect(),
            keywords: self.keywords.iter().map(|s| s.to_string()).collect(),
            disqualifiers: Vec::new(),
        }
    }
}

const DEFAULT_BUILTIN: &str = "cindy";

pub fn builtin_profiles() -> &'static [BuiltinProfile] {
    static PROFILES: OnceLock<Vec<BuiltinProfile>> = OnceLock::new();
    PROFILES.get_or_init(|| {
        vec![
            BuiltinProfile {
                name: "cindy",
                label: "Cindy – Email & Content",
                skills: &["email marketing", "copywriting", "campaign strategy"],
                keywords: &["email", "newsletter", "campaign", "copywriter", "content"],
                min_pay: 20,
                remote_only: true,
            },
            BuiltinProfile {
                name: "creative",
                label: "Creative – Design & Art",
                skills: &["design", "illustration", "branding"],
                keywords: &["designer", "illustrator", "graphics", "branding"],
                min_pay: 0,
                remote_only: true,
            },
            BuiltinProfile {
                name: "developer",
                label: "Developer – Web & Software",
                skills: &["javascript", "python", "react", "next.js", "frontend", "backend"],
                keywords: &["developer", "engineer", "software", "frontend", "full stack"],
                min_pay: 30,
                remote_only: true,
            },
            BuiltinProfile {
                name: "musician",
                label: "Musician – Audio & Creative",
                skills: &["music", "production", "audio editing"],
                keywords: &["music", "audio", "sound", "podcast", "composer"],
                min_pay: 0,
                remote_only: true,
            },
            BuiltinProfile {
                name: "fastgigs",
                label: "Fast Gigs – Quick Wins",
                skills: &["data entry", "typing", "admin"],
                keywords: &["data entry", "assistant", "transcription", "quick"],
                min_pay: 0,
                remote_only: true,
            },
            BuiltinProfile {
                name: "gentle",
                label: "Gentle Mode – Low-Energy Day",
                skills: &["writing", "light admin"],
                keywords: &["easy", "simple", "entry", "light"],
                min_pay: 0,
                remote_only: true,
            },
        ]
    })
}

/// Lookup for the simple endpoint. Unknown keys intentionally fall back
/// to the default profile instead of failing.
pub fn builtin_profile_or_default(key: &str) -> &'static BuiltinProfile {
    let normalized = key.trim().to_lowercase();
    let profiles = builtin_profiles();
    profiles
        .iter()
        .find(|profile| profile.name == normalized)
        .unwrap_or_else(|| {
            profiles
                .iter()
                .find(|profile| profile.name == DEFAULT_BUILTIN)
                .expect("default builtin profile present")
        })
}

/// Fixed global preference set used when no user profile is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticPreferences {
    pub skills: Vec<String>,
    pub anti_terms: Vec<String>,
    pub bonus_terms: Vec<String>,
    pub min_rate_hourly: Option<f64>,
    pub prefer_remote: bool,
}

impl Default for StaticPreferences {
    fn default() -> Self {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        Self {
            skills: to_vec(&[
                "email marketing",
                "email campaigns",
                "newsletters",
                "content marketing",
                "content strategy",
                "copywriting",
                "copywriter",
                "editorial",
                "landing pages",
                "lead generation",
                "demand generation",
                "marketing automation",
                "funnels",
                "seo",
                "sem",
                "social media",
                "campaign strategy",
                "hubspot",
                "ga4",
                "google analytics",
                "crm",
                "marketing ops",
                "b2b",
            ]),
            anti_terms: to_vec(&[
                "unpaid",
                "commission only",
                "mlm",
                "crypto casino",
                "door to door",
                "cold calling",
                "recruitment consultant",
                "recruiter",
                "data engineer",
                "backend engineer",
                "senior motion designer",
                "3d artist",
                "c++",
            ]),
            bonus_terms: to_vec(&[
                "part-time",
                "part time",
                "contract",
                "freelance",
                "project-based",
                "project based",
                "remote",
                "async",
                "independent contractor",
                "flexible hours",
            ]),
            min_rate_hourly: Some(40.0),
            prefer_remote: true,
        }
    }
}
