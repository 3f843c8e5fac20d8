//! Record types extracted from GitHub profile pages.
//!
//! ## Observed shape of live profile pages
//!
//! ### Bio
//! The bio text sits in a `div` whose `class` attribute is the exact string
//! `"p-note user-profile-bio mb-3 js-user-profile-bio f4"`. Profiles with no
//! bio omit the element entirely rather than rendering an empty `div`, so
//! absence maps to [`BIO_FALLBACK`] instead of an error. The rendered text may
//! carry leading/trailing whitespace from the template; it is trimmed.
//!
//! ### Pinned repositories
//! Each pinned card contains a `span` with class `repo` holding the repository
//! name. Profiles without pinned repositories have no such spans at all, which
//! maps to an empty list. GitHub does not deduplicate and neither do we; names
//! appear in document order.
//!
//! ### Avatar
//! The avatar is an `img` carrying the `avatar-user` class (among others).
//! Its `src` is an absolute `avatars.githubusercontent.com` URL and is passed
//! through verbatim, untrimmed. A missing element or missing `src` attribute
//! maps to [`AVATAR_FALLBACK`].
//!
//! ### Pinned cards (detail view)
//! The full card markup is an `.pinned-item-list-item` container with a
//! `span.repo` name, an `a.text-bold` link whose `href` is relative
//! (`/owner/name`), and an optional `p.pinned-item-desc` description. The
//! description node is absent when the repository has none.
//!
//! ### Repository count
//! The profile navigation renders repository/star/follower counts as
//! `span.Counter` elements, repositories first. The text is a human-formatted
//! string (`"8"`, `"1.2k"`) and is kept as-is rather than parsed to a number.

use serde::{Deserialize, Serialize};

/// Substituted for [`Profile::bio`] when the bio element is missing.
pub const BIO_FALLBACK: &str = "No bio available";

/// Substituted for [`Profile::avatar_url`] when the avatar element or its
/// `src` attribute is missing.
pub const AVATAR_FALLBACK: &str = "No avatar available";

/// The three-field profile record scraped from a profile page.
///
/// Always fully populated: extraction failures surface as the documented
/// fallback values, never as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Trimmed bio text, or [`BIO_FALLBACK`] when the element is absent.
    /// May be an empty string when the element exists but holds only
    /// whitespace.
    pub bio: String,

    /// Pinned repository names in document order, duplicates preserved.
    /// Empty when the profile pins nothing.
    pub pinned_repos: Vec<String>,

    /// Avatar image URL exactly as it appears in the `src` attribute, or
    /// [`AVATAR_FALLBACK`] when no avatar is present.
    pub avatar_url: String,
}

/// One pinned repository card from the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoCard {
    /// Trimmed repository name. Empty string if the card has no name span.
    pub name: String,

    /// Absolute link to the repository, or `None` when the card carries no
    /// link anchor. Relative hrefs are absolutized against the page origin.
    pub url: Option<String>,

    /// Trimmed description, or `None` when absent or whitespace-only.
    pub description: Option<String>,
}

/// Supplemental per-profile detail: pinned cards plus the repository count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    /// Text of the first counter badge on the page (the repositories tab),
    /// e.g. `"8"` or `"1.2k"`. `None` when the page renders no counters.
    pub repo_count: Option<String>,

    /// One entry per pinned card, document order.
    pub pinned: Vec<RepoCard>,
}
