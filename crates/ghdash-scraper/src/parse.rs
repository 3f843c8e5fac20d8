//! Pure extraction from profile-page HTML to record types.
//!
//! These functions never fail: `scraper`'s parser produces a tree for any
//! input (including empty or non-HTML bodies), and every lookup that can miss
//! has a documented fallback. Keeping them free of I/O makes every
//! markup-level behavior testable against string fixtures. See
//! [`crate::client`] for the fetch side.

use scraper::{ElementRef, Html};

use crate::normalize::absolutize_href;
use crate::selectors;
use crate::types::{Profile, ProfileDetails, RepoCard, AVATAR_FALLBACK, BIO_FALLBACK};

/// Extracts the three-field [`Profile`] record from a profile page body.
///
/// - Bio: text of the first element matching the exact bio class string,
///   trimmed; [`BIO_FALLBACK`] when no element matches. A present but
///   whitespace-only bio yields an empty string, not the fallback.
/// - Pinned repositories: trimmed text of every `span.repo`, document order,
///   duplicates kept; empty list when none match.
/// - Avatar: `src` attribute of the first `img.avatar-user`, verbatim and
///   untrimmed; [`AVATAR_FALLBACK`] when the element or the attribute is
///   missing.
#[must_use]
pub fn parse_profile(html: &str) -> Profile {
    let document = Html::parse_document(html);

    let bio = document
        .select(&selectors::BIO)
        .next()
        .map(element_text)
        .unwrap_or_else(|| BIO_FALLBACK.to_owned());

    let pinned_repos = document
        .select(&selectors::PINNED_REPO)
        .map(element_text)
        .collect();

    let avatar_url = document
        .select(&selectors::AVATAR)
        .next()
        .and_then(|el| el.value().attr("src"))
        .map(str::to_owned)
        .unwrap_or_else(|| AVATAR_FALLBACK.to_owned());

    Profile {
        bio,
        pinned_repos,
        avatar_url,
    }
}

/// Extracts the supplemental [`ProfileDetails`] view from a profile page body.
///
/// `base_origin` is the scheme-and-host the page was fetched from; relative
/// card hrefs are absolutized against it.
#[must_use]
pub fn parse_profile_details(html: &str, base_origin: &str) -> ProfileDetails {
    let document = Html::parse_document(html);

    let repo_count = document
        .select(&selectors::REPO_COUNT)
        .next()
        .map(element_text);

    let pinned = document
        .select(&selectors::PINNED_CARD)
        .map(|card| parse_repo_card(card, base_origin))
        .collect();

    ProfileDetails { repo_count, pinned }
}

/// Extracts one [`RepoCard`] from a `.pinned-item-list-item` container.
///
/// A card without a name span gets an empty name; a card without a link
/// anchor gets `url: None`; a missing or whitespace-only description becomes
/// `None`.
fn parse_repo_card(card: ElementRef<'_>, base_origin: &str) -> RepoCard {
    let name = card
        .select(&selectors::PINNED_REPO)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let url = card
        .select(&selectors::CARD_LINK)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|href| absolutize_href(base_origin, href));

    let description = card
        .select(&selectors::CARD_DESCRIPTION)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty());

    RepoCard {
        name,
        url,
        description,
    }
}

/// Concatenates all descendant text of an element and trims the result.
///
/// Mirrors how a rendered page reads: `<span>foo<em>bar</em></span>` yields
/// `"foobar"`.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
