//! CSS selectors for the GitHub profile page, collected in one place so a
//! markup change is a one-line fix.
//!
//! These are intentionally brittle: they encode the exact markup GitHub
//! serves today and make no attempt to survive a redesign. In particular the
//! bio selector matches the full `class` attribute string, not a token set,
//! so any reordering or addition of classes stops it matching.

use std::sync::LazyLock;

use scraper::Selector;

/// Bio container. Matches the complete class attribute verbatim.
pub const BIO_CSS: &str = r#"div[class="p-note user-profile-bio mb-3 js-user-profile-bio f4"]"#;

/// Repository name span, both standalone and inside a pinned card.
pub const PINNED_REPO_CSS: &str = "span.repo";

/// Profile avatar image; the URL lives in its `src` attribute.
pub const AVATAR_CSS: &str = "img.avatar-user";

/// One pinned repository card in the detail view.
pub const PINNED_CARD_CSS: &str = ".pinned-item-list-item";

/// Repository link anchor inside a pinned card. The `href` is relative.
pub const CARD_LINK_CSS: &str = "a.text-bold";

/// Repository description paragraph inside a pinned card. Often absent.
pub const CARD_DESCRIPTION_CSS: &str = "p.pinned-item-desc";

/// Counter badge in the profile navigation; the first one is the
/// repositories tab.
pub const REPO_COUNT_CSS: &str = "span.Counter";

pub(crate) static BIO: LazyLock<Selector> = LazyLock::new(|| compile(BIO_CSS));
pub(crate) static PINNED_REPO: LazyLock<Selector> = LazyLock::new(|| compile(PINNED_REPO_CSS));
pub(crate) static AVATAR: LazyLock<Selector> = LazyLock::new(|| compile(AVATAR_CSS));
pub(crate) static PINNED_CARD: LazyLock<Selector> = LazyLock::new(|| compile(PINNED_CARD_CSS));
pub(crate) static CARD_LINK: LazyLock<Selector> = LazyLock::new(|| compile(CARD_LINK_CSS));
pub(crate) static CARD_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| compile(CARD_DESCRIPTION_CSS));
pub(crate) static REPO_COUNT: LazyLock<Selector> = LazyLock::new(|| compile(REPO_COUNT_CSS));

fn compile(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}
