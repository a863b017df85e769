//! News site scrapers and the registry that lists them.
//!
//! Every site is described by a [`SiteAdapter`](adapter::SiteAdapter) value
//! and runs the same extraction algorithm; only the selectors and the link
//! rule differ.
//!
//! # Supported Sources
//!
//! | Site id | Module | Candidates | Links |
//! |---------|--------|------------|-------|
//! | `dagen` | [`dagen`] | `article.teaser` | absolute |
//! | `h_avis` | [`h_avis`] | `article.teaser_container` | prefixed with section URL |
//! | `jerusalem` | [`jerusalem`] | `div.breaking-news-link-container` | absolute |
//! | `jbl` | [`jbl`] | `article` | prefixed with site URL |
//! | `os_fusa` | [`os_fusa`] | `article.teaser` | absolute |
//! | `ringblad` | [`ringblad`] | `article` | prefixed with site URL |
//! | `vg` | [`vg`] | `div.article-container` | absolute |
//! | `wsj` | [`wsj`] | `article` | absolute |

pub mod adapter;
pub mod dagen;
pub mod h_avis;
pub mod jbl;
pub mod jerusalem;
pub mod os_fusa;
pub mod ringblad;
pub mod vg;
pub mod wsj;

use adapter::SiteAdapter;

/// All adapters in presentation order.
pub static REGISTRY: [SiteAdapter; 8] = [
    dagen::ADAPTER,
    h_avis::ADAPTER,
    jerusalem::ADAPTER,
    jbl::ADAPTER,
    os_fusa::ADAPTER,
    ringblad::ADAPTER,
    vg::ADAPTER,
    wsj::ADAPTER,
];

/// Look up a registered adapter by its site id.
pub fn find(site_id: &str) -> Option<&'static SiteAdapter> {
    REGISTRY.iter().find(|adapter| adapter.site_id == site_id)
}
