//! Static registry of skill-sharing hubs.
//!
//! Every hub lives on its own subdomain of the root domain. The registry is
//! process-wide, immutable data: adding a hub is a code change, not a config
//! change, so every instance of the edge agrees on the set of valid
//! subdomains.

use serde::Serialize;

// ---------------------------------------------------------------------------
// HubEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HubEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub subdomain: &'static str,
    pub emoji: &'static str,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

pub const HUBS: &[HubEntry] = &[
    HubEntry { id: "angel", label: "Angel Services", subdomain: "angel", emoji: "\u{1F47C}" },
    HubEntry { id: "art", label: "Art & Design", subdomain: "art", emoji: "\u{1F3A8}" },
    HubEntry { id: "auto", label: "Automotive", subdomain: "auto", emoji: "\u{1F697}" },
    HubEntry { id: "business", label: "Business", subdomain: "business", emoji: "\u{1F4CA}" },
    HubEntry { id: "coach", label: "Coaching", subdomain: "coach", emoji: "\u{1F9E2}" },
    HubEntry { id: "coding", label: "Coding & Tech", subdomain: "coding", emoji: "\u{1F4BB}" },
    HubEntry { id: "cooking", label: "Cooking", subdomain: "cooking", emoji: "\u{1F373}" },
    HubEntry { id: "crafts", label: "Crafts", subdomain: "crafts", emoji: "\u{1F9F6}" },
    HubEntry { id: "data", label: "Data Science", subdomain: "data", emoji: "\u{1F4C9}" },
    HubEntry { id: "design", label: "Design", subdomain: "design", emoji: "\u{270F}" },
    HubEntry { id: "finance", label: "Finance", subdomain: "finance", emoji: "\u{1F4B0}" },
    HubEntry { id: "fitness", label: "Fitness", subdomain: "fitness", emoji: "\u{1F4AA}" },
    HubEntry { id: "gardening", label: "Gardening", subdomain: "gardening", emoji: "\u{1F331}" },
    HubEntry { id: "heroes", label: "Hero Gurus", subdomain: "heroes", emoji: "\u{1F9B8}" },
    HubEntry { id: "history", label: "History", subdomain: "history", emoji: "\u{1F4DC}" },
    HubEntry { id: "home", label: "Home Services", subdomain: "home", emoji: "\u{1F3E0}" },
    HubEntry { id: "investing", label: "Investing", subdomain: "investing", emoji: "\u{1F4C8}" },
    HubEntry { id: "language", label: "Languages", subdomain: "language", emoji: "\u{1F5E3}" },
    HubEntry { id: "marketing", label: "Marketing", subdomain: "marketing", emoji: "\u{1F4E2}" },
    HubEntry { id: "math", label: "Mathematics", subdomain: "math", emoji: "\u{2797}" },
    HubEntry { id: "mechanical", label: "Mechanical", subdomain: "mechanical", emoji: "\u{1F527}" },
    HubEntry { id: "music", label: "Music", subdomain: "music", emoji: "\u{1F3B5}" },
    HubEntry { id: "photography", label: "Photography", subdomain: "photography", emoji: "\u{1F4F8}" },
    HubEntry { id: "sales", label: "Sales", subdomain: "sales", emoji: "\u{1F91D}" },
    HubEntry { id: "science", label: "Science", subdomain: "science", emoji: "\u{1F52C}" },
    HubEntry { id: "sports", label: "Sports", subdomain: "sports", emoji: "\u{26BD}" },
    HubEntry { id: "tech", label: "Technology", subdomain: "tech", emoji: "\u{1F916}" },
    HubEntry { id: "wellness", label: "Wellness", subdomain: "wellness", emoji: "\u{1F9D8}" },
    HubEntry { id: "writing", label: "Writing", subdomain: "writing", emoji: "\u{270D}" },
];

/// Subdomains that are routable but are not hubs: the main site and the
/// account dashboard.
pub const SYSTEM_SUBDOMAINS: &[&str] = &["www", "dashboard"];

/// Standard pages scaffolded for most hubs.
pub const STANDARD_HUB_PAGES: &[&str] = &["about", "contact", "skills", "teachers"];

/// Hubs that ship without the standard page set (service-booking only).
pub const HUBS_WITHOUT_STANDARD_PAGES: &[&str] = &["auto", "mechanical"];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn find_hub(subdomain: &str) -> Option<&'static HubEntry> {
    HUBS.iter().find(|h| h.subdomain == subdomain)
}

pub fn find_hub_by_id(id: &str) -> Option<&'static HubEntry> {
    HUBS.iter().find(|h| h.id == id)
}

/// True for every subdomain the edge will route: all hubs plus the system
/// subdomains.
pub fn is_valid_subdomain(name: &str) -> bool {
    SYSTEM_SUBDOMAINS.contains(&name) || find_hub(name).is_some()
}

pub fn has_standard_pages(subdomain: &str) -> bool {
    !HUBS_WITHOUT_STANDARD_PAGES.contains(&subdomain)
}

/// Canonical public URL for a hub subdomain.
pub fn hub_url(subdomain: &str, root_domain: &str) -> String {
    format!("https://{subdomain}.{root_domain}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
