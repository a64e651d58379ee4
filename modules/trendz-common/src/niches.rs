/// A content-category taxonomy entry. Compile-time data: the niche set
/// scopes topic selection and reporting and changes with releases, not
/// at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Niche {
    pub id: i32,
    pub name: &'static str,
    /// Hashtag scraped for this niche when no dynamic override is set.
    pub default_topic: &'static str,
}

pub const NICHES: &[Niche] = &[
    Niche { id: 1, name: "Beauty", default_topic: "skincare" },
    Niche { id: 2, name: "Fashion", default_topic: "outfitinspo" },
    Niche { id: 3, name: "Food", default_topic: "easyrecipes" },
    Niche { id: 4, name: "Technology", default_topic: "techtok" },
    Niche { id: 5, name: "Fitness", default_topic: "gymtok" },
    Niche { id: 6, name: "Travel", default_topic: "traveltok" },
];

pub fn niche(id: i32) -> Option<&'static Niche> {
    NICHES.iter().find(|n| n.id == id)
}

pub fn default_topic(niche_id: i32) -> Option<&'static str> {
    niche(niche_id).map(|n| n.default_topic)
}
