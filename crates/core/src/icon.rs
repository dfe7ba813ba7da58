//! The fixed set of icons a category can carry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic icon reference, serialized by its symbol tag (e.g. `"fork.knife"`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "cart")]
    Cart,
    #[serde(rename = "house")]
    House,
    #[serde(rename = "ellipsis.circle")]
    Ellipsis,
    #[serde(rename = "tshirt")]
    Tshirt,
    #[serde(rename = "fork.knife")]
    ForkKnife,
    #[serde(rename = "leaf")]
    Leaf,
    #[serde(rename = "bolt")]
    Bolt,
    #[serde(rename = "gift")]
    Gift,
    #[serde(rename = "bag")]
    Bag,
    #[serde(rename = "bookmark")]
    Bookmark,
    #[serde(rename = "star")]
    Star,
    /// Placeholder for categories created without a choice yet
    #[default]
    #[serde(rename = "questionmark.circle")]
    Question,
}

impl Icon {
    /// Every icon, in the order the picker offers them.
    pub const ALL: [Icon; 12] = [
        Icon::Cart,
        Icon::House,
        Icon::Ellipsis,
        Icon::Tshirt,
        Icon::ForkKnife,
        Icon::Leaf,
        Icon::Bolt,
        Icon::Gift,
        Icon::Bag,
        Icon::Bookmark,
        Icon::Star,
        Icon::Question,
    ];

    /// The symbol tag used in storage
    pub fn tag(self) -> &'static str {
        match self {
            Icon::Cart => "cart",
            Icon::House => "house",
            Icon::Ellipsis => "ellipsis.circle",
            Icon::Tshirt => "tshirt",
            Icon::ForkKnife => "fork.knife",
            Icon::Leaf => "leaf",
            Icon::Bolt => "bolt",
            Icon::Gift => "gift",
            Icon::Bag => "bag",
            Icon::Bookmark => "bookmark",
            Icon::Star => "star",
            Icon::Question => "questionmark.circle",
        }
    }

    /// A printable glyph standing in for the symbol
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Cart => "🛒",
            Icon::House => "🏠",
            Icon::Ellipsis => "⋯",
            Icon::Tshirt => "👕",
            Icon::ForkKnife => "🍴",
            Icon::Leaf => "🍃",
            Icon::Bolt => "⚡",
            Icon::Gift => "🎁",
            Icon::Bag => "👜",
            Icon::Bookmark => "🔖",
            Icon::Star => "⭐",
            Icon::Question => "❓",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_symbol_tag() {
        for icon in Icon::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.tag()));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(serde_json::from_str::<Icon>("\"rocket\"").is_err());
    }
}
