use crate::domain::values::alias::{AliasEntry, AliasTable};

const ICON_BASE: &str = "https://platform.tgju.org/files/images";

/// (slug, icon file, Persian name, English name)
const GOLD_ALIASES: &[(&str, &str, &str, &str)] = &[
    ("abshodeh", "gold-bar-1622253729.png", "مثقال طلا", "Mithqal"),
    ("18ayar", "gold-bar-1-1622253841.png", "طلا 18 عیار", "18 Karat"),
    ("sekkeh", "gold-1697963730.png", "سکه امامی", "Emami"),
    ("bahar", "gold-1-1697963918.png", "سکه بهار آزادی", "Bahar Azadi"),
    ("nim", "money-1697964123.png", "نیم سکه", "Half Coin"),
    ("rob", "revenue-1697964369.png", "ربع سکه", "Quarter Coin"),
    ("sek", "parsian-coin-1697964860.png", "سکه گرمی", "Gram Coin"),
    ("usd_xau", "gold-1-1622253769.png", "انس طلا", "USD Gold"),
];

/// Display metadata for the gold source, keyed by vendor slug.
pub fn gold_aliases() -> AliasTable {
    GOLD_ALIASES
        .iter()
        .map(|(slug, icon, name, en)| {
            (
                *slug,
                AliasEntry {
                    name: name.to_string(),
                    icon: format!("{ICON_BASE}/{icon}"),
                    en: en.to_string(),
                },
            )
        })
        .collect()
}
