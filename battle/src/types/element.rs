//! Elemental types and the effectiveness chart

/// Elemental types a creature or action can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Element {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Psychic = 5,
    Steel = 6,
}

impl Element {
    /// All elements
    pub const ALL: [Element; 7] = [
        Element::Normal,
        Element::Fire,
        Element::Water,
        Element::Electric,
        Element::Grass,
        Element::Psychic,
        Element::Steel,
    ];

    /// Get all elements as a slice
    pub fn all() -> &'static [Element] {
        &Self::ALL
    }

    /// Get effectiveness against a defending element
    ///
    /// Pairs with no special matchup resolve to 1.0.
    pub fn effectiveness(&self, defender: Element) -> f32 {
        EFFECT_CHART[*self as usize][defender as usize]
    }

    /// Parse from a sheet/display name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Element::Normal),
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "electric" => Some(Element::Electric),
            "grass" => Some(Element::Grass),
            "psychic" => Some(Element::Psychic),
            "steel" => Some(Element::Steel),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Normal => "Normal",
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Electric => "Electric",
            Element::Grass => "Grass",
            Element::Psychic => "Psychic",
            Element::Steel => "Steel",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 7x7 effectiveness chart
/// Row = attacking element, Column = defending element
/// Values: 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// The chart is defined per ordered pair and is not symmetric.
///
/// Order: Normal, Fire, Water, Electric, Grass, Psychic, Steel
#[rustfmt::skip]
pub static EFFECT_CHART: [[f32; 7]; 7] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 1.0, 2.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 1.0, 0.5],
];
