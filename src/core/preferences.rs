use std::fmt::{Display, Formatter};

use enumset::EnumSet;

#[derive(Debug, clap::ValueEnum, enumset::EnumSetType)]
pub enum Preference {
    /// Prefer cafés and restaurants near the charging stops.
    FoodOptions,

    /// Avoid slow chargers.
    ///
    /// Accepted but not yet taken into account when placing the stops.
    AvoidSlowChargers,

    /// Prefer pet-friendly spots near the charging stops.
    PetFriendly,
}

impl Display for Preference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FoodOptions => write!(f, "food options (cafes, restaurants)"),
            Self::AvoidSlowChargers => write!(f, "avoid slow chargers"),
            Self::PetFriendly => write!(f, "pet-friendly spots"),
        }
    }
}

pub type UserPreferences = EnumSet<Preference>;
