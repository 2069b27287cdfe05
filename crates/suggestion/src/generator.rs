use rand::{Rng, seq::IndexedRandom};
use strum::{Display, VariantArray};

use crate::{drink::Drink, error::GenerateError};

/// Source of candidate drinks for the ranking pipeline.
pub trait Generator {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Drink, GenerateError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Base,
    Mixer,
    Accent,
    Garnish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum FlavorProfile {
    Tropical,
    Citrus,
    Herbal,
    Creamy,
    Bitter,
}

impl FlavorProfile {
    pub fn bases(&self) -> &'static [&'static str] {
        match self {
            FlavorProfile::Tropical => &["white rum", "dark rum", "coconut rum", "blanco tequila"],
            FlavorProfile::Citrus => &["vodka", "london dry gin", "blanco tequila", "pisco"],
            FlavorProfile::Herbal => &["gin", "mezcal", "aquavit", "reposado tequila"],
            FlavorProfile::Creamy => &["vodka", "bourbon", "spiced rum", "brandy"],
            FlavorProfile::Bitter => &["rye whiskey", "gin", "bourbon", "mezcal"],
        }
    }

    pub fn mixers(&self) -> &'static [&'static str] {
        match self {
            FlavorProfile::Tropical => &[
                "pineapple juice",
                "mango nectar",
                "passion fruit juice",
                "coconut water",
            ],
            FlavorProfile::Citrus => &[
                "fresh grapefruit juice",
                "lemonade",
                "orange juice",
                "tonic water",
            ],
            FlavorProfile::Herbal => &[
                "soda water",
                "cucumber juice",
                "ginger beer",
                "elderflower tonic",
            ],
            FlavorProfile::Creamy => &["heavy cream", "coconut cream", "oat milk", "cold brew coffee"],
            FlavorProfile::Bitter => &[
                "blood orange soda",
                "tonic water",
                "sparkling wine",
                "soda water",
            ],
        }
    }

    pub fn accents(&self) -> &'static [&'static str] {
        match self {
            FlavorProfile::Tropical => &[
                "0.5 oz lime juice",
                "0.5 oz orgeat syrup",
                "0.25 oz falernum",
                "2 dashes Angostura bitters",
            ],
            FlavorProfile::Citrus => &[
                "0.75 oz lemon juice",
                "0.5 oz triple sec",
                "0.5 oz simple syrup",
                "0.5 oz lime juice",
            ],
            FlavorProfile::Herbal => &[
                "4 fresh mint leaves",
                "0.5 oz green chartreuse",
                "0.5 oz basil syrup",
                "2 dashes celery bitters",
            ],
            FlavorProfile::Creamy => &[
                "0.5 oz vanilla syrup",
                "0.5 oz coffee liqueur",
                "0.5 oz amaretto",
                "0.25 oz honey syrup",
            ],
            FlavorProfile::Bitter => &[
                "0.5 oz Campari",
                "0.5 oz Aperol",
                "0.5 oz sweet vermouth",
                "3 dashes Angostura bitters",
            ],
        }
    }

    pub fn garnishes(&self) -> &'static [&'static str] {
        match self {
            FlavorProfile::Tropical => &[
                "pineapple wedge",
                "orchid",
                "toasted coconut flakes",
                "maraschino cherry",
            ],
            FlavorProfile::Citrus => &["lemon twist", "grapefruit peel", "orange wheel", "lime wheel"],
            FlavorProfile::Herbal => &["mint sprig", "rosemary sprig", "cucumber ribbon", "basil leaf"],
            FlavorProfile::Creamy => &[
                "grated nutmeg",
                "cocoa powder",
                "cinnamon stick",
                "espresso beans",
            ],
            FlavorProfile::Bitter => &["orange peel", "luxardo cherry", "grapefruit twist", "lemon peel"],
        }
    }

    fn entries(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Base => self.bases(),
            Category::Mixer => self.mixers(),
            Category::Accent => self.accents(),
            Category::Garnish => self.garnishes(),
        }
    }
}

pub const NAME_ADJECTIVES: &[&str] = &[
    "Velvet", "Midnight", "Golden", "Smoky", "Electric", "Lazy", "Wild", "Silver", "Crimson",
    "Sunlit", "Hidden", "Gilded",
];

pub const NAME_NOUNS: &[&str] = &[
    "Lagoon", "Harbor", "Orchard", "Ember", "Mirage", "Tide", "Garden", "Voyage", "Compass",
    "Lantern", "Meadow", "Reverie",
];

/// Generates drinks from the built-in flavor profiles.
///
/// The profile is drawn uniformly, then one entry per category is drawn
/// uniformly from that profile. Tags are left empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxonomyGenerator;

impl TaxonomyGenerator {
    fn pick<R: Rng + ?Sized>(
        profile: FlavorProfile,
        category: Category,
        rng: &mut R,
    ) -> Result<&'static str, GenerateError> {
        profile
            .entries(category)
            .choose(rng)
            .copied()
            .ok_or_else(|| GenerateError::EmptyCategory {
                profile: profile.to_string(),
                category,
            })
    }
}

impl Generator for TaxonomyGenerator {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Drink, GenerateError> {
        let profile = *FlavorProfile::VARIANTS
            .choose(rng)
            .ok_or(GenerateError::NoProfile)?;

        let base = Self::pick(profile, Category::Base, rng)?;
        let mixer = Self::pick(profile, Category::Mixer, rng)?;
        let accent = Self::pick(profile, Category::Accent, rng)?;
        let garnish = Self::pick(profile, Category::Garnish, rng)?;

        let adjective = NAME_ADJECTIVES
            .choose(rng)
            .ok_or(GenerateError::EmptyNameList)?;
        let noun = NAME_NOUNS.choose(rng).ok_or(GenerateError::EmptyNameList)?;

        let ingredients = vec![
            format!("2 oz {base}"),
            format!("4 oz {mixer}"),
            accent.to_owned(),
            format!("Garnish: {garnish}"),
        ];

        let steps = vec![
            "Fill a shaker with ice.".to_owned(),
            format!("Add the {base} and {mixer}."),
            format!("Add {accent} and shake until chilled."),
            format!("Strain into a chilled glass and garnish with {garnish}."),
        ];

        let description = format!("A {profile} drink built on {base}, lengthened with {mixer}.");

        Ok(Drink::new(
            format!("{adjective} {noun}"),
            description,
            ingredients,
            steps,
        ))
    }
}
