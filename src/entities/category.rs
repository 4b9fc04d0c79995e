// 🏷️ Category Taxonomy - Fixed merchandising families
//
// Every category carries the stable numeric code of the order API ("fam2ID").
// Codes are echoed back into order payloads, so they must never be renumbered.
//
// Render order is NOT alphabetical: packing slips and confirmation mails list
// beer first, then the rest of the alcohol, then soft drinks, with crates and
// deposits always last.

use serde::{Deserialize, Serialize};

/// Display name returned for any code outside the taxonomy
pub const UNKNOWN_CATEGORY_NAME: &str = "OTHER PRODUCTS";

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Dutch beer (Heineken, Grolsch, Bavaria, ...)
    NlBeer,

    /// Imported beer
    ForeignBeer,

    /// Alcohol-free beer and 0.0% variants
    AlcoholFree,

    Cider,

    /// Premixes and ready-to-drink cans
    MixDrink,

    /// Spirits (vodka, whisky, rum, gin, ...)
    StrongSpirits,

    Liqueur,

    Wine,

    /// Champagne, prosecco, cava
    SparklingWine,

    SoftDrink,

    EnergyDrink,

    Juice,

    Water,

    /// Coffee, tea and hot drink supplies
    CoffeeTea,

    Snacks,

    /// Miscellaneous fallback family
    NonFood,

    /// Crates, empties and deposit SKUs
    Crates,
}

impl Category {
    /// All categories in render priority order
    pub const ALL: [Category; 17] = [
        Category::NlBeer,
        Category::ForeignBeer,
        Category::AlcoholFree,
        Category::Cider,
        Category::MixDrink,
        Category::StrongSpirits,
        Category::Liqueur,
        Category::Wine,
        Category::SparklingWine,
        Category::SoftDrink,
        Category::EnergyDrink,
        Category::Juice,
        Category::Water,
        Category::CoffeeTea,
        Category::Snacks,
        Category::NonFood,
        Category::Crates,
    ];

    /// Default category when nothing else applies
    pub const MISC: Category = Category::NonFood;

    /// Stable fam2ID code used by the order API
    pub fn code(&self) -> &'static str {
        match self {
            Category::NlBeer => "1",
            Category::ForeignBeer => "2",
            Category::AlcoholFree => "3",
            Category::Cider => "4",
            Category::Wine => "5",
            Category::SparklingWine => "6",
            Category::SoftDrink => "7",
            Category::EnergyDrink => "8",
            Category::Juice => "9",
            Category::Water => "10",
            Category::CoffeeTea => "11",
            Category::Snacks => "12",
            Category::NonFood => "13",
            Category::MixDrink => "14",
            Category::Liqueur => "15",
            Category::StrongSpirits => "16",
            Category::Crates => "17",
        }
    }

    /// Human-readable name as printed on mails and packing slips
    pub fn name(&self) -> &'static str {
        match self {
            Category::NlBeer => "NL BIER",
            Category::ForeignBeer => "BUITENLANDS BIER",
            Category::AlcoholFree => "ALCOHOLVRIJ",
            Category::Cider => "CIDER",
            Category::MixDrink => "MIX DRANK",
            Category::StrongSpirits => "STERKE DRANK",
            Category::Liqueur => "LIKEUREN",
            Category::Wine => "WIJN",
            Category::SparklingWine => "MOUSSERENDE WIJN",
            Category::SoftDrink => "FRISDRANK",
            Category::EnergyDrink => "ENERGY DRANK",
            Category::Juice => "SAPPEN",
            Category::Water => "WATER",
            Category::CoffeeTea => "KOFFIE & THEE",
            Category::Snacks => "SNACKS",
            Category::NonFood => "NON-FOOD",
            Category::Crates => "KRATTEN & STATIEGELD",
        }
    }

    /// Position in render order (0 = first)
    pub fn priority(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Category::ALL.len())
    }

    /// Resolve a fam2ID code; surrounding whitespace is ignored
    pub fn from_code(code: &str) -> Option<Category> {
        let code = code.trim();
        Category::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Resolve a code, sending anything unknown to the miscellaneous family
    pub fn from_code_or_misc(code: &str) -> Category {
        Category::from_code(code).unwrap_or(Category::MISC)
    }

    pub fn is_misc(&self) -> bool {
        *self == Category::MISC
    }
}

/// Display name for a category code. Total: unknown codes get
/// [`UNKNOWN_CATEGORY_NAME`].
pub fn category_name(code: &str) -> &'static str {
    Category::from_code(code)
        .map(|c| c.name())
        .unwrap_or(UNKNOWN_CATEGORY_NAME)
}

// ============================================================================
// TESTS
// ============================================================================
