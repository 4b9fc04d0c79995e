// 📋 Product Tables - Classification rules as data
//
// Three kinds of literal data feed the classifier:
// - KNOWN_PRODUCTS: full product names (lowercase) with their category
// - KEYWORDS: brand names, product terms and packaging terms with a weight kind
// - CRATE_TERMS: container/deposit terms that override everything else
//
// Order of KNOWN_PRODUCTS matters: the partial-match scan takes the first hit,
// so spirits are listed before the premixes that mention them.

use crate::entities::Category;
use serde::{Deserialize, Serialize};

// ============================================================================
// KEYWORD KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    /// Decisive marker such as "0.0%" or "alcoholvrij"
    Marker,

    /// Brand or product line ("heineken", "red bull")
    Brand,

    /// Generic product term ("vodka", "pils", "cider")
    Product,

    /// Packaging/volume term ("blik", "75cl")
    Packaging,
}

impl KeywordKind {
    /// Points for a whole-word hit
    pub fn weight(&self) -> u32 {
        match self {
            KeywordKind::Marker => 8,
            KeywordKind::Brand => 6,
            KeywordKind::Product => 4,
            KeywordKind::Packaging => 1,
        }
    }
}

// ============================================================================
// CRATES / RETURNABLES
// ============================================================================

/// Any of these in name or volume sends the item to [`Category::Crates`]
pub const CRATE_TERMS: &[&str] = &[
    "krat",
    "crate",
    "statiegeld",
    "deposit",
    "emballage",
    "leeggoed",
];

// ============================================================================
// POST-SCORING CORRECTIONS
// ============================================================================

/// Named exception applied after keyword scoring: when `trigger` occurs in the
/// text, all points scored by `from` are moved to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    pub trigger: &'static str,
    pub from: Category,
    pub to: Category,
}

pub const CORRECTIONS: &[Correction] = &[
    // Somersby Watermelon and friends are cider, not bottled water
    Correction { trigger: "watermelon", from: Category::Water, to: Category::Cider },
    // Alcohol-free wine belongs with the other 0.0 products
    Correction { trigger: "alcoholvrije wijn", from: Category::Wine, to: Category::AlcoholFree },
];

// ============================================================================
// KNOWN PRODUCTS
// ============================================================================

pub const KNOWN_PRODUCTS: &[(&str, Category)] = &[
    // NL BIER
    ("heineken 24x33cl blik", Category::NlBeer),
    ("heineken 24x30cl fles", Category::NlBeer),
    ("heineken 12x50cl blik", Category::NlBeer),
    ("heineken fust 20l", Category::NlBeer),
    ("heineken pils 24x25cl fles", Category::NlBeer),
    ("grolsch premium pilsner 24x33cl blik", Category::NlBeer),
    ("grolsch kanon 24x50cl blik", Category::NlBeer),
    ("grolsch beugel 20x45cl", Category::NlBeer),
    ("grolsch 24x30cl fles", Category::NlBeer),
    ("bavaria pils 24x33cl blik", Category::NlBeer),
    ("bavaria 24x50cl blik", Category::NlBeer),
    ("bavaria 8.6 24x50cl blik", Category::NlBeer),
    ("amstel 24x33cl blik", Category::NlBeer),
    ("amstel 24x30cl fles", Category::NlBeer),
    ("amstel radler 24x33cl blik", Category::NlBeer),
    ("hertog jan 24x30cl fles", Category::NlBeer),
    ("hertog jan weizener 24x30cl fles", Category::NlBeer),
    ("brand pils 24x30cl fles", Category::NlBeer),
    ("brand weizen 24x30cl fles", Category::NlBeer),
    ("gulpener pilsner 24x30cl fles", Category::NlBeer),
    ("dommelsch pilsener 24x30cl fles", Category::NlBeer),
    ("alfa edel pils 24x30cl fles", Category::NlBeer),
    ("la trappe dubbel 24x33cl fles", Category::NlBeer),
    ("la trappe tripel 24x33cl fles", Category::NlBeer),
    ("la trappe quadrupel 24x33cl fles", Category::NlBeer),
    ("texels skuumkoppe 24x30cl fles", Category::NlBeer),
    ("lindeboom pilsener 24x30cl fles", Category::NlBeer),
    ("budels pilsner 24x30cl fles", Category::NlBeer),
    ("jopen hoppenbier 24x33cl fles", Category::NlBeer),
    ("brouwerij 't ij columbus 24x33cl fles", Category::NlBeer),
    // BUITENLANDS BIER
    ("corona extra 24x35.5cl fles", Category::ForeignBeer),
    ("desperados 24x33cl fles", Category::ForeignBeer),
    ("desperados 24x33cl blik", Category::ForeignBeer),
    ("jupiler 24x33cl blik", Category::ForeignBeer),
    ("jupiler 24x25cl fles", Category::ForeignBeer),
    ("stella artois 24x33cl blik", Category::ForeignBeer),
    ("stella artois 24x25cl fles", Category::ForeignBeer),
    ("leffe blond 24x33cl fles", Category::ForeignBeer),
    ("leffe bruin 24x33cl fles", Category::ForeignBeer),
    ("duvel 24x33cl fles", Category::ForeignBeer),
    ("hoegaarden wit 24x30cl fles", Category::ForeignBeer),
    ("affligem blond 24x30cl fles", Category::ForeignBeer),
    ("affligem tripel 24x30cl fles", Category::ForeignBeer),
    ("la chouffe 24x33cl fles", Category::ForeignBeer),
    ("westmalle tripel 24x33cl fles", Category::ForeignBeer),
    ("kwak 24x33cl fles", Category::ForeignBeer),
    ("palm 24x25cl fles", Category::ForeignBeer),
    ("erdinger weissbier 12x50cl fles", Category::ForeignBeer),
    ("paulaner hefe-weissbier 20x50cl fles", Category::ForeignBeer),
    ("warsteiner 24x33cl blik", Category::ForeignBeer),
    ("budweiser 24x33cl blik", Category::ForeignBeer),
    ("peroni nastro azzurro 24x33cl fles", Category::ForeignBeer),
    ("birra moretti 24x33cl fles", Category::ForeignBeer),
    ("estrella damm 24x33cl fles", Category::ForeignBeer),
    ("san miguel 24x33cl fles", Category::ForeignBeer),
    ("guinness draught 24x44cl blik", Category::ForeignBeer),
    ("kronenbourg 1664 24x25cl fles", Category::ForeignBeer),
    ("brahma 24x33cl fles", Category::ForeignBeer),
    ("sol 24x33cl fles", Category::ForeignBeer),
    ("tsingtao 24x33cl fles", Category::ForeignBeer),
    ("asahi super dry 24x33cl fles", Category::ForeignBeer),
    ("efes pilsener 24x50cl blik", Category::ForeignBeer),
    // ALCOHOLVRIJ
    ("heineken 0.0 24x33cl blik", Category::AlcoholFree),
    ("heineken 0.0 24x30cl fles", Category::AlcoholFree),
    ("amstel 0.0 24x33cl blik", Category::AlcoholFree),
    ("amstel radler 0.0 24x33cl blik", Category::AlcoholFree),
    ("grolsch 0.0 24x33cl blik", Category::AlcoholFree),
    ("bavaria 0.0 24x33cl blik", Category::AlcoholFree),
    ("bavaria 0.0 wit 24x30cl fles", Category::AlcoholFree),
    ("hertog jan 0.0 24x30cl fles", Category::AlcoholFree),
    ("brand 0.0 24x30cl fles", Category::AlcoholFree),
    ("jupiler 0.0 24x25cl fles", Category::AlcoholFree),
    ("leffe blond 0.0 24x33cl fles", Category::AlcoholFree),
    ("affligem blond 0.0 24x30cl fles", Category::AlcoholFree),
    ("erdinger alkoholfrei 12x50cl fles", Category::AlcoholFree),
    ("corona cero 24x33cl fles", Category::AlcoholFree),
    ("desperados virgin 0.0 24x33cl blik", Category::AlcoholFree),
    // CIDER
    ("somersby apple 24x33cl blik", Category::Cider),
    ("somersby apple 24x30cl fles", Category::Cider),
    ("somersby pear 24x33cl blik", Category::Cider),
    ("somersby watermelon 24x33cl blik", Category::Cider),
    ("somersby blackberry 24x33cl blik", Category::Cider),
    ("strongbow gold apple 24x33cl blik", Category::Cider),
    ("kopparberg strawberry & lime 15x50cl fles", Category::Cider),
    ("kopparberg mixed fruit 15x33cl fles", Category::Cider),
    ("apple bandit classic 24x30cl fles", Category::Cider),
    ("magners original 24x33cl fles", Category::Cider),
    ("rekorderlig strawberry-lime 15x50cl fles", Category::Cider),
    // STERKE DRANK
    ("smirnoff red vodka 70cl", Category::StrongSpirits),
    ("smirnoff red vodka 100cl", Category::StrongSpirits),
    ("absolut vodka 70cl", Category::StrongSpirits),
    ("absolut vodka 100cl", Category::StrongSpirits),
    ("grey goose vodka 70cl", Category::StrongSpirits),
    ("ketel 1 vodka 100cl", Category::StrongSpirits),
    ("eristoff vodka 70cl", Category::StrongSpirits),
    ("jack daniel's old no.7 70cl", Category::StrongSpirits),
    ("jack daniel's old no.7 100cl", Category::StrongSpirits),
    ("jack daniel's honey 70cl", Category::StrongSpirits),
    ("johnnie walker red label 70cl", Category::StrongSpirits),
    ("johnnie walker black label 70cl", Category::StrongSpirits),
    ("jameson irish whiskey 70cl", Category::StrongSpirits),
    ("ballantine's finest 70cl", Category::StrongSpirits),
    ("glenfiddich 12 years 70cl", Category::StrongSpirits),
    ("chivas regal 12 years 70cl", Category::StrongSpirits),
    ("bacardi carta blanca 70cl", Category::StrongSpirits),
    ("bacardi carta blanca 100cl", Category::StrongSpirits),
    ("captain morgan spiced gold 70cl", Category::StrongSpirits),
    ("captain morgan black 70cl", Category::StrongSpirits),
    ("havana club 3 anos 70cl", Category::StrongSpirits),
    ("kraken black spiced rum 70cl", Category::StrongSpirits),
    ("gordon's london dry gin 70cl", Category::StrongSpirits),
    ("bombay sapphire gin 70cl", Category::StrongSpirits),
    ("hendrick's gin 70cl", Category::StrongSpirits),
    ("tanqueray london dry gin 70cl", Category::StrongSpirits),
    ("olmeca silver tequila 70cl", Category::StrongSpirits),
    ("jose cuervo especial gold 70cl", Category::StrongSpirits),
    ("hennessy vs cognac 70cl", Category::StrongSpirits),
    ("remy martin vsop 70cl", Category::StrongSpirits),
    ("bols jonge jenever 100cl", Category::StrongSpirits),
    ("hooghoudt jonge graanjenever 100cl", Category::StrongSpirits),
    ("ketel 1 jonge jenever 100cl", Category::StrongSpirits),
    ("schrobbelèr 70cl", Category::StrongSpirits),
    ("sambuca molinari 70cl", Category::StrongSpirits),
    // LIKEUREN
    ("baileys original irish cream 70cl", Category::Liqueur),
    ("baileys original irish cream 100cl", Category::Liqueur),
    ("licor 43 70cl", Category::Liqueur),
    ("passoa 70cl", Category::Liqueur),
    ("malibu 70cl", Category::Liqueur),
    ("malibu 100cl", Category::Liqueur),
    ("jägermeister 70cl", Category::Liqueur),
    ("jägermeister 100cl", Category::Liqueur),
    ("kahlua 70cl", Category::Liqueur),
    ("disaronno amaretto 70cl", Category::Liqueur),
    ("safari 70cl", Category::Liqueur),
    ("pisang ambon 70cl", Category::Liqueur),
    ("dooley's toffee liqueur 70cl", Category::Liqueur),
    ("bols blue curacao 70cl", Category::Liqueur),
    ("limoncello di capri 70cl", Category::Liqueur),
    ("aperol 70cl", Category::Liqueur),
    ("campari 70cl", Category::Liqueur),
    // MIX DRANK
    ("lovka 10% vodka energy 24x25cl blik", Category::MixDrink),
    ("lovka 10% vodka lemon 24x25cl blik", Category::MixDrink),
    ("bacardi breezer orange 24x27.5cl fles", Category::MixDrink),
    ("bacardi breezer watermelon 24x27.5cl fles", Category::MixDrink),
    ("bacardi breezer lime 24x27.5cl fles", Category::MixDrink),
    ("smirnoff ice 24x27.5cl fles", Category::MixDrink),
    ("smirnoff ice 24x25cl blik", Category::MixDrink),
    ("jack daniel's & cola 24x33cl blik", Category::MixDrink),
    ("captain morgan & cola 12x33cl blik", Category::MixDrink),
    ("gordon's gin & tonic 12x25cl blik", Category::MixDrink),
    ("bacardi mojito 12x25cl blik", Category::MixDrink),
    ("safari orange 24x25cl blik", Category::MixDrink),
    ("passoa & orange 24x25cl blik", Category::MixDrink),
    ("white claw hard seltzer black cherry 12x33cl blik", Category::MixDrink),
    ("hooch lemon 24x33cl fles", Category::MixDrink),
    ("breezer pineapple 24x27.5cl fles", Category::MixDrink),
    ("flügel vodka energy 20x2cl", Category::MixDrink),
    ("shotz blue 40x2cl", Category::MixDrink),
    // WIJN
    ("casillero del diablo cabernet sauvignon 75cl", Category::Wine),
    ("casillero del diablo chardonnay 75cl", Category::Wine),
    ("campo viejo rioja tempranillo 75cl", Category::Wine),
    ("jacob's creek shiraz 75cl", Category::Wine),
    ("hardys merlot 75cl", Category::Wine),
    ("barefoot pinot grigio 75cl", Category::Wine),
    ("oxford landing sauvignon blanc 75cl", Category::Wine),
    ("mateus rosé 75cl", Category::Wine),
    ("la palma merlot 75cl", Category::Wine),
    ("huiswijn rood bag in box 3l", Category::Wine),
    ("huiswijn wit bag in box 3l", Category::Wine),
    ("huiswijn rosé bag in box 3l", Category::Wine),
    ("glühwein 100cl", Category::Wine),
    ("port ruby 75cl", Category::Wine),
    // MOUSSERENDE WIJN
    ("moët & chandon brut impérial 75cl", Category::SparklingWine),
    ("veuve clicquot brut 75cl", Category::SparklingWine),
    ("freixenet cordon negro brut 75cl", Category::SparklingWine),
    ("martini prosecco 75cl", Category::SparklingWine),
    ("la gioiosa prosecco 75cl", Category::SparklingWine),
    ("jacob's creek sparkling rosé 75cl", Category::SparklingWine),
    ("crémant de bourgogne brut 75cl", Category::SparklingWine),
    ("kinderchampagne 75cl", Category::SparklingWine),
    // FRISDRANK
    ("coca-cola 24x33cl blik", Category::SoftDrink),
    ("coca-cola zero 24x33cl blik", Category::SoftDrink),
    ("coca-cola 12x150cl pet", Category::SoftDrink),
    ("coca-cola 24x20cl fles", Category::SoftDrink),
    ("pepsi max 24x33cl blik", Category::SoftDrink),
    ("fanta orange 24x33cl blik", Category::SoftDrink),
    ("fanta cassis 24x33cl blik", Category::SoftDrink),
    ("sprite 24x33cl blik", Category::SoftDrink),
    ("7up 24x33cl blik", Category::SoftDrink),
    ("fuze tea sparkling 24x33cl blik", Category::SoftDrink),
    ("lipton ice tea sparkling 24x33cl blik", Category::SoftDrink),
    ("lipton ice tea green 12x150cl pet", Category::SoftDrink),
    ("schweppes tonic 24x20cl fles", Category::SoftDrink),
    ("schweppes ginger ale 24x20cl fles", Category::SoftDrink),
    ("schweppes bitter lemon 24x20cl fles", Category::SoftDrink),
    ("sisi no bubbles 24x20cl pak", Category::SoftDrink),
    ("royal club tonic 24x20cl fles", Category::SoftDrink),
    ("dr pepper 24x33cl blik", Category::SoftDrink),
    ("mountain dew 24x33cl blik", Category::SoftDrink),
    ("chocomel 24x25cl blik", Category::SoftDrink),
    ("fristi 24x20cl fles", Category::SoftDrink),
    ("rivella 24x33cl blik", Category::SoftDrink),
    ("arizona green tea 24x50cl blik", Category::SoftDrink),
    // ENERGY DRANK
    ("red bull 24x25cl blik", Category::EnergyDrink),
    ("red bull sugarfree 24x25cl blik", Category::EnergyDrink),
    ("red bull 12x47.3cl blik", Category::EnergyDrink),
    ("monster energy 12x50cl blik", Category::EnergyDrink),
    ("monster ultra white 12x50cl blik", Category::EnergyDrink),
    ("rockstar original 12x50cl blik", Category::EnergyDrink),
    ("burn original 24x25cl blik", Category::EnergyDrink),
    ("bullit energy 24x25cl blik", Category::EnergyDrink),
    ("slammers energy 24x25cl blik", Category::EnergyDrink),
    ("golden power energy 24x25cl blik", Category::EnergyDrink),
    ("krating daeng 24x25cl blik", Category::EnergyDrink),
    // SAPPEN
    ("appelsientje sinaasappel 12x100cl pak", Category::Juice),
    ("appelsientje appel 12x100cl pak", Category::Juice),
    ("tropicana orange 12x25cl fles", Category::Juice),
    ("capri-sun orange 40x20cl", Category::Juice),
    ("minute maid orange 24x33cl blik", Category::Juice),
    ("innocent smoothie mango 8x75cl", Category::Juice),
    ("van de boom appelsap 6x100cl", Category::Juice),
    ("taksi jus d'orange 24x20cl pak", Category::Juice),
    // WATER
    ("spa reine 24x50cl pet", Category::Water),
    ("spa reine 6x150cl pet", Category::Water),
    ("spa intense 24x50cl pet", Category::Water),
    ("spa touch of lemon 24x50cl pet", Category::Water),
    ("chaudfontaine blauw 24x50cl pet", Category::Water),
    ("chaudfontaine rood 24x50cl pet", Category::Water),
    ("evian 24x50cl pet", Category::Water),
    ("sourcy mineraalwater 24x50cl pet", Category::Water),
    ("bar-le-duc 24x50cl pet", Category::Water),
    ("san pellegrino 24x50cl pet", Category::Water),
    ("perrier 24x33cl blik", Category::Water),
    ("vittel 24x50cl pet", Category::Water),
    // KOFFIE & THEE
    ("douwe egberts aroma rood 500g", Category::CoffeeTea),
    ("douwe egberts koffiebonen 1kg", Category::CoffeeTea),
    ("senseo classic 36 pads", Category::CoffeeTea),
    ("nespresso ristretto 10 cups", Category::CoffeeTea),
    ("lavazza crema e gusto 1kg", Category::CoffeeTea),
    ("pickwick english tea blend 100 zakjes", Category::CoffeeTea),
    ("pickwick rooibos 20 zakjes", Category::CoffeeTea),
    ("lipton yellow label 100 zakjes", Category::CoffeeTea),
    ("campina koffiemelk 10x7.5g cupjes", Category::CoffeeTea),
    ("suikerzakjes 1000 stuks", Category::CoffeeTea),
    // SNACKS
    ("lay's paprika 20x40g", Category::Snacks),
    ("lay's naturel 20x40g", Category::Snacks),
    ("doritos nacho cheese 20x44g", Category::Snacks),
    ("pringles original 19x40g", Category::Snacks),
    ("duyvis borrelnoten 10x60g", Category::Snacks),
    ("calvé pindakaas 350g", Category::Snacks),
    ("m&m's peanut 24x45g", Category::Snacks),
    ("snickers 32x50g", Category::Snacks),
    ("mars 32x51g", Category::Snacks),
    ("twix 30x50g", Category::Snacks),
    ("kitkat 24x41.5g", Category::Snacks),
    ("haribo goudbeertjes 28x75g", Category::Snacks),
    ("daelmans stroopwafels 12x8 stuks", Category::Snacks),
    ("tuc crackers naturel 24x100g", Category::Snacks),
    // NON-FOOD
    ("plastic bekers 200cc 100 stuks", Category::NonFood),
    ("servetten wit 3-laags 50 stuks", Category::NonFood),
    ("rietjes zwart 250 stuks", Category::NonFood),
    ("vuilniszakken 60l 20 stuks", Category::NonFood),
    ("ijsblokjes 2kg", Category::NonFood),
    ("wegwerp handschoenen m 100 stuks", Category::NonFood),
    ("heineken bierglas 25cl 6 stuks", Category::NonFood),
    ("champagneglazen kunststof 10 stuks", Category::NonFood),
    ("bezorgkosten", Category::NonFood),
    // KRATTEN & STATIEGELD
    ("krat heineken 24x30cl leeg", Category::Crates),
    ("statiegeld fles 0.10", Category::Crates),
    ("statiegeld krat 3.90", Category::Crates),
    ("emballage fust 30.00", Category::Crates),
];

// ============================================================================
// KEYWORDS
// ============================================================================

pub const KEYWORDS: &[(&str, Category, KeywordKind)] = &[
    // NL BIER
    ("heineken", Category::NlBeer, KeywordKind::Brand),
    ("grolsch", Category::NlBeer, KeywordKind::Brand),
    ("bavaria", Category::NlBeer, KeywordKind::Brand),
    ("amstel", Category::NlBeer, KeywordKind::Brand),
    ("hertog jan", Category::NlBeer, KeywordKind::Brand),
    ("brand pils", Category::NlBeer, KeywordKind::Brand),
    ("gulpener", Category::NlBeer, KeywordKind::Brand),
    ("dommelsch", Category::NlBeer, KeywordKind::Brand),
    ("lindeboom", Category::NlBeer, KeywordKind::Brand),
    ("la trappe", Category::NlBeer, KeywordKind::Brand),
    ("texels", Category::NlBeer, KeywordKind::Brand),
    ("budels", Category::NlBeer, KeywordKind::Brand),
    ("jopen", Category::NlBeer, KeywordKind::Brand),
    ("pils", Category::NlBeer, KeywordKind::Product),
    ("pilsener", Category::NlBeer, KeywordKind::Product),
    ("pilsner", Category::NlBeer, KeywordKind::Product),
    ("bier", Category::NlBeer, KeywordKind::Product),
    ("fust", Category::NlBeer, KeywordKind::Packaging),
    ("30cl", Category::NlBeer, KeywordKind::Packaging),
    ("33cl", Category::NlBeer, KeywordKind::Packaging),
    // BUITENLANDS BIER
    ("corona", Category::ForeignBeer, KeywordKind::Brand),
    ("desperados", Category::ForeignBeer, KeywordKind::Brand),
    ("jupiler", Category::ForeignBeer, KeywordKind::Brand),
    ("stella artois", Category::ForeignBeer, KeywordKind::Brand),
    ("leffe", Category::ForeignBeer, KeywordKind::Brand),
    ("duvel", Category::ForeignBeer, KeywordKind::Brand),
    ("hoegaarden", Category::ForeignBeer, KeywordKind::Brand),
    ("affligem", Category::ForeignBeer, KeywordKind::Brand),
    ("chouffe", Category::ForeignBeer, KeywordKind::Brand),
    ("westmalle", Category::ForeignBeer, KeywordKind::Brand),
    ("erdinger", Category::ForeignBeer, KeywordKind::Brand),
    ("paulaner", Category::ForeignBeer, KeywordKind::Brand),
    ("warsteiner", Category::ForeignBeer, KeywordKind::Brand),
    ("budweiser", Category::ForeignBeer, KeywordKind::Brand),
    ("peroni", Category::ForeignBeer, KeywordKind::Brand),
    ("moretti", Category::ForeignBeer, KeywordKind::Brand),
    ("estrella", Category::ForeignBeer, KeywordKind::Brand),
    ("san miguel", Category::ForeignBeer, KeywordKind::Brand),
    ("guinness", Category::ForeignBeer, KeywordKind::Brand),
    ("kronenbourg", Category::ForeignBeer, KeywordKind::Brand),
    ("brahma", Category::ForeignBeer, KeywordKind::Brand),
    ("tsingtao", Category::ForeignBeer, KeywordKind::Brand),
    ("asahi", Category::ForeignBeer, KeywordKind::Brand),
    ("weissbier", Category::ForeignBeer, KeywordKind::Product),
    ("tripel", Category::ForeignBeer, KeywordKind::Product),
    ("lager", Category::ForeignBeer, KeywordKind::Product),
    ("stout", Category::ForeignBeer, KeywordKind::Product),
    ("ipa", Category::ForeignBeer, KeywordKind::Product),
    // ALCOHOLVRIJ
    ("0.0", Category::AlcoholFree, KeywordKind::Marker),
    ("0,0", Category::AlcoholFree, KeywordKind::Marker),
    ("alcoholvrij", Category::AlcoholFree, KeywordKind::Marker),
    ("alcohol free", Category::AlcoholFree, KeywordKind::Marker),
    ("alkoholfrei", Category::AlcoholFree, KeywordKind::Marker),
    ("cero", Category::AlcoholFree, KeywordKind::Product),
    // CIDER
    ("somersby", Category::Cider, KeywordKind::Brand),
    ("strongbow", Category::Cider, KeywordKind::Brand),
    ("kopparberg", Category::Cider, KeywordKind::Brand),
    ("apple bandit", Category::Cider, KeywordKind::Brand),
    ("magners", Category::Cider, KeywordKind::Brand),
    ("rekorderlig", Category::Cider, KeywordKind::Brand),
    ("cider", Category::Cider, KeywordKind::Product),
    // MIX DRANK
    ("bacardi breezer", Category::MixDrink, KeywordKind::Brand),
    ("breezer", Category::MixDrink, KeywordKind::Brand),
    ("smirnoff ice", Category::MixDrink, KeywordKind::Brand),
    ("lovka", Category::MixDrink, KeywordKind::Brand),
    ("white claw", Category::MixDrink, KeywordKind::Brand),
    ("hooch", Category::MixDrink, KeywordKind::Brand),
    ("flügel", Category::MixDrink, KeywordKind::Brand),
    ("shotz", Category::MixDrink, KeywordKind::Brand),
    ("& cola", Category::MixDrink, KeywordKind::Product),
    ("gin tonic", Category::MixDrink, KeywordKind::Product),
    ("premix", Category::MixDrink, KeywordKind::Product),
    ("hard seltzer", Category::MixDrink, KeywordKind::Product),
    ("mojito", Category::MixDrink, KeywordKind::Product),
    // STERKE DRANK
    ("smirnoff", Category::StrongSpirits, KeywordKind::Brand),
    ("absolut", Category::StrongSpirits, KeywordKind::Brand),
    ("grey goose", Category::StrongSpirits, KeywordKind::Brand),
    ("ketel 1", Category::StrongSpirits, KeywordKind::Brand),
    ("eristoff", Category::StrongSpirits, KeywordKind::Brand),
    ("jack daniel's", Category::StrongSpirits, KeywordKind::Brand),
    ("jack daniels", Category::StrongSpirits, KeywordKind::Brand),
    ("johnnie walker", Category::StrongSpirits, KeywordKind::Brand),
    ("jameson", Category::StrongSpirits, KeywordKind::Brand),
    ("ballantine's", Category::StrongSpirits, KeywordKind::Brand),
    ("glenfiddich", Category::StrongSpirits, KeywordKind::Brand),
    ("chivas", Category::StrongSpirits, KeywordKind::Brand),
    ("bacardi", Category::StrongSpirits, KeywordKind::Brand),
    ("captain morgan", Category::StrongSpirits, KeywordKind::Brand),
    ("havana club", Category::StrongSpirits, KeywordKind::Brand),
    ("kraken", Category::StrongSpirits, KeywordKind::Brand),
    ("gordon's", Category::StrongSpirits, KeywordKind::Brand),
    ("bombay sapphire", Category::StrongSpirits, KeywordKind::Brand),
    ("hendrick's", Category::StrongSpirits, KeywordKind::Brand),
    ("tanqueray", Category::StrongSpirits, KeywordKind::Brand),
    ("olmeca", Category::StrongSpirits, KeywordKind::Brand),
    ("jose cuervo", Category::StrongSpirits, KeywordKind::Brand),
    ("hennessy", Category::StrongSpirits, KeywordKind::Brand),
    ("remy martin", Category::StrongSpirits, KeywordKind::Brand),
    ("hooghoudt", Category::StrongSpirits, KeywordKind::Brand),
    ("vodka", Category::StrongSpirits, KeywordKind::Product),
    ("whisky", Category::StrongSpirits, KeywordKind::Product),
    ("whiskey", Category::StrongSpirits, KeywordKind::Product),
    ("bourbon", Category::StrongSpirits, KeywordKind::Product),
    ("rum", Category::StrongSpirits, KeywordKind::Product),
    ("gin", Category::StrongSpirits, KeywordKind::Product),
    ("tequila", Category::StrongSpirits, KeywordKind::Product),
    ("cognac", Category::StrongSpirits, KeywordKind::Product),
    ("brandy", Category::StrongSpirits, KeywordKind::Product),
    ("jenever", Category::StrongSpirits, KeywordKind::Product),
    ("sambuca", Category::StrongSpirits, KeywordKind::Product),
    ("35%", Category::StrongSpirits, KeywordKind::Product),
    ("37.5%", Category::StrongSpirits, KeywordKind::Product),
    ("40%", Category::StrongSpirits, KeywordKind::Product),
    ("43%", Category::StrongSpirits, KeywordKind::Product),
    ("70cl", Category::StrongSpirits, KeywordKind::Packaging),
    ("100cl", Category::StrongSpirits, KeywordKind::Packaging),
    // LIKEUREN
    ("baileys", Category::Liqueur, KeywordKind::Brand),
    ("licor 43", Category::Liqueur, KeywordKind::Brand),
    ("passoa", Category::Liqueur, KeywordKind::Brand),
    ("malibu", Category::Liqueur, KeywordKind::Brand),
    ("jägermeister", Category::Liqueur, KeywordKind::Brand),
    ("jagermeister", Category::Liqueur, KeywordKind::Brand),
    ("kahlua", Category::Liqueur, KeywordKind::Brand),
    ("disaronno", Category::Liqueur, KeywordKind::Brand),
    ("safari", Category::Liqueur, KeywordKind::Brand),
    ("pisang ambon", Category::Liqueur, KeywordKind::Brand),
    ("aperol", Category::Liqueur, KeywordKind::Brand),
    ("campari", Category::Liqueur, KeywordKind::Brand),
    ("likeur", Category::Liqueur, KeywordKind::Product),
    ("liqueur", Category::Liqueur, KeywordKind::Product),
    ("amaretto", Category::Liqueur, KeywordKind::Product),
    ("limoncello", Category::Liqueur, KeywordKind::Product),
    ("advocaat", Category::Liqueur, KeywordKind::Product),
    ("irish cream", Category::Liqueur, KeywordKind::Product),
    // WIJN
    ("casillero del diablo", Category::Wine, KeywordKind::Brand),
    ("campo viejo", Category::Wine, KeywordKind::Brand),
    ("jacob's creek", Category::Wine, KeywordKind::Brand),
    ("barefoot", Category::Wine, KeywordKind::Brand),
    ("wijn", Category::Wine, KeywordKind::Product),
    ("wine", Category::Wine, KeywordKind::Product),
    ("merlot", Category::Wine, KeywordKind::Product),
    ("cabernet", Category::Wine, KeywordKind::Product),
    ("sauvignon", Category::Wine, KeywordKind::Product),
    ("chardonnay", Category::Wine, KeywordKind::Product),
    ("pinot", Category::Wine, KeywordKind::Product),
    ("shiraz", Category::Wine, KeywordKind::Product),
    ("malbec", Category::Wine, KeywordKind::Product),
    ("rioja", Category::Wine, KeywordKind::Product),
    ("tempranillo", Category::Wine, KeywordKind::Product),
    ("riesling", Category::Wine, KeywordKind::Product),
    ("rosé", Category::Wine, KeywordKind::Product),
    ("bag in box", Category::Wine, KeywordKind::Packaging),
    ("75cl", Category::Wine, KeywordKind::Packaging),
    // MOUSSERENDE WIJN
    ("moët", Category::SparklingWine, KeywordKind::Brand),
    ("moet", Category::SparklingWine, KeywordKind::Brand),
    ("veuve clicquot", Category::SparklingWine, KeywordKind::Brand),
    ("freixenet", Category::SparklingWine, KeywordKind::Brand),
    ("champagne", Category::SparklingWine, KeywordKind::Product),
    ("prosecco", Category::SparklingWine, KeywordKind::Product),
    ("cava", Category::SparklingWine, KeywordKind::Product),
    ("crémant", Category::SparklingWine, KeywordKind::Product),
    ("cremant", Category::SparklingWine, KeywordKind::Product),
    ("mousserend", Category::SparklingWine, KeywordKind::Product),
    ("sparkling wine", Category::SparklingWine, KeywordKind::Product),
    ("brut", Category::SparklingWine, KeywordKind::Product),
    // FRISDRANK
    ("coca-cola", Category::SoftDrink, KeywordKind::Brand),
    ("coca cola", Category::SoftDrink, KeywordKind::Brand),
    ("pepsi", Category::SoftDrink, KeywordKind::Brand),
    ("fanta", Category::SoftDrink, KeywordKind::Brand),
    ("sprite", Category::SoftDrink, KeywordKind::Brand),
    ("7up", Category::SoftDrink, KeywordKind::Brand),
    ("fuze tea", Category::SoftDrink, KeywordKind::Brand),
    ("ice tea", Category::SoftDrink, KeywordKind::Brand),
    ("schweppes", Category::SoftDrink, KeywordKind::Brand),
    ("sisi", Category::SoftDrink, KeywordKind::Brand),
    ("royal club", Category::SoftDrink, KeywordKind::Brand),
    ("dr pepper", Category::SoftDrink, KeywordKind::Brand),
    ("mountain dew", Category::SoftDrink, KeywordKind::Brand),
    ("chocomel", Category::SoftDrink, KeywordKind::Brand),
    ("fristi", Category::SoftDrink, KeywordKind::Brand),
    ("rivella", Category::SoftDrink, KeywordKind::Brand),
    ("cola", Category::SoftDrink, KeywordKind::Product),
    ("tonic", Category::SoftDrink, KeywordKind::Product),
    ("ginger ale", Category::SoftDrink, KeywordKind::Product),
    ("bitter lemon", Category::SoftDrink, KeywordKind::Product),
    ("frisdrank", Category::SoftDrink, KeywordKind::Product),
    ("limonade", Category::SoftDrink, KeywordKind::Product),
    ("soda", Category::SoftDrink, KeywordKind::Product),
    ("blik", Category::SoftDrink, KeywordKind::Packaging),
    ("pet", Category::SoftDrink, KeywordKind::Packaging),
    ("33cl", Category::SoftDrink, KeywordKind::Packaging),
    // ENERGY DRANK
    ("red bull", Category::EnergyDrink, KeywordKind::Brand),
    ("monster", Category::EnergyDrink, KeywordKind::Brand),
    ("rockstar", Category::EnergyDrink, KeywordKind::Brand),
    ("bullit", Category::EnergyDrink, KeywordKind::Brand),
    ("slammers", Category::EnergyDrink, KeywordKind::Brand),
    ("golden power", Category::EnergyDrink, KeywordKind::Brand),
    ("krating daeng", Category::EnergyDrink, KeywordKind::Brand),
    ("energy", Category::EnergyDrink, KeywordKind::Product),
    ("energie", Category::EnergyDrink, KeywordKind::Product),
    ("25cl", Category::EnergyDrink, KeywordKind::Packaging),
    // SAPPEN
    ("appelsientje", Category::Juice, KeywordKind::Brand),
    ("tropicana", Category::Juice, KeywordKind::Brand),
    ("capri-sun", Category::Juice, KeywordKind::Brand),
    ("capri sun", Category::Juice, KeywordKind::Brand),
    ("minute maid", Category::Juice, KeywordKind::Brand),
    ("innocent", Category::Juice, KeywordKind::Brand),
    ("taksi", Category::Juice, KeywordKind::Brand),
    ("appelsap", Category::Juice, KeywordKind::Product),
    ("sinaasappelsap", Category::Juice, KeywordKind::Product),
    ("jus d'orange", Category::Juice, KeywordKind::Product),
    ("juice", Category::Juice, KeywordKind::Product),
    ("smoothie", Category::Juice, KeywordKind::Product),
    ("sap", Category::Juice, KeywordKind::Product),
    ("pak", Category::Juice, KeywordKind::Packaging),
    // WATER
    ("spa", Category::Water, KeywordKind::Brand),
    ("chaudfontaine", Category::Water, KeywordKind::Brand),
    ("evian", Category::Water, KeywordKind::Brand),
    ("sourcy", Category::Water, KeywordKind::Brand),
    ("bar-le-duc", Category::Water, KeywordKind::Brand),
    ("bar le duc", Category::Water, KeywordKind::Brand),
    ("san pellegrino", Category::Water, KeywordKind::Brand),
    ("perrier", Category::Water, KeywordKind::Brand),
    ("vittel", Category::Water, KeywordKind::Brand),
    ("water", Category::Water, KeywordKind::Product),
    ("mineraalwater", Category::Water, KeywordKind::Product),
    ("bronwater", Category::Water, KeywordKind::Product),
    ("pet", Category::Water, KeywordKind::Packaging),
    // KOFFIE & THEE
    ("douwe egberts", Category::CoffeeTea, KeywordKind::Brand),
    ("senseo", Category::CoffeeTea, KeywordKind::Brand),
    ("nespresso", Category::CoffeeTea, KeywordKind::Brand),
    ("lavazza", Category::CoffeeTea, KeywordKind::Brand),
    ("pickwick", Category::CoffeeTea, KeywordKind::Brand),
    ("koffie", Category::CoffeeTea, KeywordKind::Product),
    ("coffee", Category::CoffeeTea, KeywordKind::Product),
    ("koffiebonen", Category::CoffeeTea, KeywordKind::Product),
    ("koffiemelk", Category::CoffeeTea, KeywordKind::Product),
    ("espresso", Category::CoffeeTea, KeywordKind::Product),
    ("cappuccino", Category::CoffeeTea, KeywordKind::Product),
    ("thee", Category::CoffeeTea, KeywordKind::Product),
    ("tea", Category::CoffeeTea, KeywordKind::Product),
    ("suikerzakjes", Category::CoffeeTea, KeywordKind::Product),
    ("zakjes", Category::CoffeeTea, KeywordKind::Packaging),
    // SNACKS
    ("lay's", Category::Snacks, KeywordKind::Brand),
    ("doritos", Category::Snacks, KeywordKind::Brand),
    ("pringles", Category::Snacks, KeywordKind::Brand),
    ("duyvis", Category::Snacks, KeywordKind::Brand),
    ("snickers", Category::Snacks, KeywordKind::Brand),
    ("twix", Category::Snacks, KeywordKind::Brand),
    ("kitkat", Category::Snacks, KeywordKind::Brand),
    ("haribo", Category::Snacks, KeywordKind::Brand),
    ("m&m's", Category::Snacks, KeywordKind::Brand),
    ("chips", Category::Snacks, KeywordKind::Product),
    ("borrelnoten", Category::Snacks, KeywordKind::Product),
    ("nootjes", Category::Snacks, KeywordKind::Product),
    ("pinda", Category::Snacks, KeywordKind::Product),
    ("crackers", Category::Snacks, KeywordKind::Product),
    ("chocolade", Category::Snacks, KeywordKind::Product),
    ("stroopwafel", Category::Snacks, KeywordKind::Product),
    ("snoep", Category::Snacks, KeywordKind::Product),
    // NON-FOOD
    ("bekers", Category::NonFood, KeywordKind::Product),
    ("servetten", Category::NonFood, KeywordKind::Product),
    ("rietjes", Category::NonFood, KeywordKind::Product),
    ("vuilniszakken", Category::NonFood, KeywordKind::Product),
    ("handschoenen", Category::NonFood, KeywordKind::Product),
    ("glazen", Category::NonFood, KeywordKind::Product),
    ("bierglas", Category::NonFood, KeywordKind::Product),
    ("ijsblokjes", Category::NonFood, KeywordKind::Product),
    ("bezorgkosten", Category::NonFood, KeywordKind::Product),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_products_are_normalized() {
        for (name, _) in KNOWN_PRODUCTS {
            assert_eq!(name.trim(), *name, "untrimmed entry: {name:?}");
            assert_eq!(name.to_lowercase(), *name, "non-lowercase entry: {name:?}");
            assert!(!name.contains("  "), "double space in entry: {name:?}");
        }
    }

    #[test]
    fn test_known_products_unique() {
        let names: HashSet<&str> = KNOWN_PRODUCTS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), KNOWN_PRODUCTS.len());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (keyword, _, _) in KEYWORDS {
            assert_eq!(keyword.to_lowercase(), *keyword);
            assert!(!keyword.is_empty());
        }
    }

    #[test]
    fn test_crate_terms_have_no_table_conflicts() {
        // Every known product that mentions a crate term must itself be a crate SKU
        for (name, category) in KNOWN_PRODUCTS {
            if CRATE_TERMS.iter().any(|t| crate::classifier::mentions_crate_term(name, t)) {
                assert_eq!(*category, Category::Crates, "{name} mentions a crate term");
            }
        }
    }

    #[test]
    fn test_keyword_weights_are_ordered() {
        assert!(KeywordKind::Marker.weight() > KeywordKind::Brand.weight());
        assert!(KeywordKind::Brand.weight() > KeywordKind::Product.weight());
        assert!(KeywordKind::Product.weight() > KeywordKind::Packaging.weight());
    }
}
