// 📚 Catalog - Immutable classification tables
//
// Built once from the literal tables (plus optional JSON overrides) and never
// mutated afterwards, so it can be shared freely between threads.
//
// Override file format:
// {
//   "products": [{ "name": "Hooghoudt Kornwijn 100cl", "category": "16" }],
//   "keywords": [{ "keyword": "kornwijn", "category": "16", "kind": "product" }]
// }

use crate::classifier::normalize;
use crate::entities::Category;
use crate::error::CatalogError;
use crate::tables::{Correction, KeywordKind, CORRECTIONS, CRATE_TERMS, KEYWORDS, KNOWN_PRODUCTS};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

static GLOBAL: LazyLock<Catalog> = LazyLock::new(Catalog::with_defaults);

// ============================================================================
// KEYWORD RULE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Lowercase search term
    pub term: String,
    pub category: Category,
    pub kind: KeywordKind,
}

// ============================================================================
// OVERRIDES (JSON)
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogOverrides {
    #[serde(default)]
    pub products: Vec<ProductOverride>,

    #[serde(default)]
    pub keywords: Vec<KeywordOverride>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOverride {
    pub name: String,
    /// fam2ID code
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordOverride {
    pub keyword: String,
    /// fam2ID code
    pub category: String,
    #[serde(default = "default_kind")]
    pub kind: KeywordKind,
}

fn default_kind() -> KeywordKind {
    KeywordKind::Product
}

fn resolve_code(code: &str, entry: &str) -> Result<Category, CatalogError> {
    Category::from_code(code).ok_or_else(|| CatalogError::UnknownCategory {
        code: code.to_string(),
        entry: entry.to_string(),
    })
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Normalized product name → category, in insertion order
    known: IndexMap<String, Category>,
    keywords: Vec<KeywordRule>,
    crate_terms: Vec<String>,
    corrections: Vec<Correction>,
}

impl Catalog {
    /// Build the catalog from the built-in tables
    pub fn with_defaults() -> Self {
        let known = KNOWN_PRODUCTS
            .iter()
            .map(|(name, category)| (normalize(name), *category))
            .collect();

        let keywords = KEYWORDS
            .iter()
            .map(|(term, category, kind)| KeywordRule {
                term: normalize(term),
                category: *category,
                kind: *kind,
            })
            .collect();

        Catalog {
            known,
            keywords,
            crate_terms: CRATE_TERMS.iter().map(|t| t.to_string()).collect(),
            corrections: CORRECTIONS.to_vec(),
        }
    }

    /// Process-wide catalog with the built-in tables, built on first use
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Built-in tables extended with an overrides file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let overrides: CatalogOverrides = serde_json::from_str(&content)?;
        let catalog = Catalog::with_defaults().with_overrides(overrides)?;

        info!(
            path = %path.display(),
            products = catalog.product_count(),
            keywords = catalog.keyword_count(),
            "loaded catalog overrides"
        );

        Ok(catalog)
    }

    /// Merge overrides. Existing product names keep their position and take the
    /// new category; new names are appended.
    pub fn with_overrides(mut self, overrides: CatalogOverrides) -> Result<Self, CatalogError> {
        for product in overrides.products {
            let name = normalize(&product.name);
            if name.is_empty() {
                return Err(CatalogError::EmptyEntry("product"));
            }
            let category = resolve_code(&product.category, &product.name)?;
            self.known.insert(name, category);
        }

        for keyword in overrides.keywords {
            let term = normalize(&keyword.keyword);
            if term.is_empty() {
                return Err(CatalogError::EmptyEntry("keyword"));
            }
            let category = resolve_code(&keyword.category, &keyword.keyword)?;
            self.keywords.push(KeywordRule {
                term,
                category,
                kind: keyword.kind,
            });
        }

        Ok(self)
    }

    /// O(1) lookup of a normalized product name
    pub fn exact(&self, normalized: &str) -> Option<Category> {
        self.known.get(normalized).copied()
    }

    /// Known products in table order
    pub fn known_products(&self) -> impl Iterator<Item = (&str, Category)> {
        self.known.iter().map(|(name, category)| (name.as_str(), *category))
    }

    pub fn keywords(&self) -> &[KeywordRule] {
        &self.keywords
    }

    pub fn crate_terms(&self) -> &[String] {
        &self.crate_terms
    }

    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    pub fn product_count(&self) -> usize {
        self.known.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_loaded() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.product_count(), KNOWN_PRODUCTS.len());
        assert_eq!(catalog.keyword_count(), KEYWORDS.len());
        assert_eq!(catalog.exact("heineken 24x33cl blik"), Some(Category::NlBeer));
    }

    #[test]
    fn test_known_products_keep_table_order() {
        let catalog = Catalog::with_defaults();
        let first = catalog.known_products().next();
        assert_eq!(first, Some((KNOWN_PRODUCTS[0].0, KNOWN_PRODUCTS[0].1)));
    }

    #[test]
    fn test_overrides_append_and_replace() {
        let overrides: CatalogOverrides = serde_json::from_str(
            r#"{
                "products": [
                    { "name": "  Hooghoudt Kornwijn 100cl ", "category": "16" },
                    { "name": "Heineken 24x33cl blik", "category": "2" }
                ],
                "keywords": [
                    { "keyword": "Kornwijn", "category": "16", "kind": "brand" },
                    { "keyword": "graanjenever", "category": "16" }
                ]
            }"#,
        )
        .unwrap();

        let catalog = Catalog::with_defaults().with_overrides(overrides).unwrap();

        assert_eq!(catalog.product_count(), KNOWN_PRODUCTS.len() + 1);
        assert_eq!(catalog.exact("hooghoudt kornwijn 100cl"), Some(Category::StrongSpirits));
        // Replaced in place, position unchanged
        assert_eq!(catalog.exact("heineken 24x33cl blik"), Some(Category::ForeignBeer));
        assert_eq!(catalog.known_products().next().map(|(n, _)| n), Some("heineken 24x33cl blik"));

        let added: Vec<&KeywordRule> = catalog.keywords().iter().rev().take(2).collect();
        assert_eq!(added[0].term, "graanjenever");
        assert_eq!(added[0].kind, KeywordKind::Product);
        assert_eq!(added[1].term, "kornwijn");
        assert_eq!(added[1].kind, KeywordKind::Brand);
    }

    #[test]
    fn test_overrides_reject_unknown_category() {
        let overrides = CatalogOverrides {
            products: vec![ProductOverride {
                name: "Mystery".to_string(),
                category: "404".to_string(),
            }],
            keywords: vec![],
        };

        let err = Catalog::with_defaults().with_overrides(overrides).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { ref code, .. } if code == "404"));
    }

    #[test]
    fn test_overrides_reject_empty_entries() {
        let overrides = CatalogOverrides {
            products: vec![],
            keywords: vec![KeywordOverride {
                keyword: "   ".to_string(),
                category: "1".to_string(),
                kind: KeywordKind::Brand,
            }],
        };

        let err = Catalog::with_defaults().with_overrides(overrides).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyEntry("keyword")));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "products": [{{ "name": "Huismerk Pils 24x30cl", "category": "1" }}] }}"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.exact("huismerk pils 24x30cl"), Some(Category::NlBeer));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Catalog::from_file("/nonexistent/overrides.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
    }
}
