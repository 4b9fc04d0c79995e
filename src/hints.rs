// 🔎 Product hints - optional lookup in the order API
//
// Some order lines only carry a product id. The order API knows the product's
// fam2ID, so we ask it first. One attempt under a timeout; any failure falls
// back to name/volume classification.

use crate::catalog::Catalog;
use crate::classifier::{ClassifiableItem, ClassificationResult};
use crate::entities::Category;
use crate::error::HintError;
use crate::observer::ClassificationObserver;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[async_trait]
pub trait HintSource: Send + Sync {
    /// Category code for a product id, `None` when the product is unknown
    async fn lookup(&self, external_id: &str) -> Result<Option<String>, HintError>;
}

// ============================================================================
// MEGAWIN ORDER API
// ============================================================================

/// Product payload as returned by `GET {base}/products/{id}`.
/// Only the category is read; everything else is ignored.
#[derive(Debug, Deserialize)]
struct ProductPayload {
    #[serde(rename = "fam2ID", default)]
    fam2_id: Option<CodeValue>,
}

/// The API sends fam2ID as a number on some endpoints and a string on others
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CodeValue {
    Number(u64),
    Text(String),
}

impl CodeValue {
    fn into_code(self) -> Option<String> {
        match self {
            CodeValue::Number(n) => Some(n.to_string()),
            CodeValue::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
        }
    }
}

fn parse_product(body: &str) -> Result<Option<String>, HintError> {
    let payload: ProductPayload =
        serde_json::from_str(body).map_err(|e| HintError::Decode(e.to_string()))?;
    Ok(payload.fam2_id.and_then(CodeValue::into_code))
}

pub struct MegawinHintSource {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl MegawinHintSource {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, HintError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HintError::Request(e.to_string()))?;

        Ok(MegawinHintSource {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn product_url(&self, external_id: &str) -> String {
        format!("{}/products/{}", self.base_url, external_id.trim())
    }
}

#[async_trait]
impl HintSource for MegawinHintSource {
    async fn lookup(&self, external_id: &str) -> Result<Option<String>, HintError> {
        let mut request = self.client.get(self.product_url(external_id));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HintError::Request(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(HintError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| HintError::Request(e.to_string()))?;

        parse_product(&body)
    }
}

// ============================================================================
// CLASSIFICATION WITH HINTS
// ============================================================================

/// Classify, asking `source` first when the item has an external id.
///
/// A known category code from the lookup is reported as a preset; anything
/// else (unknown code, no answer, error, timeout) falls back to
/// [`Catalog::classify_observed`].
pub async fn classify_with_hints(
    catalog: &Catalog,
    item: &ClassifiableItem,
    source: Option<&dyn HintSource>,
    timeout: Duration,
    observer: &dyn ClassificationObserver,
) -> ClassificationResult {
    if item.preset().is_some() {
        return catalog.classify_observed(item, observer);
    }

    let external_id = item
        .external_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    if let (Some(source), Some(external_id)) = (source, external_id) {
        let lookup = tokio::time::timeout(timeout, source.lookup(external_id)).await;

        match lookup {
            Ok(Ok(Some(code))) if Category::from_code(&code).is_some() => {
                let result = ClassificationResult::preset(code.trim());
                observer.on_classified(item, &result);
                return result;
            }
            Ok(Ok(Some(code))) => {
                observer.on_hint_failed(item, &format!("unknown category code {code:?}"));
            }
            Ok(Ok(None)) => {}
            Ok(Err(e)) => observer.on_hint_failed(item, &e.to_string()),
            Err(_) => observer.on_hint_failed(item, &HintError::Timeout(timeout).to_string()),
        }
    }

    catalog.classify_observed(item, observer)
}

/// Classify a batch concurrently; results are in input order
pub async fn classify_all_with_hints(
    catalog: &Catalog,
    items: &[ClassifiableItem],
    source: Option<&dyn HintSource>,
    timeout: Duration,
    observer: &dyn ClassificationObserver,
) -> Vec<ClassificationResult> {
    let lookups = items
        .iter()
        .map(|item| classify_with_hints(catalog, item, source, timeout, observer));
    futures::future::join_all(lookups).await
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::MatchType;
    use crate::observer::NoopObserver;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TIMEOUT: Duration = Duration::from_millis(200);

    #[derive(Default)]
    struct FakeSource {
        codes: HashMap<String, String>,
        delay: Option<Duration>,
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl HintSource for FakeSource {
        async fn lookup(&self, external_id: &str) -> Result<Option<String>, HintError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(HintError::Status(503));
            }
            Ok(self.codes.get(external_id).cloned())
        }
    }

    fn source_with(id: &str, code: &str) -> FakeSource {
        FakeSource {
            codes: HashMap::from([(id.to_string(), code.to_string())]),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_product_number_and_text() {
        assert_eq!(parse_product(r#"{"fam2ID": 16, "name": "x"}"#).unwrap(), Some("16".to_string()));
        assert_eq!(parse_product(r#"{"fam2ID": " 5 "}"#).unwrap(), Some("5".to_string()));
        assert_eq!(parse_product(r#"{"fam2ID": ""}"#).unwrap(), None);
        assert_eq!(parse_product(r#"{"name": "no family"}"#).unwrap(), None);
        assert!(matches!(parse_product("not json"), Err(HintError::Decode(_))));
    }

    #[test]
    fn test_product_url() {
        let source = MegawinHintSource::new("https://api.example.com/v1/", None, TIMEOUT).unwrap();
        assert_eq!(source.product_url(" 123 "), "https://api.example.com/v1/products/123");
    }

    #[tokio::test]
    async fn test_hint_used_when_known() {
        let catalog = Catalog::with_defaults();
        let source = source_with("P-1", "16");
        let item = ClassifiableItem::new("Onbekend Artikel XYZ123").with_external_id("P-1");

        let result = classify_with_hints(&catalog, &item, Some(&source), TIMEOUT, &NoopObserver).await;

        assert_eq!(result.category_code, "16");
        assert_eq!(result.match_type, MatchType::Preset);
    }

    #[tokio::test]
    async fn test_preset_skips_lookup() {
        let catalog = Catalog::with_defaults();
        let source = source_with("P-1", "16");
        let item = ClassifiableItem::new("Red Bull").with_external_id("P-1").with_preset("8");

        let result = classify_with_hints(&catalog, &item, Some(&source), TIMEOUT, &NoopObserver).await;

        assert_eq!(result.category_code, "8");
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_hint_code_falls_back() {
        let catalog = Catalog::with_defaults();
        let source = source_with("P-1", "404");
        let item = ClassifiableItem::new("Red Bull 24x25cl blik").with_external_id("P-1");

        let result = classify_with_hints(&catalog, &item, Some(&source), TIMEOUT, &NoopObserver).await;

        assert_eq!(result.category_code, Category::EnergyDrink.code());
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[tokio::test]
    async fn test_error_fails_open() {
        let catalog = Catalog::with_defaults();
        let source = FakeSource { fail: true, ..Default::default() };
        let item = ClassifiableItem::new("Krat Heineken 24x30cl").with_external_id("P-1");

        let result = classify_with_hints(&catalog, &item, Some(&source), TIMEOUT, &NoopObserver).await;

        assert_eq!(result.category_code, Category::Crates.code());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timeout_fails_open() {
        let catalog = Catalog::with_defaults();
        let source = FakeSource {
            codes: HashMap::from([("P-1".to_string(), "5".to_string())]),
            delay: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let item = ClassifiableItem::new("Absolut vodka 70cl").with_external_id("P-1");

        let started = std::time::Instant::now();
        let result =
            classify_with_hints(&catalog, &item, Some(&source), Duration::from_millis(20), &NoopObserver).await;

        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(result.category_code, Category::StrongSpirits.code());
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[tokio::test]
    async fn test_no_source_or_id() {
        let catalog = Catalog::with_defaults();
        let source = source_with("P-1", "16");

        let no_id = ClassifiableItem::new("Absolut vodka 70cl").with_external_id("  ");
        let result = classify_with_hints(&catalog, &no_id, Some(&source), TIMEOUT, &NoopObserver).await;
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        let with_id = ClassifiableItem::new("Absolut vodka 70cl").with_external_id("P-1");
        let result = classify_with_hints(&catalog, &with_id, None, TIMEOUT, &NoopObserver).await;
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[tokio::test]
    async fn test_batch_keeps_order() {
        let catalog = Catalog::with_defaults();
        let source = source_with("P-2", "11");
        let items = vec![
            ClassifiableItem::new("Red Bull 24x25cl blik"),
            ClassifiableItem::new("Mystery pack").with_external_id("P-2"),
            ClassifiableItem::new(""),
        ];

        let codes: Vec<String> =
            classify_all_with_hints(&catalog, &items, Some(&source), TIMEOUT, &NoopObserver)
                .await
                .into_iter()
                .map(|r| r.category_code)
                .collect();

        assert_eq!(codes, vec!["8", "11", "13"]);
    }
}
