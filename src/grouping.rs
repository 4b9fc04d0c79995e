// 📦 Order grouping - order lines → category groups
//
// Used by confirmation mails and packing slips. Contract:
// - every line lands in exactly one group
// - groups follow the fixed render priority of the taxonomy, not the alphabet
// - codes outside the taxonomy go to the miscellaneous group
// - order total == sum of group subtotals
// - money is checked i64 cents; an overflowing amount rejects the order

use crate::catalog::Catalog;
use crate::classifier::{ClassifiableItem, ClassificationResult};
use crate::entities::Category;
use crate::error::GroupingError;
use serde::{Deserialize, Serialize};

// ============================================================================
// ORDER LINE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Category code already on the order line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub quantity: u32,

    /// Unit price in euro cents
    pub unit_price_cents: i64,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price_cents: i64) -> Self {
        OrderLine {
            name: name.into(),
            volume: None,
            external_id: None,
            category: None,
            quantity,
            unit_price_cents,
        }
    }

    /// `quantity * unit_price_cents`, `None` on overflow
    pub fn line_total_cents(&self) -> Option<i64> {
        i64::from(self.quantity).checked_mul(self.unit_price_cents)
    }

    /// Classifier input for this line
    pub fn to_item(&self) -> ClassifiableItem {
        ClassifiableItem {
            name: self.name.clone(),
            volume: self.volume.clone(),
            external_id: self.external_id.clone(),
            preset_category: self.category.clone(),
        }
    }
}

// ============================================================================
// GROUPED ORDER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedLine {
    pub line: OrderLine,
    pub classification: ClassificationResult,
    pub line_total_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub code: String,
    pub name: String,
    pub lines: Vec<GroupedLine>,
    pub subtotal_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedOrder {
    pub groups: Vec<CategoryGroup>,
    pub total_cents: i64,
}

impl GroupedOrder {
    pub fn line_count(&self) -> usize {
        self.groups.iter().map(|g| g.lines.len()).sum()
    }

    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.code == category.code())
    }
}

/// Classify and group order lines
pub fn group_order(catalog: &Catalog, lines: &[OrderLine]) -> Result<GroupedOrder, GroupingError> {
    let items: Vec<ClassifiableItem> = lines.iter().map(OrderLine::to_item).collect();
    let results = catalog.classify_all(&items);
    group_classified(lines, results)
}

/// Group lines whose classifications were computed elsewhere (e.g. with hints).
/// `results[i]` belongs to `lines[i]`.
pub fn group_classified(
    lines: &[OrderLine],
    results: Vec<ClassificationResult>,
) -> Result<GroupedOrder, GroupingError> {
    if lines.len() != results.len() {
        return Err(GroupingError::LengthMismatch {
            lines: lines.len(),
            results: results.len(),
        });
    }

    let mut buckets: Vec<Vec<GroupedLine>> = vec![Vec::new(); Category::ALL.len()];

    for (index, (line, classification)) in lines.iter().zip(results).enumerate() {
        let line_total_cents = line
            .line_total_cents()
            .ok_or_else(|| GroupingError::LineTotalOverflow {
                line: index + 1,
                name: line.name.clone(),
            })?;

        let category = classification.category();
        buckets[category.priority()].push(GroupedLine {
            line: line.clone(),
            line_total_cents,
            classification,
        });
    }

    let mut groups = Vec::new();
    for (category, lines) in Category::ALL.iter().zip(buckets) {
        if lines.is_empty() {
            continue;
        }
        let subtotal_cents =
            checked_sum(lines.iter().map(|l| l.line_total_cents)).ok_or(GroupingError::TotalOverflow)?;
        groups.push(CategoryGroup {
            code: category.code().to_string(),
            name: category.name().to_string(),
            lines,
            subtotal_cents,
        });
    }

    let total_cents =
        checked_sum(groups.iter().map(|g| g.subtotal_cents)).ok_or(GroupingError::TotalOverflow)?;

    Ok(GroupedOrder { groups, total_cents })
}

fn checked_sum(values: impl IntoIterator<Item = i64>) -> Option<i64> {
    values.into_iter().try_fold(0i64, i64::checked_add)
}

// ============================================================================
// TESTS
// ============================================================================
