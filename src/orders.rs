// 📂 Order import - CSV → order lines
//
// Expected header: name,volume,external_id,category,quantity,unit_price
// Prices use either a decimal comma or point ("17,99", "17.99", "€ 17,99").
// With a decimal comma, points are thousands separators ("1.234,56").

use crate::grouping::OrderLine;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct OrderLineRecord {
    name: String,
    volume: Option<String>,
    external_id: Option<String>,
    category: Option<String>,
    quantity: u32,
    unit_price: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a euro amount into cents
pub fn parse_price_cents(raw: &str) -> Result<i64> {
    let trimmed = raw.trim().trim_start_matches('€').trim();
    let cleaned = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let (euros, cents) = match digits.split_once('.') {
        Some((euros, cents)) => (euros, cents),
        None => (digits, ""),
    };

    if euros.is_empty() && cents.is_empty() {
        bail!("empty price {raw:?}");
    }
    if cents.len() > 2 || !cents.chars().all(|c| c.is_ascii_digit()) {
        bail!("invalid cents in price {raw:?}");
    }

    let euros: i64 = if euros.is_empty() {
        0
    } else {
        euros.parse().with_context(|| format!("invalid price {raw:?}"))?
    };
    let cents: i64 = match cents.len() {
        0 => 0,
        1 => cents.parse::<i64>()? * 10,
        _ => cents.parse()?,
    };

    let Some(total) = euros.checked_mul(100).and_then(|e| e.checked_add(cents)) else {
        bail!("price {raw:?} out of range");
    };
    Ok(if negative { -total } else { total })
}

/// Read order lines from any CSV source
pub fn read_order_lines<R: Read>(reader: R) -> Result<Vec<OrderLine>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut lines = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // Header is line 1
        let line_number = index + 2;
        let record: OrderLineRecord =
            result.with_context(|| format!("Failed to deserialize order line {line_number}"))?;

        let unit_price_cents = parse_price_cents(&record.unit_price)
            .with_context(|| format!("Invalid unit price on line {line_number}"))?;

        lines.push(OrderLine {
            name: record.name,
            volume: non_blank(record.volume),
            external_id: non_blank(record.external_id),
            category: non_blank(record.category),
            quantity: record.quantity,
            unit_price_cents,
        });
    }

    Ok(lines)
}

/// Load order lines from a CSV file
pub fn load_order_lines(csv_path: &Path) -> Result<Vec<OrderLine>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;
    read_order_lines(file)
}
