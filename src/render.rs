// 🧾 Packing slip - plain-text rendering of a grouped order

use crate::grouping::GroupedOrder;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const WIDTH: usize = 56;

/// Format cents as Dutch euro amount, e.g. 123456 → "€ 1.234,56"
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let euros = (abs / 100).to_string();
    let rest = abs % 100;

    let mut grouped = String::new();
    for (i, c) in euros.chars().enumerate() {
        if i > 0 && (euros.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}€ {grouped},{rest:02}")
}

fn row(out: &mut String, left: &str, right: &str) {
    let left_width = left.chars().count();
    let right_width = right.chars().count();
    let pad = WIDTH.saturating_sub(left_width + right_width).max(1);
    let _ = writeln!(out, "{left}{}{right}", " ".repeat(pad));
}

/// Render a packing slip with one section per category group
pub fn render_packing_slip(order: &GroupedOrder, reference: &str, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let rule = "=".repeat(WIDTH);

    let _ = writeln!(out, "PAKBON {reference}");
    let _ = writeln!(out, "Datum: {}", generated_at.format("%d-%m-%Y %H:%M"));
    let _ = writeln!(out, "{rule}");

    for group in &order.groups {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", group.name);
        for grouped in &group.lines {
            let line = &grouped.line;
            let label = match line.volume.as_deref().filter(|v| !v.trim().is_empty()) {
                Some(volume) => format!("  {:>3} x {} ({})", line.quantity, line.name, volume.trim()),
                None => format!("  {:>3} x {}", line.quantity, line.name),
            };
            row(&mut out, &label, &format_cents(grouped.line_total_cents));
        }
        row(&mut out, "  Subtotaal", &format_cents(group.subtotal_cents));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{rule}");
    row(&mut out, &format!("TOTAAL ({} regels)", order.line_count()), &format_cents(order.total_cents));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::grouping::{group_order, OrderLine};
    use chrono::TimeZone;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "€ 0,00");
        assert_eq!(format_cents(5), "€ 0,05");
        assert_eq!(format_cents(1799), "€ 17,99");
        assert_eq!(format_cents(123456), "€ 1.234,56");
        assert_eq!(format_cents(100000000), "€ 1.000.000,00");
        assert_eq!(format_cents(-250), "-€ 2,50");
    }

    #[test]
    fn test_packing_slip_layout() {
        let mut vodka = OrderLine::new("Absolut vodka", 1, 1899);
        vodka.volume = Some("70cl".to_string());

        let lines = vec![
            OrderLine::new("Krat Heineken 24x30cl", 2, 390),
            OrderLine::new("Heineken 24x33cl blik", 2, 1799),
            vodka,
        ];
        let order = group_order(Catalog::global(), &lines).unwrap();
        let generated_at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();

        let slip = render_packing_slip(&order, "ORD-1001", generated_at);

        assert!(slip.starts_with("PAKBON ORD-1001\nDatum: 17-05-2024 09:30\n"));
        let beer = slip.find("NL BIER").unwrap();
        let spirits = slip.find("STERKE DRANK").unwrap();
        let crates = slip.find("KRATTEN & STATIEGELD").unwrap();
        assert!(beer < spirits && spirits < crates);

        assert!(slip.contains("    2 x Heineken 24x33cl blik"));
        assert!(slip.contains("    1 x Absolut vodka (70cl)"));
        assert!(slip.contains("€ 35,98"));
        assert!(slip.contains("TOTAAL (3 regels)"));
        assert!(slip.trim_end().ends_with(&format_cents(2 * 390 + 2 * 1799 + 1899)));
    }
}
