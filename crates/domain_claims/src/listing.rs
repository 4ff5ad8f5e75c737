//! Plain-text rendering of the claim list
//!
//! Used by the listing route when an operator asks for a readable report
//! instead of JSON.

use std::fmt::Write;

use crate::claim::Claim;

/// Text returned when there is nothing to list
pub const EMPTY_LISTING: &str = "No claims found.";

/// Renders claims as a preformatted block, one entry per claim
///
/// Claims are rendered in the order given; the store already returns them
/// newest first.
pub fn render_plain_text(claims: &[Claim]) -> String {
    if claims.is_empty() {
        return format!("{EMPTY_LISTING}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Giveaway claims ({})", claims.len());
    let _ = writeln!(out, "{}", "=".repeat(40));

    for claim in claims {
        let prizes = claim.prize_names();
        let prizes = if prizes.is_empty() {
            "-".to_string()
        } else {
            prizes.join(", ")
        };

        let _ = writeln!(
            out,
            "{}  {}",
            claim.tracking_id(),
            claim.claim_date.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out, "  Name:    {}", claim.full_name);
        let _ = writeln!(out, "  Email:   {}", claim.email);
        let _ = writeln!(out, "  Phone:   {}", claim.phone.as_deref().unwrap_or("-"));
        let _ = writeln!(out, "  City:    {}", claim.city.as_deref().unwrap_or("-"));
        let _ = writeln!(out, "  Address: {}", claim.full_address);
        let _ = writeln!(out, "  Prizes:  {}", prizes);
        let _ = writeln!(out, "  Fee:     {}", claim.total_fee);
        let _ = writeln!(out, "{}", "-".repeat(40));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::{ClaimId, ShippingFee};
    use serde_json::json;

    #[test]
    fn test_empty_listing() {
        assert_eq!(render_plain_text(&[]), "No claims found.\n");
    }

    #[test]
    fn test_renders_each_claim() {
        let claim = Claim {
            id: ClaimId::new(12),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            city: Some("Lagos".to_string()),
            full_address: "1 Main St".to_string(),
            selected_prizes: json!([{ "name": "Mug" }, { "name": "Hat" }]),
            total_fee: ShippingFee::from_units(1500),
            claim_date: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        };

        let text = render_plain_text(&[claim]);

        assert!(text.starts_with("Giveaway claims (1)"));
        assert!(text.contains("GW-000012  2026-03-01 09:30:00 UTC"));
        assert!(text.contains("Phone:   -"));
        assert!(text.contains("City:    Lagos"));
        assert!(text.contains("Prizes:  Mug, Hat"));
        assert!(text.contains("Fee:     NGN 1500.00"));
    }
}
