//! Top tenant ranking and tenant credit ratings.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::normalize::parse_decimal;
use super::resolver::resolve;
use crate::overrides::OverrideTables;

/// Where a rent roll lives and which keys it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantSource {
    pub path: &'static str,
    pub percent_field: &'static str,
    pub name_field: &'static str,
}

/// Rent rolls in the order they are trusted for the top tenant.
pub const TOP_TENANT_SOURCES: [TenantSource; 6] = [
    TenantSource {
        path: "top_largest_tenants_by_ubr.tenants",
        percent_field: "percent_of_total_base_rent",
        name_field: "tenant",
    },
    TenantSource {
        path: "largest_tenants_based_on_uw_base_rent.tenants",
        percent_field: "percent_of_uw_base_rent",
        name_field: "tenant_name",
    },
    TenantSource {
        path: "major_tenant.tenants",
        percent_field: "percent_of_total_annual_uw_base_rent",
        name_field: "name",
    },
    TenantSource {
        path: "tenant_summary.tenants",
        percent_field: "percent_of_total_uw_base_rent",
        name_field: "name",
    },
    TenantSource {
        path: "tenant_summary.ten_largest_tenants",
        percent_field: "percent_of_total_uw_base_rent",
        name_field: "tenant",
    },
    TenantSource {
        path: "top_tenant_summary.tenants",
        percent_field: "percent_uw_base_rent",
        name_field: "name",
    },
];

/// Rent rolls that carry `credit_rating` mappings, scanned in this order.
pub const RATING_SOURCES: [&str; 3] = [
    "major_tenant.tenants",
    "tenant_summary.tenants",
    "largest_tenants_based_on_uw_base_rent.tenants",
];

const NAME_FIELDS: [&str; 3] = ["name", "tenant", "tenant_name"];

/// Rating agencies in display order.
pub const AGENCIES: [&str; 3] = ["S&P", "Moody's", "Fitch"];

/// Share of base rent, `%` stripped. Missing or unreadable shares rank as 0.
fn rent_share(entry: &Value, percent_field: &str) -> Decimal {
    let share = match entry.get(percent_field) {
        Some(Value::String(s)) => parse_decimal(&s.replace('%', "")),
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        _ => None,
    };
    share.unwrap_or(Decimal::ZERO)
}

fn non_empty_str<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key)?.as_str().filter(|s| !s.is_empty())
}

/// Name of the tenant paying the largest share of base rent.
///
/// The first source holding a non-empty list is ranked; ties keep source
/// order. When its top entry has no name the next source is tried.
pub fn top_tenant(record: &Value) -> String {
    for source in &TOP_TENANT_SOURCES {
        let Some(Value::Array(tenants)) = resolve(record, &[source.path]) else {
            continue;
        };
        let top = tenants
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| {
                rent_share(a, source.percent_field)
                    .cmp(&rent_share(b, source.percent_field))
                    .then(ib.cmp(ia))
            })
            .map(|(_, entry)| entry);
        if let Some(name) = top.and_then(|t| non_empty_str(t, source.name_field)) {
            return name.to_string();
        }
        log::debug!("top entry of {} has no {}", source.path, source.name_field);
    }
    String::new()
}

fn tenant_name(entry: &Map<String, Value>) -> Option<&str> {
    NAME_FIELDS
        .iter()
        .find_map(|key| entry.get(*key)?.as_str().filter(|s| !s.is_empty()))
}

/// Rating for one agency, trying the key as written, lower- and upper-case.
fn agency_rating<'a>(ratings: &'a Map<String, Value>, agency: &str) -> Option<&'a str> {
    [agency.to_string(), agency.to_lowercase(), agency.to_uppercase()]
        .iter()
        .find_map(|key| ratings.get(key)?.as_str().filter(|s| !s.is_empty()))
        .filter(|rating| !rating.eq_ignore_ascii_case("NR"))
}

/// `"S&P: A- / Moody's: Baa1"` style summary of a tenant's ratings.
///
/// A manual override for `loan_id` wins outright. Otherwise the first rent
/// roll entry named `tenant` decides, even if it carries no ratings or every
/// agency there is unrated. Entries whose `credit_rating` is not a mapping
/// are skipped.
pub fn tenant_rating(
    record: &Value,
    tenant: &str,
    loan_id: &str,
    overrides: &OverrideTables,
) -> String {
    if let Some(rating) = overrides.tenant_rating(loan_id) {
        return rating.to_string();
    }
    if tenant.is_empty() {
        return String::new();
    }

    let entries = RATING_SOURCES
        .iter()
        .filter_map(|path| match resolve(record, &[*path]) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        })
        .flatten()
        .filter_map(Value::as_object);

    let unrated = Map::new();
    for entry in entries {
        if tenant_name(entry) != Some(tenant) {
            continue;
        }
        let ratings = match entry.get("credit_rating") {
            None => &unrated,
            Some(Value::Object(ratings)) => ratings,
            Some(_) => continue,
        };
        return AGENCIES
            .iter()
            .filter_map(|agency| agency_rating(ratings, agency).map(|r| format!("{agency}: {r}")))
            .collect::<Vec<_>>()
            .join(" / ");
    }
    String::new()
}
