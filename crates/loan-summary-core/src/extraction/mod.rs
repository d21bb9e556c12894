pub mod dates;
pub mod fields;
pub mod normalize;
pub mod resolver;
pub mod tenants;
pub mod term;

pub use dates::{fmt_date, parse_date, parse_fuzzy_date};
pub use normalize::{
    extract_debt_yield_value, extract_dscr_value, extract_numeric, extract_rate_value,
    fmt_currency, fmt_integer, fmt_number, fmt_percent, strip_zip,
};
pub use resolver::{resolve, resolve_with_path, Node, Resolved};
pub use tenants::{tenant_rating, top_tenant};
pub use term::loan_term;
