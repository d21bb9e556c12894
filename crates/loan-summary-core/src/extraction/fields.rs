//! Candidate paths for each summary column, most trusted first.

pub const PURPOSE: &[&str] = &[
    "loan_purpose",
    "loan_summary.loan_purpose",
    "mortgage_loan_information.loan_purpose",
    "loan_metadata.loan_purpose",
    "mortgaged_property_information.loan_purpose",
    "details.loan_purpose",
];

pub const BORROWER: &[&str] = &[
    "borrower",
    "mortgage_loan_information.borrower",
    "borrower_sponsor",
    "mortgaged_property_information.borrower_sponsor",
];

pub const ISSUER: &[&str] = &[
    "issuer",
    "loan_summary.issuer",
    "deal.issuer",
    "collateral.issuer",
    "offering.issuer",
    "mortgage_loan_information.loan_seller",
    "mortgage_loan_information.mortgage_loan_seller",
    "loan_seller",
];

pub const ORIGINAL_BALANCE: &[&str] = &[
    "original_principal_balance",
    "loan_summary.original_principal_balance",
    "mortgage_loan_information.original_balance",
    "mortgage_loan_information.cut_off_date_principal_balance",
];

pub const INTEREST_RATE: &[&str] = &[
    "interest_rate",
    "mortgage_loan_information.interest_rate",
    "mortgage_loan_information.interest_rate_percent",
    "mortgage_loan_information.mortgage_rate",
    "mortgage_rate",
];

pub const DSCR: &[&str] = &[
    "underwriting_and_financial_information.uw_ncf_dscr",
    "underwriting_financial_info.uw_dscr_based_on_noi_ncf",
    "cash_flow_analysis.uw.ncf_dscr",
    "cash_flow_analysis.ttm_09302019.ncf_dscr",
    "mortgaged_property_information.dscr_based_on_underwritten_noi_ncf",
    "financial_information.uw_ncf_dscr.whole_loan",
    "financial_information.whole_loan.uw_dscr.ncf",
    "financial_information.uw_ncf_dscr",
];

pub const DEBT_YIELD: &[&str] = &[
    "underwriting_and_financial_information.uw_noi_debt_yield",
    "underwriting_financial_info.uw_debt_yield_based_on_noi_ncf",
    "cash_flow_analysis.uw.ncf_debt_yield",
    "cash_flow_analysis.ttm_09302019.ncf_debt_yield",
    "financial_information.uw_noi_debt_yield",
    "financial_information.uw_noi_debt_yield_percent.whole_loan",
    "financial_information.uw_debt_yield_percent.whole_loan",
    "financial_information.whole_loan.uw_debt_yield.cut_off.ncf",
    "financial_information.uw_ncf_debt_yield",
    "mortgaged_property_information.debt_yield_based_on_underwritten_noi_ncf",
];

pub const CUT_OFF_LTV: &[&str] = &[
    "underwriting_financial_info.cut_off_date_ltv_ratio",
    "mortgaged_property_information.cut_off_date_ltv_ratio",
    "financial_information.cut_off_date_ltv_percent.whole_loan",
    "financial_information.cut_off_date_ltv",
    "underwriting_and_financial_information.ltv_ratios.cut_off_date",
    "financial_information.whole_loan.ltv.cut_off",
    "loan_summary.cut_off_ltv",
];

pub const MATURITY_LTV: &[&str] = &[
    "underwriting_financial_info.ltv_ratio_at_maturity",
    "underwriting_financial_information.ltv_ratios.maturity_date",
    "underwriting_and_financial_information.ltv_ratios.maturity_date",
    "financial_information.maturity_date_ltv",
    "mortgaged_property_information.maturity_date_ltv_ratio",
    "financial_information.maturity_date_ltv_percent.whole_loan",
    "financial_information.whole_loan.ltv.balloon",
];

pub const OCCUPANCY: &[&str] = &[
    "property_information.occupancy",
    "mortgaged_property_info.current_occupancy_as_of",
    "mortgaged_property_information.current_occupancy_as_of",
    "mortgaged_property_information.total_occupancy_as_of_12_30_2020",
    "occupancy_history.2023.current",
    "underwriting_and_financial_information.occupancy_history.0.occupancy",
    "historical_occupancy.most_recent.percent",
    "financial_information.occupancy",
    "property_information.occupancy_percent",
    "property_information.occupancy_rate",
];

pub const LOCATION: &[&str] = &[
    "property_information.location",
    "mortgaged_property_info.location",
    "mortgaged_property_information.location",
    "location",
];

pub const SQFT: &[&str] = &[
    "property_information.size_sqft",
    "property_information.total_sq_ft",
    "mortgaged_property_info.size",
    "mortgaged_property_information.size_sqft",
    "mortgaged_property_information.size",
    "property_information.net_rentable_area_sf",
];

pub const MATURITY_DATE: &[&str] = &[
    "maturity_date",
    "loan_summary.maturity_date",
    "mortgage_loan_information.maturity_date",
];
