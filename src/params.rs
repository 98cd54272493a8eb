//! Query parameter types for the FonParam API.
//!
//! These structs double as tool argument types: their serde names, field docs and
//! `schemars` bounds are what the tool catalog advertises and validates against.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use serde_with::skip_serializing_none;

use crate::model::FundTypeCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sampling interval for historical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

/// Start of an investment simulation, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AnalysisStart {
    #[serde(rename = "last_1_day")]
    Last1Day,
    #[serde(rename = "last_1_week")]
    Last1Week,
    #[serde(rename = "last_1_month")]
    Last1Month,
    #[serde(rename = "last_3_months")]
    Last3Months,
    #[serde(rename = "last_6_months")]
    Last6Months,
    #[serde(rename = "year_start")]
    YearStart,
    #[serde(rename = "last_1_year")]
    Last1Year,
    #[serde(rename = "last_3_years")]
    Last3Years,
    #[serde(rename = "last_5_years")]
    Last5Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum YearlyIncreaseType {
    Percentage,
    Amount,
}

/// Filters for `GET /funds`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListFundsParams {
    /// Page number (default: 1)
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Records per page (default: 20, maximum: 100)
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Fund type
    #[serde(rename = "type")]
    pub fund_type: Option<FundTypeCode>,
    /// Search by fund name, fund code or company name
    pub search: Option<String>,
    /// Fund code, or several codes separated by commas
    pub code: Option<String>,
    /// Portfolio management company code
    pub management_company: Option<String>,
    /// Whether the fund is traded on TEFAS
    pub tefas: Option<bool>,
    /// Minimum risk level (1-7)
    #[schemars(range(min = 1, max = 7))]
    pub min_risk_value: Option<u8>,
    /// Maximum risk level (1-7)
    #[schemars(range(min = 1, max = 7))]
    pub max_risk_value: Option<u8>,
    /// Sort field (code, title, yield_1y, ...)
    pub sort: Option<String>,
    /// Sort direction
    pub order: Option<SortOrder>,
}

/// Filters for `GET /funds/{code}/historical`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistoricalDataParams {
    /// Start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Sampling interval
    pub interval: Option<Interval>,
    /// Sort field
    pub sort: Option<String>,
    /// Sort direction
    pub order: Option<SortOrder>,
}

/// Filters for `GET /companies`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListCompaniesParams {
    /// Page number
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Records per page
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Sort field
    pub sort: Option<String>,
    /// Sort direction
    pub order: Option<SortOrder>,
    /// Minimum number of funds
    #[schemars(range(min = 0))]
    pub min_total_funds: Option<u32>,
    /// Maximum number of funds
    #[schemars(range(min = 0))]
    pub max_total_funds: Option<u32>,
    /// Search by company name or code
    pub search: Option<String>,
}

/// Filters for `GET /statistics`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatisticsParams {
    /// Start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Sort field
    pub sort: Option<String>,
    /// Sort direction
    pub order: Option<SortOrder>,
    /// Page number
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Records per page
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}

/// Filters for `GET /fund-types`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FundTypesParams {
    /// Sort field
    pub sort: Option<String>,
    /// Sort direction
    pub order: Option<SortOrder>,
    /// Minimum number of funds
    #[schemars(range(min = 0))]
    pub min_total_funds: Option<u32>,
    /// Maximum number of funds
    #[schemars(range(min = 0))]
    pub max_total_funds: Option<u32>,
}

/// Filters for `GET /inflation`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InflationParams {
    /// Start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    pub end_date: Option<String>,
}

/// Yearly growth applied to the monthly contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyIncrease {
    #[serde(rename = "type")]
    pub kind: YearlyIncreaseType,
    pub value: Number,
}

/// Simulation inputs for `GET /funds/{code}/analyze`.
///
/// `yearly_increase` is sent as the dotted keys `yearlyIncrease.type` and
/// `yearlyIncrease.value`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundAnalysisParams {
    pub start_date: AnalysisStart,
    pub initial_investment: Number,
    pub monthly_investment: Option<Number>,
    pub yearly_increase: Option<YearlyIncrease>,
    pub include_monthly_details: Option<bool>,
}

impl FundAnalysisParams {
    pub fn new(start_date: AnalysisStart, initial_investment: impl Into<Number>) -> Self {
        Self {
            start_date,
            initial_investment: initial_investment.into(),
            monthly_investment: None,
            yearly_increase: None,
            include_monthly_details: None,
        }
    }
}
