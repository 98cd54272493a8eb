//! Argument types of the tools that do not map one-to-one onto a query struct, and the
//! conversion of every argument type into an [`ApiRequest`].

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Number;

use crate::model::FundTypeCode;
use crate::params::{
    AnalysisStart, FundAnalysisParams, FundTypesParams, HistoricalDataParams, InflationParams,
    ListCompaniesParams, ListFundsParams, StatisticsParams, YearlyIncrease, YearlyIncreaseType,
};
use crate::request::ApiRequest;

/// Arguments of one tool.
///
/// The type's JSON schema is the tool's advertised input schema; a validated argument bag
/// deserializes into it and is turned into exactly one API request.
pub trait ToolArgs: DeserializeOwned + JsonSchema {
    fn into_request(self) -> ApiRequest;
}

impl ToolArgs for ListFundsParams {
    fn into_request(self) -> ApiRequest {
        ApiRequest::ListFunds(self)
    }
}

impl ToolArgs for ListCompaniesParams {
    fn into_request(self) -> ApiRequest {
        ApiRequest::ListCompanies(self)
    }
}

impl ToolArgs for StatisticsParams {
    fn into_request(self) -> ApiRequest {
        ApiRequest::Statistics(self)
    }
}

impl ToolArgs for FundTypesParams {
    fn into_request(self) -> ApiRequest {
        ApiRequest::ListFundTypes(self)
    }
}

impl ToolArgs for InflationParams {
    fn into_request(self) -> ApiRequest {
        ApiRequest::InflationRates(self)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TopPerformingFundsArgs {
    /// Reference fund codes (comma separated, optional)
    pub reference_funds: Option<String>,
}

impl ToolArgs for TopPerformingFundsArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::TopPerformingFunds {
            reference_funds: self.reference_funds,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompareFundsArgs {
    /// Fund codes to compare
    #[schemars(length(min = 2, max = 5))]
    pub codes: Vec<String>,
}

impl ToolArgs for CompareFundsArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::CompareFunds { codes: self.codes }
    }
}

/// Flat form of [`FundAnalysisParams`]: the yearly increase is split into two optional
/// top-level fields.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFundArgs {
    /// Fund code
    pub code: String,
    /// Simulation start
    pub start_date: AnalysisStart,
    /// Initial investment (TRY)
    #[schemars(range(min = 0))]
    pub initial_investment: Number,
    /// Monthly investment (TRY, optional)
    #[schemars(range(min = 0))]
    pub monthly_investment: Option<Number>,
    /// Yearly increase type (optional)
    pub yearly_increase_type: Option<YearlyIncreaseType>,
    /// Yearly increase value (optional)
    #[schemars(range(min = 0))]
    pub yearly_increase_value: Option<Number>,
    /// Include per-period details (default: true)
    pub include_monthly_details: Option<bool>,
}

impl ToolArgs for AnalyzeFundArgs {
    fn into_request(self) -> ApiRequest {
        // A half-specified increase is dropped entirely.
        let yearly_increase = match (self.yearly_increase_type, self.yearly_increase_value) {
            (Some(kind), Some(value)) => Some(YearlyIncrease { kind, value }),
            _ => None,
        };
        ApiRequest::AnalyzeFund {
            code: self.code,
            params: FundAnalysisParams {
                start_date: self.start_date,
                initial_investment: self.initial_investment,
                monthly_investment: self.monthly_investment,
                yearly_increase,
                include_monthly_details: self.include_monthly_details,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FundHistoricalDataArgs {
    /// Fund code
    pub code: String,
    #[serde(flatten)]
    pub params: HistoricalDataParams,
}

impl ToolArgs for FundHistoricalDataArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::FundHistoricalData {
            code: self.code,
            params: self.params,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompanyDetailsArgs {
    /// Company code
    pub code: String,
    /// Also return the company's funds (default: true)
    pub include_funds: Option<bool>,
}

impl ToolArgs for CompanyDetailsArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::CompanyDetails {
            code: self.code,
            include_funds: self.include_funds.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LatestStatisticsArgs {}

impl ToolArgs for LatestStatisticsArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::LatestStatistics
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StatisticsByDateArgs {
    /// Statistics date (YYYY-MM-DD)
    pub date: String,
}

impl ToolArgs for StatisticsByDateArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::StatisticsByDate { date: self.date }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FundTypeDetailsArgs {
    /// Fund type code
    #[serde(rename = "type")]
    pub fund_type: FundTypeCode,
}

impl ToolArgs for FundTypeDetailsArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::FundTypeDetails {
            fund_type: self.fund_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LatestInflationRateArgs {}

impl ToolArgs for LatestInflationRateArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::LatestInflationRate
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InflationRateByMonthArgs {
    /// Year
    #[schemars(range(min = 2000))]
    pub year: i32,
    /// Month (1-12)
    #[schemars(range(min = 1, max = 12))]
    pub month: u8,
}

impl ToolArgs for InflationRateByMonthArgs {
    fn into_request(self) -> ApiRequest {
        ApiRequest::InflationRateByMonth {
            year: self.year,
            month: self.month,
        }
    }
}
