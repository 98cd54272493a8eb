//! Endpoint requests and query-string shaping.

use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiError;
use crate::model::FundTypeCode;
use crate::params::{
    FundAnalysisParams, FundTypesParams, HistoricalDataParams, InflationParams,
    ListCompaniesParams, ListFundsParams, StatisticsParams,
};

/// Smallest number of funds accepted by the compare endpoint.
pub const MIN_COMPARE_CODES: usize = 2;
/// Largest number of funds accepted by the compare endpoint.
pub const MAX_COMPARE_CODES: usize = 5;

/// One call against the FonParam API.
///
/// Each variant maps to exactly one `GET` endpoint; path parameters live in the variant,
/// everything else is sent as query parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    ListFunds(ListFundsParams),
    TopPerformingFunds {
        reference_funds: Option<String>,
    },
    CompareFunds {
        codes: Vec<String>,
    },
    AnalyzeFund {
        code: String,
        params: FundAnalysisParams,
    },
    FundHistoricalData {
        code: String,
        params: HistoricalDataParams,
    },
    ListCompanies(ListCompaniesParams),
    CompanyDetails {
        code: String,
        include_funds: bool,
    },
    Statistics(StatisticsParams),
    LatestStatistics,
    StatisticsByDate {
        date: String,
    },
    ListFundTypes(FundTypesParams),
    FundTypeDetails {
        fund_type: FundTypeCode,
    },
    InflationRates(InflationParams),
    LatestInflationRate,
    InflationRateByMonth {
        year: i32,
        month: u8,
    },
}

impl ApiRequest {
    /// Path segments below the base URL, unescaped.
    pub fn path_segments(&self) -> Vec<String> {
        let segments: Vec<&str> = match self {
            ApiRequest::ListFunds(_) => vec!["funds"],
            ApiRequest::TopPerformingFunds { .. } => vec!["funds", "top-performing"],
            ApiRequest::CompareFunds { .. } => vec!["funds", "compare"],
            ApiRequest::AnalyzeFund { code, .. } => vec!["funds", code.as_str(), "analyze"],
            ApiRequest::FundHistoricalData { code, .. } => vec!["funds", code.as_str(), "historical"],
            ApiRequest::ListCompanies(_) => vec!["companies"],
            ApiRequest::CompanyDetails { code, .. } => vec!["companies", code.as_str()],
            ApiRequest::Statistics(_) => vec!["statistics"],
            ApiRequest::LatestStatistics => vec!["statistics", "latest"],
            ApiRequest::StatisticsByDate { date } => vec!["statistics", date.as_str()],
            ApiRequest::ListFundTypes(_) => vec!["fund-types"],
            ApiRequest::FundTypeDetails { fund_type } => vec!["fund-types", fund_type.as_str()],
            ApiRequest::InflationRates(_) => vec!["inflation"],
            ApiRequest::LatestInflationRate => vec!["inflation", "latest"],
            ApiRequest::InflationRateByMonth { year, month } => {
                return vec!["inflation".to_string(), year.to_string(), month.to_string()];
            }
        };
        segments.into_iter().map(str::to_string).collect()
    }

    /// Path below the base URL, e.g. `/funds/AAK/historical`.
    pub fn path(&self) -> String {
        format!("/{}", self.path_segments().join("/"))
    }

    /// Query pairs in the order they are sent.
    pub fn query(&self) -> Result<Vec<(String, String)>, ApiError> {
        match self {
            ApiRequest::ListFunds(params) => query_pairs(params),
            ApiRequest::TopPerformingFunds { reference_funds } => Ok(reference_funds
                .iter()
                .map(|funds| ("funds".to_string(), funds.clone()))
                .collect()),
            ApiRequest::CompareFunds { codes } => {
                Ok(vec![("codes".to_string(), codes.iter().join(","))])
            }
            ApiRequest::AnalyzeFund { params, .. } => query_pairs(params),
            ApiRequest::FundHistoricalData { params, .. } => query_pairs(params),
            ApiRequest::ListCompanies(params) => query_pairs(params),
            ApiRequest::CompanyDetails { include_funds, .. } => {
                Ok(vec![("include_funds".to_string(), include_funds.to_string())])
            }
            ApiRequest::Statistics(params) => query_pairs(params),
            ApiRequest::ListFundTypes(params) => query_pairs(params),
            ApiRequest::InflationRates(params) => query_pairs(params),
            ApiRequest::LatestStatistics
            | ApiRequest::StatisticsByDate { .. }
            | ApiRequest::FundTypeDetails { .. }
            | ApiRequest::LatestInflationRate
            | ApiRequest::InflationRateByMonth { .. } => Ok(Vec::new()),
        }
    }

    /// Local preconditions that must hold before anything is sent.
    pub fn check(&self) -> Result<(), ApiError> {
        if let ApiRequest::CompareFunds { codes } = self {
            if !(MIN_COMPARE_CODES..=MAX_COMPARE_CODES).contains(&codes.len()) {
                return Err(ApiError::InvalidArgument(format!(
                    "Between {MIN_COMPARE_CODES} and {MAX_COMPARE_CODES} fund codes must be given, got {}",
                    codes.len()
                )));
            }
        }
        Ok(())
    }
}

/// Serialize a parameter struct into query pairs.
///
/// Nulls are dropped, nested objects become dotted keys and arrays are comma-joined,
/// since the API does not understand nested or repeated query parameters.
pub fn query_pairs<T: Serialize>(params: &T) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(params)
        .map_err(|e| ApiError::Request(format!("cannot encode query parameters: {e}")))?;
    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_into(&mut pairs, key, value);
            }
        }
        Value::Null => {}
        other => {
            return Err(ApiError::Request(format!(
                "query parameters must be an object, got {other}"
            )))
        }
    }
    Ok(pairs)
}

fn flatten_into(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (child, value) in map {
                flatten_into(pairs, format!("{key}.{child}"), value);
            }
        }
        Value::Array(items) => {
            let joined = items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(scalar_text)
                .join(",");
            pairs.push((key, joined));
        }
        scalar => pairs.push((key, scalar_text(scalar))),
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
