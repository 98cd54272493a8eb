//! FonParam API client and its error type.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::http::{build_http_client, ResponseExt};
use crate::model::{
    CompanyDetails, DailyStatistics, Fund, FundAnalysisResult, FundHistoricalValue,
    FundManagementCompany, FundTypeCode, FundTypeYields, FundYield, InflationRate, Paginated,
};
use crate::options::ClientOptions;
use crate::params::{
    FundAnalysisParams, FundTypesParams, HistoricalDataParams, InflationParams,
    ListCompaniesParams, ListFundsParams, StatisticsParams,
};
use crate::request::ApiRequest;

/// Errors that can occur while talking to the FonParam API.
///
/// Every failure of the client surfaces as one of these; nothing downstream sees a raw
/// transport error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API answered with a non-2xx status.
    #[error("API Error {status}: {message}")]
    Status { status: u16, message: String },

    /// The request went out but no response came back (connect failure, timeout, reset).
    #[error("API request failed: No response received")]
    NoResponse(#[source] reqwest::Error),

    /// The request could not be built or sent at all.
    #[error("API request failed: {0}")]
    Request(String),

    /// A local precondition was violated; nothing was sent.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("API response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response, preferring the server's `error` message.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string())
            });
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// Classify a reqwest failure.
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_builder() {
            ApiError::Request(error.to_string())
        } else if error.is_timeout()
            || error.is_connect()
            || error.is_request()
            || error.is_body()
            || error.is_decode()
        {
            ApiError::NoResponse(error)
        } else {
            ApiError::Request(error.to_string())
        }
    }

    /// HTTP status of the failed call, if the API answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the FonParam REST API.
///
/// Stateless beyond its configuration, so a single instance can be cloned and shared
/// across concurrent calls.
#[derive(Debug, Clone)]
pub struct FonParamClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FonParamClient {
    /// Create a client from options.
    pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
        let base_url = Url::parse(&options.base_url)
            .map_err(|e| ApiError::Request(format!("invalid base URL {}: {e}", options.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Request(format!(
                "invalid base URL {}: cannot carry a path",
                options.base_url
            )));
        }
        let http = build_http_client(&options)?;
        Ok(Self { http, base_url })
    }

    /// Create a client against the public API with default options.
    pub fn with_defaults() -> Result<Self, ApiError> {
        Self::new(ClientOptions::default())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute a request and return the response body untouched.
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        self.send(request).await
    }

    /// Lists funds with optional filtering, sorting and paging.
    pub async fn list_funds(&self, params: &ListFundsParams) -> Result<Paginated<Fund>, ApiError> {
        self.send(&ApiRequest::ListFunds(params.clone())).await
    }

    /// Best performing funds, optionally relative to a comma-separated list of reference funds.
    pub async fn top_performing_funds(
        &self,
        reference_funds: Option<&str>,
    ) -> Result<Vec<FundYield>, ApiError> {
        self.send(&ApiRequest::TopPerformingFunds {
            reference_funds: reference_funds.map(str::to_string),
        })
        .await
    }

    /// Compares 2 to 5 funds side by side.
    pub async fn compare_funds(&self, codes: &[String]) -> Result<Vec<Fund>, ApiError> {
        self.send(&ApiRequest::CompareFunds {
            codes: codes.to_vec(),
        })
        .await
    }

    /// Runs an investment simulation for one fund.
    pub async fn analyze_fund(
        &self,
        code: &str,
        params: &FundAnalysisParams,
    ) -> Result<FundAnalysisResult, ApiError> {
        self.send(&ApiRequest::AnalyzeFund {
            code: code.to_string(),
            params: params.clone(),
        })
        .await
    }

    pub async fn fund_historical_data(
        &self,
        code: &str,
        params: &HistoricalDataParams,
    ) -> Result<Vec<FundHistoricalValue>, ApiError> {
        self.send(&ApiRequest::FundHistoricalData {
            code: code.to_string(),
            params: params.clone(),
        })
        .await
    }

    pub async fn list_companies(
        &self,
        params: &ListCompaniesParams,
    ) -> Result<Paginated<FundManagementCompany>, ApiError> {
        self.send(&ApiRequest::ListCompanies(params.clone())).await
    }

    /// Company details; funds are included unless `include_funds` is `Some(false)`.
    pub async fn company_details(
        &self,
        code: &str,
        include_funds: Option<bool>,
    ) -> Result<CompanyDetails, ApiError> {
        self.send(&ApiRequest::CompanyDetails {
            code: code.to_string(),
            include_funds: include_funds.unwrap_or(true),
        })
        .await
    }

    pub async fn statistics(
        &self,
        params: &StatisticsParams,
    ) -> Result<Paginated<DailyStatistics>, ApiError> {
        self.send(&ApiRequest::Statistics(params.clone())).await
    }

    pub async fn latest_statistics(&self) -> Result<DailyStatistics, ApiError> {
        self.send(&ApiRequest::LatestStatistics).await
    }

    /// Statistics for one day, `date` formatted as `YYYY-MM-DD`.
    pub async fn statistics_by_date(&self, date: &str) -> Result<DailyStatistics, ApiError> {
        self.send(&ApiRequest::StatisticsByDate {
            date: date.to_string(),
        })
        .await
    }

    pub async fn list_fund_types(
        &self,
        params: &FundTypesParams,
    ) -> Result<Vec<FundTypeYields>, ApiError> {
        self.send(&ApiRequest::ListFundTypes(params.clone())).await
    }

    pub async fn fund_type_details(
        &self,
        fund_type: FundTypeCode,
    ) -> Result<FundTypeYields, ApiError> {
        self.send(&ApiRequest::FundTypeDetails { fund_type }).await
    }

    pub async fn inflation_rates(
        &self,
        params: &InflationParams,
    ) -> Result<Vec<InflationRate>, ApiError> {
        self.send(&ApiRequest::InflationRates(params.clone())).await
    }

    pub async fn latest_inflation_rate(&self) -> Result<InflationRate, ApiError> {
        self.send(&ApiRequest::LatestInflationRate).await
    }

    pub async fn inflation_rate_by_month(
        &self,
        year: i32,
        month: u8,
    ) -> Result<InflationRate, ApiError> {
        self.send(&ApiRequest::InflationRateByMonth { year, month })
            .await
    }

    /// Checks that the API is reachable with a minimal listing request.
    ///
    /// Never fails: any error is reported as `false`.
    pub async fn health_check(&self) -> bool {
        let result = match self.url(&["fund-types".to_string()]) {
            Ok(url) => {
                self.get::<Value>(url, &[("limit".to_string(), "1".to_string())])
                    .await
            }
            Err(e) => Err(e),
        };
        match result {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "health check failed");
                false
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        request.check()?;
        let url = self.url(&request.path_segments())?;
        let query = request.query()?;
        self.get(url, &query).await
    }

    fn url(&self, segments: &[String]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Request(format!("invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        debug!(url = %url, ?query, "API request");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text_logged().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        response.json_logged().await
    }
}
