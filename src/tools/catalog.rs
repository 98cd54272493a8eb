//! The static table of tools: name, description, input schema and request builder.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;

use crate::params::{
    FundTypesParams, InflationParams, ListCompaniesParams, ListFundsParams, StatisticsParams,
};
use crate::request::ApiRequest;
use crate::tools::args::{
    AnalyzeFundArgs, CompanyDetailsArgs, CompareFundsArgs, FundHistoricalDataArgs,
    FundTypeDetailsArgs, InflationRateByMonthArgs, LatestInflationRateArgs,
    LatestStatisticsArgs, StatisticsByDateArgs, ToolArgs, TopPerformingFundsArgs,
};
use crate::tools::schema::{input_schema, validate, JsonObject, ValidationErrors};
use crate::tools::ToolError;

type BuildRequest = fn(Value) -> Result<ApiRequest, serde_json::Error>;

/// One callable tool: its advertised descriptor and how to turn arguments into a request.
#[derive(Debug, Clone)]
pub struct ToolEntry {
    tool: Tool,
    build: BuildRequest,
}

impl ToolEntry {
    fn new<A: ToolArgs>(name: &'static str, description: &'static str) -> Self {
        let schema = Arc::new(input_schema::<A>());
        Self {
            tool: Tool::new(name, description, schema),
            build: build_request::<A>,
        }
    }

    pub fn name(&self) -> &str {
        &self.tool.name
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn input_schema(&self) -> &JsonObject {
        &self.tool.input_schema
    }

    /// Validate an argument bag and build the request it describes. Performs no I/O.
    pub fn prepare(&self, args: Value) -> Result<ApiRequest, ToolError> {
        validate(self.input_schema(), &args).map_err(ToolError::InvalidArguments)?;
        (self.build)(args)
            .map_err(|e| ToolError::InvalidArguments(ValidationErrors::single("", e.to_string())))
    }
}

fn build_request<A: ToolArgs>(args: Value) -> Result<ApiRequest, serde_json::Error> {
    serde_json::from_value::<A>(args).map(ToolArgs::into_request)
}

/// Every tool the server offers, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    entries: Vec<ToolEntry>,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolCatalog {
    pub fn new() -> Self {
        let entries = vec![
            ToolEntry::new::<ListFundsParams>(
                "list_funds",
                "Lists investment funds with filtering, sorting and paging",
            ),
            ToolEntry::new::<TopPerformingFundsArgs>(
                "top_performing_funds",
                "Returns the best performing funds",
            ),
            ToolEntry::new::<CompareFundsArgs>(
                "compare_funds",
                "Compares funds side by side (2-5 funds)",
            ),
            ToolEntry::new::<AnalyzeFundArgs>(
                "analyze_fund",
                "Simulates an investment in a fund, including inflation-adjusted returns",
            ),
            ToolEntry::new::<FundHistoricalDataArgs>(
                "fund_historical_data",
                "Returns the historical values of a fund",
            ),
            ToolEntry::new::<ListCompaniesParams>(
                "list_companies",
                "Lists portfolio management companies",
            ),
            ToolEntry::new::<CompanyDetailsArgs>(
                "company_details",
                "Returns the details of a portfolio management company",
            ),
            ToolEntry::new::<StatisticsParams>("statistics", "Lists daily market statistics"),
            ToolEntry::new::<LatestStatisticsArgs>(
                "latest_statistics",
                "Returns the most recent daily statistics",
            ),
            ToolEntry::new::<StatisticsByDateArgs>(
                "statistics_by_date",
                "Returns the statistics of a specific day",
            ),
            ToolEntry::new::<FundTypesParams>(
                "list_fund_types",
                "Lists fund types with their aggregate yields",
            ),
            ToolEntry::new::<FundTypeDetailsArgs>(
                "fund_type_details",
                "Returns the details of a fund type",
            ),
            ToolEntry::new::<InflationParams>("inflation_rates", "Lists monthly inflation rates"),
            ToolEntry::new::<LatestInflationRateArgs>(
                "latest_inflation_rate",
                "Returns the most recent inflation rate",
            ),
            ToolEntry::new::<InflationRateByMonthArgs>(
                "inflation_rate_by_month",
                "Returns the inflation rate of a given year and month",
            ),
        ];
        Self { entries }
    }

    /// Tool descriptors in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ToolEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
