//! Response records returned by the FonParam API.
//!
//! Every type here mirrors the remote JSON one-to-one. Nullable figures are `Option`s, so a
//! yield or financial field is always either a finite number or absent.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fund category taxonomy used across the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FundTypeCode {
    Altin,
    BorclanmaAraclari,
    Degisken,
    FonSepeti,
    Gumus,
    HisseSenedi,
    HisseSenediYogun,
    Karma,
    Katilim,
    KiymetliMadenler,
    ParaPiyasasi,
    Serbest,
    Yabanci,
    Diger,
}

impl FundTypeCode {
    /// All fund categories, in the order the API documents them.
    pub const ALL: [FundTypeCode; 14] = [
        FundTypeCode::Altin,
        FundTypeCode::BorclanmaAraclari,
        FundTypeCode::Degisken,
        FundTypeCode::FonSepeti,
        FundTypeCode::Gumus,
        FundTypeCode::HisseSenedi,
        FundTypeCode::HisseSenediYogun,
        FundTypeCode::Karma,
        FundTypeCode::Katilim,
        FundTypeCode::KiymetliMadenler,
        FundTypeCode::ParaPiyasasi,
        FundTypeCode::Serbest,
        FundTypeCode::Yabanci,
        FundTypeCode::Diger,
    ];

    /// Wire value, e.g. `hisse_senedi`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FundTypeCode::Altin => "altin",
            FundTypeCode::BorclanmaAraclari => "borclanma_araclari",
            FundTypeCode::Degisken => "degisken",
            FundTypeCode::FonSepeti => "fon_sepeti",
            FundTypeCode::Gumus => "gumus",
            FundTypeCode::HisseSenedi => "hisse_senedi",
            FundTypeCode::HisseSenediYogun => "hisse_senedi_yogun",
            FundTypeCode::Karma => "karma",
            FundTypeCode::Katilim => "katilim",
            FundTypeCode::KiymetliMadenler => "kiymetli_madenler",
            FundTypeCode::ParaPiyasasi => "para_piyasasi",
            FundTypeCode::Serbest => "serbest",
            FundTypeCode::Yabanci => "yabanci",
            FundTypeCode::Diger => "diger",
        }
    }
}

impl std::fmt::Display for FundTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage returns over the standard lookback horizons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Yields {
    pub yield_1d: Option<f64>,
    pub yield_1w: Option<f64>,
    pub yield_1m: Option<f64>,
    pub yield_3m: Option<f64>,
    pub yield_6m: Option<f64>,
    pub yield_ytd: Option<f64>,
    pub yield_1y: Option<f64>,
    pub yield_3y: Option<f64>,
    pub yield_5y: Option<f64>,
}

/// A portfolio management company and its average yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundManagementCompany {
    pub code: String,
    pub title: String,
    pub logo: Option<String>,
    pub total_funds: Option<u64>,
    pub avg_yield_1d: Option<f64>,
    pub avg_yield_1w: Option<f64>,
    pub avg_yield_1m: Option<f64>,
    pub avg_yield_3m: Option<f64>,
    pub avg_yield_6m: Option<f64>,
    pub avg_yield_ytd: Option<f64>,
    pub avg_yield_1y: Option<f64>,
    pub avg_yield_3y: Option<f64>,
    pub avg_yield_5y: Option<f64>,
}

/// A fund category with its display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundType {
    #[serde(rename = "type")]
    pub code: FundTypeCode,
    pub short_name: String,
    pub long_name: String,
    pub group_name: String,
}

/// A fund category together with its aggregate yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundTypeYields {
    #[serde(flatten)]
    pub fund_type: FundType,
    #[serde(flatten)]
    pub yields: Yields,
    pub total_funds: u64,
    pub total_aum: Option<f64>,
}

/// Short yield summary of a fund, as used by ranking endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundYield {
    pub code: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub fund_type: Option<String>,
    pub risk_value: Option<u8>,
    #[serde(flatten)]
    pub yields: Yields,
}

/// One fund's figures on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundHistoricalValue {
    pub code: String,
    pub date: String,
    pub value: f64,
    pub aum: Option<f64>,
    #[serde(rename = "yield")]
    pub daily_yield: Option<f64>,
    pub cumulative_cashflow: Option<f64>,
    pub investor_count: Option<u64>,
    pub risk_value: Option<u8>,
    pub purchase_value_day: Option<u32>,
    pub sale_value_day: Option<u32>,
    pub shares_active: Option<f64>,
    pub shares_total: Option<f64>,
    pub occupancy_rate: Option<f64>,
    pub market_share: Option<f64>,
    pub management_fee: Option<f64>,
}

/// An investment fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub code: String,
    pub management_company_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub fund_type: FundTypeCode,
    pub tefas: Option<bool>,
    #[serde(default)]
    pub has_historical_data: bool,
    pub historical_data_check_date: Option<String>,
    pub risk_value: Option<u8>,
    pub purchase_value_day: Option<u32>,
    pub sale_value_day: Option<u32>,
    pub management_fee: Option<f64>,
    pub management_company: Option<FundManagementCompany>,
    #[serde(rename = "fund_type")]
    pub fund_type_info: Option<FundType>,
    pub last_historical_value: Option<FundHistoricalValue>,
    #[serde(flatten)]
    pub yields: Yields,
}

/// Market-wide rollup for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatistics {
    pub date: String,
    pub total_funds: u64,
    pub total_companies: u64,
    pub total_investors: u64,
    pub total_aum: f64,
    pub avg_profit: f64,
    pub avg_loss: f64,
}

/// Inflation figures for one month, dated at month end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationRate {
    pub date: String,
    pub monthly_rate: f64,
    pub yearly_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStatistics {
    pub total_funds: u64,
    pub avg_yield_1m: Option<f64>,
    pub avg_yield_6m: Option<f64>,
    pub avg_yield_ytd: Option<f64>,
    pub avg_yield_1y: Option<f64>,
    pub avg_yield_3y: Option<f64>,
    pub avg_yield_5y: Option<f64>,
    pub best_performing_funds: Option<Vec<FundYield>>,
}

/// A management company with optional aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub company: FundManagementCompany,
    pub stats: Option<CompanyStatistics>,
}

/// Aggregate outcome of an investment simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_investment: f64,
    pub current_value: f64,
    pub total_yield: f64,
    pub total_yield_percentage: f64,
    pub cumulative_inflation: f64,
    pub real_total_yield: f64,
    pub real_total_yield_percentage: f64,
}

/// One period of an investment simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPeriod {
    pub date: String,
    pub investment: f64,
    pub total_investment: f64,
    pub unit_price: f64,
    pub units: f64,
    pub total_units: f64,
    pub value: f64,
    pub period_change: f64,
    pub period_change_percentage: f64,
    pub total_yield: f64,
    pub total_yield_percentage: f64,
    pub monthly_inflation: f64,
    pub cumulative_inflation: f64,
    pub real_period_change: f64,
    pub real_period_change_percentage: f64,
    pub real_total_yield: f64,
    pub real_total_yield_percentage: f64,
}

/// Investment simulation computed by the API for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundAnalysisResult {
    pub code: String,
    pub management_company_id: String,
    pub title: String,
    pub summary: AnalysisSummary,
    #[serde(rename = "periodDetails")]
    pub period_details: Option<Vec<AnalysisPeriod>>,
}

/// Envelope wrapping list endpoints that support paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub data: Vec<T>,
}
