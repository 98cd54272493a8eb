use std::time::Duration;

use fonparam_mcp::client::{ApiError, FonParamClient};
use fonparam_mcp::model::FundTypeCode;
use fonparam_mcp::options::ClientOptions;
use fonparam_mcp::params::{
    AnalysisStart, FundAnalysisParams, HistoricalDataParams, Interval, ListFundsParams,
    YearlyIncrease, YearlyIncreaseType,
};
use fonparam_mcp::request::ApiRequest;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FonParamClient {
    FonParamClient::new(ClientOptions::new().with_base_url(server.uri())).unwrap()
}

fn fund(code: &str, fund_type: &str) -> serde_json::Value {
    json!({
        "code": code,
        "management_company_id": "AK",
        "title": format!("{code} Fund"),
        "type": fund_type,
        "tefas": true,
        "has_historical_data": true,
        "risk_value": 6,
        "yield_1d": 0.42,
        "yield_1y": 61.3,
        "yield_5y": null
    })
}

#[tokio::test]
async fn test_list_funds_sends_filters_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/funds"))
        .and(query_param("type", "hisse_senedi"))
        .and(query_param("limit", "5"))
        .and(query_param_is_missing("page"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "page": 1,
            "limit": 5,
            "data": [fund("AAK", "hisse_senedi"), fund("TCD", "hisse_senedi")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListFundsParams {
        fund_type: Some(FundTypeCode::HisseSenedi),
        limit: Some(5),
        ..Default::default()
    };
    let funds = client_for(&server).list_funds(&params).await.unwrap();

    assert_eq!(funds.total, 2);
    assert!(funds.data.len() <= 5);
    assert!(funds
        .data
        .iter()
        .all(|f| f.fund_type == FundTypeCode::HisseSenedi));
    assert_eq!(funds.data[0].yields.yield_1y, Some(61.3));
    assert_eq!(funds.data[0].yields.yield_5y, None);
}

#[tokio::test]
async fn test_fund_historical_data_uses_code_as_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/funds/AAK/historical"))
        .and(query_param("interval", "monthly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "code": "AAK", "date": "2024-01-31", "value": 1.25, "aum": 1000000.0, "investor_count": 120 },
            { "code": "AAK", "date": "2024-02-29", "value": 1.31, "aum": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = HistoricalDataParams {
        interval: Some(Interval::Monthly),
        ..Default::default()
    };
    let values = client_for(&server)
        .fund_historical_data("AAK", &params)
        .await
        .unwrap();

    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| v.code == "AAK"));
    assert_eq!(values[0].investor_count, Some(120));
    assert_eq!(values[1].aum, None);
}

#[tokio::test]
async fn test_error_status_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies/ZZZ"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Company not found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .company_details("ZZZ", None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "API Error 404: Company not found");
}

#[tokio::test]
async fn test_error_status_falls_back_to_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statistics/latest"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).latest_statistics().await.unwrap_err();

    assert_eq!(err.to_string(), "API Error 503: Service Unavailable");
}

#[tokio::test]
async fn test_unreachable_server_reports_no_response() {
    let client =
        FonParamClient::new(ClientOptions::new().with_base_url("http://127.0.0.1:1")).unwrap();

    let err = client.latest_inflation_rate().await.unwrap_err();

    assert!(matches!(err, ApiError::NoResponse(_)));
    assert_eq!(err.to_string(), "API request failed: No response received");
}

#[tokio::test]
async fn test_timeout_reports_no_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inflation/latest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "date": "2024-05-31", "monthly_rate": 3.37, "yearly_rate": 75.45 }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = FonParamClient::new(
        ClientOptions::new()
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    let err = client.latest_inflation_rate().await.unwrap_err();
    assert!(matches!(err, ApiError::NoResponse(_)));
}

#[tokio::test]
async fn test_invalid_base_url_is_a_request_error() {
    let err = FonParamClient::new(ClientOptions::new().with_base_url("not a url")).unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
    assert!(err.to_string().starts_with("API request failed: "));
}

#[tokio::test]
async fn test_compare_funds_checks_cardinality_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    for codes in [vec!["AAK"], vec!["A", "B", "C", "D", "E", "F"]] {
        let codes: Vec<String> = codes.into_iter().map(String::from).collect();
        let err = client.compare_funds(&codes).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }
}

#[tokio::test]
async fn test_compare_funds_joins_codes_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/funds/compare"))
        .and(query_param("codes", "TCD,AAK,IPB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            fund("TCD", "degisken"),
            fund("AAK", "hisse_senedi"),
            fund("IPB", "hisse_senedi")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let codes: Vec<String> = ["TCD", "AAK", "IPB"].into_iter().map(String::from).collect();
    let funds = client_for(&server).compare_funds(&codes).await.unwrap();

    assert_eq!(funds.len(), 3);
    assert_eq!(funds[0].fund_type, FundTypeCode::Degisken);
}

#[tokio::test]
async fn test_analyze_fund_flattens_yearly_increase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/funds/AAK/analyze"))
        .and(query_param("startDate", "last_1_year"))
        .and(query_param("initialInvestment", "10000"))
        .and(query_param("monthlyInvestment", "500.5"))
        .and(query_param("yearlyIncrease.type", "percentage"))
        .and(query_param("yearlyIncrease.value", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "AAK",
            "management_company_id": "AK",
            "title": "AAK Fund",
            "summary": {
                "totalInvestment": 16006.0,
                "currentValue": 19210.4,
                "totalYield": 3204.4,
                "totalYieldPercentage": 20.02,
                "cumulativeInflation": 61.78,
                "realTotalYield": -2010.3,
                "realTotalYieldPercentage": -12.56
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut params = FundAnalysisParams::new(AnalysisStart::Last1Year, 10000u64);
    params.monthly_investment = serde_json::Number::from_f64(500.5);
    params.yearly_increase = Some(YearlyIncrease {
        kind: YearlyIncreaseType::Percentage,
        value: 10u64.into(),
    });

    let result = client_for(&server)
        .analyze_fund("AAK", &params)
        .await
        .unwrap();

    assert_eq!(result.code, "AAK");
    assert_eq!(result.summary.total_yield_percentage, 20.02);
    assert!(result.period_details.is_none());
}

#[tokio::test]
async fn test_company_details_includes_funds_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies/AK"))
        .and(query_param("include_funds", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "company": { "code": "AK", "title": "Ak Portföy", "total_funds": 84 },
            "stats": { "total_funds": 84, "avg_yield_1y": 48.2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .company_details("AK", None)
        .await
        .unwrap();

    assert_eq!(details.company.total_funds, Some(84));
    assert_eq!(details.stats.unwrap().avg_yield_1y, Some(48.2));
}

#[tokio::test]
async fn test_execute_returns_body_unchanged() {
    let body = r#"{"zeta":1,"alpha":{"b":2.5,"a":null},"data":[{"code":"AAK","extra":"kept"}]}"#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fund-types/altin"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let value = client_for(&server)
        .execute(&ApiRequest::FundTypeDetails {
            fund_type: FundTypeCode::Altin,
        })
        .await
        .unwrap();

    assert_eq!(serde_json::to_string(&value).unwrap(), body);
}

#[tokio::test]
async fn test_inflation_rate_by_month_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inflation/2024/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "date": "2024-05-31", "monthly_rate": 3.37, "yearly_rate": 75.45
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rate = client_for(&server)
        .inflation_rate_by_month(2024, 5)
        .await
        .unwrap();
    assert_eq!(rate.yearly_rate, 75.45);
}

#[tokio::test]
async fn test_health_check_true_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fund-types"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).health_check().await);
}

#[tokio::test]
async fn test_health_check_false_on_any_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fund-types"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    assert!(!client_for(&server).health_check().await);

    let unreachable =
        FonParamClient::new(ClientOptions::new().with_base_url("http://127.0.0.1:1")).unwrap();
    assert!(!unreachable.health_check().await);
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/statistics/2024-06-03"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "date": "2024-06-03",
            "total_funds": 2210,
            "total_companies": 68,
            "total_investors": 4120512,
            "total_aum": 3512345678901.5,
            "avg_profit": 1.2,
            "avg_loss": -0.8
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FonParamClient::new(
        ClientOptions::new().with_base_url(format!("{}/v1/", server.uri())),
    )
    .unwrap();
    let stats = client.statistics_by_date("2024-06-03").await.unwrap();
    assert_eq!(stats.total_funds, 2210);
}
