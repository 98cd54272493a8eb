use fonparam_mcp::{
    model::FundTypeCode,
    params::{ListFundsParams, SortOrder},
    tools::ToolService,
    FonParamClient, FonParamTools,
};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ============================================================================================
    // Step 1: Setup the Client
    // ============================================================================================
    // The client talks to the public API by default. Point it elsewhere with
    // `ClientOptions::with_base_url` if you run a mirror.
    let client = FonParamClient::with_defaults()?;

    if !client.health_check().await {
        eprintln!("FonParam API is not reachable");
        return Ok(());
    }

    // ============================================================================================
    // Step 2: Typed Requests
    // ============================================================================================
    // Every endpoint has a typed method returning the records from `fonparam_mcp::model`.
    let params = ListFundsParams {
        fund_type: Some(FundTypeCode::HisseSenedi),
        sort: Some("yield_1y".to_string()),
        order: Some(SortOrder::Desc),
        limit: Some(5),
        ..Default::default()
    };
    let funds = client.list_funds(&params).await?;
    for fund in &funds.data {
        println!(
            "{:<6} {:>8} {}",
            fund.code,
            fund.yields
                .yield_1y
                .map(|y| format!("{y:.2}%"))
                .unwrap_or_else(|| "-".to_string()),
            fund.title
        );
    }

    // ============================================================================================
    // Step 3: Tool Calls
    // ============================================================================================
    // The same data is reachable the way an agent host sees it: by tool name with a JSON
    // argument object, validated against the advertised schema.
    let tools = FonParamTools::new(client);
    let latest = tools
        .call_tool("latest_inflation_rate".to_string(), json!({}))
        .await?;
    println!("{}", serde_json::to_string_pretty(&latest)?);

    Ok(())
}
