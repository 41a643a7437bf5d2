//! Region and size catalogue tools, used to pick options for `create_server`.

use crate::core::api::ApiRequest;
use crate::domains::models::{Region, RegionList, Size, SizeList};
use crate::domains::tools::api_tool::{ApiTool, NoParams};
use crate::domains::tools::error::ToolError;
use crate::domains::tools::render::{display_or, text_or, text_or_na, with_unit};

pub struct ListRegionsTool;

impl ApiTool for ListRegionsTool {
    const NAME: &'static str = "list_regions";
    const DESCRIPTION: &'static str = "List the regions a new server can be created in";

    type Params = NoParams;
    type Response = RegionList;

    fn request(_params: &NoParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/regions"))
    }

    fn render(_params: &NoParams, response: RegionList) -> String {
        if response.regions.is_empty() {
            return "No regions available.".to_string();
        }

        let lines = response
            .regions
            .iter()
            .map(region_line)
            .collect::<Vec<_>>()
            .join("\n");
        format!("# Regions\n\n{}", lines)
    }
}

pub struct ListSizesTool;

impl ApiTool for ListSizesTool {
    const NAME: &'static str = "list_sizes";
    const DESCRIPTION: &'static str =
        "List the server sizes available, with memory, CPUs, disk and monthly price";

    type Params = NoParams;
    type Response = SizeList;

    fn request(_params: &NoParams) -> Result<ApiRequest, ToolError> {
        Ok(ApiRequest::get("/sizes"))
    }

    fn render(_params: &NoParams, response: SizeList) -> String {
        if response.sizes.is_empty() {
            return "No sizes available.".to_string();
        }

        let lines = response
            .sizes
            .iter()
            .map(size_line)
            .collect::<Vec<_>>()
            .join("\n");
        format!("# Sizes\n\n{}", lines)
    }
}

fn region_line(region: &Region) -> String {
    let availability = match region.available {
        Some(false) => " (unavailable)",
        _ => "",
    };
    format!(
        "- `{}`: {}{}",
        text_or_na(region.slug.as_deref()),
        text_or(region.name.as_deref(), "Unnamed region"),
        availability
    )
}

fn size_line(size: &Size) -> String {
    let price = size
        .price_monthly
        .map(|p| format!("${:.2}/mo", p))
        .unwrap_or_else(|| "N/A".to_string());
    let mut line = format!(
        "- `{}`: {} vCPU, {} RAM, {} disk, {}",
        text_or_na(size.slug.as_deref()),
        display_or(size.vcpus, "?"),
        with_unit(size.memory, "MB"),
        with_unit(size.disk, "GB"),
        price
    );
    if let Some(description) = size.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" ({})", description));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::testing::RecordingExecutor;
    use crate::domains::tools::testing::{call, text};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_regions() {
        let executor = RecordingExecutor::replying(json!({
            "regions": [
                { "slug": "nyc3", "name": "New York 3", "available": true },
                { "slug": "sfo1", "name": "San Francisco 1", "available": false }
            ]
        }));
        let result = call::<ListRegionsTool>(&executor, json!({})).await.unwrap();

        assert_eq!(
            text(&result),
            "# Regions\n\n- `nyc3`: New York 3\n- `sfo1`: San Francisco 1 (unavailable)"
        );
        assert_eq!(executor.single_request().path, "/regions");
    }

    #[tokio::test]
    async fn test_list_sizes() {
        let executor = RecordingExecutor::replying(json!({
            "sizes": [
                { "slug": "s-1vcpu-1gb", "memory": 1024, "vcpus": 1, "disk": 25, "price_monthly": 6 },
                { "slug": "s-2vcpu-4gb" }
            ]
        }));
        let result = call::<ListSizesTool>(&executor, json!({})).await.unwrap();

        let output = text(&result);
        assert!(output.contains("- `s-1vcpu-1gb`: 1 vCPU, 1024MB RAM, 25GB disk, $6.00/mo"));
        assert!(output.contains("- `s-2vcpu-4gb`: ? vCPU, N/A RAM, N/A disk, N/A"));
    }

    #[tokio::test]
    async fn test_list_sizes_empty() {
        let executor = RecordingExecutor::replying(json!({ "sizes": [] }));
        let result = call::<ListSizesTool>(&executor, json!({})).await.unwrap();
        assert_eq!(text(&result), "No sizes available.");
    }
}
