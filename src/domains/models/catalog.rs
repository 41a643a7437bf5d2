//! Region and size catalogues used when creating servers.

use serde::Deserialize;

use super::lenient;

/// A datacenter region.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Region {
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub regions: Vec<Region>,
}

/// A server size (plan).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Size {
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// Memory in MB.
    #[serde(default, deserialize_with = "lenient::count")]
    pub memory: Option<u64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub vcpus: Option<u64>,
    /// Disk in GB.
    #[serde(default, deserialize_with = "lenient::count")]
    pub disk: Option<u64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price_monthly: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SizeList {
    #[serde(default, deserialize_with = "lenient::list")]
    pub sizes: Vec<Size>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_as_string() {
        let list: SizeList = serde_json::from_value(json!({
            "sizes": [{ "slug": "s-1vcpu-1gb", "price_monthly": "6.00", "memory": 1024.0 }]
        }))
        .unwrap();
        assert_eq!(list.sizes[0].price_monthly, Some(6.0));
        assert_eq!(list.sizes[0].memory, Some(1024));
    }
}
