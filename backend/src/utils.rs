//! Small helpers shared by the persistence and service layers.

const DEV_DOMAIN: &str = "http://api.packagename.local";
const PROD_DOMAIN: &str = "https://www.packagename.com";

/// Replaces every underscore with a hyphen (table name to url segment).
pub fn snake_to_hyphen(snaked: &str) -> String {
    snaked.replace('_', "-")
}

/// Scheme and host used to build absolute resource URIs.
pub fn domain(dev_mode: bool) -> &'static str {
    if dev_mode {
        DEV_DOMAIN
    } else {
        PROD_DOMAIN
    }
}

/// Absolute URI of a single row exposed by the v1 API.
pub fn resource_uri(domain: &str, table: &str, id: i64) -> String {
    format!("{}/api/v1/{}/{}", domain, snake_to_hyphen(table), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_become_url_segments() {
        assert_eq!(snake_to_hyphen("example_mtmexample"), "example-mtmexample");
        assert_eq!(snake_to_hyphen("example"), "example");
    }

    #[test]
    fn uri_uses_dev_domain() {
        assert_eq!(
            resource_uri(domain(true), "otm_example", 3),
            "http://api.packagename.local/api/v1/otm-example/3"
        );
        assert_eq!(domain(false), "https://www.packagename.com");
    }
}
