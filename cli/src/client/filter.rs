use super::models::ApiDefinition;
use crate::core::logger::Logger;

/// `list` filters. Unset fields match everything; set fields must all match.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub category: Option<String>,
    pub method: Option<String>,
    /// `scheme://host[:port]`
    pub host: Option<String>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.method.is_none() && self.host.is_none()
    }

    pub fn apply<'a>(&self, apis: &'a [ApiDefinition]) -> Vec<&'a ApiDefinition> {
        apis.iter().filter(|api| self.matches(api)).collect()
    }

    fn matches(&self, api: &ApiDefinition) -> bool {
        if let Some(category) = &self.category {
            if &api.category != category {
                return false;
            }
        }
        if let Some(method) = &self.method {
            if !api.method.eq_ignore_ascii_case(method) {
                return false;
            }
        }
        if let Some(host) = &self.host {
            match host_of(&api.url) {
                Some(api_host) => return &api_host == host,
                None => {
                    Logger::warn(&format!("Invalid URL found in saved APIs: {}", api.url));
                    return false;
                }
            }
        }
        true
    }
}

/// `scheme://host[:port]`, the port only when it is not the scheme default.
pub fn host_of(raw: &str) -> Option<String> {
    let url = url::Url::parse(raw).ok()?;
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    })
}

/// What a `delete` invocation removes from the saved collection.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    All,
    Id(String),
    Category(String),
}

impl DeleteTarget {
    /// Indices into `apis` selected for removal. An id selects at most its
    /// first occurrence.
    pub fn select(&self, apis: &[ApiDefinition]) -> Vec<usize> {
        match self {
            DeleteTarget::All => (0..apis.len()).collect(),
            DeleteTarget::Id(id) => apis.iter().position(|api| &api.id == id).into_iter().collect(),
            DeleteTarget::Category(category) => apis
                .iter()
                .enumerate()
                .filter(|(_, api)| &api.category == category)
                .map(|(i, _)| i)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::RequestOptions;
    use crate::core::json::Fields;
    use chrono::Utc;

    fn api(id: &str, method: &str, url: &str, category: &str) -> ApiDefinition {
        ApiDefinition {
            id: id.into(),
            method: method.into(),
            url: url.into(),
            data: Fields::new(),
            header: Fields::new(),
            query: Fields::new(),
            category: category.into(),
            encoded: false,
            file: vec![],
            multipart: false,
            created_at: Utc::now(),
            updated_at: None,
            created_options: RequestOptions::default(),
        }
    }

    fn sample() -> Vec<ApiDefinition> {
        vec![
            api("a", "get", "https://api.example.com/users", "users"),
            api("b", "post", "https://api.example.com/users", "users"),
            api("c", "get", "http://localhost:8080/health", "ops"),
            api("d", "get", "not a url", "ops"),
        ]
    }

    fn ids(apis: Vec<&ApiDefinition>) -> Vec<&str> {
        apis.into_iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("https://api.example.com/users?x=1").as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(
            host_of("http://localhost:8080/health").as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(host_of("https://x.io:443/").as_deref(), Some("https://x.io"));
        assert_eq!(host_of("nope"), None);
    }

    #[test]
    fn test_filters_compose() {
        let apis = sample();
        let filter = ListFilter {
            category: Some("users".into()),
            method: Some("GET".into()),
            host: None,
        };
        assert_eq!(ids(filter.apply(&apis)), vec!["a"]);

        let by_host = ListFilter {
            host: Some("http://localhost:8080".into()),
            ..ListFilter::default()
        };
        assert_eq!(ids(by_host.apply(&apis)), vec!["c"]);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let apis = sample();
        assert!(ListFilter::default().is_empty());
        assert_eq!(ListFilter::default().apply(&apis).len(), 4);
    }

    #[test]
    fn test_delete_selection() {
        let mut apis = sample();
        apis.push(api("a", "put", "https://x.io", ""));

        assert_eq!(DeleteTarget::All.select(&apis).len(), 5);
        assert_eq!(DeleteTarget::Id("a".into()).select(&apis), vec![0]);
        assert!(DeleteTarget::Id("zz".into()).select(&apis).is_empty());
        assert_eq!(DeleteTarget::Category("ops".into()).select(&apis), vec![2, 3]);
    }
}
