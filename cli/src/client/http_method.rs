#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Some(Self::GET),
            "POST" => Some(Self::POST),
            "PUT" => Some(Self::PUT),
            "DELETE" => Some(Self::DELETE),
            "PATCH" => Some(Self::PATCH),
            "HEAD" => Some(Self::HEAD),
            "OPTIONS" => Some(Self::OPTIONS),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
            Self::PATCH => "PATCH",
            Self::HEAD => "HEAD",
            Self::OPTIONS => "OPTIONS",
        }
    }

    /// Stored form of the verb.
    pub fn as_lower(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Only these methods may carry file attachments.
    pub fn accepts_files(&self) -> bool {
        matches!(self, Self::POST | Self::PUT | Self::PATCH)
    }

    pub fn to_reqwest_method(&self) -> reqwest::Method {
        match self {
            Self::GET => reqwest::Method::GET,
            Self::POST => reqwest::Method::POST,
            Self::PUT => reqwest::Method::PUT,
            Self::DELETE => reqwest::Method::DELETE,
            Self::PATCH => reqwest::Method::PATCH,
            Self::HEAD => reqwest::Method::HEAD,
            Self::OPTIONS => reqwest::Method::OPTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::parse(" post "), Some(HttpMethod::POST));
        assert_eq!(HttpMethod::parse("Patch"), Some(HttpMethod::PATCH));
        assert_eq!(HttpMethod::parse("INVALID"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn test_stored_form() {
        assert_eq!(HttpMethod::DELETE.as_lower(), "delete");
        assert_eq!(HttpMethod::OPTIONS.as_str(), "OPTIONS");
    }

    #[test]
    fn test_accepts_files() {
        assert!(HttpMethod::POST.accepts_files());
        assert!(HttpMethod::PUT.accepts_files());
        assert!(HttpMethod::PATCH.accepts_files());
        assert!(!HttpMethod::GET.accepts_files());
        assert!(!HttpMethod::DELETE.accepts_files());
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(HttpMethod::GET.to_reqwest_method(), reqwest::Method::GET);
        assert_eq!(HttpMethod::PATCH.to_reqwest_method(), reqwest::Method::PATCH);
    }
}
