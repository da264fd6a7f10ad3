/// HTTP request methods.
///
/// This server speaks a deliberately small subset of HTTP: only GET is
/// supported. Other method tokens are parsed but rejected by the parser
/// with [`crate::http::parser::ParseError::UnsupportedMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a supported method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use tagserve::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            _ => None,
        }
    }
}

/// A parsed HTTP request.
///
/// Only the request line contributes: header lines are consumed and
/// discarded during parsing, and no body is ever read.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (always GET once parsing succeeds)
    pub method: Method,
    /// The request path as received, always `/`-prefixed (e.g. "/index.html")
    pub path: String,
}
