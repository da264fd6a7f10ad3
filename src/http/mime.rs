/// Content types this server can label a response with.
///
/// Classification is purely extension-based; file bytes are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// text/html - also the fallback for unknown or missing extensions
    Html,
    /// image/gif
    Gif,
    /// image/jpeg
    Jpeg,
    /// image/png
    Png,
}

/// Extension table, checked in order with a case-sensitive suffix match.
const EXTENSIONS: &[(&str, ContentType)] = &[
    (".html", ContentType::Html),
    (".htm", ContentType::Html),
    (".gif", ContentType::Gif),
    (".jpg", ContentType::Jpeg),
    (".jpeg", ContentType::Jpeg),
    (".png", ContentType::Png),
];

impl ContentType {
    /// Classifies a request path by its extension.
    ///
    /// Anything not in the table (including paths with no extension at
    /// all) defaults to `text/html`.
    ///
    /// # Example
    ///
    /// ```
    /// # use tagserve::http::mime::ContentType;
    /// assert_eq!(ContentType::from_path("/logo.png"), ContentType::Png);
    /// assert_eq!(ContentType::from_path("/notes.txt"), ContentType::Html);
    /// ```
    pub fn from_path(path: &str) -> Self {
        for (ext, content_type) in EXTENSIONS {
            if path.ends_with(ext) {
                return *content_type;
            }
        }
        ContentType::Html
    }

    /// Returns the MIME string sent in the `Content-Type:` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Gif => "image/gif",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Png => "image/png",
        }
    }

    /// Whether bodies of this type go through template-tag substitution.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentType::Html)
    }
}
