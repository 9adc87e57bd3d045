use thiserror::Error;

/// Core error types for fleetlabel
#[derive(Debug, Error)]
pub enum Error {
    /// Label directory request failed
    #[error("directory error: {message}")]
    Directory {
        message: String,
        status: Option<u16>,
    },

    /// Directory server base URL rejected
    #[error("invalid server URL: {0}")]
    InvalidServerUrl(String),

    /// Internal logic error
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Represents a translated error with helpful context
#[derive(Debug, Clone)]
pub struct ErrorTranslation {
    pub user_message: String,
    pub suggestions: Vec<String>,
    pub help_url: Option<String>,
}

impl ErrorTranslation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            user_message: message.into(),
            suggestions: Vec::new(),
            help_url: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }
}

/// Error details surfaced in the GUI, paired with a translation
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub message: String,
    pub translation: ErrorTranslation,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let translation = DirectoryErrorPattern::match_error(&message);
        Self {
            message,
            translation,
        }
    }
}

/// Database of label-directory error patterns and their translations
pub struct DirectoryErrorPattern;

impl DirectoryErrorPattern {
    /// Matches an error message against known patterns and returns a user-friendly translation.
    pub fn match_error(msg: &str) -> ErrorTranslation {
        let lower = msg.to_lowercase();

        // Nothing listening on the configured address
        if lower.contains("connection refused") {
            return ErrorTranslation::new("Cannot reach the label directory service")
                .with_suggestion("Check that the fleet server is running")
                .with_suggestion("Verify the server URL in the config or with --server")
                .with_suggestion("Test connectivity: curl <server>/clients/labels");
        }

        // Hostname resolution failures
        if lower.contains("dns") || lower.contains("failed to lookup") {
            return ErrorTranslation::new("Directory server hostname could not be resolved")
                .with_suggestion("Check the hostname for typos")
                .with_suggestion("Verify DNS is working: nslookup <hostname>")
                .with_suggestion("Try the server's IP address instead")
                .with_help("https://wiki.archlinux.org/title/Domain_name_resolution");
        }

        // Slow or unresponsive server
        if lower.contains("timeout") || lower.contains("timed out") {
            return ErrorTranslation::new("Directory request timed out")
                .with_suggestion("The fleet server may be overloaded")
                .with_suggestion("Check network connectivity to the server")
                .with_suggestion("Try again in a moment");
        }

        // TLS negotiation problems
        if lower.contains("certificate") || lower.contains("tls") || lower.contains("ssl") {
            return ErrorTranslation::new("Secure connection to the directory server failed")
                .with_suggestion("The server certificate may be expired or self-signed")
                .with_suggestion("Confirm the URL scheme (http vs https) matches the server")
                .with_help("https://wiki.archlinux.org/title/Transport_Layer_Security");
        }

        // Auth rejection comes from the deployment's front end, not this app
        if lower.contains("401") || lower.contains("403") || lower.contains("unauthorized") {
            return ErrorTranslation::new("Directory server rejected the request")
                .with_suggestion("The server may require authentication fleetlabel does not supply")
                .with_suggestion("Check the server's access configuration");
        }

        // Wrong server or wrong mount point
        if lower.contains("404") || lower.contains("not found") {
            return ErrorTranslation::new("Directory endpoint not found on this server")
                .with_suggestion("The configured URL may point at the wrong service")
                .with_suggestion("The label directory is served at /clients/labels");
        }

        // Server-side failures
        if lower.contains("500") || lower.contains("502") || lower.contains("503") {
            return ErrorTranslation::new("Directory server reported an internal error")
                .with_suggestion("Check the fleet server's logs")
                .with_suggestion("Try again once the server recovers");
        }

        // Response decoded but not in the expected shape
        if lower.contains("malformed") || lower.contains("decod") || lower.contains("expected") {
            return ErrorTranslation::new("Directory response was not a label listing")
                .with_suggestion("The configured URL may point at a non-fleet service")
                .with_suggestion("Expected JSON shape: {\"items\": [{\"name\": ...}]}");
        }

        // Generic fallback
        ErrorTranslation::new(format!("Label directory error: {msg}"))
            .with_suggestion("Check the detailed error message for more information")
            .with_suggestion("Verify the server URL and network connectivity")
    }
}
