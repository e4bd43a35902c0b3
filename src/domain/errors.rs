use derive_more::Display;

/// Message shown to the user for every failed acquisition attempt
pub const DATA_UNAVAILABLE_MESSAGE: &str =
    "An error occurred while fetching data. Please try again later.";

/// Why a market-data request produced no assets
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    /// Transport failure, non-success status or unreadable body
    #[display(fmt = "request failed: {}", _0)]
    RequestFailed(String),
    /// Body is not a JSON array of complete asset records
    #[display(fmt = "decode failed: {}", _0)]
    DecodeFailed(String),
}

impl FetchError {
    /// Collapsed, user-facing description. Both variants share it.
    pub fn user_message(&self) -> &'static str {
        DATA_UNAVAILABLE_MESSAGE
    }
}

impl std::error::Error for FetchError {}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_share_user_message() {
        let request = FetchError::RequestFailed("HTTP 503".into());
        let decode = FetchError::DecodeFailed("expected array".into());
        assert_eq!(request.user_message(), decode.user_message());
        assert_eq!(request.to_string(), "request failed: HTTP 503");
        assert_eq!(decode.to_string(), "decode failed: expected array");
    }
}
