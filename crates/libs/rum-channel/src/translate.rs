//! Wire-token translation for the enum arguments crossing the channel.
//!
//! The caller sends its enum values as namespaced strings, e.g.
//! `"RumResourceType.document"`. Matching is exact and case-sensitive on the
//! full namespaced token — a bare suffix is not recognized. Every function is
//! total: unrecognized tokens map to a documented default instead of failing.

use rum_ipc::{ErrorSource, HttpMethod, ResourceType, UserActionType};

/// Maps a `RumResourceType.*` token; anything else is `Other`.
pub fn resource_type_from_wire(value: &str) -> ResourceType {
    match value {
        "RumResourceType.document" => ResourceType::Document,
        "RumResourceType.image" => ResourceType::Image,
        "RumResourceType.xhr" => ResourceType::Xhr,
        "RumResourceType.beacon" => ResourceType::Beacon,
        "RumResourceType.css" => ResourceType::Css,
        "RumResourceType.fetch" => ResourceType::Fetch,
        "RumResourceType.font" => ResourceType::Font,
        "RumResourceType.js" => ResourceType::Js,
        "RumResourceType.media" => ResourceType::Media,
        "RumResourceType.native" => ResourceType::Native,
        _ => ResourceType::Other,
    }
}

/// Maps a `RumHttpMethod.*` token; anything else is `Get`.
pub fn http_method_from_wire(value: &str) -> HttpMethod {
    match value {
        "RumHttpMethod.get" => HttpMethod::Get,
        "RumHttpMethod.post" => HttpMethod::Post,
        "RumHttpMethod.head" => HttpMethod::Head,
        "RumHttpMethod.put" => HttpMethod::Put,
        "RumHttpMethod.delete" => HttpMethod::Delete,
        "RumHttpMethod.patch" => HttpMethod::Patch,
        _ => HttpMethod::Get,
    }
}

/// Maps a `RumUserActionType.*` token; anything else is `Custom`.
pub fn user_action_type_from_wire(value: &str) -> UserActionType {
    match value {
        "RumUserActionType.tap" => UserActionType::Tap,
        "RumUserActionType.scroll" => UserActionType::Scroll,
        "RumUserActionType.swipe" => UserActionType::Swipe,
        _ => UserActionType::Custom,
    }
}

/// Maps a `RumErrorSource.*` token; anything else is `Custom`.
pub fn error_source_from_wire(value: &str) -> ErrorSource {
    match value {
        "RumErrorSource.source" => ErrorSource::Source,
        "RumErrorSource.network" => ErrorSource::Network,
        "RumErrorSource.webview" => ErrorSource::Webview,
        "RumErrorSource.console" => ErrorSource::Console,
        "RumErrorSource.custom" => ErrorSource::Custom,
        _ => ErrorSource::Custom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_covers_full_token_table() {
        let cases = [
            ("RumResourceType.document", ResourceType::Document),
            ("RumResourceType.image", ResourceType::Image),
            ("RumResourceType.xhr", ResourceType::Xhr),
            ("RumResourceType.beacon", ResourceType::Beacon),
            ("RumResourceType.css", ResourceType::Css),
            ("RumResourceType.fetch", ResourceType::Fetch),
            ("RumResourceType.font", ResourceType::Font),
            ("RumResourceType.js", ResourceType::Js),
            ("RumResourceType.media", ResourceType::Media),
            ("RumResourceType.native", ResourceType::Native),
        ];
        for (token, expected) in cases {
            assert_eq!(resource_type_from_wire(token), expected, "token {token}");
        }
        assert_eq!(
            resource_type_from_wire("RumResourceType.unknown_token"),
            ResourceType::Other
        );
    }

    #[test]
    fn http_method_covers_full_token_table() {
        let cases = [
            ("RumHttpMethod.get", HttpMethod::Get),
            ("RumHttpMethod.post", HttpMethod::Post),
            ("RumHttpMethod.head", HttpMethod::Head),
            ("RumHttpMethod.put", HttpMethod::Put),
            ("RumHttpMethod.delete", HttpMethod::Delete),
            ("RumHttpMethod.patch", HttpMethod::Patch),
        ];
        for (token, expected) in cases {
            assert_eq!(http_method_from_wire(token), expected, "token {token}");
        }
        assert_eq!(http_method_from_wire("RumHttpMethod.options"), HttpMethod::Get);
    }

    #[test]
    fn user_action_covers_full_token_table() {
        let cases = [
            ("RumUserActionType.tap", UserActionType::Tap),
            ("RumUserActionType.scroll", UserActionType::Scroll),
            ("RumUserActionType.swipe", UserActionType::Swipe),
        ];
        for (token, expected) in cases {
            assert_eq!(user_action_type_from_wire(token), expected, "token {token}");
        }
        assert_eq!(
            user_action_type_from_wire("RumUserActionType.longPress"),
            UserActionType::Custom
        );
    }

    #[test]
    fn error_source_covers_full_token_table() {
        let cases = [
            ("RumErrorSource.source", ErrorSource::Source),
            ("RumErrorSource.network", ErrorSource::Network),
            ("RumErrorSource.webview", ErrorSource::Webview),
            ("RumErrorSource.console", ErrorSource::Console),
            ("RumErrorSource.custom", ErrorSource::Custom),
        ];
        for (token, expected) in cases {
            assert_eq!(error_source_from_wire(token), expected, "token {token}");
        }
        assert_eq!(error_source_from_wire("RumErrorSource.agent"), ErrorSource::Custom);
    }

    /// Matching is on the full namespaced token, never a bare suffix, and is
    /// case-sensitive.
    #[test]
    fn matching_is_exact_and_case_sensitive() {
        assert_eq!(resource_type_from_wire("document"), ResourceType::Other);
        assert_eq!(resource_type_from_wire("RumResourceType.Document"), ResourceType::Other);
        assert_eq!(resource_type_from_wire("rumresourcetype.document"), ResourceType::Other);
        assert_eq!(http_method_from_wire("post"), HttpMethod::Get);
        assert_eq!(http_method_from_wire("RumHttpMethod.POST"), HttpMethod::Get);
        assert_eq!(user_action_type_from_wire("tap"), UserActionType::Custom);
        assert_eq!(error_source_from_wire("network"), ErrorSource::Custom);
        assert_eq!(error_source_from_wire(""), ErrorSource::Custom);
    }
}
