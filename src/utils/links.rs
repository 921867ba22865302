use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

const CONSOLE_BASE_URL: &str = "https://console.aws.amazon.com";

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

#[must_use]
pub fn codedeploy_deployment_url(region: &str, deployment_id: &str) -> String {
    format!("{CONSOLE_BASE_URL}/codedeploy/home?region={region}#/deployments/{deployment_id}")
}

#[must_use]
pub fn codepipeline_url(region: &str, pipeline: &str) -> String {
    format!("{CONSOLE_BASE_URL}/codepipeline/home?region={region}#/view/{pipeline}")
}

#[must_use]
pub fn elasticache_node_url(region: &str, node: &str) -> String {
    format!("{CONSOLE_BASE_URL}/elasticache/home?region={region}#cache-nodes:id={node};nodes")
}

/// Alarm names may contain spaces and reserved characters, so they are encoded.
#[must_use]
pub fn cloudwatch_alarm_url(region: &str, alarm_name: &str) -> String {
    format!(
        "{CONSOLE_BASE_URL}/cloudwatch/home?region={region}#alarm:alarmFilter=ANY;name={}",
        encode_uri_component(alarm_name)
    )
}

/// Accepts only absolute `http`/`https` URLs with a host.
#[must_use]
pub fn parse_webhook_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    let web_scheme = matches!(url.scheme(), "http" | "https");
    (web_scheme && url.host_str().is_some()).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            encode_uri_component("High CPU: web/api (prod)!"),
            "High%20CPU%3A%20web%2Fapi%20(prod)!"
        );
        assert_eq!(encode_uri_component("a;b=c&d#e"), "a%3Bb%3Dc%26d%23e");
        assert_eq!(encode_uri_component("plain-name_1.2~*'"), "plain-name_1.2~*'");
    }

    #[test]
    fn builds_console_links() {
        assert_eq!(
            codedeploy_deployment_url("us-east-1", "d-123"),
            "https://console.aws.amazon.com/codedeploy/home?region=us-east-1#/deployments/d-123"
        );
        assert_eq!(
            elasticache_node_url("eu-west-1", "cache-0001"),
            "https://console.aws.amazon.com/elasticache/home?region=eu-west-1#cache-nodes:id=cache-0001;nodes"
        );
        assert!(cloudwatch_alarm_url("us-west-2", "cpu high").ends_with("name=cpu%20high"));
    }

    #[test]
    fn webhook_url_requires_web_scheme() {
        assert!(parse_webhook_url("https://hooks.example.com/abc").is_some());
        assert!(parse_webhook_url(" http://localhost:8080/hook ").is_some());
        assert!(parse_webhook_url("ftp://hooks.example.com").is_none());
        assert!(parse_webhook_url("hooks.example.com/abc").is_none());
        assert!(parse_webhook_url("").is_none());
    }
}
