use chrono::DateTime;

/// Renders an SNS timestamp as Unix epoch seconds.
///
/// Milliseconds appear as a fraction only when non-zero. Values that are not
/// RFC 3339 are returned unchanged.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn epoch_seconds(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp.trim()) {
        Ok(dt) => format!("{}", dt.timestamp_millis() as f64 / 1000.0),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_have_no_fraction() {
        assert_eq!(epoch_seconds("2021-01-04T09:40:00.000Z"), "1609753200");
        assert_eq!(epoch_seconds("2021-01-04T09:40:00Z"), "1609753200");
    }

    #[test]
    fn milliseconds_are_kept() {
        assert_eq!(epoch_seconds("2021-01-04T09:40:00.250Z"), "1609753200.25");
        assert_eq!(epoch_seconds("2021-01-04T09:40:00.123Z"), "1609753200.123");
    }

    #[test]
    fn unparseable_is_verbatim() {
        assert_eq!(epoch_seconds("yesterday"), "yesterday");
        assert_eq!(epoch_seconds(""), "");
    }
}
