//! Formatting helpers shared by every panel.
//!
//! All functions here are pure: they turn raw API values into display strings
//! and [`Tone`]s, the terminal equivalent of the positive/negative/neutral
//! CSS classes.

use crate::consts::dashboard_consts::PLACEHOLDER;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Colour class of a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

/// Classifies `value` against a symmetric neutral band `[-epsilon, epsilon]`.
///
/// Percentages use `epsilon = 0.0`; the sentiment grid passes its own band.
/// NaN is neutral.
pub fn classify_sign(value: f64, epsilon: f64) -> Tone {
    if value > epsilon {
        Tone::Positive
    } else if value < -epsilon {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

/// Like [`classify_sign`], with a missing value classified as neutral.
pub fn classify_optional(value: Option<f64>, epsilon: f64) -> Tone {
    value.map_or(Tone::Neutral, |v| classify_sign(v, epsilon))
}

/// Formats a percentage change with one decimal and an explicit `+` sign.
///
/// The value is rounded half away from zero first; the sign comes from the
/// unrounded value, so `-0.04` renders as `-0.0%` and `0.04` as `+0.0%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => {
            let scaled = v * 10.0;
            // Values this large have no fractional digit left to round
            let rounded = if scaled.is_finite() {
                scaled.round() / 10.0
            } else {
                v
            };
            // -0.0 literal input renders unsigned
            let rounded = if v == 0.0 { 0.0 } else { rounded };
            let sign = if v > 0.0 { "+" } else { "" };
            format!("{}{:.1}%", sign, rounded)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Formats a confidence in `[0, 1]` as a whole percentage.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", (confidence * 100.0).round())
}

/// Renders an ISO timestamp as `DD/MM HH:MM` in the local time zone.
pub fn format_local_datetime(iso: &str) -> String {
    format_datetime_in(iso, &Local)
}

/// Renders an ISO timestamp as `DD/MM HH:MM` in `tz`. Timestamps without an
/// offset are read as wall-clock time of `tz`.
pub fn format_datetime_in<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let iso = iso.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(iso) {
        return parsed.with_timezone(tz).format("%d/%m %H:%M").to_string();
    }

    let naive = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M"));

    match naive.ok().and_then(|n| tz.from_local_datetime(&n).earliest()) {
        Some(local) => local.format("%d/%m %H:%M").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Renders a `YYYY-MM-DD` date as `DD/MM`, or returns the text unchanged.
pub fn format_short_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m").to_string(),
        Err(_) => date.to_string(),
    }
}

/// French label of a directional bias.
pub fn bias_label(value: Option<&str>) -> &'static str {
    match value {
        Some("bullish") => "Haussier",
        Some("bearish") => "Baissier",
        Some(_) => "Neutre",
        None => PLACEHOLDER,
    }
}

/// Colour class of a directional bias.
pub fn bias_tone(value: Option<&str>) -> Tone {
    match value {
        Some("bullish") => Tone::Positive,
        Some("bearish") => Tone::Negative,
        _ => Tone::Neutral,
    }
}

/// Label and tone of a snapshot `risk_mode`.
pub fn risk_mode_label(mode: Option<&str>) -> (&'static str, Tone) {
    match mode {
        Some("risk_on") => ("Risk-On", Tone::Positive),
        Some("risk_off") => ("Risk-Off", Tone::Negative),
        _ => ("Neutre", Tone::Neutral),
    }
}

/// Label and tone of an orientation `risk` field (`on`, `off`, `neutral`).
pub fn orientation_label(risk: Option<&str>) -> (&'static str, Tone) {
    match risk {
        Some("on") | Some("risk_on") => ("Risk-On", Tone::Positive),
        Some("off") | Some("risk_off") => ("Risk-Off", Tone::Negative),
        _ => ("Neutre", Tone::Neutral),
    }
}

/// Tone of a regime label as served by `/api/macro/state`.
pub fn regime_tone(label: &str) -> Tone {
    let label = label.to_lowercase();
    if label.contains("risk-on") || label.contains("risk_on") {
        Tone::Positive
    } else if label.contains("risk-off") || label.contains("risk_off") {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_percent_placeholder() {
        assert_eq!(format_percent(None), "—");
        assert_eq!(format_percent(Some(f64::NAN)), "—");
    }

    #[test]
    fn test_format_percent_rounding_and_sign() {
        assert_eq!(format_percent(Some(2.34)), "+2.3%");
        assert_eq!(format_percent(Some(-0.04)), "-0.0%");
        assert_eq!(format_percent(Some(0.04)), "+0.0%");
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(Some(-0.0)), "0.0%");
        assert_eq!(format_percent(Some(-1.25)), "-1.3%");
        assert_eq!(format_percent(Some(10.2)), "+10.2%");
    }

    #[test]
    fn test_format_percent_huge_values_stay_finite() {
        let text = format_percent(Some(1e308));
        assert!(text.starts_with("+1"));
        assert!(text.ends_with(".0%"));
        assert!(!text.contains("inf"));

        let text = format_percent(Some(-f64::MAX));
        assert!(text.starts_with("-1"));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn test_classify_sign_zero_is_neutral_for_any_epsilon() {
        for epsilon in [0.0, 0.05, 0.2, 1.0] {
            assert_eq!(classify_sign(0.0, epsilon), Tone::Neutral);
        }
    }

    #[test]
    fn test_classify_sign_bands() {
        assert_eq!(classify_sign(0.01, 0.0), Tone::Positive);
        assert_eq!(classify_sign(-0.01, 0.0), Tone::Negative);
        assert_eq!(classify_sign(0.1, 0.2), Tone::Neutral);
        assert_eq!(classify_sign(-0.1, 0.2), Tone::Neutral);
        assert_eq!(classify_sign(0.1, 0.05), Tone::Positive);
        assert_eq!(classify_sign(-0.2, 0.2), Tone::Neutral);
        assert_eq!(classify_sign(f64::NAN, 0.0), Tone::Neutral);
        assert_eq!(classify_optional(None, 0.0), Tone::Neutral);
    }

    #[test]
    fn test_bias_label() {
        assert_eq!(bias_label(Some("bullish")), "Haussier");
        assert_eq!(bias_label(Some("bearish")), "Baissier");
        assert_eq!(bias_label(Some("anything-else")), "Neutre");
        assert_eq!(bias_label(None), "—");

        assert_eq!(bias_tone(Some("bullish")), Tone::Positive);
        assert_eq!(bias_tone(Some("bearish")), Tone::Negative);
        assert_eq!(bias_tone(Some("strong")), Tone::Neutral);
        assert_eq!(bias_tone(None), Tone::Neutral);
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime_in("2024-03-05T14:07:59Z", &Utc),
            "05/03 14:07"
        );
        assert_eq!(
            format_datetime_in("2024-03-05T14:07:59+02:00", &Utc),
            "05/03 12:07"
        );
        // Python's isoformat() without offset
        assert_eq!(
            format_datetime_in("2024-12-31T23:59:01.123456", &Utc),
            "31/12 23:59"
        );
        assert_eq!(format_datetime_in("not a date", &Utc), "—");
        assert_eq!(format_datetime_in("", &Utc), "—");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2026-02-02"), "02/02");
        assert_eq!(format_short_date("demain"), "demain");
    }

    #[test]
    fn test_labels() {
        assert_eq!(risk_mode_label(Some("risk_on")), ("Risk-On", Tone::Positive));
        assert_eq!(risk_mode_label(Some("risk_off")), ("Risk-Off", Tone::Negative));
        assert_eq!(risk_mode_label(None), ("Neutre", Tone::Neutral));
        assert_eq!(orientation_label(Some("off")), ("Risk-Off", Tone::Negative));
        assert_eq!(orientation_label(Some("neutral")), ("Neutre", Tone::Neutral));
        assert_eq!(regime_tone("Risk-On"), Tone::Positive);
        assert_eq!(regime_tone("Neutre"), Tone::Neutral);
        assert_eq!(format_confidence(0.78), "78%");
    }
}
