//! Upcoming economic events panel.

use super::{Panel, PanelBody, PanelContext, PanelId};
use crate::api::types::CalendarEntry;
use crate::consts::dashboard_consts::PLACEHOLDER;
use crate::format::format_short_date;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

const UNTITLED_EVENT: &str = "Évènement économique";

/// Expected market impact of an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    #[default]
    Medium,
    High,
}

impl Impact {
    /// Wire name, as sent in `impact_filter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Low => "Faible",
            Impact::Medium => "Moyen",
            Impact::High => "Fort",
        }
    }

    /// Unknown or absent values fall back to [`Impact::Medium`].
    pub fn parse_or_medium(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("low") => Impact::Low,
            Some("high") => Impact::High,
            _ => Impact::Medium,
        }
    }
}

impl std::str::FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Impact::Low),
            "medium" => Ok(Impact::Medium),
            "high" => Ok(Impact::High),
            other => Err(format!("unknown impact '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Raw `YYYY-MM-DD` date.
    pub date: String,
    /// `DD/MM`, or the raw date when it does not parse.
    pub short_date: String,
    pub time: Option<String>,
    /// Country, else currency, else the placeholder.
    pub region: String,
    pub title: String,
    pub impact: Impact,
    pub is_today: bool,
}

impl CalendarEvent {
    fn from_entry(entry: CalendarEntry, today: NaiveDate) -> Self {
        let is_today = NaiveDate::parse_from_str(entry.date.trim(), "%Y-%m-%d")
            .map(|d| d == today)
            .unwrap_or(false);
        let region = non_blank(entry.country)
            .or_else(|| non_blank(entry.currency))
            .unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            short_date: format_short_date(&entry.date),
            time: non_blank(entry.time),
            region,
            title: non_blank(entry.event).unwrap_or_else(|| UNTITLED_EVENT.to_string()),
            impact: Impact::parse_or_medium(entry.impact.as_deref()),
            is_today,
            date: entry.date,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Events in server order, tagged against `today`.
pub fn build_events(entries: Vec<CalendarEntry>, today: NaiveDate) -> Vec<CalendarEvent> {
    entries
        .into_iter()
        .map(|entry| CalendarEvent::from_entry(entry, today))
        .collect()
}

pub struct CalendarPanel {
    ctx: PanelContext,
    days_ahead: u32,
    impact_filter: Option<Impact>,
}

impl CalendarPanel {
    pub fn new(ctx: PanelContext, days_ahead: u32, impact_filter: Option<Impact>) -> Self {
        Self {
            ctx,
            days_ahead,
            impact_filter,
        }
    }
}

#[async_trait::async_trait]
impl Panel for CalendarPanel {
    fn id(&self) -> PanelId {
        PanelId::Calendar
    }

    async fn refresh(&self) {
        let today = Local::now().date_naive();
        let result = self
            .ctx
            .api()
            .calendar(self.days_ahead, self.impact_filter)
            .await
            .map(|entries| PanelBody::Calendar(build_events(entries, today)));
        self.ctx.publish(self.id(), result).await;
    }
}
