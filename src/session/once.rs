//! Single refresh cycle printed as text

use super::setup::{DashboardKind, build_refresher};
use crate::api::{MacroApi, MacroApiClient};
use crate::config::Settings;
use crate::panels::{PanelBody, PanelUpdate};
use crate::pretty::print_unreachable_header;
use crate::ui::text::render_update;
use crate::workers::RefreshTrigger;
use crate::workers::core::event_channels;
use std::error::Error;
use std::sync::Arc;

/// Refreshes every panel once and prints the result.
///
/// Fails only when no panel could be loaded at all.
pub async fn run_once(settings: Settings) -> Result<(), Box<dyn Error>> {
    let api: Arc<dyn MacroApi> = Arc::new(MacroApiClient::new(settings.environment.clone())?);
    let updates = collect_cycle(DashboardKind::Full, api, &settings).await;

    if all_unavailable(&updates) {
        print_unreachable_header(&settings.environment.api_url());
        return Err(format!(
            "API unreachable at {}",
            settings.environment.api_url()
        )
        .into());
    }

    for update in &updates {
        println!("{}", render_update(update));
    }
    Ok(())
}

/// Runs one refresh cycle and returns the last write of each panel, in
/// display order.
pub async fn collect_cycle(
    kind: DashboardKind,
    api: Arc<dyn MacroApi>,
    settings: &Settings,
) -> Vec<PanelUpdate> {
    let (sender, _events, mut update_receiver) = event_channels();
    let refresher = build_refresher(kind, api, sender, settings);
    let panels = refresher.panel_ids();

    // Panels publish far fewer writes than the channel holds
    refresher.refresh_all(RefreshTrigger::Startup).await;

    let mut updates = Vec::new();
    while let Ok(update) = update_receiver.try_recv() {
        updates.push(update);
    }
    updates.sort_by_key(|u| panels.iter().position(|p| *p == u.panel));
    updates
}

fn all_unavailable(updates: &[PanelUpdate]) -> bool {
    updates
        .iter()
        .all(|u| matches!(u.body, PanelBody::Unavailable(_)))
}
