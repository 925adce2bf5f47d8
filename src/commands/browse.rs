use anyhow::Result;

use crate::dashboard::Dashboard;
use crate::model::UserRecord;
use crate::observability::{set_phase, SessionPhase};
use crate::store::RevealPolicy;
use crate::tui::DashboardExplorer;

/// Run the interactive dashboard until the user quits.
pub fn run_browse(records: Vec<UserRecord>, policy: RevealPolicy) -> Result<()> {
    let _phase = set_phase(SessionPhase::Browsing);
    let dashboard = Dashboard::mount(records, policy);

    let mut explorer = DashboardExplorer::new(dashboard)?;
    explorer.run()?;

    let store = explorer.app().dashboard().store();
    tracing::info!(
        revealed = store.revealed().len(),
        total = store.dataset().len(),
        "dashboard closed"
    );
    Ok(())
}
