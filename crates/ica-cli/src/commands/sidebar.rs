//! The `ica sidebar` command.

use anyhow::Result;

use ica_core::state::SidebarPreference;

use super::Session;

/// What to do with the sidebar flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Show,
    Collapse,
    Expand,
    Toggle,
}

pub fn execute(session: &mut Session, action: SidebarAction) -> Result<()> {
    let preference = SidebarPreference::load(&session.store);
    preference.cell().subscribe(|collapsed| {
        tracing::info!(collapsed = *collapsed, "sidebar preference changed");
    });

    let collapsed = match action {
        SidebarAction::Show => preference.is_collapsed(),
        SidebarAction::Collapse => {
            preference.set(&mut session.store, true)?;
            true
        }
        SidebarAction::Expand => {
            preference.set(&mut session.store, false)?;
            false
        }
        SidebarAction::Toggle => preference.toggle(&mut session.store)?,
    };

    println!("Sidebar: {}", if collapsed { "collapsed" } else { "expanded" });
    Ok(())
}
