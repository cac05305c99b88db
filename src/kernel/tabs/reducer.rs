use compact_str::CompactString;

use super::action::TabAction;
use super::session::TabSession;
use crate::kernel::services::ports::TabStore;
use crate::kernel::Effect;

impl<S: TabStore> TabSession<'_, S> {
    /// Apply one action. Persistence is carried out here; the returned effects are the ones
    /// the caller has to act on (navigation, re-render).
    pub fn dispatch(&mut self, action: TabAction) -> (bool, Vec<Effect>) {
        let (changed, effects) = match action {
            TabAction::Reconcile { current } => self.reconcile_current(current),
            TabAction::Navigate { name } => self.navigate_to(name),
            TabAction::Close { name } => self.close_tab(&name),
        };
        (changed, self.run_effects(effects))
    }

    pub fn reconcile(&mut self, current: &str) -> (bool, Vec<Effect>) {
        self.dispatch(TabAction::Reconcile {
            current: CompactString::from(current),
        })
    }

    pub fn close(&mut self, name: &str) -> (bool, Vec<Effect>) {
        self.dispatch(TabAction::Close {
            name: CompactString::from(name),
        })
    }

    fn reconcile_current(&mut self, current: CompactString) -> (bool, Vec<Effect>) {
        if !self.catalog.contains(&current) {
            tracing::warn!(file = %current, "ignoring reconcile for a file outside the catalog");
            return (false, Vec::new());
        }

        let dropped = self.tabs.retain_known(self.catalog);
        for name in &dropped {
            tracing::debug!(tab = %name, "dropping stale tab");
        }

        let appended = self.tabs.push_if_absent(current.clone());
        let activated = self.active.as_ref() != Some(&current);
        self.active = Some(current);

        let changed = !dropped.is_empty() || appended || activated;
        (
            changed,
            vec![Effect::PersistTabs(self.tabs.to_json()), Effect::RenderTabs],
        )
    }

    fn navigate_to(&mut self, name: CompactString) -> (bool, Vec<Effect>) {
        (false, vec![Effect::Navigate(name)])
    }

    fn close_tab(&mut self, name: &str) -> (bool, Vec<Effect>) {
        let removed = self.tabs.remove(name);
        let mut effects = vec![Effect::PersistTabs(self.tabs.to_json())];

        if removed && self.active.as_deref() == Some(name) {
            let target = self
                .tabs
                .first()
                .map(CompactString::from)
                .unwrap_or_else(|| self.home.clone());
            self.active = None;
            effects.push(Effect::Navigate(target));
        } else {
            effects.push(Effect::RenderTabs);
        }

        (removed, effects)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::PersistTabs(raw) => {
                    self.store.save(raw);
                    None
                }
                other => Some(other),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/tabs/reducer.rs"]
mod tests;
