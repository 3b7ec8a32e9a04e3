use crate::{
    git::Branch,
    session::{Session, TabId},
};
use std::path::PathBuf;

/// Ordered tabs plus the active one. Always holds at least one session.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Vec<Session>,
    active: TabId,
    next_id: u64,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// One unbound session, active.
    pub fn new() -> Self {
        let first = Session::new(TabId(1));
        Self {
            active: first.id,
            sessions: vec![first],
            next_id: 2,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn get(&self, id: TabId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.sessions.iter().position(|s| s.id == id)
    }

    pub fn active(&self) -> &Session {
        let idx = self.position(self.active).unwrap_or(self.sessions.len() - 1);
        &self.sessions[idx]
    }

    pub fn active_mut(&mut self) -> &mut Session {
        let idx = self.position(self.active).unwrap_or(self.sessions.len() - 1);
        &mut self.sessions[idx]
    }

    /// Append a fresh unbound session. The active tab does not change.
    pub fn create_session(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        self.sessions.push(Session::new(id));
        log::debug!("created tab {id}");
        id
    }

    /// Remove a session. Unknown ids and the last remaining session are left alone.
    /// When the active session goes, the last remaining one becomes active.
    /// Returns whether anything was removed.
    pub fn delete_session(&mut self, id: TabId) -> bool {
        if self.sessions.len() <= 1 {
            return false;
        }
        let Some(idx) = self.position(id) else {
            return false;
        };

        self.sessions.remove(idx);
        if self.active == id
            && let Some(last) = self.sessions.last()
        {
            self.active = last.id;
        }
        log::debug!("closed tab {id}, active is {}", self.active);
        true
    }

    /// Bind a session to a repository. Returns false when the session is gone.
    pub fn bind_session(&mut self, id: TabId, repo_path: PathBuf, branches: Vec<Branch>) -> bool {
        match self.get_mut(id) {
            Some(session) => {
                session.bind(repo_path, branches);
                true
            }
            None => false,
        }
    }

    /// Make `id` active. Returns false when there is no such session.
    pub fn activate(&mut self, id: TabId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.active = id;
        true
    }

    pub fn activate_next(&mut self) -> TabId {
        self.activate_offset(1)
    }

    pub fn activate_previous(&mut self) -> TabId {
        self.activate_offset(self.sessions.len() - 1)
    }

    fn activate_offset(&mut self, offset: usize) -> TabId {
        let len = self.sessions.len();
        let current = self.position(self.active).unwrap_or(0);
        self.active = self.sessions[(current + offset) % len].id;
        self.active
    }

    /// Activate by 1-based position in the tab strip.
    pub fn activate_position(&mut self, position: usize) -> Option<TabId> {
        let id = self.sessions.get(position.checked_sub(1)?)?.id;
        self.activate(id).then_some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(registry: &SessionRegistry) -> Vec<u64> {
        registry.sessions().iter().map(|s| s.id.0).collect()
    }

    #[test]
    fn test_new_registry_has_one_active_unbound_session() {
        let registry = SessionRegistry::new();
        assert_eq!(ids(&registry), vec![1]);
        assert_eq!(registry.active_id(), TabId(1));
        assert!(!registry.active().is_bound());
    }

    #[test]
    fn test_create_then_delete_active() {
        let mut registry = SessionRegistry::new();
        let created = registry.create_session();
        assert_eq!(created, TabId(2));
        assert_eq!(ids(&registry), vec![1, 2]);
        assert_eq!(registry.active_id(), TabId(1));

        assert!(registry.delete_session(TabId(1)));
        assert_eq!(ids(&registry), vec![2]);
        assert_eq!(registry.active_id(), TabId(2));
    }

    #[test]
    fn test_delete_last_session_is_noop() {
        let mut registry = SessionRegistry::new();
        assert!(!registry.delete_session(TabId(1)));
        assert_eq!(ids(&registry), vec![1]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut registry = SessionRegistry::new();
        registry.create_session();
        assert!(!registry.delete_session(TabId(99)));
        assert_eq!(ids(&registry), vec![1, 2]);
        assert_eq!(registry.active_id(), TabId(1));
    }

    #[test]
    fn test_delete_inactive_keeps_active() {
        let mut registry = SessionRegistry::new();
        registry.create_session();
        registry.create_session();
        registry.activate(TabId(1));
        assert!(registry.delete_session(TabId(2)));
        assert_eq!(ids(&registry), vec![1, 3]);
        assert_eq!(registry.active_id(), TabId(1));
    }

    #[test]
    fn test_deleting_active_middle_tab_falls_to_last() {
        let mut registry = SessionRegistry::new();
        registry.create_session();
        registry.create_session();
        registry.activate(TabId(2));
        registry.delete_session(TabId(2));
        assert_eq!(registry.active_id(), TabId(3));
    }

    #[test]
    fn test_ids_never_reused_across_deletions() {
        let mut registry = SessionRegistry::new();
        let mut seen = vec![1];
        for round in 0..20 {
            let id = registry.create_session();
            assert!(!seen.contains(&id.0), "id {id} reused");
            seen.push(id.0);
            if round % 3 == 0 {
                let first = registry.sessions()[0].id;
                registry.delete_session(first);
            }
        }
        let expected: Vec<u64> = (1..=21).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_arbitrary_sequences_keep_order_and_never_empty() {
        let mut registry = SessionRegistry::new();
        // Deterministic pseudo-random walk over create/delete.
        let mut seed: u64 = 0x2545_f491;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let before = ids(&registry);
            if seed % 3 == 0 {
                registry.create_session();
                let after = ids(&registry);
                assert_eq!(&after[..before.len()], &before[..]);
            } else {
                let target = TabId((seed >> 33) % (registry.next_id + 1));
                registry.delete_session(target);
                let after = ids(&registry);
                let expected: Vec<u64> = before
                    .iter()
                    .copied()
                    .filter(|i| before.len() == 1 || *i != target.0)
                    .collect();
                assert_eq!(after, expected);
            }
            assert!(!registry.is_empty());
            assert!(registry.get(registry.active_id()).is_some());
        }
    }

    #[test]
    fn test_bind_session() {
        let mut registry = SessionRegistry::new();
        assert!(registry.bind_session(
            TabId(1),
            PathBuf::from("/a/b/my-repo"),
            vec![Branch::local("main", true), Branch::remote("origin/main")],
        ));
        let session = registry.get(TabId(1)).unwrap();
        assert_eq!(session.name, "my-repo");
        assert_eq!(session.binding.as_ref().unwrap().selected, Some(0));

        assert!(!registry.bind_session(TabId(7), PathBuf::from("/x"), Vec::new()));
    }

    #[test]
    fn test_activate_cycles_and_positions() {
        let mut registry = SessionRegistry::new();
        registry.create_session();
        registry.create_session();

        assert_eq!(registry.activate_next(), TabId(2));
        assert_eq!(registry.activate_next(), TabId(3));
        assert_eq!(registry.activate_next(), TabId(1));
        assert_eq!(registry.activate_previous(), TabId(3));

        assert_eq!(registry.activate_position(2), Some(TabId(2)));
        assert_eq!(registry.activate_position(0), None);
        assert_eq!(registry.activate_position(4), None);
        assert_eq!(registry.active_id(), TabId(2));

        assert!(!registry.activate(TabId(42)));
        assert_eq!(registry.active_id(), TabId(2));
    }
}
