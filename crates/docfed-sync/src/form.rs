//! Environment-sync settings form.
//!
//! [`EnvSyncForm`] mirrors one connection's enabled sync targets for
//! the duration of user interaction. Every toggle recomputes the full
//! target list from all three current toggle values and submits it as a
//! complete replacement — never a delta — tagged with the connection
//! and integration ids. There is no debouncing; each toggle is an
//! independent submit.
//!
//! Methods take `&mut self` and submits are awaited, so a single form
//! instance cannot have two updates in flight. Between distinct form
//! instances the remote applies last-writer-wins.

use docfed_core::Result;

use crate::client::{IntegrationApi, UpdateConnectionRequest};
use crate::targets::{SyncTarget, SyncTargetSet};

/// Local copy of one connection's sync-target toggles.
#[derive(Debug, Clone)]
pub struct EnvSyncForm {
    connection_id: String,
    organization_integration_id: String,
    targets: SyncTargetSet,
}

impl EnvSyncForm {
    /// Seed a form from the connection's currently stored targets.
    pub fn new(
        connection_id: impl Into<String>,
        organization_integration_id: impl Into<String>,
        initial: impl IntoIterator<Item = SyncTarget>,
    ) -> Self {
        Self {
            connection_id: connection_id.into(),
            organization_integration_id: organization_integration_id.into(),
            targets: initial.into_iter().collect(),
        }
    }

    /// Current value of one toggle.
    pub fn is_enabled(&self, target: SyncTarget) -> bool {
        self.targets.contains(target)
    }

    /// Current target set.
    pub fn targets(&self) -> &SyncTargetSet {
        &self.targets
    }

    /// Flip one toggle and return the full replacement target list.
    pub fn set_target(&mut self, target: SyncTarget, enabled: bool) -> Vec<SyncTarget> {
        self.targets.set(target, enabled);
        self.targets.to_vec()
    }

    /// Flip one toggle and submit the resulting full replacement list.
    ///
    /// The local toggle state is updated before the submit; a failed
    /// submit surfaces the client error unchanged and leaves the local
    /// state at the attempted value.
    pub async fn toggle<A: IntegrationApi>(
        &mut self,
        api: &A,
        target: SyncTarget,
        enabled: bool,
    ) -> Result<()> {
        let env_sync_targets = self.set_target(target, enabled);
        let request = UpdateConnectionRequest {
            id: self.connection_id.clone(),
            organization_integration_id: self.organization_integration_id.clone(),
            env_sync_targets,
        };
        api.update_connection(&request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::client::mock::RecordingApi;
    use std::collections::BTreeSet;

    fn form() -> EnvSyncForm {
        EnvSyncForm::new("conn-1", "org-int-9", [SyncTarget::Preview])
    }

    #[test]
    fn test_seeded_from_stored_targets() {
        let form = form();
        assert!(form.is_enabled(SyncTarget::Preview));
        assert!(!form.is_enabled(SyncTarget::Production));
        assert!(!form.is_enabled(SyncTarget::Development));
    }

    #[tokio::test]
    async fn test_enabling_production_submits_full_set() {
        let api = RecordingApi::new();
        let mut form = form();

        form.toggle(&api, SyncTarget::Production, true).await.unwrap();

        let submitted = api.submitted().await;
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].id, "conn-1");
        assert_eq!(submitted[0].organization_integration_id, "org-int-9");
        // Set equality — the order is not load-bearing.
        let targets: BTreeSet<_> = submitted[0].env_sync_targets.iter().copied().collect();
        let expected: BTreeSet<_> = [SyncTarget::Preview, SyncTarget::Production]
            .into_iter()
            .collect();
        assert_eq!(targets, expected);
    }

    #[tokio::test]
    async fn test_each_toggle_is_an_independent_submit() {
        let api = RecordingApi::new();
        let mut form = form();

        form.toggle(&api, SyncTarget::Production, true).await.unwrap();
        form.toggle(&api, SyncTarget::Preview, false).await.unwrap();
        form.toggle(&api, SyncTarget::Development, true).await.unwrap();

        let submitted = api.submitted().await;
        assert_eq!(submitted.len(), 3);
        // Each submit carries the complete list at that point, not a delta.
        let last: BTreeSet<_> = submitted[2].env_sync_targets.iter().copied().collect();
        let expected: BTreeSet<_> = [SyncTarget::Production, SyncTarget::Development]
            .into_iter()
            .collect();
        assert_eq!(last, expected);
    }

    #[tokio::test]
    async fn test_disable_to_empty_set_submits_empty_list() {
        let api = RecordingApi::new();
        let mut form = form();

        form.toggle(&api, SyncTarget::Preview, false).await.unwrap();

        let submitted = api.submitted().await;
        assert!(submitted[0].env_sync_targets.is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_propagates() {
        let api = RecordingApi::failing();
        let mut form = form();

        let result = form.toggle(&api, SyncTarget::Production, true).await;
        assert!(result.is_err());
        // Local state already reflects the attempted toggle.
        assert!(form.is_enabled(SyncTarget::Production));
    }

    #[test]
    fn test_set_target_returns_replacement_list() {
        let mut form = form();
        let list = form.set_target(SyncTarget::Development, true);
        let set: BTreeSet<_> = list.into_iter().collect();
        let expected: BTreeSet<_> = [SyncTarget::Preview, SyncTarget::Development]
            .into_iter()
            .collect();
        assert_eq!(set, expected);
    }
}
