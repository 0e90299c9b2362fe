//! Deployment environments eligible for environment-variable sync.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A deployment environment that can receive synced variables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SyncTarget {
    /// The production deployment.
    Production,
    /// Preview deployments.
    Preview,
    /// Local development.
    Development,
}

impl SyncTarget {
    /// All targets, in wire order.
    pub const ALL: [SyncTarget; 3] = [
        SyncTarget::Production,
        SyncTarget::Preview,
        SyncTarget::Development,
    ];

    /// Wire-format name of the target.
    pub fn as_str(self) -> &'static str {
        match self {
            SyncTarget::Production => "production",
            SyncTarget::Preview => "preview",
            SyncTarget::Development => "development",
        }
    }
}

impl fmt::Display for SyncTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of environments currently enabled for sync.
///
/// The remote integration owns the authoritative copy; a
/// [`crate::EnvSyncForm`] holds one of these locally for the duration
/// of user interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncTargetSet {
    targets: BTreeSet<SyncTarget>,
}

impl SyncTargetSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the target is enabled.
    pub fn contains(&self, target: SyncTarget) -> bool {
        self.targets.contains(&target)
    }

    /// Enable or disable a target.
    pub fn set(&mut self, target: SyncTarget, enabled: bool) {
        if enabled {
            self.targets.insert(target);
        } else {
            self.targets.remove(&target);
        }
    }

    /// The full target list, in stable order.
    pub fn to_vec(&self) -> Vec<SyncTarget> {
        self.targets.iter().copied().collect()
    }

    /// Number of enabled targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if no targets are enabled.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FromIterator<SyncTarget> for SyncTargetSet {
    fn from_iter<I: IntoIterator<Item = SyncTarget>>(iter: I) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}
