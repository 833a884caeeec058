//! Holder of the current configuration snapshot.

use tracing::{debug, trace};

use super::core::{
    Configuration, ConfigurationChange, DomainError, Material, PerformanceResult, Snapshot,
    compute_performance,
};

/// The single owner of the current [`Snapshot`].
///
/// Every mutation builds a new snapshot and replaces the old one; nothing is
/// edited in place. [`revision`](Self::revision) increments on each
/// replacement so presentation layers can track changes cheaply.
///
/// Performance results are memoized by snapshot equality. The cache only
/// avoids recomputation; a hit returns the same value a fresh call would.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationStore {
    snapshot: Snapshot,
    revision: u64,
    memo: Option<(Snapshot, Result<PerformanceResult, DomainError>)>,
}

impl ConfigurationStore {
    /// Creates a store holding `snapshot` at revision zero.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            revision: 0,
            memo: None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    #[must_use]
    pub fn configuration(&self) -> Configuration {
        self.snapshot.configuration
    }

    #[must_use]
    pub fn material(&self) -> Material {
        self.snapshot.material
    }

    /// Number of snapshot replacements since the store was created.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Merges a partial change into a new configuration and installs it.
    ///
    /// Values are not validated or clamped.
    pub fn update(&mut self, change: ConfigurationChange) -> Configuration {
        let configuration = self.snapshot.configuration.with(change);
        self.replace(Snapshot {
            configuration,
            ..self.snapshot
        });
        configuration
    }

    /// Installs a new material selection.
    pub fn select_material(&mut self, material: Material) -> Snapshot {
        self.replace(Snapshot {
            material,
            ..self.snapshot
        });
        self.snapshot
    }

    /// Removes all fouling, leaving every other field untouched.
    pub fn clean_system(&mut self) -> Configuration {
        let configuration = self.snapshot.configuration.cleaned();
        self.replace(Snapshot {
            configuration,
            ..self.snapshot
        });
        configuration
    }

    /// Performance of the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`DomainError`] if the snapshot is not physical.
    pub fn performance(&mut self) -> Result<PerformanceResult, DomainError> {
        if let Some((snapshot, result)) = &self.memo
            && *snapshot == self.snapshot
        {
            trace!(revision = self.revision, "performance memo hit");
            return *result;
        }

        let result = compute_performance(&self.snapshot.configuration, &self.snapshot.material);
        self.memo = Some((self.snapshot, result));
        result
    }

    fn replace(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.revision += 1;
        debug!(
            revision = self.revision,
            material = snapshot.material.name,
            model = %snapshot.configuration.model,
            "configuration replaced"
        );
    }
}
