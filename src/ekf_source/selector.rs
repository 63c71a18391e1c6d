//! Active source selection
//!
//! [`EkfSource`] holds the source per axis that the estimator currently uses.
//! The active sources are snapshotted from a source set on first
//! initialization and replaced whenever a set is selected.
//!
//! # State
//!
//! ```text
//! Uninitialized ──init()/select_profile()──▶ Active { sources, set }
//!       │                                         │  ▲
//!       │ reads: source set 1, live               │  │ select_profile()
//!       ▼                                         ▼  │ set_vertical_velocity_source()
//! ```
//!
//! Before initialization every accessor reads its own source set 1
//! parameter straight from the parameter store (one read per call, invalid
//! values logged at debug level only). After initialization accessors return
//! the snapshot, so later parameter writes take effect only on the next
//! `select_profile`. Invalid stored values are warned about once per snapshot.

use super::error::SourceError;
use super::migration;
use super::profile::{
    profile, read_posxy, read_posz, read_velxy, read_velz, read_yaw, SourceParamStore,
    SourceProfile,
};
use super::types::{SourceSet, SourceXY, SourceYaw, SourceZ};

/// Active source state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveState {
    /// No snapshot yet; reads fall through to source set 1
    Uninitialized,
    /// Cached sources in effect
    Active {
        /// Source per axis
        sources: SourceProfile,
        /// Source set the snapshot was taken from
        set: SourceSet,
    },
}

/// EKF source selection
///
/// Owns the parameter provider so that pre-initialization reads can go
/// straight to storage.
pub struct EkfSource<P: SourceParamStore> {
    /// Source set parameters
    params: P,
    /// Cached sources
    state: ActiveState,
}

impl<P: SourceParamStore> EkfSource<P> {
    /// Create an uninitialized source selector
    pub fn new(params: P) -> Self {
        Self {
            params,
            state: ActiveState::Uninitialized,
        }
    }

    /// Snapshot source set 1
    ///
    /// Runs once; later calls are no-ops.
    pub fn init(&mut self) {
        if self.is_initialized() {
            return;
        }

        let sources = profile(&self.params, SourceSet::Primary);
        self.state = ActiveState::Active {
            sources,
            set: SourceSet::Primary,
        };
        log_info!("EKF sources initialized from set 1: {:?}", sources);
    }

    /// Select source set by raw index (0 = source set 1, 1 = source set 2)
    ///
    /// Any index other than `1` selects source set 1. Selecting a set always
    /// leaves the selector initialized.
    pub fn select_profile(&mut self, index: u8) {
        let set = SourceSet::from_index(index);
        if index > 1 {
            log_debug!("EKF source set index {} out of range, using set 1", index);
        }
        self.select_source_set(set);
    }

    /// Select source set
    ///
    /// Equivalent to `init()` followed by a snapshot of `set`. The snapshot
    /// taken here replaces the one `init()` would produce, so only `set` is
    /// read.
    pub fn select_source_set(&mut self, set: SourceSet) {
        if !self.is_initialized() {
            log_info!("EKF sources initialized by source set selection");
        }

        let sources = profile(&self.params, set);
        self.state = ActiveState::Active { sources, set };
        log_info!("EKF source set {} selected", set.index() + 1);
    }

    /// Force the vertical velocity source
    ///
    /// Replaces only the cached vertical velocity source and does not run
    /// `init()`. Before initialization there is nothing cached: reads keep
    /// following source set 1 and `init()` snapshots it in full, so the
    /// override is dropped.
    pub fn set_vertical_velocity_source(&mut self, source: SourceZ) {
        match &mut self.state {
            ActiveState::Active { sources, .. } => {
                sources.velz = source;
                log_debug!("EKF vertical velocity source forced to {:?}", source);
            }
            ActiveState::Uninitialized => {
                log_debug!(
                    "EKF vertical velocity override {:?} dropped before init",
                    source
                );
            }
        }
    }

    /// Sources currently in effect
    ///
    /// Returns the snapshot once initialized, otherwise reads source set 1
    /// live from the parameter store.
    pub fn current(&self) -> SourceProfile {
        match self.state {
            ActiveState::Active { sources, .. } => sources,
            ActiveState::Uninitialized => self.live(SourceSet::Primary),
        }
    }

    /// Full profile read through the quiet single-axis readers
    fn live(&self, set: SourceSet) -> SourceProfile {
        SourceProfile {
            posxy: read_posxy(&self.params, set),
            velxy: read_velxy(&self.params, set),
            posz: read_posz(&self.params, set),
            velz: read_velz(&self.params, set),
            yaw: read_yaw(&self.params, set),
        }
    }

    /// Horizontal position source
    pub fn horizontal_position_source(&self) -> SourceXY {
        match self.state {
            ActiveState::Active { sources, .. } => sources.posxy,
            ActiveState::Uninitialized => read_posxy(&self.params, SourceSet::Primary),
        }
    }

    /// Horizontal velocity source
    pub fn horizontal_velocity_source(&self) -> SourceXY {
        match self.state {
            ActiveState::Active { sources, .. } => sources.velxy,
            ActiveState::Uninitialized => read_velxy(&self.params, SourceSet::Primary),
        }
    }

    /// Vertical position source
    pub fn vertical_position_source(&self) -> SourceZ {
        match self.state {
            ActiveState::Active { sources, .. } => sources.posz,
            ActiveState::Uninitialized => read_posz(&self.params, SourceSet::Primary),
        }
    }

    /// Vertical velocity source
    pub fn vertical_velocity_source(&self) -> SourceZ {
        match self.state {
            ActiveState::Active { sources, .. } => sources.velz,
            ActiveState::Uninitialized => read_velz(&self.params, SourceSet::Primary),
        }
    }

    /// Yaw source
    pub fn yaw_source(&self) -> SourceYaw {
        match self.state {
            ActiveState::Active { sources, .. } => sources.yaw,
            ActiveState::Uninitialized => read_yaw(&self.params, SourceSet::Primary),
        }
    }

    /// True if any position or velocity source in effect is GPS
    ///
    /// Yaw is never read.
    pub fn using_gps(&self) -> bool {
        self.horizontal_position_source() == SourceXY::Gps
            || self.horizontal_velocity_source() == SourceXY::Gps
            || self.vertical_position_source() == SourceZ::Gps
            || self.vertical_velocity_source() == SourceZ::Gps
    }

    /// True if any source in effect, yaw included, is external navigation
    pub fn using_external_nav(&self) -> bool {
        self.current().uses_external_nav()
    }

    /// True if either source set selects external navigation for any axis
    ///
    /// Reads both sets live, regardless of which one is active.
    pub fn external_nav_configured(&self) -> bool {
        SourceSet::ALL
            .iter()
            .any(|&set| self.live(set).uses_external_nav())
    }

    /// True once a source set snapshot has been taken
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, ActiveState::Active { .. })
    }

    /// Source set last selected (source set 1 while uninitialized)
    pub fn active_source_set(&self) -> SourceSet {
        match self.state {
            ActiveState::Active { set, .. } => set,
            ActiveState::Uninitialized => SourceSet::Primary,
        }
    }

    /// Raw active state
    pub fn state(&self) -> ActiveState {
        self.state
    }

    /// True if any source set 1 parameter was explicitly stored
    pub fn primary_profile_configured_in_storage(&self) -> bool {
        migration::primary_profile_configured_in_storage(&self.params)
    }

    /// Validate both source sets
    ///
    /// Checks parameter legality only; sensor availability and health are
    /// not inspected.
    pub fn pre_arm_check(&self) -> Result<(), SourceError> {
        for set in SourceSet::ALL {
            if let Err(err) = self.live(set).validate(set) {
                log_warn!("EKF source pre-arm check failed: {}", err.as_str());
                return Err(err);
            }
        }
        Ok(())
    }

    /// Parameter provider
    pub fn params(&self) -> &P {
        &self.params
    }

    /// Mutable parameter provider
    ///
    /// Writes do not affect the active sources until the next
    /// `select_profile` (or `init()` if still uninitialized).
    pub fn params_mut(&mut self) -> &mut P {
        &mut self.params
    }
}
