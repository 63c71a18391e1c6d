//! Source profile table
//!
//! A source profile assigns one source to each of the five estimator axes.
//! Two profiles exist (source set 1 and source set 2); their values live in the
//! parameter store and are read through [`SourceParamStore`].

use super::error::SourceError;
use super::types::{SourceAxis, SourceSet, SourceXY, SourceYaw, SourceZ};

/// Parameter access consumed by source selection
///
/// Implemented by the crate's [`ParameterStore`](crate::parameters::ParameterStore);
/// tests and other platforms may provide their own.
pub trait SourceParamStore {
    /// Raw stored value for one axis of one source set
    ///
    /// Unset parameters must report their compiled-in default
    /// ([`SourceAxis::default_value`]).
    fn get(&self, set: SourceSet, axis: SourceAxis) -> i32;

    /// True if the value was explicitly written to storage rather than
    /// relying on the compiled-in default
    fn configured_in_storage(&self, set: SourceSet, axis: SourceAxis) -> bool;
}

/// One source choice per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SourceProfile {
    /// Horizontal position source
    pub posxy: SourceXY,
    /// Horizontal velocity source
    pub velxy: SourceXY,
    /// Vertical position source
    pub posz: SourceZ,
    /// Vertical velocity source
    pub velz: SourceZ,
    /// Yaw source
    pub yaw: SourceYaw,
}

impl Default for SourceProfile {
    fn default() -> Self {
        Self {
            posxy: SourceXY::Gps,
            velxy: SourceXY::Gps,
            posz: SourceZ::Baro,
            velz: SourceZ::Gps,
            yaw: SourceYaw::Compass,
        }
    }
}

/// Read one axis, failing closed to `fallback` when the stored value is
/// outside the enumeration
///
/// `on_invalid` receives the offending raw value.
fn read_axis<P, T>(
    params: &P,
    set: SourceSet,
    axis: SourceAxis,
    convert: fn(i32) -> Option<T>,
    fallback: T,
    on_invalid: fn(SourceSet, SourceAxis, i32),
) -> T
where
    P: SourceParamStore + ?Sized,
{
    let raw = params.get(set, axis);
    match convert(raw) {
        Some(source) => source,
        None => {
            on_invalid(set, axis, raw);
            fallback
        }
    }
}

fn warn_invalid(set: SourceSet, axis: SourceAxis, raw: i32) {
    log_warn!(
        "EKF source {:?}/{:?}: invalid value {}, using None",
        set,
        axis,
        raw
    );
}

// Live reads run every estimator cycle before init; keep them quiet
fn debug_invalid(set: SourceSet, axis: SourceAxis, raw: i32) {
    log_debug!("EKF source {:?}/{:?}: invalid value {}", set, axis, raw);
}

/// Read the horizontal position source of one set (single parameter read)
pub fn read_posxy<P: SourceParamStore + ?Sized>(params: &P, set: SourceSet) -> SourceXY {
    read_axis(
        params,
        set,
        SourceAxis::PosXY,
        SourceXY::try_from_i32,
        SourceXY::None,
        debug_invalid,
    )
}

/// Read the horizontal velocity source of one set (single parameter read)
pub fn read_velxy<P: SourceParamStore + ?Sized>(params: &P, set: SourceSet) -> SourceXY {
    read_axis(
        params,
        set,
        SourceAxis::VelXY,
        SourceXY::try_from_i32,
        SourceXY::None,
        debug_invalid,
    )
}

/// Read the vertical position source of one set (single parameter read)
pub fn read_posz<P: SourceParamStore + ?Sized>(params: &P, set: SourceSet) -> SourceZ {
    read_axis(
        params,
        set,
        SourceAxis::PosZ,
        SourceZ::try_from_i32,
        SourceZ::None,
        debug_invalid,
    )
}

/// Read the vertical velocity source of one set (single parameter read)
pub fn read_velz<P: SourceParamStore + ?Sized>(params: &P, set: SourceSet) -> SourceZ {
    read_axis(
        params,
        set,
        SourceAxis::VelZ,
        SourceZ::try_from_i32,
        SourceZ::None,
        debug_invalid,
    )
}

/// Read the yaw source of one set (single parameter read)
pub fn read_yaw<P: SourceParamStore + ?Sized>(params: &P, set: SourceSet) -> SourceYaw {
    read_axis(
        params,
        set,
        SourceAxis::Yaw,
        SourceYaw::try_from_i32,
        SourceYaw::None,
        debug_invalid,
    )
}

impl SourceProfile {
    /// Read a full profile from the parameter store
    ///
    /// Out-of-range values are logged as warnings; this is the snapshot path
    /// taken by `init()` and source set selection.
    pub fn load<P: SourceParamStore + ?Sized>(params: &P, set: SourceSet) -> Self {
        Self {
            posxy: read_axis(
                params,
                set,
                SourceAxis::PosXY,
                SourceXY::try_from_i32,
                SourceXY::None,
                warn_invalid,
            ),
            velxy: read_axis(
                params,
                set,
                SourceAxis::VelXY,
                SourceXY::try_from_i32,
                SourceXY::None,
                warn_invalid,
            ),
            posz: read_axis(
                params,
                set,
                SourceAxis::PosZ,
                SourceZ::try_from_i32,
                SourceZ::None,
                warn_invalid,
            ),
            velz: read_axis(
                params,
                set,
                SourceAxis::VelZ,
                SourceZ::try_from_i32,
                SourceZ::None,
                warn_invalid,
            ),
            yaw: read_axis(
                params,
                set,
                SourceAxis::Yaw,
                SourceYaw::try_from_i32,
                SourceYaw::None,
                warn_invalid,
            ),
        }
    }

    /// True if any position or velocity axis uses GPS (yaw is not considered)
    pub fn uses_gps(&self) -> bool {
        self.posxy == SourceXY::Gps
            || self.velxy == SourceXY::Gps
            || self.posz == SourceZ::Gps
            || self.velz == SourceZ::Gps
    }

    /// True if any axis, yaw included, uses external navigation
    pub fn uses_external_nav(&self) -> bool {
        self.posxy == SourceXY::ExternalNav
            || self.velxy == SourceXY::ExternalNav
            || self.posz == SourceZ::ExternalNav
            || self.velz == SourceZ::ExternalNav
            || self.yaw.is_external()
    }

    /// Check the profile against the legal values of each parameter
    ///
    /// Optical flow only measures velocity, so it is rejected as a horizontal
    /// position source.
    pub fn validate(&self, set: SourceSet) -> Result<(), SourceError> {
        if self.posxy == SourceXY::OpticalFlow {
            return Err(SourceError::InvalidPosXYSource { set });
        }
        Ok(())
    }
}

/// Read the profile for a source set
///
/// Pure read; no caching. Out-of-range indices cannot be expressed since
/// [`SourceSet`] is closed.
pub fn profile<P: SourceParamStore + ?Sized>(params: &P, set: SourceSet) -> SourceProfile {
    SourceProfile::load(params, set)
}
