//! EKF sensor source selection
//!
//! This module decides which sensor feeds each estimator axis. Two source
//! sets are configured through parameters; the vehicle switches between
//! them at runtime (flight mode change, RC switch, MAVLink command).
//!
//! - [`types`]: Source enumerations, axes and source set index
//! - [`profile`]: Source profiles and the parameter provider trait
//! - [`selector`]: Active source state and per-axis accessors
//! - [`migration`]: Legacy parameter layout detection

pub mod error;
pub mod migration;
pub mod profile;
pub mod selector;
pub mod types;

pub use error::SourceError;
pub use migration::primary_profile_configured_in_storage;
pub use profile::{
    profile, read_posxy, read_posz, read_velxy, read_velz, read_yaw, SourceParamStore,
    SourceProfile,
};
pub use selector::{ActiveState, EkfSource};
pub use types::{SourceAxis, SourceSet, SourceXY, SourceYaw, SourceZ};
