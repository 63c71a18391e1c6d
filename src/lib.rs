#![cfg_attr(not(test), no_std)]

//! ekf_source - EKF sensor source selection
//!
//! Decides which sensor feeds each estimator axis (horizontal position,
//! horizontal velocity, vertical position, vertical velocity, yaw) and lets
//! the vehicle switch between source set 1 and source set 2 at runtime.
//!
//! # Design Principles
//!
//! - **Pure no_std**: No std library dependencies outside of tests
//! - **Trait abstractions**: The parameter store is injected via
//!   [`ekf_source::SourceParamStore`]
//! - **Total operations**: Source selection never fails; bad indices fall back
//!   to source set 1 and bad stored values fail closed to `None`
//!
//! # Modules
//!
//! - [`logging`]: `log_info!`/`log_warn!`/`log_debug!` macros (defmt or println)
//! - [`parameters`]: Parameter store and the `EK3_SRCn_*` parameter definitions
//! - [`ekf_source`]: Source types, profile table, active source selection and
//!   the legacy-layout migration query

#[macro_use]
pub mod logging;

pub mod ekf_source;
pub mod parameters;

pub use ekf_source::{
    primary_profile_configured_in_storage, EkfSource, SourceAxis, SourceError, SourceParamStore,
    SourceProfile, SourceSet, SourceXY, SourceYaw, SourceZ,
};
pub use parameters::{EkfSourceParams, ParameterError, ParameterStore};
