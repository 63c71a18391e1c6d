//! Parameter management types
//!
//! This module provides the in-memory parameter store and the EKF source
//! parameter definitions. Flash persistence and GCS parameter protocol
//! handling are owned by the platform layer.

pub mod ekf_source;
pub mod error;
pub mod storage;

pub use ekf_source::{param_name, EkfSourceParams};
pub use error::ParameterError;
pub use storage::{ParamFlags, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
