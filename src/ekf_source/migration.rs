//! Legacy parameter layout detection
//!
//! Older firmware kept a single flat set of source parameters. A one-time
//! upgrade routine translates those into source set 1, but only when the
//! user has not configured source set 1 already. This module answers that
//! question; the conversion itself belongs to the upgrade routine.

use super::profile::SourceParamStore;
use super::types::{SourceAxis, SourceSet};

/// True if any source set 1 parameter holds an explicitly stored value
///
/// Parameters still running on their compiled-in defaults do not count.
pub fn primary_profile_configured_in_storage<P: SourceParamStore + ?Sized>(params: &P) -> bool {
    SourceAxis::ALL
        .iter()
        .any(|&axis| params.configured_in_storage(SourceSet::Primary, axis))
}
