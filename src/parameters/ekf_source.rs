//! EKF Source Parameter Definitions
//!
//! Defines the per-axis sensor source parameters for both source sets,
//! following ArduPilot's `EK3_SRCn_*` naming.
//!
//! # Parameters
//!
//! | Name | Values | Default |
//! |------|--------|---------|
//! | `EK3_SRC1_POSXY` / `EK3_SRC2_POSXY` | 0:None, 1:GPS, 2:Beacon, 4:ExternalNav | 1 |
//! | `EK3_SRC1_VELXY` / `EK3_SRC2_VELXY` | 0:None, 1:GPS, 2:Beacon, 3:OpticalFlow, 4:ExternalNav | 1 |
//! | `EK3_SRC1_POSZ` / `EK3_SRC2_POSZ` | 0:None, 1:Baro, 2:RangeFinder, 3:GPS, 4:Beacon, 5:ExternalNav | 1 |
//! | `EK3_SRC1_VELZ` / `EK3_SRC2_VELZ` | 0:None, 1:Baro, 2:RangeFinder, 3:GPS, 4:Beacon, 5:ExternalNav | 3 |
//! | `EK3_SRC1_YAW` / `EK3_SRC2_YAW` | 0:None, 1:Compass, 2:External, 3:ExternalCompassFallback | 1 |
//!
//! # ArduPilot Compatibility
//!
//! - https://ardupilot.org/copter/docs/common-ekf-sources.html

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::ekf_source::{SourceAxis, SourceParamStore, SourceSet};

/// Parameter names indexed by `[set][axis]`
const PARAM_NAMES: [[&str; SourceAxis::COUNT]; SourceSet::COUNT] = [
    [
        "EK3_SRC1_POSXY",
        "EK3_SRC1_VELXY",
        "EK3_SRC1_POSZ",
        "EK3_SRC1_VELZ",
        "EK3_SRC1_YAW",
    ],
    [
        "EK3_SRC2_POSXY",
        "EK3_SRC2_VELXY",
        "EK3_SRC2_POSZ",
        "EK3_SRC2_VELZ",
        "EK3_SRC2_YAW",
    ],
];

/// Parameter name for one axis of one source set
pub fn param_name(set: SourceSet, axis: SourceAxis) -> &'static str {
    PARAM_NAMES[set.index()][axis.index()]
}

/// Source set parameter registration
pub struct EkfSourceParams;

impl EkfSourceParams {
    /// Register source parameters for both sets with default values
    ///
    /// # Arguments
    ///
    /// * `store` - Parameter store to register parameters in
    ///
    /// # Returns
    ///
    /// Ok if all parameters registered successfully
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        for set in SourceSet::ALL {
            for axis in SourceAxis::ALL {
                store.register(
                    param_name(set, axis),
                    ParamValue::Int(axis.default_value()),
                    ParamFlags::empty(),
                )?;
            }
        }
        Ok(())
    }
}

impl SourceParamStore for ParameterStore {
    fn get(&self, set: SourceSet, axis: SourceAxis) -> i32 {
        match ParameterStore::get(self, param_name(set, axis)) {
            Some(value) => value.as_int(),
            None => axis.default_value(),
        }
    }

    fn configured_in_storage(&self, set: SourceSet, axis: SourceAxis) -> bool {
        self.is_configured(param_name(set, axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ekf_source::{SourceProfile, SourceXY, SourceYaw, SourceZ};

    #[test]
    fn test_param_names_fit_store() {
        for set in SourceSet::ALL {
            for axis in SourceAxis::ALL {
                assert!(param_name(set, axis).len() <= crate::parameters::PARAM_NAME_LEN);
            }
        }
        assert_eq!(
            param_name(SourceSet::Secondary, SourceAxis::VelZ),
            "EK3_SRC2_VELZ"
        );
    }

    #[test]
    fn test_register_defaults() {
        let mut store = ParameterStore::new();
        EkfSourceParams::register_defaults(&mut store).unwrap();

        for set in SourceSet::ALL {
            for axis in SourceAxis::ALL {
                assert_eq!(
                    store.get(param_name(set, axis)),
                    Some(&ParamValue::Int(axis.default_value()))
                );
            }
        }
        assert_eq!(store.get("EK3_SRC1_POSXY"), Some(&ParamValue::Int(1)));
        assert_eq!(store.get("EK3_SRC1_VELZ"), Some(&ParamValue::Int(3)));
        assert_eq!(store.get("EK3_SRC2_YAW"), Some(&ParamValue::Int(1)));
        assert!(!store.is_configured("EK3_SRC1_POSXY"));
    }

    #[test]
    fn test_store_provider_defaults() {
        let mut store = ParameterStore::new();
        EkfSourceParams::register_defaults(&mut store).unwrap();

        for set in SourceSet::ALL {
            let profile = SourceProfile::load(&store, set);
            assert_eq!(profile, SourceProfile::default());
        }
        let primary = SourceProfile::load(&store, SourceSet::Primary);
        assert_eq!(primary.posxy, SourceXY::Gps);
        assert_eq!(primary.posz, SourceZ::Baro);
        assert_eq!(primary.velz, SourceZ::Gps);
        assert_eq!(primary.yaw, SourceYaw::Compass);
    }

    #[test]
    fn test_store_provider_custom_values() {
        let mut store = ParameterStore::new();
        EkfSourceParams::register_defaults(&mut store).unwrap();

        store
            .set("EK3_SRC2_POSXY", ParamValue::Int(SourceXY::Beacon as i32))
            .unwrap();
        store
            .set("EK3_SRC2_POSZ", ParamValue::Int(SourceZ::RangeFinder as i32))
            .unwrap();

        assert_eq!(
            SourceProfile::load(&store, SourceSet::Primary),
            SourceProfile::default()
        );
        let secondary = SourceProfile::load(&store, SourceSet::Secondary);
        assert_eq!(secondary.posxy, SourceXY::Beacon);
        assert_eq!(secondary.posz, SourceZ::RangeFinder);
        assert!(store.configured_in_storage(SourceSet::Secondary, SourceAxis::PosZ));
        assert!(!store.configured_in_storage(SourceSet::Primary, SourceAxis::PosZ));
    }

    #[test]
    fn test_store_provider_unregistered_reads_default() {
        let store = ParameterStore::new();
        assert_eq!(
            SourceParamStore::get(&store, SourceSet::Primary, SourceAxis::VelZ),
            SourceZ::Gps as i32
        );
        assert!(!store.configured_in_storage(SourceSet::Primary, SourceAxis::VelZ));
    }
}
