//! Source type definitions
//!
//! Closed sets of sensing modalities per axis kind, the axis enumeration and
//! the source set (profile index). Discriminants are the values stored in the
//! `EK3_SRCn_*` parameters.

/// Horizontal position / velocity source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceXY {
    /// No source
    None = 0,
    /// GNSS receiver
    Gps = 1,
    /// Positioning beacons
    Beacon = 2,
    /// Optical flow sensor (velocity only)
    OpticalFlow = 3,
    /// External navigation system (e.g. visual odometry)
    ExternalNav = 4,
}

impl SourceXY {
    /// Convert a stored value, returning `None` when out of range
    pub fn try_from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Gps),
            2 => Some(Self::Beacon),
            3 => Some(Self::OpticalFlow),
            4 => Some(Self::ExternalNav),
            _ => None,
        }
    }

    /// Convert a stored value, failing closed to `SourceXY::None`
    pub fn from_i32(value: i32) -> Self {
        Self::try_from_i32(value).unwrap_or(Self::None)
    }
}

/// Vertical position / velocity source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceZ {
    /// No source
    None = 0,
    /// Barometer
    Baro = 1,
    /// Downward-facing rangefinder
    RangeFinder = 2,
    /// GNSS receiver
    Gps = 3,
    /// Positioning beacons
    Beacon = 4,
    /// External navigation system
    ExternalNav = 5,
}

impl SourceZ {
    /// Convert a stored value, returning `None` when out of range
    pub fn try_from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Baro),
            2 => Some(Self::RangeFinder),
            3 => Some(Self::Gps),
            4 => Some(Self::Beacon),
            5 => Some(Self::ExternalNav),
            _ => None,
        }
    }

    /// Convert a stored value, failing closed to `SourceZ::None`
    pub fn from_i32(value: i32) -> Self {
        Self::try_from_i32(value).unwrap_or(Self::None)
    }
}

/// Yaw source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceYaw {
    /// No source
    None = 0,
    /// Magnetometer
    Compass = 1,
    /// External yaw (GPS-for-yaw or external navigation)
    External = 2,
    /// External yaw, falling back to the compass when unavailable
    ExternalCompassFallback = 3,
}

impl SourceYaw {
    /// Convert a stored value, returning `None` when out of range
    pub fn try_from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Compass),
            2 => Some(Self::External),
            3 => Some(Self::ExternalCompassFallback),
            _ => None,
        }
    }

    /// Convert a stored value, failing closed to `SourceYaw::None`
    pub fn from_i32(value: i32) -> Self {
        Self::try_from_i32(value).unwrap_or(Self::None)
    }

    /// True if an external yaw source is in use (with or without fallback)
    pub fn is_external(self) -> bool {
        matches!(self, Self::External | Self::ExternalCompassFallback)
    }
}

/// Estimator axis fed by a single source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceAxis {
    /// Horizontal position
    PosXY,
    /// Horizontal velocity
    VelXY,
    /// Vertical position (altitude / height)
    PosZ,
    /// Vertical velocity
    VelZ,
    /// Yaw
    Yaw,
}

impl SourceAxis {
    /// Number of axes
    pub const COUNT: usize = 5;

    /// All axes in parameter order
    pub const ALL: [SourceAxis; Self::COUNT] = [
        SourceAxis::PosXY,
        SourceAxis::VelXY,
        SourceAxis::PosZ,
        SourceAxis::VelZ,
        SourceAxis::Yaw,
    ];

    /// Position of this axis in [`SourceAxis::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Compiled-in default stored value for this axis (same for both sets)
    pub const fn default_value(self) -> i32 {
        match self {
            SourceAxis::PosXY => SourceXY::Gps as i32,
            SourceAxis::VelXY => SourceXY::Gps as i32,
            SourceAxis::PosZ => SourceZ::Baro as i32,
            SourceAxis::VelZ => SourceZ::Gps as i32,
            SourceAxis::Yaw => SourceYaw::Compass as i32,
        }
    }
}

/// Source set (profile) selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceSet {
    /// Source set 1 (index 0)
    #[default]
    Primary = 0,
    /// Source set 2 (index 1)
    Secondary = 1,
}

impl SourceSet {
    /// Number of source sets
    pub const COUNT: usize = 2;

    /// All source sets in index order
    pub const ALL: [SourceSet; Self::COUNT] = [SourceSet::Primary, SourceSet::Secondary];

    /// Map a raw source set index
    ///
    /// Only the literal `1` selects source set 2. Every other value,
    /// including out-of-range indices from RC switches or MAVLink commands,
    /// selects source set 1.
    pub const fn from_index(index: u8) -> Self {
        if index == 1 {
            SourceSet::Secondary
        } else {
            SourceSet::Primary
        }
    }

    /// Position of this set in [`SourceSet::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_xy_conversion() {
        assert_eq!(SourceXY::from_i32(1), SourceXY::Gps);
        assert_eq!(SourceXY::from_i32(3), SourceXY::OpticalFlow);
        assert_eq!(SourceXY::from_i32(4), SourceXY::ExternalNav);
        assert_eq!(SourceXY::try_from_i32(5), None);
        assert_eq!(SourceXY::from_i32(5), SourceXY::None);
        assert_eq!(SourceXY::from_i32(-1), SourceXY::None);
    }

    #[test]
    fn test_source_z_conversion() {
        assert_eq!(SourceZ::from_i32(2), SourceZ::RangeFinder);
        assert_eq!(SourceZ::from_i32(5), SourceZ::ExternalNav);
        assert_eq!(SourceZ::from_i32(6), SourceZ::None);
    }

    #[test]
    fn test_source_yaw_conversion() {
        assert_eq!(SourceYaw::from_i32(3), SourceYaw::ExternalCompassFallback);
        assert_eq!(SourceYaw::from_i32(42), SourceYaw::None);
        assert!(SourceYaw::External.is_external());
        assert!(SourceYaw::ExternalCompassFallback.is_external());
        assert!(!SourceYaw::Compass.is_external());
    }

    #[test]
    fn test_axis_defaults() {
        assert_eq!(SourceAxis::PosXY.default_value(), 1);
        assert_eq!(SourceAxis::VelXY.default_value(), 1);
        assert_eq!(SourceAxis::PosZ.default_value(), 1);
        assert_eq!(SourceAxis::VelZ.default_value(), 3);
        assert_eq!(SourceAxis::Yaw.default_value(), 1);
    }

    #[test]
    fn test_axis_index_matches_all() {
        for (i, axis) in SourceAxis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_source_set_from_index_defaults_to_primary() {
        assert_eq!(SourceSet::from_index(0), SourceSet::Primary);
        assert_eq!(SourceSet::from_index(1), SourceSet::Secondary);
        assert_eq!(SourceSet::from_index(2), SourceSet::Primary);
        assert_eq!(SourceSet::from_index(255), SourceSet::Primary);
        assert_eq!(SourceSet::default(), SourceSet::Primary);
    }
}
