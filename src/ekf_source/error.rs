//! Source configuration error types

use super::types::SourceSet;

/// Source set configuration errors reported by pre-arm checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceError {
    /// Optical flow selected as horizontal position source (velocity only)
    InvalidPosXYSource {
        /// Offending source set
        set: SourceSet,
    },
}

impl SourceError {
    /// Return variant name as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceError::InvalidPosXYSource { .. } => "InvalidPosXYSource",
        }
    }
}

impl core::fmt::Display for SourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SourceError::InvalidPosXYSource { set } => write!(
                f,
                "EK3_SRC{}_POSXY: optical flow is not a position source",
                set.index() + 1
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_set() {
        let err = SourceError::InvalidPosXYSource {
            set: SourceSet::Secondary,
        };
        let mut buf = heapless::String::<96>::new();
        core::fmt::write(&mut buf, format_args!("{}", err)).unwrap();
        assert_eq!(
            buf.as_str(),
            "EK3_SRC2_POSXY: optical flow is not a position source"
        );
        assert_eq!(err.as_str(), "InvalidPosXYSource");
    }
}
