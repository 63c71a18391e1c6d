//! Parameter Storage Types
//!
//! Provides the in-memory `ParameterStore` used as the source of vehicle
//! configuration. Every parameter is registered with a compiled-in default;
//! a parameter only counts as *configured in storage* once a value has been
//! explicitly written (via [`ParameterStore::set`]) or loaded from a
//! persisted image (via [`ParameterStore::insert_raw`]).
//!
//! Persistence itself is owned by the platform layer.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters
pub const MAX_PARAMS: usize = 64;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter is read-only (cannot be modified via `set`)
        const READ_ONLY = 0b00000010;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// Get type discriminant for serialization
    pub fn type_id(&self) -> u8 {
        match self {
            ParamValue::Bool(_) => 1,
            ParamValue::Int(_) => 2,
            ParamValue::Float(_) => 3,
        }
    }

    /// Interpret the value as an integer
    ///
    /// Floats are truncated toward zero, matching how GCS tools send
    /// enumerated parameters as `REAL32`.
    pub fn as_int(&self) -> i32 {
        match *self {
            ParamValue::Bool(b) => b as i32,
            ParamValue::Int(v) => v,
            ParamValue::Float(v) => v as i32,
        }
    }
}

/// Parameter metadata
#[derive(Debug, Clone, Copy)]
struct ParamMetadata {
    flags: ParamFlags,
    /// Compiled-in default value
    default: ParamValue,
    /// True once a value has been explicitly written or loaded from storage
    configured: bool,
}

/// Parameter store for configuration management
///
/// Stores parameters as key-value pairs with metadata (flags, default,
/// configured marker).
pub struct ParameterStore {
    /// Parameter values
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamValue, MAX_PARAMS>,
    /// Parameter metadata
    metadata: FnvIndexMap<String<PARAM_NAME_LEN>, ParamMetadata, MAX_PARAMS>,
    /// Dirty flag (needs persisting)
    dirty: bool,
}

fn make_key(name: &str) -> Option<String<PARAM_NAME_LEN>> {
    let mut key = String::<PARAM_NAME_LEN>::new();
    key.push_str(name).ok()?;
    Some(key)
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            metadata: FnvIndexMap::new(),
            dirty: false,
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = make_key(name)?;
        self.parameters.get(&key)
    }

    /// Set parameter value
    ///
    /// The value must have the same type as the registered default. Marks the
    /// parameter as configured and the store as dirty.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = make_key(name).ok_or(ParameterError::InvalidConfig)?;

        let meta = self
            .metadata
            .get_mut(&key)
            .ok_or(ParameterError::InvalidConfig)?;

        if meta.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }
        if meta.default.type_id() != value.type_id() {
            return Err(ParameterError::TypeMismatch);
        }

        meta.configured = true;
        self.parameters
            .insert(key, value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    /// Registration alone never marks a parameter as configured.
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = make_key(name).ok_or(ParameterError::InvalidConfig)?;

        if self.parameters.contains_key(&key) {
            // Already exists, don't overwrite
            return Ok(());
        }

        self.parameters
            .insert(key.clone(), default_value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.metadata
            .insert(
                key,
                ParamMetadata {
                    flags,
                    default: default_value,
                    configured: false,
                },
            )
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }

    /// Check whether a parameter holds an explicitly stored value
    ///
    /// Returns false for unknown parameters and for parameters still running
    /// on their compiled-in default.
    pub fn is_configured(&self, name: &str) -> bool {
        make_key(name)
            .and_then(|key| self.metadata.get(&key))
            .is_some_and(|meta| meta.configured)
    }

    /// Check if store has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Insert a parameter loaded from persisted storage
    ///
    /// Bypasses read-only and type checks since data comes from a trusted
    /// image. The value is marked configured; the store is not marked dirty.
    /// If the parameter was not registered yet, the loaded value also serves
    /// as its default until registration.
    pub fn insert_raw(
        &mut self,
        name: &str,
        value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = make_key(name).ok_or(ParameterError::InvalidConfig)?;
        let default = self
            .metadata
            .get(&key)
            .map(|meta| meta.default)
            .unwrap_or(value);

        self.parameters
            .insert(key.clone(), value)
            .map_err(|_| ParameterError::StoreFull)?;
        self.metadata
            .insert(
                key,
                ParamMetadata {
                    flags,
                    default,
                    configured: true,
                },
            )
            .map_err(|_| ParameterError::StoreFull)?;
        Ok(())
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
