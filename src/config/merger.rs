//! Layering of settings files.
//!
//! `bundle-config.local.yml` is laid over `bundle-config.yml` before the
//! result is parsed into [`Settings`](super::Settings).
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences and scalars in the overlay replace the base
//! - `null` in the overlay deletes the key from the base
//! - An empty file (`null` document) changes nothing

use serde_yaml::{Mapping, Value};

/// Lay `overlay` over `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();

            for (key, value) in overlay_map {
                match (value.is_null(), base_map.get(key)) {
                    (true, _) => {
                        merged.remove(key);
                    }
                    (false, Some(existing)) => {
                        merged.insert(key.clone(), deep_merge(existing, value));
                    }
                    (false, None) => {
                        merged.insert(key.clone(), value.clone());
                    }
                }
            }

            Value::Mapping(merged)
        }
        (base, Value::Null) => base.clone(),
        (_, overlay) => overlay.clone(),
    }
}

/// Merge settings layers in order; later layers win.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}
