//! `extend` and `defaults` over dynamically-typed JSON objects
//!
//! Same traversal as the typed helpers. Since a `Value` may hold anything,
//! every argument is checked up front and nothing is written unless all of
//! them are objects.

use serde_json::{Map, Value};
use tracing::trace;
use underbar_core::{UnderbarError, UnderbarResult};

use crate::mapping::MergeMode;

/// Copy every key of every source object into `target`, later sources winning.
pub fn extend_json<'t>(target: &'t mut Value, sources: &[&Value]) -> UnderbarResult<&'t mut Value> {
    merge_json(target, sources, MergeMode::Overwrite)
}

/// Fill keys missing from `target` from the source objects, first source first.
pub fn defaults_json<'t>(target: &'t mut Value, sources: &[&Value]) -> UnderbarResult<&'t mut Value> {
    merge_json(target, sources, MergeMode::FillMissing)
}

fn merge_json<'t>(
    target: &'t mut Value,
    sources: &[&Value],
    mode: MergeMode,
) -> UnderbarResult<&'t mut Value> {
    let mut objects = Vec::with_capacity(sources.len());
    for (index, source) in sources.iter().enumerate() {
        objects.push(as_mapping(source, index + 1)?);
    }

    let found = kind_of(target);
    let map = target
        .as_object_mut()
        .ok_or(UnderbarError::NotAMapping { position: 0, found })?;

    for object in objects {
        for (key, value) in object {
            if mode.should_assign(map.contains_key(key)) {
                map.insert(key.clone(), value.clone());
            }
        }
    }
    trace!(?mode, sources = sources.len(), keys = map.len(), "merged json objects");

    Ok(target)
}

fn as_mapping(value: &Value, position: usize) -> UnderbarResult<&Map<String, Value>> {
    value.as_object().ok_or(UnderbarError::NotAMapping {
        position,
        found: kind_of(value),
    })
}

/// Human-readable name of a JSON value's type
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
