use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

/// Generated JSON tree. Objects keep first-insertion key order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    pub(crate) fn as_object_mut(&mut self) -> Option<&mut Vec<(String, Value)>> {
        match self {
            Value::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    pub(crate) fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Insert or replace under `key`. Replacing keeps the key's original
    /// position. No-op when `self` is not an object.
    pub(crate) fn set_key(&mut self, key: &str, value: Value) {
        if let Some(pairs) = self.as_object_mut() {
            match pairs.iter_mut().find(|(k, _)| k == key) {
                Some(slot) => slot.1 = value,
                None => pairs.push((key.to_string(), value)),
            }
        }
    }

    pub(crate) fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut()?
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Assign at `index`, padding skipped slots with null. No-op when `self`
    /// is not an array.
    pub(crate) fn set_index(&mut self, index: usize, value: Value) {
        if let Some(items) = self.as_array_mut() {
            while items.len() <= index {
                items.push(Value::Null);
            }
            items[index] = value;
        }
    }

    /// Convert into a `serde_json::Value` for interop. Non-finite numbers
    /// become null, matching JSON text output.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => match n {
                Number::I64(i) => serde_json::Value::Number(i.into()),
                Number::U64(u) => serde_json::Value::Number(u.into()),
                Number::F64(f) => serde_json::Number::from_f64(f)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            },
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Value::into_json).collect())
            }
            Value::Object(pairs) => {
                let mut m = serde_json::Map::new();
                for (k, v) in pairs {
                    m.insert(k, v.into_json());
                }
                serde_json::Value::Object(m)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::I64(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::U64(u)) => serializer.serialize_u64(*u),
            Value::Number(Number::F64(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (k, v) in pairs.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
