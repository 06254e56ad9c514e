//! Named-property access on structured cell values.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Cell values that carry named properties.
///
/// [`Grid::apply_property`](crate::Grid::apply_property) and
/// [`EachCell::apply_property`](crate::EachCell::apply_property) go through
/// this trait. A property that was never set reads as `Prop::default()`.
pub trait Properties {
    /// Type of a single property value.
    type Prop: Default;

    /// Mutable slot for property `name`, inserting the default when absent.
    ///
    /// Returns `None` when the value cannot hold properties at all.
    fn property_mut(&mut self, name: &str) -> Option<&mut Self::Prop>;

    /// Replace property `name` with `f(old)`.
    ///
    /// Returns `false` when the value cannot hold properties.
    fn apply_property(&mut self, name: &str, f: impl FnOnce(Self::Prop) -> Self::Prop) -> bool {
        match self.property_mut(name) {
            Some(slot) => {
                let old = std::mem::take(slot);
                *slot = f(old);
                true
            }
            None => false,
        }
    }
}

impl<V: Default> Properties for BTreeMap<String, V> {
    type Prop = V;

    fn property_mut(&mut self, name: &str) -> Option<&mut V> {
        Some(self.entry(name.to_string()).or_default())
    }
}

impl<V: Default, S: BuildHasher> Properties for HashMap<String, V, S> {
    type Prop = V;

    fn property_mut(&mut self, name: &str) -> Option<&mut V> {
        Some(self.entry(name.to_string()).or_default())
    }
}

/// JSON objects expose their members; every other JSON value is a scalar.
#[cfg(feature = "json")]
impl Properties for serde_json::Value {
    type Prop = serde_json::Value;

    fn property_mut(&mut self, name: &str) -> Option<&mut serde_json::Value> {
        match self {
            serde_json::Value::Object(map) => {
                Some(map.entry(name).or_insert(serde_json::Value::Null))
            }
            _ => None,
        }
    }
}
