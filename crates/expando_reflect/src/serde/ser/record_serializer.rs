use serde_core::ser::SerializeMap;
use serde_core::{Serialize, Serializer};

use super::ReflectSerializer;

use crate::ops::DynamicRecord;

/// A scalar record serializes as its value, other records as a map in
/// insertion order. A key holding no value serializes as none.
///
/// # Examples
///
/// ```
/// use expando_reflect::ops::DynamicRecord;
///
/// let mut record = DynamicRecord::new();
/// record.set("id", 3_u64).unwrap();
/// record.set_null("parent").unwrap();
///
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"id":3,"parent":null}"#);
/// ```
impl Serialize for DynamicRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(value) = self.scalar() {
            return ReflectSerializer::new(value).serialize(serializer);
        }

        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            state.serialize_entry(name, &value.map(ReflectSerializer::new))?;
        }
        state.end()
    }
}
