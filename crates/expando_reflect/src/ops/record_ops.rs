use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::{fmt, slice};

use crate::Reflect;
use crate::hash::HashMap;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{RecordInfo, TypeInfo, TypePath, Typed};
use crate::ops::{RecordError, ReflectRef};
use crate::reflection::impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Fields

/// Ordered field storage: names and values side by side, plus a name index.
#[derive(Default)]
struct Fields {
    names: Vec<Cow<'static, str>>,
    values: Vec<Option<Box<dyn Reflect>>>,
    indices: HashMap<Cow<'static, str>, usize>,
}

impl Fields {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    fn push(&mut self, name: Cow<'static, str>, value: Option<Box<dyn Reflect>>) {
        self.indices.insert(name.clone(), self.values.len());
        self.names.push(name);
        self.values.push(value);
    }

    fn set(&mut self, name: Cow<'static, str>, value: Option<Box<dyn Reflect>>) {
        match self.index_of(&name) {
            Some(index) => self.values[index] = value,
            None => self.push(name, value),
        }
    }

    fn add(
        &mut self,
        name: Cow<'static, str>,
        value: Option<Box<dyn Reflect>>,
    ) -> Result<(), RecordError> {
        if self.indices.contains_key(&*name) {
            return Err(RecordError::DuplicateKey(name.into_owned()));
        }
        self.push(name, value);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Option<Option<Box<dyn Reflect>>> {
        let index = self.indices.remove(name)?;
        self.names.remove(index);
        let value = self.values.remove(index);
        for position in self.indices.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        Some(value)
    }

    fn clear(&mut self) {
        self.names.clear();
        self.values.clear();
        self.indices.clear();
    }
}

enum Repr {
    Fields(Fields),
    Scalar(Box<dyn Reflect>),
}

// -----------------------------------------------------------------------------
// DynamicRecord

/// An ordered, string-keyed container of untyped values.
///
/// Each key holds an `Option<Box<dyn Reflect>>`: `None` is the absence
/// sentinel, so "key absent" and "key present with no value" stay
/// distinguishable through [`try_get`] and [`contains_key`], while [`get`]
/// collapses both to `None`.
///
/// Two access styles are provided:
///
/// - indexed: [`get`] never fails, a missing key yields `None`;
/// - attribute-style: [`get_attr`] fails with [`RecordError::MissingField`]
///   when the field does not exist, [`set_attr`] is the same as [`set`].
///
/// Keys keep their insertion order.
///
/// # Scalar records
///
/// A record built with [`from_scalar`] wraps a single primitive value instead
/// of named fields. It reads like an empty map and rejects every write with
/// [`RecordError::ScalarRecord`].
///
/// # Examples
///
/// ```
/// use expando_reflect::ops::{DynamicRecord, RecordError};
///
/// let mut record = DynamicRecord::new();
/// record.set("name", String::from("Ann")).unwrap();
/// record.set_null("address").unwrap();
///
/// assert_eq!(record.get_as::<String>("name").unwrap(), "Ann");
/// assert!(record.get("address").is_none());
/// assert!(record.contains_key("address"));
///
/// assert!(record.get("city").is_none());
/// assert_eq!(
///     record.get_attr("city").unwrap_err(),
///     RecordError::MissingField("city".into()),
/// );
/// ```
///
/// [`get`]: DynamicRecord::get
/// [`try_get`]: DynamicRecord::try_get
/// [`contains_key`]: DynamicRecord::contains_key
/// [`get_attr`]: DynamicRecord::get_attr
/// [`set_attr`]: DynamicRecord::set_attr
/// [`set`]: DynamicRecord::set
/// [`from_scalar`]: DynamicRecord::from_scalar
pub struct DynamicRecord {
    repr: Repr,
}

impl TypePath for DynamicRecord {
    #[inline]
    fn type_path() -> &'static str {
        "expando_reflect::ops::DynamicRecord"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicRecord"
    }
}

impl Typed for DynamicRecord {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Record(RecordInfo::new::<Self>()))
    }
}

impl DynamicRecord {
    /// Creates an empty record.
    #[inline]
    pub fn new() -> Self {
        Self {
            repr: Repr::Fields(Fields::default()),
        }
    }

    /// Creates an empty record with space for at least `capacity` fields.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            repr: Repr::Fields(Fields::with_capacity(capacity)),
        }
    }

    /// Creates a scalar record wrapping `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use expando_reflect::ops::{DynamicRecord, RecordError};
    ///
    /// let mut record = DynamicRecord::from_scalar(42_u8);
    ///
    /// assert!(record.is_scalar());
    /// assert!(record.is_empty());
    /// assert_eq!(record.scalar().unwrap().downcast_ref::<u8>(), Some(&42));
    /// assert_eq!(record.set("x", 1_u8), Err(RecordError::ScalarRecord));
    /// ```
    #[inline]
    pub fn from_scalar<T: Reflect>(value: T) -> Self {
        Self::from_scalar_boxed(Box::new(value))
    }

    /// Creates a scalar record wrapping a boxed value.
    #[inline]
    pub fn from_scalar_boxed(value: Box<dyn Reflect>) -> Self {
        Self {
            repr: Repr::Scalar(value),
        }
    }

    /// Returns `true` if this record wraps a single scalar value.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self.repr, Repr::Scalar(_))
    }

    /// Returns the wrapped value of a scalar record.
    #[inline]
    pub fn scalar(&self) -> Option<&dyn Reflect> {
        match &self.repr {
            Repr::Scalar(value) => Some(&**value),
            Repr::Fields(_) => None,
        }
    }

    #[inline]
    fn fields(&self) -> Option<&Fields> {
        match &self.repr {
            Repr::Fields(fields) => Some(fields),
            Repr::Scalar(_) => None,
        }
    }

    #[inline]
    fn fields_mut(&mut self) -> Result<&mut Fields, RecordError> {
        match &mut self.repr {
            Repr::Fields(fields) => Ok(fields),
            Repr::Scalar(_) => Err(RecordError::ScalarRecord),
        }
    }

    /// Returns the value stored under `key`.
    ///
    /// A missing key and a key holding no value both return `None`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&dyn Reflect> {
        self.try_get(key).flatten()
    }

    /// Returns `None` if `key` is absent, `Some(None)` if it holds no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use expando_reflect::ops::DynamicRecord;
    ///
    /// let mut record = DynamicRecord::new();
    /// record.set_null("a").unwrap();
    ///
    /// assert!(record.try_get("a").is_some_and(|value| value.is_none()));
    /// assert!(record.try_get("b").is_none());
    /// ```
    pub fn try_get(&self, key: &str) -> Option<Option<&dyn Reflect>> {
        let fields = self.fields()?;
        let index = fields.index_of(key)?;
        Some(fields.values[index].as_deref())
    }

    /// Returns the value stored under `key`, downcast to `T`.
    #[inline]
    pub fn get_as<T: Reflect>(&self, key: &str) -> Option<&T> {
        self.get(key).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        let Repr::Fields(fields) = &mut self.repr else {
            return None;
        };
        let index = fields.index_of(key)?;
        match &mut fields.values[index] {
            Some(value) => Some(&mut **value),
            None => None,
        }
    }

    /// Inserts or overwrites the value under `key`.
    #[inline]
    pub fn set<T: Reflect>(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: T,
    ) -> Result<(), RecordError> {
        self.set_boxed(key, Some(Box::new(value)))
    }

    /// Inserts or overwrites the slot under `key`, `None` stores no value.
    pub fn set_boxed(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: Option<Box<dyn Reflect>>,
    ) -> Result<(), RecordError> {
        self.fields_mut()?.set(key.into(), value);
        Ok(())
    }

    /// Stores the absence sentinel under `key`.
    #[inline]
    pub fn set_null(&mut self, key: impl Into<Cow<'static, str>>) -> Result<(), RecordError> {
        self.set_boxed(key, None)
    }

    /// Inserts a value under a new `key`.
    ///
    /// Fails with [`RecordError::DuplicateKey`] if `key` is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use expando_reflect::ops::{DynamicRecord, RecordError};
    ///
    /// let mut record = DynamicRecord::new();
    /// record.add("k", 1_i32).unwrap();
    ///
    /// assert_eq!(record.add("k", 2_i32), Err(RecordError::DuplicateKey("k".into())));
    /// assert_eq!(record.get_as::<i32>("k"), Some(&1));
    /// ```
    #[inline]
    pub fn add<T: Reflect>(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: T,
    ) -> Result<(), RecordError> {
        self.add_boxed(key, Some(Box::new(value)))
    }

    /// Inserts a slot under a new `key`, see [`add`](DynamicRecord::add).
    pub fn add_boxed(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: Option<Box<dyn Reflect>>,
    ) -> Result<(), RecordError> {
        self.fields_mut()?.add(key.into(), value)
    }

    /// Removes `key`, returns `true` if it was present.
    ///
    /// The remaining keys keep their relative order.
    pub fn remove(&mut self, key: &str) -> bool {
        match &mut self.repr {
            Repr::Fields(fields) => fields.remove(key).is_some(),
            Repr::Scalar(_) => false,
        }
    }

    /// Returns `true` if `key` is present, even when it holds no value.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields()
            .is_some_and(|fields| fields.index_of(key).is_some())
    }

    /// Returns `true` if `key` is present and its value equals `value`.
    ///
    /// Values are compared with [`Reflect::reflect_partial_eq`]; a `None`
    /// value matches a key holding no value.
    pub fn contains_entry(&self, key: &str, value: Option<&dyn Reflect>) -> bool {
        match (self.try_get(key), value) {
            (Some(Some(stored)), Some(value)) => stored.reflect_partial_eq(value) == Some(true),
            (Some(None), None) => true,
            _ => false,
        }
    }

    /// Removes every field. A scalar record is left unchanged.
    pub fn clear(&mut self) {
        if let Repr::Fields(fields) = &mut self.repr {
            fields.clear();
        }
    }

    /// Returns the number of fields, `0` for a scalar record.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields().map_or(0, Fields::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the keys, in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.iter().map(|(name, _)| name)
    }

    /// Returns an iterator over the values, in insertion order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = Option<&dyn Reflect>> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over `(key, value)` pairs, in insertion order.
    #[inline]
    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            names: self.names().iter(),
            values: self.slots().iter(),
        }
    }

    /// Like [`iter`](Self::iter) but yields the stored key, cheap to clone.
    pub(crate) fn entries(
        &self,
    ) -> impl Iterator<Item = (&Cow<'static, str>, Option<&dyn Reflect>)> + '_ {
        self.names().iter().zip(self.values())
    }

    #[inline]
    fn names(&self) -> &[Cow<'static, str>] {
        match self.fields() {
            Some(fields) => &fields.names,
            None => &[],
        }
    }

    #[inline]
    fn slots(&self) -> &[Option<Box<dyn Reflect>>] {
        match self.fields() {
            Some(fields) => &fields.values,
            None => &[],
        }
    }

    /// Attribute-style read.
    ///
    /// Unlike [`get`](Self::get), fails with [`RecordError::MissingField`]
    /// when the field does not exist. A field holding no value reads as `Ok(None)`.
    pub fn get_attr(&self, name: &str) -> Result<Option<&dyn Reflect>, RecordError> {
        self.try_get(name)
            .ok_or_else(|| RecordError::MissingField(String::from(name)))
    }

    /// Attribute-style write, the same as [`set`](Self::set).
    #[inline]
    pub fn set_attr<T: Reflect>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: T,
    ) -> Result<(), RecordError> {
        self.set(name, value)
    }

    /// Sets every `(key, slot)` pair in order, overwriting existing keys.
    pub fn try_extend<N, I>(&mut self, iter: I) -> Result<(), RecordError>
    where
        N: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (N, Option<Box<dyn Reflect>>)>,
    {
        let fields = self.fields_mut()?;
        for (name, value) in iter {
            fields.set(name.into(), value);
        }
        Ok(())
    }
}

impl Default for DynamicRecord {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Reflect for DynamicRecord {
    impl_reflect_cast_fn!(Record);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        record_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Compares two records as maps, key order is not significant.
fn record_partial_eq(x: &DynamicRecord, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Record(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (&x.repr, &y.repr) {
        (Repr::Scalar(x), Repr::Scalar(y)) => x.reflect_partial_eq(&**y),
        (Repr::Fields(x), Repr::Fields(y)) => {
            if x.len() != y.len() {
                return Some(false);
            }
            for (name, x_value) in x.names.iter().zip(&x.values) {
                let Some(index) = y.index_of(name) else {
                    return Some(false);
                };
                match (x_value, &y.values[index]) {
                    (Some(x_value), Some(y_value)) => {
                        let result = x_value.reflect_partial_eq(&**y_value);
                        if result != Some(true) {
                            return result;
                        }
                    }
                    (None, None) => {}
                    _ => return Some(false),
                }
            }
            Some(true)
        }
        _ => Some(false),
    }
}

impl Clone for DynamicRecord {
    fn clone(&self) -> Self {
        let repr = match &self.repr {
            Repr::Scalar(value) => Repr::Scalar(value.reflect_clone()),
            Repr::Fields(fields) => Repr::Fields(Fields {
                names: fields.names.clone(),
                values: fields
                    .values
                    .iter()
                    .map(|value| value.as_deref().map(|value| value.reflect_clone()))
                    .collect(),
                indices: fields.indices.clone(),
            }),
        };
        Self { repr }
    }
}

impl PartialEq for DynamicRecord {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        record_partial_eq(self, other) == Some(true)
    }
}

impl fmt::Debug for DynamicRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Scalar(value) => f.debug_tuple("DynamicRecord").field(value).finish(),
            Repr::Fields(fields) => {
                let mut debug = f.debug_struct("DynamicRecord");
                for (name, value) in fields.names.iter().zip(&fields.values) {
                    match value {
                        Some(value) => debug.field(name, value),
                        None => debug.field(name, &format_args!("None")),
                    };
                }
                debug.finish()
            }
        }
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Option<Box<dyn Reflect>>)> for DynamicRecord {
    fn from_iter<I: IntoIterator<Item = (N, Option<Box<dyn Reflect>>)>>(iter: I) -> Self {
        let mut fields = Fields::default();
        for (name, value) in iter {
            fields.set(name.into(), value);
        }
        Self {
            repr: Repr::Fields(fields),
        }
    }
}

impl<'a> IntoIterator for &'a DynamicRecord {
    type Item = (&'a str, Option<&'a dyn Reflect>);
    type IntoIter = RecordIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Record Iterator

/// An iterator over the `(key, value)` pairs of a [`DynamicRecord`].
pub struct RecordIter<'a> {
    names: slice::Iter<'a, Cow<'static, str>>,
    values: slice::Iter<'a, Option<Box<dyn Reflect>>>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = (&'a str, Option<&'a dyn Reflect>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        let value = self.values.next()?;
        Some((name.as_ref(), value.as_deref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for RecordIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use crate::Reflect;
    use crate::info::{FieldClass, ReflectKind, Typed};
    use crate::ops::{DynamicRecord, RecordError, ReflectRef};

    fn sample() -> DynamicRecord {
        let mut record = DynamicRecord::new();
        record.set("name", String::from("Ann")).unwrap();
        record.set("age", 30_u32).unwrap();
        record.set_null("address").unwrap();
        record
    }

    #[test]
    fn strict_add_and_overwriting_set() {
        let mut record = DynamicRecord::new();
        record.add("k", 1_i32).unwrap();
        assert_eq!(
            record.add("k", 2_i32),
            Err(RecordError::DuplicateKey(String::from("k")))
        );

        record.set("k", 1_i32).unwrap();
        record.set("k", 2_i32).unwrap();
        assert_eq!(record.get_as::<i32>("k"), Some(&2));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn indexed_and_attribute_reads() {
        let record = sample();

        assert!(record.get("x").is_none());
        assert_eq!(
            record.get_attr("x").unwrap_err(),
            RecordError::MissingField(String::from("x"))
        );

        assert!(record.get("address").is_none());
        assert!(record.get_attr("address").unwrap().is_none());

        let name = record.get_attr("name").unwrap().unwrap();
        assert_eq!(name.downcast_ref::<String>().unwrap(), "Ann");
    }

    #[test]
    fn set_attr_matches_set() {
        let mut record = DynamicRecord::new();
        record.set_attr("city", "X").unwrap();
        record.set_attr("city", "Y").unwrap();
        assert_eq!(record.get_as::<&str>("city"), Some(&"Y"));
    }

    #[test]
    fn absent_and_null_stay_distinct() {
        let record = sample();

        assert!(record.contains_key("address"));
        assert!(!record.contains_key("phone"));
        assert!(matches!(record.try_get("address"), Some(None)));
        assert!(record.try_get("phone").is_none());
    }

    #[test]
    fn remove_keeps_order() {
        let mut record = sample();
        assert!(record.remove("name"));
        assert!(!record.remove("name"));

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["age", "address"]);
        assert_eq!(record.get_as::<u32>("age"), Some(&30));

        record.set("name", String::from("Bob")).unwrap();
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["age", "address", "name"]
        );
        assert_eq!(record.get_as::<String>("name").unwrap(), "Bob");
    }

    #[test]
    fn entry_membership() {
        let record = sample();

        assert!(record.contains_entry("age", Some(&30_u32)));
        assert!(!record.contains_entry("age", Some(&31_u32)));
        assert!(!record.contains_entry("age", Some(&30_i64)));
        assert!(record.contains_entry("address", None));
        assert!(!record.contains_entry("missing", None));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let record = sample();

        let pairs: Vec<_> = record
            .iter()
            .map(|(name, value)| (name, value.is_some()))
            .collect();
        assert_eq!(
            pairs,
            vec![("name", true), ("age", true), ("address", false)]
        );
        assert_eq!(record.values().len(), 3);
        assert_eq!((&record).into_iter().count(), 3);
    }

    #[test]
    fn clear_and_len() {
        let mut record = sample();
        assert_eq!(record.len(), 3);
        record.clear();
        assert!(record.is_empty());
        assert!(record.get("name").is_none());
    }

    #[test]
    fn scalar_record_is_an_immutable_leaf() {
        let mut record = DynamicRecord::from_scalar(String::from("leaf"));

        assert!(record.is_scalar());
        assert_eq!(record.len(), 0);
        assert!(record.get("leaf").is_none());
        assert!(record.get_attr("leaf").is_err());
        assert!(!record.remove("leaf"));

        assert_eq!(record.set("a", 1_u8), Err(RecordError::ScalarRecord));
        assert_eq!(record.add("a", 1_u8), Err(RecordError::ScalarRecord));
        assert_eq!(record.set_null("a"), Err(RecordError::ScalarRecord));
        assert_eq!(record.set_attr("a", 1_u8), Err(RecordError::ScalarRecord));

        record.clear();
        let scalar = record.scalar().unwrap();
        assert_eq!(scalar.downcast_ref::<String>().unwrap(), "leaf");
    }

    #[test]
    fn clone_is_deep_and_independent() {
        let mut inner = DynamicRecord::new();
        inner.set("city", String::from("X")).unwrap();
        let mut outer = DynamicRecord::new();
        outer.set("address", inner).unwrap();

        let mut copy = outer.clone();
        assert_eq!(copy, outer);

        copy.set("address", 0_u8).unwrap();
        assert_ne!(copy, outer);
        assert!(outer.get_as::<DynamicRecord>("address").is_some());
    }

    #[test]
    fn equality_ignores_key_order() {
        let a: DynamicRecord = [
            ("x", Some(Box::new(1_i32) as Box<dyn Reflect>)),
            ("y", None),
        ]
        .into_iter()
        .collect();
        let b: DynamicRecord = [
            ("y", None),
            ("x", Some(Box::new(1_i32) as Box<dyn Reflect>)),
        ]
        .into_iter()
        .collect();

        assert_eq!(a, b);
        assert_ne!(a, DynamicRecord::from_scalar(1_i32));
        assert_eq!(
            DynamicRecord::from_scalar(1_i32),
            DynamicRecord::from_scalar(1_i32)
        );
    }

    #[test]
    fn collect_keeps_last_duplicate() {
        let record: DynamicRecord = [
            ("k", Some(Box::new(1_i32) as Box<dyn Reflect>)),
            ("other", None),
            ("k", Some(Box::new(2_i32) as Box<dyn Reflect>)),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["k", "other"]);
        assert_eq!(record.get_as::<i32>("k"), Some(&2));
    }

    #[test]
    fn try_extend_overwrites() {
        let mut record = sample();
        record
            .try_extend([("age", Some(Box::new(31_u32) as Box<dyn Reflect>))])
            .unwrap();
        assert_eq!(record.get_as::<u32>("age"), Some(&31));

        let mut scalar = DynamicRecord::from_scalar(true);
        assert_eq!(
            scalar.try_extend([("a", None)]),
            Err(RecordError::ScalarRecord)
        );
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut record = sample();
        *record.get_mut("age").unwrap().downcast_mut::<u32>().unwrap() += 1;
        assert_eq!(record.get_as::<u32>("age"), Some(&31));
        assert!(record.get_mut("address").is_none());
    }

    #[test]
    fn record_is_reflected_as_composite() {
        let record = sample();

        assert_eq!(record.reflect_kind(), ReflectKind::Record);
        assert!(matches!(record.reflect_ref(), ReflectRef::Record(_)));
        assert_eq!(DynamicRecord::type_info().class(), FieldClass::Composite);

        let boxed = record.reflect_clone();
        assert_eq!(boxed.reflect_partial_eq(&record), Some(true));
    }

    #[test]
    fn debug_output() {
        let record = sample();
        assert_eq!(
            format!("{record:?}"),
            "DynamicRecord { name: \"Ann\", age: 30, address: None }"
        );
        assert_eq!(
            format!("{:?}", DynamicRecord::from_scalar(5_u8)),
            "DynamicRecord(5)"
        );
    }
}
