use crate::Reflect;
use crate::ops::DynamicRecord;
use crate::project::{FieldEnumerator, ProjectError, ReflectFields, SourceFields};

// -----------------------------------------------------------------------------
// ProjectOptions

/// Options of a projection.
///
/// - `deep`: composite fields are projected into nested records instead of
///   being copied as they are.
/// - `ignore_null_composites`: composite fields holding no value are left
///   out of the output. Primitive fields are always kept.
///
/// The default is shallow and keeps null composites.
///
/// # Examples
///
/// ```
/// use expando_reflect::project::ProjectOptions;
///
/// let options = ProjectOptions::new().deep().ignore_null_composites();
///
/// assert!(options.is_deep());
/// assert!(options.ignores_null_composites());
/// assert_eq!(ProjectOptions::default(), ProjectOptions::new());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectOptions {
    deep: bool,
    ignore_null_composites: bool,
}

impl ProjectOptions {
    /// Shallow, null composites kept.
    #[inline]
    pub const fn new() -> Self {
        Self {
            deep: false,
            ignore_null_composites: false,
        }
    }

    /// Enables deep projection.
    #[inline]
    pub const fn deep(self) -> Self {
        self.with_deep(true)
    }

    /// Enables dropping of null composite fields.
    #[inline]
    pub const fn ignore_null_composites(self) -> Self {
        self.with_ignore_null_composites(true)
    }

    #[inline]
    pub const fn with_deep(mut self, deep: bool) -> Self {
        self.deep = deep;
        self
    }

    #[inline]
    pub const fn with_ignore_null_composites(mut self, ignore: bool) -> Self {
        self.ignore_null_composites = ignore;
        self
    }

    #[inline]
    pub const fn is_deep(&self) -> bool {
        self.deep
    }

    #[inline]
    pub const fn ignores_null_composites(&self) -> bool {
        self.ignore_null_composites
    }
}

// -----------------------------------------------------------------------------
// ObjectProjector

/// Converts reflected values into [`DynamicRecord`]s.
///
/// The projector holds no state besides its [`FieldEnumerator`], every call
/// builds an independent record tree. The source is never modified.
///
/// For each field reported by the enumerator:
///
/// | class     | value  | shallow        | deep              |
/// |-----------|--------|----------------|-------------------|
/// | primitive | any    | copied         | copied            |
/// | composite | `None` | `None`, or skipped when ignoring null composites | same |
/// | composite | `v`    | copy of `v`    | `project(v)`      |
///
/// A source without fields (a number, a string, an opaque value) becomes a
/// scalar record, see [`DynamicRecord::from_scalar`].
///
/// Recursion follows the nesting of composite fields. There is no cycle
/// detection, which a tree of owned Rust values cannot contain anyway.
///
/// # Examples
///
/// ```
/// use expando_reflect::derive::Reflect;
/// use expando_reflect::ops::DynamicRecord;
/// use expando_reflect::project::{ObjectProjector, ProjectOptions};
///
/// #[derive(Reflect, Clone)]
/// struct Inner {
///     id: u32,
/// }
///
/// #[derive(Reflect, Clone)]
/// struct Outer {
///     inner: Inner,
///     spare: Option<Inner>,
/// }
///
/// let projector = ObjectProjector::new();
/// let outer = Outer { inner: Inner { id: 7 }, spare: None };
///
/// let record = projector
///     .project(&outer, ProjectOptions::new().deep().ignore_null_composites())
///     .unwrap();
///
/// let inner = record.get_as::<DynamicRecord>("inner").unwrap();
/// assert_eq!(inner.get_as::<u32>("id"), Some(&7));
/// assert!(!record.contains_key("spare"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectProjector<E = ReflectFields> {
    enumerator: E,
}

impl ObjectProjector {
    /// Creates a projector backed by [`ReflectFields`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            enumerator: ReflectFields,
        }
    }
}

impl Default for ObjectProjector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FieldEnumerator> ObjectProjector<E> {
    /// Creates a projector that lists fields with `enumerator`.
    #[inline]
    pub const fn with_enumerator(enumerator: E) -> Self {
        Self { enumerator }
    }

    #[inline]
    pub const fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// Projects `source` into a new record.
    ///
    /// # Errors
    ///
    /// - [`ProjectError::NullSource`] if `source` is an empty `Option`.
    /// - [`ProjectError::Record`] if the enumerator reports a field name twice.
    pub fn project(
        &self,
        source: &dyn Reflect,
        options: ProjectOptions,
    ) -> Result<DynamicRecord, ProjectError> {
        log::debug!(
            "projecting `{}`, deep: {}, ignore null composites: {}",
            source.reflect_type_path(),
            options.deep,
            options.ignore_null_composites,
        );
        self.project_value(source, options)
    }

    fn project_value(
        &self,
        source: &dyn Reflect,
        options: ProjectOptions,
    ) -> Result<DynamicRecord, ProjectError> {
        let fields = match self.enumerator().enumerate(source)? {
            SourceFields::Scalar(value) => {
                return Ok(DynamicRecord::from_scalar_boxed(value.reflect_clone()));
            }
            SourceFields::Fields(fields) => fields,
        };

        let mut record = DynamicRecord::with_capacity(fields.len());
        for slot in fields {
            let value = match slot.value {
                value if slot.class.is_primitive() => value.map(|value| value.reflect_clone()),
                None => {
                    if options.ignore_null_composites {
                        log::trace!("skipping null composite field `{}`", slot.name);
                        continue;
                    }
                    None
                }
                Some(value) if options.deep => {
                    log::trace!("projecting composite field `{}`", slot.name);
                    Some(self.project_value(value, options)?.into_boxed_reflect())
                }
                Some(value) => Some(value.reflect_clone()),
            };
            record.add_boxed(slot.name, value)?;
        }
        Ok(record)
    }
}

// -----------------------------------------------------------------------------
// Shortcuts

/// Shallow projection of `source` with the default [`ObjectProjector`].
///
/// # Examples
///
/// ```
/// use expando_reflect::project::{ProjectError, project};
///
/// let record = project(&3.5_f64).unwrap();
/// assert_eq!(record.scalar().unwrap().downcast_ref::<f64>(), Some(&3.5));
///
/// assert_eq!(project(&None::<u8>).unwrap_err(), ProjectError::NullSource);
/// ```
#[inline]
pub fn project(source: &dyn Reflect) -> Result<DynamicRecord, ProjectError> {
    ObjectProjector::new().project(source, ProjectOptions::new())
}

/// Projection of `source` with the default [`ObjectProjector`] and `options`.
#[inline]
pub fn project_with(
    source: &dyn Reflect,
    options: ProjectOptions,
) -> Result<DynamicRecord, ProjectError> {
    ObjectProjector::new().project(source, options)
}

impl DynamicRecord {
    /// Builds a record from any reflected value.
    ///
    /// Primitive values give a scalar record, other values a shallow copy of
    /// their fields. The same as [`project`].
    #[inline]
    pub fn from_object(source: &dyn Reflect) -> Result<Self, ProjectError> {
        project(source)
    }
}
