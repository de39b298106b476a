//! Conversion of reflected values into [`DynamicRecord`]s.
//!
//! - [`ObjectProjector`]: the projection itself, configured per call with
//!   [`ProjectOptions`].
//! - [`FieldEnumerator`]: how the projector lists the fields of a source.
//!   [`ReflectFields`] reads them through [`Reflect`].
//! - [`project`], [`project_with`]: shortcuts using the default projector.
//!
//! Fields are classified by their *declared* type ([`FieldClass`]): numbers,
//! strings, `bool`, `char`, enums and other opaque values are primitive,
//! structs and records are composite. `Option<T>` has the class of `T`.
//!
//! [`DynamicRecord`]: crate::ops::DynamicRecord
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod enumerator;
mod error;
mod projector;

// -----------------------------------------------------------------------------
// Exports

pub use crate::info::FieldClass;

pub use enumerator::{FieldEnumerator, FieldSlot, ReflectFields, SourceFields};
pub use error::ProjectError;
pub use projector::{ObjectProjector, ProjectOptions, project, project_with};

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use super::*;
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::Typed;
    use crate::ops::{DynamicRecord, RecordError};

    #[derive(Reflect, Clone, Debug, PartialEq)]
    struct Address {
        city: String,
    }

    #[derive(Reflect, Clone)]
    struct Person {
        name: String,
        age: u32,
        address: Option<Address>,
    }

    #[derive(Reflect, Clone)]
    struct Team {
        lead: Person,
        backup: Option<Person>,
    }

    #[derive(Reflect, Clone, Copy, Debug, PartialEq)]
    enum Unit {
        Celsius,
        Kelvin,
    }

    #[derive(Reflect, Clone)]
    struct Reading {
        label: &'static str,
        value: Option<f64>,
        unit: Unit,
        valid: bool,
    }

    #[derive(Reflect, Clone)]
    struct Token {
        r#type: u8,
        r#ref: Option<Address>,
    }

    fn ann(address: Option<Address>) -> Person {
        Person {
            name: String::from("Ann"),
            age: 30,
            address,
        }
    }

    fn city(name: &str) -> Address {
        Address {
            city: String::from(name),
        }
    }

    fn both_modes() -> [ProjectOptions; 2] {
        [ProjectOptions::new(), ProjectOptions::new().deep()]
    }

    #[test]
    fn primitive_fields_round_trip() {
        let reading = Reading {
            label: "t1",
            value: Some(21.5),
            unit: Unit::Kelvin,
            valid: true,
        };

        for options in both_modes() {
            let record = project_with(&reading, options).unwrap();

            assert_eq!(record.len(), 4);
            assert_eq!(record.get_as::<&str>("label"), Some(&"t1"));
            assert_eq!(record.get_as::<f64>("value"), Some(&21.5));
            assert_eq!(record.get_as::<Unit>("unit"), Some(&Unit::Kelvin));
            assert_eq!(record.get_as::<bool>("valid"), Some(&true));
        }
    }

    #[test]
    fn null_composite_filter_shallow() {
        let person = ann(None);

        let kept = project_with(&person, ProjectOptions::new()).unwrap();
        assert!(kept.contains_key("address"));
        assert!(kept.get("address").is_none());
        assert!(matches!(kept.try_get("address"), Some(None)));

        let dropped = project_with(&person, ProjectOptions::new().ignore_null_composites()).unwrap();
        assert!(!dropped.contains_key("address"));
        assert_eq!(dropped.keys().collect::<Vec<_>>(), ["name", "age"]);
    }

    #[test]
    fn null_composite_filter_deep() {
        let person = ann(None);

        let kept = project_with(&person, ProjectOptions::new().deep()).unwrap();
        assert!(matches!(kept.try_get("address"), Some(None)));

        let options = ProjectOptions::new().deep().ignore_null_composites();
        let dropped = project_with(&person, options).unwrap();
        assert!(!dropped.contains_key("address"));
        assert_eq!(dropped.get_as::<String>("name").map(String::as_str), Some("Ann"));
        assert_eq!(dropped.get_as::<u32>("age"), Some(&30));
    }

    #[test]
    fn null_primitive_is_never_skipped() {
        let reading = Reading {
            label: "t2",
            value: None,
            unit: Unit::Celsius,
            valid: false,
        };

        for options in both_modes() {
            let record = project_with(&reading, options.ignore_null_composites()).unwrap();
            assert!(matches!(record.try_get("value"), Some(None)));
        }
    }

    #[test]
    fn deep_projection_recurses() {
        let team = Team {
            lead: ann(Some(city("X"))),
            backup: None,
        };

        let record = project_with(&team, ProjectOptions::new().deep()).unwrap();

        let lead = record.get_as::<DynamicRecord>("lead").unwrap();
        assert_eq!(lead.get_as::<u32>("age"), Some(&30));

        let address = lead.get_as::<DynamicRecord>("address").unwrap();
        assert_eq!(address.get_as::<String>("city").map(String::as_str), Some("X"));
        assert!(!address.is_scalar());

        assert!(matches!(record.try_get("backup"), Some(None)));
    }

    #[test]
    fn shallow_projection_copies_composites() {
        let person = ann(Some(city("X")));

        let record = project(&person).unwrap();
        let address = record.get("address").unwrap();

        assert!(address.is::<Address>());
        assert!(!address.is::<DynamicRecord>());
        assert_eq!(address.downcast_ref::<Address>(), Some(&city("X")));
    }

    #[test]
    fn person_scenario() {
        let shallow = project(&ann(Some(city("X")))).unwrap();
        assert_eq!(
            format!("{shallow:?}"),
            "DynamicRecord { name: \"Ann\", age: 30, address: Address { city: \"X\" } }",
        );

        let deep = project_with(&ann(Some(city("X"))), ProjectOptions::new().deep()).unwrap();
        assert_eq!(
            format!("{deep:?}"),
            "DynamicRecord { name: \"Ann\", age: 30, address: DynamicRecord { city: \"X\" } }",
        );

        let options = ProjectOptions::new().deep().ignore_null_composites();
        let filtered = project_with(&ann(None), options).unwrap();
        assert_eq!(format!("{filtered:?}"), "DynamicRecord { name: \"Ann\", age: 30 }");
    }

    #[test]
    fn attribute_and_indexed_reads_differ() {
        let record = project(&ann(None)).unwrap();

        assert!(record.get("x").is_none());
        assert_eq!(record.get_attr("x").unwrap_err(), RecordError::MissingField("x".into()));
        assert!(record.get_attr("address").unwrap().is_none());
        assert_eq!(
            record.get_attr("age").unwrap().and_then(<dyn Reflect>::downcast_ref::<u32>),
            Some(&30),
        );
    }

    #[test]
    fn null_source_is_rejected() {
        assert_eq!(project(&None::<Address>).unwrap_err(), ProjectError::NullSource);
        assert_eq!(
            project_with(&None::<Person>, ProjectOptions::new().deep()).unwrap_err(),
            ProjectError::NullSource,
        );
    }

    #[test]
    fn present_option_source_projects_its_value() {
        let record = project(&Some(city("Y"))).unwrap();
        assert_eq!(record.get_as::<String>("city").map(String::as_str), Some("Y"));
    }

    #[test]
    fn primitive_source_gives_scalar_record() {
        let record = project(&String::from("ann")).unwrap();

        assert!(record.is_scalar());
        assert!(record.is_empty());
        assert_eq!(record.scalar().unwrap().downcast_ref::<String>().unwrap(), "ann");

        let record = DynamicRecord::from_object(&Unit::Celsius).unwrap();
        assert_eq!(record.scalar().unwrap().downcast_ref::<Unit>(), Some(&Unit::Celsius));

        let record = DynamicRecord::from_object(&city("Z")).unwrap();
        assert!(!record.is_scalar());
        assert!(record.contains_key("city"));
    }

    #[test]
    fn record_source() {
        let mut inner = DynamicRecord::new();
        inner.set("k", 1_u8).unwrap();

        let mut source = DynamicRecord::new();
        source.set("inner", inner.clone()).unwrap();
        source.set("person", ann(None)).unwrap();
        source.set_null("missing").unwrap();
        source.set("count", 2_i64).unwrap();

        let shallow = project(&source).unwrap();
        assert_eq!(shallow, source);

        let options = ProjectOptions::new().deep().ignore_null_composites();
        let deep = project_with(&source, options).unwrap();

        assert_eq!(deep.keys().collect::<Vec<_>>(), ["inner", "person", "count"]);
        assert_eq!(deep.get_as::<DynamicRecord>("inner"), Some(&inner));
        let person = deep.get_as::<DynamicRecord>("person").unwrap();
        assert!(!person.contains_key("address"));
    }

    #[test]
    fn raw_identifiers_use_plain_names() {
        let token = Token {
            r#type: 1,
            r#ref: Some(city("X")),
        };

        let record = project_with(&token, ProjectOptions::new().deep()).unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), ["type", "ref"]);
        assert_eq!(record.get_as::<u8>("type"), Some(&1));
        assert!(!record.contains_key("r#type"));

        let info = Token::type_info().as_struct().unwrap();
        assert_eq!(info.index_of("type"), Some(0));
        assert!(info.field("type").unwrap().type_info().is_primitive());
        assert!(!info.field("ref").unwrap().class().is_primitive());
        assert_eq!(info.field("ref").map(|field| field.class()), Some(FieldClass::Composite));

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"type":1,"ref":{"city":"X"}}"#,
        );
        assert_eq!(
            serde_json::to_string(&crate::serde::ReflectSerializer::new(&token)).unwrap(),
            r#"{"type":1,"ref":{"city":"X"}}"#,
        );
    }

    #[test]
    fn field_order_is_stable() {
        let person = ann(Some(city("X")));

        let first: Vec<String> = project(&person).unwrap().keys().map(String::from).collect();
        let second: Vec<String> = project(&person).unwrap().keys().map(String::from).collect();

        assert_eq!(first, ["name", "age", "address"]);
        assert_eq!(first, second);
    }

    #[test]
    fn projection_is_independent_of_source() {
        let mut person = ann(Some(city("X")));
        let record = project(&person).unwrap();

        person.address = Some(city("Y"));

        let copied = record.get_as::<Address>("address").unwrap();
        assert_eq!(copied.city, "X");
    }

    // -------------------------------------------------------------------------
    // Synthetic enumerators

    /// Reports fixed `(name, class, has value)` slots, values point at the source.
    struct Slots(Vec<(&'static str, FieldClass, bool)>);

    impl FieldEnumerator for Slots {
        fn enumerate<'a>(
            &self,
            source: &'a dyn Reflect,
        ) -> Result<SourceFields<'a>, ProjectError> {
            let fields = self
                .0
                .iter()
                .map(|&(name, class, present)| FieldSlot {
                    name: Cow::Borrowed(name),
                    class,
                    value: present.then_some(source),
                })
                .collect();
            Ok(SourceFields::Fields(fields))
        }
    }

    #[test]
    fn synthetic_fields_follow_class_rules() {
        let projector = ObjectProjector::with_enumerator(Slots(vec![
            ("p", FieldClass::Primitive, true),
            ("p_null", FieldClass::Primitive, false),
            ("c_null", FieldClass::Composite, false),
            ("c", FieldClass::Composite, true),
        ]));

        assert_eq!(projector.enumerator().0.len(), 4);

        let options = ProjectOptions::new().ignore_null_composites();
        let record = projector.project(&9_u16, options).unwrap();

        assert_eq!(record.keys().collect::<Vec<_>>(), ["p", "p_null", "c"]);
        assert_eq!(record.get_as::<u16>("p"), Some(&9));
        assert_eq!(record.get_as::<u16>("c"), Some(&9));
        assert!(matches!(record.try_get("p_null"), Some(None)));

        let record = projector.project(&9_u16, ProjectOptions::new()).unwrap();
        assert!(matches!(record.try_get("c_null"), Some(None)));
    }

    #[test]
    fn duplicate_field_names_fail() {
        let projector = ObjectProjector::with_enumerator(Slots(vec![
            ("a", FieldClass::Primitive, true),
            ("a", FieldClass::Primitive, true),
        ]));

        let err = projector.project(&1_u8, ProjectOptions::new()).unwrap_err();
        assert_eq!(err, ProjectError::Record(RecordError::DuplicateKey("a".into())));
    }

    /// Exposes `Person`'s fields only, everything else is scalar.
    struct PersonOnly;

    impl FieldEnumerator for PersonOnly {
        fn enumerate<'a>(
            &self,
            source: &'a dyn Reflect,
        ) -> Result<SourceFields<'a>, ProjectError> {
            let Some(person) = source.downcast_ref::<Person>() else {
                return Ok(SourceFields::Scalar(source));
            };
            Ok(SourceFields::Fields(vec![
                FieldSlot {
                    name: Cow::Borrowed("name"),
                    class: FieldClass::Primitive,
                    value: Some(&person.name),
                },
                FieldSlot {
                    name: Cow::Borrowed("address"),
                    class: FieldClass::Composite,
                    value: person.address.as_ref().map(Reflect::as_reflect),
                },
            ]))
        }
    }

    #[test]
    fn deep_projection_uses_the_same_enumerator() {
        let projector = ObjectProjector::with_enumerator(PersonOnly);
        let record = projector
            .project(&ann(Some(city("X"))), ProjectOptions::new().deep())
            .unwrap();

        let address = record.get_as::<DynamicRecord>("address").unwrap();
        assert!(address.is_scalar());
        assert_eq!(address.scalar().unwrap().downcast_ref::<Address>(), Some(&city("X")));
        assert!(!record.contains_key("age"));
    }

    #[test]
    fn boxed_values_keep_their_type() {
        let record: DynamicRecord = [
            ("a", Some(Box::new(1_i8) as Box<dyn Reflect>)),
            ("b", None),
        ]
        .into_iter()
        .collect();

        let copy = project(&record).unwrap();
        assert!(copy.get("a").unwrap().is::<i8>());
        assert!(copy.contains_key("b"));
    }
}
