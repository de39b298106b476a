// -----------------------------------------------------------------------------
// Modules

mod driver;
mod error_utils;

mod record_serializer;
mod struct_serializer;

// -----------------------------------------------------------------------------
// Exports

pub use driver::ReflectSerializer;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use serde::Serialize;

    use super::ReflectSerializer;
    use crate::derive::Reflect;
    use crate::ops::DynamicRecord;
    use crate::project::{ProjectOptions, project, project_with};

    #[derive(Reflect, Clone, Copy, Debug, PartialEq, Serialize)]
    #[reflect(serialize)]
    enum Level {
        Low,
        High,
    }

    #[derive(Reflect, Clone, Copy, Debug, PartialEq)]
    enum Hidden {
        Secret,
    }

    #[derive(Reflect, Clone)]
    struct Address {
        city: String,
    }

    #[derive(Reflect, Clone)]
    struct Person {
        name: String,
        age: u32,
        address: Option<Address>,
        level: Level,
    }

    fn ann(address: Option<Address>) -> Person {
        Person {
            name: String::from("Ann"),
            age: 30,
            address,
            level: Level::High,
        }
    }

    #[test]
    fn struct_as_map() {
        let person = ann(Some(Address {
            city: String::from("X"),
        }));

        let json = serde_json::to_string(&ReflectSerializer::new(&person)).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ann","age":30,"address":{"city":"X"},"level":"High"}"#
        );
    }

    #[test]
    fn projected_records_match_source() {
        let person = ann(Some(Address {
            city: String::from("X"),
        }));
        let expected = serde_json::to_value(ReflectSerializer::new(&person)).unwrap();

        let shallow = project(&person).unwrap();
        assert_eq!(serde_json::to_value(&shallow).unwrap(), expected);

        let deep = project_with(&person, ProjectOptions::new().deep()).unwrap();
        assert_eq!(serde_json::to_value(&deep).unwrap(), expected);
    }

    #[test]
    fn absent_values_are_null() {
        let person = ann(None);

        let record = project(&person).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ann","age":30,"address":null,"level":"High"}"#);

        let options = ProjectOptions::new().ignore_null_composites();
        let record = project_with(&person, options).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Ann","age":30,"level":"High"}"#);
    }

    #[test]
    fn scalar_record_is_its_value() {
        let record = DynamicRecord::from_scalar(Level::Low);
        assert_eq!(serde_json::to_string(&record).unwrap(), r#""Low""#);

        let record = project(&5_i16).unwrap();
        assert_eq!(serde_json::to_string(&record).unwrap(), "5");
    }

    #[test]
    fn opaque_without_serialize_fails() {
        let mut record = DynamicRecord::new();
        record.set("hidden", Hidden::Secret).unwrap();

        let err = serde_json::to_string(&record).unwrap_err();
        assert!(err.to_string().contains("Hidden"));
    }

    #[test]
    fn nested_options() {
        let value: Option<Option<u8>> = Some(None);
        let json = serde_json::to_string(&ReflectSerializer::new(&value)).unwrap();
        assert_eq!(json, "null");

        let value: Option<u8> = Some(4);
        let json = serde_json::to_string(&ReflectSerializer::new(&value)).unwrap();
        assert_eq!(json, "4");
    }
}
