use chrono::{TimeZone, Utc};
use conform::{
    errors::{ErrorValue, Expected},
    ErrorKind, File, Kind, Length, Outcome, Schema, SchemaExt, Validate, Value,
};
use pretty_assertions::assert_eq;
use std::{sync::Arc, thread};

fn path(err: &conform::Error) -> Option<String> {
    err.span.as_ref().map(|s| s.dotted())
}

#[test]
fn email_accepts_and_returns_value() {
    let value = Value::from("dev@example.com");
    let out = conform::string().email().validate(&value).unwrap();

    assert!(std::ptr::eq(out, &value));
}

#[test]
fn email_rejects_malformed() {
    let err = conform::string()
        .email()
        .validate(&Value::from("not-an-email"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    assert!(err.message().contains("email"));
}

#[test]
fn number_bounds_report_the_bound() {
    let err = conform::number()
        .min(18.0)
        .max(120.0)
        .validate(&Value::from(15))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    assert_eq!(err.message(), "15 is less than the minimum of 18");

    let err = conform::number()
        .min(18.0)
        .max(120.0)
        .validate(&Value::from(121))
        .unwrap_err();
    assert_eq!(err.message(), "121 is greater than the maximum of 120");

    assert!(conform::number().min(18.0).validate(&Value::from(18)).is_ok());
}

#[test]
fn object_reports_missing_field() {
    let schema = conform::object! { "age" => conform::number().min(18.0) };
    let err = schema.validate(&Value::object(Vec::<(&str, Value)>::new())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingFields);
    assert_eq!(
        err.value,
        ErrorValue::MissingFields {
            names: vec!["age".to_string()]
        }
    );
}

#[test]
fn empty_array_violates_min_length() {
    let schema = conform::ArrayValidator::with_length(conform::string(), Length::new().min(1));
    let err = schema.validate(&Value::array(Vec::<Value>::new())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    assert_eq!(err.message(), "array length 0 is less than the minimum of 1");
}

#[test]
fn literal_mismatch_is_tagged_failure() {
    let schema = conform::object! {
        "status" => conform::literal(["admin", "user", "guest"]),
    };
    let input = Value::object(vec![("status", "superuser")]);

    match schema.safe_validate(&input) {
        Outcome::Invalid(failure) => {
            assert!(!failure.success());
            assert_eq!(failure.error.kind(), ErrorKind::TypeMismatch);
            assert_eq!(path(&failure.error), Some("status".to_string()));
            assert_eq!(
                failure.error.value,
                ErrorValue::InvalidType {
                    value: r#""superuser""#.to_string(),
                    expected: Expected::Literal(vec![
                        "admin".to_string(),
                        "user".to_string(),
                        "guest".to_string()
                    ]),
                }
            );
        }
        Outcome::Valid(_) => panic!("superuser is not an allowed status"),
    }
}

#[test]
fn type_mismatch_names_expected_kind() {
    let cases: Vec<(Schema, Value, Kind)> = vec![
        (conform::string().into(), Value::from(1), Kind::String),
        (conform::number().into(), Value::from("1"), Kind::Number),
        (conform::boolean().into(), Value::Null, Kind::Boolean),
        (conform::date().into(), Value::from("2024-01-01"), Kind::Date),
        (conform::file().into(), Value::from(1), Kind::File),
        (conform::array(conform::string()).into(), Value::from("a"), Kind::Array),
        (Schema::from(conform::object! {}), Value::Null, Kind::Object),
        (Schema::from(conform::object! {}), Value::array(vec![1]), Kind::Object),
    ];

    for (schema, value, kind) in cases {
        let err = schema.validate(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err.value,
            ErrorValue::InvalidType {
                value: value.to_string(),
                expected: Expected::Kind(kind),
            }
        );
    }
}

#[test]
fn values_are_never_coerced() {
    assert!(conform::number().validate(&Value::from("42")).is_err());
    assert!(conform::string().validate(&Value::from(42)).is_err());
    assert!(conform::boolean().validate(&Value::from("true")).is_err());
}

#[test]
fn date_and_boolean_have_no_constraints() {
    let now = Value::from(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

    assert!(conform::date().validate(&now).is_ok());
    assert!(conform::boolean().validate(&Value::from(false)).is_ok());
}

#[test]
fn refinement_does_not_touch_the_original() {
    let base = conform::string();
    let email = base.email();
    let input = Value::from("plain text");

    assert!(base.validate(&input).is_ok());
    assert!(email.validate(&input).is_err());
    assert!(base.constraints().is_empty());
    assert_eq!(email.constraints().len(), 1);
}

#[test]
fn constraints_run_in_attachment_order() {
    let schema = conform::string().min_length(10).email();
    let err = schema.validate(&Value::from("nope")).unwrap_err();
    assert_eq!(err.message(), "string length 4 is less than the minimum of 10");

    let schema = conform::string().email().min_length(10);
    let err = schema.validate(&Value::from("nope")).unwrap_err();
    assert_eq!(err.message(), r#""nope" is not a valid email"#);
}

#[test]
fn string_length_bounds() {
    let schema = conform::string().length(Length::new().min(2).max(4));

    assert!(schema.validate(&Value::from("ab")).is_ok());
    assert!(schema.validate(&Value::from("abcd")).is_ok());
    assert_eq!(
        schema.validate(&Value::from("a")).unwrap_err().message(),
        "string length 1 is less than the minimum of 2"
    );
    assert_eq!(
        schema.validate(&Value::from("abcde")).unwrap_err().message(),
        "string length 5 is greater than the maximum of 4"
    );

    let exact = conform::string().fix_length(3);
    assert_eq!(
        exact.validate(&Value::from("ab")).unwrap_err().message(),
        "string length 2 is not exactly 3"
    );
}

#[test]
fn equals_matches_exactly() {
    let schema = conform::string().equals("secret");

    assert!(schema.validate(&Value::from("secret")).is_ok());
    assert_eq!(
        schema.validate(&Value::from("Secret")).unwrap_err().message(),
        r#""Secret" does not match "secret""#
    );
}

#[test]
fn custom_refinements() {
    let even = conform::number().refine("even", |n| n % 2.0 == 0.0, "must be even");
    let err = even.validate(&Value::from(3)).unwrap_err();

    assert_eq!(
        err.value,
        ErrorValue::Constraint {
            name: "even".into(),
            message: "must be even".to_string(),
        }
    );
    assert!(even.validate(&Value::from(4)).is_ok());
}

#[test]
fn image_uploads() {
    let avatar = conform::file().image(["image/heic"]).size_max(1024);

    let png = Value::from(File::new("image/png", 512).with_name("me.png"));
    let heic = Value::from(File::new("image/heic", 512));
    let pdf = Value::from(File::new("application/pdf", 512));
    let huge = Value::from(File::new("image/png", 4096));

    assert!(avatar.validate(&png).is_ok());
    assert!(avatar.validate(&heic).is_ok());

    let err = avatar.validate(&pdf).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    assert!(err.message().starts_with(r#""application/pdf" is not an allowed image type"#));

    assert_eq!(
        avatar.validate(&huge).unwrap_err().message(),
        "file size 4096 bytes is greater than the maximum of 1024 bytes"
    );
}

#[test]
fn optional_and_nullable() {
    let optional = conform::string().optional();
    let nullable = conform::string().nullable();

    assert!(optional.validate(&Value::Undefined).is_ok());
    assert!(optional.validate(&Value::Null).is_err());
    assert!(nullable.validate(&Value::Null).is_ok());
    assert!(nullable.validate(&Value::Undefined).is_err());
    assert!(optional.validate(&Value::from(1)).is_err());
}

#[test]
fn object_partitions_required_fields() {
    let schema = conform::object! {
        "email" => conform::string().email(),
        "nickname" => conform::string().optional(),
        "bio" => conform::string().nullable(),
        "tags" => conform::array(conform::string()),
        "profile" => conform::object! {},
    };

    let required: Vec<&str> = schema.required_fields().collect();
    assert_eq!(required, vec!["email", "bio", "tags", "profile"]);
    assert!(!schema.is_required("nickname"));
    assert!(schema.get("nickname").map(Schema::is_optional).unwrap_or(false));
}

#[test]
fn missing_fields_are_aggregated_in_declaration_order() {
    let schema = conform::object! {
        "name" => conform::string(),
        "email" => conform::string().email(),
        "age" => conform::number().optional(),
        "role" => conform::literal(["admin", "user"]),
    };
    let input = Value::object(vec![("email", "bad")]);

    let err = schema.validate(&input).unwrap_err();
    assert_eq!(err.to_string(), "missing required fields: name, role");
    assert_eq!(err.span, None);
}

#[test]
fn first_field_failure_stops_validation() {
    let schema = conform::object! {
        "email" => conform::string().email(),
        "age" => conform::number().min(18.0),
    };
    let input = Value::object(vec![
        ("email", Value::from("bad")),
        ("age", Value::from(3)),
    ]);

    let err = schema.validate(&input).unwrap_err();
    assert_eq!(path(&err), Some("email".to_string()));
}

#[test]
fn absent_optional_fields_pass_and_present_ones_are_checked() {
    let schema = conform::object! {
        "email" => conform::string().email(),
        "nickname" => conform::string().username().optional(),
    };

    let without = Value::object(vec![("email", "dev@example.com")]);
    assert!(schema.validate(&without).is_ok());

    let with_bad = Value::object(vec![("email", "dev@example.com"), ("nickname", "no spaces")]);
    let err = schema.validate(&with_bad).unwrap_err();
    assert_eq!(path(&err), Some("nickname".to_string()));

    let with_null = Value::object(vec![("email", Value::from("dev@example.com")), ("nickname", Value::Null)]);
    assert_eq!(
        schema.validate(&with_null).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn undeclared_keys_are_kept() {
    let schema = conform::object! { "a" => conform::number() };
    let input = Value::object(vec![("a", Value::from(1)), ("extra", Value::from("kept"))]);

    let out = schema.validate(&input).unwrap();
    assert_eq!(out.as_object().map(|o| o.len()), Some(2));
}

#[test]
fn nested_paths() {
    let schema = conform::object! {
        "team" => conform::object! {
            "members" => conform::array(conform::object! {
                "email" => conform::string().email(),
            }),
        },
    };

    let input = Value::object(vec![(
        "team",
        Value::object(vec![(
            "members",
            Value::array(vec![
                Value::object(vec![("email", "a@example.com")]),
                Value::object(vec![("email", "broken")]),
            ]),
        )]),
    )]);

    let err = schema.validate(&input).unwrap_err();
    assert_eq!(path(&err), Some("team.members.1.email".to_string()));
    assert_eq!(
        err.to_string(),
        r#"(team.members.1.email) "broken" is not a valid email"#
    );
}

#[test]
fn builder_replaces_fields_in_place() {
    let base = conform::object! {
        "a" => conform::number(),
        "b" => conform::number(),
    };
    let changed = base.field("a", conform::number().optional()).field("c", conform::boolean());

    let names: Vec<&str> = changed.fields().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(!changed.is_required("a"));
    assert!(base.is_required("a"));
    assert_eq!(base.len(), 2);
}

#[test]
fn validators_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
    assert_send_sync::<conform::ObjectValidator>();
    assert_send_sync::<conform::StringValidator>();
    assert_send_sync::<conform::Error>();

    let schema = Arc::new(conform::object! {
        "email" => conform::string().email(),
        "age" => conform::number().min(18.0),
    });

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = schema.clone();
            thread::spawn(move || {
                let input = Value::object(vec![
                    ("email", Value::from(format!("user{}@example.com", i))),
                    ("age", Value::from(17 + i)),
                ]);
                schema.validate(&input).is_ok()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, true, true, true, true, true]);
}
