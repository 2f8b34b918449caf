use conform::{ErrorKind, SchemaExt, Verify};
use serde::Serialize;

mod schemas {
    use conform::{ObjectValidator, SchemaExt};

    pub fn account() -> ObjectValidator {
        conform::object! {
            "username" => conform::string().username().length(conform::Length::new().min(3).max(16)),
            "password" => conform::string().password(),
            "email" => conform::string().email().optional(),
        }
    }
}

#[derive(Serialize, Verify)]
#[verify(schema = "schemas::account()")]
struct Account {
    username: String,
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

#[derive(Serialize, Verify)]
#[verify(schema = "conform::literal([\"admin\", \"user\"])")]
#[serde(rename_all = "lowercase")]
enum Role {
    Admin,
    User,
    Root,
}

#[derive(Serialize, Verify)]
#[verify(schema = "conform::array(conform::number().min(0.0)).max(3)")]
struct Scores<T: Serialize>(Vec<T>);

#[test]
fn derived_structs_verify_themselves() {
    let account = Account {
        username: "dev_42".into(),
        password: "Sup3rSecret".into(),
        email: None,
    };
    assert!(account.verify().is_ok());

    let weak = Account {
        password: "weak".into(),
        ..account
    };
    let err = weak.verify().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    assert_eq!(err.span.map(|s| s.dotted()), Some("password".to_string()));
    assert!(!err.value.to_string().contains("weak"));
}

#[test]
fn derived_enums_verify_themselves() {
    assert!(Role::Admin.verify().is_ok());
    assert!(Role::User.verify().is_ok());
    assert_eq!(Role::Root.verify().unwrap_err().kind(), ErrorKind::TypeMismatch);
}

#[test]
fn derived_generics_verify_themselves() {
    assert!(Scores(vec![1, 2, 3]).verify().is_ok());
    assert!(Scores(vec![1.0, -2.0]).verify().is_err());
    assert!(Scores(vec![1u8; 4]).verify().is_err());
}

#[test]
fn schema_expressions_may_use_modifiers() {
    #[derive(Serialize, Verify)]
    #[verify(schema = "conform::string().email().nullable()")]
    struct Contact(Option<String>);

    assert!(Contact(None).verify().is_ok());
    assert!(Contact(Some("dev@example.com".into())).verify().is_ok());
    assert!(Contact(Some("nope".into())).verify().is_err());
}
