use reco_schema::{
    RecommendationRequest, SchemaError, SchemaValidator, ValidatorOptions, ViolationKind,
};
use serde_json::{json, Value};

fn valid_user() -> Value {
    json!({
        "id": 1,
        "name": "Ghadeer Sameer",
        "national_id": "2190065411",
        "city": "Riyadh",
        "activity_level": "high",
        "phone": "+966500000000",
        "last_login": "2025-01-18T09:32:00Z"
    })
}

fn valid_service() -> Value {
    json!({
        "service_id": 101,
        "name": "Passport Renewal",
        "category": "travel",
        "expiry_date": "2026-01-25",
        "days_left": 28,
        "usage_count": 4,
        "category_importance": 0.8,
        "seasonality": "in_season"
    })
}

fn request_with(top_n: Value) -> Value {
    json!({
        "user": valid_user(),
        "services": [valid_service()],
        "top_n": top_n
    })
}

fn validate(payload: &Value) -> Result<RecommendationRequest, reco_schema::ValidationError> {
    SchemaValidator::default().validate(payload)
}

/// 完整欄位的請求應原樣通過
#[test]
fn test_full_payload_round_trips_exactly() {
    let payload = request_with(json!(3));
    let request = validate(&payload).unwrap();

    assert_eq!(request.top_n, 3);
    assert_eq!(request.user.national_id, "2190065411");
    assert_eq!(request.services[0].seasonality.as_deref(), Some("in_season"));
    assert_eq!(serde_json::to_value(&request).unwrap(), payload);
}

#[test]
fn test_defaults_applied_for_omitted_fields() {
    let mut user = valid_user();
    user.as_object_mut().unwrap().remove("activity_level");
    let mut service = valid_service();
    let service_fields = service.as_object_mut().unwrap();
    service_fields.remove("usage_count");
    service_fields.remove("category_importance");
    service_fields.remove("seasonality");

    let payload = json!({ "user": user, "services": [service] });
    let request = validate(&payload).unwrap();

    assert_eq!(request.top_n, 5);
    assert_eq!(request.user.activity_level, "medium");
    assert_eq!(request.services[0].usage_count, 0);
    assert_eq!(request.services[0].category_importance, 0.5);
    assert_eq!(request.services[0].seasonality, None);
}

#[test]
fn test_top_n_bounds_are_inclusive() {
    assert!(validate(&request_with(json!(1))).is_ok());
    assert!(validate(&request_with(json!(10))).is_ok());

    for bad in [0i64, 11, 15, -3] {
        let error = validate(&request_with(json!(bad))).unwrap_err();
        assert_eq!(error.fields(), vec!["top_n"]);
        assert_eq!(
            error.find("top_n").unwrap().kind,
            ViolationKind::OutOfRange {
                value: bad.into(),
                min: 1,
                max: 10
            }
        );
    }
}

#[test]
fn test_missing_required_fields_are_named() {
    let mut payload = request_with(json!(3));
    payload["user"].as_object_mut().unwrap().remove("id");
    payload["services"][0]
        .as_object_mut()
        .unwrap()
        .remove("service_id");

    let error = validate(&payload).unwrap_err();
    assert_eq!(error.fields(), vec!["user.id", "services[0].service_id"]);
    assert!(error
        .violations()
        .iter()
        .all(|v| v.kind == ViolationKind::Missing));
}

#[test]
fn test_missing_top_level_sections() {
    let error = validate(&json!({})).unwrap_err();
    assert_eq!(error.fields(), vec!["user", "services"]);
}

#[test]
fn test_empty_services_is_valid() {
    let payload = json!({ "user": valid_user(), "services": [] });
    let request = validate(&payload).unwrap();
    assert!(request.services.is_empty());
}

/// 所有錯誤需一次回報，不可在第一個錯誤就停止
#[test]
fn test_every_violation_is_reported() {
    let payload = json!({
        "user": {
            "id": "one",
            "name": "Ghadeer Sameer",
            "city": "Riyadh",
            "activity_level": null,
            "phone": 966500000000u64,
            "last_login": "2025-01-18T09:32:00Z"
        },
        "services": [
            valid_service(),
            {
                "service_id": 102,
                "name": "Driving Licence",
                "category": "transport",
                "expiry_date": "2026-02-10",
                "days_left": 2.5,
                "usage_count": "four",
                "category_importance": "high",
                "seasonality": 7
            }
        ],
        "top_n": 15
    });

    let error = validate(&payload).unwrap_err();
    assert_eq!(
        error.fields(),
        vec![
            "user.id",
            "user.national_id",
            "user.activity_level",
            "user.phone",
            "services[1].days_left",
            "services[1].usage_count",
            "services[1].category_importance",
            "services[1].seasonality",
            "top_n",
        ]
    );
    assert_eq!(
        error.find("user.id").unwrap().kind,
        ViolationKind::InvalidType {
            expected: "integer",
            found: "string"
        }
    );
    assert_eq!(
        error.find("services[1].days_left").unwrap().kind,
        ViolationKind::InvalidType {
            expected: "integer",
            found: "float"
        }
    );
}

#[test]
fn test_services_must_be_an_array() {
    let payload = json!({ "user": valid_user(), "services": { "service_id": 1 } });
    let error = validate(&payload).unwrap_err();
    assert_eq!(
        error.find("services").unwrap().kind,
        ViolationKind::InvalidType {
            expected: "array",
            found: "object"
        }
    );
}

#[test]
fn test_mistyped_top_n_is_not_range_checked() {
    let error = validate(&request_with(json!("three"))).unwrap_err();
    assert_eq!(error.violations().len(), 1);
    assert!(matches!(
        error.find("top_n").unwrap().kind,
        ViolationKind::InvalidType { .. }
    ));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let mut payload = request_with(json!(2));
    payload["trace_id"] = json!("abc");
    payload["user"]["email"] = json!("someone@example.com");
    assert!(validate(&payload).is_ok());
}

#[test]
fn test_raw_text_entry_points() {
    let validator = SchemaValidator::new(ValidatorOptions::default());
    let text = request_with(json!(3)).to_string();

    let request = validator.validate_str(&text).unwrap();
    assert_eq!(request.top_n, 3);
    assert_eq!(validator.validate_slice(text.as_bytes()).unwrap(), request);

    let error = validator.validate_str("{\"user\": ").unwrap_err();
    assert!(matches!(error, SchemaError::Decode(_)));

    let error = validator
        .validate_str(&request_with(json!(15)).to_string())
        .unwrap_err();
    match error {
        SchemaError::Validation(e) => assert!(e.contains("top_n")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

/// 整數欄位接受整數值的浮點數與數字字串
#[test]
fn test_lax_numeric_input_is_coerced() {
    let mut payload = request_with(json!("3"));
    payload["services"][0]["days_left"] = json!(3.0);
    payload["services"][0]["usage_count"] = json!("12");
    payload["services"][0]["category_importance"] = json!("0.25");
    payload["user"]["id"] = json!(1e1);

    let request = validate(&payload).unwrap();
    assert_eq!(request.top_n, 3);
    assert_eq!(request.user.id, 10);
    assert_eq!(request.services[0].days_left, 3);
    assert_eq!(request.services[0].usage_count, 12);
    assert_eq!(request.services[0].category_importance, 0.25);

    let exponent: Value = serde_json::from_str(r#"{"top_n": 1e1}"#).unwrap();
    let mut payload = request_with(exponent["top_n"].clone());
    assert_eq!(validate(&payload).unwrap().top_n, 10);

    payload["top_n"] = json!(10.0);
    assert_eq!(validate(&payload).unwrap().top_n, 10);
}

#[test]
fn test_non_integral_and_non_numeric_input_still_rejected() {
    let mut payload = request_with(json!(3.5));
    payload["services"][0]["days_left"] = json!("3.5");
    payload["services"][0]["category_importance"] = json!(true);
    payload["user"]["phone"] = json!(966500000000u64);
    payload["user"]["city"] = json!(false);

    let error = validate(&payload).unwrap_err();
    assert_eq!(
        error.fields(),
        vec![
            "user.city",
            "user.phone",
            "services[0].days_left",
            "services[0].category_importance",
            "top_n",
        ]
    );
    assert!(error
        .violations()
        .iter()
        .all(|v| matches!(v.kind, ViolationKind::InvalidType { .. })));
}

/// 超出 64 位元範圍的 top_n 仍應回報為範圍錯誤
#[test]
fn test_top_n_beyond_64_bits_is_a_bound_violation() {
    for text in [
        r#"{"top_n": 10000000000000000000}"#,
        r#"{"top_n": -9223372036854775809}"#,
        r#"{"top_n": 1e25}"#,
    ] {
        let parsed: Value = serde_json::from_str(text).unwrap();
        let error = validate(&request_with(parsed["top_n"].clone())).unwrap_err();
        assert_eq!(error.fields(), vec!["top_n"]);
        assert!(
            matches!(
                error.find("top_n").unwrap().kind,
                ViolationKind::OutOfRange { min: 1, max: 10, .. }
            ),
            "{} should be out of range",
            text
        );
    }

    let parsed: Value = serde_json::from_str(r#"{"top_n": 10000000000000000000}"#).unwrap();
    let error = validate(&request_with(parsed["top_n"].clone())).unwrap_err();
    assert_eq!(
        error.find("top_n").unwrap().kind,
        ViolationKind::OutOfRange {
            value: 10_000_000_000_000_000_000,
            min: 1,
            max: 10
        }
    );
}
