use crate::domain::model::RecommendationRequest;
use schemars::schema::RootSchema;

/// JSON Schema of the request payload, with defaults, bounds and examples.
pub fn request_json_schema() -> RootSchema {
    schemars::schema_for!(RecommendationRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_carries_bounds_and_defaults() {
        let schema = serde_json::to_value(request_json_schema()).unwrap();

        let top_n = &schema["properties"]["top_n"];
        assert_eq!(top_n["minimum"], 1.0);
        assert_eq!(top_n["maximum"], 10.0);
        assert_eq!(top_n["default"], 5);

        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|f| f == "user"));
        assert!(required.iter().any(|f| f == "services"));
        assert!(!required.iter().any(|f| f == "top_n"));

        let service = &schema["definitions"]["Service"];
        assert_eq!(service["properties"]["usage_count"]["default"], 0);
        assert_eq!(service["properties"]["category_importance"]["default"], 0.5);
    }
}
