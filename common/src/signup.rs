use serde::{Deserialize, Serialize};

/// This is the information sent by the user to request a newsletter signup.
/// The province is country dependent, and left out of the payload when the
/// user has not picked one.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::SignupRequest;

    #[test]
    fn province_is_left_out_of_the_payload_when_absent() {
        let request = SignupRequest {
            email: "a@b.com".to_string(),
            country: "Other".to_string(),
            province: None,
        };
        let payload = serde_json::to_string(&request).expect("serializable request");
        assert_that(&payload.contains("province")).is_false();
        assert_that(&payload).is_equal_to(r#"{"email":"a@b.com","country":"Other"}"#.to_string());
    }

    #[test]
    fn province_is_carried_in_the_payload_when_present() {
        let request = SignupRequest {
            email: "a@b.com".to_string(),
            country: "United States".to_string(),
            province: Some("California".to_string()),
        };
        let payload = serde_json::to_string(&request).expect("serializable request");
        assert_that(&payload).is_equal_to(
            r#"{"email":"a@b.com","country":"United States","province":"California"}"#.to_string(),
        );
    }
}
