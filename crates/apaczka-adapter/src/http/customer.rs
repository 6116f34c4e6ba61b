/*
[INPUT]:  Free-form customer documents
[OUTPUT]: Raw JSON responses for customer registration
[POS]:    HTTP layer - customer endpoints
[UPDATE]: When adding new customer endpoints
*/

use serde_json::Value;

use crate::http::{ApaczkaClient, Result};
use crate::types::CustomerRegisterRequest;

impl ApaczkaClient {
    /// Register a new customer account
    ///
    /// POST customer_register/
    pub async fn customer_register(&self, customer: Value) -> Result<String> {
        self.post_signed("customer_register/", &CustomerRegisterRequest { customer })
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ApaczkaClient, ClientConfig, Credentials};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_customer_register_wraps_customer_document() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/customer_register/"))
            .and(body_string_contains(
                r#"&request={"customer":{"email":"jan@example.pl"}}&"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApaczkaClient::with_config_and_base_url(
            Credentials::new("app-1234", "secret-5678"),
            ClientConfig::default(),
            &server.uri(),
        )
        .expect("client init");

        client
            .customer_register(json!({"email": "jan@example.pl"}))
            .await
            .expect("customer_register failed");
    }
}
