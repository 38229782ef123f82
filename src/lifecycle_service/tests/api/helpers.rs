use lifecycle_adapters::{
    SupabaseProviders,
    config::{
        EmailSettings, PagingSettings, ServiceSettings, Settings, SupabaseSettings, prod,
        test as test_config,
    },
};
use lifecycle_service::LifecycleService;
use secrecy::Secret;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CALLER_TOKEN: &str = "caller-jwt";
pub const USER_ID: &str = "0b6f1c2e-8d4b-4c55-9a7e-3f1d2a9b7c10";
pub const USER_EMAIL: &str = "patient@example.com";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    /// Stands in for the Supabase project: auth, storage and rest.
    pub supabase: MockServer,
    /// Stands in for the email provider.
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn the service after adjusting the settings pointing at the mocks.
    pub async fn spawn_with(adjust: impl FnOnce(&mut Settings)) -> Self {
        let supabase = MockServer::start().await;
        let email_server = MockServer::start().await;

        let mut settings = Settings {
            service: ServiceSettings {
                address: test_config::APP_ADDRESS.to_string(),
            },
            supabase: SupabaseSettings {
                url: Some(supabase.uri()),
                anon_key: Some(Secret::new("anon-key".to_string())),
                service_role_key: Some(Secret::new("service-key".to_string())),
                jwt_secret: None,
                bucket: prod::storage::BUCKET.to_string(),
                otp_function: prod::otp::FUNCTION.to_string(),
                timeout_in_millis: test_config::TIMEOUT_IN_MILLIS,
            },
            email: EmailSettings {
                base_url: email_server.uri(),
                api_key: Some(Secret::new("re_test_key".to_string())),
                sender: prod::email_client::SENDER.to_string(),
                subject: prod::email_client::SUBJECT.to_string(),
                app_name: prod::email_client::APP_NAME.to_string(),
                timeout_in_millis: test_config::TIMEOUT_IN_MILLIS,
            },
            paging: PagingSettings {
                page_size: prod::storage::PAGE_SIZE,
                max_pages: prod::storage::MAX_PAGES,
            },
        };
        adjust(&mut settings);

        let listener = TcpListener::bind(&settings.service.address)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let providers = SupabaseProviders::new(settings).expect("Failed to build providers");
        let service = LifecycleService::new(providers);
        tokio::spawn(async move {
            service
                .run_standalone(listener)
                .await
                .expect("Service stopped unexpectedly");
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
            supabase,
            email_server,
        }
    }

    pub async fn post(&self, route: &str, authorization: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.post(format!("{}{}", self.address, route));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn preflight(&self, route: &str) -> reqwest::Response {
        self.http_client
            .request(reqwest::Method::OPTIONS, format!("{}{}", self.address, route))
            .header("Origin", "https://app.example.com")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// The auth server resolves `CALLER_TOKEN` to the test user.
    pub async fn mock_caller(&self, email: Option<&str>) {
        let mut user = json!({ "id": USER_ID, "aud": "authenticated" });
        if let Some(email) = email {
            user["email"] = json!(email);
        }

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", format!("Bearer {CALLER_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.supabase)
            .await;
    }

    /// The auth server rejects every credential.
    pub async fn mock_rejected_caller(&self) {
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "msg": "invalid JWT: unable to parse or verify signature"
            })))
            .mount(&self.supabase)
            .await;
    }

    /// Every request received by either mock server.
    pub async fn upstream_request_count(&self) -> usize {
        let supabase = self.supabase.received_requests().await.unwrap_or_default();
        let email = self
            .email_server
            .received_requests()
            .await
            .unwrap_or_default();
        supabase.len() + email.len()
    }
}

pub fn bearer() -> String {
    format!("Bearer {CALLER_TOKEN}")
}

/// A listing page of `count` objects starting at `first`.
pub fn listing(first: usize, count: usize) -> Value {
    Value::Array(
        (first..first + count)
            .map(|i| {
                json!({
                    "name": format!("rx-{i:04}.jpg"),
                    "id": format!("obj-{i}"),
                    "metadata": { "size": 2048, "mimetype": "image/jpeg" }
                })
            })
            .collect(),
    )
}

pub fn assert_cors_headers(response: &reqwest::Response) {
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    assert_eq!(header("access-control-allow-origin").as_deref(), Some("*"));
    assert_eq!(
        header("access-control-allow-headers").as_deref(),
        Some("authorization, x-client-info, apikey, content-type")
    );
    assert_eq!(
        header("access-control-allow-methods").as_deref(),
        Some("POST, OPTIONS")
    );
}
