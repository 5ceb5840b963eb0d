//! Unit tests for the payment crate

#[cfg(test)]
mod support {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::{Value, json};
    use tokio::sync::Mutex;

    use crate::domain::gateway::{GatewayOrderRequest, PaymentGateway};
    use crate::error::{PaymentError, PaymentResult};

    #[derive(Clone, Copy, PartialEq, Eq)]
    pub enum Behaviour {
        Accept,
        Reject,
        Hang,
    }

    /// Gateway that records the orders it was asked to create
    #[derive(Clone)]
    pub struct FakeGateway {
        pub requests: Arc<Mutex<Vec<GatewayOrderRequest>>>,
        behaviour: Behaviour,
    }

    impl FakeGateway {
        pub fn new(behaviour: Behaviour) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                behaviour,
            }
        }
    }

    impl PaymentGateway for FakeGateway {
        async fn create_order(&self, request: &GatewayOrderRequest) -> PaymentResult<Value> {
            self.requests.lock().await.push(request.clone());
            match self.behaviour {
                Behaviour::Accept => Ok(json!({
                    "id": "order_test_1",
                    "entity": "order",
                    "amount": request.amount,
                    "currency": request.currency,
                    "receipt": request.receipt,
                    "status": "created"
                })),
                Behaviour::Reject => Err(PaymentError::GatewayRejected {
                    status: 401,
                    body: "Authentication failed".to_string(),
                }),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(Value::Null)
                }
            }
        }
    }
}

#[cfg(test)]
mod create_order_tests {
    use std::sync::Arc;

    use super::support::{Behaviour, FakeGateway};
    use crate::application::config::PaymentConfig;
    use crate::application::create_order::CreatePaymentOrderUseCase;
    use crate::error::PaymentError;

    fn use_case(gateway: &FakeGateway) -> CreatePaymentOrderUseCase<FakeGateway> {
        CreatePaymentOrderUseCase::new(
            Arc::new(gateway.clone()),
            Arc::new(PaymentConfig::development()),
        )
    }

    #[tokio::test]
    async fn test_amount_in_minor_units_with_default_currency() {
        let gateway = FakeGateway::new(Behaviour::Accept);

        let order = use_case(&gateway).execute("499.50", None).await.unwrap();

        assert_eq!(order["id"], "order_test_1");
        let sent = gateway.requests.lock().await;
        assert_eq!(sent[0].amount.as_i64(), 49_950);
        assert_eq!(sent[0].currency.as_str(), "INR");
        assert!(sent[0].receipt.starts_with("receipt_"));
    }

    #[tokio::test]
    async fn test_explicit_currency() {
        let gateway = FakeGateway::new(Behaviour::Accept);

        use_case(&gateway).execute("10", Some("usd")).await.unwrap();

        assert_eq!(gateway.requests.lock().await[0].currency.as_str(), "USD");
    }

    #[tokio::test]
    async fn test_invalid_amount_never_reaches_gateway() {
        let gateway = FakeGateway::new(Behaviour::Accept);

        let err = use_case(&gateway).execute("10.001", None).await.unwrap_err();

        assert!(matches!(err, PaymentError::InvalidAmount(_)));
        assert!(gateway.requests.lock().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_gateway_timeout() {
        let gateway = FakeGateway::new(Behaviour::Hang);

        let err = use_case(&gateway).execute("10", None).await.unwrap_err();

        assert!(matches!(err, PaymentError::GatewayTimeout));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::{Behaviour, FakeGateway};
    use crate::application::config::PaymentConfig;
    use crate::presentation::router::payment_router_generic;

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_gateway_document_is_passed_through() {
        let app = payment_router_generic(
            FakeGateway::new(Behaviour::Accept),
            PaymentConfig::development(),
        );

        let response = app.oneshot(post(json!({ "amount": 250 }))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["amount"], 25_000);
        assert_eq!(body["status"], "created");
    }

    #[tokio::test]
    async fn test_gateway_failure_is_502_without_detail() {
        let app = payment_router_generic(
            FakeGateway::new(Behaviour::Reject),
            PaymentConfig::development(),
        );

        let response = app.oneshot(post(json!({ "amount": 250 }))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert!(!body["detail"].as_str().unwrap().contains("Authentication"));
    }

    #[tokio::test]
    async fn test_missing_amount_is_400() {
        let app = payment_router_generic(
            FakeGateway::new(Behaviour::Accept),
            PaymentConfig::development(),
        );

        let response = app.oneshot(post(json!({ "currency": "INR" }))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
