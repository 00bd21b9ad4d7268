//! MobileMoneyClient unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use momo_types::{
        Amount, CommandId, Content, Credentials, ErrorKind, FixedClock, GatewayError, GatewayLogger,
        HttpMethod, HttpRequest, HttpResponse, HttpTransport, SubscriberDetails,
        TransactionRequest, TransportError, legacy,
    };

    use crate::MobileMoneyClient;

    const NOW: i64 = 1_700_000_000;

    /// Transport that records every request and answers with a fixed reply.
    pub struct ScriptedTransport {
        reply: Result<HttpResponse, TransportError>,
        sent: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpResponse::new(status, body)),
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(err: TransportError) -> Self {
            Self {
                reply: Err(err),
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn sent(&self) -> Vec<HttpRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.lock().unwrap().push(request);
            self.reply.clone()
        }
    }

    /// Logger that keeps every line, tagged by level.
    #[derive(Default)]
    pub struct RecordingLogger {
        lines: Mutex<Vec<(&'static str, String)>>,
    }

    impl RecordingLogger {
        fn lines(&self) -> Vec<(&'static str, String)> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl GatewayLogger for RecordingLogger {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(("info", message.to_string()));
        }

        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(("error", message.to_string()));
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("https://gateway.test/api", "u", "p").unwrap()
    }

    fn client(transport: ScriptedTransport) -> MobileMoneyClient<ScriptedTransport> {
        MobileMoneyClient::with_transport(credentials(), transport)
            .with_clock(Arc::new(FixedClock(NOW)))
    }

    fn tx() -> TransactionRequest {
        TransactionRequest::new(10, "r1", "22660000000")
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_missing_keys_short_circuit_every_money_operation() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let data = TransactionRequest {
            amount: None,
            request_id: Some("r1".into()),
            destination: None,
        };

        let results = vec![
            client.payment(&data).await,
            client.transfer(&data).await,
            client.cross_transfer(&data).await,
            client.auto_debit(&data).await,
        ];

        for result in results {
            let err = result.unwrap_err();
            assert_eq!(
                err,
                GatewayError::Validation {
                    missing: vec!["amount".into(), "destination".into()]
                }
            );
        }
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_blank_string_arguments_short_circuit() {
        let client = client(ScriptedTransport::replying(200, "{}"));

        let err = client.account_status("").await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required key(s): phoneNumber");

        let err = client.transaction_status("  ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = client
            .subscriber_registration("", &SubscriberDetails::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required key(s): requestId");

        assert!(client.transport().sent().is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Wire shape
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_payment_success() {
        let client = client(ScriptedTransport::replying(200, r#"{"ok":true}"#));

        let resp = client.payment(&tx()).await.unwrap();

        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.content, Content::Json(json!({"ok": true})));
    }

    #[tokio::test]
    async fn test_payment_request_shape() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        client.payment(&tx()).await.unwrap();

        let sent = client.transport().sent();
        assert_eq!(sent.len(), 1);
        let req = &sent[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://gateway.test/api");
        assert_eq!(
            req.body,
            Some(json!({
                "request-id": "r1",
                "destination": "22660000000",
                "amount": 10,
                "remarks": "22660000000|1700000000|10",
                "message": "PAYMENT OF 10 TO ABC PLEASE CONFIRM WITH PIN",
                "extended-data": {
                    "ext2": "CUSTOM STRING",
                    "custommessge": "Payment for XXXX"
                }
            }))
        );
    }

    #[tokio::test]
    async fn test_headers_carry_auth_and_command_id() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        client.transfer(&tx()).await.unwrap();

        let req = &client.transport().sent()[0];
        assert_eq!(
            req.headers,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Basic dTpw".to_string()),
                (
                    "command-id".to_string(),
                    "transfer-api-transaction".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_transfer_body() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let op = client.build_transfer(&tx()).unwrap();

        assert_eq!(op.command_id, CommandId::Transfer);
        assert_eq!(
            op.body["message"],
            "TRANSFERT OF 10 TO ABC PLEASE CONFIRM WITH PIN"
        );
        assert_eq!(op.body["extended-data"]["custommessge"], "Transfert for XXXX");
    }

    #[test]
    fn test_cross_transfer_body_has_no_message() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let op = client.build_cross_transfer(&tx()).unwrap();

        assert_eq!(op.header("command-id"), Some("xcash-api-transaction"));
        assert!(op.body.get("message").is_none());
        assert_eq!(
            op.body["extended-data"],
            json!({"ext2": "CUSTOM STRING", "custommessge": "Cross Transfert for XXXX"})
        );
        assert_eq!(op.body["remarks"], "22660000000|1700000000|10");
    }

    #[test]
    fn test_auto_debit_echoes_request_id() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let op = client.build_auto_debit(&tx()).unwrap();

        assert_eq!(op.header("command-id"), Some("auto-debit-async"));
        assert_eq!(
            op.body["extended-data"],
            json!({"trans-id": "r1", "priority": 1})
        );
    }

    #[test]
    fn test_account_status_body() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let op = client.build_account_status("22670000000").unwrap();

        assert_eq!(op.header("command-id"), Some("process-check-subscriber"));
        assert_eq!(
            op.body,
            json!({
                "destination": "22670000000",
                "request-id": "check_22670000000|1700000000"
            })
        );
    }

    #[test]
    fn test_transaction_status_body() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let op = client.build_transaction_status("r42").unwrap();

        assert_eq!(op.header("command-id"), Some("process-check-transaction"));
        assert_eq!(op.body, json!({"request-id": "r42"}));
    }

    #[tokio::test]
    async fn test_subscriber_registration_defaults_every_field() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        client
            .subscriber_registration("r1", &SubscriberDetails::default())
            .await
            .unwrap();

        let body = client.transport().sent()[0].body.clone().unwrap();
        assert_eq!(body["request-id"], "r1");
        let extended = body["extended-data"].as_object().unwrap();
        assert_eq!(extended.len(), 23);
        assert!(extended.values().all(|v| v == "string"));
    }

    #[test]
    fn test_subscriber_registration_keeps_supplied_fields() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let details = SubscriberDetails {
            firstname: Some("Awa".into()),
            country: Some("BF".into()),
            ..Default::default()
        };
        let op = client.build_subscriber_registration("r1", &details).unwrap();

        assert_eq!(op.body["extended-data"]["firstname"], "Awa");
        assert_eq!(op.body["extended-data"]["country"], "BF");
        assert_eq!(op.body["extended-data"]["lastname"], "string");
    }

    #[test]
    fn test_string_amount_is_echoed_verbatim() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        let op = client
            .build_payment(&TransactionRequest::new("1500", "r1", "226"))
            .unwrap();

        assert_eq!(op.body["amount"], "1500");
        assert_eq!(op.body["remarks"], "226|1700000000|1500");
    }

    #[test]
    fn test_parsed_amount_keeps_caller_formatting() {
        let client = client(ScriptedTransport::replying(200, "{}"));
        for text in ["10.50", "12345678901234567890"] {
            let amount: Amount = text.parse().unwrap();
            let op = client
                .build_payment(&TransactionRequest::new(amount, "r1", "226"))
                .unwrap();

            assert_eq!(op.body["amount"], text);
            assert_eq!(op.body["remarks"], format!("226|1700000000|{text}"));
            assert_eq!(
                op.body["message"],
                format!("PAYMENT OF {text} TO ABC PLEASE CONFIRM WITH PIN")
            );
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Response normalization
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_client_error_is_returned_as_response() {
        let client = client(ScriptedTransport::replying(404, "not found"));

        let resp = client.transaction_status("r1").await.unwrap();

        assert_eq!(resp.status_code, 404);
        assert_eq!(resp.content, Content::Text("not found".into()));
    }

    #[tokio::test]
    async fn test_server_error_is_an_error() {
        let client = client(ScriptedTransport::replying(500, "boom"));

        let result = client.account_status("226").await;

        assert_eq!(legacy::to_legacy_value(&result), json!({"error": "Server Error: boom"}));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Server);
    }

    #[tokio::test]
    async fn test_connection_failure_is_request_failed() {
        let client = client(ScriptedTransport::failing(TransportError::NoResponse(
            "connection refused".into(),
        )));

        let err = client.auto_debit(&tx()).await.unwrap_err();

        assert_eq!(err, GatewayError::RequestFailed("connection refused".into()));
        assert_eq!(client.transport().sent().len(), 1);
    }

    #[tokio::test]
    async fn test_other_transport_failure_is_generic_request_error() {
        let client = client(ScriptedTransport::failing(TransportError::Other(
            "body truncated".into(),
        )));

        let err = client.payment(&tx()).await.unwrap_err();

        assert_eq!(err.to_string(), "Error in request: body truncated");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Logging
    // ─────────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_logs_one_info_line_per_call() {
        let logger = Arc::new(RecordingLogger::default());
        let client = client(ScriptedTransport::replying(200, "{}")).with_logger(logger.clone());

        client.payment(&tx()).await.unwrap();

        assert_eq!(
            logger.lines(),
            vec![("info", "Payment method called".to_string())]
        );
    }

    #[tokio::test]
    async fn test_logs_error_line_on_failure() {
        let logger = Arc::new(RecordingLogger::default());
        let client = client(ScriptedTransport::replying(502, "bad gateway")).with_logger(logger.clone());

        let _ = client.cross_transfer(&tx()).await;

        assert_eq!(
            logger.lines(),
            vec![
                ("info", "Xtransfert method called".to_string()),
                (
                    "error",
                    "Error in Xtransfert method: Server Error: bad gateway".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_validation_failure_logs_only_the_error() {
        let logger = Arc::new(RecordingLogger::default());
        let client = client(ScriptedTransport::replying(200, "{}")).with_logger(logger.clone());

        let _ = client.transaction_status("").await;

        assert_eq!(
            logger.lines(),
            vec![(
                "error",
                "Error in TransactionStatus method: Missing required key(s): requestId"
                    .to_string()
            )]
        );
    }

    #[test]
    fn test_executor_url_join() {
        let client = MobileMoneyClient::with_transport(
            Credentials::new("https://gateway.test/", "u", "p").unwrap(),
            ScriptedTransport::replying(200, "{}"),
        );
        assert_eq!(client.credentials().base_url(), "https://gateway.test/");

        let executor = crate::RequestExecutor::new(
            "https://gateway.test/",
            ScriptedTransport::replying(200, "{}"),
        );
        assert_eq!(executor.base_url(), "https://gateway.test/");
        assert_eq!(executor.url_for(""), "https://gateway.test/");
        assert_eq!(executor.url_for("/status"), "https://gateway.test/status");
    }
}
