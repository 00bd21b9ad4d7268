//! Mobile-money gateway client.
//!
//! Every operation is a thin builder over the shared `RequestExecutor`:
//! validate the input, build the body and headers for its command, send,
//! and return the normalized result. Builders are public so a request can be
//! inspected without performing any I/O.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};

use momo_types::domain::command::COMMAND_ID_HEADER;
use momo_types::{
    Clock, CommandId, Credentials, GatewayError, GatewayLogger, HttpMethod, HttpTransport,
    NoopLogger, OperationRequest, OperationResult, SubscriberDetails, SystemClock,
    TransactionRequest, ValidTransaction,
};

use crate::auth::basic_auth;
use crate::executor::RequestExecutor;
use crate::transport::ReqwestTransport;

/// Fixed `ext2` value the gateway expects on money-moving calls.
const EXT2: &str = "CUSTOM STRING";

/// Client for one gateway account.
///
/// Generic over `T: HttpTransport` - the transport is injected at compile
/// time. Holds no mutable state, so one instance can serve concurrent calls.
pub struct MobileMoneyClient<T: HttpTransport = ReqwestTransport> {
    credentials: Credentials,
    executor: RequestExecutor<T>,
    logger: Arc<dyn GatewayLogger>,
    clock: Arc<dyn Clock>,
}

impl MobileMoneyClient<ReqwestTransport> {
    /// Creates a client that talks HTTP with reqwest's default timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, ReqwestTransport::new())
    }

    /// Creates a client whose calls give up after `timeout`.
    pub fn with_timeout(credentials: Credentials, timeout: Duration) -> Result<Self, GatewayError> {
        let transport = ReqwestTransport::with_timeout(timeout)?;
        Ok(Self::with_transport(credentials, transport))
    }
}

impl<T: HttpTransport> MobileMoneyClient<T> {
    /// Creates a client over any transport, logging nowhere.
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        let executor = RequestExecutor::new(credentials.base_url(), transport);
        Self {
            credentials,
            executor,
            logger: Arc::new(NoopLogger),
            clock: Arc::new(SystemClock),
        }
    }

    /// Sets the log sink.
    pub fn with_logger(mut self, logger: Arc<dyn GatewayLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Sets the time source used for `remarks` and status request ids.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        self.executor.transport()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Collects `amount` from `destination` (USSD confirmation).
    pub async fn payment(&self, data: &TransactionRequest) -> OperationResult {
        self.run(CommandId::Payment, self.build_payment(data)).await
    }

    /// Sends `amount` to `destination`.
    pub async fn transfer(&self, data: &TransactionRequest) -> OperationResult {
        self.run(CommandId::Transfer, self.build_transfer(data)).await
    }

    /// Sends `amount` to a subscriber of another operator.
    pub async fn cross_transfer(&self, data: &TransactionRequest) -> OperationResult {
        self.run(CommandId::CrossTransfer, self.build_cross_transfer(data))
            .await
    }

    /// Debits `destination` without interactive confirmation.
    pub async fn auto_debit(&self, data: &TransactionRequest) -> OperationResult {
        self.run(CommandId::AutoDebit, self.build_auto_debit(data)).await
    }

    /// Checks the account behind a phone number.
    pub async fn account_status(&self, phone_number: &str) -> OperationResult {
        self.run(
            CommandId::AccountStatus,
            self.build_account_status(phone_number),
        )
        .await
    }

    /// Checks the state of an earlier transaction.
    pub async fn transaction_status(&self, request_id: &str) -> OperationResult {
        self.run(
            CommandId::TransactionStatus,
            self.build_transaction_status(request_id),
        )
        .await
    }

    /// Registers a subscriber; absent details are sent as placeholders.
    pub async fn subscriber_registration(
        &self,
        request_id: &str,
        details: &SubscriberDetails,
    ) -> OperationResult {
        self.run(
            CommandId::SubscriberRegistration,
            self.build_subscriber_registration(request_id, details),
        )
        .await
    }

    /// Sends an already built request.
    pub async fn dispatch(&self, request: OperationRequest) -> OperationResult {
        self.executor
            .execute(
                HttpMethod::Post,
                "",
                Some(request.body),
                request.headers,
                true,
            )
            .await
    }

    async fn run(
        &self,
        command: CommandId,
        built: Result<OperationRequest, GatewayError>,
    ) -> OperationResult {
        let name = command.operation_name();
        let result = match built {
            Ok(request) => {
                self.logger.info(&format!("{} method called", name));
                self.dispatch(request).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            self.logger
                .error(&format!("Error in {} method: {}", name, e));
        }
        result
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Request builders (no I/O)
    // ─────────────────────────────────────────────────────────────────────────────

    pub fn build_payment(
        &self,
        data: &TransactionRequest,
    ) -> Result<OperationRequest, GatewayError> {
        let tx = data.validate()?;
        let body = self.money_body(
            &tx,
            Some(format!(
                "PAYMENT OF {} TO ABC PLEASE CONFIRM WITH PIN",
                tx.amount
            )),
            json!({
                "ext2": EXT2,
                "custommessge": "Payment for XXXX",
            }),
        );
        Ok(self.operation(CommandId::Payment, body))
    }

    pub fn build_transfer(
        &self,
        data: &TransactionRequest,
    ) -> Result<OperationRequest, GatewayError> {
        let tx = data.validate()?;
        let body = self.money_body(
            &tx,
            Some(format!(
                "TRANSFERT OF {} TO ABC PLEASE CONFIRM WITH PIN",
                tx.amount
            )),
            json!({
                "ext2": EXT2,
                "custommessge": "Transfert for XXXX",
            }),
        );
        Ok(self.operation(CommandId::Transfer, body))
    }

    pub fn build_cross_transfer(
        &self,
        data: &TransactionRequest,
    ) -> Result<OperationRequest, GatewayError> {
        let tx = data.validate()?;
        let body = self.money_body(
            &tx,
            None,
            json!({
                "ext2": EXT2,
                "custommessge": "Cross Transfert for XXXX",
            }),
        );
        Ok(self.operation(CommandId::CrossTransfer, body))
    }

    /// `trans-id` echoes the caller's `request-id`.
    pub fn build_auto_debit(
        &self,
        data: &TransactionRequest,
    ) -> Result<OperationRequest, GatewayError> {
        let tx = data.validate()?;
        let body = self.money_body(
            &tx,
            None,
            json!({
                "trans-id": tx.request_id,
                "priority": 1,
            }),
        );
        Ok(self.operation(CommandId::AutoDebit, body))
    }

    pub fn build_account_status(
        &self,
        phone_number: &str,
    ) -> Result<OperationRequest, GatewayError> {
        if phone_number.trim().is_empty() {
            return Err(GatewayError::missing("phoneNumber"));
        }
        let body = json!({
            "destination": phone_number,
            "request-id": format!("check_{}|{}", phone_number, self.clock.unix_timestamp()),
        });
        Ok(self.operation(CommandId::AccountStatus, body))
    }

    pub fn build_transaction_status(
        &self,
        request_id: &str,
    ) -> Result<OperationRequest, GatewayError> {
        if request_id.trim().is_empty() {
            return Err(GatewayError::missing("requestId"));
        }
        let body = json!({ "request-id": request_id });
        Ok(self.operation(CommandId::TransactionStatus, body))
    }

    pub fn build_subscriber_registration(
        &self,
        request_id: &str,
        details: &SubscriberDetails,
    ) -> Result<OperationRequest, GatewayError> {
        if request_id.trim().is_empty() {
            return Err(GatewayError::missing("requestId"));
        }
        let body = json!({
            "request-id": request_id,
            "extended-data": details.to_extended_data(),
        });
        Ok(self.operation(CommandId::SubscriberRegistration, body))
    }

    fn money_body(
        &self,
        tx: &ValidTransaction<'_>,
        message: Option<String>,
        extended_data: Value,
    ) -> Value {
        let mut body = json!({
            "request-id": tx.request_id,
            "destination": tx.destination,
            "amount": tx.amount,
            "remarks": tx.remarks(self.clock.unix_timestamp()),
            "extended-data": extended_data,
        });
        if let Some(message) = message {
            body["message"] = Value::String(message);
        }
        body
    }

    fn operation(&self, command_id: CommandId, body: Value) -> OperationRequest {
        OperationRequest {
            command_id,
            headers: self.headers(command_id),
            body,
        }
    }

    /// Authorization is recomputed on every call.
    fn headers(&self, command_id: CommandId) -> Vec<(String, String)> {
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                "Authorization".to_string(),
                basic_auth(self.credentials.username(), self.credentials.password()),
            ),
            (COMMAND_ID_HEADER.to_string(), command_id.as_str().to_string()),
        ]
    }
}
