use crate::api_error::ResponseError;
use serde::Serialize;

/// Summary of the result of a request previously sent to the point of sale
/// app, decoded from the callback URL the app opened in response.
///
/// Immutable value type. Instances are only ever produced by
/// [`ApiResponse::from_url`]; a response is either a success or an error,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "state", skip_serializing_if = "Option::is_none")]
    user_info_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offline_payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_transaction_id: Option<String>,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
enum Outcome {
    #[serde(rename = "ok")]
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        payment_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        transaction_id: Option<String>,
    },
    #[serde(rename = "error")]
    Failure { error: ResponseError },
}

impl ApiResponse {
    pub(crate) fn success(
        user_info_string: Option<String>,
        offline_payment_id: Option<String>,
        client_transaction_id: Option<String>,
        payment_id: Option<String>,
        transaction_id: Option<String>,
    ) -> ApiResponse {
        ApiResponse {
            user_info_string,
            offline_payment_id,
            client_transaction_id,
            outcome: Outcome::Success {
                payment_id,
                transaction_id,
            },
        }
    }

    pub(crate) fn failure(
        user_info_string: Option<String>,
        offline_payment_id: Option<String>,
        client_transaction_id: Option<String>,
        error: ResponseError,
    ) -> ApiResponse {
        ApiResponse {
            user_info_string,
            offline_payment_id,
            client_transaction_id,
            outcome: Outcome::Failure { error },
        }
    }

    /// The value provided for the user info string in the original request,
    /// if any. Available even if the request failed.
    pub fn user_info_string(&self) -> Option<&str> {
        self.user_info_string.as_deref()
    }

    /// Details of the API error that occurred during the payment request,
    /// if any.
    pub fn error(&self) -> Option<&ResponseError> {
        match &self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure { error } => Some(error),
        }
    }

    /// False if this response contains an error, otherwise true.
    pub fn is_success(&self) -> bool {
        self.error().is_none()
    }

    /// The unique ID of the processed payment, if the payment succeeded.
    /// Not set for payments processed in offline mode.
    #[deprecated(
        note = "Pass transaction_id() to the transactions API to retrieve the full transaction instead. This field will be removed in a later version."
    )]
    pub fn payment_id(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success { payment_id, .. } => payment_id.as_deref(),
            Outcome::Failure { .. } => None,
        }
    }

    /// The payment's offline ID, generated in case the payment needed to be
    /// processed in offline mode. Present even if the payment was not
    /// processed in offline mode.
    #[deprecated(
        note = "Pass transaction_id() to the transactions API to retrieve the full transaction instead. This field will be removed in a later version."
    )]
    pub fn offline_payment_id(&self) -> Option<&str> {
        self.offline_payment_id.as_deref()
    }

    /// The ID of the transaction, generated by the server. Use this value to
    /// retrieve the details of the transaction from the transactions API.
    /// May be absent for offline or asynchronous transactions.
    pub fn transaction_id(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success { transaction_id, .. } => transaction_id.as_deref(),
            Outcome::Failure { .. } => None,
        }
    }

    /// The client ID of the transaction, generated by the point of sale app
    /// for bookkeeping purposes, in case the transaction cannot immediately
    /// be completed. For transactions done in offline mode or asynchronously
    /// (e.g. cash tenders), the server-generated `transaction_id` may not be
    /// available immediately; use this value to cross-reference the response
    /// with transactions retrieved later.
    pub fn client_transaction_id(&self) -> Option<&str> {
        self.client_transaction_id.as_deref()
    }
}
