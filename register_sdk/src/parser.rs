use crate::api_error::ResponseError;
use crate::api_response::ApiResponse;
use crate::register_error::{MalformedResponse, RegisterError};
use log::debug;
use snafu::OptionExt;
use std::collections::HashMap;
use url::Url;

// Query string contract with the point of sale app. The key names below are
// fixed by the app's callback schema and must stay byte-for-byte compatible
// with it.
pub(crate) const STATUS_KEY: &str = "status";
pub(crate) const STATUS_OK: &str = "ok";
pub(crate) const STATUS_ERROR: &str = "error";
pub(crate) const USER_INFO_KEY: &str = "state";
pub(crate) const PAYMENT_ID_KEY: &str = "payment_id";
pub(crate) const OFFLINE_PAYMENT_ID_KEY: &str = "offline_payment_id";
pub(crate) const TRANSACTION_ID_KEY: &str = "transaction_id";
pub(crate) const CLIENT_TRANSACTION_ID_KEY: &str = "client_transaction_id";
pub(crate) const ERROR_CODE_KEY: &str = "error_code";
pub(crate) const ERROR_DESCRIPTION_KEY: &str = "error_description";

impl ApiResponse {
    /// Decodes a callback URL received from the point of sale app.
    ///
    /// Returns the fully populated response when the URL carries a
    /// well-formed success or error payload, otherwise
    /// [`RegisterError::MalformedResponse`]. Decoding is deterministic:
    /// parsing the same URL twice yields equal responses. If the query
    /// string repeats a key, the first occurrence wins.
    pub fn from_url(url: &Url) -> Result<ApiResponse, RegisterError> {
        if url.query().is_none() {
            return MalformedResponse {
                reason: "callback URL carries no query string",
            }
            .fail();
        }

        let mut params: HashMap<String, String> = HashMap::new();
        for (key, value) in url.query_pairs() {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        let status = params.remove(STATUS_KEY).context(MalformedResponse {
            reason: format!("response is missing the {} parameter", STATUS_KEY),
        })?;

        let user_info_string = params.remove(USER_INFO_KEY);
        let offline_payment_id = params.remove(OFFLINE_PAYMENT_ID_KEY);
        let client_transaction_id = params.remove(CLIENT_TRANSACTION_ID_KEY);

        match status.as_str() {
            STATUS_OK => {
                debug!("Decoded success response from point of sale callback");
                Ok(ApiResponse::success(
                    user_info_string,
                    offline_payment_id,
                    client_transaction_id,
                    params.remove(PAYMENT_ID_KEY),
                    params.remove(TRANSACTION_ID_KEY),
                ))
            }
            STATUS_ERROR => {
                let code = params.remove(ERROR_CODE_KEY).context(MalformedResponse {
                    reason: format!("error response is missing the {} parameter", ERROR_CODE_KEY),
                })?;
                debug!("Decoded error response from point of sale callback: {}", code);
                Ok(ApiResponse::failure(
                    user_info_string,
                    offline_payment_id,
                    client_transaction_id,
                    ResponseError::new(code, params.remove(ERROR_DESCRIPTION_KEY)),
                ))
            }
            other => MalformedResponse {
                reason: format!("unrecognized {} value: {}", STATUS_KEY, other),
            }
            .fail(),
        }
    }
}
