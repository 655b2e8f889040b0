use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub(crate)")]
pub enum RegisterError {
    /// The callback URL could not be decoded into a well-formed success or
    /// error response. No partial response is ever returned alongside this.
    #[snafu(display("Malformed point of sale response: {}", reason))]
    MalformedResponse { reason: String },
}

pub type RegisterResult<T> = Result<T, RegisterError>;
