pub type CodecResult<T> = Result<T, CodecError>;

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("fragment is empty")]
    Empty,

    #[error("fragment is not base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded fragment is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("percent-decoding failed: {0}")]
    Percent(String),

    #[error("payload is not json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a json object")]
    NotAnObject,

    #[error("serialization error: {0}")]
    Serialize(String),
}
