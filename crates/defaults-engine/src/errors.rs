use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("cannot parse admission review body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("admission review does not contain a request")]
    MissingRequest,

    #[error("admission request does not contain a uid")]
    MissingUid,

    #[error("admission request does not contain an object")]
    MissingObject,
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("cannot serialize patch operations: {0}")]
    Serialize(#[from] serde_json::Error),
}
