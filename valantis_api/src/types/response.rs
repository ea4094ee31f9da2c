use serde::Deserialize;

/// Success envelope returned by every action.
///
/// The payload lives under `result`; a response that parses but carries no
/// `result` field is treated as a protocol violation by the client.
#[derive(Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
}
