//! JSON-lines request protocol.
//!
//! One request object per line, tagged by `op`:
//!
//! ```text
//! {"op":"create","num_nodes":10,"edge_probability":0.3,"seed":7}
//! {"op":"read","network_id":"..."}
//! {"op":"update","network_id":"...","hue_influence":0.2,"steps":3}
//! ```
//!
//! Each request yields exactly one response line: a `NetworkResponse` on
//! success or an `ErrorResponse` on failure.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::service::{CreateRequest, NetworkService, UpdateRequest};
use crate::snapshot::{ErrorResponse, NetworkResponse};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Create(CreateRequest),
    Read {
        network_id: String,
    },
    Update {
        network_id: String,
        #[serde(flatten)]
        params: UpdateRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Network(NetworkResponse),
    Error(ErrorResponse),
}

impl From<AppResult<NetworkResponse>> for Response {
    fn from(result: AppResult<NetworkResponse>) -> Self {
        match result {
            Ok(network) => Response::Network(network),
            Err(err) => Response::Error(ErrorResponse::from(&err)),
        }
    }
}

/// Dispatch one parsed request.
pub fn dispatch(service: &NetworkService, request: &Request) -> Response {
    let result = match request {
        Request::Create(params) => service.create(params),
        Request::Read { network_id } => service.read(network_id),
        Request::Update { network_id, params } => service.update(network_id, params),
    };
    if let Err(err) = &result {
        tracing::warn!(error = %err, "request failed");
    }
    Response::from(result)
}

/// Parse one line, dispatch it and return the response line (without a
/// trailing newline).
pub fn handle_line(service: &NetworkService, line: &str) -> AppResult<String> {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(service, &request),
        Err(e) => {
            let err = AppError::BadRequest(e.to_string());
            tracing::warn!(error = %err, "malformed request");
            Response::Error(ErrorResponse::from(&err))
        }
    };
    Ok(serde_json::to_string(&response)?)
}
