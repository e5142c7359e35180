//! Registry client: resolve service names and invoke methods on them.

use minirpc_server::{
    infrastructure::dto::{
        http::ServiceBindingDto,
        rpc::{RpcErrorBody, RpcErrorKind, RpcResponse},
    },
    ui::REQUEST_ID_HEADER,
};
use reqwest::{Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use uuid::Uuid;

use crate::error::RpcError;

/// Default rendezvous point of the server registry
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:1099";

/// Connection to a server's service registry
#[derive(Debug, Clone)]
pub struct Registry {
    http: reqwest::Client,
    base_url: String,
}

impl Registry {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `name` to a callable handle.
    ///
    /// # Errors
    ///
    /// `RpcError::Communication` when the server is unreachable or nothing is
    /// bound under `name`.
    pub async fn lookup(&self, name: &str) -> Result<ServiceHandle, RpcError> {
        let url = format!("{}/api/services/{}", self.base_url, name);
        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RpcError::Communication(format!(
                "Service not bound: {name}"
            )));
        }
        let binding: ServiceBindingDto = decode_success(response).await?;
        debug!("Resolved {} ({} methods)", binding.name, binding.methods.len());

        Ok(ServiceHandle {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            binding,
        })
    }

    /// List every service bound on the server.
    pub async fn list(&self) -> Result<Vec<ServiceBindingDto>, RpcError> {
        let url = format!("{}/api/services", self.base_url);
        let response = self.http.get(url).send().await?;
        decode_success(response).await
    }
}

/// A resolved service, ready to be invoked
#[derive(Debug, Clone)]
pub struct ServiceHandle {
    http: reqwest::Client,
    base_url: String,
    binding: ServiceBindingDto,
}

impl ServiceHandle {
    /// Invoke `method` with `args` and decode its result.
    pub async fn call<A, R>(&self, method: &str, args: &A) -> Result<R, RpcError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/rpc/{}/{}", self.base_url, self.binding.name, method);
        let request_id = Uuid::new_v4().to_string();
        debug!(request_id = %request_id, "Calling {}.{}", self.binding.name, method);

        let response = self
            .http
            .post(url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(args)
            .send()
            .await?;

        let envelope: RpcResponse<R> = decode_success(response).await?;
        Ok(envelope.result)
    }
}

/// Decode a success body, or turn an error reply into an `RpcError`.
async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<T, RpcError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| RpcError::Communication(format!("Malformed response: {e}")));
    }

    match response.json::<RpcErrorBody>().await {
        Ok(RpcErrorBody { error }) if error.kind == RpcErrorKind::InvalidInput => {
            Err(RpcError::InvalidInput(error.message))
        }
        Ok(RpcErrorBody { error }) => Err(RpcError::Communication(error.message)),
        Err(_) => Err(RpcError::Communication(format!(
            "Unexpected response status {status}"
        ))),
    }
}
