use crate::adapter::{TxAdapter, TxRequest};
use crate::error::{ErrorCode, RequestError};
use crate::pipeline::{Endpoint, RequestParams};
use crate::registry::{HttpMethod, HttpStatus};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::convert::TryFrom;

/// Trait implemented by typed handlers.
///
/// A handler receives a [`TypedHandlerRequest`] whose `data` has already been
/// converted from the validated [`RequestParams`], and returns a serializable
/// response routed through the endpoint's declared shape for
/// [`Handler::status`].
pub trait Handler: Send + Sync {
    /// The typed request data (converted from validated request params).
    type Request: TryFrom<RequestParams, Error = anyhow::Error> + Send + 'static;
    /// The typed response body (serialized to JSON).
    type Response: Serialize + Send + 'static;

    /// The status this handler responds with. Must be one of the endpoint's
    /// declared response shapes.
    fn status(&self) -> HttpStatus {
        HttpStatus::Ok
    }

    /// Handle a typed request.
    fn handle(&self, req: TypedHandlerRequest<Self::Request>) -> anyhow::Result<Self::Response>;
}

/// Typed request data passed to a [`Handler`].
#[derive(Debug, Clone)]
pub struct TypedHandlerRequest<T> {
    pub method: HttpMethod,
    /// Concrete request path.
    pub path: String,
    /// Converted, validated request data.
    pub data: T,
}

/// Deserialize the validated body into a concrete type.
///
/// Convenience for `TryFrom<RequestParams>` implementations whose data lives
/// entirely in the body.
pub fn from_body<T: DeserializeOwned>(params: &RequestParams) -> anyhow::Result<T> {
    Ok(serde_json::from_value(params.body.clone())?)
}

impl Endpoint {
    /// Dispatch through a typed [`Handler`].
    ///
    /// Runs the usual pipeline, converts the validated params into the
    /// handler's request type (a conversion failure is reported as
    /// `failed-to-parse-request`), serializes the handler's response, and
    /// routes it through the declared shape for the handler's status.
    pub fn dispatch_typed<H, A>(&self, req: &dyn TxRequest, adapter: &A, handler: &H) -> A::Response
    where
        H: Handler,
        A: TxAdapter,
    {
        self.dispatch(req, adapter, |args| {
            let data = H::Request::try_from(args.params.clone())
                .map_err(|e| RequestError::new(ErrorCode::FailedToParseRequest, e.to_string()))?;
            let typed = TypedHandlerRequest {
                method: args.method,
                path: args.path.clone(),
                data,
            };
            let response = handler.handle(typed)?;
            let body = serde_json::to_value(response)?;
            Ok(args.generators.respond(handler.status(), body)?)
        })
    }
}
