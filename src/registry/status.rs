use super::BodyCardinality;

/// Response status category. Every status belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Success,
    Redirect,
    ClientError,
    ServerError,
}

impl StatusCategory {
    /// Wire form used in normalized response payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::Success => "SUCCESS",
            StatusCategory::Redirect => "REDIRECT",
            StatusCategory::ClientError => "CLIENT_ERROR",
            StatusCategory::ServerError => "SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported HTTP response statuses.
///
/// Closed enumeration; [`status_descriptor`] is total over it. Variants are
/// declared in ascending numeric order, matching the descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpStatus {
    Ok,
    Created,
    Accepted,
    NonAuthoritativeInformation,
    NoContent,
    ResetContent,
    PartialContent,
    MultiStatus,
    AlreadyReported,
    ImUsed,
    MultipleChoices,
    MovedPermanently,
    Found,
    SeeOther,
    NotModified,
    UseProxy,
    TemporaryRedirect,
    PermanentRedirect,
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    ProxyAuthenticationRequired,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    PayloadTooLarge,
    UriTooLong,
    UnsupportedMediaType,
    RangeNotSatisfiable,
    ExpectationFailed,
    MisdirectedRequest,
    UnprocessableEntity,
    Locked,
    FailedDependency,
    TooEarly,
    UpgradeRequired,
    PreconditionRequired,
    TooManyRequests,
    RequestHeaderFieldsTooLarge,
    UnavailableForLegalReasons,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    HttpVersionNotSupported,
    VariantAlsoNegotiates,
    InsufficientStorage,
    LoopDetected,
    NotExtended,
    NetworkAuthenticationRequired,
}

impl HttpStatus {
    /// Number of supported statuses (descriptor table length).
    pub const COUNT: usize = 57;

    /// Symbolic name used in payloads and status lines (`"OK"`, `"NOT_FOUND"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Numeric status code.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.descriptor().code
    }

    /// Category of this status.
    #[must_use]
    pub fn category(&self) -> StatusCategory {
        self.descriptor().category
    }

    /// Descriptor lookup shortcut for [`status_descriptor`].
    #[must_use]
    pub fn descriptor(&self) -> &'static StatusDescriptor {
        status_descriptor(*self)
    }

    /// Reverse lookup by numeric code.
    #[must_use]
    pub fn from_code(code: u16) -> Option<HttpStatus> {
        STATUS_TABLE
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.status)
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed per-status properties: numeric code, category, response-body
/// cardinality, and the header keys the status requires or permits beyond the
/// always-allowed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub status: HttpStatus,
    pub name: &'static str,
    pub code: u16,
    pub category: StatusCategory,
    pub body: BodyCardinality,
    pub optional_headers: &'static [&'static str],
    pub required_headers: &'static [&'static str],
}

const fn desc(
    status: HttpStatus,
    name: &'static str,
    code: u16,
    category: StatusCategory,
    body: BodyCardinality,
    optional_headers: &'static [&'static str],
    required_headers: &'static [&'static str],
) -> StatusDescriptor {
    StatusDescriptor {
        status,
        name,
        code,
        category,
        body,
        optional_headers,
        required_headers,
    }
}

// Table order must match the discriminant order of `HttpStatus`; checked by
// the registry tests.
static STATUS_TABLE: [StatusDescriptor; HttpStatus::COUNT] = {
    use BodyCardinality::{Never, Optional, Required};
    use HttpStatus as S;
    use StatusCategory::{ClientError, Redirect, ServerError, Success};
    [
        desc(S::Ok, "OK", 200, Success, Required, &["etag"], &[]),
        desc(S::Created, "CREATED", 201, Success, Required, &["etag"], &["location"]),
        desc(S::Accepted, "ACCEPTED", 202, Success, Optional, &[], &[]),
        desc(
            S::NonAuthoritativeInformation,
            "NON_AUTHORITATIVE_INFORMATION",
            203,
            Success,
            Required,
            &[],
            &[],
        ),
        desc(S::NoContent, "NO_CONTENT", 204, Success, Never, &["etag"], &[]),
        desc(S::ResetContent, "RESET_CONTENT", 205, Success, Never, &[], &[]),
        desc(
            S::PartialContent,
            "PARTIAL_CONTENT",
            206,
            Success,
            Required,
            &[],
            &["content-range"],
        ),
        desc(S::MultiStatus, "MULTI_STATUS", 207, Success, Required, &[], &[]),
        desc(S::AlreadyReported, "ALREADY_REPORTED", 208, Success, Optional, &[], &[]),
        desc(S::ImUsed, "IM_USED", 226, Success, Required, &[], &[]),
        desc(S::MultipleChoices, "MULTIPLE_CHOICES", 300, Redirect, Optional, &[], &[]),
        desc(
            S::MovedPermanently,
            "MOVED_PERMANENTLY",
            301,
            Redirect,
            Optional,
            &[],
            &["location"],
        ),
        desc(S::Found, "FOUND", 302, Redirect, Optional, &[], &["location"]),
        desc(S::SeeOther, "SEE_OTHER", 303, Redirect, Optional, &[], &["location"]),
        desc(S::NotModified, "NOT_MODIFIED", 304, Redirect, Never, &[], &[]),
        desc(S::UseProxy, "USE_PROXY", 305, Redirect, Optional, &[], &["location"]),
        desc(
            S::TemporaryRedirect,
            "TEMPORARY_REDIRECT",
            307,
            Redirect,
            Optional,
            &[],
            &["location"],
        ),
        desc(
            S::PermanentRedirect,
            "PERMANENT_REDIRECT",
            308,
            Redirect,
            Optional,
            &[],
            &["location"],
        ),
        desc(S::BadRequest, "BAD_REQUEST", 400, ClientError, Required, &[], &[]),
        desc(
            S::Unauthorized,
            "UNAUTHORIZED",
            401,
            ClientError,
            Required,
            &[],
            &["www-authenticate"],
        ),
        desc(S::PaymentRequired, "PAYMENT_REQUIRED", 402, ClientError, Required, &[], &[]),
        desc(S::Forbidden, "FORBIDDEN", 403, ClientError, Required, &[], &[]),
        desc(S::NotFound, "NOT_FOUND", 404, ClientError, Required, &[], &[]),
        desc(
            S::MethodNotAllowed,
            "METHOD_NOT_ALLOWED",
            405,
            ClientError,
            Required,
            &[],
            &["allow"],
        ),
        desc(S::NotAcceptable, "NOT_ACCEPTABLE", 406, ClientError, Required, &[], &[]),
        desc(
            S::ProxyAuthenticationRequired,
            "PROXY_AUTHENTICATION_REQUIRED",
            407,
            ClientError,
            Required,
            &[],
            &["proxy-authenticate"],
        ),
        desc(S::RequestTimeout, "REQUEST_TIMEOUT", 408, ClientError, Optional, &[], &[]),
        desc(S::Conflict, "CONFLICT", 409, ClientError, Required, &[], &[]),
        desc(S::Gone, "GONE", 410, ClientError, Required, &[], &[]),
        desc(S::LengthRequired, "LENGTH_REQUIRED", 411, ClientError, Required, &[], &[]),
        desc(
            S::PreconditionFailed,
            "PRECONDITION_FAILED",
            412,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(S::PayloadTooLarge, "PAYLOAD_TOO_LARGE", 413, ClientError, Required, &[], &[]),
        desc(S::UriTooLong, "URI_TOO_LONG", 414, ClientError, Required, &[], &[]),
        desc(
            S::UnsupportedMediaType,
            "UNSUPPORTED_MEDIA_TYPE",
            415,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::RangeNotSatisfiable,
            "RANGE_NOT_SATISFIABLE",
            416,
            ClientError,
            Required,
            &[],
            &["content-range"],
        ),
        desc(
            S::ExpectationFailed,
            "EXPECTATION_FAILED",
            417,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::MisdirectedRequest,
            "MISDIRECTED_REQUEST",
            421,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::UnprocessableEntity,
            "UNPROCESSABLE_ENTITY",
            422,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(S::Locked, "LOCKED", 423, ClientError, Required, &[], &[]),
        desc(
            S::FailedDependency,
            "FAILED_DEPENDENCY",
            424,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(S::TooEarly, "TOO_EARLY", 425, ClientError, Required, &[], &[]),
        desc(
            S::UpgradeRequired,
            "UPGRADE_REQUIRED",
            426,
            ClientError,
            Required,
            &[],
            &["upgrade"],
        ),
        desc(
            S::PreconditionRequired,
            "PRECONDITION_REQUIRED",
            428,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::TooManyRequests,
            "TOO_MANY_REQUESTS",
            429,
            ClientError,
            Required,
            &[],
            &["retry-after"],
        ),
        desc(
            S::RequestHeaderFieldsTooLarge,
            "REQUEST_HEADER_FIELDS_TOO_LARGE",
            431,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::UnavailableForLegalReasons,
            "UNAVAILABLE_FOR_LEGAL_REASONS",
            451,
            ClientError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::InternalServerError,
            "INTERNAL_SERVER_ERROR",
            500,
            ServerError,
            Required,
            &[],
            &[],
        ),
        desc(S::NotImplemented, "NOT_IMPLEMENTED", 501, ServerError, Required, &[], &[]),
        desc(S::BadGateway, "BAD_GATEWAY", 502, ServerError, Required, &[], &[]),
        desc(
            S::ServiceUnavailable,
            "SERVICE_UNAVAILABLE",
            503,
            ServerError,
            Required,
            &[],
            &["retry-after"],
        ),
        desc(S::GatewayTimeout, "GATEWAY_TIMEOUT", 504, ServerError, Required, &[], &[]),
        desc(
            S::HttpVersionNotSupported,
            "HTTP_VERSION_NOT_SUPPORTED",
            505,
            ServerError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::VariantAlsoNegotiates,
            "VARIANT_ALSO_NEGOTIATES",
            506,
            ServerError,
            Required,
            &[],
            &[],
        ),
        desc(
            S::InsufficientStorage,
            "INSUFFICIENT_STORAGE",
            507,
            ServerError,
            Required,
            &[],
            &[],
        ),
        desc(S::LoopDetected, "LOOP_DETECTED", 508, ServerError, Required, &[], &[]),
        desc(S::NotExtended, "NOT_EXTENDED", 510, ServerError, Required, &[], &[]),
        desc(
            S::NetworkAuthenticationRequired,
            "NETWORK_AUTHENTICATION_REQUIRED",
            511,
            ServerError,
            Required,
            &[],
            &[],
        ),
    ]
};

/// Look up the descriptor for a status.
///
/// Total over the closed enumeration; never fails.
#[must_use]
pub fn status_descriptor(status: HttpStatus) -> &'static StatusDescriptor {
    &STATUS_TABLE[status as usize]
}

/// The full descriptor table, in declaration order.
#[must_use]
pub fn all_statuses() -> &'static [StatusDescriptor] {
    &STATUS_TABLE
}
