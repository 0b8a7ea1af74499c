use super::BodyCardinality;

/// Supported HTTP request methods.
///
/// The enumeration is closed: every variant has an entry in the static
/// descriptor table, so [`method_descriptor`] is a total function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Delete,
    Head,
    Options,
    Post,
    Put,
    Patch,
}

impl HttpMethod {
    /// All supported methods, in descriptor-table order.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
    ];

    /// Canonical wire form (`"GET"`, `"POST"`, ...).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Descriptor lookup shortcut for [`method_descriptor`].
    #[must_use]
    pub fn descriptor(&self) -> &'static MethodDescriptor {
        method_descriptor(*self)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = UnknownMethod;

    /// Case-sensitive: the wire form is the canonical upper-case token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Returned when a wire token is not one of the supported methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnknownMethod(pub String);

/// Fixed per-method properties: request-body cardinality and the header keys
/// the method conventionally carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub method: HttpMethod,
    pub body: BodyCardinality,
    pub optional_headers: &'static [&'static str],
    pub required_headers: &'static [&'static str],
}

// Table order must match the discriminant order of `HttpMethod`; checked by
// the registry tests.
static METHOD_TABLE: [MethodDescriptor; 7] = [
    MethodDescriptor {
        method: HttpMethod::Get,
        body: BodyCardinality::Never,
        optional_headers: &["if-none-match"],
        required_headers: &[],
    },
    MethodDescriptor {
        method: HttpMethod::Delete,
        body: BodyCardinality::Never,
        optional_headers: &["if-match"],
        required_headers: &[],
    },
    MethodDescriptor {
        method: HttpMethod::Head,
        body: BodyCardinality::Never,
        optional_headers: &[],
        required_headers: &[],
    },
    MethodDescriptor {
        method: HttpMethod::Options,
        body: BodyCardinality::Never,
        optional_headers: &[],
        required_headers: &[],
    },
    MethodDescriptor {
        method: HttpMethod::Post,
        body: BodyCardinality::Required,
        optional_headers: &[],
        required_headers: &[],
    },
    MethodDescriptor {
        method: HttpMethod::Put,
        body: BodyCardinality::Required,
        optional_headers: &["if-match"],
        required_headers: &[],
    },
    MethodDescriptor {
        method: HttpMethod::Patch,
        body: BodyCardinality::Required,
        optional_headers: &["if-match"],
        required_headers: &[],
    },
];

/// Look up the descriptor for a method.
///
/// Total over the closed enumeration; never fails.
#[must_use]
pub fn method_descriptor(method: HttpMethod) -> &'static MethodDescriptor {
    &METHOD_TABLE[method as usize]
}
