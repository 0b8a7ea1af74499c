use serde_json::{Map, Value};
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

/// Marker character that tags a template segment as a parameter.
pub const PARAM_MARKER: char = ':';

/// Maximum number of extracted path parameters before heap allocation.
/// Most REST paths carry no more than a handful of parameters.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated storage for extracted path parameters, in template order.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// One segment of a path template or of a concrete request path.
///
/// Created by splitting on `/` and discarding empty pieces; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Segment text as written (parameters keep their marker here).
    pub value: String,
    /// Zero-based position among the non-empty segments.
    pub index: usize,
    /// Whether the segment names a parameter rather than a literal.
    pub is_param: bool,
}

/// Parse a path template into ordered segments.
///
/// Splits on `/`, drops empty pieces, and marks a segment as a parameter if it
/// starts with [`PARAM_MARKER`]. Never fails: a malformed template simply
/// yields segments as written; no well-formedness validation happens at this
/// layer.
#[must_use]
pub fn parse_template(template: &str) -> Vec<PathSegment> {
    template
        .split('/')
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, value)| PathSegment {
            value: value.to_string(),
            index,
            is_param: value.starts_with(PARAM_MARKER),
        })
        .collect()
}

/// Match a concrete request path against a template, extracting parameters.
///
/// `base_path` is an optional transport prefix (e.g. `/api`); when the request
/// path starts with it, the prefix is removed before matching, otherwise the
/// path is used unchanged.
///
/// Returns the extracted `(name, value)` pairs in template order, with
/// parameter names stripped of their marker. An empty result means *either*
/// that the path did not match (segment count or literal mismatch) *or* that
/// the template declares no parameters. Callers must not treat an empty
/// result as proof of a match and are expected to re-validate the extracted
/// map against the declared parameter schema.
///
/// Matching is a pure function of its string inputs.
#[must_use]
pub fn match_path(template: &str, real_path: &str, base_path: &str) -> ParamVec {
    let template_segments = parse_template(template);

    let stripped = if !base_path.is_empty() {
        real_path.strip_prefix(base_path).unwrap_or(real_path)
    } else {
        real_path
    };
    let real_segments: Vec<&str> = stripped.split('/').filter(|s| !s.is_empty()).collect();

    if template_segments.len() != real_segments.len() {
        debug!(
            template = %template,
            path = %real_path,
            template_segments = template_segments.len(),
            path_segments = real_segments.len(),
            "Path segment count mismatch"
        );
        return ParamVec::new();
    }

    for seg in template_segments.iter().filter(|s| !s.is_param) {
        if seg.value != real_segments[seg.index] {
            debug!(
                template = %template,
                path = %real_path,
                segment_index = seg.index,
                expected = %seg.value,
                actual = %real_segments[seg.index],
                "Literal path segment mismatch"
            );
            return ParamVec::new();
        }
    }

    template_segments
        .iter()
        .filter(|s| s.is_param)
        .map(|seg| {
            let name = seg.value.trim_start_matches(PARAM_MARKER).to_string();
            (name, real_segments[seg.index].to_string())
        })
        .collect()
}

/// Convert extracted parameters into a `HashMap`, last write wins.
#[must_use]
pub fn params_map(params: &ParamVec) -> HashMap<String, String> {
    params
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Convert extracted parameters into a JSON object for schema validation.
#[must_use]
pub fn params_value(params: &ParamVec) -> Value {
    let map: Map<String, Value> = params
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Value::Object(map)
}
