//! Request options shared by every endpoint method.

use std::collections::BTreeMap;

use serde_json::Value;

/// Behavioral flags and extra query parameters for a single API call.
///
/// Three named flags control how the service processes a change:
///
/// - `silent` (default `false`): when `true`, the change is not bumped up in
///   the activity stream and generates no notifications
/// - `hook` (default `true`): when `false`, hooks are not executed for the
///   change
/// - `workflow` (default `true`): when `false`, workflows are not triggered
///   for the change
///
/// Arbitrary extra key/value pairs (e.g. `limit`, `sort_desc`) can be added
/// with [`param`](Self::param).
///
/// # Encoding
///
/// [`to_query_string`](Self::to_query_string) includes a named flag only when
/// it differs from its default: `silent` appears only when `true`, while
/// `hook` and `workflow` appear only when `false`. This asymmetry follows the
/// documented defaults and is intentional. Extra parameters are always
/// included. When nothing needs encoding the result is the empty string;
/// otherwise it is `?` followed by URL-encoded `key=value` pairs.
///
/// # Example
///
/// ```rust
/// use tape_api::RequestOptions;
///
/// assert_eq!(RequestOptions::new().to_query_string(), "");
///
/// let options = RequestOptions::new()
///     .silent(true)
///     .param("limit", 2)
///     .param("sort_desc", true);
/// assert_eq!(options.to_query_string(), "?silent=true&limit=2&sort_desc=true");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    silent: bool,
    hook: bool,
    workflow: bool,
    extra: BTreeMap<String, Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            silent: false,
            hook: true,
            workflow: true,
            extra: BTreeMap::new(),
        }
    }
}

impl RequestOptions {
    /// Creates options with all flags at their defaults and no extra
    /// parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `silent` flag.
    #[must_use]
    pub const fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Sets the `hook` flag.
    #[must_use]
    pub const fn hook(mut self, hook: bool) -> Self {
        self.hook = hook;
        self
    }

    /// Sets the `workflow` flag.
    #[must_use]
    pub const fn workflow(mut self, workflow: bool) -> Self {
        self.workflow = workflow;
        self
    }

    /// Adds an extra query parameter.
    ///
    /// Extra parameters are always included in the encoded query string,
    /// regardless of value.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Encodes the options as a query string.
    ///
    /// Returns the empty string when every named flag is at its default and
    /// no extra parameters were added. Named flags come first, extras follow
    /// in sorted key order, so the output is stable for a fixed input.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = Vec::new();
        if self.silent {
            pairs.push(("silent".to_owned(), "true".to_owned()));
        }
        if !self.hook {
            pairs.push(("hook".to_owned(), "false".to_owned()));
        }
        if !self.workflow {
            pairs.push(("workflow".to_owned(), "false".to_owned()));
        }
        for (key, value) in &self.extra {
            pairs.push((key.clone(), render_value(value)));
        }

        if pairs.is_empty() {
            return String::new();
        }

        let encoded: Vec<String> = pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

/// Renders a JSON value as a query-string value.
///
/// Strings are used verbatim (no JSON quoting); everything else uses its JSON
/// representation.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
