use typed_builder::TypedBuilder;

/// Configuration for short-code generation and shortcut enrichment.
///
/// Configuration constraint: `length` must not exceed the maximum
/// base-62 length of `random_bytes` bytes
/// ([`max_encoded_len`](shortcut_generator::base62::max_encoded_len)),
/// otherwise truncation silently shortens every generated code. This is
/// not checked at runtime.
#[derive(Debug, Clone, TypedBuilder)]
pub struct DigestConfig {
    /// Number of uniform random bytes drawn per candidate code.
    #[builder(default = 10)]
    pub random_bytes: usize,

    /// Length of generated codes, in base-62 characters.
    #[builder(default = 6)]
    pub length: usize,

    /// Attempt budget for the generation loop. When exhausted, the
    /// request fails with a capacity error instead of retrying further.
    #[builder(default = 10)]
    pub max_attempts: u32,

    /// Static prefix prepended to an id to form the shortcut. Never
    /// persisted.
    #[builder(default = String::from("http://short.ly/"), setter(into))]
    pub prefix: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
