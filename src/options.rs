/// Options for a [`JsonParser`](crate::JsonParser). Use
/// [`JsonParserOptionsBuilder`] to create instances of this struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptions {
    /// The maximum container nesting depth before parsing fails with
    /// [`ParseErrorKind::DepthExceeded`](crate::error::ParseErrorKind::DepthExceeded).
    pub(crate) max_depth: usize,

    /// The number of bytes read from the underlying source per refill, for
    /// parsers constructed over a [`Read`](std::io::Read).
    pub(crate) chunk_size: usize,
}

impl Default for JsonParserOptions {
    /// Returns default JSON parser options: a maximum nesting depth of 2048
    /// and a 64 KiB chunk size.
    fn default() -> Self {
        Self {
            max_depth: 2048,
            chunk_size: 64 * 1024,
        }
    }
}

impl JsonParserOptions {
    /// Returns the maximum container nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the chunk size used when refilling from a reader.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// A builder for [`JsonParserOptions`].
///
/// ```rust
/// use iterjson::options::JsonParserOptionsBuilder;
///
/// let options = JsonParserOptionsBuilder::default()
///     .with_max_depth(16)
///     .build();
/// assert_eq!(options.max_depth(), 16);
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonParserOptionsBuilder {
    options: JsonParserOptions,
}

impl JsonParserOptionsBuilder {
    /// Set the maximum container nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Set the chunk size used when refilling from a reader.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.options.chunk_size = chunk_size;
        self
    }

    /// Create a new [`JsonParserOptions`] object.
    pub fn build(self) -> JsonParserOptions {
        self.options
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let o = JsonParserOptions::default();
        assert_eq!(o.max_depth(), 2048);
        assert_eq!(o.chunk_size(), 64 * 1024);
    }

    #[test]
    fn builder_overrides() {
        let o = JsonParserOptionsBuilder::default()
            .with_max_depth(4)
            .with_chunk_size(8)
            .build();
        assert_eq!(o.max_depth(), 4);
        assert_eq!(o.chunk_size(), 8);
    }
}
