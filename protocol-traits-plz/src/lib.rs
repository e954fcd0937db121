use bytes::BytesMut;

/// A request parser that is built from options and then fed one complete
/// HTTP/1.x message.
///
/// Implementors decide what `Options` carry; callers only construct the
/// parser and hand it the raw message.
pub trait ParseRequest: Sized {
    type Options;
    type Error: std::error::Error + Send + Sync + 'static;

    fn with_options(options: Self::Options) -> Self;

    /// Parse the whole message. On error the parser state is unspecified
    /// and should not be read.
    fn parse(&mut self, message: BytesMut) -> Result<(), Self::Error>;

    fn method(&self) -> &str;

    /// Path component of the request target.
    fn path(&self) -> &str;

    /// Header value, looked up case-insensitively. Repeated values are
    /// joined by ", ".
    fn header(&self, name: &str) -> Option<String>;

    fn body(&self) -> &[u8];
}
