use bytes::Bytes;

// File part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    field: String,
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

impl UploadedFile {
    pub fn new(
        field: String,
        filename: String,
        content_type: Option<String>,
        data: Bytes,
    ) -> Self {
        UploadedFile {
            field,
            filename,
            content_type,
            data,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}
