/// Vector index errors (SQLite-backed implementation).
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("embedding dimension mismatch: index expects {expected}, provider produced {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl IndexError {
    pub fn sqlite(message: impl Into<String>) -> Self {
        Self::Sqlite {
            message: message.into(),
        }
    }
}
