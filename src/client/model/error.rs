#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// Error raised in the client itself, before or after the HTTP exchange.
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
