// Error taxonomy translated into HTTP responses by the adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppError {
    Unauthorized,
    NotFound,
    Internal,
}

impl AppError {
    // Short client-facing body. Internals never leak past this.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "Unauthorized",
            AppError::NotFound => "Page not found",
            AppError::Internal => "Something went wrong",
        }
    }
}
