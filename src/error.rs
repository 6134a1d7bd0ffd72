pub type PageResult<T> = Result<T, PageError>;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("descriptor \"{0}\" is already registered")]
    AlreadyRegistered(String),
    #[error("descriptor \"{0}\" is on the stack and cannot be unregistered")]
    DescriptorOnStack(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("toolkit error: {0}")]
    Toolkit(String),
}

impl From<std::io::Error> for PageError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl PageError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_descriptor(message: impl Into<String>) -> Self {
        Self::InvalidDescriptor(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn toolkit(message: impl Into<String>) -> Self {
        Self::Toolkit(message.into())
    }
}
