#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnknownAlgorithm(String),
    InitializationFailed(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::UnknownAlgorithm(name) => {
                write!(f, "unknown message digest: {}", name)
            }
            Error::InitializationFailed(why) => {
                write!(f, "digest initialization failed: {}", why)
            }
        }
    }
}

impl std::error::Error for Error {}
