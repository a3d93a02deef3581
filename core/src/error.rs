use core::fmt;

/// Error type for asset store reads and bitfile parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetError {
    IoError(embedded_io::ErrorKind),
    /// The asset name cannot be mapped onto the store (e.g. path separators)
    InvalidName,
    /// The stored document is not a valid bitfile
    Malformed,
}

impl AssetError {
    pub fn from_io_error(error: impl embedded_io::Error) -> Self {
        AssetError::IoError(error.kind())
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::IoError(kind) => write!(f, "read failed ({kind:?})"),
            AssetError::InvalidName => f.write_str("invalid asset name"),
            AssetError::Malformed => f.write_str("malformed bitfile"),
        }
    }
}

impl embedded_io::Error for AssetError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            AssetError::IoError(kind) => *kind,
            AssetError::InvalidName => embedded_io::ErrorKind::InvalidInput,
            AssetError::Malformed => embedded_io::ErrorKind::InvalidData,
        }
    }
}

/// Error type for configuration documents handed over by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed(reason) => write!(f, "malformed configuration: {reason}"),
        }
    }
}

impl embedded_io::Error for ConfigError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::InvalidData
    }
}

/// Error type for frame decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    InvalidLength(usize),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidLength(len) => write!(f, "frame has {len} bytes"),
        }
    }
}

impl embedded_io::Error for EncodeError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::InvalidInput
    }
}
