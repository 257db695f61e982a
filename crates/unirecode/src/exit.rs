use std::fmt;
use std::io;

use unirecode_codec::{CodecError, RecodeError};
use unirecode_registry::RegistryError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound | io::ErrorKind::BrokenPipe => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn registry_error(err: RegistryError) -> CliError {
    CliError::new(USAGE, err.to_string())
}

pub fn codec_error(context: &str, err: CodecError) -> CliError {
    match err {
        CodecError::Io(source) => io_error(context, source),
        other => CliError::new(DATA_INVALID, format!("{context}: {other}")),
    }
}

pub fn recode_error(context: &str, err: RecodeError) -> CliError {
    match err {
        RecodeError::Decode { position, source } => codec_error(
            &format!("{context}: error decoding character {position}"),
            source,
        ),
        RecodeError::Encode { position, source } => codec_error(
            &format!("{context}: error encoding character {position}"),
            source,
        ),
        RecodeError::Flush(source) => {
            io_error(&format!("{context}: failed to flush output"), source)
        }
    }
}
