use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] std::io::Error),

    #[error("name of {len} bytes does not fit a {capacity}-byte buffer (including NUL)")]
    NameTooLong { len: usize, capacity: usize },

    #[error("offset {offset} from index {index} leaves an array of {len} elements")]
    OutOfBounds { index: usize, offset: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, DemoError>;
