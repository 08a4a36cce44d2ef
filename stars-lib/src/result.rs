use crate::error::StarsError;

pub type StarsResult<T> = std::result::Result<T, StarsError>;
