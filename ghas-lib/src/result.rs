use crate::error::GhasError;

pub type GhasResult<T> = std::result::Result<T, GhasError>;
