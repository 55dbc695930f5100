pub(crate) mod source;
pub(crate) mod transform;
pub(crate) mod value;
