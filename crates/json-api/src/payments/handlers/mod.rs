mod create;

pub(crate) use create::*;
