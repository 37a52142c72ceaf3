mod login;
mod register;

pub(crate) use login::*;
pub(crate) use register::*;
