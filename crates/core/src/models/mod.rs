pub mod conflict;
pub mod session;
pub mod slot;
