pub mod join;
pub mod session;
pub mod trip;
pub mod user;
