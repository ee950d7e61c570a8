pub mod session;
pub mod user;

pub use session::{LoginPayload, LoginResponse, Session, SessionToken, SESSION_COOKIE};
pub use user::{ApiResponse, Role, UserProfile, UserStats};
