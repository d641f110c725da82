pub mod cloudinary;
pub mod email;
pub mod jwt;
pub mod password;

pub use cloudinary::sign_upload;
pub use email::*;
pub use jwt::*;
pub use password::*;
