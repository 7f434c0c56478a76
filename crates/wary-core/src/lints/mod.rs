pub mod architecture;
pub mod comments;
pub mod quality;
pub mod security;
