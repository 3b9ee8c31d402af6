pub mod crypto;
pub mod media;
