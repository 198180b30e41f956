pub mod cloudinary;
pub mod embed;
pub mod provider;
pub mod video;
