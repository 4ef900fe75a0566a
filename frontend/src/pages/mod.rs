pub mod landing;
pub mod resources;
