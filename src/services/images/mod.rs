mod service;
mod types;


pub use service::ImageService;
pub use types::{
    ImageData, ImageGenerationRequest, ImageQuality, ImageResponse, ImageResponseFormat,
    ImageSize, ImageStyle,
};
