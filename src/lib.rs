//! Client library for the Imagine API.
//!
//! [`Imagine`] exposes text-to-image generation, variations, guided
//! generation, remix, inpainting and super resolution. Each call validates
//! its request, sends one multipart POST and returns a [`Response`] that
//! carries the resulting [`Image`] only when the server answered 200.

pub mod client;
pub mod config;
pub mod error;
pub mod features;
pub mod logger;
pub mod models;
pub mod remote;

pub use client::Imagine;
pub use config::ImagineConfig;
pub use error::{ImagineError, Result};
pub use models::{
    AspectRatio, GenerationsRequest, GenerationsStyle, GuidedGenerationsRequest, Image,
    ImageRemixStyle, ImageSource, InPaintingModel, InPaintingRequest, PixelArray, RemixControl,
    RemixRequest, Response, Status, SuperResolutionModel, SuperResolutionRequest,
    VariationsRequest,
};
pub use remote::{HttpClient, RequestClient, RestClient};
