use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ImagineError, Result},
    models::{
        AspectRatio, GenerationsStyle, ImageRemixStyle, InPaintingModel, RemixControl,
        SuperResolutionModel,
    },
};

/// Where an input image comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Path(PathBuf),
    #[serde(skip)]
    Bytes(Vec<u8>),
}

impl ImageSource {
    pub async fn load(&self) -> Result<Vec<u8>> {
        match self {
            ImageSource::Path(path) => tokio::fs::read(path)
                .await
                .map_err(|e| ImagineError::io(path, e)),
            ImageSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(path: &std::path::Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl From<String> for ImageSource {
    fn from(path: String) -> Self {
        ImageSource::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationsRequest {
    pub prompt: Option<String>,
    pub style: GenerationsStyle,
    pub aspect_ratio: Option<AspectRatio>,
    pub neg_prompt: Option<String>,
    pub cfg: Option<f64>,
    pub seed: Option<i64>,
    pub steps: Option<u32>,
    pub high_res_results: Option<u32>,
}

impl GenerationsRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: GenerationsStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn with_neg_prompt(mut self, neg_prompt: impl Into<String>) -> Self {
        self.neg_prompt = Some(neg_prompt.into());
        self
    }

    pub fn with_cfg(mut self, cfg: f64) -> Self {
        self.cfg = Some(cfg);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_high_res_results(mut self, high_res_results: u32) -> Self {
        self.high_res_results = Some(high_res_results);
        self
    }
}

/// Variations reuse the generation styles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariationsRequest {
    pub prompt: Option<String>,
    pub image: Option<ImageSource>,
    pub style: GenerationsStyle,
    pub seed: Option<i64>,
    pub steps: Option<u32>,
    pub strength: Option<u32>,
    pub cfg: Option<f64>,
    pub neg_prompt: Option<String>,
}

impl VariationsRequest {
    pub fn new(image: impl Into<ImageSource>, prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            image: Some(image.into()),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: GenerationsStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_cfg(mut self, cfg: f64) -> Self {
        self.cfg = Some(cfg);
        self
    }

    pub fn with_neg_prompt(mut self, neg_prompt: impl Into<String>) -> Self {
        self.neg_prompt = Some(neg_prompt.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidedGenerationsRequest {
    pub prompt: Option<String>,
    pub image: Option<ImageSource>,
    pub style: GenerationsStyle,
    pub neg_prompt: Option<String>,
    pub aspect_ratio: Option<AspectRatio>,
    pub seed: Option<i64>,
    pub steps: Option<u32>,
    pub generation_bias: Option<f64>,
    pub artistic_noise: Option<f64>,
    pub aesthetic_weight: Option<f64>,
}

impl GuidedGenerationsRequest {
    pub fn new(image: impl Into<ImageSource>, prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            image: Some(image.into()),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: GenerationsStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_neg_prompt(mut self, neg_prompt: impl Into<String>) -> Self {
        self.neg_prompt = Some(neg_prompt.into());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_generation_bias(mut self, generation_bias: f64) -> Self {
        self.generation_bias = Some(generation_bias);
        self
    }

    pub fn with_artistic_noise(mut self, artistic_noise: f64) -> Self {
        self.artistic_noise = Some(artistic_noise);
        self
    }

    pub fn with_aesthetic_weight(mut self, aesthetic_weight: f64) -> Self {
        self.aesthetic_weight = Some(aesthetic_weight);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemixRequest {
    pub prompt: Option<String>,
    pub image: Option<ImageSource>,
    pub style: ImageRemixStyle,
    pub control: RemixControl,
    pub seed: Option<i64>,
    pub strength: Option<u32>,
    pub steps: Option<u32>,
    pub cfg: Option<f64>,
    pub neg_prompt: Option<String>,
}

impl RemixRequest {
    pub fn new(image: impl Into<ImageSource>, prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            image: Some(image.into()),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: ImageRemixStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_control(mut self, control: RemixControl) -> Self {
        self.control = control;
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strength(mut self, strength: u32) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_cfg(mut self, cfg: f64) -> Self {
        self.cfg = Some(cfg);
        self
    }

    pub fn with_neg_prompt(mut self, neg_prompt: impl Into<String>) -> Self {
        self.neg_prompt = Some(neg_prompt.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InPaintingRequest {
    pub prompt: Option<String>,
    pub image: Option<ImageSource>,
    pub mask: Option<ImageSource>,
    pub model_version: InPaintingModel,
}

impl InPaintingRequest {
    pub fn new(
        image: impl Into<ImageSource>,
        mask: impl Into<ImageSource>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            prompt: Some(prompt.into()),
            image: Some(image.into()),
            mask: Some(mask.into()),
            ..Default::default()
        }
    }

    pub fn with_model_version(mut self, model_version: InPaintingModel) -> Self {
        self.model_version = model_version;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperResolutionRequest {
    pub image: Option<ImageSource>,
    pub model_version: SuperResolutionModel,
}

impl SuperResolutionRequest {
    pub fn new(image: impl Into<ImageSource>) -> Self {
        Self {
            image: Some(image.into()),
            ..Default::default()
        }
    }

    pub fn with_model_version(mut self, model_version: SuperResolutionModel) -> Self {
        self.model_version = model_version;
        self
    }
}
