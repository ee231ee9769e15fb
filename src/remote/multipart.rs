use std::collections::BTreeMap;

use crate::{
    error::{ImagineError, Result},
    models::Parameters,
    remote::Files,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartPart {
    /// Plain form field, sent without a file name.
    Form { value: String },
    File {
        file_name: String,
        bytes: Vec<u8>,
        content_type: String,
    },
}

impl MultipartPart {
    pub fn file_name(&self) -> Option<&str> {
        match self {
            MultipartPart::Form { .. } => None,
            MultipartPart::File { file_name, .. } => Some(file_name),
        }
    }
}

pub type Multipart = BTreeMap<String, MultipartPart>;

#[derive(Debug, Clone)]
pub struct FileOptions {
    pub extension: String,
    pub content_type: String,
}

impl Default for FileOptions {
    fn default() -> Self {
        Self {
            extension: "jpeg".to_string(),
            content_type: "image/jpeg".to_string(),
        }
    }
}

impl FileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

pub fn multipart_form_builder(parameters: &Parameters) -> Multipart {
    parameters
        .iter()
        .map(|(name, value)| {
            (
                name.clone(),
                MultipartPart::Form {
                    value: value.to_string(),
                },
            )
        })
        .collect()
}

/// File parts are named `{field}.{extension}`.
pub fn multipart_file_builder(files: &Files, options: &FileOptions) -> Multipart {
    files
        .iter()
        .map(|(name, bytes)| {
            (
                name.clone(),
                MultipartPart::File {
                    file_name: format!("{}.{}", name, options.extension),
                    bytes: bytes.clone(),
                    content_type: options.content_type.clone(),
                },
            )
        })
        .collect()
}

/// Builds the full body. Form and file parts share one namespace.
pub fn encode(
    parameters: &Parameters,
    files: Option<&Files>,
    options: &FileOptions,
) -> Result<Multipart> {
    let mut multipart = multipart_form_builder(parameters);

    if let Some(files) = files {
        for (name, part) in multipart_file_builder(files, options) {
            if multipart.contains_key(&name) {
                return Err(ImagineError::PartCollision(name));
            }
            multipart.insert(name, part);
        }
    }

    Ok(multipart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{opt, parameter_builder};

    fn files(entries: Vec<(&str, Vec<u8>)>) -> Files {
        entries
            .into_iter()
            .map(|(name, bytes)| (name.to_string(), bytes))
            .collect()
    }

    #[test]
    fn encodes_form_and_file_parts() {
        let parameters =
            parameter_builder([("prompt", opt(Some("x"))), ("steps", opt(Some(5i64)))]);
        let files = files(vec![("image", vec![0x01, 0x02])]);

        let body = encode(&parameters, Some(&files), &FileOptions::default()).unwrap();

        assert_eq!(body.len(), 3);
        assert_eq!(body["prompt"], MultipartPart::Form { value: "x".into() });
        assert_eq!(body["steps"], MultipartPart::Form { value: "5".into() });
        assert_eq!(
            body["image"],
            MultipartPart::File {
                file_name: "image.jpeg".into(),
                bytes: vec![0x01, 0x02],
                content_type: "image/jpeg".into(),
            }
        );
        assert_eq!(body["prompt"].file_name(), None);
        assert_eq!(body["image"].file_name(), Some("image.jpeg"));
    }

    #[test]
    fn file_options_change_name_and_type() {
        let files = files(vec![("mask", b"m".to_vec())]);
        let options = FileOptions::new().with_extension("png").with_content_type("image/png");

        let body = multipart_file_builder(&files, &options);

        match &body["mask"] {
            MultipartPart::File {
                file_name,
                content_type,
                ..
            } => {
                assert_eq!(file_name, "mask.png");
                assert_eq!(content_type, "image/png");
            }
            other => panic!("expected a file part, got {:?}", other),
        }
    }

    #[test]
    fn colliding_names_are_rejected() {
        let parameters = parameter_builder([("image", opt(Some("oops")))]);
        let files = files(vec![("image", b"data".to_vec())]);

        let err = encode(&parameters, Some(&files), &FileOptions::default()).unwrap_err();
        assert!(matches!(err, ImagineError::PartCollision(name) if name == "image"));
    }

    #[test]
    fn no_files_means_form_parts_only() {
        let parameters = parameter_builder([("prompt", opt(Some("a cat")))]);
        let body = encode(&parameters, None, &FileOptions::default()).unwrap();
        assert_eq!(body.len(), 1);
    }
}
