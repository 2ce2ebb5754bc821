//! HTML rendering.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::ImageFormat;
use minijinja::Environment;
use serde::Serialize;
use sketch_core::{RealizeOutcome, StyleChoice};
use sketch_error::{ServerError, ServerErrorKind};

const INDEX_TEMPLATE: &str = "index.html";

/// Compiled page templates. The `.html` name turns on HTML autoescaping.
#[derive(Debug)]
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// Compiles the bundled templates.
    pub fn new() -> Result<Self, ServerError> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))
            .map_err(|e| ServerError::new(ServerErrorKind::Template(e.to_string())))?;
        Ok(Self { env })
    }

    /// Renders the form page.
    pub fn render(&self, view: &PageView) -> Result<String, ServerError> {
        self.env
            .get_template(INDEX_TEMPLATE)
            .and_then(|template| template.render(view))
            .map_err(|e| ServerError::new(ServerErrorKind::Template(e.to_string())))
    }
}

/// Everything the page can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    styles: Vec<&'static str>,
    selected: &'static str,
    uploaded: Option<String>,
    description: Option<String>,
    generated: Option<String>,
    error: Option<String>,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            styles: StyleChoice::all().iter().map(StyleChoice::label).collect(),
            selected: StyleChoice::default().label(),
            uploaded: None,
            description: None,
            generated: None,
            error: None,
        }
    }
}

impl PageView {
    /// Keep the chosen style selected in the dropdown.
    pub fn with_style(mut self, style: StyleChoice) -> Self {
        self.selected = style.label();
        self
    }

    /// Preview the upload inline when it is a png or jpeg.
    pub fn with_upload(mut self, bytes: &[u8]) -> Self {
        self.uploaded = match image::guess_format(bytes) {
            Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => Some(format!(
                "data:{};base64,{}",
                format.to_mime_type(),
                STANDARD.encode(bytes)
            )),
            _ => None,
        };
        self
    }

    /// Show a pipeline outcome: both results, or its one message.
    pub fn with_outcome(self, outcome: RealizeOutcome) -> Self {
        match outcome {
            RealizeOutcome::Realized { description, image } => Self {
                description: Some(description.to_string()),
                generated: Some(image.to_string()),
                error: None,
                ..self
            },
            RealizeOutcome::Failed { message } => self.with_error(message),
        }
    }

    /// Show a single error message and nothing else.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        Self {
            description: None,
            generated: None,
            error: Some(message.into()),
            ..self
        }
    }
}
