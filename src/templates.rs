use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// A dismissable message rendered at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            tone: Tone::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            tone: Tone::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.tone {
            Tone::Success => "notice notice-success",
            Tone::Error => "notice notice-error",
        }
    }
}

pub fn render<T: Template>(template: T) -> HttpResponse {
    render_with_status(template, StatusCode::OK)
}

pub fn render_with_status<T: Template>(template: T, status: StatusCode) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Template render error: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
