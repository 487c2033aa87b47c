use blmail_conf::Settings;
use blmail_conf::DEFAULT_BREAKPOINT_PX;
use blmail_conf::DEFAULT_IMAGE_HOST;
use blmail_conf::DEFAULT_MAX_SIZE;

/// Tunable limits of the compatibility checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPolicy {
    /// Largest accepted template, in characters.
    pub max_size: usize,
    /// Host and path prefix static images must be served from.
    pub image_host: String,
    /// Width of the expected mobile `@media` breakpoint.
    pub breakpoint_px: u32,
}

impl Default for HtmlPolicy {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            image_host: DEFAULT_IMAGE_HOST.to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
        }
    }
}

impl HtmlPolicy {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_size: settings.max_size(),
            image_host: settings.image_host().to_string(),
            breakpoint_px: settings.breakpoint_px(),
        }
    }

    /// Domain part of the image host, used in messages.
    #[must_use]
    pub fn image_domain(&self) -> &str {
        self.image_host
            .split('/')
            .find(|part| !part.is_empty())
            .unwrap_or(&self.image_host)
    }
}
