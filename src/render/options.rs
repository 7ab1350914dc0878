use clap::ValueEnum;

/// A rendering format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum RenderFormat {
    /// HTML.
    #[default]
    Html,
    /// JSON.
    Json,
}

/// Rendering options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    format: RenderFormat,
}

impl RenderOptions {
    /// Creates rendering options.
    pub const fn new(format: RenderFormat) -> Self {
        Self { format }
    }

    /// Returns a rendering format.
    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    /// Sets a rendering format.
    pub const fn set_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }
}
