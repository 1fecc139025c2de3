//! Image URL helpers.
//!
//! The catalog only returns relative paths like `/abc123.jpg`; the full URL
//! is `{image_base}/{size}{path}`.

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterSize {
    W154,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W154 => "w154",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropSize {
    W300,
    W780,
    #[default]
    W1280,
    Original,
}

impl BackdropSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::W300 => "w300",
            BackdropSize::W780 => "w780",
            BackdropSize::W1280 => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    W45,
    #[default]
    W92,
    W154,
    W185,
    Original,
}

impl LogoSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoSize::W45 => "w45",
            LogoSize::W92 => "w92",
            LogoSize::W154 => "w154",
            LogoSize::W185 => "w185",
            LogoSize::Original => "original",
        }
    }
}

fn image_url(path: Option<&str>, size: &str) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    Some(format!("{IMAGE_BASE_URL}/{size}{path}"))
}

pub fn poster_url(path: Option<&str>, size: PosterSize) -> Option<String> {
    image_url(path, size.as_str())
}

pub fn backdrop_url(path: Option<&str>, size: BackdropSize) -> Option<String> {
    image_url(path, size.as_str())
}

pub fn provider_logo_url(path: Option<&str>, size: LogoSize) -> Option<String> {
    image_url(path, size.as_str())
}
