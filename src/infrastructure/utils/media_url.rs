/// Turns stored media paths into URLs on the external file store.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaUrl {
    base: String,
}

impl MediaUrl {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        MediaUrl { base }
    }

    /// Joins a relative path onto the media base. Absolute http(s) URLs and
    /// missing or blank paths are passed through as-is.
    pub fn resolve(&self, path: Option<String>) -> Option<String> {
        let path = path.filter(|p| !p.trim().is_empty())?;

        if is_absolute(&path) {
            Some(path)
        } else {
            Some(format!("{}{}", self.base, path.trim_start_matches('/')))
        }
    }
}

fn is_absolute(path: &str) -> bool {
    url::Url::parse(path)
        .map(|u| u.scheme() == "http" || u.scheme() == "https")
        .unwrap_or(false)
}
