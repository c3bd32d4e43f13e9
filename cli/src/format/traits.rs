use linkcollection::error::Result;

/// A record rendered as text for stdout
pub trait RecordFormat {
    fn render(&self) -> Result<String>;
}
