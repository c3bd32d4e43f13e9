use crate::format::traits::RecordFormat;
use linkcollection::error::Result;
use serde::Serialize;

pub struct JsonRecord<'a, T>(pub &'a T);

impl<T: Serialize> RecordFormat for JsonRecord<'_, T> {
    fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.0)?)
    }
}
