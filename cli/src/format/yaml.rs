use crate::format::traits::RecordFormat;
use linkcollection::error::Result;
use serde::Serialize;

pub struct YamlRecord<'a, T>(pub &'a T);

impl<T: Serialize> RecordFormat for YamlRecord<'_, T> {
    fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self.0)?)
    }
}
