use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub archived: bool,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Short form used in report headers, e.g. "Ada L".
    pub fn short_name(&self) -> String {
        match self.last_name.chars().next() {
            Some(initial) => format!("{} {}", self.first_name, initial),
            None => self.first_name.clone(),
        }
    }
}
