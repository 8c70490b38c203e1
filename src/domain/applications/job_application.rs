use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct JobApplication {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Generated filename of the resume blob in the `jobs` area.
    pub file: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub file: String,
}

impl NewApplication {
    /// Returns the name of the first required field that is empty.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("file", &self.file),
        ]
        .into_iter()
        .find(|(_, v)| v.is_empty())
        .map(|(k, _)| k)
    }
}
