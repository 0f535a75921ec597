#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemRecord {
    pub word: String,
    pub stem: String,
}
