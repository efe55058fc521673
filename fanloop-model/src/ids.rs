/// Numeric identifier assigned to a video by the manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VideoId(pub i64);

impl VideoId {
    pub fn new(raw: i64) -> Self {
        VideoId(raw)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for VideoId {
    fn from(raw: i64) -> Self {
        VideoId(raw)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
