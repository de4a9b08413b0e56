use serde::{Deserialize, Deserializer, Serialize};

pub type ArtworkId = u64;

/// 上游 API 回傳的一筆作品，原樣保留，不做任何本地推導。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist_display: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inscriptions: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_start: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_end: i64,
}

/// 列表端點的外層結構，只取 `data`
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkListResponse {
    pub data: Vec<Artwork>,
}

// 上游常以 null 表示缺值
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
