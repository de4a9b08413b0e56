use crate::domain::model::{Artwork, ArtworkId};
use crate::utils::validation::coerce_count;
use std::collections::BTreeMap;

/// 使用者勾選的作品集合（以 id 為鍵）與尚未套用的「選取前 N 筆」數量。
///
/// 換頁時不會清除或校正選取；某筆作品是否顯示為勾選由呼叫端即時計算。
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: BTreeMap<ArtworkId, Artwork>,
    pending_count: i64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切換單筆勾選，回傳切換後是否為已選取
    pub fn toggle_record(&mut self, record: &Artwork) -> bool {
        if self.selected.remove(&record.id).is_some() {
            false
        } else {
            self.selected.insert(record.id, record.clone());
            true
        }
    }

    pub fn set_pending_count(&mut self, count: i64) {
        self.pending_count = count;
    }

    pub fn set_pending_input(&mut self, text: &str) {
        self.set_pending_count(coerce_count(text));
    }

    pub fn pending_count(&self) -> i64 {
        self.pending_count
    }

    /// 以目前頁面的前 N 筆整個取代選取集合，並將待套用數量歸零。
    pub fn apply_selection(&mut self, current_page_records: &[Artwork]) -> usize {
        let k = usize::try_from(self.pending_count.max(0)).unwrap_or(usize::MAX);

        self.selected = current_page_records
            .iter()
            .take(k)
            .map(|record| (record.id, record.clone()))
            .collect();
        self.pending_count = 0;

        tracing::info!(
            "✅ Selected first {} of {} artworks on this page",
            self.selected.len(),
            current_page_records.len()
        );
        self.selected.len()
    }

    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.contains_key(&id)
    }

    pub fn get(&self, id: ArtworkId) -> Option<&Artwork> {
        self.selected.get(&id)
    }

    pub fn selected(&self) -> impl Iterator<Item = &Artwork> {
        self.selected.values()
    }

    pub fn selected_ids(&self) -> Vec<ArtworkId> {
        self.selected.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
