use crate::core::page_source::{
    FetchOutcome, FetchState, FetchTicket, PageDataSource, ResponseOrdering,
};
use crate::core::selection::SelectionController;
use crate::domain::model::{Artwork, ArtworkId};
use crate::utils::error::FetchError;

/// 表格中的一列：作品本身加上是否勾選。每次即時計算，不另外儲存。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub record: &'a Artwork,
    pub checked: bool,
}

/// 作品表格的完整狀態：頁面資料與選取
#[derive(Debug)]
pub struct ArtworkTable {
    pages: PageDataSource,
    selection: SelectionController,
}

impl ArtworkTable {
    pub fn new(start_page: i64, ordering: ResponseOrdering) -> Self {
        Self {
            pages: PageDataSource::new(start_page, ordering),
            selection: SelectionController::new(),
        }
    }

    pub fn pages(&self) -> &PageDataSource {
        &self.pages
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn page(&self) -> u32 {
        self.pages.page()
    }

    pub fn records(&self) -> &[Artwork] {
        self.pages.records()
    }

    pub fn is_loading(&self) -> bool {
        self.pages.state() == FetchState::Fetching
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.pages.begin_fetch()
    }

    pub fn next_page(&mut self) -> FetchTicket {
        self.pages.next_page()
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        self.pages.previous_page()
    }

    pub fn go_to_page(&mut self, page: i64) -> Option<FetchTicket> {
        self.pages.go_to_page(page)
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Vec<Artwork>, FetchError>,
    ) -> FetchOutcome {
        self.pages.complete_fetch(ticket, result)
    }

    pub fn toggle_record(&mut self, record: &Artwork) -> bool {
        self.selection.toggle_record(record)
    }

    pub fn set_pending_count(&mut self, count: i64) {
        self.selection.set_pending_count(count);
    }

    pub fn set_pending_input(&mut self, text: &str) {
        self.selection.set_pending_input(text);
    }

    /// 永遠作用在此刻已載入的頁面
    pub fn apply_selection(&mut self) -> usize {
        self.selection.apply_selection(self.pages.records())
    }

    pub fn rows(&self) -> Vec<RowView<'_>> {
        self.pages
            .records()
            .iter()
            .map(|record| RowView {
                record,
                checked: self.selection.is_selected(record.id),
            })
            .collect()
    }

    pub fn selected_on_page(&self) -> usize {
        self.rows().iter().filter(|row| row.checked).count()
    }

    /// 先找目前頁面，再找已選取的作品（可取消其他頁的選取）
    pub fn find_record(&self, id: ArtworkId) -> Option<&Artwork> {
        self.pages
            .records()
            .iter()
            .find(|record| record.id == id)
            .or_else(|| self.selection.get(id))
    }
}
