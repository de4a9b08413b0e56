use crate::domain::model::Artwork;
use crate::domain::ports::ArtworkSource;
use crate::utils::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Fetching,
}

/// 多個請求重疊時，哪一個回應有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// 只套用最後發出的請求，較早的回應直接丟棄
    #[default]
    LatestRequestWins,
    /// 每個回應到達即套用，最後到達者勝出（可能與頁碼不一致）
    LastArrivalWins,
}

/// 一次已發出的抓取，回應必須帶著它回來
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: u32,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn page(&self) -> u32 {
        self.page
    }
}

#[derive(Debug)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: std::result::Result<Vec<Artwork>, FetchError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { page: u32, count: usize },
    Failed,
    Discarded,
}

/// 目前頁碼與該頁已載入的作品。抓取期間保留上一頁的舊資料。
#[derive(Debug)]
pub struct PageDataSource {
    page: u32,
    records: Vec<Artwork>,
    state: FetchState,
    ordering: ResponseOrdering,
    next_seq: u64,
    latest_seq: Option<u64>,
}

impl PageDataSource {
    pub fn new(start_page: i64, ordering: ResponseOrdering) -> Self {
        Self {
            page: clamp_page(start_page),
            records: Vec::new(),
            state: FetchState::Idle,
            ordering,
            next_seq: 0,
            latest_seq: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Fetching
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    /// 頁碼下限為 1；頁碼沒變就不發請求
    pub fn go_to_page(&mut self, page: i64) -> Option<FetchTicket> {
        let target = clamp_page(page);
        if target == self.page {
            return None;
        }
        tracing::info!("📄 Page {} -> {}", self.page, target);
        self.page = target;
        Some(self.begin_fetch())
    }

    pub fn next_page(&mut self) -> FetchTicket {
        let target = self.page.saturating_add(1);
        self.page = target;
        tracing::info!("📄 Page -> {}", target);
        self.begin_fetch()
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        self.go_to_page(i64::from(self.page) - 1)
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        let ticket = FetchTicket {
            seq: self.next_seq,
            page: self.page,
        };
        self.next_seq += 1;
        self.latest_seq = Some(ticket.seq);
        self.state = FetchState::Fetching;
        tracing::debug!("Fetch #{} started for page {}", ticket.seq, ticket.page);
        ticket
    }

    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Vec<Artwork>, FetchError>,
    ) -> FetchOutcome {
        let is_latest = self.latest_seq == Some(ticket.seq);

        if self.ordering == ResponseOrdering::LatestRequestWins && !is_latest {
            tracing::debug!(
                "Discarding stale response #{} for page {} (current page {})",
                ticket.seq,
                ticket.page,
                self.page
            );
            return FetchOutcome::Discarded;
        }

        if is_latest {
            self.latest_seq = None;
        }
        // LastArrivalWins 下任何回應都會結束載入狀態
        self.state = FetchState::Idle;

        match result {
            Ok(records) => {
                let count = records.len();
                if ticket.page != self.page {
                    tracing::warn!(
                        "Applying {} records from page {} while showing page {}",
                        count,
                        ticket.page,
                        self.page
                    );
                }
                self.records = records;
                tracing::debug!("Loaded {} artworks for page {}", count, ticket.page);
                FetchOutcome::Applied {
                    page: ticket.page,
                    count,
                }
            }
            Err(e) => {
                tracing::warn!("❌ Error fetching artworks for page {}: {}", ticket.page, e);
                FetchOutcome::Failed
            }
        }
    }
}

/// 依據票據抓取一頁，結果交給 [`PageDataSource::complete_fetch`]
pub async fn fetch<S: ArtworkSource + ?Sized>(source: &S, ticket: FetchTicket) -> FetchCompletion {
    let result = source.fetch_page(ticket.page()).await;
    FetchCompletion { ticket, result }
}

fn clamp_page(page: i64) -> u32 {
    page.clamp(1, i64::from(u32::MAX)) as u32
}
