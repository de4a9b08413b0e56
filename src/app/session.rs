use crate::app::commands::{Command, HELP};
use crate::app::render;
use crate::core::page_source::{self, FetchCompletion, FetchOutcome, FetchTicket};
use crate::core::table::ArtworkTable;
use crate::domain::ports::ArtworkSource;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// 處理一個指令後要輸出什麼
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Table,
    Text(String),
    Quit,
}

/// 互動式會話：所有狀態變更都在同一個 task 上依序處理。
///
/// 抓取在背景 task 執行，完成後經由 channel 回報，期間使用者輸入不受阻擋。
pub struct Session<S: ArtworkSource + 'static> {
    table: ArtworkTable,
    source: Arc<S>,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl<S: ArtworkSource + 'static> Session<S> {
    pub fn new(source: Arc<S>, table: ArtworkTable) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            table,
            source,
            completions_tx,
            completions_rx,
        }
    }

    pub fn table(&self) -> &ArtworkTable {
        &self.table
    }

    /// 載入起始頁
    pub fn start(&mut self) {
        let ticket = self.table.begin_fetch();
        self.spawn_fetch(ticket);
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let completion = page_source::fetch(source.as_ref(), ticket).await;
            // 接收端關閉代表會話已結束，結果可直接丟棄
            let _ = tx.send(completion);
        });
    }

    pub async fn next_completion(&mut self) -> Option<FetchCompletion> {
        self.completions_rx.recv().await
    }

    pub fn handle_completion(&mut self, completion: FetchCompletion) -> FetchOutcome {
        self.table.complete_fetch(completion.ticket, completion.result)
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                tracing::debug!("Rejected input: {}", e);
                Reply::Text(e.user_friendly_message())
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Next => {
                let ticket = self.table.next_page();
                self.spawn_fetch(ticket);
                Reply::Table
            }
            Command::Previous => match self.table.previous_page() {
                Some(ticket) => {
                    self.spawn_fetch(ticket);
                    Reply::Table
                }
                None => Reply::Text("Already on the first page.".to_string()),
            },
            Command::Reload => {
                let ticket = self.table.begin_fetch();
                self.spawn_fetch(ticket);
                Reply::Table
            }
            Command::Count(text) => {
                self.table.set_pending_input(&text);
                Reply::Text(format!(
                    "Pending count: {} (type 'apply' to select)",
                    self.table.selection().pending_count()
                ))
            }
            Command::Apply => {
                self.table.apply_selection();
                Reply::Table
            }
            Command::Select(text) => {
                self.table.set_pending_input(&text);
                self.table.apply_selection();
                Reply::Table
            }
            Command::Toggle(id) => match self.table.find_record(id).cloned() {
                Some(record) => {
                    let now_selected = self.table.toggle_record(&record);
                    tracing::debug!("Artwork {} selected: {}", id, now_selected);
                    Reply::Table
                }
                None => Reply::Text(format!("No artwork with id {} on this page.", id)),
            },
            Command::Show => Reply::Table,
            Command::Selected => Reply::Text(render::render_selection(self.table.selection())),
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    /// 讀取輸入直到 `quit` 或 EOF，每次狀態變更後重新輸出表格
    pub async fn run<R, W>(mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        self.start();
        write!(out, "{}", render::render_table(&self.table))?;
        out.flush()?;

        loop {
            tokio::select! {
                Some(completion) = self.completions_rx.recv() => {
                    if self.handle_completion(completion) != FetchOutcome::Discarded {
                        write!(out, "{}", render::render_table(&self.table))?;
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    match self.handle_line(&line) {
                        Reply::Table => write!(out, "{}", render::render_table(&self.table))?,
                        Reply::Text(text) => writeln!(out, "{}", text.trim_end())?,
                        Reply::Quit => break,
                    }
                }
            }
            out.flush()?;
        }

        tracing::info!("👋 Session ended on page {}", self.table.page());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page_source::ResponseOrdering;
    use crate::domain::model::Artwork;
    use crate::utils::error::FetchError;
    use async_trait::async_trait;

    /// 第 1 頁 id 1..=5，第 2 頁 id 6..=7，其餘頁面失敗
    struct StubSource;

    fn artwork(id: u64) -> Artwork {
        Artwork {
            id,
            title: format!("Artwork {}", id),
            place_of_origin: "Mexico".to_string(),
            artist_display: "Frida Kahlo".to_string(),
            inscriptions: String::new(),
            date_start: 1940,
            date_end: 1940,
        }
    }

    #[async_trait]
    impl ArtworkSource for StubSource {
        async fn fetch_page(&self, page: u32) -> std::result::Result<Vec<Artwork>, FetchError> {
            match page {
                1 => Ok((1..=5).map(artwork).collect()),
                2 => Ok((6..=7).map(artwork).collect()),
                _ => Err(FetchError::Status { status: 404 }),
            }
        }
    }

    async fn settle(session: &mut Session<StubSource>) -> FetchOutcome {
        let completion = session.next_completion().await.unwrap();
        session.handle_completion(completion)
    }

    fn new_session() -> Session<StubSource> {
        Session::new(
            Arc::new(StubSource),
            ArtworkTable::new(1, ResponseOrdering::default()),
        )
    }

    fn selected_ids(session: &Session<StubSource>) -> Vec<u64> {
        session.table().selection().selected_ids()
    }

    #[tokio::test]
    async fn test_select_toggle_and_navigate() {
        let mut session = new_session();
        session.start();
        assert_eq!(
            settle(&mut session).await,
            FetchOutcome::Applied { page: 1, count: 5 }
        );

        assert_eq!(session.handle_line("count 3"), Reply::Text(
            "Pending count: 3 (type 'apply' to select)".to_string()
        ));
        assert_eq!(session.handle_line("apply"), Reply::Table);
        assert_eq!(selected_ids(&session), vec![1, 2, 3]);

        session.handle_line("toggle 4");
        assert_eq!(selected_ids(&session), vec![1, 2, 3, 4]);

        session.handle_line("next");
        settle(&mut session).await;

        assert_eq!(session.table().page(), 2);
        assert_eq!(selected_ids(&session), vec![1, 2, 3, 4]);
        assert_eq!(session.table().selected_on_page(), 0);
    }

    #[tokio::test]
    async fn test_toggle_previous_page_selection_off() {
        let mut session = new_session();
        session.start();
        settle(&mut session).await;
        session.handle_line("select 2");

        session.handle_line("n");
        settle(&mut session).await;
        session.handle_line("t 1");

        assert_eq!(selected_ids(&session), vec![2]);
    }

    #[tokio::test]
    async fn test_select_zero_clears() {
        let mut session = new_session();
        session.start();
        settle(&mut session).await;
        session.handle_line("select 4");

        session.handle_line("select 0");

        assert!(session.table().selection().is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_keeps_previous_rows() {
        let mut session = Session::new(
            Arc::new(StubSource),
            ArtworkTable::new(2, ResponseOrdering::default()),
        );
        session.start();
        settle(&mut session).await;

        session.handle_line("next");
        assert_eq!(settle(&mut session).await, FetchOutcome::Failed);

        assert_eq!(session.table().page(), 3);
        assert_eq!(session.table().records().len(), 2);
        assert!(!session.table().is_loading());
    }

    #[tokio::test]
    async fn test_previous_on_first_page() {
        let mut session = new_session();

        assert_eq!(
            session.handle_line("prev"),
            Reply::Text("Already on the first page.".to_string())
        );
    }

    #[tokio::test]
    async fn test_unknown_input_and_missing_toggle() {
        let mut session = new_session();

        assert!(matches!(session.handle_line("fly"), Reply::Text(t) if t.contains("Unknown command")));
        assert_eq!(
            session.handle_line("toggle 42"),
            Reply::Text("No artwork with id 42 on this page.".to_string())
        );
        assert_eq!(session.handle_line("quit"), Reply::Quit);
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let session = new_session();
        let input: &[u8] = b"next\nhelp\nquit\nnext\n";
        let mut out = Vec::new();

        session.run(input, &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Artworks Data"));
        assert!(output.contains("Page 2"));
        assert!(output.contains("Commands:"));
        assert!(!output.contains("Page 3"));
    }
}
