use crate::domain::model::ArtworkId;
use crate::utils::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Reload,
    /// 暫存使用者輸入的數量文字，尚未套用
    Count(String),
    Apply,
    /// 輸入數量並立即套用
    Select(String),
    Toggle(ArtworkId),
    Show,
    Selected,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  next | n             load the next page
  prev | p             load the previous page
  reload | r           fetch the current page again
  count <n>            type a row count (not applied yet)
  apply                select the first <count> rows of this page
  select <n>           count + apply in one step
  toggle <id> | t <id> check or uncheck one artwork
  show                 redraw the table
  selected             list every selected artwork
  help | ?             show this help
  quit | q             exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let (verb, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "reload" | "r" => Command::Reload,
            // 數量文字照原樣保留，轉換延後到套用前
            "count" => Command::Count(arg.to_string()),
            "apply" => Command::Apply,
            "select" | "s" => Command::Select(arg.to_string()),
            "toggle" | "t" => Command::Toggle(parse_id(trimmed, arg)?),
            "show" | "" => Command::Show,
            "selected" => Command::Selected,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => {
                return Err(AppError::CommandError {
                    input: trimmed.to_string(),
                    reason: format!("Unknown command '{}'. Type 'help' for a list.", verb),
                })
            }
        };

        Ok(command)
    }
}

fn parse_id(input: &str, arg: &str) -> Result<ArtworkId> {
    arg.parse().map_err(|_| AppError::CommandError {
        input: input.to_string(),
        reason: format!("'{}' is not an artwork id", arg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(Command::parse("next").unwrap(), Command::Next);
        assert_eq!(Command::parse("  N ").unwrap(), Command::Next);
        assert_eq!(Command::parse("prev").unwrap(), Command::Previous);
        assert_eq!(Command::parse("r").unwrap(), Command::Reload);
    }

    #[test]
    fn test_parse_count_keeps_raw_text() {
        assert_eq!(
            Command::parse("count 12").unwrap(),
            Command::Count("12".to_string())
        );
        assert_eq!(
            Command::parse("count abc").unwrap(),
            Command::Count("abc".to_string())
        );
        assert_eq!(Command::parse("count").unwrap(), Command::Count(String::new()));
        assert_eq!(
            Command::parse("select   3").unwrap(),
            Command::Select("3".to_string())
        );
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!(Command::parse("toggle 27992").unwrap(), Command::Toggle(27992));
        assert_eq!(Command::parse("t 4").unwrap(), Command::Toggle(4));
        assert!(matches!(
            Command::parse("toggle x"),
            Err(AppError::CommandError { .. })
        ));
        assert!(Command::parse("toggle").is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(Command::parse("").unwrap(), Command::Show);
        assert_eq!(Command::parse("Selected").unwrap(), Command::Selected);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert!(Command::parse("delete everything").is_err());
    }
}
