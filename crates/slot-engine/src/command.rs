//! Chat commands understood by the free-time bot and the replies they get.

use crate::format::render_free_slots;
use crate::freebusy::FreeSlot;

/// Number of calendar dates a chat search covers.
pub const DEFAULT_SEARCH_DAYS: u32 = 7;

/// Greeting sent when someone adds the bot.
pub const WELCOME_MESSAGE: &str = "はじめまして！
空き時間検索Botです。

チームメンバー全員のカレンダーから空き時間を検索します。

「。」を送ると空き時間を表示します。

よろしくお願いします！";

/// Reply to a help request.
pub const HELP_MESSAGE: &str = "チームメンバー全員のカレンダーから、平日10:00-19:00の1時間以上の空き時間を検索します。

「。」「/」「空き」「空き時間」のどれかを送ると、今日から7日間の空き時間を表示します。";

/// Reply to anything that is not a command.
pub const USAGE_HINT: &str = "「。」を送ると今週の空き時間を表示します！";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Search,
    Unknown,
}

/// Classify a chat message. Surrounding whitespace is ignored.
pub fn parse_command(text: &str) -> Command {
    let text = text.trim();
    if text == "ヘルプ" || text == "?" || text.eq_ignore_ascii_case("help") {
        return Command::Help;
    }
    match text {
        "。" | "/" | "空き" | "空き時間" => Command::Search,
        _ => Command::Unknown,
    }
}

/// Whether replying to `command` needs a free-slot search.
pub fn needs_search(command: Command) -> bool {
    command == Command::Search
}

/// The reply text for `command`.
///
/// `slots` is only read for [`Command::Search`].
pub fn reply(command: Command, slots: &[FreeSlot]) -> String {
    match command {
        Command::Search => render_free_slots(slots),
        Command::Help => HELP_MESSAGE.to_string(),
        Command::Unknown => USAGE_HINT.to_string(),
    }
}
