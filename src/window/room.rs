// Room classification from process names and window titles
//
// Window titles are the only signal available without per-vendor integration,
// so every rule here is a substring test over lower-cased text. Missing a real
// table is acceptable; picking up a lobby is not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The poker operator a window belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    Unknown,
    PokerStars,
    GGPoker,
    /// Any process with "poker" in its name that no named vendor claimed.
    /// These clients ignore plain resize calls and get special handling.
    Poker888,
    PartyPoker,
    WptGlobal,
    CoinPoker,
}

impl Room {
    pub const ALL: [Room; 7] = [
        Room::Unknown,
        Room::PokerStars,
        Room::GGPoker,
        Room::Poker888,
        Room::PartyPoker,
        Room::WptGlobal,
        Room::CoinPoker,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Room::Unknown => "Unknown",
            Room::PokerStars => "PokerStars",
            Room::GGPoker => "GGPoker",
            Room::Poker888 => "888Poker",
            Room::PartyPoker => "PartyPoker",
            Room::WptGlobal => "WPT Global",
            Room::CoinPoker => "CoinPoker",
        }
    }

    /// Rooms whose windows are positioned before all others.
    pub fn needs_forced_positioning(&self) -> bool {
        matches!(self, Room::Poker888)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// Evaluated top to bottom. The bare "poker" rule has to stay last because it
// is a substring of most of the names above it.
const PROCESS_RULES: &[(&[&str], Room)] = &[
    (&["pokerstars"], Room::PokerStars),
    (&["partypoker", "bwin", "partygaming"], Room::PartyPoker),
    (&["ggpoker", "ggpokerok", "ggnet"], Room::GGPoker),
    (&["coinpoker"], Room::CoinPoker),
    (&["wpt", "wptglobal"], Room::WptGlobal),
    (&["poker"], Room::Poker888),
];

/// Client surfaces that are never tables, in English and Portuguese.
const EXCLUDED_TITLES: &[&str] = &[
    "lobby",
    "salão",
    "cashier",
    "caixa",
    "settings",
    "configurações",
    "account",
    "conta",
    "help",
    "ajuda",
    "statistics",
    "estatísticas",
    "hand history",
    "histórico",
    "notes",
    "notas",
    "chat",
    "support",
    "suporte",
];

const GAME_TYPES: &[&str] = &["hold'em", "holdem", "omaha"];
const LIMIT_TOKENS: &[&str] = &["nlh", "plo", "nl", "pl"];
const CASH_GLYPHS: &[&str] = &["$", "€", "¢"];
const BLIND_SEPARATORS: &[&str] = &["/", "-"];
const TOURNAMENT_TOKENS: &[&str] = &["tournament", "tourney", "sit & go", "sit&go"];
const STARS_TABLE_TOKENS: &[&str] = &["tournament", "torneio", "table"];
const GG_TABLE_TOKENS: &[&str] = &["mesa", "table"];
const GG_STAKE_TOKENS: &[&str] = &["$", "hold'em", "holdem", "omaha"];
const COIN_TABLE_TOKENS: &[&str] = &["usdt", "table", "nlh", "plo"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn has_money_or_game(title: &str) -> bool {
    title.contains('$') || contains_any(title, GAME_TYPES)
}

/// Maps an owning process name to a room. The title is accepted for symmetry
/// with [`is_table`] but only the process name decides the room.
pub fn classify(process_name: &str, _title: &str) -> Room {
    let process = process_name.to_lowercase();
    PROCESS_RULES
        .iter()
        .find(|(patterns, _)| contains_any(&process, patterns))
        .map(|(_, room)| *room)
        .unwrap_or(Room::Unknown)
}

/// True when the title names a surface that is never a table.
pub fn is_excluded_title(title: &str) -> bool {
    contains_any(&title.to_lowercase(), EXCLUDED_TITLES)
}

/// Decides whether a window of `room` with this title is an active table.
pub fn is_table(room: Room, title: &str) -> bool {
    let title = title.to_lowercase();
    if title.trim().is_empty() || contains_any(&title, EXCLUDED_TITLES) {
        return false;
    }

    match room {
        Room::Poker888 => {
            let cash = contains_any(&title, LIMIT_TOKENS)
                && contains_any(&title, CASH_GLYPHS)
                && contains_any(&title, BLIND_SEPARATORS);
            cash || contains_any(&title, TOURNAMENT_TOKENS)
        }
        Room::PokerStars => has_money_or_game(&title) || contains_any(&title, STARS_TABLE_TOKENS),
        Room::GGPoker => {
            contains_any(&title, GG_TABLE_TOKENS) && contains_any(&title, GG_STAKE_TOKENS)
        }
        Room::CoinPoker => contains_any(&title, COIN_TABLE_TOKENS),
        Room::WptGlobal => has_money_or_game(&title) || title.contains("table"),
        Room::PartyPoker | Room::Unknown => has_money_or_game(&title),
    }
}

/// Classifies and validates in one step. `None` means "not a table window".
pub fn classify_table(process_name: &str, title: &str) -> Option<Room> {
    if process_name.trim().is_empty() {
        return None;
    }
    let room = classify(process_name, title);
    is_table(room, title).then_some(room)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_priority() {
        assert_eq!(classify("PokerStars.exe", ""), Room::PokerStars);
        assert_eq!(classify("GGPoker.exe", ""), Room::GGPoker);
        assert_eq!(classify("ggpokerok", ""), Room::GGPoker);
        assert_eq!(classify("GGnet.exe", ""), Room::GGPoker);
        assert_eq!(classify("CoinPoker", ""), Room::CoinPoker);
        assert_eq!(classify("partypoker.exe", ""), Room::PartyPoker);
        assert_eq!(classify("bwin", ""), Room::PartyPoker);
        assert_eq!(classify("PartyGaming", ""), Room::PartyPoker);
        assert_eq!(classify("WPTGlobal.exe", ""), Room::WptGlobal);
        assert_eq!(classify("888poker", ""), Room::Poker888);
        assert_eq!(classify("pacificpoker", ""), Room::Poker888);
        assert_eq!(classify("chrome.exe", ""), Room::Unknown);
        assert_eq!(classify("", ""), Room::Unknown);
    }

    #[test]
    fn test_stars_table_and_lobby() {
        let title = "Table 'Halley' - $0.01/$0.02 USD - No Limit Hold'em";
        assert_eq!(classify("pokerstars.exe", title), Room::PokerStars);
        assert!(is_table(Room::PokerStars, title));
        assert!(!is_table(Room::PokerStars, "PokerStars Lobby"));
        assert_eq!(classify_table("pokerstars.exe", "Lobby"), None);
    }

    #[test]
    fn test_excluded_titles_rejected_for_every_room() {
        for room in Room::ALL {
            assert!(!is_table(room, "Account Settings"), "{:?}", room);
            assert!(!is_table(room, "Cashier - $ Hold'em"), "{:?}", room);
            assert!(!is_table(room, "Salão principal $"), "{:?}", room);
        }
    }

    #[test]
    fn test_poker888_rules() {
        assert!(is_table(Room::Poker888, "NLH $0.05/$0.10 - Wellington"));
        assert!(is_table(Room::Poker888, "Sit & Go 6 max"));
        assert!(is_table(Room::Poker888, "Tourney #12345"));
        // currency without a limit token is not enough
        assert!(!is_table(Room::Poker888, "$ 5/10"));
        // limit and currency but no blind separator
        assert!(!is_table(Room::Poker888, "NLH $5"));
    }

    #[test]
    fn test_ggpoker_needs_table_designator() {
        assert!(is_table(Room::GGPoker, "Mesa 12 - Hold'em $0.02"));
        assert!(is_table(Room::GGPoker, "Table 3 omaha"));
        assert!(!is_table(Room::GGPoker, "Hold'em $0.02"));
        assert!(!is_table(Room::GGPoker, "Mesa final"));
    }

    #[test]
    fn test_coin_and_wpt_rules() {
        assert!(is_table(Room::CoinPoker, "NLH 0.1/0.2 USDT"));
        assert!(!is_table(Room::CoinPoker, "CoinPoker"));
        assert!(is_table(Room::WptGlobal, "Table 7"));
        assert!(is_table(Room::WptGlobal, "Omaha 1/2"));
        assert!(!is_table(Room::WptGlobal, "WPT Global"));
    }

    #[test]
    fn test_fallback_rules() {
        assert!(is_table(Room::PartyPoker, "Holdem 0.05/0.10"));
        assert!(!is_table(Room::PartyPoker, "Table 4"));
        assert!(is_table(Room::Unknown, "$1 Spin"));
        assert!(!is_table(Room::Unknown, "Untitled - Notepad"));
    }

    #[test]
    fn test_empty_inputs_are_never_tables() {
        assert!(!is_table(Room::PokerStars, ""));
        assert!(!is_table(Room::PokerStars, "   "));
        assert_eq!(classify_table("", "$0.01/$0.02 Hold'em"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Room::Poker888.to_string(), "888Poker");
        assert_eq!(Room::WptGlobal.to_string(), "WPT Global");
    }
}
