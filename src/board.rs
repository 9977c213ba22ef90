//! Kanban Board Helpers
//!
//! Maps backend lists onto the fixed To Do / Doing / Done columns.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{BoardList, Card};

/// Characters left as-is in form-urlencoded values
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'*');

/// Column key and title, in display order
pub const COLUMNS: [(&str, &str); 3] = [("todo", "To Do"), ("doing", "Doing"), ("done", "Done")];

#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub key: &'static str,
    pub title: &'static str,
    /// Backing backend list; `None` when the board has no such list
    pub list_id: Option<u32>,
    pub cards: Vec<Card>,
}

/// Match each fixed column to the backend list of the same name
/// (case-insensitive). Unmatched columns come back empty.
pub fn arrange_columns(lists: &[BoardList]) -> Vec<BoardColumn> {
    COLUMNS
        .iter()
        .map(|&(key, title)| {
            let list = lists.iter().find(|l| l.name.trim().eq_ignore_ascii_case(title));
            BoardColumn {
                key,
                title,
                list_id: list.map(|l| l.id),
                cards: list.map(|l| l.cards.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

/// `title=...&list=...` body for card creation
pub fn card_form_body(title: &str, list_id: u32) -> String {
    format!("title={}&list={}", utf8_percent_encode(title, FORM_VALUE), list_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: u32, name: &str, cards: &[&str]) -> BoardList {
        BoardList {
            id,
            name: name.to_string(),
            position: id,
            cards: cards
                .iter()
                .enumerate()
                .map(|(i, t)| Card { id: id * 100 + i as u32, title: t.to_string() })
                .collect(),
        }
    }

    #[test]
    fn test_arrange_columns_matches_by_name() {
        let lists = vec![list(7, "done", &["Ship it"]), list(3, "TO DO", &["Spec", "Plan"]), list(9, "Backlog", &["Later"])];
        let columns = arrange_columns(&lists);

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].title, "To Do");
        assert_eq!(columns[0].list_id, Some(3));
        assert_eq!(columns[0].cards.len(), 2);

        assert_eq!(columns[1].title, "Doing");
        assert_eq!(columns[1].list_id, None);
        assert!(columns[1].cards.is_empty());

        assert_eq!(columns[2].list_id, Some(7));
        assert_eq!(columns[2].cards[0].title, "Ship it");
    }

    #[test]
    fn test_card_form_body_encodes_title() {
        assert_eq!(card_form_body("Fix login & signup", 4), "title=Fix%20login%20%26%20signup&list=4");
        assert_eq!(card_form_body("v1.2_final-draft", 1), "title=v1.2_final-draft&list=1");
    }
}
