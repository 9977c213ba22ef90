//! Board Endpoints
//!
//! Public Kanban lists and card creation.

use crate::board;
use crate::models::BoardList;
use super::{get_list, post_form, ApiBody, ApiError};

pub async fn list_board_lists(board_id: u32) -> Result<Vec<BoardList>, ApiError> {
    get_list(&format!("/api/public/boards/{}/lists/", board_id)).await
}

/// Create a card; the backend expects form-urlencoded `title` and `list`
pub async fn create_card(list_id: u32, title: &str) -> Result<ApiBody, ApiError> {
    post_form(&format!("/api/public/lists/{}/cards/", list_id), board::card_form_body(title, list_id)).await
}
