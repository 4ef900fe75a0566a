pub mod purchase_modal;
pub mod resource_board;
