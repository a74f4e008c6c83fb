//! Request extractors

pub mod flash;
pub mod member_id;

pub use flash::{redirect_with, Flash, FlashLevel, FlashMessage};
pub use member_id::MemberId;
