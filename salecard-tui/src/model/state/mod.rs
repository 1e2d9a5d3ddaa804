//! 页面状态模块
//!
//! 定义目录页面、草稿和弹窗的状态数据结构

mod catalog;
mod draft;
mod modal;

pub use catalog::{CatalogState, Submission};
pub use draft::{Draft, DraftField, DraftMode, FieldValue};
pub use modal::{Modal, ModalState};
