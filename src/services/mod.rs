pub mod category_service;
pub mod pagination;
pub mod question_service;
pub mod quiz_selector;
pub mod quiz_service;
