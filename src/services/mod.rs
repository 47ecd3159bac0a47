pub mod invoker;
pub mod selector;
pub mod window_manager;

pub use invoker::FocusInvoker;
pub use selector::create_selector;
pub use window_manager::create_window_manager;
