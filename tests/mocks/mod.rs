mod mock_book_repository;
mod scripted_console;

#[allow(unused_imports)]
pub use mock_book_repository::MockBookRepository;
#[allow(unused_imports)]
pub use scripted_console::ScriptedConsole;
