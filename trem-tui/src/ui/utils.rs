pub mod terminal_guard;
