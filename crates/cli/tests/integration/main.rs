mod get_tests;
mod save_tests;
