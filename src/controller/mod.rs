pub mod search_controller;
