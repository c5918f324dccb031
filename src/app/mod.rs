mod app;
mod cli;

pub use app::App;
