//! Interactive prism visualizer
//!
//! Shows a subdivided rectangular prism, highlights the face under the
//! cursor and lets the dimensions and subdivision counts be edited in place.

pub mod app;
pub mod config;
pub mod panels;
pub mod state;
pub mod theme;

pub use app::BoxVizApp;
pub use config::AppConfig;
