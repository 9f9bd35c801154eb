mod body;
mod fields;
mod footer;
mod header;
mod history;
mod layout;
mod popup;

pub use body::render_body;
pub use footer::render_footer;
pub use header::render_header;
pub use history::render_history;
pub use popup::render_popup;
