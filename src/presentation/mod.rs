mod components;
mod view;

pub use view::{PopupRender, UiContext, draw};
