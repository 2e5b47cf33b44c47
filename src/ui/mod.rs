mod styles;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
