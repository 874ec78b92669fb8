//! Widgets
//!
//! One widget per shell layer. Both draw straight from the core's view
//! models and hold no state of their own.

mod detail;
mod overview;

pub use detail::DetailWidget;
pub use overview::OverviewWidget;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
