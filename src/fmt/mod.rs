//! Everything that turns a log call into text: styling, templates, message
//! interpolation and column padding.

mod pad;
pub mod printf;
pub mod style;
pub mod template;

pub use pad::{Alignment, pad, pad_to};
pub use style::{StyleCode, strip, style, style_all, visible_len};
pub use template::{FormatData, FormatTemplate, FormatValue, Formatted, Segment};
