#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

mod draw;
mod fit;
mod font;

pub use draw::*;
pub use fit::fit_within;
pub use font::load_label_font;
