// 12平均律（A4 = 440Hz）の音階を鍵盤番号で扱うためのライブラリ。
// https://en.wikipedia.org/wiki/Piano_key_frequencies

#[macro_use]
extern crate static_assertions;

pub mod error;
pub mod math;
pub mod piano;
pub mod scale;
pub mod sound;

pub use error::EScaleError;
pub use scale::{
    freq::{Freq, HzLiteral},
    note::ENoteName,
    Scale,
};

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
