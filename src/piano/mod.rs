// 定数名は"Cs4"のように音名そのままにする。
#![allow(non_upper_case_globals)]

use std::{collections::HashMap, sync::OnceLock};

use crate::scale::{note::ENoteName, Scale};

/// 88鍵ピアノの鍵盤の数
pub const KEY_COUNT: usize = 88;

/// 1オクターブ分（CからBまで）の定数を定義する。
macro_rules! piano_octave {
    ($octave:literal => $c:ident, $cs:ident, $d:ident, $ds:ident, $e:ident, $f:ident,
     $fs:ident, $g:ident, $gs:ident, $a:ident, $a_s:ident, $b:ident) => {
        pub const $c: Scale = Scale::from_note(ENoteName::C, $octave);
        pub const $cs: Scale = Scale::from_note(ENoteName::Cs, $octave);
        pub const $d: Scale = Scale::from_note(ENoteName::D, $octave);
        pub const $ds: Scale = Scale::from_note(ENoteName::Ds, $octave);
        pub const $e: Scale = Scale::from_note(ENoteName::E, $octave);
        pub const $f: Scale = Scale::from_note(ENoteName::F, $octave);
        pub const $fs: Scale = Scale::from_note(ENoteName::Fs, $octave);
        pub const $g: Scale = Scale::from_note(ENoteName::G, $octave);
        pub const $gs: Scale = Scale::from_note(ENoteName::Gs, $octave);
        pub const $a: Scale = Scale::from_note(ENoteName::A, $octave);
        pub const $a_s: Scale = Scale::from_note(ENoteName::As, $octave);
        pub const $b: Scale = Scale::from_note(ENoteName::B, $octave);
    };
}

// 0オクターブはA0から始まる。
pub const A0: Scale = Scale::from_note(ENoteName::A, 0);
pub const As0: Scale = Scale::from_note(ENoteName::As, 0);
pub const B0: Scale = Scale::from_note(ENoteName::B, 0);

piano_octave!(1 => C1, Cs1, D1, Ds1, E1, F1, Fs1, G1, Gs1, A1, As1, B1);
piano_octave!(2 => C2, Cs2, D2, Ds2, E2, F2, Fs2, G2, Gs2, A2, As2, B2);
piano_octave!(3 => C3, Cs3, D3, Ds3, E3, F3, Fs3, G3, Gs3, A3, As3, B3);
piano_octave!(4 => C4, Cs4, D4, Ds4, E4, F4, Fs4, G4, Gs4, A4, As4, B4);
piano_octave!(5 => C5, Cs5, D5, Ds5, E5, F5, Fs5, G5, Gs5, A5, As5, B5);
piano_octave!(6 => C6, Cs6, D6, Ds6, E6, F6, Fs6, G6, Gs6, A6, As6, B6);
piano_octave!(7 => C7, Cs7, D7, Ds7, E7, F7, Fs7, G7, Gs7, A7, As7, B7);

// 8オクターブはC8だけ。
pub const C8: Scale = Scale::from_note(ENoteName::C, 8);

/// 一番低い鍵盤
pub const LOWEST: Scale = A0;
/// 一番高い鍵盤
pub const HIGHEST: Scale = C8;

const_assert_eq!(A0.key_number(), Scale::LOWEST_PIANO_KEY);
const_assert_eq!(A4.key_number(), Scale::KEY_A4);
const_assert_eq!(C8.key_number(), Scale::HIGHEST_PIANO_KEY);
const_assert_eq!(KEY_COUNT as i32, Scale::HIGHEST_PIANO_KEY - Scale::LOWEST_PIANO_KEY + 1);
const_assert_eq!(C1.key_number(), B0.key_number() + 1);

/// A0からC8まで、低い順に全鍵盤を返す。
///
/// ```
/// # use scale440::piano;
/// assert_eq!(piano::keys().count(), piano::KEY_COUNT);
/// assert_eq!(piano::keys().next(), Some(piano::A0));
/// ```
pub fn keys() -> impl DoubleEndedIterator<Item = Scale> {
    (LOWEST.key_number()..=HIGHEST.key_number()).map(Scale::from_key)
}

/// 音名から鍵盤への対応表。最初に参照された時に1回だけ作る。
pub fn table() -> &'static HashMap<String, Scale> {
    static TABLE: OnceLock<HashMap<String, Scale>> = OnceLock::new();
    TABLE.get_or_init(|| keys().map(|scale| (scale.to_string(), scale)).collect())
}

/// `"Cs3"`のような定数名から鍵盤を探す。ピアノの範囲外ならNoneを返す。
///
/// ```
/// # use scale440::piano;
/// assert_eq!(piano::lookup("A4"), Some(piano::A4));
/// assert_eq!(piano::lookup("C9"), None);
/// ```
pub fn lookup(name: &str) -> Option<Scale> {
    table().get(name).copied()
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
