use std::{
    fmt,
    ops::{Add, AddAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::EScaleError,
    math::{self, TwelveTetConstant},
};

pub mod freq;
pub mod note;

use freq::Freq;
use note::ENoteName;

/// 88鍵ピアノの鍵盤番号で表す音階。
///
/// 鍵盤番号は1がA0、49がA4（440Hz）、88がC8になる。
/// 範囲外の番号も鍵盤の外の音として扱い、拒否はしない。
///
/// 周波数ではなく整数の鍵盤番号を持つので、移調を何回繰り返しても誤差は出ない。
/// 周波数は必要な時に[`Scale::frequency`]で計算する。
///
/// ```
/// # use scale440::{Scale, HzLiteral};
/// let a4 = Scale::from_key(49);
/// assert_eq!(a4.frequency(), 440.0);
/// assert_eq!(Scale::from_freq(440.hz()), Ok(a4));
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Scale(i32);

impl Scale {
    /// 基準周波数（A4）
    pub const FREQ_A4: f64 = 440.0;
    /// 基準音（A4）の鍵盤番号
    pub const KEY_A4: i32 = 49;
    /// 2の12乗根
    pub const TWELFTH_ROOT_OF_TWO: f64 = <f64 as TwelveTetConstant>::TWELFTH_ROOT_OF_TWO;
    /// 1オクターブの半音数
    pub const SEMITONES_PER_OCTAVE: i32 = 12;
    /// 88鍵ピアノの一番低い鍵盤番号（A0）
    pub const LOWEST_PIANO_KEY: i32 = 1;
    /// 88鍵ピアノの一番高い鍵盤番号（C8）
    pub const HIGHEST_PIANO_KEY: i32 = 88;

    /// A0の前にあるG#0からCまでの距離。鍵盤番号とオクターブの変換に使う。
    const KEY_OFFSET_FROM_C: i32 = 8;

    /// 鍵盤番号をそのまま持つ音階を作る。
    pub const fn from_key(number: i32) -> Self {
        Self(number)
    }

    /// 音名とオクターブから作る。オクターブはCで切り替わる。
    ///
    /// ```
    /// # use scale440::{Scale, ENoteName};
    /// assert_eq!(Scale::from_note(ENoteName::A, 0).key_number(), 1);
    /// assert_eq!(Scale::from_note(ENoteName::C, 1).key_number(), 4);
    /// assert_eq!(Scale::from_note(ENoteName::C, 8).key_number(), 88);
    /// ```
    pub const fn from_note(name: ENoteName, octave: i32) -> Self {
        Self(octave * Self::SEMITONES_PER_OCTAVE + name.semitone() - Self::KEY_OFFSET_FROM_C)
    }

    /// [`Scale::from_note`]と同じだが、鍵盤番号が[`i32`]に収まらない時はNoneを返す。
    ///
    /// ```
    /// # use scale440::{Scale, ENoteName};
    /// assert_eq!(Scale::checked_from_note(ENoteName::A, 4), Some(Scale::from_key(49)));
    /// assert_eq!(Scale::checked_from_note(ENoteName::A, 200_000_000), None);
    /// ```
    pub const fn checked_from_note(name: ENoteName, octave: i32) -> Option<Self> {
        let Some(base) = octave.checked_mul(Self::SEMITONES_PER_OCTAVE) else {
            return None;
        };
        let Some(number) = base.checked_add(name.semitone() - Self::KEY_OFFSET_FROM_C) else {
            return None;
        };
        Some(Self(number))
    }

    /// 周波数から一番近い半音の音階を作る。
    ///
    /// 丸めは`0.5`を0から遠い方に寄せる（[`f64::round`]）。
    /// 有限の正の値ではない周波数は[`EScaleError::InvalidFrequency`]を返す。
    pub fn from_freq(freq: Freq) -> Result<Self, EScaleError> {
        let value = freq.get();
        if !value.is_finite() || value <= 0.0 {
            log::debug!("Rejected frequency {}Hz for scale conversion.", value);
            return Err(EScaleError::InvalidFrequency(value));
        }

        let offset = math::semitone_offset(value, Self::FREQ_A4).round();
        Ok(Self(Self::KEY_A4 + offset as i32))
    }

    /// 鍵盤番号を取得
    pub const fn key_number(self) -> i32 {
        self.0
    }

    /// 周波数を計算する。
    ///
    /// 極端な鍵盤番号では無限大や0に近づくが、エラーにはしない。
    pub fn frequency(self) -> f64 {
        let semitones = (self.0 as f64) - (Self::KEY_A4 as f64);
        Self::FREQ_A4 * math::semitone_ratio(semitones)
    }

    /// [`Scale::frequency`]を[`Freq`]で返す。
    pub fn to_freq(self) -> Freq {
        Freq::new(self.frequency())
    }

    /// 2つの音階の間の半音数。常に0以上で、順番に依存しない。
    pub fn distance(self, other: Scale) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// 音名を返す。
    pub const fn note_name(self) -> ENoteName {
        ENoteName::from_semitone(self.0.rem_euclid(Self::SEMITONES_PER_OCTAVE) + Self::KEY_OFFSET_FROM_C)
    }

    /// オクターブ番号を返す。Cで切り替わるので、A0とB0は0、C1からは1になる。
    pub const fn octave(self) -> i32 {
        let shifted = (self.0 as i64) + (Self::KEY_OFFSET_FROM_C as i64);
        shifted.div_euclid(Self::SEMITONES_PER_OCTAVE as i64) as i32
    }

    /// 88鍵ピアノの範囲内か？
    pub const fn is_on_piano(self) -> bool {
        self.0 >= Self::LOWEST_PIANO_KEY && self.0 <= Self::HIGHEST_PIANO_KEY
    }

    /// 1音高くする。前置インクリメントと同じく、変更後の自分を返す。
    pub fn increment(&mut self) -> &mut Self {
        self.0 += 1;
        self
    }

    /// 1音高くする。後置インクリメントと同じく、変更前の値を返す。
    ///
    /// ```
    /// # use scale440::Scale;
    /// let mut scale = Scale::from_key(49);
    /// let before = scale.post_increment();
    /// assert_eq!(before.key_number(), 49);
    /// assert_eq!(scale.key_number(), 50);
    /// ```
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.0 += 1;
        previous
    }

    /// 1音低くする。変更後の自分を返す。
    pub fn decrement(&mut self) -> &mut Self {
        self.0 -= 1;
        self
    }

    /// 1音低くする。変更前の値を返す。
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.0 -= 1;
        previous
    }

    /// `n`オクターブ上の音階を返す。
    pub const fn octave_up(self, n: i32) -> Self {
        Self(self.0 + n * Self::SEMITONES_PER_OCTAVE)
    }

    /// `n`オクターブ下の音階を返す。
    pub const fn octave_down(self, n: i32) -> Self {
        Self(self.0 - n * Self::SEMITONES_PER_OCTAVE)
    }
}

impl From<i32> for Scale {
    fn from(number: i32) -> Self {
        Self::from_key(number)
    }
}

impl From<Scale> for i32 {
    fn from(scale: Scale) -> Self {
        scale.key_number()
    }
}

impl TryFrom<Freq> for Scale {
    type Error = EScaleError;

    fn try_from(freq: Freq) -> Result<Self, Self::Error> {
        Self::from_freq(freq)
    }
}

impl AddAssign for Scale {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<i32> for Scale {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl SubAssign for Scale {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl SubAssign<i32> for Scale {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

impl Add for Scale {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<i32> for Scale {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub for Scale {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<i32> for Scale {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

/// オクターブ加算
impl ShlAssign<i32> for Scale {
    fn shl_assign(&mut self, n: i32) {
        *self = self.octave_up(n);
    }
}

/// オクターブ減算
impl ShrAssign<i32> for Scale {
    fn shr_assign(&mut self, n: i32) {
        *self = self.octave_down(n);
    }
}

impl Shl<i32> for Scale {
    type Output = Self;

    fn shl(self, n: i32) -> Self::Output {
        self.octave_up(n)
    }
}

impl Shr<i32> for Scale {
    type Output = Self;

    fn shr(self, n: i32) -> Self::Output {
        self.octave_down(n)
    }
}

/// `"Cs4"`のように音名とオクターブで表示する。
impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note_name(), self.octave())
    }
}

impl FromStr for Scale {
    type Err = EScaleError;

    /// `"A4"`、`"Cs3"`、`"C#3"`、`"As-1"`などを受け付ける。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EScaleError::InvalidNoteName(s.to_owned());

        let split = s.find(|c: char| c.is_ascii_digit() || c == '-').ok_or_else(invalid)?;
        let (name, octave) = s.split_at(split);
        let name = name.parse::<ENoteName>().map_err(|_| invalid())?;
        let octave = octave.parse::<i32>().map_err(|_| invalid())?;

        Self::checked_from_note(name, octave).ok_or_else(invalid)
    }
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
