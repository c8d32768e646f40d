use serde::{Deserialize, Serialize};

/// ヘルツ単位の周波数を表す。
///
/// 数値をそのまま[`Scale`](super::Scale)に渡すと鍵盤番号として扱われるので、
/// 周波数から音階を作りたい時はこれで包む。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, PartialOrd)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Freq(f64);

impl Freq {
    pub const fn new(freq: f64) -> Self {
        Self(freq)
    }

    /// 周波数の値を返す。
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Freq {
    fn from(freq: f64) -> Self {
        Self::new(freq)
    }
}

/// 数値リテラルに`.hz()`を付けて[`Freq`]を作るためのtrait。
///
/// ```
/// # use scale440::HzLiteral;
/// assert_eq!(440.hz().get(), 440.0);
/// assert_eq!(261.63.hz().get(), 261.63);
/// ```
pub trait HzLiteral {
    fn hz(self) -> Freq;
}

macro_rules! hz_literal_impl {
    ($($t:ty),*) => {
        $(
            impl HzLiteral for $t {
                #[inline]
                fn hz(self) -> Freq {
                    Freq::new(self as f64)
                }
            }
        )*
    };
}

hz_literal_impl!(i32, i64, u32, u64, f32, f64);

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
