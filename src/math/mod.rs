use num_traits::Float;

/// 12平均律の計算に使う定数を型ごとに提供する。
pub trait TwelveTetConstant: Float {
    /// 2の12乗根。半音1つ分の周波数比。
    const TWELFTH_ROOT_OF_TWO: Self;
}

macro_rules! twelve_tet_impl {
    ($t:ty) => {
        impl TwelveTetConstant for $t {
            const TWELFTH_ROOT_OF_TWO: Self = 1.059_463_094_359_295_3;
        }
    };
}

twelve_tet_impl!(f32);
twelve_tet_impl!(f64);

/// `semitones`分の半音を移動したときの周波数比を返す。
///
/// ```
/// # use scale440::math::semitone_ratio;
/// assert_eq!(semitone_ratio(0.0f64), 1.0);
/// assert!((semitone_ratio(12.0f64) - 2.0).abs() < 1e-12);
/// assert!((semitone_ratio(-12.0f32) - 0.5).abs() < 1e-6);
/// ```
pub fn semitone_ratio<T>(semitones: T) -> T
where
    T: TwelveTetConstant,
{
    T::TWELFTH_ROOT_OF_TWO.powf(semitones)
}

/// `reference`から`frequency`まで何半音離れているかを連続値で返す。
/// 丸めはしないので、呼び出し側で処理すること。
///
/// 両方とも正の値であることを前提にする。そうでない場合はNaNか無限大になる。
///
/// ```
/// # use scale440::math::semitone_offset;
/// assert!((semitone_offset(880.0f64, 440.0) - 12.0).abs() < 1e-9);
/// assert!((semitone_offset(220.0f64, 440.0) + 12.0).abs() < 1e-9);
/// ```
pub fn semitone_offset<T>(frequency: T, reference: T) -> T
where
    T: TwelveTetConstant,
{
    (frequency / reference).ln() / T::TWELFTH_ROOT_OF_TWO.ln()
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
