/// 音階の生成や変換で起きるエラー。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EScaleError {
    /// 周波数が有限の正の値ではない。
    #[error("frequency must be finite and positive, but got {0}Hz.")]
    InvalidFrequency(f64),
    /// 音名として解析できない文字列。
    #[error("`{0}` is not a valid note name.")]
    InvalidNoteName(String),
    /// 音源側の鍵盤範囲に収まらない。
    #[error("key {key} can not be mapped into the sound source range [{min}, {max}].")]
    KeyOutOfRange { key: i64, min: u8, max: u8 },
    /// General MIDIのプログラム番号`[0, 127]`の範囲外。
    #[error("program number {0} is out of the General MIDI range [0, 127].")]
    InvalidProgram(u8),
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
