use serde::{Deserialize, Serialize};

use crate::error::EScaleError;

/// 音源に渡す音色。General MIDIのプログラム番号に対応する。
///
/// 各楽器ファミリーの代表だけを名前で持ち、その他は[`EInstrument::Program`]で直接指定する。
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EInstrument {
    #[default]
    Piano1,
    Piano2,
    Piano3,
    Harpsichord,
    Celesta,
    MusicBox,
    Vibraphone,
    Marimba,
    DrawbarOrgan,
    NylonGuitar,
    AcousticBass,
    Violin,
    StringEnsemble1,
    Trumpet,
    SopranoSax,
    Flute,
    SquareLead,
    NewAgePad,
    Sitar,
    TinkleBell,
    /// プログラム番号を直接指定する。[`EInstrument::from_program`]で作ること。
    Program(u8),
}

impl EInstrument {
    /// General MIDIの一番大きいプログラム番号
    pub const MAX_PROGRAM: u8 = 127;

    /// プログラム番号から作る。範囲外なら[`EScaleError::InvalidProgram`]を返す。
    ///
    /// ```
    /// # use scale440::{sound::EInstrument, EScaleError};
    /// assert_eq!(EInstrument::from_program(42), Ok(EInstrument::Program(42)));
    /// assert_eq!(EInstrument::from_program(128), Err(EScaleError::InvalidProgram(128)));
    /// ```
    pub fn from_program(number: u8) -> Result<Self, EScaleError> {
        if number > Self::MAX_PROGRAM {
            return Err(EScaleError::InvalidProgram(number));
        }
        Ok(Self::Program(number))
    }

    /// General MIDIのプログラム番号（0始まり）を返す。
    ///
    /// ```
    /// # use scale440::sound::EInstrument;
    /// assert_eq!(EInstrument::Piano1.program_number(), 0);
    /// assert_eq!(EInstrument::Violin.program_number(), 40);
    /// assert_eq!(EInstrument::Program(200).program_number(), 127);
    /// ```
    pub fn program_number(self) -> u8 {
        match self {
            Self::Piano1 => 0,
            Self::Piano2 => 1,
            Self::Piano3 => 2,
            Self::Harpsichord => 6,
            Self::Celesta => 8,
            Self::MusicBox => 10,
            Self::Vibraphone => 11,
            Self::Marimba => 12,
            Self::DrawbarOrgan => 16,
            Self::NylonGuitar => 24,
            Self::AcousticBass => 32,
            Self::Violin => 40,
            Self::StringEnsemble1 => 48,
            Self::Trumpet => 56,
            Self::SopranoSax => 64,
            Self::Flute => 73,
            Self::SquareLead => 80,
            Self::NewAgePad => 88,
            Self::Sitar => 104,
            Self::TinkleBell => 112,
            // 直接作られた範囲外の値は音源に渡せないので丸める。
            Self::Program(number) if number > Self::MAX_PROGRAM => {
                log::warn!(
                    "Program number {} is out of the General MIDI range, clamped to {}.",
                    number,
                    Self::MAX_PROGRAM
                );
                Self::MAX_PROGRAM
            }
            Self::Program(number) => number,
        }
    }
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
