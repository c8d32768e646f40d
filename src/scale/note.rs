use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::EScaleError;

/// オクターブ内の音名。フラットは使わず、幹音とシャープだけで表す。
///
/// 並び順はCから始まる半音の順番と同じ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ENoteName {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl ENoteName {
    /// Cから順番に並んだ全音名。
    pub const ALL: [ENoteName; 12] = [
        Self::C,
        Self::Cs,
        Self::D,
        Self::Ds,
        Self::E,
        Self::F,
        Self::Fs,
        Self::G,
        Self::Gs,
        Self::A,
        Self::As,
        Self::B,
    ];

    /// 同じオクターブのCから何半音上なのかを返す。
    ///
    /// ```
    /// # use scale440::ENoteName;
    /// assert_eq!(ENoteName::C.semitone(), 0);
    /// assert_eq!(ENoteName::A.semitone(), 9);
    /// ```
    pub const fn semitone(self) -> i32 {
        self as i32
    }

    /// Cからの半音数から音名を返す。範囲外はオクターブを無視して折り返す。
    pub const fn from_semitone(semitone: i32) -> Self {
        Self::ALL[semitone.rem_euclid(12) as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cs => "Cs",
            Self::D => "D",
            Self::Ds => "Ds",
            Self::E => "E",
            Self::F => "F",
            Self::Fs => "Fs",
            Self::G => "G",
            Self::Gs => "Gs",
            Self::A => "A",
            Self::As => "As",
            Self::B => "B",
        }
    }

    /// シャープが付いている音名か？
    pub const fn is_sharp(self) -> bool {
        matches!(self, Self::Cs | Self::Ds | Self::Fs | Self::Gs | Self::As)
    }
}

impl fmt::Display for ENoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ENoteName {
    type Err = EScaleError;

    /// `"Cs"`と`"C#"`の両方を受け付ける。先頭の文字は小文字でもいい。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EScaleError::InvalidNoteName(s.to_owned());

        let mut chars = s.chars();
        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => Self::C,
            Some('D') => Self::D,
            Some('E') => Self::E,
            Some('F') => Self::F,
            Some('G') => Self::G,
            Some('A') => Self::A,
            Some('B') => Self::B,
            _ => return Err(invalid()),
        };

        match chars.as_str() {
            "" => Ok(natural),
            "s" | "#" => {
                let sharp = Self::from_semitone(natural.semitone() + 1);
                // E#とB#は幹音と重なるので受け付けない。
                if sharp.is_sharp() {
                    Ok(sharp)
                } else {
                    Err(invalid())
                }
            }
            _ => Err(invalid()),
        }
    }
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
