use serde::{Deserialize, Serialize};

use crate::{error::EScaleError, scale::Scale};

/// 鍵盤番号から音源側のキー番号（[`u8`]）への変換設定。
///
/// 音源ごとに番号の振り方が違うので、ずらす量と受け付ける範囲を設定で持つ。
/// [`KeyMapping::default`]は鍵盤番号から20を引く。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct KeyMapping {
    /// 鍵盤番号に足す値
    pub offset: i32,
    /// 受け付ける一番小さいキー番号
    pub min_key: u8,
    /// 受け付ける一番大きいキー番号
    pub max_key: u8,
}

impl Default for KeyMapping {
    fn default() -> Self {
        Self {
            offset: -20,
            min_key: u8::MIN,
            max_key: u8::MAX,
        }
    }
}

impl KeyMapping {
    /// MIDIノート番号への変換。A4（49）が69になる。
    pub const fn midi() -> Self {
        Self {
            offset: 20,
            min_key: 0,
            max_key: 127,
        }
    }

    /// ずらす量だけを指定して、範囲は[`u8`]全体にする。
    pub const fn with_offset(offset: i32) -> Self {
        Self {
            offset,
            min_key: u8::MIN,
            max_key: u8::MAX,
        }
    }

    /// `scale`を音源側のキー番号に変換する。
    /// 範囲外なら切り詰めずに[`EScaleError::KeyOutOfRange`]を返す。
    ///
    /// ```
    /// # use scale440::{piano, sound::KeyMapping};
    /// assert_eq!(KeyMapping::midi().map(piano::A4), Ok(69));
    /// assert_eq!(KeyMapping::default().map(piano::A4), Ok(29));
    /// assert!(KeyMapping::default().map(piano::A0).is_err());
    /// ```
    pub fn map(&self, scale: Scale) -> Result<u8, EScaleError> {
        let key = (scale.key_number() as i64) + (self.offset as i64);
        if key < (self.min_key as i64) || key > (self.max_key as i64) {
            log::warn!(
                "Scale {} (key {}) is out of the sound source range [{}, {}].",
                scale,
                scale.key_number(),
                self.min_key,
                self.max_key
            );
            return Err(EScaleError::KeyOutOfRange {
                key,
                min: self.min_key,
                max: self.max_key,
            });
        }

        Ok(key as u8)
    }
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
