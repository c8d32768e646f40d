use std::time::Duration;

use derive_builder::Builder;

use crate::scale::Scale;

pub mod instrument;
pub mod mapping;

pub use instrument::EInstrument;
pub use mapping::KeyMapping;

/// 音源に渡す発音の要求。
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
#[builder(default)]
pub struct SoundRequest {
    pub instrument: EInstrument,
    /// 音源側のキー番号。[`KeyMapping`]で変換済みの値。
    pub key: u8,
    pub duration: Duration,
}

impl Default for SoundRequest {
    /// ピアノで1秒間。
    fn default() -> Self {
        Self {
            instrument: EInstrument::Piano1,
            key: 0,
            duration: Duration::from_secs(1),
        }
    }
}

/// 外部の音声合成エンジンを表すtrait。
///
/// 音階側はこのtraitにしか依存しないので、どの音源でも差し替えられる。
pub trait TSoundSource {
    /// 音源が返す再生可能な音声のハンドル
    type Audio;

    /// 鍵盤番号から自分のキー番号への変換設定を返す。
    fn key_mapping(&self) -> KeyMapping {
        KeyMapping::default()
    }

    /// 要求に合わせて音声を生成する。
    fn render(&self, request: &SoundRequest) -> anyhow::Result<Self::Audio>;
}

impl Scale {
    /// 音を生成する。
    ///
    /// キー番号は`source`の[`TSoundSource::key_mapping`]で変換する。
    /// 変換できない音階や範囲外のプログラム番号は、音源を呼ばずにエラーを返す。
    pub fn gen_audio<S>(self, source: &S, time: Duration, inst: EInstrument) -> anyhow::Result<S::Audio>
    where
        S: TSoundSource + ?Sized,
    {
        if let EInstrument::Program(number) = inst {
            EInstrument::from_program(number)?;
        }
        let key = source.key_mapping().map(self)?;
        let request = SoundRequestBuilder::default()
            .instrument(inst)
            .key(key)
            .duration(time)
            .build()?;

        log::debug!("Render {} as {:?}.", self, request);
        source.render(&request)
    }

    /// [`SoundRequest::default`]の音色と長さで音を生成する。
    pub fn gen_audio_default<S>(self, source: &S) -> anyhow::Result<S::Audio>
    where
        S: TSoundSource + ?Sized,
    {
        let SoundRequest {
            instrument, duration, ..
        } = SoundRequest::default();
        self.gen_audio(source, duration, instrument)
    }
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
