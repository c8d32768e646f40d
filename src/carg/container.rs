use itertools::Itertools;
use scale440::{piano, sound::KeyMapping, Freq, Scale};
use serde::Serialize;

/// @brief パーシングされたコマンドのコンテナ。
/// これだけで一連の処理ができる。
#[derive(Debug, Clone)]
pub enum ECommandContainer {
    Freq { scale: Scale },
    Key { hz: f64 },
    Transpose { scale: Scale, semitones: i32, octaves: i32 },
    Distance { from: Scale, to: Scale },
    Table { json: bool },
    Map { scale: Scale, mapping: KeyMapping },
}

/// テーブル出力の1行分。
#[derive(Serialize, Debug)]
struct PianoKeyEntry {
    name: String,
    key: Scale,
    frequency: f64,
}

impl PianoKeyEntry {
    fn from_scale(scale: Scale) -> Self {
        Self {
            name: scale.to_string(),
            key: scale,
            frequency: scale.frequency(),
        }
    }
}

/// `"A4 (key 49): 440.000Hz"`の形で出力する。
fn describe(scale: Scale) -> String {
    format!("{} (key {}): {:.3}Hz", scale, scale.key_number(), scale.frequency())
}

impl ECommandContainer {
    /// コマンドを処理して、出力する文字列を返す。
    pub fn render(&self) -> anyhow::Result<String> {
        let output = match self {
            ECommandContainer::Freq { scale } => {
                if !scale.is_on_piano() {
                    log::info!("{} is outside of the 88-key piano.", scale);
                }
                describe(*scale)
            }
            ECommandContainer::Key { hz } => {
                let scale = Scale::from_freq(Freq::new(*hz))?;
                let cents = (*hz / scale.frequency()).log2() * 1200.0;
                format!("{} ({:+.1} cents)", describe(scale), cents)
            }
            ECommandContainer::Transpose {
                scale,
                semitones,
                octaves,
            } => {
                let transposed = (*scale + *semitones) << *octaves;
                format!("{} -> {}", describe(*scale), describe(transposed))
            }
            ECommandContainer::Distance { from, to } => from.distance(*to).to_string(),
            ECommandContainer::Table { json } => {
                let entries = piano::keys().map(PianoKeyEntry::from_scale).collect_vec();
                if *json {
                    serde_json::to_string_pretty(&entries)?
                } else {
                    entries
                        .iter()
                        .map(|entry| format!("{:>2} {:<4} {:>9.3}Hz", entry.key.key_number(), entry.name, entry.frequency))
                        .join("\n")
                }
            }
            ECommandContainer::Map { scale, mapping } => {
                let key = mapping.map(*scale)?;
                format!("{} -> {}", scale, key)
            }
        };

        Ok(output)
    }

    pub fn process(&self) -> anyhow::Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use scale440::{piano, sound::KeyMapping, EScaleError, Scale};

    use super::ECommandContainer;

    #[test]
    fn freq_describes_scale() {
        let output = ECommandContainer::Freq { scale: piano::A4 }.render().unwrap();
        assert_eq!(output, "A4 (key 49): 440.000Hz");

        let outside = ECommandContainer::Freq {
            scale: Scale::from_key(-3),
        };
        assert!(outside.process().is_ok());
    }

    #[test]
    fn key_finds_nearest_scale() {
        let output = ECommandContainer::Key { hz: 440.0 }.render().unwrap();
        assert_eq!(output, "A4 (key 49): 440.000Hz (+0.0 cents)");

        let output = ECommandContainer::Key { hz: 262.0 }.render().unwrap();
        assert!(output.starts_with("C4 (key 40)"), "{}", output);
    }

    #[test]
    fn key_rejects_invalid_frequency() {
        for hz in [0.0, -440.0, f64::NAN] {
            let error = ECommandContainer::Key { hz }.process().unwrap_err();
            assert!(matches!(
                error.downcast_ref::<EScaleError>(),
                Some(EScaleError::InvalidFrequency(_))
            ));
        }
    }

    #[test]
    fn transpose_adds_semitones_then_octaves() {
        let output = ECommandContainer::Transpose {
            scale: piano::C4,
            semitones: 2,
            octaves: -1,
        }
        .render()
        .unwrap();
        assert!(output.ends_with(&format!("-> D3 (key 30): {:.3}Hz", piano::D3.frequency())), "{}", output);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = ECommandContainer::Distance {
            from: piano::A0,
            to: piano::C8,
        };
        let backward = ECommandContainer::Distance {
            from: piano::C8,
            to: piano::A0,
        };
        assert_eq!(forward.render().unwrap(), "87");
        assert_eq!(backward.render().unwrap(), "87");
    }

    #[test]
    fn table_json_shape() {
        let output = ECommandContainer::Table { json: true }.render().unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(entries.len(), piano::KEY_COUNT);

        assert_eq!(entries[0]["name"], "A0");
        assert_eq!(entries[0]["key"], 1);
        assert_eq!(entries[48]["name"], "A4");
        assert_eq!(entries[48]["key"], 49);
        assert_eq!(entries[48]["frequency"], 440.0);
        assert_eq!(entries[87]["name"], "C8");
    }

    #[test]
    fn table_text_has_one_line_per_key() {
        let output = ECommandContainer::Table { json: false }.render().unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), piano::KEY_COUNT);
        assert_eq!(lines[48], "49 A4     440.000Hz");
    }

    #[test]
    fn map_uses_mapping() {
        let midi = ECommandContainer::Map {
            scale: piano::A4,
            mapping: KeyMapping::midi(),
        };
        assert_eq!(midi.render().unwrap(), "A4 -> 69");

        let out_of_range = ECommandContainer::Map {
            scale: piano::A0,
            mapping: KeyMapping::default(),
        };
        let error = out_of_range.process().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<EScaleError>(),
            Some(EScaleError::KeyOutOfRange { key: -19, .. })
        ));
    }
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
