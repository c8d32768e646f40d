use clap::{Parser, Subcommand};
use container::ECommandContainer;
use scale440::{sound::KeyMapping, Scale};

pub mod container;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    #[command(subcommand)]
    command: ECommands,
}

#[derive(Subcommand, Debug)]
enum ECommands {
    /// Print the key number, the note name and the frequency of the scale.
    #[command(allow_negative_numbers = true)]
    Freq {
        /// Note name (e.g. `A4`, `Cs3`) or key number.
        scale: String,
    },
    /// Print the nearest scale of the frequency in Hz.
    #[command(allow_negative_numbers = true)]
    Key { hz: f64 },
    /// Transpose the scale by semitones and octaves.
    #[command(allow_negative_numbers = true)]
    Transpose {
        scale: String,
        #[arg(short, long, default_value_t = 0)]
        semitones: i32,
        #[arg(short, long, default_value_t = 0)]
        octaves: i32,
    },
    /// Print the number of semitones between two scales.
    #[command(allow_negative_numbers = true)]
    Distance { from: String, to: String },
    /// Print every key of the 88-key piano.
    Table {
        /// Output as json.
        #[arg(long)]
        json: bool,
    },
    /// Print the key index of the scale for a sound source.
    #[command(allow_negative_numbers = true)]
    Map {
        scale: String,
        /// Offset added to the key number.
        #[arg(long, conflicts_with_all = ["midi", "mapping"])]
        offset: Option<i32>,
        /// Use MIDI note numbers (A4 = 69).
        #[arg(long, conflicts_with = "mapping")]
        midi: bool,
        /// Key mapping as json. (e.g. `{"offset": -20, "min_key": 0, "max_key": 127}`)
        #[arg(long)]
        mapping: Option<String>,
    },
}

/// 音名か鍵盤番号として解析する。
fn parse_scale(text: &str) -> anyhow::Result<Scale> {
    match text.parse::<i32>() {
        Ok(number) => Ok(Scale::from_key(number)),
        Err(_) => Ok(text.parse::<Scale>()?),
    }
}

/// `--offset`、`--midi`、`--mapping`の順に優先して変換設定を決める。
/// 何も指定されていなければ[`KeyMapping::default`]を使う。
fn select_key_mapping(offset: Option<i32>, midi: bool, mapping: Option<&str>) -> anyhow::Result<KeyMapping> {
    let mapping = match (offset, midi, mapping) {
        (Some(offset), _, _) => KeyMapping::with_offset(offset),
        (None, true, _) => KeyMapping::midi(),
        (None, false, Some(json_str)) => serde_json::from_str(json_str)?,
        (None, false, None) => KeyMapping::default(),
    };

    Ok(mapping)
}

/// @brief コマンド引数をパーシングする。
pub fn parse_command_arguments() -> anyhow::Result<ECommandContainer> {
    let cli = CommandArgs::parse();
    let container = match cli.command {
        ECommands::Freq { scale } => ECommandContainer::Freq {
            scale: parse_scale(&scale)?,
        },
        ECommands::Key { hz } => ECommandContainer::Key { hz },
        ECommands::Transpose {
            scale,
            semitones,
            octaves,
        } => ECommandContainer::Transpose {
            scale: parse_scale(&scale)?,
            semitones,
            octaves,
        },
        ECommands::Distance { from, to } => ECommandContainer::Distance {
            from: parse_scale(&from)?,
            to: parse_scale(&to)?,
        },
        ECommands::Table { json } => ECommandContainer::Table { json },
        ECommands::Map {
            scale,
            offset,
            midi,
            mapping,
        } => ECommandContainer::Map {
            scale: parse_scale(&scale)?,
            mapping: select_key_mapping(offset, midi, mapping.as_deref())?,
        },
    };

    Ok(container)
}


// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
