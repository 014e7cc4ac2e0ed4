use std::io::{Read, Write};
use std::path::PathBuf;

use eyre::{Context, Result, eyre};
use facelet::{Cube, Move, ScrambleParams, Scrambled};
use serde::Serialize;

use crate::settings::{OutputFormat, Settings};

/// Rubik's cube move engine
///
/// If no subcommand is specified, then the demo is run.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file to load instead of the one in the user config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply a move sequence and print the resulting cube.
    Apply {
        /// Moves to apply (such as `R U R' U'`).
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,

        /// JSON cube to start from instead of a solved cube, use '-' for stdin.
        #[arg(long, value_parser)]
        from: Option<clio::Input>,

        /// Output format.
        #[arg(short, long)]
        output: Option<OutputFormat>,
    },
    /// Generate a random scramble and print the scrambled cube.
    Scramble {
        /// Number of moves.
        #[arg(short, long)]
        length: Option<u32>,

        /// Random seed. The same seed and length always give the same scramble.
        #[arg(short, long)]
        seed: Option<String>,

        /// Output format.
        #[arg(short, long)]
        output: Option<OutputFormat>,
    },
    /// Walk through a few example sequences.
    Demo,
}

/// Runs `subcommand`, writing its output to `out`.
pub(crate) fn exec(
    subcommand: Subcommand,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    match subcommand {
        Subcommand::Apply {
            moves,
            from,
            output,
        } => {
            let start = match from {
                Some(mut input) => {
                    let mut buffer = String::new();
                    input
                        .read_to_string(&mut buffer)
                        .context("error reading cube file")?;
                    facelet::from_json(&buffer).context("error loading cube")?
                }
                None => Cube::solved(),
            };

            let sequence = moves.join(" ");
            let cube = facelet::apply_moves(&start, &sequence).map_err(|e| {
                let token = e.position.unwrap_or_default() + 1;
                eyre!("{e} (token {token} of {sequence:?})")
            })?;

            write_cube(out, &cube, output.unwrap_or(settings.output), settings)
        }

        Subcommand::Scramble {
            length,
            seed,
            output,
        } => {
            let length = length.unwrap_or(settings.scramble_length);
            let params = match seed {
                Some(seed) => ScrambleParams::with_seed(length, seed),
                None => ScrambleParams::new(length),
            };
            let scrambled = params.generate();

            match output.unwrap_or(settings.output) {
                OutputFormat::Net => {
                    let moves = facelet::format_moves(scrambled.moves.iter().copied());
                    writeln!(out, "scramble: {moves}")?;
                    writeln!(out, "seed: {}", scrambled.params.seed)?;
                    writeln!(out)?;
                    write_cube(out, &scrambled.state, OutputFormat::Net, settings)
                }
                OutputFormat::Json => write_json_output(out, &ScrambleOutput::from(&scrambled)),
            }
        }

        Subcommand::Demo => demo(out),
    }
}

/// JSON output of the `scramble` subcommand.
#[derive(Serialize, Debug)]
struct ScrambleOutput<'a> {
    seed: &'a str,
    length: u32,
    moves: String,
    state: &'a Cube,
}

impl<'a> From<&'a Scrambled> for ScrambleOutput<'a> {
    fn from(scrambled: &'a Scrambled) -> Self {
        Self {
            seed: &scrambled.params.seed,
            length: scrambled.params.length,
            moves: facelet::format_moves(scrambled.moves.iter().copied()),
            state: &scrambled.state,
        }
    }
}

fn write_cube(
    out: &mut impl Write,
    cube: &Cube,
    format: OutputFormat,
    settings: &Settings,
) -> Result<()> {
    log::debug!("writing cube as {format}");
    match format {
        OutputFormat::Net => {
            writeln!(out, "{cube}")?;
            if settings.show_solved_check {
                writeln!(out, "solved: {}", yes_no(cube.is_solved()))?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json_output(out, cube),
    }
}

fn write_json_output<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)
        .context("error serializing output")?;
    writeln!(out)?;
    Ok(())
}

fn demo(out: &mut impl Write) -> Result<()> {
    let solved = Cube::solved();
    writeln!(out, "Solved cube:")?;
    writeln!(out, "{solved}")?;
    writeln!(out)?;

    let mv: Move = "U".parse()?;
    let after_u = solved.apply_move(mv);
    writeln!(out, "After {mv} ({} {}):", mv.face.name(), mv.turn.name())?;
    writeln!(out, "{after_u}")?;
    writeln!(out)?;

    let sexy = solved.apply_moves("R U R' U'")?;
    writeln!(out, "After R U R' U':")?;
    writeln!(out, "{sexy}")?;
    writeln!(out)?;

    let identity = solved.apply_moves("U U U U")?;
    writeln!(out, "After U U U U (should be solved):")?;
    writeln!(out, "{identity}")?;
    writeln!(out)?;
    writeln!(out, "Is solved? {}", yes_no(identity == solved))?;
    Ok(())
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_apply() {
        let args = Args::try_parse_from(["facelet", "apply", "R", "U'", "-o", "json"]).unwrap();
        let Some(Subcommand::Apply {
            moves,
            from,
            output,
        }) = args.subcommand
        else {
            panic!("expected apply subcommand");
        };
        assert_eq!(moves, ["R", "U'"]);
        assert!(from.is_none());
        assert_eq!(output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_no_subcommand() {
        let args = Args::try_parse_from(["facelet", "--config", "x.yaml"]).unwrap();
        assert!(args.subcommand.is_none());
        assert_eq!(args.config, Some(PathBuf::from("x.yaml")));
    }

    #[test]
    fn test_apply_requires_moves() {
        assert!(Args::try_parse_from(["facelet", "apply"]).is_err());
    }

    #[test]
    fn test_scramble_output_keeps_face_order() {
        let scrambled = ScrambleParams::with_seed(5, "seed").generate();
        let json = serde_json::to_value(ScrambleOutput::from(&scrambled)).unwrap();
        let faces: Vec<&str> = json["state"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(faces, ["U", "R", "F", "D", "L", "B"]);
        assert_eq!(json["length"], 5);
    }

    fn run(args: &[&str], settings: &Settings) -> Result<String> {
        let args = Args::try_parse_from(std::iter::once("facelet").chain(args.iter().copied()))?;
        let mut out = vec![];
        exec(args.subcommand.unwrap_or(Subcommand::Demo), settings, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_apply_prints_net_and_solved_check() {
        let settings = Settings::default();

        let output = run(&["apply", "R", "U", "R'", "U'"], &settings).unwrap();
        let expected = facelet::apply_moves(&Cube::solved(), "R U R' U'").unwrap();
        assert_eq!(output, format!("{expected}\nsolved: no\n"));

        let output = run(&["apply", "U U", "U2"], &settings).unwrap();
        assert_eq!(output, format!("{}\nsolved: yes\n", Cube::solved()));

        let quiet = Settings {
            show_solved_check: false,
            ..Settings::default()
        };
        let output = run(&["apply", "R"], &quiet).unwrap();
        assert!(!output.contains("solved:"));
    }

    #[test]
    fn test_apply_invalid_move_names_token_and_position() {
        let err = run(&["apply", "R", "X", "U"], &Settings::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid move: X"), "{message}");
        assert!(message.contains("token 2"), "{message}");
    }

    #[test]
    fn test_apply_from_json_file() {
        let start = facelet::apply_moves(&Cube::solved(), "F2 L D'").unwrap();
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(facelet::to_json(&start).as_bytes()).unwrap();
        let path = file.path().to_str().unwrap();

        let args = ["apply", "--from", path, "-o", "json", "D", "L'"];
        let output = run(&args, &Settings::default()).unwrap();
        let expected = Cube::solved().apply_moves("F2").unwrap();
        assert_eq!(facelet::from_json(&output).unwrap(), expected);
    }

    #[test]
    fn test_apply_from_malformed_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{\"U\": []}").unwrap();
        let path = file.path().to_str().unwrap();

        let err = run(&["apply", "--from", path, "R"], &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("error loading cube"));
    }

    #[test]
    fn test_scramble_with_seed() {
        let settings = Settings::default();
        let output = run(&["scramble", "--length", "6", "--seed", "abc"], &settings).unwrap();
        let scrambled = ScrambleParams::with_seed(6, "abc").generate();
        let moves = facelet::format_moves(scrambled.moves.iter().copied());
        assert!(output.starts_with(&format!("scramble: {moves}\nseed: abc\n\n")));
        assert!(output.contains(&scrambled.state.to_string()));

        // Settings supply the default length.
        let short = Settings {
            scramble_length: 3,
            output: OutputFormat::Json,
            ..Settings::default()
        };
        let output = run(&["scramble", "--seed", "abc"], &short).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["length"], 3);
        assert_eq!(json["seed"], "abc");
    }

    #[test]
    fn test_demo() {
        let output = run(&[], &Settings::default()).unwrap();
        assert!(output.starts_with("Solved cube:\n"));
        assert!(output.contains("After U (Up CW):\n"));
        assert!(output.trim_end().ends_with("Is solved? yes"));
    }
}
