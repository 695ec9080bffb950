use std::path::PathBuf;

use cubepuzzle::scramble;
use cubepuzzle::{Cube, Face, MoveOptions, MoveSequence, Orientation, SOLVED_STATE};
use cubesolve::{CrossCase, CrossSolver, Partition};
use eyre::{Context, Result};
use serde::Serialize;

use crate::prefs::Preferences;

/// Layercube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to layer on top of the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the state string of a solved cube.
    Solved,
    /// Apply moves to a cube and print the result as JSON.
    Apply {
        /// Moves to apply, such as "R U R' U'".
        moves: String,
        /// 54-character starting state (defaults to solved).
        #[arg(short, long)]
        state: Option<String>,
        /// Way of holding the cube, such as "front=back, down=right".
        #[arg(short, long)]
        orientation: Option<Orientation>,
        /// Apply the inverse of the moves instead.
        #[arg(short, long)]
        reverse: bool,
    },
    /// Generate a random scramble and print it as JSON.
    Scramble {
        /// Number of moves (defaults to the preferred scramble length).
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Re-express moves for a different way of holding the cube.
    Orient {
        /// Moves to re-express.
        moves: String,
        /// Way of holding the cube, such as "front=back, down=right".
        orientation: Orientation,
    },
    /// Print the direction of one face as seen from another.
    Direction {
        /// Face to look from.
        origin: Face,
        /// Face to look toward.
        target: Face,
        /// Way of holding the cube.
        #[arg(short, long, default_value = "up=up")]
        orientation: Orientation,
    },
    /// Print the face in a direction as seen from another face.
    Neighbor {
        /// Face to look from.
        origin: Face,
        /// Direction to look in, such as "left".
        direction: Face,
        /// Way of holding the cube.
        #[arg(short, long, default_value = "up=up")]
        orientation: Orientation,
    },
    /// Print the turn of a face that carries one neighboring face onto
    /// another.
    Rotation {
        /// Face to turn.
        face: Face,
        /// Neighbor to start from.
        from: Face,
        /// Neighbor to end at.
        to: Face,
    },
    /// Solve the cross on the up face and print the solution as JSON.
    ///
    /// If no state is given, a random scramble is solved.
    Cross {
        /// 54-character starting state.
        #[arg(short, long)]
        state: Option<String>,
        /// Seed for a reproducible scramble.
        #[arg(long, conflicts_with = "state")]
        seed: Option<u64>,
    },
}

/// Cube state, as printed by `apply` and `scramble`.
#[derive(Serialize, Debug)]
struct CubeReport {
    moves: String,
    state: String,
    solved: bool,
}

impl CubeReport {
    fn new(cube: &Cube, moves: &MoveSequence) -> Self {
        Self {
            moves: moves.to_string(),
            state: cube.to_string(),
            solved: cube.is_solved(),
        }
    }
}

/// Result of solving the cross, as printed by `cross`.
#[derive(Serialize, Debug)]
struct CrossReport {
    start: String,
    state: String,
    solution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    partitions: Option<Vec<PartitionReport>>,
}

#[derive(Serialize, Debug)]
struct PartitionReport {
    case: String,
    edge: String,
    moves: String,
}

impl From<&Partition<CrossCase>> for PartitionReport {
    fn from(partition: &Partition<CrossCase>) -> Self {
        Self {
            case: partition.case.to_string(),
            edge: partition.before.colors().collect(),
            moves: partition.moves.to_string(),
        }
    }
}

pub(crate) fn exec(subcommand: Subcommand, prefs: &Preferences) -> Result<()> {
    match subcommand {
        Subcommand::Solved => {
            println!("{SOLVED_STATE}");
            Ok(())
        }

        Subcommand::Apply {
            moves,
            state,
            orientation,
            reverse,
        } => {
            let mut cube = load_cube(state.as_deref())?;
            let options = MoveOptions {
                orientation,
                reverse,
            };
            let applied = cube
                .apply_notation(&moves, &options)
                .context("error applying moves")?;
            write_json_output(&CubeReport::new(&cube, &applied), prefs)
        }

        Subcommand::Scramble { length, seed } => {
            let length = length.unwrap_or(prefs.scramble_length);
            let moves = match seed {
                Some(seed) => scramble::seeded_moves(length, seed),
                None => scramble::random_moves(length, &mut rand::rng()),
            };
            let mut cube = Cube::solved();
            cube.apply_moves(&moves, &MoveOptions::default())?;
            write_json_output(&CubeReport::new(&cube, &moves), prefs)
        }

        Subcommand::Orient { moves, orientation } => {
            let moves: MoveSequence = moves.parse()?;
            println!("{}", cubepuzzle::orient_moves(&moves, &orientation)?);
            Ok(())
        }

        Subcommand::Direction {
            origin,
            target,
            orientation,
        } => {
            let direction = cubepuzzle::direction_from_faces(origin, target, &orientation)?;
            println!("{direction}");
            Ok(())
        }

        Subcommand::Neighbor {
            origin,
            direction,
            orientation,
        } => {
            let face = cubepuzzle::face_from_direction(origin, direction, &orientation)?;
            println!("{face}");
            Ok(())
        }

        Subcommand::Rotation { face, from, to } => {
            match cubepuzzle::rotation_from_to(face, from, to)? {
                Some(m) => println!("{m}"),
                None => println!(),
            }
            Ok(())
        }

        Subcommand::Cross { state, seed } => {
            let mut cube = match (state, seed) {
                (Some(state), _) => load_cube(Some(&state))?,
                (None, Some(seed)) => {
                    let mut cube = Cube::solved();
                    let moves = scramble::seeded_moves(prefs.scramble_length, seed);
                    cube.apply_moves(&moves, &MoveOptions::default())?;
                    cube
                }
                (None, None) => Cube::scrambled_with_length(prefs.scramble_length, &mut rand::rng())?,
            };
            let report = solve_cross(&mut cube, prefs.show_partitions)?;
            write_json_output(&report, prefs)
        }
    }
}

fn load_cube(state: Option<&str>) -> Result<Cube> {
    match state {
        Some(state) => Cube::new(state).context("error parsing cube state"),
        None => Ok(Cube::solved()),
    }
}

fn solve_cross(cube: &mut Cube, show_partitions: bool) -> Result<CrossReport> {
    let start = cube.to_string();
    let partitions = CrossSolver::new(cube)
        .solve()
        .context("error solving cross")?
        .to_vec();
    let solution: MoveSequence = partitions
        .iter()
        .flat_map(|p| p.moves.iter().copied())
        .collect();
    Ok(CrossReport {
        start,
        state: cube.to_string(),
        solution: solution.to_string(),
        partitions: show_partitions.then(|| partitions.iter().map(PartitionReport::from).collect()),
    })
}

fn write_json_output<T: Serialize>(value: &T, prefs: &Preferences) -> Result<()> {
    let stdout = std::io::stdout();
    match prefs.pretty_json {
        true => serde_json::to_writer_pretty(stdout, value),
        false => serde_json::to_writer(stdout, value),
    }
    .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
