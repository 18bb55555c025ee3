#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for generating, parsing, and analysing courses.

mod course_transfer;

use std::{
    fs,
    io::{self, Read as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use coursewalk_core::{
    constraint_or_default, lookup_constraint, ArenaSpec, CourseAnalysis, CourseStyle, Difficulty,
    Discipline, GenerationSettings, LevelConstraint, Obstacle, DEFAULT_CONSTRAINT,
};
use coursewalk_system_analysis::analyze;
use coursewalk_system_generation::{generate_course, CourseRequest};
use coursewalk_system_parsing::parse_course_text;
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::course_transfer::CourseTransferSnapshot;

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "coursewalk", about = "Show-jumping course generation and analysis")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: CliCommand,
}

/// Supported subcommands.
#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Generate a course and print its obstacles and analysis.
    Generate(GenerateArgs),
    /// Parse a plain-text obstacle list into a course.
    Parse(ParseArgs),
    /// Analyse a previously exported course string.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Debug, Args)]
struct GenerateArgs {
    /// Discipline governing the level table (show-jumping, eventing, pony-club).
    #[arg(long, default_value = "show-jumping")]
    discipline: String,
    /// Level identifier inside the discipline's table.
    #[arg(long, default_value = "novice")]
    level: String,
    /// Arena width in metres.
    #[arg(long, default_value_t = 60.0)]
    width: f32,
    /// Arena length in metres.
    #[arg(long, default_value_t = 40.0)]
    length: f32,
    /// Number of jumps to place, clamped to the level's jump cap.
    #[arg(long, default_value_t = 8)]
    jumps: u32,
    /// Layout style (flowing, technical, power, scattered).
    #[arg(long, default_value = "flowing")]
    style: String,
    /// Difficulty preference (easy, medium, challenging).
    #[arg(long, default_value = "medium")]
    difficulty: String,
    /// Seed for deterministic output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Exclude water jumps and liverpools from selection.
    #[arg(long)]
    no_specialty: bool,
    /// Print the course as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Append a single-line transfer string for later analysis.
    #[arg(long)]
    export: bool,
}

/// Arguments for the `parse` subcommand.
#[derive(Debug, Args)]
struct ParseArgs {
    /// File with one obstacle description per line; standard input when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Arena width in metres.
    #[arg(long, default_value_t = 60.0)]
    width: f32,
    /// Arena length in metres.
    #[arg(long, default_value_t = 40.0)]
    length: f32,
    /// Seed for deterministic placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the course as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Append a single-line transfer string for later analysis.
    #[arg(long)]
    export: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Transfer string produced by `generate --export` or `parse --export`.
    #[arg(long)]
    course: String,
    /// Discipline governing the level table (show-jumping, eventing, pony-club).
    #[arg(long, default_value = "show-jumping")]
    discipline: String,
    /// Level identifier inside the discipline's table.
    #[arg(long, default_value = "novice")]
    level: String,
    /// Print the analysis as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// Serialisable report combining a course and its analysis.
#[derive(Debug, Serialize)]
struct CourseReport<'a> {
    obstacles: &'a [Obstacle],
    analysis: &'a CourseAnalysis,
}

/// Entry point for the coursewalk command-line interface.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        CliCommand::Generate(args) => run_generate(args),
        CliCommand::Parse(args) => run_parse(args),
        CliCommand::Analyze(args) => run_analyze(args),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let discipline = parse_discipline(&args.discipline)?;
    let constraint = match lookup_constraint(discipline, &args.level) {
        Ok(constraint) => constraint,
        Err(error) => {
            eprintln!("warning: {error}; using {}", DEFAULT_CONSTRAINT.label());
            DEFAULT_CONSTRAINT
        }
    };

    let target_count = clamped_jump_count(args.jumps, &constraint);
    if target_count < args.jumps {
        eprintln!(
            "warning: {} caps courses at {} jumps",
            constraint.label(),
            constraint.max_jump_count()
        );
    }

    let request = CourseRequest {
        discipline,
        level: args.level.clone(),
        arena: ArenaSpec::new(args.width, args.length),
        target_count,
        style: CourseStyle::from_token(&args.style),
        difficulty: Difficulty::from_token(&args.difficulty),
        settings: GenerationSettings {
            include_specialty_jumps: !args.no_specialty,
            ..GenerationSettings::default()
        },
    };
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed.unwrap_or_else(rand::random));

    let Some(course) = generate_course(&request, &mut rng) else {
        println!("no course generated: a course needs at least one jump");
        return Ok(());
    };

    if args.json {
        print_report(&course.obstacles, &course.analysis)?;
    } else {
        print_course(&course.obstacles);
        print_analysis(&course.analysis);
    }
    if args.export {
        let snapshot = CourseTransferSnapshot {
            width: args.width,
            length: args.length,
            obstacles: course.obstacles,
        };
        println!("{}", snapshot.encode());
    }
    Ok(())
}

fn run_parse(args: ParseArgs) -> anyhow::Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            let _ = io::stdin()
                .read_to_string(&mut buffer)
                .context("could not read standard input")?;
            buffer
        }
    };

    let arena = ArenaSpec::new(args.width, args.length);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed.unwrap_or_else(rand::random));
    let obstacles = parse_course_text(&text, &arena, &mut rng);
    if obstacles.is_empty() {
        // Empty input is an empty course, not an error.
        println!("no obstacles parsed: the input contained no obstacle lines");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&obstacles)?);
    } else {
        print_course(&obstacles);
    }
    if args.export {
        let snapshot = CourseTransferSnapshot {
            width: args.width,
            length: args.length,
            obstacles,
        };
        println!("{}", snapshot.encode());
    }
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let snapshot = CourseTransferSnapshot::decode(&args.course)
        .context("could not decode the course string")?;
    let discipline = parse_discipline(&args.discipline)?;
    let constraint = constraint_or_default(discipline, &args.level);
    let analysis = analyze(&snapshot.obstacles, &constraint);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!(
            "{} obstacles on a {} x {} m arena, judged against {}",
            snapshot.obstacles.len(),
            snapshot.width,
            snapshot.length,
            constraint.label()
        );
        print_analysis(&analysis);
    }
    Ok(())
}

fn parse_discipline(token: &str) -> anyhow::Result<Discipline> {
    Discipline::parse(token).with_context(|| format!("unknown discipline '{token}'"))
}

/// Clamps a requested jump count to the level's cap. The engine itself
/// never clamps; that guard lives at this boundary.
fn clamped_jump_count(requested: u32, constraint: &LevelConstraint) -> u32 {
    requested.min(constraint.max_jump_count())
}

fn print_report(obstacles: &[Obstacle], analysis: &CourseAnalysis) -> anyhow::Result<()> {
    let report = CourseReport {
        obstacles,
        analysis,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_course(obstacles: &[Obstacle]) {
    for obstacle in obstacles {
        println!(
            "{:>2}. {:<12} {:.2} m at ({:.1}, {:.1})",
            obstacle.sequence_number,
            obstacle.kind.display_name(),
            obstacle.height,
            obstacle.position.x(),
            obstacle.position.y(),
        );
    }
}

fn print_analysis(analysis: &CourseAnalysis) {
    println!(
        "score {} | compliance {} | {} sharp turns | {} combinations",
        analysis.ai_score,
        analysis.compliance_score,
        analysis.sharp_turn_count,
        analysis.combination_count,
    );
    println!(
        "distance {:.1} m total, {:.1} m between jumps",
        analysis.total_distance, analysis.average_distance,
    );
    for issue in &analysis.issues {
        println!("  - {issue}");
    }
}
