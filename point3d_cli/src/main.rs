use std::error::Error;
use std::fs::File;

use clap::{Parser, Subcommand};
use point3d::{geometry::projection::resolve, Point3D};

/// Parses a comma separated point such as `1,-2,0`. Missing trailing
/// components default to zero, so an empty argument is the origin.
fn parse_point(raw: &str) -> point3d::Result<Point3D> {
    if raw.trim().is_empty() {
        return Point3D::from_coords::<&str>(&[]);
    }
    let parts: Vec<&str> = raw.split(',').collect();
    Point3D::from_coords(&parts[..])
}

fn print_scalar(v: f64) {
    println!("{:.6}", v);
}

/// Command line front-end for 3D point arithmetic.
#[derive(Parser)]
#[command(name = "point3d_cli", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a point.
    Show {
        #[arg(allow_hyphen_values = true)]
        point: String,
    },
    /// Negate every component of a point.
    Negate {
        #[arg(allow_hyphen_values = true)]
        point: String,
    },
    /// Componentwise sum a + b.
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Componentwise difference a - b.
    Subtract {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Dot product of two vectors.
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Cross product a x b.
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Read one component (0 = x, 1 = y, 2 = z).
    Get {
        #[arg(allow_hyphen_values = true)]
        point: String,
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Replace one component and print the result.
    Set {
        #[arg(allow_hyphen_values = true)]
        point: String,
        #[arg(allow_negative_numbers = true)]
        index: i64,
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Euclidean length of a vector.
    Norm {
        #[arg(allow_hyphen_values = true)]
        point: String,
    },
    /// Multiply every component by a scalar.
    Scale {
        #[arg(allow_hyphen_values = true)]
        point: String,
        #[arg(allow_hyphen_values = true)]
        scalar: f64,
    },
    /// Left-facing normal about the z axis.
    LeftNormal {
        #[arg(allow_hyphen_values = true)]
        point: String,
    },
    /// Resolve a vector into parts parallel and perpendicular to a direction.
    Project {
        #[arg(allow_hyphen_values = true)]
        point: String,
        #[arg(allow_hyphen_values = true)]
        direction: String,
    },
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Show { point } => println!("{}", parse_point(&point)?),
        Commands::Negate { point } => println!("{}", -parse_point(&point)?),
        Commands::Add { a, b } => println!("{}", parse_point(&a)? + parse_point(&b)?),
        Commands::Subtract { a, b } => println!("{}", parse_point(&a)? - parse_point(&b)?),
        Commands::Dot { a, b } => print_scalar(parse_point(&a)?.dot(parse_point(&b)?)),
        Commands::Cross { a, b } => println!("{}", parse_point(&a)?.cross(parse_point(&b)?)),
        Commands::Get { point, index } => print_scalar(parse_point(&point)?.get(index)?),
        Commands::Set {
            point,
            index,
            value,
        } => {
            let mut p = parse_point(&point)?;
            p.set(index, value)?;
            println!("{}", p);
        }
        Commands::Norm { point } => print_scalar(parse_point(&point)?.norm()),
        Commands::Scale { point, scalar } => println!("{}", parse_point(&point)? * scalar),
        Commands::LeftNormal { point } => println!("{}", parse_point(&point)?.left_normal()),
        Commands::Project { point, direction } => {
            let v = parse_point(&point)?;
            let d = parse_point(&direction)?;
            let (parallel, perpendicular) =
                resolve(v, d).ok_or("cannot project onto a zero-length vector")?;
            println!("Parallel: {}", parallel);
            println!("Perpendicular: {}", perpendicular);
        }
    }
    Ok(())
}

fn init_logging() {
    if let Ok(path) = std::env::var("POINT3D_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        log::debug!("command failed: {:?}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
