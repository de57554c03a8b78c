use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use lazyvec::{Degrees, Vector2, Vector3, Vector4};

    #[derive(Debug, Parser)]
    #[command(about = "Inspect the lazyvec vector types", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the named constant vectors of one vector type
        Constants {
            /// Number of vector components (2, 3 or 4)
            #[arg(short, long, default_value_t = 4)]
            dimension: usize,
        },
        /// Print signed angles between the 3D axis vectors
        SignedAngles,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        log::debug!("Running command {:?}", cli.command);

        match cli.command {
            Command::Constants { dimension } => print_constants(dimension),
            Command::SignedAngles => {
                print_signed_angles();
                Ok(())
            }
        }
    }

    fn print_constants(dimension: usize) -> Result<()> {
        match dimension {
            2 => {
                for (name, vector) in [
                    ("zeros", Vector2::zeros()),
                    ("ones", Vector2::ones()),
                    ("left", Vector2::left()),
                    ("right", Vector2::right()),
                    ("up", Vector2::up()),
                    ("down", Vector2::down()),
                    ("negative_infinity", Vector2::negative_infinity()),
                    ("positive_infinity", Vector2::positive_infinity()),
                ] {
                    println!("{name}: {vector}");
                }
            }
            3 => {
                for (name, vector) in [
                    ("zeros", Vector3::zeros()),
                    ("ones", Vector3::ones()),
                    ("left", Vector3::left()),
                    ("right", Vector3::right()),
                    ("up", Vector3::up()),
                    ("down", Vector3::down()),
                    ("front", Vector3::front()),
                    ("back", Vector3::back()),
                    ("negative_infinity", Vector3::negative_infinity()),
                    ("positive_infinity", Vector3::positive_infinity()),
                ] {
                    println!("{name}: {vector}");
                }
            }
            4 => {
                for (name, vector) in [
                    ("zeros", Vector4::zeros()),
                    ("ones", Vector4::ones()),
                    ("negative_infinity", Vector4::negative_infinity()),
                    ("positive_infinity", Vector4::positive_infinity()),
                ] {
                    println!("{name}: {vector}");
                }
            }
            _ => anyhow::bail!("Vectors with {dimension} components are not supported"),
        }
        Ok(())
    }

    fn print_signed_angles() {
        let right = Vector3::right();
        for (to, axis) in [
            (Vector3::up(), Vector3::back()),
            (Vector3::down(), Vector3::back()),
            (Vector3::left(), Vector3::up()),
            (Vector3::up(), Vector3::up()),
            (Vector3::new(1.0, 1.0, 0.0), Vector3::back()),
        ] {
            let angle = right.signed_angle(&to, &axis);
            log::info!("Signed angle from {right} to {to} about {axis}: {angle}");
            println!("{right} -> {to} about {axis}: {}", Degrees::from(angle));
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
