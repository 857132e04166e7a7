use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use clap::{Parser, Subcommand};
    use spring_motion::{Spring, SpringParameters, io::write_ron_file, sampling};
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(about = "Sample damped spring motion", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the position of the spring at regular time steps
        Sample {
            /// Path to RON file with the spring parameters
            #[arg(short, long)]
            config: Option<PathBuf>,

            /// Number of seconds to advance the spring between samples
            #[arg(short, long, default_value_t = 1.0 / 60.0)]
            time_step: f64,

            /// Number of seconds to sample the motion for
            #[arg(short, long, default_value_t = 5.0)]
            duration: f64,
        },
        /// Generate a RON file with the default spring parameters
        GenerateConfig {
            /// Path where the file should be written
            #[arg(short, long)]
            output_path: PathBuf,
            /// Overwrite any existing file at the given path
            #[arg(short, long)]
            force_overwrite: bool,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Sample {
                config,
                time_step,
                duration,
            } => {
                let parameters = match config {
                    Some(file_path) => SpringParameters::from_ron_file(file_path)?,
                    None => SpringParameters::default(),
                };
                log::info!("Sampling spring with {:?}", parameters);

                let mut spring = Spring::from_parameters(parameters);
                for sample in sampling::sample_trajectory(&mut spring, time_step, duration)? {
                    println!(
                        "{:.6} {:.6} {:.6} {:.6}",
                        sample.time, sample.position.x, sample.position.y, sample.position.z
                    );
                }
                Ok(())
            }
            Command::GenerateConfig {
                output_path,
                force_overwrite,
            } => {
                if !force_overwrite && output_path.exists() {
                    bail!("File {} already exists", output_path.display());
                }
                write_ron_file(&SpringParameters::default(), output_path)
            }
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
