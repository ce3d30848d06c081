//! Main CLI application for the wiring SAT encoder/decoder

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wirecnf::{
    config::{CliOverrides, Settings},
    decode::{load_solution_from_file, Decoder},
    sat::{dimacs_to_string, save_dimacs_to_file, Encoder, EncodingStatistics, VariableScheme},
    utils::{ColorOutput, PairingFormatter},
    wiring::{create_example_instances, load_instance_from_file, save_pairing_to_file},
};

#[derive(Parser)]
#[command(name = "wirecnf")]
#[command(about = "Non-crossing wiring SAT encoder/decoder")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a wiring instance into DIMACS CNF
    Encode {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Instance file (overrides config)
        #[arg(short, long)]
        instance: Option<PathBuf>,

        /// DIMACS output file; stdout when omitted (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode a SAT solver's output into a position pairing
    Decode {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Solver output file (overrides config)
        #[arg(short, long)]
        solution: Option<PathBuf>,

        /// Instance size the solution was encoded with (overrides config)
        #[arg(short = 'n', long)]
        size: Option<usize>,

        /// Pairing output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and instance files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            config,
            instance,
            output,
            verbose,
        } => encode_command(config, instance, output, verbose),
        Commands::Decode {
            config,
            solution,
            size,
            output,
        } => decode_command(config, solution, size, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        Ok(Settings::default())
    }
}

fn encode_command(
    config_path: PathBuf,
    instance: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        instance_file: instance,
        cnf_file: output,
        ..Default::default()
    });
    settings.validate().context("Configuration validation failed")?;

    let matrix = load_instance_from_file(&settings.input.instance_file)?;
    let encoder = Encoder::for_matrix(&matrix);
    let cnf = encoder.encode(&matrix).context("Encoding failed")?;

    if verbose {
        eprintln!(
            "{}",
            ColorOutput::info(&format!(
                "Instance {} ({} components, {} connections)",
                settings.input.instance_file.display(),
                matrix.size(),
                matrix.connection_count()
            ))
        );
        eprintln!("{}", EncodingStatistics::for_cnf(encoder.scheme(), &cnf));
    }

    match settings.output.cnf_file {
        Some(ref path) => {
            save_dimacs_to_file(&cnf, path)?;
            eprintln!(
                "{}",
                ColorOutput::success(&format!("CNF written to {}", path.display()))
            );
        }
        None => print!("{}", dimacs_to_string(&cnf)),
    }

    Ok(())
}

fn decode_command(
    config_path: PathBuf,
    solution: Option<PathBuf>,
    size: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        solution_file: solution,
        size,
        pairing_file: output,
        ..Default::default()
    });
    settings.validate().context("Configuration validation failed")?;

    let solver_solution = load_solution_from_file(&settings.decode.solution_file)?;
    let decoder = Decoder::new(VariableScheme::new(settings.decode.size));
    let pairing = decoder.decode(&solver_solution).context("Decoding failed")?;

    println!("{}", PairingFormatter::format_pairing(&pairing));

    save_pairing_to_file(&pairing, &settings.output.pairing_file, &settings.output.format)?;
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Pairing written to {}",
            settings.output.pairing_file.display()
        ))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let instance_dir = directory.join("input/instances");
    let solution_dir = directory.join("input/solutions");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &instance_dir, &solution_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_instances(&instance_dir, force).context("Failed to create example instances")?;
    println!("Created example instances in: {}", instance_dir.display());

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Run: cargo run -- encode --instance input/instances/inst-1.txt --output inst-1.cnf");
    println!("2. Run your SAT solver on inst-1.cnf and save its output as inst-1.sat");
    println!("3. Run: cargo run -- decode --solution inst-1.sat --size 3 --output soln-1.txt");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "wirecnf",
            "encode",
            "--instance",
            "inst-1.txt",
            "--output",
            "inst-1.cnf",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["wirecnf", "decode", "--solution", "inst-1.sat", "-n", "3"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_mode_is_mandatory() {
        assert!(Cli::try_parse_from(["wirecnf"]).is_err());
        assert!(Cli::try_parse_from(["wirecnf", "solve"]).is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/instances/inst-1.txt").exists());
    }

    #[test]
    fn test_encode_command_to_file() {
        let temp_dir = tempdir().unwrap();
        let instance = temp_dir.path().join("inst.txt");
        let cnf_out = temp_dir.path().join("inst.cnf");
        std::fs::write(&instance, "tf\nft\n").unwrap();

        encode_command(
            temp_dir.path().join("missing.yaml"),
            Some(instance),
            Some(cnf_out.clone()),
            false,
        )
        .unwrap();

        let content = std::fs::read_to_string(&cnf_out).unwrap();
        assert!(content.starts_with("p cnf 16 "));
    }

    #[test]
    fn test_decode_command_writes_pairing() {
        let temp_dir = tempdir().unwrap();
        let solution = temp_dir.path().join("inst.sat");
        let pairing_out = temp_dir.path().join("soln.txt");

        // n = 1: variable 1 is l(0, 0), variable 2 is r(0, 0)
        std::fs::write(&solution, "SAT 1 2 -3 4 0\n").unwrap();

        decode_command(
            temp_dir.path().join("missing.yaml"),
            Some(solution),
            Some(1),
            Some(pairing_out.clone()),
        )
        .unwrap();

        let content = std::fs::read_to_string(&pairing_out).unwrap();
        assert_eq!(content, "1 1\n");
    }

    #[test]
    fn test_decode_command_honors_json_format() {
        let temp_dir = tempdir().unwrap();
        let config = temp_dir.path().join("config.yaml");
        let solution = temp_dir.path().join("inst.sat");
        let pairing_out = temp_dir.path().join("soln.json");

        let mut settings = Settings::default();
        settings.output.format = wirecnf::config::OutputFormat::Json;
        settings.to_file(&config).unwrap();

        std::fs::write(&solution, "SAT 1 2 0\n").unwrap();

        decode_command(config, Some(solution), Some(1), Some(pairing_out.clone())).unwrap();

        let content = std::fs::read_to_string(&pairing_out).unwrap();
        let pairing: wirecnf::Pairing = serde_json::from_str(&content).unwrap();
        assert_eq!(pairing.pairs().len(), 1);
        assert_eq!(pairing.pairs()[0].left_component, 1);
        assert_eq!(pairing.pairs()[0].right_component, 1);
    }
}
