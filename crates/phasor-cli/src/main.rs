use std::{error::Error, fs, path::Path};

use clap::Parser;
use log::{info, LevelFilter};
use phasor_components::{run_fractions, FractionsConfig, FractionsInput, FractionsReport};

/// Resolve component fractions from phasor coordinates.
#[derive(Debug, Parser)]
#[command(author, version, about = "Phasor component fraction resolution")]
struct Args {
    /// Path to JSON file containing FractionsInput.
    #[arg(long)]
    input: String,

    /// Optional path to JSON FractionsConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<String>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    output: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let value = serde_json::from_str(&data)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    Ok(value)
}

fn write_report_json(report: &FractionsReport) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn run_fractions_from_files(
    input_path: &str,
    config_path: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let input: FractionsInput = load_json_file(Path::new(input_path))?;

    let config = if let Some(cfg_path) = config_path {
        load_json_file::<FractionsConfig>(Path::new(cfg_path))?
    } else {
        FractionsConfig::default()
    };

    let report = run_fractions(&input, &config)?;
    write_report_json(&report)
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .try_init();
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let json = run_fractions_from_files(&args.input, args.config.as_deref())?;
    match args.output.as_deref() {
        Some(path) => {
            fs::write(path, json)?;
            info!("report written to {path}");
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, ArrayD, IxDyn};
    use phasor_components::ComponentLayout;
    use phasor_core::{
        synthetic::mixture::mix_components, test_utils::lifetime_components, NdArrayData,
    };
    use tempfile::NamedTempFile;

    fn write_json<T: serde::Serialize>(value: &T, path: &Path) {
        serde_json::to_writer_pretty(fs::File::create(path).unwrap(), value).unwrap();
    }

    fn synthetic_input() -> (FractionsInput, Vec<ArrayD<f64>>) {
        let (g, s) = lifetime_components(80.0, &[8.0, 0.5, 2.0], 1);
        let truth: Vec<ArrayD<f64>> = [
            [0.35, 0.10, 0.6, 0.2],
            [0.20, 0.20, 0.3, 0.2],
            [0.45, 0.70, 0.1, 0.6],
        ]
        .iter()
        .map(|f| ArrayD::from_shape_vec(IxDyn(&[2, 2]), f.to_vec()).unwrap())
        .collect();
        let phasor = mix_components(&truth, &g, &s).unwrap();

        let input = FractionsInput {
            real: NdArrayData::from_array(&phasor.real()),
            imag: NdArrayData::from_array(&phasor.imag()),
            real_components: NdArrayData::from_array(&arr1(&g)),
            imag_components: NdArrayData::from_array(&arr1(&s)),
        };
        (input, truth)
    }

    #[test]
    fn helper_smoke_test() {
        let (input, truth) = synthetic_input();
        let input_file = NamedTempFile::new().unwrap();
        let config_file = NamedTempFile::new().unwrap();

        write_json(&input, input_file.path());
        let config = FractionsConfig {
            histogram_bins: 10,
            ..Default::default()
        };
        write_json(&config, config_file.path());

        let json = run_fractions_from_files(
            input_file.path().to_str().unwrap(),
            Some(config_file.path().to_str().unwrap()),
        )
        .expect("cli helper should succeed");

        let report: FractionsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(
            report.layout,
            ComponentLayout::Linear {
                components: 3,
                harmonics: 1,
                augmented: true
            }
        );
        assert_eq!(report.sample_shape, vec![2, 2]);
        for (got, want) in report.fractions.iter().zip(&truth) {
            let got = got.to_array().unwrap();
            for (a, b) in got.iter().zip(want.iter()) {
                assert!((a - b).abs() < 1e-9, "{a} != {b}");
            }
        }
        assert_eq!(report.summaries[2].histogram.counts.len(), 10);
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = run_fractions_from_files("/nonexistent/phasor-input.json", None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        let input_file = NamedTempFile::new().unwrap();
        fs::write(input_file.path(), "{ \"real\": [0.5] }").unwrap();
        let err =
            run_fractions_from_files(input_file.path().to_str().unwrap(), None).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
