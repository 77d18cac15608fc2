extern crate env_logger;
#[macro_use]
extern crate log;
use std::{
    fs::File,
    io::{prelude::*, stdout, BufWriter},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;

use bioutils::file::{extract_filename, filename_by_extension, Compressor};
use bioutils::io::{fasta_to_records, write_fasta, write_to_file, OutputFormat};
use bioutils::seq::{self, TmParams};
use bioutils::{enzymes, summary, timing, SequenceRecord};

mod cli;

use cli::{Cli, Commands};

/// Creates a `BufWriter` for the given output option. This allows for an output file to be passed
/// or otherwise will default to using standard output.
///
/// If `output` is `Some`, it creates a file at the specified path and returns a `BufWriter` for it.
/// If `output` is `None`, it returns a `BufWriter` for the standard output.
fn get_writer(output: &Option<String>) -> Result<impl Write> {
    // get output as a BufWriter - equal to stdout if None
    let writer = BufWriter::new(match output {
        Some(ref x) => {
            let file = File::create(Path::new(x))
                .with_context(|| format!("Unable to create output file {x}"))?;
            Box::new(file) as Box<dyn Write + Send>
        }
        None => Box::new(stdout()) as Box<dyn Write + Send>,
    });
    Ok(writer)
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Parse { .. } => "parse",
        Commands::Convert { .. } => "convert",
        Commands::Revcomp { .. } => "revcomp",
        Commands::Stats { .. } => "stats",
        Commands::Tm { .. } => "tm",
        Commands::Hash { .. } => "hash",
        Commands::Info { .. } => "info",
        Commands::List { .. } => "list",
        Commands::Gzip { .. } => "gzip",
        Commands::Enzymes { .. } => "enzymes",
    }
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Parse { file, output, json } => {
            let records = fasta_to_records(file)?;
            info!("Read {} records from {file}", records.len());

            let mut writer = get_writer(output)?;
            if *json {
                serde_json::to_writer_pretty(&mut writer, &records)?;
                writeln!(writer)?;
            } else {
                write_fasta(&mut writer, &records)?;
            }
            writer.flush()?;
        }
        Commands::Convert {
            input,
            output,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let text = std::fs::read_to_string(input)
                .with_context(|| format!("Unable to read {input}"))?;
            let records: Vec<serde_json::Value> = serde_json::from_str(&text)
                .with_context(|| format!("{input} must hold a JSON array of records"))?;

            write_to_file(&records, output, format)?;
        }
        Commands::Revcomp { file, output } => {
            let records = fasta_to_records(file)?;
            let reversed = records
                .into_iter()
                .map(|record| -> Result<SequenceRecord> {
                    let sequence = seq::reverse_complement(&record.sequence)
                        .with_context(|| format!("Cannot reverse complement '{}'", record.id))?;
                    Ok(SequenceRecord { sequence, ..record })
                })
                .collect::<Result<Vec<_>>>()?;

            let mut writer = get_writer(output)?;
            write_fasta(&mut writer, &reversed)?;
            writer.flush()?;
        }
        Commands::Stats { file, output } => {
            let records = fasta_to_records(file)?;
            let (name, _) = extract_filename(file);
            info!("Summarising {} records of {name}", records.len());

            let mut writer = get_writer(output)?;
            serde_json::to_writer_pretty(&mut writer, &summary::summarize(&records))?;
            writeln!(writer)?;
            writer.flush()?;
        }
        Commands::Tm {
            sequence,
            dna_nm,
            salt_mm,
        } => {
            let params = TmParams {
                dna_nm: *dna_nm,
                salt_mm: *salt_mm,
            };
            let tm = seq::melting_temperature_with(sequence, &params)?;
            println!("{tm:.2}");
        }
        Commands::Hash { input } => {
            println!("{}", seq::generate_hash(input));
        }
        Commands::Info {
            sequence,
            description,
        } => {
            let info = seq::generate_sequence_info(sequence, description.as_deref());
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::List { input, extension } => {
            for path in filename_by_extension(input, extension)? {
                println!("{}", path.display());
            }
        }
        Commands::Gzip {
            files,
            gzip_program,
        } => {
            let compressor = Compressor::new(gzip_program.as_str());
            for file in files {
                let compressed = compressor.compress(file)?;
                println!("{}", compressed.display());
            }
        }
        Commands::Enzymes { file } => {
            let list = match file {
                Some(path) => enzymes::restriction_enzymes_from_path(path)?,
                None => enzymes::restriction_enzymes(),
            };
            for name in list {
                println!("{name}");
            }
        }
    };
    Ok(())
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    debug!("bioutils v{}", cli::VERSION);

    let (result, _) = timing::timed(command_name(&cli.command), || run(&cli.command));
    result
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
