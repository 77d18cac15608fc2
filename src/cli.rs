use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 bioutils version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   everyday helpers for FASTA files and DNA sequences";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a FASTA file and write it back out, one sequence line per record
    #[command(arg_required_else_help = true)]
    Parse {
        /// the input FASTA file
        file: String,

        /// the output file, standard output if omitted
        #[arg(short)]
        output: Option<String>,

        /// write records as a JSON array of {id, sequence} objects
        #[arg(long)]
        json: bool,
    },

    /// Convert a JSON array of {id, sequence} objects into a sequence file
    #[command(arg_required_else_help = true)]
    Convert {
        /// the input .json file
        input: String,

        /// the output file
        #[arg(short)]
        output: String,

        /// the output format. only `fasta` is available at present
        #[arg(long, default_value = "fasta")]
        format: String,
    },

    /// Reverse complement every record of a FASTA file
    #[command(arg_required_else_help = true)]
    Revcomp {
        /// the input FASTA file
        file: String,

        /// the output file, standard output if omitted
        #[arg(short)]
        output: Option<String>,
    },

    /// Report length, GC content, melting temperature and hash of every record as JSON
    #[command(arg_required_else_help = true)]
    Stats {
        /// the input FASTA file
        file: String,

        /// the output file, standard output if omitted
        #[arg(short)]
        output: Option<String>,
    },

    /// Melting temperature of a DNA sequence
    #[command(arg_required_else_help = true)]
    Tm {
        sequence: String,

        /// DNA strand concentration in nM
        #[arg(long, default_value_t = 50.0)]
        dna_nm: f64,

        /// monovalent salt concentration in mM
        #[arg(long, default_value_t = 50.0)]
        salt_mm: f64,
    },

    /// SHA-224 hex digest of a string
    #[command(arg_required_else_help = true)]
    Hash { input: String },

    /// Bundle a sequence with a random identifier and its hash, printed as JSON
    #[command(arg_required_else_help = true)]
    Info {
        sequence: String,

        /// accepted for compatibility; the generated record never carries a description
        #[arg(long)]
        description: Option<String>,
    },

    /// List files ending with an extension, in a directory or as a single file
    #[command(arg_required_else_help = true)]
    List {
        /// a directory or a single file
        input: String,

        /// the literal file name suffix to match
        #[arg(short, long, default_value = "fa")]
        extension: String,
    },

    /// Compress files in place with gzip
    #[command(arg_required_else_help = true)]
    Gzip {
        /// the files to compress
        #[arg(required = true)]
        files: Vec<String>,

        /// the gzip-compatible program to run
        #[arg(long, default_value = "gzip")]
        gzip_program: String,
    },

    /// Print the restriction enzyme list
    Enzymes {
        /// read the list from this file instead of the bundled one
        #[arg(long)]
        file: Option<String>,
    },
}
