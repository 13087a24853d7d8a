use clap::{Parser, Subcommand};
use lirik::cli::{
    decrypt_with_theme, encrypt_with_theme, read_input, run_self_test, show_theme_info,
    DEFAULT_TEST_KEY,
};
use lirik::{Cipher, DecodeOptions, EncodeOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("LIRIK_VERSION");
const BUILD: &str = env!("LIRIK_BUILD");
const PROFILE: &str = env!("LIRIK_PROFILE");
const GIT_HASH: &str = env!("LIRIK_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "lirik")]
#[command(author, about = "Reversible lyric/pantun cipher", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt plaintext into lyric/pantun text
    #[command(alias = "e")]
    Encrypt {
        /// Classical cipher applied before the codebook
        #[arg(long, default_value = "vigenere", value_parser = parse_cipher)]
        algo: Cipher,

        /// Key string for the classical cipher
        #[arg(long, required = true)]
        key: String,

        /// Codebook JSON (bundled theme if omitted)
        #[arg(long, env = "LIRIK_THEME")]
        theme: Option<PathBuf>,

        /// Format output as a 4-line ABAB pantun
        #[arg(long)]
        pantun: bool,

        /// Read plaintext from a file
        #[arg(long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Plaintext (stdin if neither this nor --input is given)
        text: Option<String>,
    },

    /// Decrypt lyric/pantun text back to plaintext
    #[command(alias = "d")]
    Decrypt {
        /// Classical cipher used at encryption
        #[arg(long, default_value = "vigenere", value_parser = parse_cipher)]
        algo: Cipher,

        /// Key string used at encryption
        #[arg(long, required = true)]
        key: String,

        /// Codebook JSON (bundled theme if omitted)
        #[arg(long, env = "LIRIK_THEME")]
        theme: Option<PathBuf>,

        /// Collapse whitespace runs in the output
        #[arg(long)]
        normalize: bool,

        /// Read lyric text from a file
        #[arg(long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Lyric text (stdin if neither this nor --input is given)
        text: Option<String>,
    },

    /// Run a round-trip self test
    #[command(alias = "t")]
    Test {
        /// Key used for every case
        #[arg(long, default_value = DEFAULT_TEST_KEY)]
        key: String,

        /// Codebook JSON (bundled theme if omitted)
        #[arg(long, env = "LIRIK_THEME")]
        theme: Option<PathBuf>,
    },

    /// Show codebook details and fingerprint
    #[command(alias = "i")]
    Info {
        /// Codebook JSON (bundled theme if omitted)
        #[arg(long, env = "LIRIK_THEME")]
        theme: Option<PathBuf>,
    },
}

fn parse_cipher(s: &str) -> Result<Cipher, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("lirik {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if Cli::command().print_help().is_err() {
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            algo,
            key,
            theme,
            pantun,
            input,
            text,
        } => {
            let options = EncodeOptions {
                cipher: algo,
                key,
                pantun,
            };
            read_input(text, input.as_deref())
                .and_then(|plain| encrypt_with_theme(&plain, theme.as_deref(), &options))
                .map(|out| print!("{}", out))
        }

        Commands::Decrypt {
            algo,
            key,
            theme,
            normalize,
            input,
            text,
        } => {
            let options = DecodeOptions {
                cipher: algo,
                key,
                normalize,
            };
            read_input(text, input.as_deref())
                .and_then(|lyric| decrypt_with_theme(&lyric, theme.as_deref(), &options))
                .map(|out| print!("{}", out))
        }

        Commands::Test { key, theme } => {
            run_self_test(theme.as_deref(), &key).map(|_| println!("Self-test OK"))
        }

        Commands::Info { theme } => {
            show_theme_info(theme.as_deref()).map(|info| print!("{}", info))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
