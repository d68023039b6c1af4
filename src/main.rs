// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-translator: look up a country's name in another language
//!
//! Lists the countries and languages of a translation dataset, answers single
//! lookups, or runs an interactive prompt loop.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use country_translator::codes::{CountryCodeConverter, LanguageCodeConverter};
use country_translator::config::Config;
use country_translator::console::Console;
use country_translator::diagnostics;
use country_translator::report::{self, OutputFormat};
use country_translator::translations::TranslationStore;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "country-translator")]
#[command(version)]
#[command(about = "Look up the name of a country in another language")]
#[command(long_about = None)]
struct Cli {
    /// Translation dataset: a bundled name or a JSON file path
    #[arg(long, global = true, value_name = "RESOURCE")]
    data: Option<String>,

    /// Country name table: a bundled name or a file path
    #[arg(long, global = true, value_name = "RESOURCE")]
    country_codes: Option<String>,

    /// Language name table: a bundled name or a file path
    #[arg(long, global = true, value_name = "RESOURCE")]
    language_codes: Option<String>,

    /// Output format for one-shot commands
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every country in the dataset
    Countries,

    /// List the languages a country is translated into
    Languages {
        /// Country code or name
        #[arg(value_name = "COUNTRY")]
        country: String,
    },

    /// Print the name of a country in one language
    Translate {
        /// Country code or name
        #[arg(value_name = "COUNTRY")]
        country: String,

        /// Language code or name
        #[arg(value_name = "LANGUAGE")]
        language: String,
    },

    /// Prompt for a country and a language until `quit` (default)
    Interactive,

    /// Check that the configured datasets load and agree
    Doctor,
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose {
        "country_translator=debug"
    } else {
        "country_translator=warn"
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn load_store(config: &Config) -> Result<TranslationStore> {
    TranslationStore::load(&config.data)
        .with_context(|| format!("loading translation data from {}", config.data))
}

fn load_converters(config: &Config) -> Result<(CountryCodeConverter, LanguageCodeConverter)> {
    let countries = CountryCodeConverter::load(&config.country_codes)
        .with_context(|| format!("loading country names from {}", config.country_codes))?;
    let languages = LanguageCodeConverter::load(&config.language_codes)
        .with_context(|| format!("loading language names from {}", config.language_codes))?;
    Ok((countries, languages))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = Config::from_env().with_overrides(
        cli.data.as_deref(),
        cli.country_codes.as_deref(),
        cli.language_codes.as_deref(),
    );

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Countries => {
            let store = load_store(&config)?;
            let (countries, _) = load_converters(&config)?;
            let listing = report::list_countries(&store, &countries);
            println!("{}", cli.format.render(&listing)?);
        }

        Commands::Languages { country } => {
            let store = load_store(&config)?;
            let (countries, languages) = load_converters(&config)?;
            let code = report::resolve_country(&store, &countries, &country);
            let listing = report::list_languages(&store, &countries, &languages, &code);
            println!("{}", cli.format.render(&listing)?);
        }

        Commands::Translate { country, language } => {
            let store = load_store(&config)?;
            let (countries, languages) = load_converters(&config)?;
            let country = report::resolve_country(&store, &countries, &country);
            let language = report::resolve_language(&store, &languages, &country, &language);
            let lookup = report::lookup_translation(&store, &country, &language);
            println!("{}", cli.format.render(&lookup)?);
        }

        Commands::Interactive => {
            let store = load_store(&config)?;
            let (countries, languages) = load_converters(&config)?;
            info!("starting interactive console");
            let console = Console::new(&store, &countries, &languages);
            console.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(&config)?;
        }
    }

    Ok(())
}
