use anuario::labels::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "anuario", bin_name = "anuario", version)]
#[command(about = "Hogwarts yearbook: browse and edit the character records file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Records file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Language for field labels (es, en, eu)
    #[arg(long, global = true, value_name = "LANG")]
    pub lang: Option<Locale>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records, optionally filtered by text and house
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text matched against the name
        #[arg(short, long)]
        search: Option<String>,

        /// House to include (repeatable)
        #[arg(short = 'H', long = "house")]
        houses: Vec<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full sheet of one or more records
    #[command(alias = "v")]
    View {
        /// Slugs of the records
        #[arg(required = true, num_args = 1..)]
        slugs: Vec<String>,
    },

    /// Add a new record
    #[command(alias = "n")]
    Create {
        /// Unique identifier of the new record
        #[arg(long)]
        slug: String,

        /// Field assignments (e.g. --set house=Gryffindor --set jobs="Auror;Teacher")
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// Change fields of an existing record
    #[command(alias = "e")]
    Update {
        /// Slug of the record
        slug: String,

        /// Field assignments (e.g. --set patronus=Stag)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },

    /// Delete one or more records
    #[command(alias = "rm")]
    Delete {
        /// Slugs of the records
        #[arg(required = true, num_args = 1..)]
        slugs: Vec<String>,
    },

    /// Export record sheets to a .tar.gz archive
    Export {
        /// Slugs of the records (all records when omitted)
        slugs: Vec<String>,

        /// Output directory (current directory when omitted)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Print the report parameters of a record as JSON
    Report {
        /// Slug of the record
        slug: String,
    },

    /// List the houses present in the records file
    Houses,

    /// Get or set configuration
    Config {
        /// Configuration key (locale, page-size, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the records file
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_collects_repeated_houses() {
        let cli = Cli::parse_from([
            "anuario", "list", "-s", "potter", "-H", "Gryffindor", "-H", "Slytherin", "-p", "2",
        ]);
        match cli.command {
            Some(Commands::List {
                search,
                houses,
                page,
                json,
            }) => {
                assert_eq!(search.as_deref(), Some("potter"));
                assert_eq!(houses, vec!["Gryffindor", "Slytherin"]);
                assert_eq!(page, 2);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::parse_from(["anuario", "view", "luna-lovegood", "--lang", "en-GB", "-v"]);
        assert_eq!(cli.lang, Some(Locale::En));
        assert!(cli.verbose);
    }

    #[test]
    fn update_requires_an_assignment() {
        assert!(Cli::try_parse_from(["anuario", "update", "harry-potter"]).is_err());
    }

    #[test]
    fn unknown_lang_is_rejected() {
        assert!(Cli::try_parse_from(["anuario", "--lang", "fr", "houses"]).is_err());
    }
}
