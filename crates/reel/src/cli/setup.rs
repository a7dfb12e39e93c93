use clap::{Args, Parser, Subcommand, ValueEnum};
use reelapp::model::{MovieUpdate, NewMovie};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "reel",
    bin_name = "reel",
    version,
    disable_help_subcommand = true,
    about = "Movie catalog on a JSON file, from the terminal or over HTTP",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use instead of the `database_file` setting
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a movie to the catalog
    #[command(alias = "create")]
    Add(AddArgs),

    /// Show one movie
    #[command(alias = "view")]
    Get {
        /// Movie id
        id: u64,
    },

    /// List every movie (default)
    #[command(alias = "ls")]
    List,

    /// Change some fields of a movie
    Update(UpdateArgs),

    /// Remove a movie permanently
    #[command(alias = "rm")]
    Delete {
        /// Movie id
        id: u64,
    },

    /// Movies released in a year
    Year {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Movies by a director (case-insensitive)
    Director { name: String },

    /// Movies in a genre (case-insensitive)
    Genre { genre: String },

    /// Movies with a whole word of the title matching the query
    Search { query: String },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides the `host` setting)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides the `port` setting)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the value of a single setting
    Get { key: String },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Title of the movie
    pub title: String,

    #[arg(short, long)]
    pub director: String,

    #[arg(short, long, allow_negative_numbers = true)]
    pub year: i32,

    #[arg(short, long)]
    pub genre: String,

    /// Running time in minutes
    #[arg(long)]
    pub duration: Option<u32>,

    /// Rating from 0 to 10
    #[arg(short, long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub synopsis: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    /// Mark as already watched
    #[arg(short, long)]
    pub watched: bool,
}

impl From<AddArgs> for NewMovie {
    fn from(args: AddArgs) -> Self {
        NewMovie {
            title: args.title,
            director: args.director,
            year: args.year,
            genre: args.genre,
            duration: args.duration,
            rating: args.rating,
            synopsis: args.synopsis,
            price: args.price,
            is_watched: args.watched,
        }
    }
}

/// Optional fields `reel update --clear` can reset to empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClearableField {
    Duration,
    Rating,
    Synopsis,
    Price,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Movie id
    pub id: u64,

    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub director: Option<String>,

    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    #[arg(short, long)]
    pub genre: Option<String>,

    #[arg(long)]
    pub duration: Option<u32>,

    #[arg(short, long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub synopsis: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    /// Watched flag (true or false)
    #[arg(short, long, value_name = "BOOL")]
    pub watched: Option<bool>,

    /// Reset an optional field; wins over a value given for the same field
    #[arg(long, value_enum, value_name = "FIELD")]
    pub clear: Vec<ClearableField>,
}

impl UpdateArgs {
    pub fn into_update(self) -> (u64, MovieUpdate) {
        let mut update = MovieUpdate {
            title: self.title,
            director: self.director,
            year: self.year,
            genre: self.genre,
            duration: self.duration.map(Some),
            rating: self.rating.map(Some),
            synopsis: self.synopsis.map(Some),
            price: self.price.map(Some),
            is_watched: self.watched,
        };
        for field in self.clear {
            match field {
                ClearableField::Duration => update.duration = Some(None),
                ClearableField::Rating => update.rating = Some(None),
                ClearableField::Synopsis => update.synopsis = Some(None),
                ClearableField::Price => update.price = Some(None),
            }
        }
        (self.id, update)
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
