use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod cli;

/// alimento - Personalized Meal Planning
#[derive(Parser)]
#[command(name = "alimento")]
#[command(about = "Meal planning, smart food swaps and nutrition tracking", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog recipes, optionally filtered by a search query
    Recipes {
        /// Match against recipe names and tags
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one recipe with ingredients and instructions
    Recipe {
        /// Recipe id from the catalog
        id: String,
    },
    /// Generate a meal plan from the recipe catalog
    Plan {
        /// First planned date (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Number of consecutive days to plan
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=14))]
        days: u8,

        /// Comma-separated preference tags, e.g. "vegan, gluten-free"
        #[arg(long, default_value = "")]
        preferences: String,
    },
    /// Suggested food swaps and the used-alternatives log
    Swaps {
        #[command(subcommand)]
        command: SwapsCommands,
    },
    /// Favorite recipes and swaps
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Calculate body mass index from metric measurements
    Bmi {
        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },
    /// Create a local account and sign in
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: String,
    },
    /// Sign in to the local session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// Sign out of the local session
    Logout,
    /// Show the signed-in account
    Whoami,
}

#[derive(Subcommand)]
enum SwapsCommands {
    /// List the suggested swaps
    List,
    /// Record a suggested swap as used
    Use {
        /// Swap id, e.g. "swap-1"
        id: String,
    },
    /// Show the used-alternatives log
    History,
    /// Remove a used alternative by its position in the log
    Remove { index: usize },
}

#[derive(Subcommand)]
enum FavoritesCommands {
    /// List favorite recipes and swaps
    List,
    /// Toggle a recipe in the favorites list
    Recipe { id: String },
    /// Toggle a suggested swap in the favorites list
    Swap { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = alimento::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    alimento::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Recipes { query } => cli::recipes::list(config, query),
        Commands::Recipe { id } => cli::recipes::show(id),
        Commands::Plan {
            start,
            days,
            preferences,
        } => cli::plan::generate(start, days, preferences),
        Commands::Swaps { command } => match command {
            SwapsCommands::List => cli::swaps::list(config),
            SwapsCommands::Use { id } => cli::swaps::use_swap(config, id),
            SwapsCommands::History => cli::swaps::history(config),
            SwapsCommands::Remove { index } => cli::swaps::remove(config, index),
        },
        Commands::Favorites { command } => match command {
            FavoritesCommands::List => cli::favorites::list(config),
            FavoritesCommands::Recipe { id } => cli::favorites::toggle_recipe(config, id),
            FavoritesCommands::Swap { id } => cli::favorites::toggle_swap(config, id),
        },
        Commands::Bmi { height, weight } => cli::bmi::calculate(height, weight),
        Commands::Register {
            email,
            password,
            name,
        } => cli::auth::register(config, email, password, name),
        Commands::Login { email, password } => cli::auth::login(config, email, password),
        Commands::Logout => cli::auth::logout(config),
        Commands::Whoami => cli::auth::whoami(config),
    }
}
