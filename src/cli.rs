use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helprx")]
#[command(about = "AI symptom analysis and OTC dosage guidance", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze symptoms and print OTC recommendations
    Analyze {
        /// Patient age in years (0-120); prompted for when omitted
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=120))]
        age: Option<u32>,

        /// Patient weight in pounds (0-999); prompted for when omitted
        #[arg(short, long)]
        weight: Option<f64>,

        /// Free-text symptom description; prompted for when omitted
        #[arg(short, long)]
        symptoms: Option<String>,

        /// Photo of a medication bottle (optional)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Print the raw structured result as JSON instead of panels
        #[arg(long)]
        json: bool,
    },

    /// Show or update configuration
    Config {
        /// Store the Gemini API key in the config file
        #[arg(long)]
        set_api_key: Option<String>,

        /// Print the current configuration
        #[arg(long)]
        show: bool,
    },
}
