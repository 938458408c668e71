use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use swatchbook::commands::delete::{run as delete, DeleteArgs};
use swatchbook::commands::init::{run as init, InitArgs};
use swatchbook::commands::list::{run as list, ListArgs};
use swatchbook::commands::new::{run as new, NewArgs};
use swatchbook::commands::show::{run as show, ShowArgs};

#[derive(Parser, Debug, Clone)]
#[command(about = "Swatchbook, a color palette designer", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Create a palette store seeded with the built-in palettes
    Init {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
    },
    /// List every stored palette with a preview of its shade ramps
    List {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
    },
    /// Show the full shade ramps for a palette, or for one of its colors
    Show {
        palette_id: String,
        color_id: Option<String>,
        #[arg(long, default_value = ".")]
        working_dir: PathBuf,
    },
    /// Validate and save a new palette
    New {
        name: String,
        /// Colors as `name=#hex` pairs
        colors: Vec<String>,
        #[arg(long)]
        emoji: Option<String>,
        #[arg(long, default_value = ".")]
        working_dir: PathBuf,
    },
    /// Delete a stored palette
    Delete {
        palette_id: String,
        #[arg(long, default_value = ".")]
        working_dir: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Init { working_dir }) => init(InitArgs {
            working_dir: &working_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::List { working_dir }) => list(ListArgs {
            working_dir: &working_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Show {
            palette_id,
            color_id,
            working_dir,
        }) => show(ShowArgs {
            working_dir: &working_dir,
            palette_id: &palette_id,
            color_id: color_id.as_deref(),
            stdout: &mut stdout,
        }),
        Some(Commands::New {
            name,
            colors,
            emoji,
            working_dir,
        }) => new(NewArgs {
            working_dir: &working_dir,
            name: &name,
            emoji,
            colors: &colors,
            stdout: &mut stdout,
        }),
        Some(Commands::Delete {
            palette_id,
            working_dir,
        }) => delete(DeleteArgs {
            working_dir: &working_dir,
            palette_id: &palette_id,
            stdout: &mut stdout,
        }),
        None => {
            Args::command().print_help().unwrap();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        println!("{}", e);
        std::process::exit(1);
    }
}
