mod logger;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use zitie_layout::{AnnotationCache, AnnotationTable, SheetOptions};

use crate::logger::CliLogger;

/// Entries kept for the end-of-run warning summary
const LOG_HISTORY: usize = 200;

#[derive(Parser)]
#[command(name = "zitie", about = "Chinese calligraphy practice sheet generator", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into pages of practice cells
    Paginate {
        #[command(flatten)]
        text: TextArgs,

        #[command(flatten)]
        sheet: SheetArgs,

        /// Print the pages as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the guide of a single cell
    Guide {
        #[command(flatten)]
        sheet: SheetArgs,

        /// Print SVG instead of JSON
        #[arg(long)]
        svg: bool,
    },

    /// Write one SVG file per page
    Render {
        #[command(flatten)]
        text: TextArgs,

        #[command(flatten)]
        sheet: SheetArgs,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// File name prefix of the pages
        #[arg(long, default_value = "page")]
        stem: String,

        /// Only render the first N pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Show sheet statistics
    Stats {
        #[command(flatten)]
        text: TextArgs,

        #[command(flatten)]
        sheet: SheetArgs,
    },
}

#[derive(Args)]
struct TextArgs {
    /// Text to practice
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// Sheet settings; flags override values from `--config`
#[derive(Args)]
struct SheetArgs {
    /// Load settings from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective settings to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Guide style drawn in each cell
    #[arg(long, value_enum)]
    grid_type: Option<GridTypeArg>,

    /// Cell side in pixels
    #[arg(long)]
    grid_size: Option<f32>,

    /// Practice cells per character
    #[arg(long)]
    repeat: Option<usize>,

    /// Arrangement of the cells
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Paper orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Top margin in mm
    #[arg(long)]
    margin_top: Option<f32>,

    /// Right margin in mm
    #[arg(long)]
    margin_right: Option<f32>,

    /// Bottom margin in mm
    #[arg(long)]
    margin_bottom: Option<f32>,

    /// Left margin in mm
    #[arg(long)]
    margin_left: Option<f32>,

    /// Glyph size in percent of the cell
    #[arg(long)]
    font_size: Option<f32>,

    /// Hide the center cross and diagonals
    #[arg(long)]
    no_sublines: bool,

    /// Leave repeat cells empty instead of drawing faded glyphs
    #[arg(long)]
    no_reference: bool,

    /// Pinyin annotations as JSON (`{ "永": { "pinyin_with_tone": "yǒng", ... } }`)
    #[arg(long)]
    annotations: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GridTypeArg {
    Tian,
    Mi,
    Hui,
    Jiu,
    Gou,
    Fang,
    Heng,
    Zhong,
    Mitian,
    Si,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Grid,
    Vertical,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    B5,
    Letter,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<GridTypeArg> for zitie_layout::GridType {
    fn from(arg: GridTypeArg) -> Self {
        match arg {
            GridTypeArg::Tian => Self::Tian,
            GridTypeArg::Mi => Self::Mi,
            GridTypeArg::Hui => Self::Hui,
            GridTypeArg::Jiu => Self::Jiu,
            GridTypeArg::Gou => Self::Gou,
            GridTypeArg::Fang => Self::Fang,
            GridTypeArg::Heng => Self::Heng,
            GridTypeArg::Zhong => Self::Zhong,
            GridTypeArg::Mitian => Self::Mitian,
            GridTypeArg::Si => Self::Si,
        }
    }
}

impl From<LayoutArg> for zitie_layout::LayoutType {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Grid => Self::Grid,
            LayoutArg::Vertical => Self::Vertical,
        }
    }
}

impl From<PaperArg> for zitie_layout::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::B5 => Self::B5,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<OrientationArg> for zitie_layout::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl TextArgs {
    async fn read(&self) -> Result<String> {
        match (&self.text, &self.input) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => bail!("Provide the text as an argument or with --input"),
        }
    }
}

impl SheetArgs {
    /// Build the effective options: config file first, then flags
    async fn options(&self) -> Result<SheetOptions> {
        let mut options = match &self.config {
            Some(path) => SheetOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SheetOptions::default(),
        };

        let layout = &mut options.layout;
        if let Some(grid_type) = self.grid_type {
            layout.grid_type = grid_type.into();
        }
        if let Some(grid_size) = self.grid_size {
            layout.grid_size = grid_size;
        }
        if let Some(repeat) = self.repeat {
            layout.repeat_count = repeat;
        }
        if let Some(layout_type) = self.layout {
            layout.layout_type = layout_type.into();
        }
        if let Some(font_size) = self.font_size {
            layout.font_size = font_size;
        }
        if self.no_sublines {
            layout.show_sublines = false;
        }
        if self.no_reference {
            layout.show_reference = false;
        }

        let print = &mut options.print;
        if let Some(paper) = self.paper {
            print.paper_size = paper.into();
        }
        if let Some(orientation) = self.orientation {
            print.orientation = orientation.into();
        }
        let margins = &mut print.margins;
        for (value, side) in [
            (self.margin_top, &mut margins.top_mm),
            (self.margin_right, &mut margins.right_mm),
            (self.margin_bottom, &mut margins.bottom_mm),
            (self.margin_left, &mut margins.left_mm),
        ] {
            if let Some(value) = value {
                *side = value;
            }
        }

        options.validate()?;

        if let Some(path) = &self.save_config {
            options.save(path).await?;
            log::info!("Saved settings to {}", path.display());
        }

        Ok(options)
    }

    async fn annotations(&self) -> Result<AnnotationCache<AnnotationTable>> {
        let table = match &self.annotations {
            Some(path) => AnnotationTable::load(path)
                .await
                .with_context(|| format!("Failed to load annotations {}", path.display()))?,
            None => AnnotationTable::new(),
        };
        Ok(AnnotationCache::new(table))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = CliLogger::new(LOG_HISTORY, CliLogger::level_for_verbosity(cli.verbose));
    logger.clone().init()?;

    run(cli.command).await?;

    let warnings = logger.warning_count();
    if warnings > 0 {
        eprintln!("Finished with {} warning(s)", warnings);
    }

    Ok(())
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Paginate { text, sheet, json } => {
            let text = text.read().await?;
            let options = sheet.options().await?;
            let (capacity, pages) = zitie_layout::paginate_sheet(&text, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&pages)?);
                return Ok(());
            }

            let grid_type = options.layout.grid_type;
            println!("Grid style: {} ({})", grid_type.label(), grid_type.name());
            println!(
                "Page capacity: {} columns x {} rows ({} cells)",
                capacity.columns, capacity.rows, capacity.cells_per_page
            );
            for (i, page) in pages.iter().enumerate() {
                let characters: String = page
                    .iter()
                    .filter(|c| c.is_first_in_group)
                    .map(|c| c.character.as_str())
                    .collect();
                println!("  Page {}: {} cells  {}", i + 1, page.len(), characters);
            }
        }

        Commands::Guide { sheet, svg } => {
            let options = sheet.options().await?;
            let layout = &options.layout;
            let guide = zitie_layout::generate_guide(layout.grid_type, &layout.guide_params())?;

            if svg {
                print!("{}", zitie_layout::guide_to_svg(&guide));
            } else {
                println!("{}", serde_json::to_string_pretty(&guide)?);
            }
        }

        Commands::Render {
            text,
            sheet,
            output,
            stem,
            max_pages,
        } => {
            let text = text.read().await?;
            let options = sheet.options().await?;
            let mut annotations = sheet.annotations().await?;

            let composed = match max_pages {
                Some(max_pages) => {
                    zitie_layout::generate_preview(&text, &options, &mut annotations, max_pages)?
                }
                None => zitie_layout::compose_sheet(&text, &options, &mut annotations)?,
            };

            let written = zitie_layout::save_svg_pages(&composed, &output, &stem).await?;
            println!("Rendered {} page(s) → {}", written.len(), output.display());
        }

        Commands::Stats { text, sheet } => {
            let text = text.read().await?;
            let options = sheet.options().await?;
            let stats = zitie_layout::calculate_statistics(&text, &options)?;

            println!("Sheet Statistics:");
            println!("  Characters: {}", stats.characters);
            println!("  Practice cells: {}", stats.cells);
            println!("  Pages: {}", stats.pages);
            println!("  Cells per page: {}", stats.cells_per_page);
            println!("  Unused cells on last page: {}", stats.unused_cells_last_page);
        }
    }

    Ok(())
}
