use std::{
    process::ExitCode,
    sync::Arc,
};

use anyhow::Result;
use clap::{
    Parser,
    Subcommand,
};
use kuranmeal::{
    chapters,
    core::{
        http::HttpTransport,
        FetchError,
        MealReader,
        Verse,
    },
    parser::{
        split_references,
        Segment,
    },
    settings::ReaderSettings,
    translations,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kuranmeal")]
#[command(about = "Kur'an-ı Kerim meal okuyucu", long_about = None)]
struct Cli {
    /// API base URL, overrides the stored setting
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log requests and cache activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available translations
    Meals,
    /// List the surahs
    Surahs,
    /// Print a surah under a translation
    Read {
        chapter: u32,
        #[arg(long)]
        meal: Option<String>,
        /// Show a second translation under each verse
        #[arg(long)]
        compare: Option<String>,
    },
    /// Print a single footnote of a verse
    Footnote {
        chapter: u32,
        verse: u32,
        number: u32,
        #[arg(long)]
        meal: Option<String>,
    },
    /// Show or change the stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    SetBaseUrl { url: String },
    SetMeal { name: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<FetchError>() {
                Some(fetch_error) => {
                    tracing::debug!("{:?}", fetch_error);
                    eprintln!("{}", fetch_error.user_message());
                }
                None => eprintln!("Hata: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "kuranmeal=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = ReaderSettings::load();

    match cli.command {
        Commands::Meals => print_meals(&settings),
        Commands::Surahs => print_surahs(),
        Commands::Read { chapter, meal, compare } => {
            let reader = reader(&settings, cli.base_url.as_deref())?;
            let meal = meal.unwrap_or_else(|| settings.default_translation.clone());

            let mut verses = reader.fetch_verses(chapter, &meal).await?;
            if let Some(other) = compare.as_deref() {
                verses = reader.add_translation(verses, other).await?;
            }
            print_chapter(chapter, &meal, compare.as_deref(), &verses);
        }
        Commands::Footnote { chapter, verse, number, meal } => {
            let reader = reader(&settings, cli.base_url.as_deref())?;
            let meal = meal.unwrap_or_else(|| settings.default_translation.clone());

            let verses = reader.fetch_verses(chapter, &meal).await?;
            let footnote = verses
                .iter()
                .find(|v| v.verse_number == verse)
                .and_then(|v| v.footnote(number));
            match footnote {
                Some(footnote) => println!("Dipnot {}\n{}", footnote.number, footnote.text),
                None => println!("{}:{} ayetinde {} numaralı dipnot yok.", chapter, verse, number),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("api_base_url        = {}", settings.api_base_url);
                println!("default_translation = {}", settings.default_translation);
            }
            ConfigAction::SetBaseUrl { url } => {
                settings.api_base_url = url;
                save(&settings)?;
            }
            ConfigAction::SetMeal { name } => {
                if translations::translation(&name).is_none() {
                    anyhow::bail!("'{}' adlı bir meal yok.", name);
                }
                settings.default_translation = name;
                save(&settings)?;
            }
        },
    }

    Ok(())
}

fn reader(settings: &ReaderSettings, base_url: Option<&str>) -> Result<MealReader> {
    let base_url = base_url.unwrap_or(&settings.api_base_url);
    let transport = HttpTransport::new(base_url)?;
    Ok(MealReader::new(Arc::new(transport)))
}

fn save(settings: &ReaderSettings) -> Result<()> {
    settings.save().map_err(|e| anyhow::anyhow!("Ayarlar kaydedilemedi: {}", e))
}

fn print_meals(settings: &ReaderSettings) {
    for translation in translations::translations() {
        let marker = if translation.display_name == settings.default_translation { "*" } else { " " };
        println!("{} {:<28} {}", marker, translation.display_name, translation.accent_color);
    }
}

fn print_surahs() {
    for chapter in chapters::chapters() {
        println!(
            "{:>3}. {:<12} {:>10}  {:<6} {} Ayet",
            chapter.id,
            chapter.name,
            chapter.arabic_name,
            chapter.revelation_place.display_name(),
            chapter.verse_count
        );
    }
}

fn print_chapter(chapter_id: u32, meal: &str, compare: Option<&str>, verses: &[Verse]) {
    if let Some(chapter) = chapters::chapter_by_id(chapter_id) {
        println!("{}. {} Suresi ({})", chapter.id, chapter.name, meal);
        println!("{} ayettir.\n", chapter.verse_count);
    }

    for verse in verses {
        println!("{}. {}", verse.verse_number, verse.arabic_text);
        print_translation(verse, meal);
        if let Some(other) = compare {
            println!("   -- {}", other);
            print_translation(verse, other);
        }
        println!();
    }
}

fn print_translation(verse: &Verse, meal: &str) {
    let Some(text) = verse.text(meal) else {
        return;
    };

    let segments = split_references(text);
    let rendered: String = segments.iter().map(Segment::to_string).collect();
    println!("   {}", rendered);

    let mut shown = Vec::new();
    for segment in &segments {
        if let Segment::FootnoteRef(number) = segment {
            if shown.contains(number) {
                continue;
            }
            if let Some(footnote) = verse.footnote_for(meal, *number) {
                println!("   [{}] {}", footnote.number, footnote.text);
                shown.push(*number);
            }
        }
    }
}
