//! Command-line front end.
//!
//! Each subcommand renders one page of the site as plain text, or posts a JSON
//! body to one of the mock endpoints:
//!
//! ```text
//! tourfinder tours --category beach --sort price
//! tourfinder tours --param destination=sylhet --view list
//! tourfinder tour cox-bazar-beach-paradise
//! tourfinder home
//! tourfinder post /api/newsletter '{"email":"a@b.co"}'
//! tourfinder book --package "Sajek Valley Cloud Retreat" --first-name Ana ...
//! ```
//!
//! Settings are read from `--config` (TOML) and then overridden by the global
//! flags. Page state is driven through the same [`Event`]s the library exposes,
//! so the CLI exercises exactly what a page would.

#![allow(clippy::multiple_crate_versions)]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tourfinder::api::{self, ApiReply, ApiRequest};
use tourfinder::app::BookingField;
use tourfinder::catalog::JsonCatalog;
use tourfinder::domain::{Difficulty, SortKey};
use tourfinder::ui::{render_detail, render_home, render_listing, render_not_found, DetailViewModel, HomeViewModel};
use tourfinder::{handle_event, observability, Action, AppState, Config, Event, TourfinderError, ViewMode};

#[derive(Parser, Debug)]
#[command(name = "tourfinder", version, about = "Browse and book tours from the command line")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Display locale (en-US, en-GB, en-IN, de-DE)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// IANA timezone used instead of the host's
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Tours JSON file
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Categories JSON file
    #[arg(long, global = true)]
    categories: Option<String>,

    /// Tracing filter, e.g. "debug"
    #[arg(long, global = true)]
    trace_level: Option<String>,
}

impl GlobalArgs {
    fn overrides(&self) -> Config {
        Config {
            catalog_path: self.catalog.clone(),
            categories_path: self.categories.clone(),
            locale: self.locale.clone(),
            timezone: self.timezone.clone(),
            trace_level: self.trace_level.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tours matching the given filters
    Tours(ToursArgs),

    /// Show one tour with related tours
    Tour { slug: String },

    /// Show the home page
    Home,

    /// Post a JSON body to an API path
    Post { path: String, body: String },

    /// Fill in and submit the booking form
    Book(BookArgs),
}

#[derive(Args, Debug)]
struct ToursArgs {
    /// Page URL parameter as key=value, applied before the other flags
    #[arg(long = "param", value_name = "KEY=VALUE")]
    params: Vec<String>,

    #[arg(long)]
    keyword: Option<String>,

    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    min_price: Option<u64>,

    #[arg(long)]
    max_price: Option<u64>,

    #[arg(long)]
    duration: Option<String>,

    /// easy, moderate or challenging
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// rating, price or duration
    #[arg(long)]
    sort: Option<SortKey>,

    /// grid or list
    #[arg(long)]
    view: Option<ViewMode>,
}

#[derive(Args, Debug)]
struct BookArgs {
    /// Tour title; defaults to the first package
    #[arg(long)]
    package: Option<String>,

    #[arg(long, default_value = "Mr.")]
    title: String,

    #[arg(long, default_value = "")]
    first_name: String,

    #[arg(long, default_value = "")]
    last_name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    day: String,

    /// Month number or English name
    #[arg(long, default_value = "")]
    month: String,

    #[arg(long, default_value = "")]
    year: String,

    #[arg(long)]
    insurance: bool,

    #[arg(long)]
    accept_terms: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> tourfinder::Result<ExitCode> {
    let base = match &cli.global.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let config = base.merged_with(cli.global.overrides());

    observability::init_tracing(&config);
    tracing::info!(command = ?cli.command, "tourfinder started");

    let catalog = config.load_catalog()?;
    let mut state = AppState::with_locale(&catalog, config.timezone_source(), config.display_locale());
    handle_event(&mut state, &Event::Mount)?;

    match cli.command {
        Command::Tours(args) => {
            run_tours(&mut state, args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Tour { slug } => {
            match DetailViewModel::for_slug(&state.tours, &state.categories, &slug, &state.geo) {
                Some(vm) => {
                    println!("{}", render_detail(&vm));
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("{}", render_not_found(&slug));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Home => {
            let vm = HomeViewModel::new(&state.tours, &state.categories, &state.geo);
            println!("{}", render_home(&vm));
            Ok(ExitCode::SUCCESS)
        }
        Command::Post { path, body } => {
            let reply = api::dispatch(&ApiRequest::post(path, body), &catalog);
            print_reply(&reply)?;
            Ok(exit_code(&reply))
        }
        Command::Book(args) => run_book(&mut state, &catalog, args),
    }
}

fn run_tours(state: &mut AppState, args: ToursArgs) -> tourfinder::Result<()> {
    if !args.params.is_empty() {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        for param in &args.params {
            let (key, value) = param.split_once('=').unwrap_or((param.as_str(), ""));
            query.append_pair(key, value);
        }
        handle_event(state, &Event::ApplyQuery(query.finish()))?;
    }

    let mut events = Vec::new();
    if let Some(keyword) = args.keyword {
        events.push(Event::SetKeyword(keyword));
    }
    if let Some(category) = args.category {
        events.push(Event::SelectCategory(Some(category)));
    }
    if let Some(min) = args.min_price {
        events.push(Event::SetMinPrice(Some(min)));
    }
    if let Some(max) = args.max_price {
        events.push(Event::SetMaxPrice(Some(max)));
    }
    if let Some(duration) = args.duration {
        events.push(Event::SetDuration(Some(duration)));
    }
    if let Some(difficulty) = args.difficulty {
        events.push(Event::SetDifficulty(Some(difficulty)));
    }
    if let Some(sort) = args.sort {
        events.push(Event::SetSort(sort));
    }
    if let Some(view) = args.view {
        events.push(Event::SetViewMode(view));
    }

    for event in &events {
        handle_event(state, event)?;
    }

    println!("{}", render_listing(&state.compute_viewmodel()));
    Ok(())
}

fn run_book(state: &mut AppState, catalog: &JsonCatalog, args: BookArgs) -> tourfinder::Result<ExitCode> {
    if let Some(title) = &args.package {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("package", title);
        handle_event(state, &Event::ApplyQuery(query.finish()))?;

        if !state.selected_package().is_some_and(|t| t.title.eq_ignore_ascii_case(title)) {
            return Err(TourfinderError::NotFound(format!("package: {title}")));
        }
    }

    let fields = [
        BookingField::Title(args.title),
        BookingField::FirstName(args.first_name),
        BookingField::LastName(args.last_name),
        BookingField::Email(args.email),
        BookingField::Phone(args.phone),
        BookingField::StartDay(args.day),
        BookingField::StartMonth(args.month),
        BookingField::StartYear(args.year),
        BookingField::TravelInsurance(args.insurance),
        BookingField::TermsAccepted(args.accept_terms),
    ];
    for field in fields {
        handle_event(state, &Event::EditBooking(field))?;
    }

    let (_, actions) = handle_event(state, &Event::SubmitBooking)?;

    let mut code = ExitCode::SUCCESS;
    for action in &actions {
        if !execute_action(action, catalog)? {
            code = ExitCode::FAILURE;
        }
    }
    Ok(code)
}

/// Runs one action. Returns `false` if it ended in a user-facing failure.
#[tracing::instrument(level = "debug", skip(catalog))]
fn execute_action(action: &Action, catalog: &JsonCatalog) -> tourfinder::Result<bool> {
    match action {
        Action::Submit(request) => {
            tracing::debug!(path = %request.path, "submitting request");
            let reply = api::dispatch(request, catalog);
            print_reply(&reply)?;
            Ok(reply.is_success())
        }
        Action::Notify(message) => {
            eprintln!("{message}");
            Ok(false)
        }
    }
}

fn print_reply(reply: &ApiReply) -> tourfinder::Result<()> {
    let body = serde_json::to_string_pretty(&reply.body)?;
    println!("{}\n{body}", reply.status);
    Ok(())
}

fn exit_code(reply: &ApiReply) -> ExitCode {
    if reply.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
