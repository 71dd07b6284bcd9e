use super::common::{
    print_info, print_success, print_warning, prompt_confirm, prompt_string,
    report, value_or_prompt,
};
use super::completions;
use crate::app::App;
use crate::geolocation::FALLBACK_COORDINATES;
use crate::models::{Coordinates, Filter, Session, User, Washery};
use crate::screens::{
    describe_error, Listing, ListingMode, LoginScreen, ProfileScreen, RegisterScreen,
    VehicleScreen, WasheryDetailScreen, WasheryListScreen,
};
use crate::state::ViewState;
use crate::utils::{expand_path, PasswordChange, Registration};
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::info;

/// Find and browse car washes from the terminal
#[derive(Parser, Debug)]
#[command(name = "lavajato", version, about = "Find and browse car washes from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL for this invocation (overrides config and LAVAJATO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page index, starting at 0
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Items per page (defaults to listing.page_size from the config)
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with email and password
    Login {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and log in
    Register {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Forget the saved session
    Logout,
    /// Show who is logged in, without contacting the server
    Whoami,
    /// List washeries
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Sort key understood by the server (e.g. "nome")
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Search washeries by name
    Search {
        name: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Filter washeries by rating and location
    Filter {
        /// Minimum average rating
        #[arg(long)]
        min_rating: Option<f64>,
        /// Location as "<lat>,<lng>"
        #[arg(long, conflicts_with = "here", allow_hyphen_values = true)]
        near: Option<Coordinates>,
        /// Use the current location
        #[arg(long)]
        here: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Washeries near you (or near --at)
    Nearby {
        /// Location as "<lat>,<lng>" instead of the detected one
        #[arg(long, allow_hyphen_values = true)]
        at: Option<Coordinates>,
        /// Search radius, in the server's unit
        #[arg(short, long)]
        radius: Option<f64>,
    },
    /// Show a washery and the services it offers
    Show { id: i64 },
    /// Show a single service offering
    Service { id: i64 },
    /// Check that the backend is up
    Health,
    /// Print the location nearby searches would use
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        at: Option<Coordinates>,
    },
    /// View and edit your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
    /// Manage your vehicles
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommand,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Fetch and show your profile
    Show,
    /// Change your name and email
    Update {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Change your password
    Password,
    /// Upload a profile photo
    Photo { path: PathBuf },
    /// Remove your profile photo
    RemovePhoto {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum VehicleCommand {
    /// Register a vehicle
    Add {
        plate: String,
        model: String,
        #[arg(long)]
        color: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let Self { command, api_url } = self;
        if let Commands::Completions { shell } = command {
            return completions::generate(shell);
        }

        let app = App::load(api_url)?;
        match command {
            Commands::Login { email, password } => cmd_login(&app, email, password).await,
            Commands::Register { name, email } => cmd_register(&app, name, email).await,
            Commands::Logout => cmd_logout(&app),
            Commands::Whoami => {
                cmd_whoami(&app);
                Ok(())
            }
            Commands::List { page, sort_by } => {
                cmd_listing(&app, ListingMode::All { sort_by }, page).await
            }
            Commands::Search { name, page } => {
                cmd_listing(&app, ListingMode::Search(name), page).await
            }
            Commands::Filter {
                min_rating,
                near,
                here,
                page,
            } => {
                let coordinates = if here {
                    Some(app.resolve_location(None).await)
                } else {
                    near
                };
                let filter = Filter {
                    min_rating,
                    coordinates,
                };
                cmd_listing(&app, ListingMode::Filter(filter), page).await
            }
            Commands::Nearby { at, radius } => {
                let coordinates = app.resolve_location(at).await;
                print_info(&format!("Searching near {}", coordinates));
                let mode = ListingMode::Nearby {
                    coordinates,
                    radius,
                };
                cmd_listing(&app, mode, PageArgs { page: 0, size: None }).await
            }
            Commands::Show { id } => cmd_show(&app, id).await,
            Commands::Service { id } => cmd_service(&app, id).await,
            Commands::Health => cmd_health(&app).await,
            Commands::Locate { at } => {
                cmd_locate(&app, at).await;
                Ok(())
            }
            Commands::Profile { command } => cmd_profile(&app, command).await,
            Commands::Vehicle { command } => cmd_vehicle(command),
            Commands::Completions { .. } => Ok(()),
        }
    }
}

/// The loaded value, `None` when the screen never got to load, or the
/// screen's error message.
fn outcome<T>(state: &ViewState<T>) -> Result<Option<&T>> {
    match state {
        ViewState::Loaded(value) => Ok(Some(value)),
        ViewState::Failed(message) => bail!("{}", message),
        ViewState::Idle | ViewState::Loading => Ok(None),
    }
}

async fn cmd_login(app: &App, email: Option<String>, password: Option<String>) -> Result<()> {
    let email = value_or_prompt(email, "Email", None)?;
    let password = value_or_prompt(password, "Password", None)?;

    let mut screen = LoginScreen::with_credentials(email, password);
    let action = screen.submit(app.services()).await;
    if let Some(session) = outcome(screen.state())? {
        app.persist_session()?;
        print_success(&format!("Logged in as {}", describe_session(session)));
    }
    report(&action);
    Ok(())
}

async fn cmd_register(app: &App, name: Option<String>, email: Option<String>) -> Result<()> {
    let form = Registration {
        name: value_or_prompt(name, "Name", None)?,
        email: value_or_prompt(email, "Email", None)?,
        password: prompt_string("Password", None)?,
        confirm_password: prompt_string("Confirm password", None)?,
    };

    let mut screen = RegisterScreen::new(form);
    let action = screen.submit(app.services()).await;
    if let Some(session) = outcome(screen.state())? {
        app.persist_session()?;
        print_success(&format!("Account created for {}", describe_session(session)));
    }
    report(&action);
    Ok(())
}

fn cmd_logout(app: &App) -> Result<()> {
    if !app.services().session.is_authenticated() {
        print_info("Not logged in.");
        return Ok(());
    }
    app.services().auth.logout();
    app.persist_session()?;
    print_success("Logged out.");
    Ok(())
}

fn cmd_whoami(app: &App) {
    match app.services().session.current() {
        Some(session) => println!("{}", describe_session(&session)),
        None => print_info("Not logged in."),
    }
}

async fn cmd_listing(app: &App, mode: ListingMode, page: PageArgs) -> Result<()> {
    let mut screen = WasheryListScreen::new(page.size.unwrap_or_else(|| app.page_size()));
    screen.set_mode(mode, page.page);
    let action = screen.load(app.services()).await;
    if let Some(listing) = outcome(screen.state())? {
        print_listing(listing);
    }
    report(&action);
    Ok(())
}

async fn cmd_show(app: &App, id: i64) -> Result<()> {
    let mut screen = WasheryDetailScreen::new(id);
    let action = screen.load(app.services()).await;
    report(&action);
    if let Some(detail) = outcome(screen.state())? {
        print_washery(&detail.washery);
        if detail.services.is_empty() {
            print_info("No services listed.");
        } else {
            println!("Services:");
            for offering in &detail.services {
                println!(
                    "  [{}] {:<30} R$ {:.2}",
                    offering.id, offering.description, offering.price
                );
            }
        }
    }
    Ok(())
}

async fn cmd_service(app: &App, id: i64) -> Result<()> {
    match app.services().catalog.get_by_id(id).await {
        Ok(offering) => {
            println!("{} - R$ {:.2}", offering.description, offering.price);
            println!("Offered by washery {}", offering.washery_id);
            Ok(())
        }
        Err(e) if e.is_not_found() => bail!("Service {} not found.", id),
        Err(e) => bail!("{}", describe_error(&e)),
    }
}

async fn cmd_health(app: &App) -> Result<()> {
    match app.services().washeries.health().await {
        Ok(body) => {
            let body = body.trim();
            print_success(if body.is_empty() { "Backend is up." } else { body });
            Ok(())
        }
        Err(e) => bail!("{}", describe_error(&e)),
    }
}

async fn cmd_locate(app: &App, at: Option<Coordinates>) {
    let coordinates = app.resolve_location(at).await;
    println!("{}", coordinates);
    if at.is_none() && coordinates == FALLBACK_COORDINATES {
        print_warning("Location unavailable; using the default city center.");
    }
}

async fn cmd_profile(app: &App, command: ProfileCommand) -> Result<()> {
    let services = app.services();
    let mut screen = ProfileScreen::new();

    let action = match command {
        ProfileCommand::Show => screen.load(services).await,
        ProfileCommand::Update { name, email } => {
            let current = services.session.current();
            let name = value_or_prompt(
                name,
                "Name",
                current.as_ref().map(|s| s.display_name.as_str()),
            )?;
            let email = value_or_prompt(email, "Email", current.as_ref().map(|s| s.email.as_str()))?;
            screen.save(services, &name, &email).await
        }
        ProfileCommand::Password => {
            let form = PasswordChange {
                current_password: prompt_string("Current password", None)?,
                new_password: prompt_string("New password", None)?,
                confirm_password: prompt_string("Confirm new password", None)?,
            };
            screen.change_password(services, &form).await
        }
        ProfileCommand::Photo { path } => {
            let path = expand_path(&path.to_string_lossy());
            screen.upload_photo(services, &path).await
        }
        ProfileCommand::RemovePhoto { yes } => {
            if !yes && !prompt_confirm("Remove your profile photo?")? {
                print_info("Cancelled.");
                return Ok(());
            }
            screen.remove_photo(services).await
        }
    };

    report(&action);
    if let Some(user) = outcome(screen.state())? {
        print_user(user);
    }
    if services.session.is_authenticated() {
        app.persist_session()?;
    }
    Ok(())
}

fn cmd_vehicle(command: VehicleCommand) -> Result<()> {
    match command {
        VehicleCommand::Add {
            plate,
            model,
            color,
        } => {
            let mut screen = VehicleScreen::new();
            let action = screen.add(&plate, &model, color.as_deref());
            if let Some(message) = screen.state().error() {
                bail!("{}", message);
            }
            report(&action);
            info!("Vehicle screen holds {} vehicle(s)", screen.vehicles().len());
            print_warning("Vehicles are not saved to the server yet.");
            Ok(())
        }
    }
}

fn describe_session(session: &Session) -> String {
    format!(
        "{} <{}> (id {})",
        session.display_name, session.email, session.user_id
    )
}

fn print_listing(listing: &Listing) {
    if listing.items().is_empty() {
        print_info("No washeries found.");
        return;
    }
    for washery in listing.items() {
        println!(
            "  [{}] {} ({:.1}\u{2605}, {} reviews) {}",
            washery.id, washery.name, washery.average_rating, washery.rating_count, washery.address
        );
    }
    if let Some(page) = listing.page() {
        println!(
            "Page {} of {} ({} total)",
            page.number + 1,
            page.total_pages.max(1),
            page.total_elements
        );
    }
}

fn print_washery(washery: &Washery) {
    println!("{} (id {})", washery.name, washery.id);
    println!("  Address: {}", washery.address);
    println!("  Phone:   {}", washery.phone);
    println!("  Email:   {}", washery.email);
    println!(
        "  Rating:  {:.1} ({} reviews)",
        washery.average_rating, washery.rating_count
    );
    if let Some(coordinates) = washery.coordinates {
        println!("  Located: {}", coordinates);
    }
    if !washery.status.is_empty() {
        println!("  Status:  {}", washery.status);
    }
    if !washery.service_types.is_empty() {
        println!("  Offers:  {}", washery.service_types.join(", "));
    }
}

fn print_user(user: &User) {
    println!("{} <{}> (id {})", user.name, user.email, user.id);
    println!(
        "  Photo: {}",
        if user.profile_photo.is_some() { "set" } else { "none" }
    );
}
