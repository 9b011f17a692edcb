use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use serde_json::{Map, Value};
use unicode_width::UnicodeWidthStr;

use formz::api::FormApi;
use formz::error::{FormzError, Result};
use formz::model::FieldDescriptor;
use formz::options::{category_options, resolve_category, Category};
use formz::registry::FieldRegistry;
use formz::session::Session;
use formz::submit::{NoticeVariant, Notifier, SubmitOutcome, SubmitTarget};
use formz::templates;
use formz::transport::http::HttpTransport;
use formz::transport::{CredentialMode, Method, Transport, TransportRequest};

mod args;
use args::{Cli, Commands};

const DEFAULT_BASE_URL: &str = "http://localhost:8087/api/v1";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    base_url: String,
    data_dir: PathBuf,
    session: Session,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Signup => handle_signup(&ctx),
        Commands::Login => handle_login(&mut ctx),
        Commands::Logout => handle_logout(&mut ctx),
        Commands::ForgotPassword => handle_forgot_password(&ctx),
        Commands::Expense => handle_expense(&ctx),
        Commands::Plan => handle_plan(&ctx),
        Commands::Session => handle_session(&ctx),
        Commands::Forms => handle_forms(),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "formz", "formz").expect("Could not determine data dir");
    let data_dir = proj_dirs.data_dir().to_path_buf();

    let session = Session::load(&data_dir)?;
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    Ok(AppContext {
        base_url,
        data_dir,
        session,
    })
}

/// Prints notifications the way the web client shows toasts.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str, variant: NoticeVariant) {
        if message.is_empty() {
            return;
        }
        match variant {
            NoticeVariant::Success => println!("{}", message.green()),
            NoticeVariant::Error => println!("{}", message.red()),
        }
    }
}

fn handle_signup(ctx: &AppContext) -> Result<()> {
    let target = SubmitTarget::post("/signup")
        .on_success("Account created. You can now sign in.")
        .on_error("Unable to create account.");
    let mut api = mount(ctx, templates::signup(), target);

    fill_form(&mut api)?;
    api.submit(&Map::new());
    Ok(())
}

fn handle_login(ctx: &mut AppContext) -> Result<()> {
    let target = SubmitTarget::post("/signin")
        .on_success("Signed in.")
        .on_error("Sign-in failed.");
    let mut api = mount(ctx, templates::login(), target);

    fill_form(&mut api)?;
    // The form resets on success; keep the email for the session record.
    let email = api
        .snapshot()
        .get("email")
        .map(|f| f.value.clone())
        .unwrap_or_default();

    if let SubmitOutcome::Completed(response) = api.submit(&Map::new()) {
        let user_id = parse_user_id(&response.body)?;
        ctx.session.sign_in(user_id, email);
        ctx.session.save(&ctx.data_dir)?;
    }
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    let mut transport = HttpTransport::new(ctx.base_url.clone());
    let request = TransportRequest {
        endpoint: "/logout".to_string(),
        method: Method::Get,
        payload: Map::new(),
        credential_mode: CredentialMode::Include,
    };
    // Clear the local session even when the server is unreachable.
    if let Err(e) = transport.send(&request) {
        eprintln!("Warning: logout request failed: {}", e);
    }

    ctx.session.clear();
    ctx.session.save(&ctx.data_dir)?;
    println!("{}", "Signed out.".green());
    Ok(())
}

fn handle_forgot_password(ctx: &AppContext) -> Result<()> {
    let target = SubmitTarget::post("/reset")
        .on_success("Sent email notification to reset password.")
        .on_error("Unable to request a password reset.");
    let mut api = mount(ctx, templates::forgot_password(), target);

    fill_form(&mut api)?;
    api.submit(&Map::new());
    Ok(())
}

fn handle_expense(ctx: &AppContext) -> Result<()> {
    let user_id = require_login(ctx)?;

    let target = SubmitTarget::post("/expenses")
        .on_success("Successfully added new expense report.")
        .on_error("Unable to add new expense report.");
    let mut api = mount(ctx, templates::add_expense(), target);

    fill_form(&mut api)?;

    let mut context = Map::new();
    context.insert("created_by".to_string(), Value::String(user_id));

    let categories = fetch_categories(ctx)?;
    if let Some(name) = prompt_category(&categories)? {
        let id = resolve_category(&categories, &name);
        context.insert("category_id".to_string(), Value::String(id));
        context.insert("category_name".to_string(), Value::String(name));
    }

    api.submit(&context);
    Ok(())
}

fn handle_plan(ctx: &AppContext) -> Result<()> {
    let user_id = require_login(ctx)?;

    let target = SubmitTarget::post("/maintenance-plans")
        .on_success("Successfully created maintenance plan.")
        .on_error("Unable to create maintenance plan.");
    let mut api = mount(ctx, templates::maintenance_plan(), target);

    fill_form(&mut api)?;

    let mut context = Map::new();
    context.insert("created_by".to_string(), Value::String(user_id));
    api.submit(&context);
    Ok(())
}

fn handle_session(ctx: &AppContext) -> Result<()> {
    if !ctx.session.is_authenticated() {
        println!("Not signed in.");
        return Ok(());
    }

    let email = ctx.session.email.as_deref().unwrap_or("<unknown>");
    match ctx.session.signed_in_at {
        Some(at) => {
            let elapsed = chrono::Utc::now()
                .signed_duration_since(at)
                .to_std()
                .unwrap_or_default();
            let ago = timeago::Formatter::new().convert(elapsed);
            println!("Signed in as {} ({})", email.bold(), ago.dimmed());
        }
        None => println!("Signed in as {}", email.bold()),
    }
    Ok(())
}

fn handle_forms() -> Result<()> {
    for (name, build) in templates::TEMPLATES.iter() {
        let registry = build();
        let required = registry.iter().filter(|f| f.required).count();
        println!(
            "{:<20} {} fields, {} required",
            name.bold(),
            registry.len(),
            required
        );
    }
    Ok(())
}

fn mount(
    ctx: &AppContext,
    template: FieldRegistry,
    target: SubmitTarget,
) -> FormApi<HttpTransport, TerminalNotifier> {
    FormApi::new(
        template,
        target,
        HttpTransport::new(ctx.base_url.clone()),
        TerminalNotifier,
    )
}

fn require_login(ctx: &AppContext) -> Result<String> {
    match ctx.session.user_id {
        Some(id) => Ok(id.to_string()),
        None => Err(FormzError::Session(
            "Not signed in. Run `formz login` first.".to_string(),
        )),
    }
}

/// Prompt for every field in display order, re-prompting while the field
/// stays invalid. Each line of input goes through the same `handle_input`
/// path the web client uses per keystroke.
fn fill_form(api: &mut FormApi<HttpTransport, TerminalNotifier>) -> Result<()> {
    let snapshot = api.snapshot();
    let names: Vec<String> = snapshot.iter().map(|f| f.name.clone()).collect();
    let label_width = snapshot
        .iter()
        .map(|f| f.label.width())
        .max()
        .unwrap_or(0);

    for name in names {
        loop {
            let snapshot = api.snapshot();
            let field = snapshot
                .get(&name)
                .ok_or_else(|| FormzError::UnknownField(name.clone()))?;
            let value = prompt_field(field, label_width)?;
            api.handle_input(&name, &value)?;

            let snapshot = api.snapshot();
            let field = snapshot
                .get(&name)
                .ok_or_else(|| FormzError::UnknownField(name.clone()))?;
            if field.has_error() {
                println!("  {}", field.error_msg.red());
                continue;
            }
            if field.required && field.is_blank() {
                println!("  {}", format!("{} is required", field.label).red());
                continue;
            }
            break;
        }
    }
    Ok(())
}

fn prompt_field(field: &FieldDescriptor, label_width: usize) -> Result<String> {
    let marker = if field.required { "*" } else { " " };
    let padding = label_width.saturating_sub(field.label.width());
    print!(
        "{}{}{} {} ",
        field.label.bold(),
        marker.yellow(),
        " ".repeat(padding),
        format!("({})", field.placeholder).dimmed()
    );
    io::stdout().flush()?;

    let secure = field.hints.kind.as_deref() == Some("password");
    let value = if secure {
        console::Term::stdout().read_secure_line()?
    } else {
        read_line()?
    };
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_category(categories: &[Category]) -> Result<Option<String>> {
    let options = category_options(false, categories);
    if !options.is_empty() {
        println!("Categories: {}", options.join(", ").dimmed());
    }
    print!("{} {} ", "Category".bold(), "(blank to skip)".dimmed());
    io::stdout().flush()?;

    let input = read_line()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn fetch_categories(ctx: &AppContext) -> Result<Vec<Category>> {
    let mut transport = HttpTransport::new(ctx.base_url.clone());
    let request = TransportRequest {
        endpoint: "/categories".to_string(),
        method: Method::Get,
        payload: Map::new(),
        credential_mode: CredentialMode::Include,
    };
    // The category list is a convenience; an unreachable server should not
    // block filing the expense.
    match transport.send(&request) {
        Ok(response) => Ok(serde_json::from_value(response.body).unwrap_or_default()),
        Err(_) => Ok(Vec::new()),
    }
}

fn parse_user_id(body: &Value) -> Result<uuid::Uuid> {
    let raw = match body {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("id").and_then(|v| v.as_str()).unwrap_or_default(),
        _ => "",
    };
    raw.parse()
        .map_err(|_| FormzError::Api(format!("Unexpected sign-in response: {}", body)))
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
