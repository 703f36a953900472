use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::attachment;
use crate::io::store;
use crate::model::{ProjectDraft, ProjectId, Technology};
use crate::ops::query::{self, SortKey, TechFilter};
use crate::ops::reducer::{self, Command, Outcome};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = resolve_dir(cli.dir.as_deref())?;

    match cli.command {
        // No subcommand launches the TUI; main.rs handles that before dispatch
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(&dir, args),
            Commands::List(args) => cmd_list(&dir, args, json),
            Commands::Show(args) => cmd_show(&dir, args, json),
            Commands::Edit(args) => cmd_edit(&dir, args),
            Commands::Delete(args) => cmd_delete(&dir, args),
            Commands::Path => {
                println!("{}", store::portfolio_path(&dir).display());
                Ok(())
            }
        },
    }
}

/// Resolve the working directory, honoring -C
pub fn resolve_dir(dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match dir {
        Some(d) => std::fs::canonicalize(d)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e).into()),
        None => Ok(std::env::current_dir()?),
    }
}

// ---------------------------------------------------------------------------
// Read handlers
// ---------------------------------------------------------------------------

fn cmd_list(dir: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = store::load_portfolio(dir);

    let sort = match args.sort.as_deref() {
        Some(s) => Some(
            SortKey::parse(s)
                .ok_or_else(|| format!("unknown sort order '{}' (newest, oldest, a-z, z-a)", s))?,
        ),
        None => None,
    };
    let filter = match args.tech.as_deref() {
        Some(t) => TechFilter::parse(t)
            .ok_or_else(|| format!("unknown technology '{}' (or \"all\")", t))?,
        None => TechFilter::All,
    };

    let visible = query::visible_projects(&portfolio.projects, sort, filter);

    if json {
        let out: Vec<ProjectJson> = visible.iter().map(project_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for project in &visible {
            println!("{}", format_project_row(project));
        }
    }
    Ok(())
}

fn cmd_show(dir: &Path, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let portfolio = store::load_portfolio(dir);
    let project = portfolio
        .get(ProjectId(args.id))
        .ok_or_else(|| format!("project not found: {}", args.id))?;

    if let Some(out_dir) = &args.save_attachment {
        let attachment = project
            .attachment
            .as_ref()
            .ok_or_else(|| format!("no attachment on project {}", args.id))?;
        let written = attachment::save_to_dir(attachment, Path::new(out_dir))?;
        println!("saved {}", written.display());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&project_to_json(project))?);
    } else {
        for line in format_project_detail(project) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write handlers
// ---------------------------------------------------------------------------

fn cmd_add(dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut portfolio = store::load_portfolio(dir);

    let draft = ProjectDraft {
        name: args.name,
        start_date: parse_date(args.start.as_deref())?,
        end_date: parse_date(args.end.as_deref())?,
        description: args.desc.unwrap_or_default(),
        technologies: parse_techs(&args.tech)?,
        attachment: match args.file.as_deref() {
            Some(file) => Some(attachment::encode_file(Path::new(file))?),
            None => None,
        },
    };

    match reducer::apply(&mut portfolio, Command::Create(draft)) {
        Outcome::Created(id) => {
            store::save_portfolio(dir, &portfolio)?;
            println!("{}", id);
            Ok(())
        }
        Outcome::Rejected(reason) => Err(reason.into()),
        other => unreachable!("create produced {:?}", other),
    }
}

fn cmd_edit(dir: &Path, args: EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut portfolio = store::load_portfolio(dir);
    let id = ProjectId(args.id);
    let existing = portfolio
        .get(id)
        .ok_or_else(|| format!("project not found: {}", args.id))?;

    let mut draft = ProjectDraft::from_project(existing);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(start) = parse_date(args.start.as_deref())? {
        draft.start_date = Some(start);
    }
    if let Some(end) = parse_date(args.end.as_deref())? {
        draft.end_date = Some(end);
    }
    if let Some(desc) = args.desc {
        draft.description = desc;
    }
    if !args.tech.is_empty() {
        draft.technologies = parse_techs(&args.tech)?;
    }
    if args.clear_file {
        draft.attachment = None;
    }
    if let Some(file) = args.file.as_deref() {
        draft.attachment = Some(attachment::encode_file(Path::new(file))?);
    }

    match reducer::apply(&mut portfolio, Command::Update(id, draft)) {
        Outcome::Updated(id) => {
            store::save_portfolio(dir, &portfolio)?;
            println!("updated {}", id);
            Ok(())
        }
        Outcome::Appended(id) => {
            store::save_portfolio(dir, &portfolio)?;
            println!("added {}", id);
            Ok(())
        }
        Outcome::Rejected(reason) => Err(reason.into()),
        other => unreachable!("update produced {:?}", other),
    }
}

fn cmd_delete(dir: &Path, args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut portfolio = store::load_portfolio(dir);
    let id = ProjectId(args.id);
    let name = portfolio
        .get(id)
        .map(|p| p.name.clone())
        .ok_or_else(|| format!("project not found: {}", args.id))?;

    if !args.yes {
        eprint!("Delete \"{}\"? [y/n] ", name);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("cancelled");
            return Ok(());
        }
    }

    match reducer::apply(&mut portfolio, Command::Delete(id)) {
        Outcome::Deleted(project) => {
            store::save_portfolio(dir, &portfolio)?;
            println!("deleted \"{}\"", project.name);
            Ok(())
        }
        Outcome::Rejected(reason) => Err(reason.into()),
        other => unreachable!("delete produced {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

fn parse_date(s: Option<&str>) -> Result<Option<NaiveDate>, Box<dyn std::error::Error>> {
    match s {
        None => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| format!("invalid date '{}' (expected YYYY-MM-DD)", s).into()),
    }
}

fn parse_techs(slugs: &[String]) -> Result<Vec<Technology>, Box<dyn std::error::Error>> {
    let mut techs = Vec::new();
    for slug in slugs {
        let tech = Technology::from_slug(slug)
            .ok_or_else(|| format!("unknown technology '{}'", slug))?;
        if !techs.contains(&tech) {
            techs.push(tech);
        }
    }
    Ok(techs)
}
