use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use hcu_catalog::{CatalogCache, UnitCatalog, unit_image};
use hcu_cli::profile::Profile;
use hcu_cli::settings::Settings;
use hcu_core::{Session, WizardStep};
use hcu_export::{serialize, write_artifact};
use hcu_persistence::{SessionFile, load_session_if_exists, save_session};
use hcu_validate::{gate_export, validate};

use crate::cli::{Cli, ExportArgs};
use crate::summary::{
    print_apply_report, print_capabilities, print_session, print_unit, print_units,
    print_validation,
};

/// Settings, catalog and session location shared by every command.
pub struct AppContext {
    settings: Settings,
    catalog: CatalogCache,
    session_path: PathBuf,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = Settings::load_optional(cli.config.as_deref())?;
        let catalog_path = settings.catalog_path(cli.catalog.as_deref());
        let session_path = settings.session_path(cli.session.as_deref());
        Ok(Self {
            settings,
            catalog: CatalogCache::new(catalog_path),
            session_path,
        })
    }

    fn catalog_fingerprint(&mut self) -> Option<String> {
        self.catalog
            .get()
            .ok()
            .and_then(UnitCatalog::fingerprint)
            .map(str::to_string)
    }

    /// Load the saved session, or start a new one. A session without a unit
    /// gets the default unit preselected.
    fn load_session(&mut self) -> Result<Session> {
        let saved = match load_session_if_exists(&self.session_path) {
            Ok(saved) => saved,
            Err(error) => {
                eprintln!("error: {}", error.user_message());
                if let Some(hint) = error.suggestion() {
                    eprintln!("hint: {hint}");
                }
                return Err(error).context("load session");
            }
        };
        let mut session = match saved {
            Some(file) => {
                if file.catalog_changed(self.catalog_fingerprint().as_deref()) {
                    warn!(
                        session = %self.session_path.display(),
                        "unit catalog changed since the session was saved"
                    );
                }
                file.into_session()
            }
            None => Session::new(),
        };
        self.preselect_default_unit(&mut session);
        Ok(session)
    }

    fn preselect_default_unit(&mut self, session: &mut Session) {
        if session.state.unit().is_some() {
            return;
        }
        match self.catalog.get() {
            Ok(catalog) => {
                if session.preselect_default_unit(catalog) {
                    info!("default unit preselected");
                }
            }
            Err(error) => warn!(%error, "unit catalog unavailable; no unit preselected"),
        }
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        let mut file = SessionFile::new(session, self.catalog_fingerprint());
        save_session(&self.session_path, &mut file).context("save session")
    }
}

pub fn run_units(context: &mut AppContext) -> Result<i32> {
    match context.catalog.get() {
        Ok(catalog) => {
            print_units(catalog);
            Ok(0)
        }
        Err(error) if error.is_data_load() => {
            eprintln!("warning: unit catalog unavailable: {error}");
            print_units(&UnitCatalog::empty());
            Ok(1)
        }
        Err(error) => Err(error.into()),
    }
}

pub fn run_unit(context: &mut AppContext, unit_id: &str) -> Result<()> {
    let figures_dir = context.settings.figures_dir(context.catalog.path());
    let catalog = context.catalog.get().context("load unit catalog")?;
    let unit = catalog.lookup(unit_id)?;
    let image = unit_image(&figures_dir, &unit.unit_id, unit.category);
    print_unit(unit, &image);
    Ok(())
}

pub fn run_capabilities() {
    print_capabilities();
}

pub fn run_apply(context: &mut AppContext, profile_path: &Path) -> Result<()> {
    let profile = Profile::load(profile_path)?;
    let mut session = context.load_session()?;
    let catalog = context.catalog.get().context("load unit catalog")?;
    let report = profile
        .apply(&mut session.state, catalog)
        .with_context(|| format!("apply profile {}", profile_path.display()))?;
    session.goto(WizardStep::Results);
    context.save_session(&session)?;
    print_apply_report(&report);
    Ok(())
}

pub fn run_show(context: &mut AppContext) -> Result<()> {
    let session = context.load_session()?;
    print_session(&session);
    Ok(())
}

pub fn run_validate(context: &mut AppContext) -> Result<i32> {
    let session = context.load_session()?;
    let result = validate(&session.state);
    print_validation(&result);
    Ok(if result.ok { 0 } else { 1 })
}

pub fn run_export(context: &mut AppContext, args: &ExportArgs) -> Result<i32> {
    let mut session = context.load_session()?;
    let result = validate(&session.state);
    let gate = gate_export(&result);
    if gate.block_export {
        print_validation(&result);
        eprintln!(
            "error: export blocked by: {}",
            gate.blocking_fields.join(", ")
        );
        return Ok(1);
    }

    let artifact = serialize(&session.state, &context.settings.export.header)
        .context("render configuration file")?;
    if args.stdout {
        print!("{}", artifact.text());
    } else {
        let output_dir = context.settings.output_dir(args.output_dir.as_deref());
        let path = write_artifact(&output_dir, &artifact).context("write configuration file")?;
        info!(path = %path.display(), "configuration exported");
        println!("Wrote {}", path.display());
    }

    session.goto(WizardStep::Export);
    context.save_session(&session)?;
    Ok(0)
}

pub fn run_login(context: &mut AppContext, name: &str) -> Result<()> {
    let mut session = context.load_session()?;
    session.login(name);
    context.save_session(&session)?;
    println!("Logged in as {name}");
    Ok(())
}

pub fn run_clear(context: &mut AppContext) -> Result<()> {
    let mut session = context.load_session()?;
    session.clear_configuration();
    context.preselect_default_unit(&mut session);
    context.save_session(&session)?;
    println!("Configuration cleared");
    Ok(())
}

pub fn run_logout(context: &mut AppContext) -> Result<()> {
    let mut session = context.load_session()?;
    session.logout();
    context.save_session(&session)?;
    println!("Logged out");
    Ok(())
}
