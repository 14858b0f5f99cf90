//! Headless front end: load content, replay a script, report, save.

use anyhow::{Context, Result};
use clap::Parser;

use runepad::cli::{CliArgs, DumpKind};
use runepad::config::EditorConfig;
use runepad::debug_dump::{LayoutDump, StateDump};
use runepad::script::{load_script_file, run_script};
use runepad::session::EditorSession;
use runepad::startup::{load_initial_content, save_scratch};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    runepad::tracing::init();

    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    let mut config = EditorConfig::load();
    if let Some(zoom) = startup.zoom {
        config.zoom = zoom;
    }

    let cwd = std::env::current_dir().context("resolving working directory")?;
    let content = load_initial_content(&startup.mode, &cwd)?;
    let mut session = EditorSession::with_config(&content, &config, startup.width, startup.height);
    tracing::info!(
        lines = session.document().line_count(),
        mode = ?startup.mode,
        "session started"
    );

    if let Some(path) = &startup.script {
        let messages = load_script_file(path)
            .with_context(|| format!("loading script {}", path.display()))?;
        tracing::info!(steps = messages.len(), "replaying {}", path.display());
        run_script(&mut session, messages);
    }

    if let Some((x, y)) = startup.hit {
        let pos = session.hit_test(x, y);
        println!("{} {}", pos.row, pos.col);
    }

    match startup.dump {
        Some(DumpKind::Layout) => println!("{}", LayoutDump::from_layout(session.layout()).to_json()),
        Some(DumpKind::State) => println!("{}", StateDump::from_session(&mut session).to_json()),
        Some(DumpKind::Text) => print!("{}", session.text()),
        None => {}
    }

    if startup.save_on_exit {
        save_scratch(&cwd, &session.text())?;
    }

    Ok(())
}
