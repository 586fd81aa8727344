//! `classclash layout` command

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use crate::cli::LayoutArgs;
use crate::GlobalOptions;
use classclash::ops::inspect_layout;
use classclash::util::{Config, Prompter, Status};

pub fn execute(args: LayoutArgs, global_opts: &GlobalOptions) -> Result<()> {
    let shell = &global_opts.shell;
    let config = Config::load_optional(args.config.as_deref())?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let root = match args.root {
        Some(root) => root,
        None => PathBuf::from(prompter.ask_line("JBoss/WildFly home: ", "the server home")?),
    };

    let (layout, deployables) = inspect_layout(&root, &config)?;
    shell.status(
        Status::Found,
        format!("{} layout at {}", layout.kind, layout.layout_dir.display()),
    );

    prompter.say(format!("layout:      {}", layout.kind))?;
    prompter.say(format!("layout dir:  {}", layout.layout_dir.display()))?;
    prompter.say(format!("deploy dir:  {}", layout.deploy_dir.display()))?;
    prompter.say(format!("lib dir:     {}", layout.lib_dir().display()))?;
    prompter.say("deployables:")?;
    for (i, deployable) in deployables.iter().enumerate() {
        let kind = if deployable.is_exploded() {
            "exploded"
        } else {
            "packed"
        };
        prompter.say(format!("  [{}] {} ({})", i + 1, deployable.name, kind))?;
    }

    Ok(())
}
