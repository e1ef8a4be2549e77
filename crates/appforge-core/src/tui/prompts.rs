//! Interactive init flow using cliclack (Charm-style inline prompts)

use crate::flavor::{Flavor, Framework, SourceLang};
use crate::fsx::fs_exists;
use crate::name::CanonicalNames;
use crate::outcome::CommandOutcome;
use crate::runtime::{react_native_tool, PackageManager};
use crate::scaffold::{check_compatibility, pipeline, BoilerplateFetcher, USER_AGENT};
use anyhow::Result;
use std::path::PathBuf;

/// Upgrade command shown in version warnings.
const UPGRADE_COMMAND: &str = "cargo install appforge-cli --force";

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// App name; prompted for when absent
    pub name: Option<String>,

    /// Flavor key (react-ts, react-js, react-native-ts, react-native-js);
    /// prompted for when absent
    pub flavor: Option<String>,

    /// Local boilerplate index YAML instead of the built-in/remote one
    pub index: Option<PathBuf>,

    /// Skip the react-native CLI installation check
    pub skip_tool_check: bool,

    /// Skip installing dependencies after scaffolding
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the interactive scaffold flow.
pub async fn run_init(args: InitArgs, cli_version: &str) -> Result<CommandOutcome> {
    cliclack::intro("appforge")?;

    // Step 1: flavor
    let flavor = match &args.flavor {
        Some(key) => match parse_flavor_key(key) {
            Some(flavor) => flavor,
            None => {
                return Ok(CommandOutcome::failure(format!(
                    "Unknown flavor '{}'. Expected one of: react-ts, react-js, \
                     react-native-ts, react-native-js",
                    key
                )))
            }
        },
        None => select_flavor()?,
    };

    // Step 2: app name
    let raw_name = match &args.name {
        Some(name) => {
            if let Err(reason) = validate_app_name(name) {
                return Ok(CommandOutcome::failure(reason));
            }
            name.clone()
        }
        None => cliclack::input("Name of your app (alphanumeric)")
            .validate(|s: &String| validate_app_name(s))
            .interact()?,
    };
    let names = CanonicalNames::derive(&raw_name);

    // Step 3: existence gate on the target directory
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let target = current_dir.join(&raw_name);
    if fs_exists(&target).await {
        return Ok(CommandOutcome::failure(format!(
            "./{} already exists. Delete it or pick another name.",
            raw_name
        )));
    }

    // Step 4: resolve the boilerplate
    let fetcher = BoilerplateFetcher::new(USER_AGENT);

    let spinner = cliclack::spinner();
    spinner.start("Loading boilerplate index...");
    let boilerplate_index = match fetcher.load_index(args.index.as_deref()).await {
        Ok(index) => {
            spinner.stop("Boilerplate index loaded");
            index
        }
        Err(e) => {
            spinner.stop("Failed to load boilerplate index");
            return Err(e);
        }
    };

    let Some(spec) = boilerplate_index.find(&flavor) else {
        return Ok(CommandOutcome::failure(format!(
            "No boilerplate available for {}.",
            flavor.display_name()
        )));
    };
    cliclack::log::info(format!("{} - {}", spec.name, spec.description))?;

    if let Some(warning) = check_compatibility(cli_version, &spec.version, UPGRADE_COMMAND) {
        cliclack::log::warning(warning)?;
    }

    // Step 5: react-native CLI check
    if flavor.framework == Framework::ReactNative && !args.skip_tool_check {
        match handle_tool_check(&args).await? {
            ToolCheck::Proceed => {}
            ToolCheck::Abort(outcome) => return Ok(outcome),
        }
    } else if args.skip_tool_check {
        cliclack::log::info("Skipping tool check")?;
    }

    // Step 6: scaffold pipeline
    tokio::fs::create_dir_all(&target).await?;

    let nested_native = if flavor.framework == Framework::ReactNative {
        cliclack::log::info("Setting up the native project...")?;
        Some(pipeline::init_native_project(&names, &target).await?)
    } else {
        None
    };

    let spinner = cliclack::spinner();
    spinner.start(format!("Downloading boilerplate '{}'...", spec.name));
    let archive = match fetcher.fetch_archive(spec).await {
        Ok(bytes) => bytes,
        Err(e) => {
            spinner.stop("Download failed");
            return Err(e);
        }
    };
    let unpacked = crate::scaffold::unpack_archive(&archive, &target)?;
    spinner.stop(format!("Unpacked {} files into {}", unpacked, target.display()));

    pipeline::remove_vcs_dir(&target).await?;
    if let Some(nested) = &nested_native {
        pipeline::overlay_native_dirs(nested, &target).await?;
    }
    pipeline::brand_project(&target, &names, &flavor).await?;
    flavor.write_markers(&target).await?;

    // Step 7: dependencies
    if !args.skip_install {
        let install = if args.yes {
            true
        } else {
            cliclack::confirm("Install dependencies now?")
                .initial_value(true)
                .interact()?
        };
        if install {
            let pm = PackageManager::detect();
            cliclack::log::info(format!("Installing dependencies with {}...", pm.program()))?;
            pm.install(&target).await?;
        }
    }

    // Step 8: next steps
    print_next_steps(&raw_name, &flavor)?;

    Ok(CommandOutcome::success_with(format!(
        "Created {} successfully.",
        raw_name
    )))
}

fn validate_app_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        Err("please provide a name for your app")
    } else if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        Err("app name must be alphanumeric")
    } else {
        Ok(())
    }
}

fn parse_flavor_key(key: &str) -> Option<Flavor> {
    match key.to_ascii_lowercase().as_str() {
        "react-ts" => Some(Flavor::new(Framework::React, SourceLang::TypeScript)),
        "react-js" => Some(Flavor::new(Framework::React, SourceLang::PlainSource)),
        "react-native-ts" => Some(Flavor::new(Framework::ReactNative, SourceLang::TypeScript)),
        "react-native-js" => Some(Flavor::new(Framework::ReactNative, SourceLang::PlainSource)),
        _ => None,
    }
}

fn select_flavor() -> Result<Flavor> {
    let flavor: Flavor = cliclack::select("Which app do you want to generate?")
        .item(
            Flavor::new(Framework::React, SourceLang::TypeScript),
            "React App (TypeScript)",
            "",
        )
        .item(
            Flavor::new(Framework::React, SourceLang::PlainSource),
            "React App (JavaScript)",
            "",
        )
        .item(
            Flavor::new(Framework::ReactNative, SourceLang::TypeScript),
            "React Native App (TypeScript)",
            "",
        )
        .item(
            Flavor::new(Framework::ReactNative, SourceLang::PlainSource),
            "React Native App (JavaScript)",
            "",
        )
        .interact()?;
    Ok(flavor)
}

enum ToolCheck {
    Proceed,
    Abort(CommandOutcome),
}

async fn handle_tool_check(args: &InitArgs) -> Result<ToolCheck> {
    let tool = react_native_tool();

    if tool.is_installed() {
        let version = tool.get_version().unwrap_or_else(|| "unknown".to_string());
        cliclack::log::success(format!(
            "{} installed ({})",
            tool.config().display_name,
            version
        ))?;
        return Ok(ToolCheck::Proceed);
    }

    cliclack::log::warning(format!("{} is not installed", tool.config().display_name))?;

    if args.yes {
        cliclack::log::info(format!(
            "Continuing without {} (--yes mode)",
            tool.config().display_name
        ))?;
        return Ok(ToolCheck::Proceed);
    }

    let action: &str = cliclack::select("What would you like to do?")
        .item(
            "install",
            format!("Install {} automatically", tool.config().display_name),
            "",
        )
        .item(
            "docs",
            format!("Open setup documentation ({})", tool.config().docs_url),
            "",
        )
        .item(
            "skip",
            format!("Skip and continue without {}", tool.config().display_name),
            "",
        )
        .interact()?;

    match action {
        "install" => {
            cliclack::log::info(format!("This will execute: {}", tool.install_command()))?;

            let confirm: bool = cliclack::confirm("Proceed with installation?")
                .initial_value(true)
                .interact()?;

            if !confirm {
                cliclack::log::info(format!(
                    "Continuing without {}. Setup instructions: {}",
                    tool.config().display_name,
                    tool.config().docs_url
                ))?;
                return Ok(ToolCheck::Proceed);
            }

            match tool.install().await {
                Ok(_) => {
                    cliclack::log::success(format!(
                        "{} installed successfully",
                        tool.config().display_name
                    ))?;
                    Ok(ToolCheck::Proceed)
                }
                Err(e) => {
                    cliclack::log::error(format!("{}", e))?;

                    let continue_anyway: bool = cliclack::confirm(format!(
                        "Continue without {}?",
                        tool.config().display_name
                    ))
                    .initial_value(false)
                    .interact()?;

                    if continue_anyway {
                        Ok(ToolCheck::Proceed)
                    } else {
                        Ok(ToolCheck::Abort(CommandOutcome::failure("Setup cancelled.")))
                    }
                }
            }
        }
        "docs" => {
            tool.open_docs()?;
            cliclack::outro(format!(
                "After installing {}, run this command again.",
                tool.config().display_name
            ))?;
            Ok(ToolCheck::Abort(CommandOutcome::success()))
        }
        _ => {
            cliclack::log::info(format!(
                "Continuing without {}. Setup instructions: {}",
                tool.config().display_name,
                tool.config().docs_url
            ))?;
            Ok(ToolCheck::Proceed)
        }
    }
}

fn print_next_steps(name: &str, flavor: &Flavor) -> Result<()> {
    let mut steps = vec![format!("cd {}", name), "appforge start".to_string()];
    if flavor.framework == Framework::ReactNative {
        steps.push("npm run ios (from another terminal)".to_string());
    }

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
