use anyhow::Result;
use clap::Parser;

use overlap_solver::catalog::commands_for_relative_state;
use overlap_solver::rewrite::convert_target_state;
use overlap_solver::solve_command_series;

use args::Cli;

mod args;

const AWAIT_REPEATS: &str = "*Await repeats*";
const DELAY: &str = "*Delay*";

fn separate(s: &str) -> Vec<&str> {
    s.split(',').map(str::trim).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    pretty_env_logger::formatted_builder()
        .parse_filters(verbosity)
        .init();

    let initial_tokens = separate(&cli.initial_state);
    let desired_tokens = separate(&cli.desired_state);

    // Mirrors the awaited-repeats device the original script computes
    // up front from the post-rewrite desired state, for the
    // `--await-repeats` annotation below.
    let rewritten_desired: Vec<String> = if let [single] = desired_tokens.as_slice() {
        vec![convert_target_state(single, &initial_tokens)]
    } else {
        desired_tokens.iter().map(|s| s.to_string()).collect()
    };
    let rewritten_desired_refs: Vec<&str> = rewritten_desired.iter().map(String::as_str).collect();
    let awaitable_commands = commands_for_relative_state(&rewritten_desired_refs.join(", "));

    let cache_path = cli.use_cache.then_some(cli.cache_path.as_path());

    let commandseries = match solve_command_series(cache_path, &initial_tokens, &desired_tokens) {
        Ok(series) => series,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let Some(commandseries) = commandseries else {
        if !cli.machine_readable {
            println!("Not a single solution found!");
        }
        return Ok(());
    };

    if !cli.machine_readable {
        println!("Solution found!");
        println!("Execute the following commands in order:");
    }

    let mut backled_toggled = false;
    let mut frontled_toggled = false;
    let mut potled_toggled = false;
    let mut just_awaited_repeats = false;

    for command in commandseries {
        let (executable, side_effect) = command.effects();

        if cli.avoid_overwhelm {
            let mut add_delay = false;
            let touches = |prefix: &str| executable.starts_with(prefix) || side_effect.is_some_and(|s| s.starts_with(prefix));

            if touches("backled ") {
                if backled_toggled && !just_awaited_repeats {
                    add_delay = true;
                }
                backled_toggled = true;
            }
            if touches("frontled ") {
                if frontled_toggled && !just_awaited_repeats {
                    add_delay = true;
                }
                frontled_toggled = true;
            }
            if touches("potled ") {
                if potled_toggled && !just_awaited_repeats {
                    add_delay = true;
                }
                potled_toggled = true;
            }
            if add_delay {
                println!("{DELAY}");
            }
        }

        just_awaited_repeats = false;

        if cli.machine_readable || side_effect.is_none() {
            println!("{executable}");
        } else {
            println!("{executable} (side-effect: {})", side_effect.unwrap());
        }

        if cli.await_repeats && awaitable_commands.contains(&command) {
            println!("{AWAIT_REPEATS}");
            just_awaited_repeats = true;
        }
    }

    if cli.avoid_overwhelm && (backled_toggled || frontled_toggled || potled_toggled) {
        println!("{DELAY}");
    }

    Ok(())
}
