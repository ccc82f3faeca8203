use std::{fmt::Display, str::FromStr};

use otter_asp::config::{Config, ConfigOption};

use crate::CliConfig;

/// Sets a config option from the value of an argument, if the value parses and is within bounds.
///
/// Otherwise, a message is sent and the process is terminated.
fn set_option<T>(option: &mut ConfigOption<T>, request: Option<&str>)
where
    T: Clone + Display + FromStr + PartialOrd,
{
    let (min, max) = option.min_max();

    if let Some(value) = request.and_then(|request| request.parse::<T>().ok()) {
        if option.set_within_bounds(value) {
            println!("c {} set to: {}", option.name, option.value);
            return;
        }
    }

    println!("{} requires a value between {min} and {max}", option.name);
    std::process::exit(1);
}

/// Parse CLI arguments to a [Config] struct or a [CliConfig] struct.
///
/// The last argument is the path to a program, and is not examined.
/// If an unrecognised argument or invalid option is found an message is sent and the process is terminated.
pub fn parse_args(args: &[String], cfg: &mut Config, cli_options: &mut CliConfig) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--stats") => {
                println!("c Statistics will be written.");
                cli_options.stats = true;
            }

            Some("--number") | Some("-n") => {
                match split.next().and_then(|request| request.parse::<usize>().ok()) {
                    Some(count) => {
                        match count {
                            0 => println!("c Every answer set will be written."),
                            _ => println!("c At most {count} answer sets will be written."),
                        }
                        cli_options.number = count;
                        continue 'arg_examination;
                    }
                    None => {
                        println!("number requires a count of answer sets, with 0 for all");
                        std::process::exit(1);
                    }
                }
            }

            // The remaining cases follow a common template, see set_option.
            // Further, the cases should be in lexicographic order.
            //
            Some("--atom_bump") => set_option(&mut cfg.atom_bump, split.next()),

            Some("--atom_decay") => set_option(&mut cfg.atom_decay, split.next()),

            Some("--checks") => set_option(&mut cfg.checks, split.next()),

            Some("--decay_period") => set_option(&mut cfg.decay_period, split.next()),

            Some("--glue_lbd") => set_option(&mut cfg.glue_lbd, split.next()),

            Some("--nogood_bump") => set_option(&mut cfg.nogood_bump, split.next()),

            Some("--nogood_decay") => set_option(&mut cfg.nogood_decay, split.next()),

            Some("--phase") => set_option(&mut cfg.phase_initializer, split.next()),

            Some("--phase_saving") => set_option(&mut cfg.phase_saving, split.next()),

            Some("--random_decision_bias") => set_option(&mut cfg.random_decision_bias, split.next()),

            Some("--reboot") => set_option(&mut cfg.reboot, split.next()),

            Some("--reboot_interval") => set_option(&mut cfg.reboot_interval, split.next()),

            Some("--reboot_strategy") => set_option(&mut cfg.reboot_strategy, split.next()),

            Some("--reduction_interval") => set_option(&mut cfg.reduction_interval, split.next()),

            Some("--seed") => set_option(&mut cfg.seed, split.next()),

            Some("--time_limit") => {
                let (min, max) = cfg.time_limit.min_max();
                let min = min.as_secs();
                let max = max.as_secs();

                if let Some(request) = split.next() {
                    if let Ok(seconds) = request.parse::<u64>() {
                        if min <= seconds && seconds <= max {
                            println!("c time_limit set to: {seconds} seconds");
                            cfg.time_limit.value = std::time::Duration::from_secs(seconds);
                            continue 'arg_examination;
                        }
                    }
                }

                println!("time_limit requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--vsids") => set_option(&mut cfg.vsids_variant, split.next()),

            Some(_) | None => {
                println!("Unable to parse argument: {arg:?}");
                std::process::exit(1);
            }
        }
    }
}
