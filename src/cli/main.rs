use otter_asp::{config::Config, context::Context, reports::Report};

use parse_args::parse_args;
use read::read_program;

mod parse_args;
mod read;

/// Options of the cli, which are not options of a context.
#[derive(Default)]
pub struct CliConfig {
    /// The count of answer sets to write, with 0 for all.
    pub number: usize,

    /// Whether to write statistics of the solve.
    pub stats: bool,
}

fn main() {
    #[cfg(feature = "cli-log")]
    env_logger::init();

    let mut cli_options = CliConfig {
        number: 1,
        ..Default::default()
    };
    let mut cfg = Config::default();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("c Path to a program required");
        std::process::exit(1);
    }

    parse_args(&args, &mut cfg, &mut cli_options);

    let mut ctx: Context = Context::from_config(cfg);

    let path = args.last().map(String::as_str).unwrap_or_default();
    let store = match read_program(path, &mut ctx) {
        Ok(store) => store,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let mut found = 0;
    for answer_set in ctx.answer_sets() {
        match answer_set {
            Ok(answer_set) => {
                found += 1;
                println!("Answer: {found}");
                println!("{}", store.names_of(&answer_set).join(" "));
            }

            Err(e) => {
                println!("c Solve error: {e}");
                std::process::exit(2);
            }
        }

        if found == cli_options.number {
            break;
        }
    }

    let report = ctx.report();
    println!("{report}");

    if cli_options.stats {
        let counters = &ctx.counters;
        println!("c answer sets                  {}", counters.answer_sets);
        println!("c conflicts                    {}", counters.total_conflicts);
        println!("c reboots                      {}", counters.reboots);
        println!("c time                         {:.2?}", counters.time);
        println!("{}", ctx.statistics());
    }

    let code = match report {
        Report::Satisfiable => 10,
        Report::Unsatisfiable => 20,
        Report::Unknown => 0,
    };
    std::process::exit(code);
}
